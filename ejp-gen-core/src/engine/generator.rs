use super::consensus::consensus_set;
use super::prediction_input::{Method, PredictionInput};
use super::result_set::ResultSet;
use super::rng::{Mulberry32, RandomSource, SystemRandom};
use super::variants::generate_set;

/// Factory producing a fresh ambient source for every unseeded request.
type AmbientFactory = Box<dyn Fn() -> Box<dyn RandomSource> + Send + Sync>;

/// High-level interface for generating prediction sets.
///
/// # Responsibilities
/// - Derive one random source per request: seed text folds into a
///   deterministic mixing generator, no seed pulls a fresh ambient source
/// - Run the selected method `sets` times against that single source
/// - Reject contract violations instead of clamping them
///
/// Sets of one request share one advancing stream: set N+1 starts where
/// set N stopped, so a request's whole output is one trajectory.
pub struct Generator {
	ambient: AmbientFactory,
}

impl Generator {
	/// Creates a generator whose unseeded requests use platform randomness.
	pub fn new() -> Self {
		Self::with_ambient_source(Box::new(|| Box::new(SystemRandom::new())))
	}

	/// Creates a generator with a substitute ambient source factory.
	///
	/// Lets embedders swap the platform randomness behind unseeded
	/// requests for a fixed-sequence source.
	pub fn with_ambient_source(ambient: AmbientFactory) -> Self {
		Self { ambient }
	}

	/// Generates `input.sets` result sets with `input.method`.
	///
	/// # Behavior
	/// - Seeded requests are fully reproducible: equal seed text, method
	///   and set count give equal output on any platform
	/// - The first sets of a request are a prefix of any longer request
	///   with the same seed and method
	///
	/// # Errors
	/// Returns an error if `input.sets` is zero.
	pub fn predict(&self, input: &PredictionInput) -> Result<Vec<ResultSet>, String> {
		if input.sets == 0 {
			return Err("Sets must be at least 1".to_owned());
		}

		let mut rand = self.derive_source(input.seed.as_deref());
		let mut sets = Vec::with_capacity(input.sets);
		for _ in 0..input.sets {
			sets.push(match input.method {
				Method::Algorithm(algorithm) => generate_set(algorithm, rand.as_mut()),
				Method::Consensus => consensus_set(rand.as_mut()),
			});
		}

		Ok(sets)
	}

	/// One derived source per request, never shared across requests.
	fn derive_source(&self, seed: Option<&str>) -> Box<dyn RandomSource> {
		match seed {
			Some(text) if !text.is_empty() => Box::new(Mulberry32::from_text(text)),
			_ => (self.ambient)(),
		}
	}
}

impl Default for Generator {
	fn default() -> Self {
		Self::new()
	}
}
