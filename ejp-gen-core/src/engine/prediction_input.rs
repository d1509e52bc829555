use std::str::FromStr;

use super::variants::Algorithm;

/// Generation method selected for a request.
///
/// # Variants
/// - `Algorithm(..)`: one of the four weight-shaping algorithms, run
///   directly.
/// - `Consensus`: every algorithm runs four times on the same stream and
///   the most-voted numbers win.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
	Algorithm(Algorithm),
	Consensus,
}

impl Method {
	/// The wire key of this method.
	pub fn key(&self) -> &'static str {
		match self {
			Method::Algorithm(algorithm) => algorithm.key(),
			Method::Consensus => "consensus",
		}
	}
}

impl FromStr for Method {
	type Err = String;

	fn from_str(key: &str) -> Result<Self, Self::Err> {
		if key == "consensus" {
			return Ok(Method::Consensus);
		}
		Algorithm::from_str(key).map(Method::Algorithm).map_err(|_| {
			format!(
				"Unknown method '{key}', expected statistical, ml_ensemble, quantum, neural or consensus"
			)
		})
	}
}

/// Input parameters for one generation request.
///
/// # Responsibilities
/// - Carry the selected method, the number of sets to emit and the
///   optional seed text
/// - Map one request to one derived random source: all `sets` sets
///   advance that single stream in order
///
/// # Invariants
/// - `sets >= 1` (enforced by `Generator::predict`)
/// - An empty seed behaves exactly like an absent one
#[derive(Clone, Debug)]
pub struct PredictionInput {
	/// Selected generation method.
	pub method: Method,

	/// Number of result sets to emit from the derived source.
	pub sets: usize,

	/// Optional reproducibility token; `None` or empty means ambient
	/// platform randomness.
	pub seed: Option<String>,
}

impl PredictionInput {
	/// Creates a single-set, unseeded request for `method`.
	pub fn new(method: Method) -> Self {
		Self { method, sets: 1, seed: None }
	}
}

impl Default for PredictionInput {
	fn default() -> Self {
		Self::new(Method::Algorithm(Algorithm::Statistical))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn method_keys_round_trip() {
		let methods = [
			Method::Algorithm(Algorithm::Statistical),
			Method::Algorithm(Algorithm::MlEnsemble),
			Method::Algorithm(Algorithm::Quantum),
			Method::Algorithm(Algorithm::Neural),
			Method::Consensus,
		];
		for method in methods {
			assert_eq!(method.key().parse::<Method>(), Ok(method));
		}
	}

	#[test]
	fn unknown_method_is_rejected_with_the_valid_keys() {
		let error = "oracle".parse::<Method>().unwrap_err();
		assert!(error.contains("oracle"));
		assert!(error.contains("consensus"));
	}
}
