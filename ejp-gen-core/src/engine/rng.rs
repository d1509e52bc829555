use rand::Rng;
use rand::rngs::ThreadRng;

/// FNV-1a offset basis (32-bit).
const FNV_OFFSET: u32 = 2166136261;

/// FNV-1a prime (32-bit).
const FNV_PRIME: u32 = 16777619;

/// Uniform random source over [0, 1).
///
/// # Invariants
/// - Every call advances the implementor's internal state exactly once
/// - Returned values are always in [0, 1)
///
/// Seeded trajectories are defined by draw count: any component that
/// consumes a draw must consume it on every code path.
pub trait RandomSource {
	/// Next uniform value in [0, 1).
	fn next_f64(&mut self) -> f64;
}

/// Folds seed text into one 32-bit state word (FNV-1a).
///
/// Hashes the UTF-16 code units of the text, so any Unicode seed is
/// accepted and a one-character change flips the resulting trajectory.
pub fn hash_seed(text: &str) -> u32 {
	let mut hash = FNV_OFFSET;
	for unit in text.encode_utf16() {
		hash ^= u32::from(unit);
		hash = hash.wrapping_mul(FNV_PRIME);
	}
	hash
}

/// Mixing generator holding a single 32-bit state word.
///
/// # Behavior
/// Each draw advances the state by a fixed odd increment, then applies two
/// multiply/xor-shift avalanche rounds and normalizes the result by 2^32.
/// All arithmetic wraps at 32 bits; widening any step changes every
/// subsequent value of a seeded trajectory.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
	state: u32,
}

impl Mulberry32 {
	/// Creates a generator from a raw 32-bit state word.
	pub fn new(state: u32) -> Self {
		Self { state }
	}

	/// Creates a generator from seed text via the FNV-1a fold.
	pub fn from_text(seed: &str) -> Self {
		Self::new(hash_seed(seed))
	}
}

impl RandomSource for Mulberry32 {
	fn next_f64(&mut self) -> f64 {
		self.state = self.state.wrapping_add(0x6D2B79F5);
		let mut t = self.state;
		t = (t ^ (t >> 15)).wrapping_mul(t | 1);
		t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
		f64::from(t ^ (t >> 14)) / 4294967296.0
	}
}

/// Linear congruential generator over one 32-bit word.
///
/// # Behavior
/// - `next_u32` advances `state = state * 1664525 + 1013904223` (wrapping)
///   and returns the raw state
/// - The uniform view keeps the last three decimal digits:
///   `(state % 1000) / 1000`
#[derive(Clone, Debug)]
pub struct Lcg32 {
	state: u32,
}

impl Lcg32 {
	/// Creates a generator from a raw 32-bit state word.
	pub fn new(state: u32) -> Self {
		Self { state }
	}

	/// Advances the state and returns it raw.
	pub fn next_u32(&mut self) -> u32 {
		self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
		self.state
	}
}

impl RandomSource for Lcg32 {
	fn next_f64(&mut self) -> f64 {
		f64::from(self.next_u32() % 1000) / 1000.0
	}
}

/// Non-reproducible source backed by the platform generator.
///
/// Used for requests that carry no seed text. Two instances never share
/// a trajectory.
pub struct SystemRandom {
	rng: ThreadRng,
}

impl SystemRandom {
	/// Creates a source over the calling thread's generator.
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for SystemRandom {
	fn default() -> Self {
		Self::new()
	}
}

impl RandomSource for SystemRandom {
	fn next_f64(&mut self) -> f64 {
		self.rng.random()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_seed_matches_reference_vectors() {
		// FNV-1a 32-bit reference values.
		assert_eq!(hash_seed(""), 2166136261);
		assert_eq!(hash_seed("a"), 0xE40C292C);
	}

	#[test]
	fn hash_seed_accepts_non_ascii() {
		// Astral-plane characters fold as two UTF-16 units.
		assert_ne!(hash_seed("🎰"), hash_seed(""));
		assert_ne!(hash_seed("é"), hash_seed("e"));
	}

	#[test]
	fn mulberry_same_state_same_trajectory() {
		let mut a = Mulberry32::new(123456789);
		let mut b = Mulberry32::new(123456789);
		for _ in 0..100 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}

	#[test]
	fn mulberry_text_seeds_diverge() {
		let mut a = Mulberry32::from_text("seed-a");
		let mut b = Mulberry32::from_text("seed-b");
		let first: Vec<f64> = (0..4).map(|_| a.next_f64()).collect();
		let second: Vec<f64> = (0..4).map(|_| b.next_f64()).collect();
		assert_ne!(first, second);
	}

	#[test]
	fn mulberry_stays_in_unit_interval() {
		for state in [0, 1, 42, u32::MAX] {
			let mut rng = Mulberry32::new(state);
			for _ in 0..200 {
				let value = rng.next_f64();
				assert!((0.0..1.0).contains(&value), "{value} out of range");
			}
		}
	}

	#[test]
	fn lcg_first_steps_match_constants() {
		assert_eq!(Lcg32::new(0).next_u32(), 1013904223);
		assert_eq!(Lcg32::new(1).next_u32(), 1015568748);
	}

	#[test]
	fn lcg_uniform_view_is_coarse() {
		let mut rng = Lcg32::new(987654321);
		for _ in 0..200 {
			let value = rng.next_f64();
			assert!((0.0..1.0).contains(&value), "{value} out of range");
			// Only thousandths survive the normalization.
			assert_eq!((value * 1000.0).fract(), 0.0);
		}
	}

	#[test]
	fn system_random_stays_in_unit_interval() {
		let mut rng = SystemRandom::new();
		for _ in 0..200 {
			let value = rng.next_f64();
			assert!((0.0..1.0).contains(&value), "{value} out of range");
		}
	}
}
