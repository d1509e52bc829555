use serde::{Deserialize, Serialize};

/// Size of the main number pool (values 1..=50).
pub const MAIN_POOL: usize = 50;

/// How many main numbers make up one set.
pub const MAIN_PICKS: usize = 5;

/// Size of the euro number pool (values 1..=12).
pub const EURO_POOL: usize = 12;

/// How many euro numbers make up one set.
pub const EURO_PICKS: usize = 2;

/// One complete prediction: 5 main numbers and 2 euro numbers.
///
/// # Invariants
/// - `main` holds 5 distinct values in 1..=50
/// - `euro` holds 2 distinct values in 1..=12
/// - Both sequences keep their emission order; sorting happens only in
///   the display helpers
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResultSet {
	/// Main pool picks, in emission order.
	pub main: Vec<u8>,

	/// Euro pool picks, in emission order.
	pub euro: Vec<u8>,
}

impl ResultSet {
	/// Main numbers in ascending order (display and export form).
	pub fn sorted_main(&self) -> Vec<u8> {
		let mut sorted = self.main.clone();
		sorted.sort_unstable();
		sorted
	}

	/// Euro numbers in ascending order (display and export form).
	pub fn sorted_euro(&self) -> Vec<u8> {
		let mut sorted = self.euro.clone();
		sorted.sort_unstable();
		sorted
	}
}
