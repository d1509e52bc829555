use super::result_set::{EURO_PICKS, MAIN_PICKS, ResultSet};
use super::rng::RandomSource;
use super::sampler::shuffle;
use super::tally::VoteTally;
use super::variants::{Algorithm, generate_set};

/// Sub-draws per algorithm in one consensus pass.
const ROUNDS: usize = 4;

/// Runs every algorithm `ROUNDS` times against the shared stream and
/// keeps the most-voted numbers of the whole batch.
///
/// # Behavior
/// - Algorithms run in `Algorithm::ALL` order, four full sets each, all
///   consuming the one shared stream in sequence
/// - Every emitted number lands in a pool-wide tally; ties resolve
///   first-voted-wins
/// - The winning 5 + 2 numbers are shuffled on the shared stream for
///   display order
pub(crate) fn consensus_set(rand: &mut dyn RandomSource) -> ResultSet {
	let mut votes_main = VoteTally::new();
	let mut votes_euro = VoteTally::new();

	for algorithm in Algorithm::ALL {
		for _ in 0..ROUNDS {
			let set = generate_set(algorithm, rand);
			for number in set.main {
				votes_main.add(number);
			}
			for number in set.euro {
				votes_euro.add(number);
			}
		}
	}

	ResultSet {
		main: shuffle(&votes_main.top(MAIN_PICKS), rand),
		euro: shuffle(&votes_euro.top(EURO_PICKS), rand),
	}
}
