/// Counts how often each number is emitted by a batch of sub-draws.
///
/// # Invariants
/// - Entries keep their first-insertion order
/// - `top` sorts by descending count with a stable sort, so equal counts
///   resolve first-inserted-wins
pub(crate) struct VoteTally {
	counts: Vec<(u8, u32)>,
}

impl VoteTally {
	pub(crate) fn new() -> Self {
		Self { counts: Vec::new() }
	}

	/// Records one vote for `number`.
	pub(crate) fn add(&mut self, number: u8) {
		match self.counts.iter_mut().find(|(n, _)| *n == number) {
			Some((_, count)) => *count += 1,
			None => self.counts.push((number, 1)),
		}
	}

	/// The `k` most-voted numbers; fewer if fewer were ever voted.
	pub(crate) fn top(&self, k: usize) -> Vec<u8> {
		let mut entries = self.counts.clone();
		entries.sort_by(|a, b| b.1.cmp(&a.1));
		entries.truncate(k);
		entries.into_iter().map(|(number, _)| number).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_accumulate_per_number() {
		let mut tally = VoteTally::new();
		for number in [7, 3, 7, 7, 3, 1] {
			tally.add(number);
		}
		assert_eq!(tally.top(3), vec![7, 3, 1]);
	}

	#[test]
	fn ties_resolve_first_inserted_wins() {
		let mut tally = VoteTally::new();
		for number in [9, 4, 2, 4, 9, 2] {
			tally.add(number);
		}
		// All three sit at two votes; insertion order decides.
		assert_eq!(tally.top(2), vec![9, 4]);
	}

	#[test]
	fn top_caps_at_available_entries() {
		let mut tally = VoteTally::new();
		tally.add(5);
		assert_eq!(tally.top(5), vec![5]);
		assert_eq!(VoteTally::new().top(2), Vec::<u8>::new());
	}
}
