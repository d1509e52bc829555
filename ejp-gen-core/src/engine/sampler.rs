use super::rng::RandomSource;

/// Draws `k` distinct numbers from the pool 1..=`pool_size`.
///
/// # Behavior
/// - Each round sums the remaining weights, draws one uniform value,
///   scales it by the total and scans the pool subtracting weights until
///   the scaled point is crossed
/// - The selected number and its weight leave the pool; emission order is
///   the selection order, nothing is sorted here
/// - A non-positive weight total, or a scan that runs off the end through
///   float rounding, selects the last remaining entry; the uniform draw is
///   consumed either way so the stream position stays aligned
///
/// # Panics
/// `k` must not exceed `pool_size` and `weights` must carry one entry per
/// pool member. Violating either is a caller bug.
pub(crate) fn weighted_sample(
	pool_size: usize,
	k: usize,
	weights: &[f64],
	rand: &mut dyn RandomSource,
) -> Vec<u8> {
	assert!(k <= pool_size, "cannot draw {k} from a pool of {pool_size}");
	assert_eq!(weights.len(), pool_size, "one weight per pool member");

	let mut pool: Vec<u8> = (1..=pool_size).map(|n| n as u8).collect();
	let mut weights = weights.to_vec();
	let mut picks = Vec::with_capacity(k);

	for _ in 0..k {
		let total: f64 = weights.iter().sum();
		let draw = rand.next_f64();
		let mut selected = pool.len() - 1;
		if total > 0.0 {
			let mut point = draw * total;
			for (index, weight) in weights.iter().enumerate() {
				point -= weight;
				if point <= 0.0 {
					selected = index;
					break;
				}
			}
		}
		picks.push(pool.remove(selected));
		weights.remove(selected);
	}

	picks
}

/// Fisher-Yates shuffle over a copy of `values`.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly drawn position at or below it. Membership never changes,
/// only order does. Consumes `len - 1` draws.
pub(crate) fn shuffle(values: &[u8], rand: &mut dyn RandomSource) -> Vec<u8> {
	let mut shuffled = values.to_vec();
	for i in (1..shuffled.len()).rev() {
		let j = (rand.next_f64() * (i as f64 + 1.0)) as usize;
		shuffled.swap(i, j);
	}
	shuffled
}
