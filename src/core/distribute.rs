//! Prize distribution and redistribution.
//!
//! Every operation takes the random source as an argument so games can be
//! replayed from a seed. Amounts are aligned to [`GRANULARITY`]; when a total
//! is not itself aligned, the sub-granularity remainder lands in exactly one
//! envelope so the sum is always preserved.

use super::fund::FundSpec;
use super::money::{round_to_granularity, units, Amount, GRANULARITY};

use rand::prelude::*;
use std::collections::BTreeSet;

/// Indices of envelopes that have already been revealed
pub type OpenedSet = BTreeSet<usize>;

/// Split `total` into `packet_count` envelopes.
///
/// `min_value` defaults to a tenth of the average share (at least one
/// granularity unit) and `max_value` defaults to `total`. Both bounds are
/// rounded to the granularity first. If the bounds cannot be met the fund is
/// split as evenly as possible instead.
///
/// In the bounded case one envelope is set to exactly `min_value` and one to
/// exactly `max_value` whenever the remaining envelopes can still stay in
/// bounds afterwards. The result is shuffled so positions carry no
/// information about size.
///
/// Envelopes may end up one granularity unit outside the bounds: the drift
/// correction re-rounds a single interior envelope, and an unaligned
/// remainder is added to one envelope.
pub fn distribute(
    total: Amount,
    packet_count: usize,
    min_value: Option<Amount>,
    max_value: Option<Amount>,
    rng: &mut impl Rng,
) -> Vec<Amount> {
    if packet_count == 0 {
        return Vec::new();
    }

    let min = round_to_granularity(
        min_value.unwrap_or_else(|| default_min(total, packet_count)),
    )
    .max(0);
    let max = round_to_granularity(max_value.unwrap_or(total));

    if !is_feasible(total, packet_count, min, max) {
        log::debug!(
            "bounds [{}, {}] infeasible for {} across {} envelopes, splitting evenly",
            min,
            max,
            total,
            packet_count
        );
        return equal_split(total, packet_count, rng);
    }

    let fraction = total.rem_euclid(GRANULARITY);
    let mut amounts = bounded_split(total - fraction, packet_count, min, max, rng);
    if let Some(last) = amounts.last_mut() {
        *last += fraction;
    }

    amounts.shuffle(rng);
    amounts
}

/// Split a fund according to its specification.
pub fn distribute_fund(spec: &FundSpec, rng: &mut impl Rng) -> Vec<Amount> {
    distribute(
        spec.total(),
        spec.packet_count(),
        spec.min_value(),
        spec.max_value(),
        rng,
    )
}

/// Whether every envelope can land in `[min, max]` while summing to `total`.
pub fn is_feasible(total: Amount, packet_count: usize, min: Amount, max: Amount) -> bool {
    let n = packet_count as Amount;
    packet_count >= 2 && n.saturating_mul(min) <= total && n.saturating_mul(max) >= total
}

/// Near-equal split used when the bounds are infeasible.
///
/// Each share is the average rounded to the granularity; the residual is
/// then settled one granularity unit at a time on the leading envelopes
/// before the result is shuffled.
pub fn equal_split(total: Amount, packet_count: usize, rng: &mut impl Rng) -> Vec<Amount> {
    if packet_count == 0 {
        return Vec::new();
    }

    let n = packet_count as Amount;
    let fraction = total.rem_euclid(GRANULARITY);
    let aligned = total - fraction;

    let share = round_to_granularity(aligned / n);
    let mut amounts = vec![share; packet_count];

    let mut residual = aligned - share * n;
    let step = residual.signum() * GRANULARITY;
    let mut i = 0;
    while residual != 0 {
        amounts[i % packet_count] += step;
        residual -= step;
        i += 1;
    }

    amounts[0] += fraction;

    amounts.shuffle(rng);
    amounts
}

/// Re-split the money held by unopened envelopes among themselves.
///
/// Opened envelopes keep their amounts. The unopened ones are redistributed
/// with default bounds and written back in their original relative order.
/// Indices in `opened` beyond the sequence are ignored.
pub fn redistribute(amounts: &[Amount], opened: &OpenedSet, rng: &mut impl Rng) -> Vec<Amount> {
    let mut result = amounts.to_vec();

    let unopened: Vec<usize> = (0..amounts.len())
        .filter(|i| !opened.contains(i))
        .collect();

    if unopened.is_empty() {
        return result;
    }

    let remaining: Amount = unopened.iter().map(|&i| amounts[i]).sum();
    let fresh = distribute(remaining, unopened.len(), None, None, rng);

    for (&idx, amount) in unopened.iter().zip(fresh) {
        result[idx] = amount;
    }

    log::debug!(
        "redistributed {} across {} unopened envelopes",
        remaining,
        unopened.len()
    );

    result
}

fn default_min(total: Amount, packet_count: usize) -> Amount {
    round_to_granularity(total / packet_count as Amount / 10).max(GRANULARITY)
}

/// Whether `value` can be placed with `slots_left` slots and `remaining`
/// money left without stranding the slots after it.
fn fits(value: Amount, remaining: Amount, slots_left: usize, min: Amount, max: Amount) -> bool {
    let after = (slots_left - 1) as Amount;
    let rest = remaining - value;
    after.saturating_mul(min) <= rest && rest <= after.saturating_mul(max)
}

/// Random split of an aligned `total` with every envelope in `[min, max]`.
///
/// Layout before shuffling: reserved min/max envelopes, then the interior
/// draws, then the leftover envelope.
fn bounded_split(
    total: Amount,
    packet_count: usize,
    min: Amount,
    max: Amount,
    rng: &mut impl Rng,
) -> Vec<Amount> {
    let mut amounts = Vec::with_capacity(packet_count);
    let mut remaining = total;
    let mut slots_left = packet_count;

    for reserved in [min, max] {
        if slots_left > 1 && fits(reserved, remaining, slots_left, min, max) {
            amounts.push(reserved);
            remaining -= reserved;
            slots_left -= 1;
        }
    }
    let num_reserved = amounts.len();

    while slots_left > 1 {
        let after = (slots_left - 1) as Amount;
        let lo = min.max(remaining.saturating_sub(max.saturating_mul(after)));
        let hi = max.min(remaining.saturating_sub(min.saturating_mul(after)));

        let value = if lo >= hi {
            lo
        } else {
            round_to_granularity(rng.random_range(lo..=hi))
        };

        amounts.push(value);
        remaining -= value;
        slots_left -= 1;
    }

    amounts.push(round_to_granularity(remaining));

    let drift = total - amounts.iter().sum::<Amount>();
    if drift != 0 {
        let last = amounts.len() - 1;
        let slot = if num_reserved < last {
            rng.random_range(num_reserved..last)
        } else {
            last
        };
        log::debug!("correcting drift of {} on envelope {}", drift, slot);
        amounts[slot] = round_to_granularity(amounts[slot] + drift);
    }

    debug_assert!(amounts.iter().all(|&a| units(a) * GRANULARITY == a));
    amounts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use test_case::test_case;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn assert_aligned(amounts: &[Amount]) {
        for &a in amounts {
            assert_eq!(a % GRANULARITY, 0, "{} is not aligned in {:?}", a, amounts);
        }
    }

    #[test]
    fn test_distribute_bounded_example() {
        let mut rng = rng();
        for _ in 0..200 {
            let amounts = distribute(500_000, 5, Some(50_000), Some(200_000), &mut rng);
            assert_eq!(amounts.len(), 5);
            assert_eq!(amounts.iter().sum::<Amount>(), 500_000);
            assert_aligned(&amounts);
            for &a in &amounts {
                assert!((50_000..=200_000).contains(&a), "{} out of bounds", a);
            }
            assert!(amounts.contains(&50_000));
            assert!(amounts.contains(&200_000));
        }
    }

    #[test]
    fn test_distribute_tiny_fund_falls_back() {
        let amounts = distribute(100, 5, None, None, &mut rng());
        assert_eq!(amounts.len(), 5);
        assert_eq!(amounts.iter().sum::<Amount>(), 100);
        assert_eq!(amounts.iter().filter(|&&a| a == 100).count(), 1);
    }

    #[test]
    fn test_distribute_default_bounds_reserve_min() {
        let mut rng = rng();
        for _ in 0..50 {
            let amounts = distribute(1_000_000, 10, None, None, &mut rng);
            assert_eq!(amounts.iter().sum::<Amount>(), 1_000_000);
            assert_aligned(&amounts);
            // default min is a tenth of the average share
            assert!(amounts.iter().all(|&a| a >= 10_000));
            assert!(amounts.contains(&10_000));
        }
    }

    #[test]
    fn test_distribute_exact_minimum_total() {
        // every envelope is forced to the minimum
        let amounts = distribute(250_000, 5, Some(50_000), Some(200_000), &mut rng());
        assert_eq!(amounts, vec![50_000; 5]);
    }

    #[test]
    fn test_distribute_exact_maximum_total() {
        let amounts = distribute(1_000_000, 5, Some(50_000), Some(200_000), &mut rng());
        assert_eq!(amounts, vec![200_000; 5]);
    }

    #[test]
    fn test_distribute_two_envelopes() {
        let mut rng = rng();
        for _ in 0..50 {
            let amounts = distribute(100_000, 2, Some(20_000), Some(80_000), &mut rng);
            assert_eq!(amounts.len(), 2);
            assert_eq!(amounts.iter().sum::<Amount>(), 100_000);
            assert!(amounts.contains(&20_000));
            assert!(amounts.contains(&80_000));
        }
    }

    #[test]
    fn test_distribute_unaligned_total_keeps_sum() {
        let amounts = distribute(123_456, 4, None, None, &mut rng());
        assert_eq!(amounts.iter().sum::<Amount>(), 123_456);
        assert_eq!(amounts.iter().filter(|&&a| a % GRANULARITY != 0).count(), 1);
    }

    #[test]
    fn test_distribute_rounds_bounds() {
        let mut rng = rng();
        for _ in 0..50 {
            let amounts = distribute(300_000, 3, Some(49_600), Some(150_400), &mut rng);
            assert_eq!(amounts.iter().sum::<Amount>(), 300_000);
            assert_aligned(&amounts);
            assert!(amounts.contains(&50_000));
            assert!(amounts.contains(&150_000));
        }
    }

    #[test]
    fn test_distribute_is_reproducible_from_seed() {
        let a = distribute(800_000, 8, None, None, &mut StdRng::seed_from_u64(99));
        let b = distribute(800_000, 8, None, None, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distribute_degenerate_counts() {
        assert!(distribute(5000, 0, None, None, &mut rng()).is_empty());
        assert_eq!(distribute(5000, 1, None, None, &mut rng()), vec![5000]);
    }

    #[test_case(500_000, 5, 50_000, 200_000, true ; "inside")]
    #[test_case(250_000, 5, 50_000, 200_000, true ; "lower edge")]
    #[test_case(1_000_000, 5, 50_000, 200_000, true ; "upper edge")]
    #[test_case(249_000, 5, 50_000, 200_000, false ; "below")]
    #[test_case(1_001_000, 5, 50_000, 200_000, false ; "above")]
    #[test_case(100_000, 1, 1000, 100_000, false ; "single envelope")]
    fn test_is_feasible(total: Amount, count: usize, min: Amount, max: Amount, expected: bool) {
        assert_eq!(is_feasible(total, count, min, max), expected);
    }

    #[test_case(100_000, 4, 25_000 ; "divides evenly")]
    #[test_case(100_000, 3, 33_000 ; "rounds down")]
    #[test_case(200_000, 3, 67_000 ; "rounds up")]
    fn test_equal_split_shares(total: Amount, count: usize, base: Amount) {
        let amounts = equal_split(total, count, &mut rng());
        assert_eq!(amounts.len(), count);
        assert_eq!(amounts.iter().sum::<Amount>(), total);
        assert_aligned(&amounts);
        for &a in &amounts {
            assert!((a - base).abs() <= GRANULARITY, "{} too far from {}", a, base);
        }
    }

    #[test]
    fn test_redistribute_example() {
        let amounts = [50_000, 70_000, 80_000, 100_000, 200_000];
        let opened: OpenedSet = [0, 4].into_iter().collect();

        let result = redistribute(&amounts, &opened, &mut rng());

        assert_eq!(result.len(), 5);
        assert_eq!(result[0], 50_000);
        assert_eq!(result[4], 200_000);
        assert_eq!(result[1..4].iter().sum::<Amount>(), 250_000);
        assert_aligned(&result);
    }

    #[test]
    fn test_redistribute_all_opened_is_noop() {
        let amounts = [10_000, 20_000, 30_000];
        let opened: OpenedSet = (0..3).collect();
        assert_eq!(redistribute(&amounts, &opened, &mut rng()), amounts.to_vec());
    }

    #[test]
    fn test_redistribute_single_unopened_keeps_amount() {
        let amounts = [10_000, 20_000, 30_000];
        let opened: OpenedSet = [0, 2].into_iter().collect();
        assert_eq!(redistribute(&amounts, &opened, &mut rng()), amounts.to_vec());
    }

    #[test]
    fn test_redistribute_ignores_out_of_range_indices() {
        let amounts = [40_000, 60_000];
        let opened: OpenedSet = [0, 7].into_iter().collect();
        let result = redistribute(&amounts, &opened, &mut rng());
        assert_eq!(result, amounts.to_vec());
    }

    #[test]
    fn test_redistribute_nothing_opened_conserves_sum() {
        let amounts = [50_000, 70_000, 80_000, 100_000, 200_000];
        let result = redistribute(&amounts, &OpenedSet::new(), &mut rng());
        assert_eq!(result.iter().sum::<Amount>(), 500_000);
        assert_eq!(result.len(), 5);
    }
}
