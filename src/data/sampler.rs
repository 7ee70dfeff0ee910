// ============================================================
// Layer 4 — Stratified Sampler
// ============================================================
// Bounds the number of filings per year so the LLM bill of
// the classification stage stays predictable.
//
// For each stratum (year), visited in ascending key order:
//   - group has at least `per_group` items → draw exactly
//     `per_group` of them without replacement
//   - group is smaller                      → keep all of it,
//     in input order
//
// The RNG is re-seeded with the same seed for every group, so
// a group's draw depends only on that group's contents. Two
// runs over the same input with the same seed always pick the
// same filings.
//
// Uses rand::seq::index::sample over a seeded StdRng.
//
// Reference: rand crate documentation

use rand::{rngs::StdRng, seq::index, SeedableRng};
use std::collections::BTreeMap;

/// Default number of filings kept per year.
pub const DEFAULT_PER_YEAR: usize = 100;

/// Default sampler seed.
pub const DEFAULT_SEED: u64 = 42;

/// Draw up to `per_group` items from each group of `items`,
/// grouped by `key`.
///
/// # Returns
/// The sampled items, group by group in ascending key order.
pub fn sample_per_group<T, K, F>(
    items:     Vec<T>,
    key:       F,
    per_group: usize,
    seed:      u64,
) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // Stable grouping: input order is kept inside each group
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }

    let mut sampled = Vec::new();
    for (_, group) in groups {
        let total = group.len();

        if total < per_group {
            sampled.extend(group);
            continue;
        }

        let mut rng    = StdRng::seed_from_u64(seed);
        let picks      = index::sample(&mut rng, total, per_group).into_vec();
        let mut slots: Vec<Option<T>> = group.into_iter().map(Some).collect();
        sampled.extend(picks.into_iter().filter_map(|i| slots[i].take()));

        tracing::debug!("Sampled {} of {} items in group", per_group, total);
    }

    sampled
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// (year, id) pairs: 250 in 2019, 40 in 2020, 100 in 2021
    fn corpus() -> Vec<(i32, usize)> {
        let mut v = Vec::new();
        v.extend((0..250).map(|i| (2019, i)));
        v.extend((0..40).map(|i| (2020, 1000 + i)));
        v.extend((0..100).map(|i| (2021, 2000 + i)));
        v
    }

    fn count_year(items: &[(i32, usize)], year: i32) -> usize {
        items.iter().filter(|(y, _)| *y == year).count()
    }

    #[test]
    fn test_group_sizes_are_bounded() {
        let out = sample_per_group(corpus(), |x| x.0, 100, 42);
        assert_eq!(count_year(&out, 2019), 100);
        assert_eq!(count_year(&out, 2020), 40);
        assert_eq!(count_year(&out, 2021), 100);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let a = sample_per_group(corpus(), |x| x.0, 100, 42);
        let b = sample_per_group(corpus(), |x| x.0, 100, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_large_groups() {
        let a = sample_per_group(corpus(), |x| x.0, 100, 42);
        let b = sample_per_group(corpus(), |x| x.0, 100, 7);
        let a19: HashSet<_> = a.iter().filter(|x| x.0 == 2019).collect();
        let b19: HashSet<_> = b.iter().filter(|x| x.0 == 2019).collect();
        assert_ne!(a19, b19);
    }

    #[test]
    fn test_small_group_returned_whole_in_order() {
        let out  = sample_per_group(corpus(), |x| x.0, 100, 42);
        let y20: Vec<usize> = out.iter().filter(|x| x.0 == 2020).map(|x| x.1).collect();
        let want: Vec<usize> = (1000..1040).collect();
        assert_eq!(y20, want);
    }

    #[test]
    fn test_no_duplicates_drawn() {
        let out = sample_per_group(corpus(), |x| x.0, 100, 42);
        let unique: HashSet<_> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
    }

    #[test]
    fn test_groups_in_ascending_key_order() {
        let mut items = corpus();
        items.reverse();
        let out = sample_per_group(items, |x| x.0, 100, 42);
        let years: Vec<i32> = out.iter().map(|x| x.0).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_empty_input() {
        let out: Vec<(i32, usize)> = sample_per_group(Vec::new(), |x| x.0, 100, 42);
        assert!(out.is_empty());
    }
}
