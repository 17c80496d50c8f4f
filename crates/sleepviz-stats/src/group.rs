//! Group-by aggregation over in-memory records.
//!
//! Every function here partitions its input by a key function: each item
//! lands in exactly one group and groups are emitted in ascending key order.
//! Groups that end up without usable values are skipped rather than emitted
//! with NaN fields.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{box_plot::BoxPlotStats, descriptive};

/// Mean of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean<K> {
    pub key: K,
    pub mean: f64,
}

/// Box plot summary of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupQuantiles<K> {
    pub key: K,
    #[serde(flatten)]
    pub stats: BoxPlotStats,
}

/// Partitions items by key, preserving input order within each group.
///
/// # Examples
///
/// ```
/// use sleepviz_stats::group::partition;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let groups = partition(&words, |w| w.chars().next().unwrap());
/// assert_eq!(groups[&'a'], vec![&"apple", &"avocado"]);
/// assert_eq!(groups.len(), 3);
/// ```
pub fn partition<'a, T, K, F>(items: &'a [T], mut key_fn: F) -> BTreeMap<K, Vec<&'a T>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<&T>> = BTreeMap::new();
    for item in items {
        groups.entry(key_fn(item)).or_default().push(item);
    }
    groups
}

/// Computes the arithmetic mean of `value_fn` over each group.
///
/// NaN values propagate into their group's mean. An empty input yields an
/// empty result.
///
/// # Examples
///
/// ```
/// use sleepviz_stats::group::{group_by_mean, GroupMean};
///
/// let rows = [(1, 80.0), (0, 90.0), (1, 70.0)];
/// let means = group_by_mean(&rows, |r| r.0, |r| r.1);
/// assert_eq!(
///     means,
///     vec![GroupMean { key: 0, mean: 90.0 }, GroupMean { key: 1, mean: 75.0 }]
/// );
/// ```
pub fn group_by_mean<T, K, KF, VF>(items: &[T], key_fn: KF, mut value_fn: VF) -> Vec<GroupMean<K>>
where
    K: Ord,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> f64,
{
    partition(items, key_fn)
        .into_iter()
        .filter_map(|(key, members)| {
            let mean = descriptive::mean(members.into_iter().map(&mut value_fn))?;
            Some(GroupMean { key, mean })
        })
        .collect()
}

/// Computes a [`BoxPlotStats`] summary of `value_fn` over each group.
///
/// NaN values are dropped; a group with no remaining values is skipped.
///
/// # Examples
///
/// ```
/// use sleepviz_stats::group::group_by_quantiles;
///
/// let rows = [("a", 1.0), ("a", 2.0), ("a", 3.0), ("b", 5.0)];
/// let groups = group_by_quantiles(&rows, |r| r.0, |r| r.1);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].stats.median, 2.0);
/// assert_eq!(groups[1].stats.q1, 5.0);
/// ```
pub fn group_by_quantiles<T, K, KF, VF>(
    items: &[T],
    key_fn: KF,
    mut value_fn: VF,
) -> Vec<GroupQuantiles<K>>
where
    K: Ord,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> f64,
{
    partition(items, key_fn)
        .into_iter()
        .filter_map(|(key, members)| {
            let stats = BoxPlotStats::new(members.into_iter().map(&mut value_fn))?;
            Some(GroupQuantiles { key, stats })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: usize,
        level: u32,
        value: f64,
    }

    fn random_rows(seed: u64, len: usize) -> Vec<Row> {
        let mut rng = Pcg32::seed_from_u64(seed);
        (0..len)
            .map(|id| Row {
                id,
                level: rng.random_range(0..6),
                value: rng.random_range(0.0..100.0),
            })
            .collect()
    }

    #[test]
    fn test_partition_is_disjoint_and_total() {
        for seed in 0..20 {
            let rows = random_rows(seed, 1 + usize::try_from(seed).unwrap() * 7);
            let groups = partition(&rows, |r| r.level);

            let mut seen = HashSet::new();
            for (level, members) in &groups {
                assert!(!members.is_empty());
                for row in members {
                    assert_eq!(row.level, *level);
                    assert!(seen.insert(row.id), "row {} in two groups", row.id);
                }
            }
            assert_eq!(seen.len(), rows.len());
        }
    }

    #[test]
    fn test_group_sizes_sum_to_input() {
        let rows = random_rows(7, 250);
        let total = partition(&rows, |r| r.level)
            .values()
            .map(Vec::len)
            .sum::<usize>();
        assert_eq!(total, 250);
    }

    #[test]
    fn test_group_by_mean_matches_manual_mean() {
        let rows = random_rows(3, 120);
        for GroupMean { key, mean } in group_by_mean(&rows, |r| r.level, |r| r.value) {
            let values = rows
                .iter()
                .filter(|r| r.level == key)
                .map(|r| r.value)
                .collect::<Vec<_>>();
            #[expect(clippy::cast_precision_loss)]
            let expected = values.iter().sum::<f64>() / values.len() as f64;
            assert!((mean - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_group_by_mean_propagates_nan() {
        let rows = [(1, 2.0), (1, f64::NAN), (2, 4.0)];
        let means = group_by_mean(&rows, |r| r.0, |r| r.1);
        assert!(means[0].mean.is_nan());
        assert_eq!(means[1].mean, 4.0);
    }

    #[test]
    fn test_group_by_quantiles_skips_all_nan_group() {
        let rows = [(1, f64::NAN), (2, 4.0)];
        let groups = group_by_quantiles(&rows, |r| r.0, |r| r.1);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, 2);
    }

    #[test]
    fn test_single_record_group() {
        let rows = [("only", 3.5)];
        let groups = group_by_quantiles(&rows, |r| r.0, |r| r.1);
        let stats = &groups[0].stats;
        assert_eq!(
            [stats.min, stats.q1, stats.median, stats.q3, stats.max],
            [3.5; 5]
        );
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let rows: [(u32, f64); 0] = [];
        assert!(partition(&rows, |r| r.0).is_empty());
        assert!(group_by_mean(&rows, |r| r.0, |r| r.1).is_empty());
        assert!(group_by_quantiles(&rows, |r| r.0, |r| r.1).is_empty());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let rows = random_rows(11, 80);
        assert_eq!(
            group_by_mean(&rows, |r| r.level, |r| r.value),
            group_by_mean(&rows, |r| r.level, |r| r.value)
        );
        assert_eq!(
            group_by_quantiles(&rows, |r| r.level, |r| r.value),
            group_by_quantiles(&rows, |r| r.level, |r| r.value)
        );
    }

    #[test]
    fn test_groups_are_sorted_by_key() {
        let rows = random_rows(5, 60);
        let keys = group_by_quantiles(&rows, |r| r.level, |r| r.value)
            .into_iter()
            .map(|g| g.key)
            .collect::<Vec<_>>();
        assert!(keys.is_sorted());
    }
}
