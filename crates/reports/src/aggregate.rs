//! Group-by mean/count accumulation.
//!
//! Groups are kept in a `BTreeMap`, so iteration follows key order. NaN
//! ratings are skipped by both the mean and the count.

use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Running mean/count for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupStats {
    sum: f64,
    count: u64,
}

impl GroupStats {
    /// Add a rating.
    #[inline]
    pub fn add(&mut self, rating: f64) {
        if rating.is_nan() {
            return;
        }
        self.sum += rating;
        self.count += 1;
    }

    /// Number of ratings.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean rating, or `None` for an empty group.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        if self.count > 0 {
            Some(self.sum / self.count as f64)
        } else {
            None
        }
    }
}

/// Ratings grouped by a key.
#[derive(Debug, Clone)]
pub struct GroupedRatings<K: Ord> {
    groups: BTreeMap<K, GroupStats>,
}

impl<K: Ord> GroupedRatings<K> {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Add a rating under a key.
    pub fn add(&mut self, key: K, rating: f64) {
        self.groups.entry(key).or_default().add(rating);
    }

    /// Get the stats for a key.
    pub fn get(&self, key: &K) -> Option<&GroupStats> {
        self.groups.get(key)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &GroupStats)> {
        self.groups.iter()
    }

    /// Consume into `(key, mean, count)` rows in key order.
    ///
    /// Groups with no ratings have no mean and are skipped.
    pub fn into_rows(self) -> impl Iterator<Item = (K, f64, u64)> {
        self.groups
            .into_iter()
            .filter_map(|(key, stats)| stats.mean().map(|mean| (key, mean, stats.count())))
    }
}

impl<K: Ord> Default for GroupedRatings<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<(K, f64)> for GroupedRatings<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut grouped = Self::new();
        for (key, rating) in iter {
            grouped.add(key, rating);
        }
        grouped
    }
}

/// Stable sort by a float score, descending, then keep the first `n`.
///
/// Rows with equal scores keep their incoming order.
pub fn top_n_by_desc<T>(mut rows: Vec<T>, n: usize, score: impl Fn(&T) -> f64) -> Vec<T> {
    rows.sort_by_key(|row| Reverse(OrderedFloat(score(row))));
    rows.truncate(n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_count() {
        let grouped: GroupedRatings<&str> =
            [("Comedy", 4.0), ("Comedy", 2.0), ("Drama", 5.0)].into_iter().collect();

        let comedy = grouped.get(&"Comedy").unwrap();
        assert_relative_eq!(comedy.mean().unwrap(), 3.0);
        assert_eq!(comedy.count(), 2);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_nan_skipped() {
        let mut stats = GroupStats::default();
        stats.add(4.0);
        stats.add(f64::NAN);
        stats.add(2.0);

        assert_eq!(stats.count(), 2);
        assert_relative_eq!(stats.mean().unwrap(), 3.0);
    }

    #[test]
    fn test_empty_group_has_no_mean() {
        let grouped: GroupedRatings<&str> =
            [("Drama", f64::NAN), ("Comedy", 1.0)].into_iter().collect();
        let rows: Vec<_> = grouped.into_rows().collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "Comedy");
    }

    #[test]
    fn test_rows_in_key_order() {
        let grouped: GroupedRatings<&str> =
            [("b", 1.0), ("c", 1.0), ("a", 1.0)].into_iter().collect();
        let keys: Vec<_> = grouped.into_rows().map(|(k, _, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_top_n_stable() {
        let rows = vec![("a", 3.0), ("b", 4.0), ("c", 3.0), ("d", 1.0)];
        let top = top_n_by_desc(rows, 3, |r| r.1);
        assert_eq!(top, vec![("b", 4.0), ("a", 3.0), ("c", 3.0)]);
    }
}
