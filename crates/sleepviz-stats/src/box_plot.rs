use serde::Serialize;

use crate::quantile::Quartiles;

/// Multiplier applied to the interquartile range to place the outlier fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Five-number box plot summary with Tukey fences.
///
/// `min` and `max` are the fences `q1 - 1.5 * iqr` and `q3 + 1.5 * iqr`,
/// not the extremes of the data. `outliers` holds every value strictly
/// outside the fences, in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub min: f64,
    pub max: f64,
    pub outliers: Vec<f64>,
}

impl BoxPlotStats {
    /// Computes the summary from unsorted values.
    ///
    /// NaN values are dropped before sorting.
    ///
    /// # Returns
    ///
    /// * `Some(BoxPlotStats)` - if at least one non-NaN value remains
    /// * `None` - otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use sleepviz_stats::box_plot::BoxPlotStats;
    ///
    /// let stats = BoxPlotStats::new([1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.outliers, vec![100.0]);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values
            .into_iter()
            .filter(|v| !v.is_nan())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes the summary from pre-sorted, NaN-free values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let Quartiles { q1, median, q3 } = Quartiles::from_sorted(sorted_values)?;
        let iqr = q3 - q1;
        let min = q1 - FENCE_FACTOR * iqr;
        let max = q3 + FENCE_FACTOR * iqr;
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| v < min || v > max)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            min,
            max,
            outliers,
        })
    }

    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_set_fences() {
        let stats = BoxPlotStats::new([12.0, 4.0, 6.0, 9.0, 6.0, 7.0, 10.0, 8.0]).unwrap();
        assert_eq!(stats.q1, 6.0);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.q3, 9.25);
        assert_eq!(stats.min, 6.0 - 1.5 * 3.25);
        assert_eq!(stats.max, 9.25 + 1.5 * 3.25);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_outliers_strictly_outside_fences() {
        let values = [-20.0, 4.0, 6.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 30.0];
        let stats = BoxPlotStats::new(values).unwrap();
        assert_eq!(stats.outliers, vec![-20.0, 30.0]);
        for v in values {
            let outside = v < stats.min || v > stats.max;
            assert_eq!(outside, stats.outliers.contains(&v), "value {v}");
        }
    }

    #[test]
    fn test_value_on_fence_is_not_outlier() {
        // q1 = 1, q3 = 3, iqr = 2 -> fences at -2 and 6
        let stats = BoxPlotStats::new([-2.0, 1.0, 1.0, 2.0, 3.0, 3.0, 6.0]).unwrap();
        assert_eq!(stats.min, -2.0);
        assert_eq!(stats.max, 6.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let stats = BoxPlotStats::new([6.5]).unwrap();
        assert_eq!(stats.q1, 6.5);
        assert_eq!(stats.median, 6.5);
        assert_eq!(stats.q3, 6.5);
        assert_eq!(stats.min, 6.5);
        assert_eq!(stats.max, 6.5);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_empty_and_all_nan() {
        assert!(BoxPlotStats::new(Vec::new()).is_none());
        assert!(BoxPlotStats::new([f64::NAN]).is_none());
    }
}
