use serde::Serialize;

use crate::quantile;

/// Arithmetic mean of a sequence of values.
///
/// NaN values are not filtered: a single NaN makes the mean NaN.
///
/// # Returns
///
/// * `Some(mean)` - if the sequence contains at least one value
/// * `None` - if the sequence is empty
///
/// # Examples
///
/// ```
/// # use sleepviz_stats::descriptive::mean;
/// assert_eq!(mean([1.0, 2.0, 3.0, 6.0]), Some(3.0));
/// assert_eq!(mean(Vec::<f64>::new()), None);
/// assert!(mean([1.0, f64::NAN]).unwrap().is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency, dispersion,
/// and spread for a dataset of `f64` values. NaN values are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of non-NaN values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset (R-7 interpolation).
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// NaN values are dropped and the rest are sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one non-NaN value
    /// * `None` - otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// # use sleepviz_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0, f64::NAN];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values
            .into_iter()
            .filter(|v| !v.is_nan())
            .collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted, NaN-free values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = quantile::quantile_sorted(sorted_values, 0.5)?;
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_propagates_nan() {
        let m = mean([4.0, f64::NAN, 8.0]).unwrap();
        assert!(m.is_nan());
    }

    #[test]
    fn test_mean_of_single_value() {
        assert_eq!(mean([42.5]), Some(42.5));
    }

    #[test]
    fn test_stats_even_count_median_interpolates() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((stats.median - 2.5).abs() < 1e-12);
        assert!((stats.variance - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_stats_all_nan_is_none() {
        assert!(DescriptiveStats::new([f64::NAN, f64::NAN]).is_none());
    }

    #[test]
    fn test_stats_constant_values() {
        let stats = DescriptiveStats::new([7.0; 5]).unwrap();
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.max, 7.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
