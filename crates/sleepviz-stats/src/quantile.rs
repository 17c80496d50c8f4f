use serde::Serialize;

/// Computes a single quantile from sorted data.
///
/// This function uses linear interpolation between order statistics
/// (Hyndman & Fan type 7, the default of R and most plotting libraries).
/// For `n` values the quantile `p` lies at rank `h = p * (n - 1)` and is
/// `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - The quantile to compute (0.0 to 1.0)
///
/// # Returns
///
/// The interpolated quantile, or `None` if the input is empty or `p` is
/// outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use sleepviz_stats::quantile::quantile_sorted;
///
/// let values = [4.0, 6.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0];
/// assert_eq!(quantile_sorted(&values, 0.25), Some(6.0));
/// assert_eq!(quantile_sorted(&values, 0.5), Some(7.5));
/// assert_eq!(quantile_sorted(&values, 0.75), Some(9.25));
/// assert_eq!(quantile_sorted(&[], 0.5), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], p: f64) -> Option<f64> {
    if sorted_values.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let rank = p * (sorted_values.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let lower_value = sorted_values[lower];
    let Some(&upper_value) = sorted_values.get(lower + 1) else {
        return Some(lower_value);
    };
    Some(lower_value + (rank - rank.floor()) * (upper_value - lower_value))
}

/// First quartile, median and third quartile of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from values sorted in ascending order.
    ///
    /// Returns `None` if the input is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sleepviz_stats::quantile::Quartiles;
    ///
    /// let q = Quartiles::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!((q.q1, q.median, q.q3), (2.0, 3.0, 4.0));
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        Some(Self {
            q1: quantile_sorted(sorted_values, 0.25)?,
            median: quantile_sorted(sorted_values, 0.5)?,
            q3: quantile_sorted(sorted_values, 0.75)?,
        })
    }

    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
