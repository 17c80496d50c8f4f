//! Statistical aggregation for the sleepviz charts.
//!
//! This crate turns in-memory records into the summary records the charts
//! are drawn from:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation
//! - **Quantiles**: R-7 (linear interpolation) quantiles and quartiles
//! - **Box plots**: quartiles with 1.5×IQR fences and outlier detection
//! - **Grouping**: partition records by key and reduce each group
//! - **Binning**: decile bins and survey-style age categories
//!
//! Everything here is a pure function of its input.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`quantile`]: Quantile computation
//! - [`box_plot`]: Box plot summaries with Tukey fences
//! - [`group`]: Group-by mean and group-by quantiles
//! - [`binning`]: Age binning schemes
//!
//! # Examples
//!
//! ## Computing group means
//!
//! ```
//! use sleepviz_stats::group::group_by_mean;
//!
//! // (alcohol drinks, sleep efficiency)
//! let rows = [(0, 88.0), (0, 92.0), (3, 70.0)];
//! let means = group_by_mean(&rows, |r| r.0, |r| r.1);
//! assert_eq!(means[0].mean, 90.0);
//! ```
//!
//! ## Computing box plot summaries per age decile
//!
//! ```
//! use sleepviz_stats::{binning::bin_decile, group::group_by_quantiles};
//!
//! // (age, sleep duration)
//! let rows = [(23, 7.0), (27, 8.0), (29, 6.5), (41, 7.5)];
//! let groups = group_by_quantiles(&rows, |r| bin_decile(r.0), |r| r.1);
//! assert_eq!(groups[0].key, 20);
//! assert_eq!(groups[0].stats.median, 7.0);
//! assert_eq!(groups[1].key, 40);
//! ```

pub mod binning;
pub mod box_plot;
pub mod descriptive;
pub mod group;
pub mod quantile;
