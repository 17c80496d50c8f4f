//! Age binning for grouped summaries
//!
//! Two schemes are provided:
//!
//! - **Decile bins** ([`bin_decile`]): fixed width 10, labelled by the lower bound
//! - **Age categories** ([`AgeCategory`]): the survey-style brackets
//!   `Under 18`, `18-24`, `25-34`, ..., `65+`
//!
//! Both are total over non-negative ages, so every record falls into exactly
//! one bin of either scheme.
//!
//! # Examples
//!
//! ```
//! use sleepviz_stats::binning::{AgeCategory, bin_decile};
//!
//! assert_eq!(bin_decile(23), 20);
//! assert_eq!(AgeCategory::from_age(23), AgeCategory::From18To24);
//! assert_eq!(AgeCategory::from_age(23).label(), "18-24");
//! ```

use std::ops::RangeInclusive;

use serde::Serialize;

/// Width of a decile bin in years.
pub const DECILE_WIDTH: u32 = 10;

/// Returns the lower bound of the 10-year bin containing `age`.
///
/// ```
/// # use sleepviz_stats::binning::bin_decile;
/// assert_eq!(bin_decile(9), 0);
/// assert_eq!(bin_decile(70), 70);
/// ```
#[must_use]
pub const fn bin_decile(age: u32) -> u32 {
    age / DECILE_WIDTH * DECILE_WIDTH
}

/// Survey-style age bracket.
///
/// Variants are declared in ascending age order, so the derived `Ord`
/// sorts categories the way they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeCategory {
    #[serde(rename = "Under 18")]
    Under18,
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-64")]
    From55To64,
    #[serde(rename = "65+")]
    From65,
}

impl AgeCategory {
    pub const ALL: [Self; 7] = [
        Self::Under18,
        Self::From18To24,
        Self::From25To34,
        Self::From35To44,
        Self::From45To54,
        Self::From55To64,
        Self::From65,
    ];

    #[must_use]
    pub fn from_age(age: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.range().contains(&age))
            .unwrap_or(Self::From65)
    }

    /// Inclusive age range covered by this category.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u32> {
        match self {
            Self::Under18 => 0..=17,
            Self::From18To24 => 18..=24,
            Self::From25To34 => 25..=34,
            Self::From35To44 => 35..=44,
            Self::From45To54 => 45..=54,
            Self::From55To64 => 55..=64,
            Self::From65 => 65..=u32::MAX,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under18 => "Under 18",
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::From55To64 => "55-64",
            Self::From65 => "65+",
        }
    }
}
