//! Summary records backing each chart.
//!
//! Each function here is a thin composition of the grouping primitives in
//! [`sleepviz_stats::group`] with the record field it summarizes.

use serde::{Serialize, Serializer};
use sleepviz_stats::{
    binning::{AgeCategory, bin_decile},
    descriptive,
    group::{self, GroupMean, GroupQuantiles},
};

use crate::record::{Gender, Record};

/// Mean sleep efficiency of one (age, gender) cell of the scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub age: u32,
    pub gender: Gender,
    pub sleep_efficiency: f64,
}

/// Mean sleep quality for one alcohol consumption level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlcoholEffect {
    pub alcohol_consumption: u32,
    pub sleep_efficiency: f64,
    pub deep_sleep: f64,
}

/// Sleep durations of all subjects of one age.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeDurations {
    pub age: u32,
    pub sleep_durations: Vec<f64>,
}

/// Age grouping scheme for the sleep duration box plot.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub enum AgeGrouping {
    /// 10-year bins labelled by their lower bound.
    #[default]
    Decile,
    /// Survey brackets from `Under 18` to `65+`.
    Categories,
}

/// Key of one box in the sleep duration box plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeGroup {
    Decile(u32),
    Category(AgeCategory),
}

impl AgeGroup {
    #[must_use]
    pub fn of(age: u32, grouping: AgeGrouping) -> Self {
        match grouping {
            AgeGrouping::Decile => Self::Decile(bin_decile(age)),
            AgeGrouping::Categories => Self::Category(AgeCategory::from_age(age)),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Decile(lower) => lower.to_string(),
            Self::Category(category) => category.label().to_owned(),
        }
    }
}

impl Serialize for AgeGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}

/// Mean sleep efficiency per (age, gender), for the scatter plot.
#[must_use]
pub fn efficiency_by_age_gender(records: &[Record]) -> Vec<ScatterPoint> {
    group::group_by_mean(
        records,
        |r| (r.age, r.gender.clone()),
        |r| r.sleep_efficiency,
    )
    .into_iter()
    .map(|GroupMean { key: (age, gender), mean }| ScatterPoint {
        age,
        gender,
        sleep_efficiency: mean,
    })
    .collect()
}

/// Mean sleep efficiency and deep sleep per alcohol level, for the bar chart.
#[must_use]
pub fn alcohol_effect(records: &[Record]) -> Vec<AlcoholEffect> {
    group::partition(records, |r| r.alcohol_consumption)
        .into_iter()
        .filter_map(|(alcohol_consumption, members)| {
            Some(AlcoholEffect {
                alcohol_consumption,
                sleep_efficiency: descriptive::mean(members.iter().map(|r| r.sleep_efficiency))?,
                deep_sleep: descriptive::mean(members.iter().map(|r| r.deep_sleep))?,
            })
        })
        .collect()
}

/// Box plot summary of sleep duration per age group.
#[must_use]
pub fn sleep_duration_by_age(
    records: &[Record],
    grouping: AgeGrouping,
) -> Vec<GroupQuantiles<AgeGroup>> {
    group::group_by_quantiles(
        records,
        |r| AgeGroup::of(r.age, grouping),
        |r| r.sleep_duration,
    )
}

/// Raw sleep durations per exact age.
#[must_use]
pub fn sleep_durations_by_age(records: &[Record]) -> Vec<AgeDurations> {
    group::partition(records, |r| r.age)
        .into_iter()
        .map(|(age, members)| AgeDurations {
            age,
            sleep_durations: members.iter().map(|r| r.sleep_duration).collect(),
        })
        .collect()
}
