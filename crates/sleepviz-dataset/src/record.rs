use serde::{Serialize, Serializer};

/// Self-reported gender of a study subject.
///
/// Anything other than `Male` or `Female` is kept verbatim in [`Gender::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Male" => Self::Male,
            "Female" => Self::Female,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other(label) => label,
        }
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// One subject's measurements.
///
/// Percentages are on a 0–100 scale. Measurement fields that were missing in
/// the source are NaN; count-like fields that were missing are 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: u32,
    pub age: u32,
    pub gender: Gender,
    pub sleep_efficiency: f64,
    pub rem_sleep: f64,
    pub deep_sleep: f64,
    pub light_sleep: f64,
    pub caffeine_consumption: f64,
    pub alcohol_consumption: u32,
    pub smoking_status: bool,
    pub exercise_frequency: f64,
    pub sleep_duration: f64,
}

/// Accessor for a numeric column of [`Record`].
pub type ColumnFn = fn(&Record) -> f64;

impl Record {
    /// Numeric columns with their display names, in source column order.
    pub const NUMERIC_COLUMNS: [(&'static str, ColumnFn); 9] = [
        ("Age", |r| f64::from(r.age)),
        ("Sleep efficiency (%)", |r| r.sleep_efficiency),
        ("REM sleep (%)", |r| r.rem_sleep),
        ("Deep sleep (%)", |r| r.deep_sleep),
        ("Light sleep (%)", |r| r.light_sleep),
        ("Caffeine (mg)", |r| r.caffeine_consumption),
        ("Alcohol (drinks)", |r| f64::from(r.alcohol_consumption)),
        ("Exercise (per week)", |r| r.exercise_frequency),
        ("Sleep duration (h)", |r| r.sleep_duration),
    ];
}
