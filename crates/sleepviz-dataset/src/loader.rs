//! CSV loading and type coercion
//!
//! The source file is the "Sleep Efficiency" survey export: one row per
//! subject, a header row, and human-readable column names. Coercion rules:
//!
//! - `ID` and `Age` become 0 when blank or not a non-negative whole number, with a warning
//! - Sleep efficiency and the sleep stage percentages become NaN when blank or malformed
//! - Caffeine, alcohol, exercise and sleep duration become 0 when blank or malformed
//! - `Smoking status` is true only for the literal `Yes`
//!
//! Sleep efficiency is stored as a fraction in the published dataset but as a
//! percentage in some re-exports. [`EfficiencyScale`] settles this once, at
//! load time, so downstream code always sees a 0–100 percentage.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::record::{Gender, Record};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[error(source)]
        source: io::Error,
    },
    #[display("malformed CSV input")]
    Csv(#[error(source)] csv::Error),
}

/// How the `Sleep efficiency` column is scaled in the source file.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub enum EfficiencyScale {
    /// Detect from the data: fractions if every finite value is at most 1.0.
    #[default]
    Auto,
    /// Values are fractions in `[0, 1]` and are multiplied by 100.
    Fraction,
    /// Values are already percentages.
    Percent,
}

impl EfficiencyScale {
    fn resolve(self, values: impl IntoIterator<Item = f64>) -> Self {
        match self {
            Self::Auto => {
                let mut finite = values.into_iter().filter(|v| v.is_finite()).peekable();
                if finite.peek().is_some() && finite.all(|v| v <= 1.0) {
                    Self::Fraction
                } else {
                    Self::Percent
                }
            }
            scale => scale,
        }
    }

    fn apply(self, value: f64) -> f64 {
        match self {
            Self::Fraction => round_to_hundredths(value * 100.0),
            Self::Auto | Self::Percent => value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub efficiency_scale: EfficiencyScale,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Sleep efficiency")]
    sleep_efficiency: String,
    #[serde(rename = "REM sleep percentage")]
    rem_sleep: String,
    #[serde(rename = "Deep sleep percentage")]
    deep_sleep: String,
    #[serde(rename = "Light sleep percentage")]
    light_sleep: String,
    #[serde(rename = "Caffeine consumption")]
    caffeine_consumption: String,
    #[serde(rename = "Alcohol consumption")]
    alcohol_consumption: String,
    #[serde(rename = "Smoking status")]
    smoking_status: String,
    #[serde(rename = "Exercise frequency")]
    exercise_frequency: String,
    #[serde(rename = "Sleep duration")]
    sleep_duration: String,
}

impl RawRecord {
    fn into_record(self, line: u64) -> Record {
        Record {
            id: parse_whole_or_zero(&self.id, line, "ID"),
            age: parse_whole_or_zero(&self.age, line, "Age"),
            gender: Gender::parse(&self.gender),
            sleep_efficiency: parse_or_nan(&self.sleep_efficiency),
            rem_sleep: parse_or_nan(&self.rem_sleep),
            deep_sleep: parse_or_nan(&self.deep_sleep),
            light_sleep: parse_or_nan(&self.light_sleep),
            caffeine_consumption: parse_or_zero(&self.caffeine_consumption),
            alcohol_consumption: parse_count(&self.alcohol_consumption),
            smoking_status: self.smoking_status.trim() == "Yes",
            exercise_frequency: parse_or_zero(&self.exercise_frequency),
            sleep_duration: parse_or_zero(&self.sleep_duration),
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

fn parse_or_nan(value: &str) -> f64 {
    parse_number(value).unwrap_or(f64::NAN)
}

fn parse_or_zero(value: &str) -> f64 {
    parse_number(value)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_count(value: &str) -> u32 {
    parse_or_zero(value).max(0.0).trunc() as u32
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_whole(value: &str) -> Option<u32> {
    let v = parse_number(value)?;
    (v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX)).then(|| v as u32)
}

fn parse_whole_or_zero(value: &str, line: u64, column: &str) -> u32 {
    parse_whole(value).unwrap_or_else(|| {
        tracing::warn!(line, column, value, "not a whole number, using 0");
        0
    })
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reads records from CSV data with a header row.
///
/// Columns not used by [`Record`] are ignored.
pub fn read_records<R>(reader: R, options: &LoadOptions) -> Result<Vec<Record>, LoadError>
where
    R: io::Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, raw) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let raw = raw.map_err(LoadError::Csv)?;
        // header is line 1
        let line = index as u64 + 2;
        records.push(raw.into_record(line));
    }

    let scale = options
        .efficiency_scale
        .resolve(records.iter().map(|r| r.sleep_efficiency));
    tracing::debug!(
        requested = %options.efficiency_scale,
        resolved = %scale,
        "sleep efficiency scale"
    );
    for record in &mut records {
        record.sleep_efficiency = scale.apply(record.sleep_efficiency);
    }

    Ok(records)
}

/// Opens `path` and reads its records with [`read_records`].
pub fn load_records<P>(path: P, options: &LoadOptions) -> Result<Vec<Record>, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    read_records(BufReader::new(file), options)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const HEADER: &str = "ID,Age,Gender,Bedtime,Wakeup time,Sleep duration,Sleep efficiency,\
REM sleep percentage,Deep sleep percentage,Light sleep percentage,Awakenings,\
Caffeine consumption,Alcohol consumption,Smoking status,Exercise frequency";

    fn csv_text(rows: &[&str]) -> String {
        let mut data = String::from(HEADER);
        for row in rows {
            data.push('\n');
            data.push_str(row);
        }
        data
    }

    fn read(rows: &[&str], scale: EfficiencyScale) -> Result<Vec<Record>, LoadError> {
        read_records(
            csv_text(rows).as_bytes(),
            &LoadOptions {
                efficiency_scale: scale,
            },
        )
    }

    #[test]
    fn test_reads_typed_record() {
        let records = read(
            &["1,65,Female,2021-03-06 01:00:00,2021-03-06 07:00:00,6,0.88,18,70,12,0.0,0.0,0.0,Yes,3.0"],
            EfficiencyScale::Auto,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![Record {
                id: 1,
                age: 65,
                gender: Gender::Female,
                sleep_efficiency: 88.0,
                rem_sleep: 18.0,
                deep_sleep: 70.0,
                light_sleep: 12.0,
                caffeine_consumption: 0.0,
                alcohol_consumption: 0,
                smoking_status: true,
                exercise_frequency: 3.0,
                sleep_duration: 6.0,
            }]
        );
    }

    #[test]
    fn test_blank_counts_become_zero_and_blank_percentages_nan() {
        let records = read(
            &["2,69,Male,,,7,0.66,19,28,53,3.0,,3.0,No,"],
            EfficiencyScale::Fraction,
        )
        .unwrap();
        let record = &records[0];
        assert_eq!(record.caffeine_consumption, 0.0);
        assert_eq!(record.alcohol_consumption, 3);
        assert_eq!(record.exercise_frequency, 0.0);
        assert!(!record.smoking_status);

        let records = read(&["3,40,Male,,,7,,,28,53,,,,No,"], EfficiencyScale::Fraction).unwrap();
        assert!(records[0].sleep_efficiency.is_nan());
        assert!(records[0].rem_sleep.is_nan());
    }

    #[test]
    fn test_fraction_scale_rounds_to_hundredths() {
        let records = read(&["1,30,Male,,,7,0.5678,20,50,30,,0,0,No,1"], EfficiencyScale::Fraction)
            .unwrap();
        assert_eq!(records[0].sleep_efficiency, 56.78);
    }

    #[test]
    fn test_auto_scale_keeps_percentages() {
        let records = read(
            &[
                "1,30,Male,,,7,88,20,50,30,,0,0,No,1",
                "2,31,Male,,,7,0.9,20,50,30,,0,0,No,1",
            ],
            EfficiencyScale::Auto,
        )
        .unwrap();
        assert_eq!(records[0].sleep_efficiency, 88.0);
        assert_eq!(records[1].sleep_efficiency, 0.9);
    }

    #[test]
    fn test_percent_scale_is_untouched() {
        let records =
            read(&["1,30,Male,,,7,0.9,20,50,30,,0,0,No,1"], EfficiencyScale::Percent).unwrap();
        assert_eq!(records[0].sleep_efficiency, 0.9);
    }

    #[test]
    fn test_blank_or_malformed_id_and_age_become_zero() {
        let records = read(
            &[
                "1,30,Male,,,7,0.9,20,50,30,,0,0,No,1",
                "2,,Male,,,7,0.9,20,50,30,,0,0,No,1",
                "x,41.5,Female,,,8,0.8,20,50,30,,0,0,No,1",
            ],
            EfficiencyScale::Auto,
        )
        .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].age, 30);
        assert_eq!((records[1].id, records[1].age), (2, 0));
        assert_eq!((records[2].id, records[2].age), (0, 0));
        assert_eq!(records[2].sleep_duration, 8.0);
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let err = read_records(
            "ID,Age\n1,30".as_bytes(),
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_empty_file_yields_no_records() {
        let records = read(&[], EfficiencyScale::Auto).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", csv_text(&["7,23,Female,,,8,0.91,25,60,15,1,25,1,No,2"])).unwrap();
        let records = load_records(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sleep_efficiency, 91.0);
        assert_eq!(records[0].alcohol_consumption, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records("/nonexistent/sleep.csv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn test_scale_from_str() {
        assert_eq!("fraction".parse::<EfficiencyScale>().unwrap(), EfficiencyScale::Fraction);
        assert_eq!("Percent".parse::<EfficiencyScale>().unwrap(), EfficiencyScale::Percent);
        assert!("ratio".parse::<EfficiencyScale>().is_err());
    }
}
