use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use sleepviz_dataset::{
    chart_data::{self, AgeDurations, AgeGroup, AgeGrouping, AlcoholEffect, ScatterPoint},
    record::Record,
};
use sleepviz_stats::group::GroupQuantiles;

use crate::util::{DataArg, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ExportArg {
    #[clap(flatten)]
    pub data: DataArg,

    /// Age grouping of the sleep duration summaries (decile, categories)
    #[arg(long, default_value = "decile")]
    pub age_grouping: AgeGrouping,

    /// Output file path (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Every chart dataset of one CSV file. Means that are not a number are written as `null`.
#[derive(Debug, Serialize)]
struct ExportReport<'a> {
    generated_at: DateTime<Utc>,
    source: &'a Path,
    record_count: usize,
    age_grouping: String,
    efficiency_by_age_gender: Vec<ScatterPoint>,
    alcohol_effect: Vec<AlcoholEffect>,
    sleep_duration_by_age: Vec<GroupQuantiles<AgeGroup>>,
    sleep_durations_by_age: Vec<AgeDurations>,
}

impl<'a> ExportReport<'a> {
    fn new(source: &'a Path, records: &[Record], age_grouping: AgeGrouping) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            record_count: records.len(),
            age_grouping: age_grouping.to_string(),
            efficiency_by_age_gender: chart_data::efficiency_by_age_gender(records),
            alcohol_effect: chart_data::alcohol_effect(records),
            sleep_duration_by_age: chart_data::sleep_duration_by_age(records, age_grouping),
            sleep_durations_by_age: chart_data::sleep_durations_by_age(records),
        }
    }
}

pub(crate) fn run(arg: &ExportArg) -> anyhow::Result<()> {
    let records = arg.data.load()?;
    let report = ExportReport::new(&arg.data.data, &records, arg.age_grouping);

    Output::save_json(&report, arg.output.clone())?;
    if let Some(path) = &arg.output {
        eprintln!("Exported chart datasets to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const CSV: &str = "\
ID,Age,Gender,Sleep duration,Sleep efficiency,REM sleep percentage,Deep sleep percentage,Light sleep percentage,Caffeine consumption,Alcohol consumption,Smoking status,Exercise frequency
1,25,Female,7.0,0.88,20,60,20,0,0,No,3
2,27,Male,6.0,0.70,25,50,25,50,3,Yes,1
3,65,Female,8.0,0.90,20,65,15,,0,No,
";

    fn write_dataset(dir: &Path) -> PathBuf {
        let path = dir.join("sleep.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_export_writes_all_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_dataset(dir.path());
        let output = dir.path().join("report.json");
        let arg = ExportArg {
            data: DataArg {
                data,
                efficiency_scale: sleepviz_dataset::loader::EfficiencyScale::Auto,
            },
            age_grouping: AgeGrouping::Decile,
            output: Some(output.clone()),
        };
        run(&arg).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["record_count"], 3);
        assert_eq!(json["age_grouping"], "Decile");
        assert_eq!(json["alcohol_effect"].as_array().unwrap().len(), 2);
        assert_eq!(json["alcohol_effect"][0]["sleep_efficiency"], 89.0);
        assert_eq!(json["sleep_duration_by_age"][0]["key"], "20");
        assert_eq!(json["sleep_duration_by_age"][0]["median"], 6.5);
        assert_eq!(json["efficiency_by_age_gender"][0]["gender"], "Female");
        assert!(json["generated_at"].is_string());
    }
}
