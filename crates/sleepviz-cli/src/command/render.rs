use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use sleepviz_chart::{
    bar::{self, AlcoholBarChart},
    box_plot::{self, DurationBoxPlot},
    config::ChartConfig,
    html::{self, ChartFile},
    scatter::{self, ScatterPlot},
};
use sleepviz_dataset::{
    chart_data::{self, AgeGrouping},
    record::Record,
};

use crate::util::{self, DataArg};

const PAGE_TITLE: &str = "Sleep Efficiency Analysis";
const SCATTER_FILE: &str = "scatter.svg";
const BAR_FILE: &str = "bar.svg";
const BOX_FILE: &str = "box.svg";
const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, Args)]
pub(crate) struct RenderArg {
    #[clap(flatten)]
    pub data: DataArg,

    /// Directory to write the SVG files and index page into
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Chart configuration TOML file (defaults when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Age grouping of the sleep duration box plot (decile, categories)
    #[arg(long, default_value = "decile")]
    pub age_grouping: AgeGrouping,
}

pub(crate) fn run(arg: &RenderArg) -> anyhow::Result<()> {
    let config = match &arg.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("Failed to load chart config: {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let records = arg.data.load()?;

    fs::create_dir_all(&arg.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            arg.output_dir.display()
        )
    })?;

    render_charts(&records, &config, arg.age_grouping, &arg.output_dir)?;

    eprintln!("Charts written to {}", arg.output_dir.display());
    Ok(())
}

fn render_charts(
    records: &[Record],
    config: &ChartConfig,
    age_grouping: AgeGrouping,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let points = chart_data::efficiency_by_age_gender(records);
    let scatter_svg = ScatterPlot::new(&points, &config.scatter).render();
    util::write_text_file(
        "scatter chart",
        output_dir.join(SCATTER_FILE),
        &scatter_svg.to_string(),
    )?;

    let bars = chart_data::alcohol_effect(records);
    let bar_svg = AlcoholBarChart::new(&bars, &config.bar).render();
    util::write_text_file("bar chart", output_dir.join(BAR_FILE), &bar_svg.to_string())?;

    let boxes = chart_data::sleep_duration_by_age(records, age_grouping);
    let duration_plot = DurationBoxPlot::new(&boxes, &config.box_plot);
    let duration_plot = match max_sleep_duration(records) {
        Some(max) => duration_plot.data_max(max),
        None => duration_plot,
    };
    let box_svg = duration_plot.render();
    util::write_text_file("box plot", output_dir.join(BOX_FILE), &box_svg.to_string())?;

    let index = html::render_index_html(
        PAGE_TITLE,
        &[
            ChartFile {
                title: scatter::TITLE,
                file: SCATTER_FILE,
            },
            ChartFile {
                title: bar::TITLE,
                file: BAR_FILE,
            },
            ChartFile {
                title: box_plot::TITLE,
                file: BOX_FILE,
            },
        ],
    );
    util::write_text_file("index page", output_dir.join(INDEX_FILE), &index)?;
    Ok(())
}

fn max_sleep_duration(records: &[Record]) -> Option<f64> {
    records
        .iter()
        .map(|r| r.sleep_duration)
        .filter(|v| v.is_finite())
        .max_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use sleepviz_dataset::loader::EfficiencyScale;

    use super::*;

    const CSV: &str = "\
ID,Age,Gender,Sleep duration,Sleep efficiency,REM sleep percentage,Deep sleep percentage,Light sleep percentage,Caffeine consumption,Alcohol consumption,Smoking status,Exercise frequency
1,25,Female,7.0,88,20,60,20,0,0,No,3
2,34,Male,6.0,70,25,50,25,50,3,Yes,1
3,65,Other,8.0,90,20,65,15,,1,No,
";

    #[test]
    fn test_render_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("sleep.csv");
        fs::write(&data, CSV).unwrap();
        let output_dir = dir.path().join("charts");

        let arg = RenderArg {
            data: DataArg {
                data,
                efficiency_scale: EfficiencyScale::Percent,
            },
            output_dir: output_dir.clone(),
            config: None,
            age_grouping: AgeGrouping::Categories,
        };
        run(&arg).unwrap();

        for file in [SCATTER_FILE, BAR_FILE, BOX_FILE, INDEX_FILE] {
            assert!(output_dir.join(file).is_file(), "{file} missing");
        }
        let box_svg = fs::read_to_string(output_dir.join(BOX_FILE)).unwrap();
        assert!(box_svg.contains("Age Group: 25-34"));
        assert!(box_svg.contains("Age Group: 65+"));
        let index = fs::read_to_string(output_dir.join(INDEX_FILE)).unwrap();
        assert!(index.contains(r#"data="box.svg""#));
    }

    #[test]
    fn test_render_applies_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("sleep.csv");
        fs::write(&data, CSV).unwrap();
        let config = dir.path().join("chart.toml");
        fs::write(&config, "[bar]\nefficiency_color = \"orange\"\n").unwrap();

        let arg = RenderArg {
            data: DataArg {
                data,
                efficiency_scale: EfficiencyScale::Auto,
            },
            output_dir: dir.path().to_path_buf(),
            config: Some(config),
            age_grouping: AgeGrouping::Decile,
        };
        run(&arg).unwrap();

        let bar_svg = fs::read_to_string(dir.path().join(BAR_FILE)).unwrap();
        assert!(bar_svg.contains(r#"fill="orange""#));
    }

    #[test]
    fn test_max_sleep_duration_of_empty_dataset() {
        assert_eq!(max_sleep_duration(&[]), None);
    }
}
