//! Dataset overview printed as fixed-width tables.

use clap::Args;
use sleepviz_dataset::{
    chart_data::{self, AgeGroup, AgeGrouping, AlcoholEffect, ScatterPoint},
    record::Record,
};
use sleepviz_stats::{descriptive::DescriptiveStats, group::GroupQuantiles};

use crate::util::DataArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub data: DataArg,

    /// Age grouping of the sleep duration table (decile, categories)
    #[arg(long, default_value = "decile")]
    pub age_grouping: AgeGrouping,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let records = arg.data.load()?;

    println!(
        "Sleep Dataset Summary ({} records from {})",
        records.len(),
        arg.data.data.display()
    );
    println!("==========================================\n");

    print_column_stats(&records);
    println!();

    print_efficiency_by_age_gender(&chart_data::efficiency_by_age_gender(&records));
    println!();

    print_alcohol_effect(&chart_data::alcohol_effect(&records));
    println!();

    print_duration_by_age(&chart_data::sleep_duration_by_age(
        &records,
        arg.age_grouping,
    ));

    Ok(())
}

fn print_column_stats(records: &[Record]) {
    println!("Columns:");
    println!(
        "  {:<22} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Column", "Count", "Min", "Max", "Mean", "Median", "Std Dev"
    );
    println!("  {}", "-".repeat(74));
    for (name, column) in Record::NUMERIC_COLUMNS {
        match DescriptiveStats::new(records.iter().map(column)) {
            Some(stats) => println!(
                "  {:<22} {:>6} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
                name, stats.count, stats.min, stats.max, stats.mean, stats.median, stats.std_dev
            ),
            None => println!("  {name:<22} {:>6}", 0),
        }
    }
}

fn print_efficiency_by_age_gender(points: &[ScatterPoint]) {
    println!("Sleep efficiency by age and gender:");
    println!("  {:<6} {:<10} {:>12}", "Age", "Gender", "Efficiency%");
    println!("  {}", "-".repeat(30));
    for point in points {
        println!(
            "  {:<6} {:<10} {:>12.2}",
            point.age,
            point.gender.label(),
            point.sleep_efficiency
        );
    }
}

fn print_alcohol_effect(bars: &[AlcoholEffect]) {
    println!("Effect of alcohol consumption:");
    println!(
        "  {:<8} {:>12} {:>12}",
        "Drinks", "Efficiency%", "Deep sleep%"
    );
    println!("  {}", "-".repeat(34));
    for bar in bars {
        println!(
            "  {:<8} {:>12.2} {:>12.2}",
            bar.alcohol_consumption, bar.sleep_efficiency, bar.deep_sleep
        );
    }
}

fn print_duration_by_age(boxes: &[GroupQuantiles<AgeGroup>]) {
    println!("Sleep duration by age group (hours):");
    println!(
        "  {:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>9}",
        "Group", "Fence-", "Q1", "Median", "Q3", "Fence+", "Outliers"
    );
    println!("  {}", "-".repeat(66));
    for group in boxes {
        let stats = &group.stats;
        println!(
            "  {:<10} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>9}",
            group.key.label(),
            stats.min,
            stats.q1,
            stats.median,
            stats.q3,
            stats.max,
            stats.outliers.len()
        );
    }
}
