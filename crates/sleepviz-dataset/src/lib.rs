//! Sleep study dataset loading and chart datasets
//!
//! This crate owns the typed [`record::Record`], the CSV [`loader`] that
//! produces it, and the [`chart_data`] functions that reduce records to the
//! summary records each chart is drawn from.
//!
//! # Examples
//!
//! ```no_run
//! use sleepviz_dataset::{
//!     chart_data::{self, AgeGrouping},
//!     loader::{self, LoadOptions},
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let records = loader::load_records("data/Sleep_Efficiency.csv", &LoadOptions::default())?;
//! for bar in chart_data::alcohol_effect(&records) {
//!     println!(
//!         "{} drinks: {:.2}% efficiency",
//!         bar.alcohol_consumption, bar.sleep_efficiency
//!     );
//! }
//! let boxes = chart_data::sleep_duration_by_age(&records, AgeGrouping::Categories);
//! println!("{} age groups", boxes.len());
//! # Ok(())
//! # }
//! ```

pub mod chart_data;
pub mod loader;
pub mod record;
