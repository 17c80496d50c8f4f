//! SVG rendering of the sleep study charts
//!
//! Each chart is a small view struct over the summary records from
//! [`sleepviz_dataset::chart_data`] and its display settings from [`config`].
//! `render()` returns a [`svg::Document`] whose `Display` output is a
//! standalone SVG file:
//!
//! - [`scatter::ScatterPlot`]: sleep efficiency by age, colored by gender
//! - [`bar::AlcoholBarChart`]: sleep efficiency and deep sleep per alcohol level
//! - [`box_plot::DurationBoxPlot`]: sleep duration distribution per age group
//!
//! [`html::render_index_html`] builds a page that embeds the rendered files.
//!
//! # Examples
//!
//! ```
//! use sleepviz_chart::{bar::AlcoholBarChart, config::ChartConfig};
//! use sleepviz_dataset::chart_data::AlcoholEffect;
//!
//! let config = ChartConfig::default();
//! let bars = [AlcoholEffect {
//!     alcohol_consumption: 0,
//!     sleep_efficiency: 82.5,
//!     deep_sleep: 55.0,
//! }];
//! let svg = AlcoholBarChart::new(&bars, &config.bar).render().to_string();
//! assert!(svg.contains("Sleep Efficiency: 82.50%"));
//! ```

pub mod axis;
pub mod bar;
pub mod box_plot;
pub mod config;
pub mod html;
pub mod legend;
pub mod scale;
pub mod scatter;
pub mod svg;
