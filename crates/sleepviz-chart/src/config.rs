//! Display configuration for the charts.
//!
//! Every field has a default, so a TOML file only needs the values it
//! overrides:
//!
//! ```toml
//! [scatter]
//! width = 1200.0
//!
//! [scatter.colors]
//! male = "navy"
//! ```

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use sleepviz_dataset::record::Gender;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("failed to read chart config")]
    Read(#[error(source)] io::Error),
    #[display("invalid chart config")]
    Parse(#[error(source)] toml::de::Error),
    #[display("failed to serialize chart config")]
    Serialize(#[error(source)] toml::ser::Error),
}

/// Outer margins around the plotting area, in pixels.
///
/// A `margin` table in the config file must set all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Canvas size and margins of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderColors {
    pub male: String,
    pub female: String,
    pub other: String,
}

impl GenderColors {
    #[must_use]
    pub fn color_for(&self, gender: &Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Other(_) => &self.other,
        }
    }
}

impl Default for GenderColors {
    fn default() -> Self {
        Self {
            male: "blue".to_owned(),
            female: "pink".to_owned(),
            other: "gray".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub width: f64,
    pub height: f64,
    pub point_radius: f64,
    pub point_opacity: f64,
    /// Upper bound of the age axis.
    pub max_age: f64,
    pub margin: Margin,
    pub colors: GenderColors,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            margin: Margin::new(50.0, 50.0, 50.0, 50.0),
            point_radius: 5.0,
            point_opacity: 0.8,
            max_age: 70.0,
            colors: GenderColors::default(),
        }
    }
}

impl ScatterConfig {
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub width: f64,
    pub height: f64,
    pub band_padding: f64,
    pub efficiency_color: String,
    pub deep_sleep_color: String,
    pub margin: Margin,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            margin: Margin::new(50.0, 50.0, 100.0, 80.0),
            band_padding: 0.1,
            efficiency_color: "steelblue".to_owned(),
            deep_sleep_color: "darkgreen".to_owned(),
        }
    }
}

impl BarConfig {
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxPlotConfig {
    pub width: f64,
    pub height: f64,
    pub band_padding: f64,
    /// Box width as a fraction of the band width.
    pub box_width_ratio: f64,
    pub box_color: String,
    pub box_hover_color: String,
    pub outlier_color: String,
    pub margin: Margin,
}

impl Default for BoxPlotConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            margin: Margin::new(100.0, 50.0, 100.0, 80.0),
            band_padding: 0.2,
            box_width_ratio: 0.6,
            box_color: "#1f77b4".to_owned(),
            box_hover_color: "#69b3a2".to_owned(),
            outlier_color: "red".to_owned(),
        }
    }
}

impl BoxPlotConfig {
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }
}

/// Display options for all three charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub scatter: ScatterConfig,
    pub bar: BarConfig,
    pub box_plot: BoxPlotConfig,
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    pub fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}
