//! Mean sleep efficiency and deep sleep per alcohol consumption level.

use sleepviz_dataset::chart_data::AlcoholEffect;

use crate::{
    axis::{self, Axis, Tick},
    config::BarConfig,
    legend::{Legend, Swatch},
    scale::{BandScale, LinearScale},
    svg::{Document, Element, num},
};

pub const TITLE: &str = "Effect of alcohol consumption on sleep quality";

/// Grouped bar chart with two side-by-side bars per alcohol level.
///
/// Each bar takes half of its band. A mean that is not a number draws no bar.
#[derive(Debug, Clone, Copy)]
pub struct AlcoholBarChart<'a> {
    bars: &'a [AlcoholEffect],
    config: &'a BarConfig,
}

impl<'a> AlcoholBarChart<'a> {
    #[must_use]
    pub fn new(bars: &'a [AlcoholEffect], config: &'a BarConfig) -> Self {
        Self { bars, config }
    }

    #[must_use]
    pub fn render(&self) -> Document {
        let config = self.config;
        let frame = config.frame();
        let (width, height) = (frame.inner_width(), frame.inner_height());

        let x = BandScale::new(
            self.bars.iter().map(|b| b.alcohol_consumption.to_string()),
            (0.0, width),
        )
        .padding(config.band_padding);
        let y = LinearScale::new((0.0, 100.0), (height, 0.0));
        let half = x.bandwidth() / 2.0;

        let bar = |class: &'static str, left: f64, value: f64, color: &str, tooltip: String| {
            let top = y.apply(value.clamp(0.0, 100.0));
            Element::new("rect")
                .attr("class", class)
                .attr("x", num(left))
                .attr("y", num(top))
                .attr("width", num(half))
                .attr("height", num(height - top))
                .attr("fill", color)
                .child(Element::tooltip(tooltip))
        };

        let groups = self.bars.iter().filter_map(|b| {
            let left = x.position(&b.alcohol_consumption.to_string())?;
            let drinks = b.alcohol_consumption;
            let efficiency = b.sleep_efficiency.is_finite().then(|| {
                bar(
                    "bar-sleep-efficiency",
                    left,
                    b.sleep_efficiency,
                    &config.efficiency_color,
                    format!(
                        "Alcohol Consumption: {drinks} drinks\nSleep Efficiency: {:.2}%",
                        b.sleep_efficiency
                    ),
                )
            });
            let deep_sleep = b.deep_sleep.is_finite().then(|| {
                bar(
                    "bar-deep-sleep",
                    left + half,
                    b.deep_sleep,
                    &config.deep_sleep_color,
                    format!(
                        "Alcohol Consumption: {drinks} drinks\nDeep Sleep Percentage: {:.2}%",
                        b.deep_sleep
                    ),
                )
            });
            Some(
                Element::group()
                    .attr("class", "bar-group")
                    .children(efficiency)
                    .children(deep_sleep),
            )
        });

        let x_axis = Axis::bottom((0.0, width), Tick::bands(&x))
            .rotate_labels(-65.0)
            .render()
            .translate(0.0, height);
        let y_axis = Axis::left((height, 0.0), Tick::linear(&y, 10, |v| format!("{v}"))).render();

        let legend = Legend::new()
            .entry("Sleep Efficiency", Swatch::Square(config.efficiency_color.clone()))
            .entry("Deep Sleep Percentage", Swatch::Square(config.deep_sleep_color.clone()));

        let root = Element::group()
            .translate(frame.margin.left, frame.margin.top)
            .child(axis::title(TITLE, width / 2.0, -20.0, 16))
            .child(x_axis)
            .child(axis::horizontal_label(
                "Alcohol Consumption (drinks)",
                width / 2.0,
                height + frame.margin.bottom - 10.0,
            ))
            .child(y_axis)
            .child(axis::vertical_label(
                "Average Value (%)",
                -height / 2.0,
                -frame.margin.left + 20.0,
            ))
            .child(Element::group().attr("class", "bars").children(groups))
            .child(legend.render().translate(width - 170.0, 10.0));

        Document {
            width: frame.width,
            height: frame.height,
            root,
        }
    }
}
