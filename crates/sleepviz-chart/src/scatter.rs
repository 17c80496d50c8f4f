//! Sleep efficiency by age, colored by gender.

use std::collections::BTreeSet;

use sleepviz_dataset::{chart_data::ScatterPoint, record::Gender};

use crate::{
    axis::{self, Axis, Tick},
    config::ScatterConfig,
    legend::{Legend, Swatch},
    scale::LinearScale,
    svg::{Document, Element, num},
};

pub const TITLE: &str = "Sleep Efficiency by Age and Gender";

/// Scatter plot of one point per (age, gender) cell, placed at the cell's
/// mean sleep efficiency.
///
/// Points whose efficiency is not a number are left out of the plot.
#[derive(Debug, Clone, Copy)]
pub struct ScatterPlot<'a> {
    points: &'a [ScatterPoint],
    config: &'a ScatterConfig,
}

impl<'a> ScatterPlot<'a> {
    #[must_use]
    pub fn new(points: &'a [ScatterPoint], config: &'a ScatterConfig) -> Self {
        Self { points, config }
    }

    #[must_use]
    pub fn render(&self) -> Document {
        let config = self.config;
        let frame = config.frame();
        let (width, height) = (frame.inner_width(), frame.inner_height());

        let x = LinearScale::new((0.0, config.max_age), (0.0, width));
        let y = LinearScale::new((0.0, 100.0), (height, 0.0));

        let x_axis = Axis::bottom((0.0, width), Tick::linear(&x, 10, |v| format!("{v}")))
            .render()
            .translate(0.0, height);
        let y_axis = Axis::left((height, 0.0), Tick::linear(&y, 10, |v| format!("{v}"))).render();

        let points = self
            .points
            .iter()
            .filter(|p| p.sleep_efficiency.is_finite())
            .map(|p| {
                Element::new("circle")
                    .attr("class", "point")
                    .attr("cx", num(x.apply(f64::from(p.age))))
                    .attr("cy", num(y.apply(p.sleep_efficiency)))
                    .attr("r", num(config.point_radius))
                    .attr("fill", config.colors.color_for(&p.gender))
                    .attr("opacity", num(config.point_opacity))
                    .child(Element::tooltip(format!(
                        "Age: {}\nSleep Efficiency: {:.2}%\nGender: {}",
                        p.age,
                        p.sleep_efficiency,
                        p.gender.label()
                    )))
            });

        let root = Element::group()
            .translate(frame.margin.left, frame.margin.top)
            .child(axis::title(TITLE, width / 2.0, -20.0, 16))
            .child(x_axis)
            .child(axis::horizontal_label("Age (Years)", width / 2.0, height + 40.0))
            .child(y_axis)
            .child(axis::vertical_label("Sleep Efficiency (%)", -height / 2.0, -40.0))
            .child(Element::group().attr("class", "points").children(points))
            .child(self.legend().render().translate(10.0, 10.0));

        Document {
            width: frame.width,
            height: frame.height,
            root,
        }
    }

    /// Male and Female always, then any other gender labels present in the data.
    fn legend(&self) -> Legend {
        let colors = &self.config.colors;
        let others = self
            .points
            .iter()
            .filter_map(|p| match &p.gender {
                Gender::Other(label) => Some(label.as_str()),
                Gender::Male | Gender::Female => None,
            })
            .collect::<BTreeSet<_>>();
        others.into_iter().fold(
            Legend::new()
                .entry("Male", Swatch::Circle(colors.male.clone()))
                .entry("Female", Swatch::Circle(colors.female.clone())),
            |legend, label| legend.entry(label, Swatch::Circle(colors.other.clone())),
        )
    }
}
