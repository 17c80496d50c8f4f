//! Sleep duration distribution per age group.

use sleepviz_dataset::chart_data::AgeGroup;
use sleepviz_stats::group::GroupQuantiles;

use crate::{
    axis::{self, Axis, Tick},
    config::BoxPlotConfig,
    legend::{Legend, Swatch},
    scale::{BandScale, LinearScale},
    svg::{Document, Element, Node, num},
};

pub const TITLE: &str = "Sleep Duration Distribution by Age Group";
pub const SUBTITLE: &str = "Insights into sleep patterns across different age groups";

const LEGEND_LINES: [&str; 3] = [
    "Median: 50th percentile",
    "IQR: 25th to 75th percentile",
    "Outliers: < Q1 - 1.5 IQR or > Q3 + 1.5 IQR",
];

/// Box-and-whisker plot with one box per age group.
///
/// The whisker spans the 1.5 IQR fences, clipped to the plotted range.
/// Values beyond the fences are drawn as individual outlier dots.
#[derive(Debug, Clone, Copy)]
pub struct DurationBoxPlot<'a> {
    groups: &'a [GroupQuantiles<AgeGroup>],
    config: &'a BoxPlotConfig,
    data_max: Option<f64>,
}

impl<'a> DurationBoxPlot<'a> {
    #[must_use]
    pub fn new(groups: &'a [GroupQuantiles<AgeGroup>], config: &'a BoxPlotConfig) -> Self {
        Self {
            groups,
            config,
            data_max: None,
        }
    }

    /// Largest observed duration, which sets the top of the value axis.
    ///
    /// Without it the axis is sized from the upper quartiles and outliers.
    #[must_use]
    pub fn data_max(self, data_max: f64) -> Self {
        Self {
            data_max: Some(data_max),
            ..self
        }
    }

    fn value_max(&self) -> f64 {
        self.data_max
            .filter(|v| v.is_finite())
            .unwrap_or_else(|| {
                self.groups
                    .iter()
                    .flat_map(|g| {
                        std::iter::once(g.stats.q3).chain(g.stats.outliers.iter().copied())
                    })
                    .fold(0.0, f64::max)
            })
    }

    #[must_use]
    pub fn render(&self) -> Document {
        let config = self.config;
        let frame = config.frame();
        let (width, height) = (frame.inner_width(), frame.inner_height());

        let x = BandScale::new(self.groups.iter().map(|g| g.key.label()), (0.0, width))
            .padding(config.band_padding);
        let y = LinearScale::new((0.0, self.value_max() + 1.0), (height, 0.0)).nice(10);
        let (y_min, y_max) = y.domain();

        let band = x.bandwidth();
        let box_width = band * config.box_width_ratio;
        let center = band / 2.0;

        let boxes = self.groups.iter().filter_map(|group| {
            let label = group.key.label();
            let left = x.position(&label)?;
            let stats = &group.stats;
            let y_of = |v: f64| num(y.apply(v.clamp(y_min, y_max)));

            let whisker = Element::new("line")
                .attr("class", "whisker")
                .attr("x1", num(center))
                .attr("x2", num(center))
                .attr("y1", y_of(stats.min))
                .attr("y2", y_of(stats.max))
                .attr("stroke", "black");
            let top = y.apply(stats.q3);
            let rect = Element::new("rect")
                .attr("x", num(center - box_width / 2.0))
                .attr("y", num(top))
                .attr("width", num(box_width))
                .attr("height", num(y.apply(stats.q1) - top))
                .attr("fill", &config.box_color)
                .attr("stroke", "black")
                .child(Element::tooltip(format!(
                    "Age Group: {label}\nMedian: {:.2} hours\nIQR: {:.2} hours",
                    stats.median,
                    stats.iqr()
                )));
            let median = Element::new("line")
                .attr("class", "median")
                .attr("x1", num(center - box_width / 2.0))
                .attr("x2", num(center + box_width / 2.0))
                .attr("y1", num(y.apply(stats.median)))
                .attr("y2", num(y.apply(stats.median)))
                .attr("stroke", "white")
                .attr("stroke-width", 2);
            let outliers = stats.outliers.iter().map(|&value| {
                Element::new("circle")
                    .attr("class", "outlier")
                    .attr("cx", num(center))
                    .attr("cy", num(y.apply(value)))
                    .attr("r", 2)
                    .attr("fill", &config.outlier_color)
                    .child(Element::tooltip(format!("Outlier: {value:.2} hours")))
            });

            Some(
                Element::group()
                    .attr("class", "box")
                    .translate(left, 0.0)
                    .child(whisker)
                    .child(rect)
                    .child(median)
                    .children(outliers),
            )
        });

        let x_axis = Axis::bottom((0.0, width), Tick::bands(&x))
            .render()
            .translate(0.0, height);
        let y_axis =
            Axis::left((height, 0.0), Tick::linear(&y, 10, |v| format!("{v} hours"))).render();

        let legend = LEGEND_LINES
            .into_iter()
            .fold(Legend::new(), |legend, line| legend.entry(line, Swatch::None));

        let style = Element::new("style").child(Node::Text(format!(
            ".box rect:hover {{ fill: {}; }}",
            config.box_hover_color
        )));

        let root = Element::group()
            .translate(frame.margin.left, frame.margin.top)
            .child(style)
            .child(axis::title(TITLE, width / 2.0, -60.0, 24))
            .child(
                Element::text(SUBTITLE)
                    .attr("class", "subtitle")
                    .attr("x", num(width / 2.0))
                    .attr("y", -30)
                    .attr("text-anchor", "middle")
                    .attr("font-size", "16px"),
            )
            .child(x_axis)
            .child(axis::horizontal_label("Age Group", width / 2.0, height + 40.0))
            .child(y_axis)
            .child(axis::vertical_label("Sleep Duration", -height / 2.0, -60.0))
            .child(Element::group().attr("class", "boxes").children(boxes))
            .child(legend.render().translate(width - 280.0, height + 45.0));

        Document {
            width: frame.width,
            height: frame.height,
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use sleepviz_stats::box_plot::BoxPlotStats;

    use super::*;

    fn group(decade: u32, values: &[f64]) -> GroupQuantiles<AgeGroup> {
        GroupQuantiles {
            key: AgeGroup::Decile(decade),
            stats: BoxPlotStats::new(values.iter().copied()).unwrap(),
        }
    }

    fn with_class<'d>(doc: &'d Document, class: &str) -> Vec<&'d Element> {
        doc.root
            .descendants()
            .into_iter()
            .filter(|e| e.get_attr("class") == Some(class))
            .collect()
    }

    fn tooltip(element: &Element) -> String {
        element
            .descendants()
            .into_iter()
            .find(|e| e.name() == "title")
            .unwrap()
            .text_content()
    }

    #[test]
    fn test_one_box_per_group() {
        let config = BoxPlotConfig::default();
        let groups = [
            group(20, &[6.0, 7.0, 7.5, 8.0]),
            group(30, &[5.5, 6.5, 7.0]),
            group(40, &[7.0]),
        ];
        let doc = DurationBoxPlot::new(&groups, &config).render();
        assert_eq!(with_class(&doc, "box").len(), 3);
        assert_eq!(with_class(&doc, "whisker").len(), 3);
        assert_eq!(with_class(&doc, "median").len(), 3);
    }

    #[test]
    fn test_box_geometry() {
        // inner height 400; data max 9 gives a y domain of [0, 10]
        let config = BoxPlotConfig::default();
        let groups = [group(20, &[4.0, 6.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0])];
        let doc = DurationBoxPlot::new(&groups, &config).data_max(9.0).render();
        let rect = with_class(&doc, "box")[0]
            .descendants()
            .into_iter()
            .find(|e| e.name() == "rect")
            .unwrap();
        // Q3 = 9.25, Q1 = 6.0
        assert_eq!(rect.get_attr("y"), Some("30"));
        assert_eq!(rect.get_attr("height"), Some("130"));

        let median = with_class(&doc, "median")[0];
        assert_eq!(median.get_attr("y1"), Some("100"));
        assert_eq!(median.get_attr("stroke"), Some("white"));

        // fences 1.125 and 14.125, the upper one clipped to the top of the axis
        let whisker = with_class(&doc, "whisker")[0];
        assert_eq!(whisker.get_attr("y1"), Some("355"));
        assert_eq!(whisker.get_attr("y2"), Some("0"));
    }

    #[test]
    fn test_outliers_and_tooltips() {
        let config = BoxPlotConfig::default();
        let groups = [group(30, &[7.0, 7.0, 7.0, 7.0, 10.0])];
        let doc = DurationBoxPlot::new(&groups, &config).render();

        let outliers = with_class(&doc, "outlier");
        assert_eq!(outliers.len(), 1);
        assert_eq!(outliers[0].get_attr("fill"), Some("red"));
        assert_eq!(tooltip(outliers[0]), "Outlier: 10.00 hours");

        let rect = with_class(&doc, "box")[0]
            .descendants()
            .into_iter()
            .find(|e| e.name() == "rect")
            .unwrap();
        assert_eq!(
            tooltip(rect),
            "Age Group: 30\nMedian: 7.00 hours\nIQR: 0.00 hours"
        );
    }

    #[test]
    fn test_axis_is_sized_from_outliers_without_data_max() {
        let config = BoxPlotConfig::default();
        let groups = [group(30, &[7.0, 7.0, 7.0, 7.0, 10.0])];
        let plot = DurationBoxPlot::new(&groups, &config);
        assert_eq!(plot.value_max(), 10.0);
        let out = plot.render().to_string();
        assert!(out.contains(">11 hours</text>"));
        assert!(!out.contains(">12 hours</text>"));
    }

    #[test]
    fn test_decorations() {
        let config = BoxPlotConfig::default();
        let out = DurationBoxPlot::new(&[group(20, &[7.0])], &config)
            .render()
            .to_string();
        assert!(out.contains(TITLE));
        assert!(out.contains(SUBTITLE));
        assert!(out.contains(".box rect:hover { fill: #69b3a2; }"));
        assert!(out.contains("Outliers: &lt; Q1 - 1.5 IQR or &gt; Q3 + 1.5 IQR"));
        assert!(out.contains(">Age Group</text>"));
        assert!(out.contains(">Sleep Duration</text>"));
    }
}
