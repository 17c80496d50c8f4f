use crate::{
    scale::{BandScale, LinearScale},
    svg::{Element, num},
};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// A labelled tick at a pixel position along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl Tick {
    /// Ticks of a linear scale, labelled with `format`.
    pub fn linear<F>(scale: &LinearScale, count: usize, mut format: F) -> Vec<Self>
    where
        F: FnMut(f64) -> String,
    {
        scale
            .ticks(count)
            .into_iter()
            .map(|value| Self {
                position: scale.apply(value),
                label: format(value),
            })
            .collect()
    }

    /// One tick per band, centered in the band.
    #[must_use]
    pub fn bands(scale: &BandScale) -> Vec<Self> {
        let half = scale.bandwidth() / 2.0;
        scale
            .domain()
            .iter()
            .filter_map(|key| {
                Some(Self {
                    position: scale.position(key)? + half,
                    label: key.clone(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// Axis line with tick marks and labels, drawn at the origin of its parent.
#[derive(Debug, Clone)]
pub struct Axis {
    orientation: Orientation,
    range: (f64, f64),
    ticks: Vec<Tick>,
    label_rotation: Option<f64>,
}

impl Axis {
    #[must_use]
    pub fn bottom(range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self {
            orientation: Orientation::Bottom,
            range,
            ticks,
            label_rotation: None,
        }
    }

    #[must_use]
    pub fn left(range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self {
            orientation: Orientation::Left,
            range,
            ticks,
            label_rotation: None,
        }
    }

    /// Rotates tick labels by `degrees`, anchoring them at their end.
    #[must_use]
    pub fn rotate_labels(self, degrees: f64) -> Self {
        Self {
            label_rotation: Some(degrees),
            ..self
        }
    }

    #[must_use]
    pub fn render(&self) -> Element {
        let (r0, r1) = (num(self.range.0), num(self.range.1));
        let domain_path = match self.orientation {
            Orientation::Bottom => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            Orientation::Left => format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}"),
        };
        let domain = Element::new("path")
            .attr("class", "domain")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("d", domain_path);

        let ticks = self.ticks.iter().map(|tick| self.render_tick(tick));

        Element::group()
            .attr("class", "axis")
            .attr("fill", "none")
            .attr(
                "text-anchor",
                match self.orientation {
                    Orientation::Bottom => "middle",
                    Orientation::Left => "end",
                },
            )
            .child(domain)
            .children(ticks)
    }

    fn render_tick(&self, tick: &Tick) -> Element {
        let offset = TICK_SIZE + TICK_PADDING;
        let (group, line, text) = match self.orientation {
            Orientation::Bottom => (
                Element::group().translate(tick.position, 0.0),
                Element::new("line").attr("y2", TICK_SIZE),
                Element::text(&tick.label).attr("y", offset).attr("dy", "0.71em"),
            ),
            Orientation::Left => (
                Element::group().translate(0.0, tick.position),
                Element::new("line").attr("x2", -TICK_SIZE),
                Element::text(&tick.label).attr("x", -offset).attr("dy", "0.32em"),
            ),
        };
        let text = match self.label_rotation {
            Some(degrees) => text
                .attr("transform", format_args!("rotate({})", num(degrees)))
                .attr("text-anchor", "end")
                .attr("dx", "-.8em")
                .attr("dy", ".15em"),
            None => text,
        };
        group
            .attr("class", "tick")
            .child(line.attr("stroke", "currentColor"))
            .child(text.attr("fill", "currentColor"))
    }
}

/// Axis title text rotated to run along a vertical axis.
#[must_use]
pub fn vertical_label(text: &str, x: f64, y: f64) -> Element {
    Element::text(text)
        .attr("class", "axis-label")
        .attr("transform", "rotate(-90)")
        .attr("x", num(x))
        .attr("y", num(y))
        .attr("text-anchor", "middle")
        .attr("fill", "black")
}

/// Axis title text placed horizontally.
#[must_use]
pub fn horizontal_label(text: &str, x: f64, y: f64) -> Element {
    Element::text(text)
        .attr("class", "axis-label")
        .attr("x", num(x))
        .attr("y", num(y))
        .attr("text-anchor", "middle")
        .attr("fill", "black")
}

/// Bold centered chart title.
#[must_use]
pub fn title(text: &str, x: f64, y: f64, font_size: u32) -> Element {
    Element::text(text)
        .attr("class", "title")
        .attr("x", num(x))
        .attr("y", num(y))
        .attr("text-anchor", "middle")
        .attr("font-size", format_args!("{font_size}px"))
        .attr("font-weight", "bold")
}
