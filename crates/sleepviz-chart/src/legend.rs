use crate::svg::{Element, num};

const ROW_HEIGHT: f64 = 20.0;
const SWATCH_SIZE: f64 = 12.0;
const LABEL_OFFSET: f64 = 18.0;
const PADDING: f64 = 8.0;
// Rough glyph width of the 12px sans-serif legend text.
const CHAR_WIDTH: f64 = 6.5;

#[derive(Debug, Clone, PartialEq)]
pub enum Swatch {
    Circle(String),
    Square(String),
    None,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    label: String,
    swatch: Swatch,
}

/// Boxed list of labelled swatches, drawn at the origin of its parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    entries: Vec<Entry>,
}

impl Legend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entry(mut self, label: impl Into<String>, swatch: Swatch) -> Self {
        self.entries.push(Entry {
            label: label.into(),
            swatch,
        });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn render(&self) -> Element {
        let has_swatch = self.entries.iter().any(|e| e.swatch != Swatch::None);
        let label_x = if has_swatch { LABEL_OFFSET } else { 0.0 };
        let longest = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);
        let width = label_x + longest as f64 * CHAR_WIDTH + PADDING * 2.0;
        let height = self.entries.len() as f64 * ROW_HEIGHT + PADDING * 2.0
            - (ROW_HEIGHT - SWATCH_SIZE);

        let background = Element::new("rect")
            .attr("x", num(-PADDING))
            .attr("y", num(-PADDING))
            .attr("width", num(width))
            .attr("height", num(height))
            .attr("rx", 5)
            .attr("ry", 5)
            .attr("fill", "white")
            .attr("stroke", "black");

        let items = self.entries.iter().enumerate().map(|(i, entry)| {
            let y = i as f64 * ROW_HEIGHT;
            let text = Element::text(&entry.label)
                .attr("x", num(label_x))
                .attr("y", num(y + SWATCH_SIZE / 2.0))
                .attr("dy", "0.32em")
                .attr("font-size", "12px");
            let item = Element::group().attr("class", "legend-item");
            let item = match &entry.swatch {
                Swatch::Circle(color) => item.child(
                    Element::new("circle")
                        .attr("cx", num(SWATCH_SIZE / 2.0))
                        .attr("cy", num(y + SWATCH_SIZE / 2.0))
                        .attr("r", num(SWATCH_SIZE / 2.0 - 1.0))
                        .attr("fill", color),
                ),
                Swatch::Square(color) => item.child(
                    Element::new("rect")
                        .attr("x", 0)
                        .attr("y", num(y))
                        .attr("width", num(SWATCH_SIZE))
                        .attr("height", num(SWATCH_SIZE))
                        .attr("fill", color),
                ),
                Swatch::None => item,
            };
            item.child(text)
        });

        Element::group()
            .attr("class", "legend")
            .child(background)
            .children(items)
    }
}
