//! Minimal SVG scene tree.
//!
//! Charts build an [`Element`] tree and serialize it with [`fmt::Display`].
//! Attribute values and text content are XML-escaped on output.

use std::fmt::{self, Write as _};

/// A node of the scene tree.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `<g>` group element.
    #[must_use]
    pub fn group() -> Self {
        Self::new("g")
    }

    /// `<text>` element with text content.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new("text").child(Node::Text(content.into()))
    }

    /// `<title>` element, rendered by browsers as a hover tooltip of its parent.
    #[must_use]
    pub fn tooltip(content: impl Into<String>) -> Self {
        Self::new("title").child(Node::Text(content.into()))
    }

    /// Sets an attribute, replacing any earlier value of the same name.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn translate(self, x: f64, y: f64) -> Self {
        self.attr("transform", format_args!("translate({},{})", num(x), num(y)))
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Collects this element and all descendant elements, depth first.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Element> {
        let mut elements = vec![self];
        for child in &self.children {
            if let Node::Element(element) = child {
                elements.extend(element.descendants());
            }
        }
        elements
    }

    /// Concatenated text content of this element's direct text children.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", Escaped(value))?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_char('>')?;
        for child in &self.children {
            match child {
                Node::Element(element) => write!(f, "{element}")?,
                Node::Text(text) => write!(f, "{}", Escaped(text))?,
            }
        }
        write!(f, "</{}>", self.name)
    }
}

pub(crate) struct Escaped<'a>(pub(crate) &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
#[must_use]
pub fn num(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

/// A standalone SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub root: Element,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let svg = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", num(self.width))
            .attr("height", num(self.height))
            .attr("viewBox", format_args!("0 0 {} {}", num(self.width), num(self.height)))
            .attr("font-family", "sans-serif")
            .attr("font-size", 10)
            .child(self.root.clone());
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(f, "{svg}")
    }
}
