use std::fmt::Write as _;

use crate::svg::Escaped;

/// One chart file linked from the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartFile<'a> {
    pub title: &'a str,
    /// Path of the SVG file relative to the page.
    pub file: &'a str,
}

/// Builds a standalone HTML page that embeds each chart.
///
/// Charts are embedded with `<object>` rather than `<img>` so that their
/// tooltips and hover styles stay active.
#[must_use]
pub fn render_index_html(page_title: &str, charts: &[ChartFile<'_>]) -> String {
    let mut html = String::new();
    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
section {{ margin-bottom: 3em; }}
</style>
</head>
<body>
<h1>{title}</h1>
"#,
        title = Escaped(page_title),
    )
    .unwrap();
    for chart in charts {
        write!(
            html,
            r#"<section>
<h2>{title}</h2>
<object type="image/svg+xml" data="{file}" aria-label="{title}"></object>
</section>
"#,
            title = Escaped(chart.title),
            file = Escaped(chart.file),
        )
        .unwrap();
    }
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_section_per_chart() {
        let html = render_index_html(
            "Sleep Efficiency",
            &[
                ChartFile {
                    title: "Scatter",
                    file: "scatter.svg",
                },
                ChartFile {
                    title: "Bar",
                    file: "bar.svg",
                },
            ],
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<section>").count(), 2);
        assert!(html.contains(r#"data="scatter.svg""#));
        assert!(html.contains("<h2>Bar</h2>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let html = render_index_html("Sleep & Alcohol", &[]);
        assert!(html.contains("<h1>Sleep &amp; Alcohol</h1>"));
        assert!(!html.contains("<section>"));
    }
}
