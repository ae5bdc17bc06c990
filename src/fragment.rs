//! Markup fragments for structured inserts
//!
//! Fragments are generated, never parsed back. Every user-supplied value goes
//! through [`escape_attr`] or [`escape_text`] before it is concatenated.

use crate::util::markup::{escape_attr, escape_text};

/// Placeholder content so empty cells still render
const CELL_PLACEHOLDER: &str = "&nbsp;";

/// An image to insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSpec {
    pub url: String,
    pub alt: String,
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
}

impl ImageSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn size(mut self, width_px: Option<u32>, height_px: Option<u32>) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }
}

/// A link to insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSpec {
    pub url: String,
    pub text: String,
}

impl LinkSpec {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// A structured insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentSpec {
    Table { rows: usize, cols: usize },
    Image(ImageSpec),
    Link(LinkSpec),
    Rule,
}

impl FragmentSpec {
    /// Build the markup for this fragment; `None` means there is nothing to insert
    pub fn build(&self) -> Option<String> {
        match self {
            Self::Table { rows, cols } => table(*rows, *cols),
            Self::Image(spec) => image(spec),
            Self::Link(spec) => link(spec),
            Self::Rule => Some(rule()),
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Table { .. } => "table",
            Self::Image(_) => "image",
            Self::Link(_) => "link",
            Self::Rule => "rule",
        }
    }
}

/// A `rows` x `cols` grid with a placeholder in every cell.
///
/// Zero rows or columns is rejected rather than clamped.
pub fn table(rows: usize, cols: usize) -> Option<String> {
    if rows == 0 || cols == 0 {
        return None;
    }

    let mut html = String::from("<table class=\"rte-table\"><tbody>");
    for _ in 0..rows {
        html.push_str("<tr>");
        for _ in 0..cols {
            html.push_str("<td>");
            html.push_str(CELL_PLACEHOLDER);
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    Some(html)
}

/// An image reference with optional pixel dimensions. Empty URLs are rejected.
pub fn image(spec: &ImageSpec) -> Option<String> {
    if spec.url.is_empty() {
        return None;
    }

    let mut style = String::new();
    if let Some(width) = spec.width_px {
        style.push_str(&format!("width: {}px;", width));
    }
    if let Some(height) = spec.height_px {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("height: {}px;", height));
    }

    let mut html = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_attr(&spec.url),
        escape_attr(&spec.alt)
    );
    if !style.is_empty() {
        html.push_str(&format!(" style=\"{}\"", style));
    }
    html.push('>');
    Some(html)
}

/// An anchor; both the URL and the label must be non-empty
pub fn link(spec: &LinkSpec) -> Option<String> {
    if spec.url.is_empty() || spec.text.is_empty() {
        return None;
    }

    Some(format!(
        "<a href=\"{}\" class=\"rte-link\">{}</a>",
        escape_attr(&spec.url),
        escape_text(&spec.text)
    ))
}

/// A horizontal divider
pub fn rule() -> String {
    "<hr class=\"rte-rule\">".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let html = table(3, 2).unwrap();
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<td>").count(), 6);
        assert_eq!(html.matches(CELL_PLACEHOLDER).count(), 6);
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_table_rejects_zero() {
        assert!(table(0, 3).is_none());
        assert!(table(3, 0).is_none());
        assert!(FragmentSpec::Table { rows: 0, cols: 0 }.build().is_none());
    }

    #[test]
    fn test_image_plain() {
        let html = image(&ImageSpec::new("https://x.test/a.png").alt("A cat")).unwrap();
        assert_eq!(html, "<img src=\"https://x.test/a.png\" alt=\"A cat\">");
    }

    #[test]
    fn test_image_with_dimensions() {
        let spec = ImageSpec::new("a.png").size(Some(320), Some(200));
        assert_eq!(
            image(&spec).unwrap(),
            "<img src=\"a.png\" alt=\"\" style=\"width: 320px; height: 200px;\">"
        );

        let spec = ImageSpec::new("a.png").size(None, Some(50));
        assert!(image(&spec).unwrap().contains("style=\"height: 50px;\""));
    }

    #[test]
    fn test_image_escapes_attributes() {
        let spec = ImageSpec::new("x\" onerror=\"alert(1)").alt("<b>");
        let html = image(&spec).unwrap();
        assert!(html.contains("src=\"x&quot; onerror=&quot;alert(1)\""));
        assert!(html.contains("alt=\"&lt;b&gt;\""));
        assert!(!html.contains("onerror=\"alert"));
    }

    #[test]
    fn test_image_requires_url() {
        assert!(image(&ImageSpec::new("").alt("alt")).is_none());
    }

    #[test]
    fn test_link() {
        assert_eq!(
            link(&LinkSpec::new("https://example.com?a=1&b=2", "Example")).unwrap(),
            "<a href=\"https://example.com?a=1&amp;b=2\" class=\"rte-link\">Example</a>"
        );
    }

    #[test]
    fn test_link_escapes_label() {
        let html = link(&LinkSpec::new("u", "<img src=x>")).unwrap();
        assert!(html.contains(">&lt;img src=x&gt;</a>"));
    }

    #[test]
    fn test_link_requires_both_fields() {
        assert!(link(&LinkSpec::new("", "x")).is_none());
        assert!(link(&LinkSpec::new("x", "")).is_none());
    }

    #[test]
    fn test_rule() {
        assert_eq!(FragmentSpec::Rule.build().as_deref(), Some("<hr class=\"rte-rule\">"));
    }
}
