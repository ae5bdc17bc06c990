//! Markup helpers shared by stats, find/replace, fragments and export
//!
//! Content is serialized markup produced by the editable surface. Nothing here
//! parses it as a tree: a tag is any `<...>` span, everything else is text.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);").expect("valid regex")
});

/// Decoded form of entities with no known character. Typed text never contains it.
const OPAQUE_ENTITY: char = '\u{FFFC}';

/// A run of serialized markup, either a whole tag or the text between tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A `<...>` span, including the angle brackets
    Tag(&'a str),
    /// Text between tags (may contain entities)
    Text(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Tag(s) | Segment::Text(s) => s,
        }
    }
}

/// Split markup into alternating tag and text segments.
///
/// Empty text runs are skipped, so concatenating every segment yields the input.
pub fn split_segments(markup: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for tag in TAG_RE.find_iter(markup) {
        if tag.start() > last {
            segments.push(Segment::Text(&markup[last..tag.start()]));
        }
        segments.push(Segment::Tag(tag.as_str()));
        last = tag.end();
    }

    if last < markup.len() {
        segments.push(Segment::Text(&markup[last..]));
    }

    segments
}

/// Character an entity such as `&amp;` or `&#160;` stands for
fn decode_entity(entity: &str) -> char {
    let name = &entity[1..entity.len() - 1];
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => number.parse().ok(),
        };
        return code.and_then(char::from_u32).unwrap_or(OPAQUE_ENTITY);
    }

    match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => OPAQUE_ENTITY,
    }
}

/// A text segment with its entities decoded, plus a map back to raw offsets.
///
/// Each decoded character comes from exactly one raw unit: a plain character
/// or a whole entity. A decoded character boundary therefore maps to a raw
/// offset that never falls inside an entity.
#[derive(Debug, Clone)]
pub struct DecodedText<'a> {
    raw: &'a str,
    decoded: String,
    /// `(decoded offset, raw offset)` at the start of every unit, then both ends
    boundaries: Vec<(usize, usize)>,
}

impl<'a> DecodedText<'a> {
    pub fn new(raw: &'a str) -> Self {
        let mut text = Self {
            raw,
            decoded: String::with_capacity(raw.len()),
            boundaries: Vec::with_capacity(raw.len() + 1),
        };

        let mut last = 0;
        for entity in ENTITY_RE.find_iter(raw) {
            text.push_plain(last, entity.start());
            text.boundaries.push((text.decoded.len(), entity.start()));
            text.decoded.push(decode_entity(entity.as_str()));
            last = entity.end();
        }
        text.push_plain(last, raw.len());
        text.boundaries.push((text.decoded.len(), raw.len()));
        text
    }

    fn push_plain(&mut self, start: usize, end: usize) {
        for (offset, ch) in self.raw[start..end].char_indices() {
            self.boundaries.push((self.decoded.len(), start + offset));
            self.decoded.push(ch);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.decoded
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Raw offset of a decoded offset. Offsets inside a decoded character
    /// round forward to the next unit.
    pub fn raw_offset(&self, decoded: usize) -> usize {
        let index = match self.boundaries.binary_search_by_key(&decoded, |&(d, _)| d) {
            Ok(index) | Err(index) => index,
        };
        self.boundaries
            .get(index)
            .map_or(self.raw.len(), |&(_, raw)| raw)
    }

    /// Raw markup behind a decoded range
    pub fn raw_range(&self, decoded: Range<usize>) -> Range<usize> {
        self.raw_offset(decoded.start)..self.raw_offset(decoded.end)
    }
}

/// Remove every `<...>` span, leaving the plain text
pub fn strip_tags(markup: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(markup, "")
}

/// Character count of the markup with all tags removed
pub fn plain_text_len(markup: &str) -> usize {
    strip_tags(markup).chars().count()
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for use as element text content
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>hi <b>there</b></p>"), "hi there");
        assert_eq!(strip_tags("no markup"), "no markup");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_plain_text_len_counts_chars_not_bytes() {
        assert_eq!(plain_text_len("<p>héllo</p>"), 5);
        assert_eq!(plain_text_len("<br>"), 0);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"a"b'c<d>&"#),
            "a&quot;b&#39;c&lt;d&gt;&amp;"
        );
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape_text(r#"say "hi" <now> & then"#), r#"say "hi" &lt;now&gt; &amp; then"#);
    }

    #[test]
    fn test_decoded_text_keeps_entities_whole() {
        let text = DecodedText::new("a&nbsp;b &amp; &#x41;&bogus;");
        assert_eq!(text.as_str(), "a\u{a0}b & A\u{FFFC}");
        assert_eq!(text.raw_range(1..3), 1..7);
        assert_eq!(&text.raw()[text.raw_range(5..6)], "&amp;");
        assert_eq!(text.raw_offset(text.as_str().len()), text.raw().len());
    }

    #[test]
    fn test_decoded_text_maps_multibyte_and_entities() {
        let text = DecodedText::new("é &lt; y");
        assert_eq!(text.as_str(), "é < y");
        assert_eq!(text.raw_range(0..2), 0..2);
        assert_eq!(text.raw_range(3..4), 3..7);
    }

    #[test]
    fn test_split_segments_roundtrip() {
        let markup = "<p>one <b>two</b></p>three";
        let segments = split_segments(markup);
        assert_eq!(
            segments,
            vec![
                Segment::Tag("<p>"),
                Segment::Text("one "),
                Segment::Tag("<b>"),
                Segment::Text("two"),
                Segment::Tag("</b>"),
                Segment::Tag("</p>"),
                Segment::Text("three"),
            ]
        );
        let joined: String = segments.iter().map(Segment::as_str).collect();
        assert_eq!(joined, markup);
    }
}
