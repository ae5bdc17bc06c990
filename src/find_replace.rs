//! Find and replace over serialized markup
//!
//! Searches are case-insensitive and literal: the search text is escaped for
//! regex metacharacters before it is compiled, so `a.b` never matches `axb`.
//! Matching only looks at text between tags, never at tag names or attributes,
//! and runs over that text with entities decoded: `&` finds `&amp;`, while
//! `b` never lands inside `&nbsp;`.
//!
//! With a replacement the engine returns new content for the controller to
//! commit. Without one it returns a preview where every match is wrapped in a
//! highlight span. Previous highlights are cleared before new ones are added,
//! so repeated searches never nest spans.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::util::markup::{escape_text, split_segments, DecodedText, Segment};

/// Class carried by highlight spans
pub const HIGHLIGHT_CLASS: &str = "rte-highlight";

/// Attribute that marks a span as an engine highlight. Spans that only share
/// the class are left alone.
pub const HIGHLIGHT_MARKER: &str = "data-rte-highlight";

pub const HIGHLIGHT_OPEN: &str = "<span class=\"rte-highlight\" data-rte-highlight=\"\">";
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// What to search for and, optionally, what to replace it with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindReplaceSpec {
    pub pattern: String,
    pub replacement: Option<String>,
}

impl FindReplaceSpec {
    /// Highlight-only search
    pub fn find(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: None,
        }
    }

    /// Replace every match with `replacement`
    pub fn replace(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: Some(replacement.into()),
        }
    }

    /// An empty or missing replacement means highlight instead of replace
    pub fn is_highlight_only(&self) -> bool {
        self.replacement.as_deref().map_or(true, str::is_empty)
    }
}

/// Result of a find/replace pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// New content to commit
    Replaced { content: String, count: usize },
    /// Preview markup for the surface only; never committed
    Highlighted { preview: String, count: usize },
}

impl FindOutcome {
    pub fn count(&self) -> usize {
        match self {
            Self::Replaced { count, .. } | Self::Highlighted { count, .. } => *count,
        }
    }

    /// The resulting markup, whichever kind it is
    pub fn markup(&self) -> &str {
        match self {
            Self::Replaced { content, .. } => content,
            Self::Highlighted { preview, .. } => preview,
        }
    }

    pub fn into_markup(self) -> String {
        match self {
            Self::Replaced { content, .. } => content,
            Self::Highlighted { preview, .. } => preview,
        }
    }
}

/// Compile the literal search text into a case-insensitive matcher.
///
/// Returns `None` for an empty pattern. The matcher runs over decoded text.
fn compile(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }

    match RegexBuilder::new(&regex::escape(pattern))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Search pattern rejected: {}", e);
            None
        }
    }
}

fn is_span_open(tag: &str) -> bool {
    if !tag.get(..5).is_some_and(|t| t.eq_ignore_ascii_case("<span")) {
        return false;
    }
    let after = &tag[5..];
    (after.starts_with('>') || after.starts_with(char::is_whitespace)) && !after.ends_with("/>")
}

fn is_span_close(tag: &str) -> bool {
    tag.get(..6).is_some_and(|t| t.eq_ignore_ascii_case("</span"))
        && tag[6..].trim_start().starts_with('>')
}

/// Remove every highlight span, keeping what it wrapped.
///
/// Spans are matched by depth, so spans nested inside a highlight survive.
pub fn clear_highlights(markup: &str) -> Cow<'_, str> {
    if !markup.contains(HIGHLIGHT_MARKER) {
        return Cow::Borrowed(markup);
    }

    let mut out = String::with_capacity(markup.len());
    // One entry per open span: true for highlights
    let mut open_spans: Vec<bool> = Vec::new();

    for segment in split_segments(markup) {
        match segment {
            Segment::Tag(tag) if is_span_open(tag) => {
                let highlight = tag.contains(HIGHLIGHT_MARKER);
                open_spans.push(highlight);
                if !highlight {
                    out.push_str(tag);
                }
            }
            Segment::Tag(tag) if is_span_close(tag) => {
                if !open_spans.pop().unwrap_or(false) {
                    out.push_str(tag);
                }
            }
            other => out.push_str(other.as_str()),
        }
    }
    Cow::Owned(out)
}

/// Copy a text segment into `out`, handing the raw markup of each match to
/// `on_match`. Returns the number of matches.
fn rewrite_text(
    text: &str,
    re: &Regex,
    out: &mut String,
    mut on_match: impl FnMut(&str, &mut String),
) -> usize {
    let decoded = DecodedText::new(text);
    let mut last = 0;
    let mut count = 0;

    for found in re.find_iter(decoded.as_str()) {
        let range = decoded.raw_range(found.range());
        out.push_str(&text[last..range.start]);
        on_match(&text[range.clone()], out);
        last = range.end;
        count += 1;
    }
    out.push_str(&text[last..]);
    count
}

/// Run a find/replace pass over `content`.
///
/// Returns `None` when the pattern is empty (nothing to do).
pub fn find_replace(content: &str, spec: &FindReplaceSpec) -> Option<FindOutcome> {
    let re = compile(&spec.pattern)?;
    let content = clear_highlights(content);

    let mut out = String::with_capacity(content.len());
    let mut count = 0;

    match spec.replacement.as_deref().filter(|r| !r.is_empty()) {
        Some(replacement) => {
            let replacement = escape_text(replacement);
            for segment in split_segments(&content) {
                match segment {
                    Segment::Tag(tag) => out.push_str(tag),
                    Segment::Text(text) => {
                        count += rewrite_text(text, &re, &mut out, |_, out| {
                            out.push_str(&replacement)
                        });
                    }
                }
            }
            tracing::trace!(pattern = %spec.pattern, count, "replaced matches");
            Some(FindOutcome::Replaced {
                content: out,
                count,
            })
        }
        None => {
            for segment in split_segments(&content) {
                match segment {
                    Segment::Tag(tag) => out.push_str(tag),
                    Segment::Text(text) => {
                        count += rewrite_text(text, &re, &mut out, |matched, out| {
                            out.push_str(HIGHLIGHT_OPEN);
                            out.push_str(matched);
                            out.push_str(HIGHLIGHT_CLOSE);
                        });
                    }
                }
            }
            tracing::trace!(pattern = %spec.pattern, count, "highlighted matches");
            Some(FindOutcome::Highlighted {
                preview: out,
                count,
            })
        }
    }
}
