//! The editable surface the controller drives.
//!
//! The real surface is host-provided (a native editable canvas). The controller
//! only needs the narrow capability set in [`EditableSurface`]. [`MemorySurface`]
//! is an in-memory stand-in used by the headless binary and by tests.

use std::ops::Range;

use crate::util::markup::{escape_attr, escape_text};

/// Capabilities the document controller consumes from the host surface
pub trait EditableSurface {
    /// Apply a named low-level format command to the current selection
    fn apply_format(&mut self, command: &str, value: Option<&str>);

    /// Current serialized markup
    fn content(&self) -> String;

    /// Text of the current selection (empty when collapsed)
    fn selection_text(&self) -> String;

    /// Replace the selection with `markup`, or insert it at the caret
    fn splice_fragment(&mut self, markup: &str);

    /// Replace the whole content, leaving the caret at the end
    fn set_content(&mut self, markup: &str);

    /// Presentation settings, passed once when the session starts.
    /// Surfaces that draw nothing can ignore them.
    fn configure(&mut self, _hints: &SurfaceHints) {}
}

/// Settings the controller does not act on but the host surface renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceHints {
    /// Text shown while the document is empty
    pub placeholder: String,
    /// Minimum height (CSS length)
    pub height: String,
    /// Extra class for the host container
    pub class_name: String,
    pub spell_check: bool,
    /// The surface should refuse focus and typing
    pub read_only: bool,
}

/// In-memory surface over a `String`.
///
/// The selection is a byte range into the markup; an empty range is the caret.
/// Format commands are emulated by wrapping the selection in the element a
/// browser would produce, which is enough to drive the controller end to end.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    content: String,
    selection: Range<usize>,
    /// Every format command received, in order
    pub applied: Vec<(String, Option<String>)>,
    /// Last hints received from [`EditableSurface::configure`]
    pub hints: Option<SurfaceHints>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface holding `markup` with the caret at the end
    pub fn with_content(markup: &str) -> Self {
        Self {
            content: markup.to_string(),
            selection: markup.len()..markup.len(),
            applied: Vec::new(),
            hints: None,
        }
    }

    /// Current selection as a byte range
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Select a byte range. Returns false (selection unchanged) when the range
    /// is out of bounds or does not fall on character boundaries.
    pub fn select(&mut self, range: Range<usize>) -> bool {
        let valid = range.start <= range.end
            && range.end <= self.content.len()
            && self.content.is_char_boundary(range.start)
            && self.content.is_char_boundary(range.end);
        if valid {
            self.selection = range;
        }
        valid
    }

    /// Select the first occurrence of `needle` in the markup
    pub fn select_text(&mut self, needle: &str) -> bool {
        match self.content.find(needle) {
            Some(start) if !needle.is_empty() => self.select(start..start + needle.len()),
            _ => false,
        }
    }

    /// Select everything
    pub fn select_all(&mut self) {
        self.selection = 0..self.content.len();
    }

    /// Collapse the selection to a caret at `offset`
    pub fn set_caret(&mut self, offset: usize) -> bool {
        self.select(offset..offset)
    }

    /// Simulate the user typing `text` at the selection
    pub fn type_text(&mut self, text: &str) {
        self.splice_fragment(&escape_text(text));
    }

    /// Wrap the selection (or the whole content when collapsed) in `open`/`close`
    fn wrap_selection(&mut self, open: &str, close: &str, whole_when_collapsed: bool) {
        let range = if self.selection.is_empty() {
            if !whole_when_collapsed || self.content.is_empty() {
                return;
            }
            0..self.content.len()
        } else {
            self.selection.clone()
        };

        let inner = self.content[range.clone()].to_string();
        let wrapped = format!("{open}{inner}{close}");
        let end = range.start + wrapped.len();
        self.content.replace_range(range.clone(), &wrapped);
        self.selection = range.start..end;
    }
}

/// Element a format command wraps its target in: (open tag, close tag, block-level)
fn wrapper_for(command: &str, value: Option<&str>) -> Option<(String, String, bool)> {
    let inline = |tag: &str| Some((format!("<{tag}>"), format!("</{tag}>"), false));
    let raw = value.unwrap_or_default();
    let value = escape_attr(raw);

    match command {
        "bold" => inline("b"),
        "italic" => inline("i"),
        "underline" => inline("u"),
        "strikethrough" => inline("strike"),
        "subscript" => inline("sub"),
        "superscript" => inline("sup"),
        "foreColor" => Some((
            format!("<font color=\"{value}\">"),
            "</font>".to_string(),
            false,
        )),
        "hiliteColor" | "backColor" => Some((
            format!("<span style=\"background-color: {value};\">"),
            "</span>".to_string(),
            false,
        )),
        "fontSize" => Some((
            format!("<font size=\"{value}\">"),
            "</font>".to_string(),
            false,
        )),
        "fontName" => Some((
            format!("<font face=\"{value}\">"),
            "</font>".to_string(),
            false,
        )),
        "justifyLeft" | "justifyCenter" | "justifyRight" | "justifyFull" => {
            let align = match command {
                "justifyCenter" => "center",
                "justifyRight" => "right",
                "justifyFull" => "justify",
                _ => "left",
            };
            Some((
                format!("<div style=\"text-align: {align};\">"),
                "</div>".to_string(),
                true,
            ))
        }
        "insertUnorderedList" => Some(("<ul><li>".to_string(), "</li></ul>".to_string(), true)),
        "insertOrderedList" => Some(("<ol><li>".to_string(), "</li></ol>".to_string(), true)),
        "indent" => Some(("<blockquote>".to_string(), "</blockquote>".to_string(), true)),
        "formatBlock" => {
            let tag = raw.trim().trim_start_matches('<').trim_end_matches('>');
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return None;
            }
            Some((format!("<{tag}>"), format!("</{tag}>"), true))
        }
        _ => None,
    }
}

impl EditableSurface for MemorySurface {
    fn apply_format(&mut self, command: &str, value: Option<&str>) {
        self.applied
            .push((command.to_string(), value.map(str::to_string)));

        match command {
            "insertHTML" => self.splice_fragment(value.unwrap_or_default()),
            "insertText" => self.type_text(value.unwrap_or_default()),
            "insertHorizontalRule" => self.splice_fragment("<hr>"),
            "insertImage" => {
                if let Some(url) = value.filter(|v| !v.is_empty()) {
                    self.splice_fragment(&format!("<img src=\"{}\">", escape_attr(url)));
                }
            }
            "delete" => self.splice_fragment(""),
            "selectAll" => self.select_all(),
            _ => match wrapper_for(command, value) {
                Some((open, close, block)) => self.wrap_selection(&open, &close, block),
                None => tracing::trace!(command, "surface ignored unsupported format command"),
            },
        }
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn selection_text(&self) -> String {
        self.content[self.selection.clone()].to_string()
    }

    fn splice_fragment(&mut self, markup: &str) {
        let range = self.selection.clone();
        self.content.replace_range(range.clone(), markup);
        let caret = range.start + markup.len();
        self.selection = caret..caret;
    }

    fn set_content(&mut self, markup: &str) {
        self.content = markup.to_string();
        self.selection = self.content.len()..self.content.len();
    }

    fn configure(&mut self, hints: &SurfaceHints) {
        self.hints = Some(hints.clone());
    }
}
