//! File import and export
//!
//! Export writes the content verbatim (`document.html`) or as plain text
//! (`document.txt`). Import accepts HTML or plain-text files; the text goes
//! through the controller's commit gate like any other edit.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::util::file_validation::{
    is_likely_binary, validate_file_for_import, FileOpenError, ImportKind,
};
use crate::util::markup::{escape_text, strip_tags};

static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:p|div|h[1-6]|li|blockquote|pre|tr)>").expect("valid regex")
});

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("valid regex"));

/// Export target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Text,
}

impl ExportFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Html => "document.html",
            Self::Text => "document.txt",
        }
    }

    pub fn render(self, content: &str) -> String {
        match self {
            Self::Html => export_html(content),
            Self::Text => export_text(content),
        }
    }
}

/// The content exactly as committed
pub fn export_html(content: &str) -> String {
    content.to_string()
}

/// Plain text: block ends and `<br>` become newlines, tags are removed and
/// runs of blank lines collapse to a single newline.
pub fn export_text(content: &str) -> String {
    let with_breaks = LINE_BREAK_RE.replace_all(content, "\n");
    let plain = strip_tags(&with_breaks);
    BLANK_LINES_RE
        .replace_all(&plain, "\n")
        .trim()
        .to_string()
}

/// Markup for imported file text: HTML verbatim, plain text escaped with
/// line breaks kept as `<br>`
pub fn import_markup(kind: ImportKind, text: &str) -> String {
    match kind {
        ImportKind::Html => text.to_string(),
        ImportKind::PlainText => escape_text(text)
            .replace("\r\n", "\n")
            .replace('\n', "<br>"),
    }
}

/// Validate and read a file for import
pub fn read_import(path: &Path) -> Result<(ImportKind, String), FileOpenError> {
    let kind = ImportKind::from_path(path).ok_or(FileOpenError::UnsupportedType)?;
    validate_file_for_import(path)?;
    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }

    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => FileOpenError::BinaryFile,
        _ => FileOpenError::IoError(e.to_string()),
    })?;
    Ok((kind, text))
}
