//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::find_replace::FindReplaceSpec;
use crate::fragment::FragmentSpec;
use crate::interchange::ExportFormat;
use crate::util::file_validation::ImportKind;

/// Document editing messages (everything that can change content)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Apply a surface format command (`bold`, `formatBlock` + `h1`, ...)
    Format {
        command: String,
        value: Option<String>,
    },
    /// Insert a table, image, link or rule at the selection
    Insert(FragmentSpec),
    /// Replace matches, or highlight them when the replacement is empty
    FindReplace(FindReplaceSpec),
    /// Drop search highlights from the surface
    ClearHighlights,
    /// The user typed into the surface
    Input,
    Undo,
    Redo,
}

impl DocumentMsg {
    /// Format command without a value
    pub fn format(command: impl Into<String>) -> Self {
        Self::Format {
            command: command.into(),
            value: None,
        }
    }

    /// Format command with a value (`fontSize` + `5`, `foreColor` + `#f00`)
    pub fn format_with(command: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Format {
            command: command.into(),
            value: Some(value.into()),
        }
    }
}

/// File interchange messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMsg {
    /// File text read by the host, with its MIME type
    Import { mime: String, text: String },
    /// Write the document out; `None` uses the format's default file name
    Export {
        format: ExportFormat,
        path: Option<PathBuf>,
    },
}

impl FileMsg {
    pub fn import(kind: ImportKind, text: impl Into<String>) -> Self {
        Self::Import {
            mime: kind.mime().to_string(),
            text: text.into(),
        }
    }
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Document(DocumentMsg),
    File(FileMsg),
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<FileMsg> for Msg {
    fn from(msg: FileMsg) -> Self {
        Msg::File(msg)
    }
}
