//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Content or surface changed; re-render status and output panels
    Redraw,
    /// Write an exported document
    SaveFile { path: PathBuf, content: String },
}

impl Cmd {
    /// Perform file side effects, returning the path written if any
    pub fn perform(self) -> std::io::Result<Option<PathBuf>> {
        match self {
            Cmd::Redraw => Ok(None),
            Cmd::SaveFile { path, content } => {
                std::fs::write(&path, content)?;
                tracing::info!("Exported {}", path.display());
                Ok(Some(path))
            }
        }
    }
}
