//! Scribe - rich-text document controller
//!
//! This crate provides the document state and history engine behind an
//! editable rich-text surface, following the Elm Architecture pattern:
//! messages flow through `update`, which gates them on the toolbar and hands
//! them to the document controller.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod find_replace;
pub mod fragment;
pub mod interchange;
pub mod messages;
pub mod model;
pub mod toolbar;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editable::{EditableSurface, MemorySurface};
pub use find_replace::{FindOutcome, FindReplaceSpec};
pub use fragment::{FragmentSpec, ImageSpec, LinkSpec};
pub use messages::Msg;
pub use model::{AppModel, CommitError, DocumentController, Stats};
pub use toolbar::{Feature, ToolbarConfig};
