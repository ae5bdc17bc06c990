//! Editing primitives for the document controller.
//!
//! - [`EditableSurface`]: capability trait over the host's editable canvas
//! - [`MemorySurface`]: in-memory surface for headless runs and tests
//! - [`EditHistory`]: bounded undo/redo snapshot stacks
//! - [`EditConstraints`]: read-only flag and plain-text length ceiling
//!
//! # Example
//!
//! ```ignore
//! use scribe::editable::{EditHistory, HistoryStack};
//!
//! let mut history = EditHistory::new();
//! history.snapshot("<p>before</p>".to_string());
//! let restored = history.undo("<p>after</p>".to_string());
//! assert_eq!(restored.as_deref(), Some("<p>before</p>"));
//! ```

mod constraints;
mod history;
mod surface;

pub use constraints::EditConstraints;
pub use history::{EditHistory, HistoryStack, DEFAULT_HISTORY_DEPTH};
pub use surface::{EditableSurface, MemorySurface, SurfaceHints};
