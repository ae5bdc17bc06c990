//! Edit constraints for the document controller.
//!
//! Constraints decide whether a commit is allowed at all (read-only) and
//! whether its plain-text length fits (max length).

use crate::config::EditorConfig;

/// Constraints that limit which commits the controller accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConstraints {
    /// Maximum plain-text length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Refuse every mutation
    pub read_only: bool,

    /// Forwarded to the surface; has no effect on commits
    pub spell_check: bool,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::editor()
    }
}

impl EditConstraints {
    /// Full editor constraints (no ceiling, writable)
    pub fn editor() -> Self {
        Self {
            max_length: None,
            read_only: false,
            spell_check: true,
        }
    }

    /// Writable editor with a plain-text ceiling. A ceiling of 0 means none.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: (max_length > 0).then_some(max_length),
            ..Self::editor()
        }
    }

    /// Viewer constraints: every mutation is refused
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::editor()
        }
    }

    /// Derive constraints from the persisted editor configuration
    pub fn from_config(config: &EditorConfig) -> Self {
        let max_length = match config.max_length {
            Some(0) => {
                tracing::warn!("max_length of 0 ignored; the ceiling must be positive");
                None
            }
            other => other,
        };
        Self {
            max_length,
            read_only: config.read_only,
            spell_check: config.enable_spell_check,
        }
    }

    /// Check if a plain-text length would exceed max length
    pub fn exceeds_max_length(&self, plain_len: usize) -> bool {
        self.max_length.is_some_and(|max| plain_len > max)
    }
}
