//! Document controller - owns the authoritative content
//!
//! All content changes go through one gate ([`DocumentController::commit`] and
//! the mutation paths built on it). The gate enforces read-only and the
//! plain-text length ceiling, keeps the surface in step with the content, and
//! notifies change listeners.

use crate::editable::{EditConstraints, EditHistory, EditableSurface};
use crate::find_replace::{self, FindOutcome, FindReplaceSpec};
use crate::fragment::FragmentSpec;
use crate::interchange::import_markup;
use crate::util::file_validation::ImportKind;
use crate::util::markup::plain_text_len;

use super::stats::Stats;

/// Why a commit was refused. The content is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    /// Plain-text length would exceed the ceiling
    TooLong { len: usize, max: usize },
    /// The document is read-only
    ReadOnly,
}

impl std::fmt::Display for CommitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong { len, max } => {
                write!(f, "content too long ({} characters, max {})", len, max)
            }
            Self::ReadOnly => write!(f, "document is read-only"),
        }
    }
}

impl std::error::Error for CommitError {}

/// The controller's view of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    content: String,
    constraints: EditConstraints,
}

impl DocumentState {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn max_length(&self) -> Option<usize> {
        self.constraints.max_length
    }

    pub fn is_read_only(&self) -> bool {
        self.constraints.read_only
    }

    pub fn constraints(&self) -> &EditConstraints {
        &self.constraints
    }

    /// Character count with markup stripped
    pub fn plain_text_len(&self) -> usize {
        plain_text_len(&self.content)
    }
}

type ChangeListener = Box<dyn FnMut(&str)>;

/// Owns the document state, its history and the surface it drives.
pub struct DocumentController<S: EditableSurface> {
    state: DocumentState,
    history: EditHistory,
    surface: S,
    listeners: Vec<ChangeListener>,
}

impl<S: EditableSurface> DocumentController<S> {
    /// Create a controller and load `initial_content` into the surface.
    ///
    /// Initial content is not a mutation: it is accepted as-is and leaves no
    /// history, even when it is longer than the ceiling.
    pub fn new(mut surface: S, initial_content: impl Into<String>, constraints: EditConstraints) -> Self {
        let content = initial_content.into();
        if constraints.exceeds_max_length(plain_text_len(&content)) {
            tracing::warn!(
                max = ?constraints.max_length,
                "initial content is longer than the configured ceiling"
            );
        }
        surface.set_content(&content);

        Self {
            state: DocumentState {
                content,
                constraints,
            },
            history: EditHistory::new(),
            surface,
            listeners: Vec::new(),
        }
    }

    /// Register a listener that receives the full content after every commit
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn content(&self) -> &str {
        &self.state.content
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.state.content)
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for selection changes and user typing.
    /// Typed content reaches the document through [`Self::handle_input`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_read_only(&self) -> bool {
        self.state.constraints.read_only
    }

    /// Commit new content as one undoable step.
    ///
    /// Rejected commits leave content, history and listeners untouched and
    /// revert the surface to the current content.
    pub fn commit(&mut self, new_content: impl Into<String>) -> Result<Stats, CommitError> {
        if self.is_read_only() {
            return Err(CommitError::ReadOnly);
        }
        let before = self.state.content.clone();
        self.finish_mutation(before, new_content.into())
    }

    /// Commit whatever the user typed into the surface
    pub fn handle_input(&mut self) -> Result<Stats, CommitError> {
        let typed = self.read_surface();
        self.commit(typed)
    }

    /// Apply a named format command through the surface and commit the result
    pub fn execute_format(&mut self, command: &str, value: Option<&str>) -> Result<Stats, CommitError> {
        if self.is_read_only() {
            tracing::debug!(command, "format ignored: read-only");
            return Err(CommitError::ReadOnly);
        }

        // Captured before the surface mutates, so undo restores the pre-format content
        let before = self.state.content.clone();
        self.surface.apply_format(command, value);
        let formatted = self.read_surface();
        tracing::trace!(command, ?value, "format applied");
        self.finish_mutation(before, formatted)
    }

    /// Build a fragment and splice it in at the selection.
    ///
    /// Returns `Ok(None)` when the fragment input is invalid (nothing inserted).
    pub fn insert_fragment(&mut self, spec: &FragmentSpec) -> Result<Option<Stats>, CommitError> {
        if self.is_read_only() {
            return Err(CommitError::ReadOnly);
        }

        let Some(markup) = spec.build() else {
            tracing::debug!(kind = spec.kind(), "fragment skipped: invalid input");
            return Ok(None);
        };

        let before = self.state.content.clone();
        self.surface.splice_fragment(&markup);
        let spliced = self.read_surface();
        self.finish_mutation(before, spliced).map(Some)
    }

    /// Find/replace over the current content.
    ///
    /// Replacements are committed. Highlights are pushed to the surface only
    /// and never reach the content. `Ok(None)` means an empty pattern.
    pub fn find_replace(&mut self, spec: &FindReplaceSpec) -> Result<Option<FindOutcome>, CommitError> {
        let Some(outcome) = find_replace::find_replace(&self.state.content, spec) else {
            tracing::debug!("find skipped: empty pattern");
            return Ok(None);
        };

        match &outcome {
            FindOutcome::Replaced { content, count } => {
                if *count > 0 {
                    self.commit(content.clone())?;
                }
            }
            FindOutcome::Highlighted { preview, .. } => {
                self.surface.set_content(preview);
            }
        }
        Ok(Some(outcome))
    }

    /// Remove search highlights from the surface
    pub fn clear_highlights(&mut self) {
        if self.surface.content() != self.state.content {
            self.surface.set_content(&self.state.content);
        }
    }

    /// Replace the document with imported file text
    pub fn import(&mut self, kind: ImportKind, text: &str) -> Result<Stats, CommitError> {
        let markup = import_markup(kind, text);
        tracing::debug!(mime = kind.mime(), bytes = text.len(), "importing document");
        self.commit(markup)
    }

    /// Restore the previous snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.is_read_only() {
            return false;
        }
        let Some(previous) = self.history.undo(self.state.content.clone()) else {
            tracing::trace!("undo: history empty");
            return false;
        };

        match self.apply(previous.clone(), None) {
            Ok(_) => {
                tracing::debug!(undo = self.history.undo_count(), "undo");
                true
            }
            Err(e) => {
                // Put the stacks back the way they were
                self.history.redo(previous);
                tracing::warn!("undo refused: {}", e);
                false
            }
        }
    }

    /// Re-apply the most recently undone snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.is_read_only() {
            return false;
        }
        let Some(next) = self.history.redo(self.state.content.clone()) else {
            tracing::trace!("redo: history empty");
            return false;
        };

        match self.apply(next.clone(), None) {
            Ok(_) => {
                tracing::debug!(redo = self.history.redo_count(), "redo");
                true
            }
            Err(e) => {
                self.history.undo(next);
                tracing::warn!("redo refused: {}", e);
                false
            }
        }
    }

    /// Surface content without transient highlight spans
    fn read_surface(&self) -> String {
        find_replace::clear_highlights(&self.surface.content()).into_owned()
    }

    /// Gate a mutation. `before` becomes an undo snapshot only if the
    /// mutation commits and actually changes the content.
    fn finish_mutation(&mut self, before: String, new_content: String) -> Result<Stats, CommitError> {
        let snapshot = (new_content != self.state.content).then_some(before);
        self.apply(new_content, snapshot)
    }

    /// The length gate. Records `snapshot`, writes content, syncs the surface
    /// and notifies.
    fn apply(&mut self, new_content: String, snapshot: Option<String>) -> Result<Stats, CommitError> {
        let len = plain_text_len(&new_content);
        if let Some(max) = self.state.constraints.max_length.filter(|&max| len > max) {
            tracing::warn!(len, max, "commit rejected: content too long");
            if self.surface.content() != self.state.content {
                self.surface.set_content(&self.state.content);
            }
            return Err(CommitError::TooLong { len, max });
        }

        if let Some(before) = snapshot {
            self.history.snapshot(before);
        }
        self.state.content = new_content;
        if self.surface.content() != self.state.content {
            self.surface.set_content(&self.state.content);
        }

        let stats = Stats::of(&self.state.content);
        tracing::debug!(
            chars = stats.char_count,
            words = stats.word_count,
            "content committed"
        );
        for listener in &mut self.listeners {
            listener(&self.state.content);
        }
        Ok(stats)
    }
}

impl<S: EditableSurface + std::fmt::Debug> std::fmt::Debug for DocumentController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentController")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
