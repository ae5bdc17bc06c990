//! Application model - the complete state of one editor session
//!
//! This module contains the state types following the Elm Architecture pattern.

pub mod document;
pub mod stats;

pub use document::{CommitError, DocumentController, DocumentState};
pub use stats::Stats;

use crate::config::EditorConfig;
use crate::editable::{EditConstraints, EditableSurface, MemorySurface, SurfaceHints};
use crate::toolbar::{Feature, ToolbarConfig};

/// The complete application model
pub struct AppModel<S: EditableSurface = MemorySurface> {
    /// The document controller and its surface
    pub document: DocumentController<S>,
    /// Resolved toolbar flags; fixed for the session
    pub toolbar: ToolbarConfig,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

fn surface_hints(config: &EditorConfig, constraints: &EditConstraints) -> SurfaceHints {
    SurfaceHints {
        placeholder: config.placeholder.clone(),
        height: config.height.clone(),
        class_name: config.class_name.clone(),
        spell_check: constraints.spell_check,
        read_only: constraints.read_only,
    }
}

impl<S: EditableSurface> AppModel<S> {
    /// Create a model from configuration and initial content
    pub fn new(mut surface: S, config: EditorConfig, initial_content: impl Into<String>) -> Self {
        let constraints = EditConstraints::from_config(&config);
        surface.configure(&surface_hints(&config, &constraints));
        let toolbar = config.toolbar_config();
        for feature in toolbar.disabled() {
            tracing::debug!(feature = feature.key(), "toolbar feature disabled");
        }

        Self {
            document: DocumentController::new(surface, initial_content, constraints),
            toolbar,
            config,
        }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.toolbar.is_enabled(feature)
    }

    /// Status bar text, e.g. `Characters: 8  Words: 2`.
    /// `None` when the status bar is switched off.
    pub fn status_line(&self) -> Option<String> {
        if !self.config.show_status_bar {
            return None;
        }

        let stats = self.document.stats();
        let chars = match self.document.state().max_length() {
            Some(max) => format!("{} / {}", stats.char_count, max),
            None => stats.char_count.to_string(),
        };
        Some(format!("Characters: {}  Words: {}", chars, stats.word_count))
    }

    /// Raw markup for the HTML output panel, when enabled
    pub fn html_output(&self) -> Option<&str> {
        self.config
            .show_html_output
            .then(|| self.document.content())
    }

    /// Placeholder text, while the document has no plain text
    pub fn placeholder(&self) -> Option<&str> {
        self.shows_placeholder()
            .then_some(self.config.placeholder.as_str())
    }

    /// Whether the placeholder should be shown (no plain text yet)
    pub fn shows_placeholder(&self) -> bool {
        self.document.state().plain_text_len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let model = AppModel::new(MemorySurface::new(), EditorConfig::default(), "<p>hi there</p>");
        assert_eq!(
            model.status_line().as_deref(),
            Some("Characters: 8  Words: 2")
        );
    }

    #[test]
    fn test_status_line_with_ceiling() {
        let config = EditorConfig {
            max_length: Some(100),
            ..EditorConfig::default()
        };
        let model = AppModel::new(MemorySurface::new(), config, "abc");
        assert_eq!(
            model.status_line().as_deref(),
            Some("Characters: 3 / 100  Words: 1")
        );
    }

    #[test]
    fn test_status_bar_hidden() {
        let config = EditorConfig {
            show_status_bar: false,
            ..EditorConfig::default()
        };
        let model = AppModel::new(MemorySurface::new(), config, "abc");
        assert!(model.status_line().is_none());
    }

    #[test]
    fn test_html_output_and_placeholder() {
        let mut config = EditorConfig::default();
        let model = AppModel::new(MemorySurface::new(), config.clone(), "<p><br></p>");
        assert!(model.html_output().is_none());
        assert!(model.shows_placeholder());

        config.show_html_output = true;
        let model = AppModel::new(MemorySurface::new(), config, "<p>x</p>");
        assert_eq!(model.html_output(), Some("<p>x</p>"));
        assert!(!model.shows_placeholder());
    }

    #[test]
    fn test_surface_receives_hints() {
        let config = EditorConfig {
            height: "10rem".to_string(),
            class_name: "notes".to_string(),
            enable_spell_check: false,
            read_only: true,
            ..EditorConfig::default()
        };
        let model = AppModel::new(MemorySurface::new(), config, "");
        let hints = model.document.surface().hints.clone().unwrap();
        assert_eq!(hints.height, "10rem");
        assert_eq!(hints.class_name, "notes");
        assert_eq!(hints.placeholder, "Start typing...");
        assert!(!hints.spell_check);
        assert!(hints.read_only);
        assert_eq!(model.placeholder(), Some("Start typing..."));
    }

    #[test]
    fn test_toolbar_from_config() {
        let mut config = EditorConfig::default();
        config.toolbar.insert("table".to_string(), false);
        let model = AppModel::new(MemorySurface::new(), config, "");
        assert!(!model.is_enabled(Feature::Table));
        assert!(model.is_enabled(Feature::Insert));
    }
}
