//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use scribe::config::EditorConfig;
use scribe::editable::{EditableSurface, MemorySurface};
use scribe::model::AppModel;

/// Create a test model with default config and the given content
pub fn test_model(content: &str) -> AppModel {
    AppModel::new(MemorySurface::new(), EditorConfig::default(), content)
}

/// Create a test model with a plain-text ceiling
pub fn test_model_with_max(content: &str, max_length: usize) -> AppModel {
    let config = EditorConfig {
        max_length: Some(max_length),
        ..EditorConfig::default()
    };
    AppModel::new(MemorySurface::new(), config, content)
}

/// Create a read-only test model
pub fn read_only_model(content: &str) -> AppModel {
    let config = EditorConfig {
        read_only: true,
        ..EditorConfig::default()
    };
    AppModel::new(MemorySurface::new(), config, content)
}

/// Create a test model with some toolbar features switched off
pub fn test_model_without(content: &str, features: &[&str]) -> AppModel {
    let mut config = EditorConfig::default();
    for key in features {
        config.toolbar.insert(key.to_string(), false);
    }
    AppModel::new(MemorySurface::new(), config, content)
}

/// Collects every content the controller broadcasts
pub fn change_log(model: &mut AppModel) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    model
        .document
        .on_change(move |content| sink.borrow_mut().push(content.to_string()));
    log
}

/// Surface that answers every format command with a scripted result.
///
/// Models a host whose serialization differs from the in-memory surface,
/// e.g. one that appends markup the controller never asked for.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    pub content: String,
    /// Content to present after the next format command
    pub next_format_result: Option<String>,
    pub commands: Vec<String>,
    pub set_content_calls: usize,
}

impl EditableSurface for ScriptedSurface {
    fn apply_format(&mut self, command: &str, _value: Option<&str>) {
        self.commands.push(command.to_string());
        if let Some(next) = self.next_format_result.take() {
            self.content = next;
        }
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn selection_text(&self) -> String {
        String::new()
    }

    fn splice_fragment(&mut self, markup: &str) {
        self.content.push_str(markup);
    }

    fn set_content(&mut self, markup: &str) {
        self.set_content_calls += 1;
        self.content = markup.to_string();
    }
}
