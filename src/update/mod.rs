//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each message is
//! checked against the toolbar before it reaches the document controller.

mod document;
mod file;

use crate::commands::Cmd;
use crate::editable::EditableSurface;
use crate::fragment::FragmentSpec;
use crate::messages::{DocumentMsg, FileMsg, Msg};
use crate::model::AppModel;
use crate::toolbar::{feature_for_command, Feature};

pub use document::update_document;
pub use file::update_file;

/// Toolbar feature a message needs, or `None` when it is always available
pub fn required_feature(msg: &Msg) -> Option<Feature> {
    match msg {
        Msg::Document(m) => match m {
            DocumentMsg::Format { command, .. } => Some(feature_for_command(command)),
            DocumentMsg::Insert(FragmentSpec::Table { .. }) => Some(Feature::Table),
            DocumentMsg::Insert(_) => Some(Feature::Insert),
            DocumentMsg::FindReplace(_) => Some(Feature::FindReplace),
            DocumentMsg::Undo | DocumentMsg::Redo => Some(Feature::UndoRedo),
            DocumentMsg::ClearHighlights | DocumentMsg::Input => None,
        },
        Msg::File(FileMsg::Import { .. } | FileMsg::Export { .. }) => Some(Feature::Export),
    }
}

/// Main update function - dispatches to sub-handlers
pub fn update<S: EditableSurface>(model: &mut AppModel<S>, msg: Msg) -> Option<Cmd> {
    if let Some(feature) = required_feature(&msg) {
        if !model.is_enabled(feature) {
            tracing::debug!(feature = feature.key(), ?msg, "message ignored: feature disabled");
            return None;
        }
    }

    match msg {
        Msg::Document(m) => update_document(model, m),
        Msg::File(m) => update_file(model, m),
    }
}
