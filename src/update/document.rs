//! Document update handlers

use crate::commands::Cmd;
use crate::editable::EditableSurface;
use crate::messages::DocumentMsg;
use crate::model::{AppModel, CommitError, Stats};

/// Handle document editing messages
pub fn update_document<S: EditableSurface>(
    model: &mut AppModel<S>,
    msg: DocumentMsg,
) -> Option<Cmd> {
    let doc = &mut model.document;

    match msg {
        DocumentMsg::Format { command, value } => match command.as_str() {
            // History lives in the controller, not the surface
            "undo" => doc.undo().then_some(Cmd::Redraw),
            "redo" => doc.redo().then_some(Cmd::Redraw),
            _ => committed(doc.execute_format(&command, value.as_deref())),
        },
        DocumentMsg::Insert(spec) => match doc.insert_fragment(&spec) {
            Ok(Some(_)) => Some(Cmd::Redraw),
            Ok(None) => None,
            Err(e) => rejected(e),
        },
        DocumentMsg::FindReplace(spec) => match doc.find_replace(&spec) {
            Ok(Some(outcome)) => {
                tracing::debug!(count = outcome.count(), pattern = %spec.pattern, "find/replace");
                Some(Cmd::Redraw)
            }
            Ok(None) => None,
            Err(e) => rejected(e),
        },
        DocumentMsg::ClearHighlights => {
            doc.clear_highlights();
            Some(Cmd::Redraw)
        }
        DocumentMsg::Input => committed(doc.handle_input()),
        DocumentMsg::Undo => doc.undo().then_some(Cmd::Redraw),
        DocumentMsg::Redo => doc.redo().then_some(Cmd::Redraw),
    }
}

fn committed(result: Result<Stats, CommitError>) -> Option<Cmd> {
    match result {
        Ok(_) => Some(Cmd::Redraw),
        Err(e) => rejected(e),
    }
}

/// A refused commit leaves the surface reverted; redraw so the host shows it
fn rejected(e: CommitError) -> Option<Cmd> {
    match e {
        CommitError::ReadOnly => None,
        CommitError::TooLong { .. } => {
            tracing::info!("edit refused: {}", e);
            Some(Cmd::Redraw)
        }
    }
}
