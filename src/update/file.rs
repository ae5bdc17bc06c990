//! Import/export update handlers

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::editable::EditableSurface;
use crate::messages::FileMsg;
use crate::model::AppModel;
use crate::util::file_validation::ImportKind;

/// Handle file interchange messages
pub fn update_file<S: EditableSurface>(model: &mut AppModel<S>, msg: FileMsg) -> Option<Cmd> {
    match msg {
        FileMsg::Import { mime, text } => {
            let Some(kind) = ImportKind::from_mime(&mime) else {
                tracing::warn!(mime = %mime, "import ignored: unsupported file type");
                return None;
            };
            match model.document.import(kind, &text) {
                Ok(_) => Some(Cmd::Redraw),
                Err(e) => {
                    tracing::warn!("import refused: {}", e);
                    None
                }
            }
        }
        FileMsg::Export { format, path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(format.default_file_name()));
            Some(Cmd::SaveFile {
                path,
                content: format.render(model.document.content()),
            })
        }
    }
}
