use anyhow::{anyhow, Context, Result};
use clap::Parser;

use scribe::cli::CliArgs;
use scribe::update::update;

fn main() -> Result<()> {
    let run = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    scribe::tracing::init();

    let mut model = run.open().map_err(|e| anyhow!(e))?;
    model
        .document
        .on_change(|content| tracing::trace!(len = content.len(), "content changed"));

    if let Some(needle) = &run.select {
        if !model.document.surface_mut().select_text(needle) {
            tracing::warn!(needle = %needle, "selection text not found; editing at the caret");
        }
    }

    let action_count = run.actions.len();
    for msg in run.actions {
        if let Some(cmd) = update(&mut model, msg) {
            if let Some(path) = cmd.perform().context("Failed to write export")? {
                eprintln!("Wrote {}", path.display());
            }
        }
    }
    tracing::debug!(
        actions = action_count,
        undo = model.document.history().undo_count(),
        redo = model.document.history().redo_count(),
        "run complete"
    );

    if run.print_content {
        println!("{}", model.document.content());
    }

    if run.print_stats {
        let json = serde_json::to_string_pretty(&model.document.stats())
            .context("Failed to serialize stats")?;
        println!("{}", json);
    } else if let Some(status) = model.status_line() {
        eprintln!("{}", status);
    }

    Ok(())
}
