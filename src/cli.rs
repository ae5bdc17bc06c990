//! Command-line argument parsing for the headless editor
//!
//! Supports:
//! - Importing an HTML or plain-text document
//! - Applying format commands, inserts and find/replace in order
//! - Undoing steps
//! - Exporting to HTML or plain text

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::editable::{EditConstraints, MemorySurface};
use crate::find_replace::FindReplaceSpec;
use crate::fragment::{FragmentSpec, ImageSpec, LinkSpec};
use crate::interchange::{import_markup, read_import, ExportFormat};
use crate::messages::{DocumentMsg, FileMsg, Msg};
use crate::model::{AppModel, CommitError};
use crate::toolbar::Feature;
use crate::util::{filename_for_display, plain_text_len};

/// Headless rich-text document editor
#[derive(Parser, Debug, Default)]
#[command(name = "scribe", version, about = "Headless rich-text document editor")]
pub struct CliArgs {
    /// HTML or plain-text file to import
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/scribe/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Plain-text character ceiling (overrides config)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Refuse every edit
    #[arg(long)]
    pub read_only: bool,

    /// Select the first occurrence of TEXT before editing
    #[arg(long, value_name = "TEXT")]
    pub select: Option<String>,

    /// Apply a format command, e.g. `bold` or `formatBlock=h1` (repeatable)
    #[arg(long = "format", value_name = "CMD[=VALUE]")]
    pub formats: Vec<String>,

    /// Insert a ROWSxCOLS table
    #[arg(long, value_name = "ROWSxCOLS")]
    pub table: Option<String>,

    /// Insert an image
    #[arg(long, value_name = "URL")]
    pub image: Option<String>,

    /// Alt text for --image
    #[arg(long, value_name = "TEXT", requires = "image")]
    pub alt: Option<String>,

    /// Width in pixels for --image
    #[arg(long, value_name = "PX", requires = "image")]
    pub width: Option<u32>,

    /// Height in pixels for --image
    #[arg(long, value_name = "PX", requires = "image")]
    pub height: Option<u32>,

    /// Insert a link
    #[arg(long, value_name = "URL", requires = "link_text")]
    pub link: Option<String>,

    /// Visible text for --link
    #[arg(long, value_name = "TEXT", requires = "link")]
    pub link_text: Option<String>,

    /// Insert a horizontal rule
    #[arg(long)]
    pub rule: bool,

    /// Text to find (highlighted unless --replace is given)
    #[arg(long, value_name = "TEXT")]
    pub find: Option<String>,

    /// Replacement for --find
    #[arg(long, value_name = "TEXT", requires = "find")]
    pub replace: Option<String>,

    /// Undo N steps after all edits
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub undo: usize,

    /// Print stats as JSON instead of the status line
    #[arg(long)]
    pub stats: bool,

    /// Print the final content to stdout
    #[arg(long)]
    pub print: bool,

    /// Write the content as HTML
    #[arg(long, value_name = "PATH")]
    pub export_html: Option<PathBuf>,

    /// Write the content as plain text
    #[arg(long, value_name = "PATH")]
    pub export_text: Option<PathBuf>,
}

/// What the binary should do, derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub input: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub max_length: Option<usize>,
    pub read_only: bool,
    pub select: Option<String>,
    /// Messages to dispatch, in order
    pub actions: Vec<Msg>,
    pub print_stats: bool,
    pub print_content: bool,
}

impl RunConfig {
    /// Config file plus CLI overrides
    pub fn editor_config(&self) -> Result<EditorConfig, String> {
        let mut config = match &self.config_path {
            Some(path) => EditorConfig::load_from(path)?,
            None => EditorConfig::load(),
        };

        if let Some(max) = self.max_length {
            config.max_length = Some(max);
        }
        if self.read_only {
            config.read_only = true;
        }
        Ok(config)
    }

    /// Build the session model and load INPUT into it.
    ///
    /// An editable session imports the file through the commit gate, so the
    /// length ceiling applies and the import can be undone. A read-only session
    /// loads it as the initial content, still refusing text over the ceiling.
    pub fn open(&self) -> Result<AppModel, String> {
        let config = self.editor_config()?;
        let Some(path) = &self.input else {
            return Ok(AppModel::new(MemorySurface::new(), config, String::new()));
        };

        let name = filename_for_display(path);
        let (kind, text) = read_import(path).map_err(|e| e.user_message(&name))?;
        let refused = |e: CommitError| format!("Cannot import {}: {}", name, e);

        let model = if config.read_only {
            let markup = import_markup(kind, &text);
            let constraints = EditConstraints::from_config(&config);
            let len = plain_text_len(&markup);
            if let Some(max) = constraints.max_length.filter(|&max| len > max) {
                return Err(refused(CommitError::TooLong { len, max }));
            }
            AppModel::new(MemorySurface::new(), config, markup)
        } else {
            let mut model = AppModel::new(MemorySurface::new(), config, String::new());
            if !model.is_enabled(Feature::Export) {
                return Err(format!("Cannot import {}: import is disabled", name));
            }
            model.document.import(kind, &text).map_err(refused)?;
            model
        };

        tracing::info!(path = %path.display(), ?kind, "imported document");
        Ok(model)
    }
}

/// Parse `3x2` (or `3X2`) into rows and columns
pub fn parse_table_dims(dims: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = dims
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid table size '{}', expected ROWSxCOLS", dims))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid table size '{}', expected ROWSxCOLS", dims))
    };
    Ok((parse(rows)?, parse(cols)?))
}

/// Parse `command` or `command=value`
pub fn parse_format(arg: &str) -> DocumentMsg {
    match arg.split_once('=') {
        Some((command, value)) => DocumentMsg::format_with(command, value),
        None => DocumentMsg::format(arg),
    }
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let mut actions: Vec<Msg> = Vec::new();

        actions.extend(self.formats.iter().map(|f| Msg::from(parse_format(f))));

        if let Some(table) = &self.table {
            let (rows, cols) = parse_table_dims(table)?;
            actions.push(DocumentMsg::Insert(FragmentSpec::Table { rows, cols }).into());
        }

        if let Some(url) = self.image {
            let spec = ImageSpec::new(url)
                .alt(self.alt.unwrap_or_default())
                .size(self.width, self.height);
            actions.push(DocumentMsg::Insert(FragmentSpec::Image(spec)).into());
        }

        if let Some(url) = self.link {
            let text = self.link_text.unwrap_or_default();
            actions.push(DocumentMsg::Insert(FragmentSpec::Link(LinkSpec::new(url, text))).into());
        }

        if self.rule {
            actions.push(DocumentMsg::Insert(FragmentSpec::Rule).into());
        }

        if let Some(pattern) = self.find {
            let spec = match self.replace {
                Some(replacement) => FindReplaceSpec::replace(pattern, replacement),
                None => FindReplaceSpec::find(pattern),
            };
            actions.push(DocumentMsg::FindReplace(spec).into());
        }

        actions.extend((0..self.undo).map(|_| Msg::from(DocumentMsg::Undo)));

        for (format, path) in [
            (ExportFormat::Html, self.export_html),
            (ExportFormat::Text, self.export_text),
        ] {
            if let Some(path) = path {
                actions.push(
                    FileMsg::Export {
                        format,
                        path: Some(path),
                    }
                    .into(),
                );
            }
        }

        Ok(RunConfig {
            input: self.input,
            config_path: self.config,
            max_length: self.max_length,
            read_only: self.read_only,
            select: self.select,
            actions,
            print_stats: self.stats,
            print_content: self.print,
        })
    }
}
