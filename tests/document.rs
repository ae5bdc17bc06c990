//! Document controller tests
//!
//! Length ceiling, stats, change notification and surface mirroring.

mod common;

use common::{change_log, read_only_model, test_model, test_model_with_max, ScriptedSurface};
use scribe::commands::Cmd;
use scribe::config::EditorConfig;
use scribe::editable::{EditConstraints, EditableSurface, MemorySurface};
use scribe::find_replace::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use scribe::messages::DocumentMsg;
use scribe::model::{AppModel, CommitError, DocumentController, Stats};
use scribe::update::update;

// ========================================================================
// Length ceiling
// ========================================================================

#[test]
fn test_commit_over_ceiling_is_rejected() {
    let mut model = test_model_with_max("", 5);
    let log = change_log(&mut model);

    let err = model.document.commit("hello world").unwrap_err();
    assert_eq!(err, CommitError::TooLong { len: 11, max: 5 });
    assert_eq!(model.document.content(), "");
    assert!(log.borrow().is_empty());
}

#[test]
fn test_markup_does_not_count_toward_ceiling() {
    let mut model = test_model_with_max("", 5);
    let stats = model.document.commit("<p><b>hello</b></p>").unwrap();
    assert_eq!(stats.char_count, 5);
}

#[test]
fn test_rejected_typing_reverts_surface() {
    let mut model = test_model_with_max("", 3);
    model.document.surface_mut().type_text("hello");

    let cmd = update(&mut model, DocumentMsg::Input.into());
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.document.content(), "");
    assert_eq!(model.document.surface().content(), "");
}

#[test]
fn test_typing_commits_escaped_text() {
    let mut model = test_model("");
    model.document.surface_mut().type_text("a < b");
    update(&mut model, DocumentMsg::Input.into());
    assert_eq!(model.document.content(), "a &lt; b");
}

// ========================================================================
// Stats
// ========================================================================

#[test]
fn test_stats_empty() {
    assert_eq!(
        Stats::of(""),
        Stats {
            char_count: 0,
            word_count: 0
        }
    );
}

#[test]
fn test_stats_strip_markup() {
    let model = test_model("<p>hi there</p>");
    let stats = model.document.stats();
    assert_eq!(stats.char_count, 8);
    assert_eq!(stats.word_count, 2);
}

#[test]
fn test_stats_whitespace_runs() {
    let stats = Stats::of("one\t two\n\nthree ");
    assert_eq!(stats.word_count, 3);
}

#[test]
fn test_stats_follow_commits() {
    let mut model = test_model("");
    model.document.commit("<p>one two three</p>").unwrap();
    assert_eq!(model.document.stats().word_count, 3);
    model.document.undo();
    assert_eq!(model.document.stats().word_count, 0);
}

// ========================================================================
// Status line and output panel
// ========================================================================

#[test]
fn test_status_line_with_ceiling() {
    let model = test_model_with_max("<p>hello</p>", 10);
    assert_eq!(
        model.status_line().as_deref(),
        Some("Characters: 5 / 10  Words: 1")
    );
}

#[test]
fn test_status_line_hidden() {
    let config = EditorConfig {
        show_status_bar: false,
        ..EditorConfig::default()
    };
    let model = AppModel::new(MemorySurface::new(), config, "x");
    assert!(model.status_line().is_none());
}

#[test]
fn test_html_output_panel() {
    let config = EditorConfig {
        show_html_output: true,
        ..EditorConfig::default()
    };
    let model = AppModel::new(MemorySurface::new(), config, "<p>x</p>");
    assert_eq!(model.html_output(), Some("<p>x</p>"));
    assert!(test_model("<p>x</p>").html_output().is_none());
}

#[test]
fn test_placeholder_for_empty_markup() {
    assert!(test_model("<p></p>").shows_placeholder());
    assert!(!test_model("<p>x</p>").shows_placeholder());
}

// ========================================================================
// Read-only
// ========================================================================

#[test]
fn test_read_only_refuses_all_mutations() {
    let mut model = read_only_model("<p>fixed</p>");
    let log = change_log(&mut model);

    assert_eq!(model.document.commit("x"), Err(CommitError::ReadOnly));
    assert!(update(&mut model, DocumentMsg::format("bold").into()).is_none());
    assert!(update(&mut model, DocumentMsg::Input.into()).is_none());

    assert_eq!(model.document.content(), "<p>fixed</p>");
    assert!(log.borrow().is_empty());
    assert!(model.document.surface().applied.is_empty());
}

// ========================================================================
// Host surfaces
// ========================================================================

#[test]
fn test_commit_reads_back_host_serialization() {
    let mut doc = DocumentController::new(ScriptedSurface::default(), "x", EditConstraints::editor());
    doc.surface_mut().next_format_result = Some("<strong>x</strong>".to_string());

    doc.execute_format("bold", None).unwrap();
    assert_eq!(doc.content(), "<strong>x</strong>");
    assert_eq!(doc.surface().commands, vec!["bold".to_string()]);
    // Only the initial load; the surface already holds the committed content
    assert_eq!(doc.surface().set_content_calls, 1);
}

#[test]
fn test_host_highlights_are_not_committed() {
    let mut doc = DocumentController::new(ScriptedSurface::default(), "x y", EditConstraints::editor());
    doc.surface_mut().next_format_result =
        Some(format!("{HIGHLIGHT_OPEN}x{HIGHLIGHT_CLOSE} <i>y</i>"));

    doc.execute_format("italic", None).unwrap();
    assert_eq!(doc.content(), "x <i>y</i>");
    assert_eq!(doc.surface().content(), "x <i>y</i>");
}

#[test]
fn test_unsupported_format_commits_nothing() {
    let mut model = test_model("<p>x</p>");
    model.document.surface_mut().select_all();
    update(&mut model, DocumentMsg::format("noSuchCommand").into());
    assert_eq!(model.document.content(), "<p>x</p>");
    assert!(!model.document.history().can_undo());
}

#[test]
fn test_format_with_value() {
    let mut model = test_model("red");
    model.document.surface_mut().select_all();
    update(&mut model, DocumentMsg::format_with("foreColor", "#f00").into());
    assert_eq!(model.document.content(), "<font color=\"#f00\">red</font>");
}

#[test]
fn test_format_block_heading() {
    let mut model = test_model("Title");
    update(&mut model, DocumentMsg::format_with("formatBlock", "h1").into());
    assert_eq!(model.document.content(), "<h1>Title</h1>");
}

#[test]
fn test_disabled_feature_blocks_format() {
    let mut model = common::test_model_without("x", &["colors"]);
    model.document.surface_mut().select_all();
    assert!(update(&mut model, DocumentMsg::format_with("foreColor", "red").into()).is_none());
    assert_eq!(model.document.content(), "x");
}

#[test]
fn test_host_span_with_highlight_class_is_kept() {
    let mut doc = DocumentController::new(ScriptedSurface::default(), "x", EditConstraints::editor());
    let own = "<span class=\"rte-highlight\">x</span>";
    doc.surface_mut().next_format_result = Some(own.to_string());

    doc.execute_format("italic", None).unwrap();
    assert_eq!(doc.content(), own);
}
