use std::sync::Once;

use pretty_assertions::assert_eq;
use ripper_core::{
    update, AppState, DownloadRequest, Effect, Msg, OutputEvent, RunPhase, Severity, READY_STATUS,
};
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ripper_logging::initialize_for_tests);
}

fn click_download(state: AppState, url: &str, dir: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlEdited(url.to_string()));
    let (state, _) = update(state, Msg::DirectoryEdited(dir.to_string()));
    update(state, Msg::DownloadClicked)
}

fn running_state(temp: &TempDir) -> AppState {
    let dir = temp.path().display().to_string();
    let (state, effects) = click_download(AppState::new(), "https://example.com/list", &dir);
    assert_eq!(effects.len(), 1);
    state
}

fn apply_events(mut state: AppState, events: Vec<OutputEvent>) -> (AppState, Vec<Effect>) {
    let mut all = Vec::new();
    for event in events {
        let (next, effects) = update(state, Msg::RunEvent(event));
        state = next;
        all.extend(effects);
    }
    (state, all)
}

#[test]
fn valid_click_starts_run_and_disables_trigger() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().display().to_string();

    let (mut state, effects) = click_download(AppState::new(), "https://example.com/list", &dir);
    let view = state.view();

    assert_eq!(view.phase, RunPhase::Running);
    assert!(!view.trigger_enabled);
    assert_eq!(view.status, "Starting download...");
    assert_eq!(view.progress, 0.0);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::StartRun(
            DownloadRequest::new("https://example.com/list", &dir).unwrap()
        )]
    );
}

#[test]
fn invalid_input_shows_message_without_starting() {
    init_logging();
    let (state, effects) = click_download(AppState::new(), "", "/nowhere");

    assert_eq!(state.view().phase, RunPhase::Idle);
    assert!(state.view().trigger_enabled);
    assert_eq!(
        effects,
        vec![Effect::ShowMessage {
            severity: Severity::Error,
            title: "Error".to_string(),
            text: "Please enter a valid playlist URL.".to_string(),
        }]
    );
}

#[test]
fn second_click_while_running_is_rejected() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let mut state = running_state(&temp);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::DownloadClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().phase, RunPhase::Running);
    assert!(!state.view().trigger_enabled);
    assert!(!state.consume_dirty());
}

#[test]
fn successful_run_reports_each_item_and_summary() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let state = running_state(&temp);

    let (state, effects) = apply_events(
        state,
        vec![
            OutputEvent::Progress { fraction: 0.125 },
            OutputEvent::ItemCompleted {
                title: "Song One".to_string(),
            },
            OutputEvent::Progress { fraction: 0.45 },
            OutputEvent::ItemCompleted {
                title: "Song Two".to_string(),
            },
            OutputEvent::RunFinished {
                items_downloaded: 2,
                exit_code: 0,
            },
        ],
    );
    let view = state.view();

    assert_eq!(view.phase, RunPhase::Succeeded);
    assert!(view.trigger_enabled);
    assert_eq!(view.progress, 0.45);
    assert_eq!(view.items_downloaded, 2);
    assert_eq!(view.status, "Completed: 2 tracks");
    assert_eq!(
        view.output_lines,
        vec![
            "\"Song One\" downloaded!".to_string(),
            "\"Song Two\" downloaded!".to_string(),
            "Done! Total downloaded: 2".to_string(),
        ]
    );
    assert_eq!(
        effects,
        vec![Effect::ShowMessage {
            severity: Severity::Info,
            title: "Success".to_string(),
            text: "Downloaded 2 tracks!".to_string(),
        }]
    );
}

#[test]
fn progress_updates_status_text() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let state = running_state(&temp);

    let (state, _) = update(
        state,
        Msg::RunEvent(OutputEvent::Progress { fraction: 0.125 }),
    );
    assert_eq!(state.view().status, "Progress: 12.5%");
}

#[test]
fn failed_run_shows_tail_and_reenables_trigger() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let state = running_state(&temp);

    let (state, effects) = apply_events(
        state,
        vec![OutputEvent::RunFailed {
            exit_code: 1,
            trailing_log_lines: vec!["ERROR: Private video".to_string()],
        }],
    );
    let view = state.view();

    assert_eq!(view.phase, RunPhase::Failed);
    assert!(view.phase.is_terminal());
    assert!(view.trigger_enabled);
    assert_eq!(view.status, "Download failed");
    assert_eq!(
        view.output_lines,
        vec![
            "Error: Download failed (code 1)".to_string(),
            "ERROR: Private video".to_string(),
        ]
    );
    assert_eq!(
        effects,
        vec![Effect::ShowMessage {
            severity: Severity::Error,
            title: "Error".to_string(),
            text: "Download failed (code 1). Check output for details.".to_string(),
        }]
    );
}

#[test]
fn unexpected_error_ends_run() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let state = running_state(&temp);

    let (state, effects) = apply_events(
        state,
        vec![OutputEvent::UnexpectedError {
            message: "pipe closed".to_string(),
        }],
    );

    assert_eq!(state.view().phase, RunPhase::Errored);
    assert!(state.phase().is_terminal());
    assert!(state.view().trigger_enabled);
    assert_eq!(state.view().output_lines, vec!["Unexpected error: pipe closed"]);
    assert_eq!(effects.len(), 1);
}

#[test]
fn new_run_is_possible_after_failure() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let state = running_state(&temp);
    let (state, _) = apply_events(
        state,
        vec![OutputEvent::RunFailed {
            exit_code: 2,
            trailing_log_lines: Vec::new(),
        }],
    );

    let (state, effects) = update(state, Msg::DownloadClicked);
    assert_eq!(state.view().phase, RunPhase::Running);
    assert!(state.view().output_lines.is_empty());
    assert!(matches!(effects.as_slice(), [Effect::StartRun(_)]));
}

#[test]
fn rejected_run_returns_to_idle() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let state = running_state(&temp);

    let (state, effects) = update(
        state,
        Msg::RunRejected("ffmpeg not found.".to_string()),
    );

    assert_eq!(state.view().phase, RunPhase::Idle);
    assert_eq!(state.view().status, READY_STATUS);
    assert!(state.view().trigger_enabled);
    assert_eq!(effects.len(), 1);
}

#[test]
fn cancelled_run_returns_to_idle_without_a_message() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let mut state = running_state(&temp);
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::RunCancelled);

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.view().phase, RunPhase::Idle);
    assert_eq!(state.view().status, READY_STATUS);
    assert!(state.view().trigger_enabled);
}

#[test]
fn stale_run_events_are_ignored_when_idle() {
    init_logging();
    let state = AppState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::RunEvent(OutputEvent::ItemCompleted {
            title: "late".to_string(),
        }),
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
