use crate::{AppState, DownloadRequest, Effect, Msg, OutputEvent, RunPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::DirectoryEdited(text) => {
            state.set_directory_input(text);
            Vec::new()
        }
        Msg::DownloadClicked => {
            // The trigger is disabled while a run is active; a click that still
            // arrives is rejected without touching state.
            if state.phase().is_running() {
                return (state, Vec::new());
            }
            match DownloadRequest::new(state.url_input(), state.directory_input()) {
                Ok(request) => {
                    state.begin_run();
                    vec![Effect::StartRun(request)]
                }
                Err(err) => vec![Effect::error(err.to_string())],
            }
        }
        Msg::RunRejected(reason) => {
            if state.phase().is_running() {
                state.abandon_run();
                vec![Effect::error(reason)]
            } else {
                Vec::new()
            }
        }
        Msg::RunCancelled => {
            if state.phase().is_running() {
                state.abandon_run();
            }
            Vec::new()
        }
        Msg::RunEvent(event) => {
            if state.phase().is_running() {
                apply_run_event(&mut state, event)
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_run_event(state: &mut AppState, event: OutputEvent) -> Vec<Effect> {
    match event {
        OutputEvent::Progress { fraction } => {
            state.set_progress(fraction);
            Vec::new()
        }
        OutputEvent::ItemCompleted { title } => {
            state.record_item(&title);
            Vec::new()
        }
        OutputEvent::RunFinished {
            items_downloaded, ..
        } => {
            state.push_output(format!("Done! Total downloaded: {items_downloaded}"));
            state.end_run(
                RunPhase::Succeeded,
                format!("Completed: {items_downloaded} tracks"),
            );
            vec![Effect::info(
                "Success",
                format!("Downloaded {items_downloaded} tracks!"),
            )]
        }
        OutputEvent::RunFailed {
            exit_code,
            trailing_log_lines,
        } => {
            state.push_output(format!("Error: Download failed (code {exit_code})"));
            for line in trailing_log_lines {
                state.push_output(line);
            }
            state.end_run(RunPhase::Failed, "Download failed".to_string());
            vec![Effect::error(format!(
                "Download failed (code {exit_code}). Check output for details."
            ))]
        }
        OutputEvent::UnexpectedError { message } => {
            state.push_output(format!("Unexpected error: {message}"));
            state.end_run(RunPhase::Errored, "Error occurred".to_string());
            vec![Effect::error(format!(
                "An unexpected error occurred: {message}"
            ))]
        }
    }
}
