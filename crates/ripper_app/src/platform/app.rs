use std::process::ExitCode;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use ripper_core::{update, AppState, AppViewModel, Effect, Msg, OutputEvent, RunPhase};
use ripper_logging::{ripper_debug, ripper_info};

use super::config;
use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::{DIRECTORY_PROMPT, URL_PROMPT};
use super::ui::render::render;
use super::ui::terminal::{Prompt, Terminal};
use super::ui::UiCommand;
use crate::cli::Cli;

/// Redraw cadence while waiting on the worker.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::initialize(&logging::LogSettings {
        destination: cli.log,
        level: cli.log_level,
        file: cli.log_file.clone(),
    });
    ripper_info!("ripper {} starting", env!("CARGO_PKG_VERSION"));

    let settings = config::load_settings(&cli.config);
    if cli.write_config {
        config::save_settings(&cli.config, &settings)?;
        println!("Wrote {}", cli.config.display());
        return Ok(ExitCode::SUCCESS);
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut app = App::new(EffectRunner::new(settings, msg_tx));

    let url = match cli.url {
        Some(url) => url,
        None => app.terminal.ask(URL_PROMPT).context("reading the playlist URL")?,
    };
    let directory = match cli.dir {
        Some(dir) => dir,
        None => app
            .terminal
            .ask(DIRECTORY_PROMPT)
            .context("reading the save directory")?,
    };

    app.dispatch(Msg::UrlEdited(url));
    app.dispatch(Msg::DirectoryEdited(directory));
    app.dispatch(Msg::DownloadClicked);

    // Rejections from the effect runner arrive on the queue too, so drain it
    // until the run reaches an end state.
    while app.state.phase().is_running() {
        match msg_rx.recv_timeout(TICK) {
            Ok(msg) => app.dispatch(msg),
            Err(mpsc::RecvTimeoutError::Timeout) => {
                app.dispatch(Msg::Tick);
                if let Some(event) = app.effects.reap_crashed_worker() {
                    app.dispatch(Msg::RunEvent(event));
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                app.dispatch(Msg::RunEvent(OutputEvent::UnexpectedError {
                    message: "event channel closed".to_string(),
                }));
            }
        }
    }

    app.terminal.finish();
    let phase = app.state.phase();
    ripper_info!("exiting in phase {:?}", phase);
    Ok(if phase == RunPhase::Succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

struct App {
    state: AppState,
    shown: AppViewModel,
    terminal: Terminal,
    effects: EffectRunner,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            shown: AppViewModel::default(),
            terminal: Terminal::new(),
            effects,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        ripper_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            let view = self.state.view();
            self.terminal.apply(render(&self.shown, &view));
            self.shown = view;
        }

        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartRun(request) => self.effects.start_run(request, &self.terminal),
            Effect::ShowMessage {
                severity,
                title,
                text,
            } => self.terminal.apply(vec![UiCommand::ShowMessage {
                severity,
                title,
                text,
            }]),
        }
    }
}
