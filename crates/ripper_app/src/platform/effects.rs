use std::sync::mpsc;

use ripper_core::{DownloadRequest, Msg, OutputEvent};
use ripper_engine::tools::{self, MissingTool};
use ripper_engine::{DownloadSettings, Downloader, EventSink, RunError, RunHandle};
use ripper_logging::{ripper_error, ripper_info, ripper_warn};

use super::ui::terminal::Prompt;

/// Forwards worker events into the foreground message queue.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: OutputEvent) {
        let _ = self.tx.send(Msg::RunEvent(event));
    }
}

pub struct EffectRunner {
    downloader: Downloader,
    msg_tx: mpsc::Sender<Msg>,
    active: Option<RunHandle>,
}

impl EffectRunner {
    pub fn new(settings: DownloadSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            downloader: Downloader::new(settings),
            msg_tx,
            active: None,
        }
    }

    /// Checks prerequisites, then hands the request to the background worker.
    /// A start that does not happen comes back as [`Msg::RunRejected`], or
    /// as [`Msg::RunCancelled`] when there is nothing to report.
    pub fn start_run(&mut self, request: DownloadRequest, prompt: &dyn Prompt) {
        if let Err(refusal) = self.ensure_tools(prompt) {
            ripper_warn!("run not started: {:?}", refusal);
            let _ = self.msg_tx.send(refusal);
            return;
        }

        let sink = MsgSink {
            tx: self.msg_tx.clone(),
        };
        match self.downloader.start(&request, Box::new(sink)) {
            Ok(handle) => {
                ripper_info!(
                    "run {} started for {} into {}",
                    handle.run(),
                    request.source_url(),
                    request.destination_directory().display()
                );
                self.active = Some(handle);
            }
            Err(err) => {
                ripper_warn!("run not started: {}", err);
                let _ = self.msg_tx.send(Msg::RunRejected(err.to_string()));
            }
        }
    }

    /// Joins a worker that died without sending its terminal event.
    pub fn reap_crashed_worker(&mut self) -> Option<OutputEvent> {
        if !self.active.as_ref().is_some_and(RunHandle::is_finished) {
            return None;
        }
        let handle = self.active.take()?;
        match handle.join() {
            Err(err @ RunError::WorkerPanicked) => {
                ripper_error!("run worker crashed: {}", err);
                Some(OutputEvent::UnexpectedError {
                    message: err.to_string(),
                })
            }
            _ => None,
        }
    }

    /// `Err` carries the message that ends the attempt.
    fn ensure_tools(&self, prompt: &dyn Prompt) -> Result<(), Msg> {
        let settings = self.downloader.settings();
        match tools::check_tools(settings) {
            Ok(paths) => {
                ripper_info!(
                    "using {} and {}",
                    paths.downloader.display(),
                    paths.transcoder.display()
                );
                Ok(())
            }
            Err(missing @ MissingTool::Downloader { .. }) => {
                let question = format!("{missing} Install via pip?");
                match prompt.confirm(&question) {
                    Ok(true) => {}
                    Ok(false) => return Err(Msg::RunCancelled),
                    Err(err) => return Err(Msg::RunRejected(format!("{missing} ({err})"))),
                }
                if let Err(err) = tools::install_downloader(settings) {
                    return Err(Msg::RunRejected(err.to_string()));
                }
                prompt.inform(
                    "Success",
                    &format!("{} installed successfully.", settings.pip_package),
                );
                // The user starts the download again once the tool is in place.
                Err(Msg::RunCancelled)
            }
            Err(missing) => Err(Msg::RunRejected(missing.to_string())),
        }
    }
}
