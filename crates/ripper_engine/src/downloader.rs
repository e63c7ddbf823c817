use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use ripper_core::{DownloadRequest, OutputEvent, OutputInterpreter};
use ripper_logging::{ripper_info, ripper_trace, ripper_warn};

use crate::command::build_command;
use crate::runner;
use crate::{DownloadSettings, ErrorLog, EventSink, RunError, RunSummary, StartError};

/// Runs downloads one at a time on a background worker thread.
pub struct Downloader {
    settings: Arc<DownloadSettings>,
    error_log: ErrorLog,
    active: Arc<AtomicBool>,
    runs: AtomicU64,
}

impl Downloader {
    pub fn new(settings: DownloadSettings) -> Self {
        let error_log = ErrorLog::new(settings.error_log.clone());
        Self {
            settings: Arc::new(settings),
            error_log,
            active: Arc::new(AtomicBool::new(false)),
            runs: AtomicU64::new(0),
        }
    }

    pub fn settings(&self) -> &DownloadSettings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Starts a run unless one is already active.
    ///
    /// Every event of the run, ending with exactly one terminal event, is
    /// delivered to `sink` from the worker thread.
    pub fn start(
        &self,
        request: &DownloadRequest,
        sink: Box<dyn EventSink>,
    ) -> Result<RunHandle, StartError> {
        let Some(guard) = RunGuard::acquire(&self.active) else {
            ripper_warn!("rejected {}: a run is active", request.source_url());
            return Err(StartError::AlreadyRunning);
        };

        let run = self.runs.fetch_add(1, Ordering::Relaxed) + 1;
        let worker = RunWorker {
            run,
            command: build_command(&self.settings, request),
            interpreter: self.settings.interpreter(),
            error_log: self.error_log.clone(),
        };

        let join = thread::Builder::new()
            .name(format!("ripper-run-{run}"))
            .spawn(move || worker.execute(guard, sink.as_ref()))
            .map_err(|err| StartError::Worker(err.to_string()))?;

        Ok(RunHandle { run, join })
    }
}

/// Handle to a started run. Dropping it detaches the worker.
pub struct RunHandle {
    run: u64,
    join: JoinHandle<Result<RunSummary, RunError>>,
}

impl RunHandle {
    /// 1-based number of this run within its [`Downloader`].
    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    pub fn join(self) -> Result<RunSummary, RunError> {
        self.join
            .join()
            .unwrap_or_else(|_| Err(RunError::WorkerPanicked))
    }
}

/// Holds the single-run slot; releases it on drop.
struct RunGuard {
    active: Arc<AtomicBool>,
}

impl RunGuard {
    fn acquire(active: &Arc<AtomicBool>) -> Option<Self> {
        active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                active: Arc::clone(active),
            })
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

struct RunWorker {
    run: u64,
    command: Vec<String>,
    interpreter: OutputInterpreter,
    error_log: ErrorLog,
}

impl RunWorker {
    fn execute(mut self, guard: RunGuard, sink: &dyn EventSink) -> Result<RunSummary, RunError> {
        ripper_logging::set_run_tag(self.run);
        ripper_info!("starting: {}", self.command.join(" "));

        let (result, terminal) = match self.stream(sink) {
            Ok(0) => {
                let summary = RunSummary {
                    items_downloaded: self.interpreter.items_downloaded(),
                    exit_code: 0,
                };
                ripper_info!("finished, {} items", summary.items_downloaded);
                (Ok(summary), self.interpreter.finish(0))
            }
            Ok(exit_code) => {
                ripper_warn!("downloader exited with code {exit_code}");
                self.record(
                    &format!("Error (code {exit_code})"),
                    &self.interpreter.diagnostics(),
                );
                let err = RunError::ChildProcessFailure {
                    exit_code,
                    trailing_log_lines: self.interpreter.trailing_lines(),
                };
                (Err(err), self.interpreter.finish(exit_code))
            }
            Err(err) => {
                let message = err.to_string();
                ripper_warn!("run aborted: {message}");
                self.record("Unexpected error", &[message.as_str()]);
                (Err(err), OutputEvent::UnexpectedError { message })
            }
        };

        // Free the slot first so whoever reacts to the terminal event can
        // start the next run straight away.
        drop(guard);
        sink.emit(terminal);
        result
    }

    fn stream(&mut self, sink: &dyn EventSink) -> Result<i32, RunError> {
        let mut process = runner::start(&self.command)?;
        if let Err(err) = pump(process.lines(), &mut self.interpreter, sink) {
            process.abort();
            return Err(err.into());
        }
        process.wait()
    }

    fn record<S: AsRef<str>>(&self, reason: &str, lines: &[S]) {
        if let Err(err) = self.error_log.append(reason, lines) {
            ripper_warn!(
                "could not append to {}: {err}",
                self.error_log.path().display()
            );
        }
    }
}

fn pump(
    lines: impl Iterator<Item = io::Result<String>>,
    interpreter: &mut OutputInterpreter,
    sink: &dyn EventSink,
) -> io::Result<()> {
    for line in lines {
        let line = line?;
        ripper_trace!("{line}");
        if let Some(event) = interpreter.process(&line) {
            sink.emit(event);
        }
    }
    Ok(())
}
