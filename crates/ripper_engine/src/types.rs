use std::io;

use thiserror::Error;

/// Result of a run whose child exited with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub items_downloaded: u32,
    pub exit_code: i32,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Download failed (code {exit_code})")]
    ChildProcessFailure {
        exit_code: i32,
        trailing_log_lines: Vec<String>,
    },
    #[error("empty download command")]
    EmptyCommand,
    #[error("failed to start {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("download worker panicked")]
    WorkerPanicked,
}

impl RunError {
    /// Everything except a non-zero exit is an unexpected fault.
    pub fn is_unexpected(&self) -> bool {
        !matches!(self, RunError::ChildProcessFailure { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("A download is already running.")]
    AlreadyRunning,
    #[error("failed to start download worker: {0}")]
    Worker(String),
}
