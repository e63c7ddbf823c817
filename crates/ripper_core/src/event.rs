/// Structured result of interpreting the downloader's output.
///
/// One event is produced per classified line; exactly one of the last three
/// variants closes every run.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    /// Percent-complete of the current item, as a fraction in `[0, 1]`.
    Progress { fraction: f64 },
    /// An item finished converting; `title` is its file name without extension.
    ItemCompleted { title: String },
    /// The child exited with status 0.
    RunFinished { items_downloaded: u32, exit_code: i32 },
    /// The child exited with a non-zero status.
    RunFailed {
        exit_code: i32,
        trailing_log_lines: Vec<String>,
    },
    /// Spawning, reading or waiting failed.
    UnexpectedError { message: String },
}

impl OutputEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OutputEvent::RunFinished { .. }
                | OutputEvent::RunFailed { .. }
                | OutputEvent::UnexpectedError { .. }
        )
    }
}
