use std::collections::VecDeque;

use crate::{LineClassifier, LineKind, OutputEvent};

/// Lines kept for the error log when a run fails.
pub const DEFAULT_DIAGNOSTIC_CAPACITY: usize = 1000;
/// Lines shown to the user when a run fails.
pub const DEFAULT_TRAILING_LINES: usize = 5;

/// Counters owned by the active run. Dropped with the interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    items_downloaded: u32,
    unclassified_lines: VecDeque<String>,
}

impl RunState {
    pub fn items_downloaded(&self) -> u32 {
        self.items_downloaded
    }

    pub fn unclassified_lines(&self) -> impl Iterator<Item = &str> {
        self.unclassified_lines.iter().map(String::as_str)
    }
}

/// Turns the child's output into [`OutputEvent`]s, one line at a time.
#[derive(Debug, Clone)]
pub struct OutputInterpreter {
    classifier: LineClassifier,
    state: RunState,
    capacity: usize,
    trailing_lines: usize,
}

impl OutputInterpreter {
    pub fn new(classifier: LineClassifier, capacity: usize, trailing_lines: usize) -> Self {
        Self {
            classifier,
            state: RunState::default(),
            capacity,
            trailing_lines,
        }
    }

    pub fn process(&mut self, line: &str) -> Option<OutputEvent> {
        match self.classifier.classify(line) {
            LineKind::ItemCompleted { title } => {
                self.state.items_downloaded += 1;
                Some(OutputEvent::ItemCompleted { title })
            }
            LineKind::Unclassified => {
                self.remember(line.trim());
                None
            }
            kind => kind.into_event(),
        }
    }

    /// Terminal event for a child that exited with `exit_code`.
    pub fn finish(&self, exit_code: i32) -> OutputEvent {
        if exit_code == 0 {
            OutputEvent::RunFinished {
                items_downloaded: self.state.items_downloaded,
                exit_code,
            }
        } else {
            OutputEvent::RunFailed {
                exit_code,
                trailing_log_lines: self.trailing_lines(),
            }
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn items_downloaded(&self) -> u32 {
        self.state.items_downloaded
    }

    /// The whole diagnostic buffer, oldest first.
    pub fn diagnostics(&self) -> Vec<String> {
        self.state.unclassified_lines.iter().cloned().collect()
    }

    pub fn trailing_lines(&self) -> Vec<String> {
        let lines = &self.state.unclassified_lines;
        let skip = lines.len().saturating_sub(self.trailing_lines);
        lines.iter().skip(skip).cloned().collect()
    }

    fn remember(&mut self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.state.unclassified_lines.len() == self.capacity {
            self.state.unclassified_lines.pop_front();
        }
        self.state.unclassified_lines.push_back(line.to_string());
    }
}

impl Default for OutputInterpreter {
    fn default() -> Self {
        Self::new(
            LineClassifier::default(),
            DEFAULT_DIAGNOSTIC_CAPACITY,
            DEFAULT_TRAILING_LINES,
        )
    }
}
