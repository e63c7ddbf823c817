use crate::view_model::AppViewModel;

/// Status line shown while no run is active.
pub const READY_STATUS: &str = "Ready";

/// Lifecycle of the current (or last) run as seen by the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
    Errored,
}

impl RunPhase {
    pub fn is_running(self) -> bool {
        self == RunPhase::Running
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunPhase::Succeeded | RunPhase::Failed | RunPhase::Errored
        )
    }
}

/// All interface state. Owned by the foreground context only.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    url_input: String,
    directory_input: String,
    phase: RunPhase,
    progress: f64,
    status: String,
    output_lines: Vec<String>,
    items_downloaded: u32,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url_input: String::new(),
            directory_input: String::new(),
            phase: RunPhase::Idle,
            progress: 0.0,
            status: READY_STATUS.to_string(),
            output_lines: Vec::new(),
            items_downloaded: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url_input: self.url_input.clone(),
            directory_input: self.directory_input.clone(),
            phase: self.phase,
            progress: self.progress,
            status: self.status.clone(),
            output_lines: self.output_lines.clone(),
            items_downloaded: self.items_downloaded,
            trigger_enabled: !self.phase.is_running(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn directory_input(&self) -> &str {
        &self.directory_input
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text {
            self.url_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_directory_input(&mut self, text: String) {
        if self.directory_input != text {
            self.directory_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_run(&mut self) {
        self.phase = RunPhase::Running;
        self.progress = 0.0;
        self.items_downloaded = 0;
        self.output_lines.clear();
        self.status = "Starting download...".to_string();
        self.dirty = true;
    }

    /// Back to idle without a result, e.g. when the engine refused to start.
    pub(crate) fn abandon_run(&mut self) {
        self.phase = RunPhase::Idle;
        self.status = READY_STATUS.to_string();
        self.dirty = true;
    }

    pub(crate) fn end_run(&mut self, phase: RunPhase, status: String) {
        self.phase = phase;
        self.status = status;
        self.dirty = true;
    }

    pub(crate) fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction;
        self.status = format!("Progress: {:.1}%", fraction * 100.0);
        self.dirty = true;
    }

    pub(crate) fn record_item(&mut self, title: &str) {
        self.items_downloaded += 1;
        self.push_output(format!("\"{title}\" downloaded!"));
    }

    pub(crate) fn push_output(&mut self, line: String) {
        self.output_lines.push(line);
        self.dirty = true;
    }
}
