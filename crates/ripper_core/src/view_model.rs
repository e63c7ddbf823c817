use crate::RunPhase;

/// Snapshot of [`crate::AppState`] handed to the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub directory_input: String,
    pub phase: RunPhase,
    /// Fraction in `[0, 1]` for the progress bar.
    pub progress: f64,
    pub status: String,
    pub output_lines: Vec<String>,
    pub items_downloaded: u32,
    /// The download trigger is disabled for the whole duration of a run.
    pub trigger_enabled: bool,
}
