pub mod constants;
pub mod render;
pub mod terminal;

use ripper_core::Severity;

/// One change to apply to the terminal. Produced by [`render::render`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    SetProgress { position: u64 },
    SetStatus(String),
    AppendOutput(String),
    /// The output log was reset for a new run.
    ClearOutput,
    SetTriggerEnabled(bool),
    ShowMessage {
        severity: Severity,
        title: String,
        text: String,
    },
}
