use crate::OutputEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the playlist URL field.
    UrlEdited(String),
    /// User typed or picked a destination directory.
    DirectoryEdited(String),
    /// User pressed the download trigger.
    DownloadClicked,
    /// The engine refused to start the run (missing tool, run already active).
    RunRejected(String),
    /// The start was abandoned on the user's behalf, e.g. a declined or
    /// just-finished install. Nothing to report.
    RunCancelled,
    /// Event forwarded from the background worker.
    RunEvent(OutputEvent),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
