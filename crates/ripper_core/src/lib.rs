//! Ripper core: output interpretation and the pure interface state machine.
mod classify;
mod effect;
mod event;
mod interpreter;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use classify::{LineClassifier, LineKind, DEFAULT_AUDIO_FORMAT};
pub use effect::{Effect, Severity};
pub use event::OutputEvent;
pub use interpreter::{
    OutputInterpreter, RunState, DEFAULT_DIAGNOSTIC_CAPACITY, DEFAULT_TRAILING_LINES,
};
pub use msg::Msg;
pub use request::{DownloadRequest, PreconditionError, DIRECTORY_PLACEHOLDER, URL_PLACEHOLDER};
pub use state::{AppState, RunPhase, READY_STATUS};
pub use update::update;
pub use view_model::AppViewModel;
