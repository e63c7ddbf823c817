//! Ripper engine: process lifecycle, run orchestration and error logging.
mod command;
mod downloader;
mod error_log;
mod runner;
mod settings;
mod sink;
pub mod tools;
mod types;

pub use command::build_command;
pub use downloader::{Downloader, RunHandle};
pub use error_log::{format_entry, ErrorLog};
pub use runner::{start, ChildLines, LineSource, RunningProcess};
pub use settings::DownloadSettings;
pub use sink::{ChannelEventSink, EventSink};
pub use types::{RunError, RunSummary, StartError};
