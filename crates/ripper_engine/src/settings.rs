use std::path::PathBuf;

use ripper_core::{
    LineClassifier, OutputInterpreter, DEFAULT_AUDIO_FORMAT, DEFAULT_DIAGNOSTIC_CAPACITY,
    DEFAULT_TRAILING_LINES,
};
use serde::{Deserialize, Serialize};

/// Everything a run needs to know about the outside world.
///
/// Missing fields fall back to [`DownloadSettings::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    /// Downloader executable, looked up on `PATH` unless it is a path.
    pub downloader: String,
    /// Transcoder the downloader needs for audio extraction.
    pub transcoder: String,
    /// Interpreter used to `pip install` the downloader when it is missing.
    pub python: String,
    pub pip_package: String,
    pub audio_format: String,
    pub verbose: bool,
    /// Output template, relative to the destination directory.
    pub output_template: String,
    pub error_log: PathBuf,
    pub trailing_lines: usize,
    pub diagnostic_capacity: usize,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            downloader: "yt-dlp".to_string(),
            transcoder: "ffmpeg".to_string(),
            python: if cfg!(target_os = "windows") {
                "python".to_string()
            } else {
                "python3".to_string()
            },
            pip_package: "yt-dlp".to_string(),
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            verbose: true,
            output_template: "%(playlist_title)s/%(title)s.%(ext)s".to_string(),
            error_log: PathBuf::from("yt_dlp_error.log"),
            trailing_lines: DEFAULT_TRAILING_LINES,
            diagnostic_capacity: DEFAULT_DIAGNOSTIC_CAPACITY,
        }
    }
}

impl DownloadSettings {
    /// Fresh interpreter for one run.
    pub fn interpreter(&self) -> OutputInterpreter {
        OutputInterpreter::new(
            LineClassifier::new(&self.audio_format),
            self.diagnostic_capacity,
            self.trailing_lines,
        )
    }
}
