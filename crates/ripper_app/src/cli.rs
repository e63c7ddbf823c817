use std::path::PathBuf;

use clap::Parser;

use crate::platform::logging::{LogDestination, LogLevel, DEFAULT_LOG_FILE};

/// Download a playlist's audio tracks as MP3 through yt-dlp.
#[derive(Parser, Debug)]
#[command(name = "ripper")]
#[command(version)]
#[command(about = "Download a playlist's audio tracks as MP3", long_about = None)]
pub struct Cli {
    /// Playlist URL. Prompted for when omitted.
    #[arg(long, value_name = "URL")]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Directory the playlist folder is created in. Prompted for when omitted.
    #[arg(long, value_name = "DIR")]
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<String>,

    /// RON settings file; defaults are used when it does not exist.
    #[arg(long, value_name = "FILE", default_value = "ripper.ron")]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Write the effective settings to the config file and exit.
    #[arg(long)]
    pub write_config: bool,

    /// Where diagnostic logging goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Diagnostic log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Diagnostic log file, appended to.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}
