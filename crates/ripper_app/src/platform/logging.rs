//! Diagnostic logging for the ripper binary.
//!
//! This is the program's own log (`./ripper.log` by default), appended to
//! across invocations. It is unrelated to the downloader's error log, which
//! only ever receives failed runs.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    ThreadLogMode, WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "ripper.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Append to the log file.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Both of the above.
    Both,
}

/// Verbosity. `trace` also records every line the downloader prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LogLevel,
    pub file: PathBuf,
}

/// Installs the global logger. A log file that cannot be opened is reported
/// on stderr and skipped; logging never stops the program.
pub fn initialize(settings: &LogSettings) {
    let loggers = build_loggers(settings);
    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn build_loggers(settings: &LogSettings) -> Vec<Box<dyn SharedLogger>> {
    let level = LevelFilter::from(settings.level);
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            level,
            build_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    ) {
        match open_log_file(&settings.file) {
            Ok(file) => loggers.push(WriteLogger::new(level, build_config(), file)),
            Err(err) => eprintln!(
                "Warning: Could not open log file {}: {}",
                settings.file.display(),
                err
            ),
        }
    }

    loggers
}

fn build_config() -> Config {
    // Worker threads are named after their run ("ripper-run-3"); show the
    // name on every line so interleaved runs across invocations stay apart.
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_thread_mode(ThreadLogMode::Names)
        .set_thread_level(LevelFilter::Error)
        .add_filter_allow_str("ripper")
        .build()
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
