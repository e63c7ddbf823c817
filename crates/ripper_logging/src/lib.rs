#![deny(missing_docs)]
//! Shared logging utilities for the ripper workspace.
//!
//! This crate provides the `ripper_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local number of the download run this thread is working for.
    static RUN_TAG: Cell<u64> = const { Cell::new(0) };
}

/// Tags every log line emitted from the current thread with a run number.
/// Background workers call this once when they start; 0 clears the tag.
pub fn set_run_tag(run: u64) {
    RUN_TAG.with(|v| v.set(run));
}

/// Retrieves the run number for the current thread.
/// Returns 0 if the thread is not working for a run.
pub fn run_tag() -> u64 {
    RUN_TAG.with(|v| v.get())
}

/// Prefix prepended by the logging macros, e.g. `"[run 3] "`.
#[doc(hidden)]
pub fn run_prefix() -> String {
    match run_tag() {
        0 => String::new(),
        run => format!("[run {run}] "),
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! ripper_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("{}{}", $crate::run_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! ripper_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("{}{}", $crate::run_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! ripper_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("{}{}", $crate::run_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! ripper_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("{}{}", $crate::run_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! ripper_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("{}{}", $crate::run_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
