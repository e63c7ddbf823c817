use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Append-only UTF-8 diagnostic log for failed runs.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one timestamped entry, creating the file if needed.
    pub fn append<S: AsRef<str>>(&self, reason: &str, lines: &[S]) -> io::Result<()> {
        let entry = format_entry(&Local::now(), reason, lines);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // One write per entry so concurrent writers never interleave lines.
        file.write_all(entry.as_bytes())?;
        file.flush()
    }
}

/// `[<timestamp>] <reason>:\n<lines>\n\n`
pub fn format_entry<S: AsRef<str>>(at: &DateTime<Local>, reason: &str, lines: &[S]) -> String {
    let body = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "[{}] {reason}:\n{body}\n\n",
        at.format("%Y-%m-%d %H:%M:%S%.6f")
    )
}
