use std::sync::LazyLock;

use regex::Regex;

use crate::OutputEvent;

/// Audio container the downloader is asked to produce.
pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";

static PROGRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)%").expect("progress pattern"));

/// What a single line of downloader output means.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Progress { fraction: f64 },
    ItemCompleted { title: String },
    /// Looked like progress but the number did not parse; ignored entirely.
    Dropped,
    /// Anything else. Kept only for diagnostics.
    Unclassified,
}

impl LineKind {
    pub fn into_event(self) -> Option<OutputEvent> {
        match self {
            LineKind::Progress { fraction } => Some(OutputEvent::Progress { fraction }),
            LineKind::ItemCompleted { title } => Some(OutputEvent::ItemCompleted { title }),
            LineKind::Dropped | LineKind::Unclassified => None,
        }
    }
}

/// Pure line classifier for the downloader's output vocabulary.
///
/// Progress markers win over destination markers; a line is never both.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    destination: Regex,
    extension: String,
}

impl LineClassifier {
    pub fn new(audio_format: &str) -> Self {
        let pattern = format!(
            r"Destination: (?P<path>.+?\.{})",
            regex::escape(audio_format)
        );
        Self {
            destination: Regex::new(&pattern).expect("escaped extension forms a valid pattern"),
            extension: format!(".{audio_format}"),
        }
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if let Some(captures) = PROGRESS_PATTERN.captures(line) {
            return match captures[1].parse::<f64>() {
                Ok(percent) => LineKind::Progress {
                    fraction: (percent / 100.0).clamp(0.0, 1.0),
                },
                Err(_) => LineKind::Dropped,
            };
        }

        if let Some(captures) = self.destination.captures(line) {
            return LineKind::ItemCompleted {
                title: self.title_from_path(&captures["path"]),
            };
        }

        LineKind::Unclassified
    }

    /// `line -> OutputEvent | None`, without touching any run state.
    pub fn event_for(&self, line: &str) -> Option<OutputEvent> {
        self.classify(line).into_event()
    }

    fn title_from_path(&self, path: &str) -> String {
        // Separators of both platforms: the tool may run on either.
        let file_name = path.trim().rsplit(['/', '\\']).next().unwrap_or_default();
        match file_name.strip_suffix(self.extension.as_str()) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => file_name.to_string(),
        }
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIO_FORMAT)
    }
}
