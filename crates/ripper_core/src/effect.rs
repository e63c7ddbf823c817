use crate::DownloadRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartRun(DownloadRequest),
    ShowMessage {
        severity: Severity,
        title: String,
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Effect {
    pub(crate) fn info(title: &str, text: impl Into<String>) -> Self {
        Effect::ShowMessage {
            severity: Severity::Info,
            title: title.to_string(),
            text: text.into(),
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Effect::ShowMessage {
            severity: Severity::Error,
            title: "Error".to_string(),
            text: text.into(),
        }
    }
}
