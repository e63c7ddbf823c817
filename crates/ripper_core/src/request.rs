use std::path::{Path, PathBuf};

use thiserror::Error;

/// Text shown in the empty URL field; never a valid URL.
pub const URL_PLACEHOLDER: &str = "Enter playlist URL";
/// Text shown in the empty directory field; never a valid directory.
pub const DIRECTORY_PLACEHOLDER: &str = "Select directory";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Please enter a valid playlist URL.")]
    MissingUrl,
    #[error("Please select a directory to save files.")]
    MissingDirectory,
    #[error("Selected directory does not exist.")]
    DirectoryNotFound { path: PathBuf },
}

/// A validated download job. Only constructible through [`DownloadRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    source_url: String,
    destination_directory: PathBuf,
}

impl DownloadRequest {
    /// Validates raw user input. Both fields are trimmed first.
    pub fn new(url: &str, directory: &str) -> Result<Self, PreconditionError> {
        let url = url.trim();
        if url.is_empty() || url == URL_PLACEHOLDER {
            return Err(PreconditionError::MissingUrl);
        }

        let directory = directory.trim();
        if directory.is_empty() || directory == DIRECTORY_PLACEHOLDER {
            return Err(PreconditionError::MissingDirectory);
        }
        let destination_directory = PathBuf::from(directory);
        if !destination_directory.is_dir() {
            return Err(PreconditionError::DirectoryNotFound {
                path: destination_directory,
            });
        }

        Ok(Self {
            source_url: url.to_string(),
            destination_directory,
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn destination_directory(&self) -> &Path {
        &self.destination_directory
    }
}
