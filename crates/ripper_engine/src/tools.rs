//! Capability checks for the external programs a run depends on.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use ripper_logging::{ripper_info, ripper_warn};
use thiserror::Error;

use crate::DownloadSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub downloader: PathBuf,
    pub transcoder: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingTool {
    #[error("{name} not found.")]
    Downloader { name: String },
    #[error("{name} not found. Please install {name} for {format} conversion.")]
    Transcoder { name: String, format: String },
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Failed to install {package}: could not run {python}: {source}")]
    Launch {
        package: String,
        python: String,
        source: io::Error,
    },
    #[error("Failed to install {package}: pip exited with {status}")]
    Failed { package: String, status: ExitStatus },
}

pub fn locate(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

/// Resolves the downloader and the transcoder. The downloader is checked first.
pub fn check_tools(settings: &DownloadSettings) -> Result<ToolPaths, MissingTool> {
    let downloader = locate(&settings.downloader).ok_or_else(|| MissingTool::Downloader {
        name: settings.downloader.clone(),
    })?;
    let transcoder = locate(&settings.transcoder).ok_or_else(|| MissingTool::Transcoder {
        name: settings.transcoder.clone(),
        format: settings.audio_format.to_uppercase(),
    })?;
    Ok(ToolPaths {
        downloader,
        transcoder,
    })
}

/// `<python> -m pip install <package>` into the current environment.
pub fn install_downloader(settings: &DownloadSettings) -> Result<(), InstallError> {
    ripper_info!(
        "installing {} with {} -m pip",
        settings.pip_package,
        settings.python
    );
    let status = Command::new(&settings.python)
        .args(["-m", "pip", "install", settings.pip_package.as_str()])
        .status()
        .map_err(|source| InstallError::Launch {
            package: settings.pip_package.clone(),
            python: settings.python.clone(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        ripper_warn!("pip install {} failed: {}", settings.pip_package, status);
        Err(InstallError::Failed {
            package: settings.pip_package.clone(),
            status,
        })
    }
}
