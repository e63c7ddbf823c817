//! Settings file handling. The file is RON and every field is optional.

use std::fs;
use std::path::Path;

use anyhow::Context;
use ripper_engine::DownloadSettings;
use ripper_logging::{ripper_info, ripper_warn};

/// Loads settings from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub(crate) fn load_settings(path: &Path) -> DownloadSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return DownloadSettings::default();
        }
        Err(err) => {
            ripper_warn!("Failed to read settings from {:?}: {}", path, err);
            return DownloadSettings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            ripper_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            ripper_warn!("Failed to parse settings from {:?}: {}", path, err);
            DownloadSettings::default()
        }
    }
}

pub(crate) fn save_settings(path: &Path, settings: &DownloadSettings) -> anyhow::Result<()> {
    let pretty = ron::ser::PrettyConfig::new();
    let content =
        ron::ser::to_string_pretty(settings, pretty).context("Failed to serialize settings")?;
    fs::write(path, content).with_context(|| format!("Failed to write settings to {path:?}"))?;
    ripper_info!("Wrote settings to {:?}", path);
    Ok(())
}
