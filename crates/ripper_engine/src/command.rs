use ripper_core::DownloadRequest;

use crate::DownloadSettings;

/// Argument vector for the downloader, program name first.
///
/// `<tool> -x --audio-format <fmt> --yes-playlist [--verbose] <url> -o <dest>/<template>`
pub fn build_command(settings: &DownloadSettings, request: &DownloadRequest) -> Vec<String> {
    let mut command = vec![
        settings.downloader.clone(),
        "-x".to_string(),
        "--audio-format".to_string(),
        settings.audio_format.clone(),
        "--yes-playlist".to_string(),
    ];
    if settings.verbose {
        command.push("--verbose".to_string());
    }
    command.push(request.source_url().to_string());
    command.push("-o".to_string());
    command.push(
        request
            .destination_directory()
            .join(&settings.output_template)
            .to_string_lossy()
            .into_owned(),
    );
    command
}
