/// Progress bar resolution: one step per 0.1 percent.
pub const PROGRESS_RANGE: u64 = 1000;
pub const PROGRESS_TEMPLATE: &str = "{bar:40.green/black} {percent:>3}% {wide_msg}";
pub const PROGRESS_CHARS: &str = "━╾╴─";
pub const URL_PROMPT: &str = "Playlist URL";
pub const DIRECTORY_PROMPT: &str = "Save Directory";
