/// Number of buffer lines shown in the preview
pub const DEFAULT_PREVIEW_LINES: usize = 20;
/// Prefix added to the uploaded file name for the download
pub const DEFAULT_DOWNLOAD_PREFIX: &str = "edited_";
/// The only extension accepted by the upload control (compared case-insensitively)
pub const DEFAULT_ALLOWED_EXTENSION: &str = "txt";
/// chrono format for the line appended on save
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "[Saved on: %Y-%m-%d %H:%M:%S]";
/// Default tracing directive when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "text_helper=info";
/// Media type of the download artifact
pub const DOWNLOAD_MEDIA_TYPE: &str = "text/plain";
