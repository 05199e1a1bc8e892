//! The filename part of whatever the caller passed in.

/// Used when the last path component is empty, `.` or `..`.
pub const FALLBACK_FILE_NAME: &str = "download.bin";

/// Last component of `filename`, splitting on both `/` and `\`.
pub fn last_component(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

/// Last component of `filename`, safe to use as a single path segment.
///
/// Directory parts are dropped so a destination can never climb out of its
/// base directory; reserved names become [`FALLBACK_FILE_NAME`].
pub fn file_segment(filename: &str) -> &str {
    match last_component(filename) {
        "" | "." | ".." => FALLBACK_FILE_NAME,
        name => name,
    }
}
