//! Extension extraction from a filename.

use super::name::last_component;

/// Returns the lowercase text after the final `.` of the last path component,
/// or an empty string when there is none.
///
/// `"Movie.MP4"` gives `"mp4"`, `"README"` gives `""`, `"archive."` gives `""`.
pub fn extension_of(filename: &str) -> String {
    match last_component(filename).rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    }
}
