//! In-progress download marker handling.

/// Suffixes browsers and download tools append while a transfer is running.
pub const DEFAULT_IN_PROGRESS_SUFFIXES: &[&str] = &[".crdownload", ".part"];

/// Removes one in-progress marker from the end of `filename`.
///
/// Markers are tried in order and matched case-sensitively; only the first
/// match is stripped, once. A name that is nothing but a marker is returned
/// unchanged so the result is never empty.
pub fn strip_in_progress_marker<'a, S: AsRef<str>>(filename: &'a str, markers: &[S]) -> &'a str {
    for marker in markers {
        let marker: &str = marker.as_ref();
        if marker.is_empty() {
            continue;
        }
        if let Some(stripped) = filename.strip_suffix(marker) {
            if !stripped.is_empty() {
                return stripped;
            }
        }
    }
    filename
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_crdownload_and_part() {
        assert_eq!(
            strip_in_progress_marker("setup.exe.crdownload", DEFAULT_IN_PROGRESS_SUFFIXES),
            "setup.exe"
        );
        assert_eq!(
            strip_in_progress_marker("movie.mp4.part", DEFAULT_IN_PROGRESS_SUFFIXES),
            "movie.mp4"
        );
    }

    #[test]
    fn strips_once_only() {
        assert_eq!(
            strip_in_progress_marker("a.zip.part.part", DEFAULT_IN_PROGRESS_SUFFIXES),
            "a.zip.part"
        );
    }

    #[test]
    fn case_sensitive_and_end_only() {
        assert_eq!(
            strip_in_progress_marker("movie.mp4.PART", DEFAULT_IN_PROGRESS_SUFFIXES),
            "movie.mp4.PART"
        );
        assert_eq!(
            strip_in_progress_marker("file.part.zip", DEFAULT_IN_PROGRESS_SUFFIXES),
            "file.part.zip"
        );
    }

    #[test]
    fn bare_marker_is_kept() {
        assert_eq!(strip_in_progress_marker(".part", DEFAULT_IN_PROGRESS_SUFFIXES), ".part");
    }

    #[test]
    fn custom_markers() {
        assert_eq!(strip_in_progress_marker("x.iso.tmp", &[".tmp"]), "x.iso");
        assert_eq!(strip_in_progress_marker("x.iso.tmp", &[""]), "x.iso.tmp");
        let none: [&str; 0] = [];
        assert_eq!(strip_in_progress_marker("x.iso.part", &none), "x.iso.part");
    }
}
