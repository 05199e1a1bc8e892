//! Canonical extension and MIME lookup tables.
//!
//! Both the download router and the folder organizer read these; there is no
//! second copy anywhere in the workspace.

use crate::category::Category::{self, Archive, Document, Executable, Image, Music, Video, Web};

/// Lowercase extension (no leading dot) to category.
pub const EXTENSION_TABLE: &[(&str, Category)] = &[
    // Images
    ("jpg", Image),
    ("jpeg", Image),
    ("png", Image),
    ("gif", Image),
    ("webp", Image),
    ("svg", Image),
    ("tiff", Image),
    ("bmp", Image),
    ("ico", Image),
    ("raw", Image),
    ("heic", Image),
    // Documents
    ("pdf", Document),
    ("doc", Document),
    ("docx", Document),
    ("txt", Document),
    ("xlsx", Document),
    ("csv", Document),
    ("xls", Document),
    ("ppt", Document),
    ("pptx", Document),
    ("odt", Document),
    ("rtf", Document),
    ("tex", Document),
    ("wpd", Document),
    ("md", Document),
    ("epub", Document),
    ("mobi", Document),
    // Videos
    ("mp4", Video),
    ("mkv", Video),
    ("avi", Video),
    ("mov", Video),
    ("wmv", Video),
    ("flv", Video),
    ("webm", Video),
    ("m4v", Video),
    ("3gp", Video),
    ("mpeg", Video),
    ("mpg", Video),
    // Audio
    ("mp3", Music),
    ("wav", Music),
    ("m4a", Music),
    ("flac", Music),
    ("aac", Music),
    ("ogg", Music),
    ("wma", Music),
    ("aiff", Music),
    ("opus", Music),
    ("mid", Music),
    ("midi", Music),
    // Archives
    ("zip", Archive),
    ("rar", Archive),
    ("7z", Archive),
    ("tar", Archive),
    ("gz", Archive),
    ("bz2", Archive),
    ("xz", Archive),
    ("tgz", Archive),
    ("cab", Archive),
    // Executables and installers
    ("exe", Executable),
    ("msi", Executable),
    ("dmg", Executable),
    ("app", Executable),
    ("deb", Executable),
    ("rpm", Executable),
    ("iso", Executable),
    ("pkg", Executable),
    ("apk", Executable),
    // Web
    ("html", Web),
    ("htm", Web),
    ("css", Web),
    ("js", Web),
    ("json", Web),
    ("xml", Web),
];

/// Exact MIME type to category. Keys are bare tokens without parameters.
pub const MIME_TABLE: &[(&str, Category)] = &[
    // Images
    ("image/jpeg", Image),
    ("image/png", Image),
    ("image/gif", Image),
    ("image/webp", Image),
    ("image/svg+xml", Image),
    ("image/tiff", Image),
    ("image/bmp", Image),
    ("image/x-icon", Image),
    ("image/heic", Image),
    // Documents
    ("application/pdf", Document),
    ("application/msword", Document),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Document,
    ),
    ("text/plain", Document),
    ("application/vnd.ms-excel", Document),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Document,
    ),
    ("application/vnd.oasis.opendocument.text", Document),
    ("application/rtf", Document),
    ("text/markdown", Document),
    ("application/epub+zip", Document),
    // Videos
    ("video/mp4", Video),
    ("video/x-matroska", Video),
    ("video/x-msvideo", Video),
    ("video/quicktime", Video),
    ("video/webm", Video),
    ("video/3gpp", Video),
    ("video/mpeg", Video),
    // Audio
    ("audio/mpeg", Music),
    ("audio/wav", Music),
    ("audio/ogg", Music),
    ("audio/flac", Music),
    ("audio/aac", Music),
    ("audio/midi", Music),
    ("audio/webm", Music),
    // Archives
    ("application/zip", Archive),
    ("application/x-rar-compressed", Archive),
    ("application/x-7z-compressed", Archive),
    ("application/x-tar", Archive),
    ("application/gzip", Archive),
    ("application/x-bzip2", Archive),
    ("application/x-compressed", Archive),
    // Executables
    ("application/x-msdownload", Executable),
    ("application/x-msi", Executable),
    ("application/x-apple-diskimage", Executable),
    ("application/vnd.debian.binary-package", Executable),
    ("application/x-rpm", Executable),
    ("application/vnd.android.package-archive", Executable),
    // Web
    ("text/html", Web),
    ("text/css", Web),
    ("text/javascript", Web),
    ("application/javascript", Web),
    ("application/json", Web),
    ("application/xml", Web),
    ("text/xml", Web),
];

/// Looks up an already-lowercased extension.
pub fn category_for_extension(ext: &str) -> Option<Category> {
    lookup(EXTENSION_TABLE, ext)
}

/// Looks up a MIME type by exact string match.
pub fn category_for_mime(mime: &str) -> Option<Category> {
    lookup(MIME_TABLE, mime)
}

fn lookup(table: &[(&str, Category)], key: &str) -> Option<Category> {
    if key.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, category)| category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_keys(table: &[(&str, Category)]) {
        let mut seen = HashSet::new();
        for (k, _) in table {
            assert!(seen.insert(*k), "duplicate key {k}");
        }
    }

    #[test]
    fn keys_are_unique() {
        assert_unique_keys(EXTENSION_TABLE);
        assert_unique_keys(MIME_TABLE);
    }

    #[test]
    fn extension_keys_are_lowercase_without_dot() {
        for (k, _) in EXTENSION_TABLE {
            assert_eq!(*k, k.to_lowercase());
            assert!(!k.starts_with('.'));
            assert!(!k.is_empty());
        }
    }

    #[test]
    fn mime_keys_are_bare_tokens() {
        for (k, _) in MIME_TABLE {
            assert!(k.contains('/'), "{k}");
            assert!(!k.contains(';'), "{k}");
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(category_for_extension("flac"), Some(Category::Music));
        assert_eq!(category_for_extension("FLAC"), None);
        assert_eq!(category_for_extension(""), None);
        assert_eq!(category_for_mime("video/quicktime"), Some(Category::Video));
        assert_eq!(category_for_mime("Video/QuickTime"), None);
    }

    #[test]
    fn other_is_never_a_table_value() {
        assert!(EXTENSION_TABLE.iter().all(|(_, c)| *c != Category::Other));
        assert!(MIME_TABLE.iter().all(|(_, c)| *c != Category::Other));
    }
}
