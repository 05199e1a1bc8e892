//! Route a download (MIME type + filename) to its destination.
//!
//! The in-progress marker is stripped exactly once here, and both the
//! classifier and the path deriver see the same stripped name and extension.

use crate::category::{Category, FolderNaming};
use crate::classify::{classify_explained, MatchRule};
use crate::destination::{
    derive_path_with, extension_of, strip_in_progress_marker, DestinationPath,
    DEFAULT_IN_PROGRESS_SUFFIXES,
};
use serde::Serialize;

/// Outcome of routing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub category: Category,
    pub rule: MatchRule,
    /// Lowercase extension of the stripped filename (may be empty).
    pub extension: String,
    /// Last path component of the filename, with any in-progress marker removed.
    pub file_name: String,
    pub destination: DestinationPath,
}

/// Routing settings shared by every call.
#[derive(Debug, Clone)]
pub struct Router {
    naming: FolderNaming,
    markers: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            naming: FolderNaming::Local,
            markers: DEFAULT_IN_PROGRESS_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Router {
    pub fn new(naming: FolderNaming, markers: Vec<String>) -> Self {
        Self { naming, markers }
    }

    pub fn naming(&self) -> FolderNaming {
        self.naming
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Classify and derive the destination for one file.
    pub fn route(&self, mime: &str, filename: &str) -> Route {
        let file_name = strip_in_progress_marker(filename, self.markers.as_slice());
        let extension = extension_of(file_name);
        let (category, rule) = classify_explained(mime, &extension);
        self.finish(category, rule, extension, file_name)
    }

    /// Route with a category already decided by the caller (e.g. a
    /// cloud-native document type), keeping the same path rules.
    pub fn route_as(&self, category: Category, extension: &str, filename: &str) -> Route {
        let file_name = strip_in_progress_marker(filename, self.markers.as_slice());
        self.finish(
            category,
            MatchRule::Preset,
            extension.to_ascii_lowercase(),
            file_name,
        )
    }

    fn finish(&self, category: Category, rule: MatchRule, extension: String, file_name: &str) -> Route {
        // Already stripped; pass no markers so the name is not stripped twice.
        let none: [&str; 0] = [];
        let destination = derive_path_with(category, &extension, file_name, self.naming, &none);
        tracing::debug!(
            file = file_name,
            %category,
            ?rule,
            destination = %destination,
            "routed"
        );
        Route {
            category,
            rule,
            extension,
            file_name: destination.file_name().to_string(),
            destination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_download_is_classified_by_real_extension() {
        let r = Router::new(FolderNaming::Local, vec![".part".to_string()]).route("", "movie.mp4.part");
        assert_eq!(r.file_name, "movie.mp4");
        assert_eq!(r.extension, "mp4");
        assert_eq!(r.category, Category::Video);
        assert_eq!(r.destination.to_string(), "Videos/mp4/movie.mp4");
    }

    #[test]
    fn crdownload_with_mime() {
        let r = Router::default().route("application/x-msdownload", "Setup.EXE.crdownload");
        assert_eq!(r.category, Category::Executable);
        assert_eq!(r.rule, MatchRule::Mime);
        assert_eq!(r.destination.to_string(), "Software/exe/Setup.EXE");
    }

    #[test]
    fn stripping_happens_once() {
        let r = Router::default().route("", "clip.part.part");
        assert_eq!(r.file_name, "clip.part");
        assert_eq!(r.category, Category::Other);
        assert_eq!(r.destination.to_string(), "Others/clip.part");
    }

    #[test]
    fn no_extension_uses_mime_then_other() {
        let r = Router::default().route("application/pdf", "invoice");
        assert_eq!(r.destination.to_string(), "Documents/invoice");
        let r = Router::default().route("", "invoice");
        assert_eq!(r.destination.to_string(), "Others/invoice");
        assert_eq!(r.rule, MatchRule::Fallback);
    }

    #[test]
    fn html_page() {
        let r = Router::default().route("text/html", "index.php");
        assert_eq!(r.category, Category::Web);
        assert_eq!(r.destination.to_string(), "Web/html/index.php");
    }

    #[test]
    fn directory_parts_never_reach_the_destination() {
        let r = Router::default().route("", "../../../evil.exe");
        assert_eq!(r.file_name, "evil.exe");
        assert_eq!(r.category, Category::Executable);
        assert_eq!(r.destination.to_string(), "Software/exe/evil.exe");
    }

    #[test]
    fn route_as_keeps_path_rules() {
        let r = Router::new(FolderNaming::Cloud, Vec::new()).route_as(Category::Document, "XLSX", "Budget");
        assert_eq!(r.destination.to_string(), "Documents/xlsx/Budget");
    }
}
