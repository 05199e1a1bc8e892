//! Destination path derivation.
//!
//! Maps a category, extension and filename to a relative path such as
//! `Videos/mp4/movie.mp4`. Joining onto a base directory and resolving name
//! collisions is left to the caller (see [`crate::place`]).

mod extension;
mod marker;
mod name;

pub use extension::extension_of;
pub use marker::{strip_in_progress_marker, DEFAULT_IN_PROGRESS_SUFFIXES};
pub use name::{file_segment, FALLBACK_FILE_NAME};

use crate::category::{Category, FolderNaming};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Subfolder placed between the category folder and the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subfolder {
    /// Named after the (lowercase) file extension.
    Extension,
    /// Same name for every file of the category.
    Fixed(&'static str),
    None,
}

/// Per-category subfolder rules.
pub const SUBFOLDER_POLICY: [(Category, Subfolder); 8] = [
    (Category::Executable, Subfolder::Extension),
    (Category::Archive, Subfolder::Extension),
    (Category::Web, Subfolder::Fixed("html")),
    (Category::Document, Subfolder::Extension),
    (Category::Video, Subfolder::Extension),
    (Category::Image, Subfolder::Extension),
    (Category::Music, Subfolder::Extension),
    (Category::Other, Subfolder::None),
];

pub fn subfolder_policy(category: Category) -> Subfolder {
    SUBFOLDER_POLICY
        .iter()
        .find(|(c, _)| *c == category)
        .map(|&(_, s)| s)
        .unwrap_or(Subfolder::None)
}

/// Relative destination: category folder, optional subfolder, filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DestinationPath {
    segments: Vec<String>,
}

impl DestinationPath {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment; always the (marker-stripped) filename.
    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Every segment except the filename.
    pub fn folders(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    pub fn to_relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Joins onto an explicit base location supplied by the caller.
    pub fn join_onto(&self, base: &Path) -> PathBuf {
        base.join(self.to_relative_path())
    }

    /// The folder part only, joined onto `base`.
    pub fn folder_onto(&self, base: &Path) -> PathBuf {
        let mut dir = base.to_path_buf();
        dir.extend(self.folders());
        dir
    }
}

impl fmt::Display for DestinationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Derives the local-layout destination, stripping the default in-progress markers.
///
/// `derive_path(Category::Video, "mp4", "movie.mp4.part")` gives `Videos/mp4/movie.mp4`.
pub fn derive_path(category: Category, extension: &str, filename: &str) -> DestinationPath {
    derive_path_with(
        category,
        extension,
        filename,
        FolderNaming::Local,
        DEFAULT_IN_PROGRESS_SUFFIXES,
    )
}

/// Derives a destination with explicit folder naming and marker list.
///
/// An extension-keyed category with an empty extension (e.g. classified by
/// MIME type alone) gets no subfolder rather than an empty path segment.
/// Only the last path component of `filename` is kept, so the result always
/// stays below whatever base it is joined onto.
pub fn derive_path_with<S: AsRef<str>>(
    category: Category,
    extension: &str,
    filename: &str,
    naming: FolderNaming,
    markers: &[S],
) -> DestinationPath {
    let name = file_segment(strip_in_progress_marker(filename, markers));
    let mut segments = vec![category.folder_name(naming).to_string()];

    match subfolder_policy(category) {
        Subfolder::Extension if !extension.is_empty() => {
            segments.push(extension.to_ascii_lowercase())
        }
        Subfolder::Fixed(dir) => segments.push(dir.to_string()),
        Subfolder::Extension | Subfolder::None => {}
    }

    segments.push(name.to_string());
    DestinationPath { segments }
}
