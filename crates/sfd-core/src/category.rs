//! File-type categories and their renderings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic bucket a file is routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Document,
    Video,
    Music,
    Archive,
    Executable,
    Web,
    Other,
}

/// How category folders are named on disk or in cloud storage.
///
/// Downloads have always landed in `Pictures/`, while the cloud organizer
/// historically used `Images/`; everything else is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderNaming {
    #[default]
    Local,
    Cloud,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Image,
        Category::Document,
        Category::Video,
        Category::Music,
        Category::Archive,
        Category::Executable,
        Category::Web,
        Category::Other,
    ];

    /// Lowercase singular label (`image`, `document`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Image => "image",
            Category::Document => "document",
            Category::Video => "video",
            Category::Music => "music",
            Category::Archive => "archive",
            Category::Executable => "executable",
            Category::Web => "web",
            Category::Other => "other",
        }
    }

    /// Top-level folder name for this category under the given naming scheme.
    pub fn folder_name(self, naming: FolderNaming) -> &'static str {
        match (self, naming) {
            (Category::Image, FolderNaming::Local) => "Pictures",
            (Category::Image, FolderNaming::Cloud) => "Images",
            (Category::Document, _) => "Documents",
            (Category::Video, _) => "Videos",
            (Category::Music, _) => "Music",
            (Category::Archive, _) => "Archives",
            (Category::Executable, _) => "Software",
            (Category::Web, _) => "Web",
            (Category::Other, _) => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the lowercase label or either folder name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(wanted)
                    || c.folder_name(FolderNaming::Local).eq_ignore_ascii_case(wanted)
                    || c.folder_name(FolderNaming::Cloud).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl FromStr for FolderNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(FolderNaming::Local),
            "cloud" => Ok(FolderNaming::Cloud),
            other => Err(format!("unknown folder naming: {other} (expected local or cloud)")),
        }
    }
}
