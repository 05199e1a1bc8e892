//! Files as seen by a folder store, and how they are routed.

use crate::category::Category;
use crate::route::{Route, Router};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix shared by cloud-native (non-binary) workspace documents.
const WORKSPACE_PREFIX: &str = "application/vnd.google-apps.";
pub const FOLDER_MIME: &str = "application/vnd.google-apps.folder";

/// One file inside the folder being organized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Store-specific identifier (a path for local stores).
    pub id: String,
    pub name: String,
    /// MIME type as reported by the store; empty when unknown.
    #[serde(default)]
    pub mime_type: String,
    /// Identifier of the folder currently holding the file.
    pub parent: String,
    /// On-disk location, set by local stores. Unlike `id` and `name` it is
    /// not lossily converted, so names that are not valid UTF-8 survive.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl FileEntry {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME
    }
}

/// Synthetic extension for a cloud-native document MIME type.
///
/// These files have no real extension, so they are filed as Documents under
/// a subfolder named after their closest desktop format.
pub fn workspace_extension(mime: &str) -> Option<&'static str> {
    let kind = mime.strip_prefix(WORKSPACE_PREFIX)?;
    Some(match kind {
        "document" => "doc",
        "spreadsheet" => "xlsx",
        "presentation" => "ppt",
        _ => "gdoc",
    })
}

/// Route a store entry: workspace documents get their synthetic extension,
/// everything else goes through normal classification.
pub fn route_entry(router: &Router, entry: &FileEntry) -> Route {
    match workspace_extension(&entry.mime_type) {
        Some(ext) => router.route_as(Category::Document, ext, &entry.name),
        None => router.route(&entry.mime_type, &entry.name),
    }
}
