//! The seam between the organizer and whatever holds the files.

use super::entry::FileEntry;
use super::error::StoreError;

/// Folder operations the organizer needs. Folder identifiers are opaque
/// strings: paths for the local store, object ids for a cloud drive.
pub trait FolderStore {
    /// Look up a direct child folder of `parent` by exact name.
    fn find_folder(&mut self, name: &str, parent: &str) -> Result<Option<String>, StoreError>;

    /// Create a child folder and return its identifier.
    fn create_folder(&mut self, name: &str, parent: &str) -> Result<String, StoreError>;

    /// Move `file` out of its current parent into `folder`, keeping its name.
    fn move_file(&mut self, file: &FileEntry, folder: &str) -> Result<(), StoreError>;
}
