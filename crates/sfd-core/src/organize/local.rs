//! [`FolderStore`] backed by a directory on the local filesystem.

use super::entry::FileEntry;
use super::error::{StoreError, StoreErrorKind};
use super::store::FolderStore;
use crate::config::ConflictPolicy;
use crate::place::{move_file, uniquify_path};
use std::fs;
use std::path::{Path, PathBuf};

/// Local store: folder identifiers are absolute-or-relative path strings.
#[derive(Debug, Clone)]
pub struct LocalFolderStore {
    conflict: ConflictPolicy,
}

impl LocalFolderStore {
    pub fn new(conflict: ConflictPolicy) -> Self {
        Self { conflict }
    }

    /// Regular files directly inside `dir`, sorted by name. The MIME type is
    /// left empty; local files are classified by extension. `name` is the
    /// lossy UTF-8 form used for routing; `path` keeps the real name.
    pub fn list_files(dir: &Path) -> Result<Vec<FileEntry>, StoreError> {
        let read = fs::read_dir(dir).map_err(|e| StoreError::io(format!("list {}", dir.display()), e))?;
        let mut files = Vec::new();
        for item in read {
            let item = item.map_err(|e| StoreError::io(format!("list {}", dir.display()), e))?;
            let file_type = item
                .file_type()
                .map_err(|e| StoreError::io(format!("stat {}", item.path().display()), e))?;
            if !file_type.is_file() {
                continue;
            }
            let path = item.path();
            files.push(FileEntry {
                id: path_id(&path),
                name: item.file_name().to_string_lossy().into_owned(),
                mime_type: String::new(),
                parent: path_id(dir),
                path: Some(path),
            });
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}

impl Default for LocalFolderStore {
    fn default() -> Self {
        Self::new(ConflictPolicy::Uniquify)
    }
}

fn path_id(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

impl FolderStore for LocalFolderStore {
    fn find_folder(&mut self, name: &str, parent: &str) -> Result<Option<String>, StoreError> {
        let candidate = Path::new(parent).join(name);
        Ok(candidate.is_dir().then(|| path_id(&candidate)))
    }

    fn create_folder(&mut self, name: &str, parent: &str) -> Result<String, StoreError> {
        let dir = Path::new(parent).join(name);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(format!("create {}", dir.display()), e))?;
        Ok(path_id(&dir))
    }

    /// With [`ConflictPolicy::Skip`], an existing target is reported as
    /// [`StoreErrorKind::Conflict`], which the organizer records as a skip.
    fn move_file(&mut self, file: &FileEntry, folder: &str) -> Result<(), StoreError> {
        let src = file.path.clone().unwrap_or_else(|| PathBuf::from(&file.id));
        let target = match src.file_name() {
            Some(raw) => Path::new(folder).join(raw),
            None => Path::new(folder).join(&file.name),
        };
        let target = match self.conflict {
            ConflictPolicy::Uniquify => uniquify_path(&target)
                .map_err(|e| StoreError::new(StoreErrorKind::Other, e.to_string()))?,
            ConflictPolicy::Overwrite => target,
            ConflictPolicy::Skip if target.exists() => {
                return Err(StoreError::new(
                    StoreErrorKind::Conflict,
                    format!("{} already exists", target.display()),
                ));
            }
            ConflictPolicy::Skip => target,
        };
        move_file(&src, &target)
            .map_err(|e| StoreError::io(format!("move {} -> {}", src.display(), target.display()), e))
    }
}
