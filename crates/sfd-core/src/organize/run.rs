//! Execute an [`OrganizePlan`] against a [`FolderStore`].

use super::error::{StoreError, StoreErrorKind};
use super::plan::{OrganizePlan, PlanGroup};
use super::store::FolderStore;
use crate::retry::{run_with_retry, RetryPolicy};
use serde::Serialize;
use std::collections::HashMap;

/// Progress notifications, in the order things happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganizeEvent {
    GroupStarted { folder: String, files: usize },
    FolderCreated { folder: String },
    Moved { name: String, folder: String },
    /// The store kept an existing file of the same name in place.
    Skipped { name: String, folder: String },
    Failed { name: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovedFile {
    pub name: String,
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub name: String,
    pub folder: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub name: String,
    pub folder: String,
    pub error: String,
}

/// Per-file outcome of an organize pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizeReport {
    pub moved: Vec<MovedFile>,
    /// Left in place because the destination name was taken.
    pub skipped: Vec<SkippedFile>,
    pub failed: Vec<FailedFile>,
    pub folders_created: usize,
}

impl OrganizeReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Move every planned file into its folder under `root`.
///
/// Each folder is resolved (found or created) once. A folder that cannot be
/// resolved fails only the files of that group; a failed move fails only that
/// file. A [`StoreErrorKind::Conflict`] (destination taken, store will not
/// replace it) is recorded as a skip, not a failure. Transient store errors
/// are retried according to `policy`.
pub fn organize<S: FolderStore + ?Sized>(
    store: &mut S,
    root: &str,
    plan: &OrganizePlan,
    policy: &RetryPolicy,
    on_event: &mut dyn FnMut(&OrganizeEvent),
) -> OrganizeReport {
    let mut report = OrganizeReport::default();
    let mut resolved: HashMap<Vec<String>, String> = HashMap::new();

    for group in &plan.groups {
        let folder_label = group.folders.join("/");
        on_event(&OrganizeEvent::GroupStarted {
            folder: folder_label.clone(),
            files: group.moves.len(),
        });

        let folder_id = match resolve_folders(store, root, group, policy, &mut resolved, &mut report, on_event) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(folder = %folder_label, "could not resolve folder: {}", e);
                fail_group(group, &folder_label, &e, &mut report, on_event);
                continue;
            }
        };

        for planned in &group.moves {
            let name = planned.entry.name.clone();
            match run_with_retry(policy, || store.move_file(&planned.entry, &folder_id)) {
                Ok(()) => {
                    tracing::info!("moved {} to {}", name, folder_label);
                    on_event(&OrganizeEvent::Moved {
                        name: name.clone(),
                        folder: folder_label.clone(),
                    });
                    report.moved.push(MovedFile {
                        name,
                        folder: folder_label.clone(),
                    });
                }
                Err(e) if e.kind == StoreErrorKind::Conflict => {
                    tracing::info!("skipped {}: {}", name, e);
                    on_event(&OrganizeEvent::Skipped {
                        name: name.clone(),
                        folder: folder_label.clone(),
                    });
                    report.skipped.push(SkippedFile {
                        name,
                        folder: folder_label.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!("error moving {}: {}", name, e);
                    on_event(&OrganizeEvent::Failed {
                        name: name.clone(),
                        error: e.to_string(),
                    });
                    report.failed.push(FailedFile {
                        name,
                        folder: folder_label.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    report
}

/// Walk `group.folders` from `root`, finding or creating each level.
fn resolve_folders<S: FolderStore + ?Sized>(
    store: &mut S,
    root: &str,
    group: &PlanGroup,
    policy: &RetryPolicy,
    resolved: &mut HashMap<Vec<String>, String>,
    report: &mut OrganizeReport,
    on_event: &mut dyn FnMut(&OrganizeEvent),
) -> Result<String, StoreError> {
    let mut parent = root.to_string();
    for depth in 1..=group.folders.len() {
        let key = group.folders[..depth].to_vec();
        if let Some(id) = resolved.get(&key) {
            parent = id.clone();
            continue;
        }

        let name = &group.folders[depth - 1];
        let id = match run_with_retry(policy, || store.find_folder(name, &parent))? {
            Some(id) => {
                tracing::debug!("found existing folder {}", key.join("/"));
                id
            }
            None => {
                let id = run_with_retry(policy, || store.create_folder(name, &parent))?;
                tracing::info!("created folder {}", key.join("/"));
                report.folders_created += 1;
                on_event(&OrganizeEvent::FolderCreated {
                    folder: key.join("/"),
                });
                id
            }
        };
        resolved.insert(key, id.clone());
        parent = id;
    }
    Ok(parent)
}

fn fail_group(
    group: &PlanGroup,
    folder: &str,
    error: &StoreError,
    report: &mut OrganizeReport,
    on_event: &mut dyn FnMut(&OrganizeEvent),
) {
    for planned in &group.moves {
        let error = format!("folder {folder}: {error}");
        on_event(&OrganizeEvent::Failed {
            name: planned.entry.name.clone(),
            error: error.clone(),
        });
        report.failed.push(FailedFile {
            name: planned.entry.name.clone(),
            folder: folder.to_string(),
            error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FolderNaming;
    use crate::organize::entry::FileEntry;
    use crate::organize::error::StoreErrorKind;
    use crate::organize::plan::plan;
    use crate::route::Router;
    use std::collections::{HashMap, HashSet};
    use std::time::Duration;

    /// In-memory drive: folders keyed by (parent, name), files by id.
    #[derive(Default)]
    struct MemoryDrive {
        folders: HashMap<(String, String), String>,
        parents: HashMap<String, String>,
        next_id: u32,
        find_calls: usize,
        fail_moves: HashSet<String>,
        taken: HashSet<String>,
        flaky_moves: HashMap<String, u32>,
        deny_create: HashSet<String>,
    }

    impl FolderStore for MemoryDrive {
        fn find_folder(&mut self, name: &str, parent: &str) -> Result<Option<String>, StoreError> {
            self.find_calls += 1;
            Ok(self.folders.get(&(parent.to_string(), name.to_string())).cloned())
        }

        fn create_folder(&mut self, name: &str, parent: &str) -> Result<String, StoreError> {
            if self.deny_create.contains(name) {
                return Err(StoreError::new(StoreErrorKind::PermissionDenied, "forbidden"));
            }
            self.next_id += 1;
            let id = format!("f{}", self.next_id);
            self.folders.insert((parent.to_string(), name.to_string()), id.clone());
            Ok(id)
        }

        fn move_file(&mut self, file: &FileEntry, folder: &str) -> Result<(), StoreError> {
            if self.fail_moves.contains(&file.name) {
                return Err(StoreError::new(StoreErrorKind::Other, "move rejected"));
            }
            if self.taken.contains(&file.name) {
                return Err(StoreError::new(StoreErrorKind::Conflict, "name already taken"));
            }
            if let Some(left) = self.flaky_moves.get_mut(&file.name) {
                if *left > 0 {
                    *left -= 1;
                    return Err(StoreError::new(StoreErrorKind::Throttled, "slow down"));
                }
            }
            self.parents.insert(file.id.clone(), folder.to_string());
            Ok(())
        }
    }

    fn entry(name: &str, mime: &str) -> FileEntry {
        FileEntry {
            id: format!("id:{name}"),
            name: name.to_string(),
            mime_type: mime.to_string(),
            parent: "root".to_string(),
            path: None,
        }
    }

    fn fast() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1),
        }
    }

    fn cloud_router() -> Router {
        Router::new(FolderNaming::Cloud, Vec::new())
    }

    #[test]
    fn moves_files_and_creates_each_folder_once() {
        let files = vec![
            entry("a.mp3", "audio/mpeg"),
            entry("b.mp3", ""),
            entry("c.flac", ""),
            entry("notes", ""),
        ];
        let plan = plan(files, &cloud_router());
        let mut drive = MemoryDrive::default();
        let mut events = Vec::new();
        let report = organize(&mut drive, "root", &plan, &fast(), &mut |e| events.push(e.clone()));

        assert!(report.is_clean());
        assert_eq!(report.moved.len(), 4);
        // Music, Music/mp3, Music/flac, Others
        assert_eq!(report.folders_created, 4);
        let music = drive.folders[&("root".to_string(), "Music".to_string())].clone();
        let mp3 = drive.folders[&(music.clone(), "mp3".to_string())].clone();
        assert_eq!(drive.parents["id:a.mp3"], mp3);
        assert_eq!(drive.parents["id:b.mp3"], mp3);
        let others = drive.folders[&("root".to_string(), "Others".to_string())].clone();
        assert_eq!(drive.parents["id:notes"], others);
        assert!(events.contains(&OrganizeEvent::FolderCreated {
            folder: "Music/flac".to_string()
        }));
    }

    #[test]
    fn existing_folders_are_reused() {
        let mut drive = MemoryDrive::default();
        drive
            .folders
            .insert(("root".to_string(), "Documents".to_string()), "docs".to_string());
        let plan = plan(vec![entry("r.pdf", "application/pdf")], &cloud_router());
        let report = organize(&mut drive, "root", &plan, &fast(), &mut |_| {});
        assert_eq!(report.folders_created, 1);
        assert!(drive.folders.contains_key(&("docs".to_string(), "pdf".to_string())));
    }

    #[test]
    fn one_failed_move_does_not_stop_the_batch() {
        let mut drive = MemoryDrive::default();
        drive.fail_moves.insert("bad.zip".to_string());
        let files = vec![entry("bad.zip", ""), entry("good.zip", ""), entry("x.exe", "")];
        let plan = plan(files, &cloud_router());
        let report = organize(&mut drive, "root", &plan, &fast(), &mut |_| {});
        assert_eq!(report.moved.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "bad.zip");
        assert_eq!(report.failed[0].folder, "Archives/zip");
        assert!(drive.parents.contains_key("id:good.zip"));
    }

    #[test]
    fn taken_names_are_skipped_not_failed() {
        let mut drive = MemoryDrive::default();
        drive.taken.insert("dup.pdf".to_string());
        let files = vec![entry("dup.pdf", ""), entry("new.pdf", "")];
        let plan = plan(files, &cloud_router());
        let mut events = Vec::new();
        let report = organize(&mut drive, "root", &plan, &fast(), &mut |e| events.push(e.clone()));

        assert!(report.is_clean());
        assert_eq!(report.moved.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "dup.pdf");
        assert_eq!(report.skipped[0].folder, "Documents/pdf");
        assert!(events.contains(&OrganizeEvent::Skipped {
            name: "dup.pdf".to_string(),
            folder: "Documents/pdf".to_string(),
        }));
    }

    #[test]
    fn throttled_moves_are_retried() {
        let mut drive = MemoryDrive::default();
        drive.flaky_moves.insert("clip.mp4".to_string(), 2);
        let plan = plan(vec![entry("clip.mp4", "")], &cloud_router());
        let report = organize(&mut drive, "root", &plan, &fast(), &mut |_| {});
        assert!(report.is_clean());
        assert_eq!(report.moved[0].folder, "Videos/mp4");
    }

    #[test]
    fn unresolvable_folder_fails_only_its_group() {
        let mut drive = MemoryDrive::default();
        drive.deny_create.insert("Software".to_string());
        let files = vec![entry("setup.exe", ""), entry("tool.msi", ""), entry("pic.png", "")];
        let plan = plan(files, &cloud_router());
        let report = organize(&mut drive, "root", &plan, &fast(), &mut |_| {});
        assert_eq!(report.moved.len(), 1);
        assert_eq!(report.failed.len(), 2);
        assert!(report.failed.iter().all(|f| f.error.contains("forbidden")));
    }

    #[test]
    fn resolved_folders_are_cached() {
        let mut drive = MemoryDrive::default();
        let files = vec![entry("a.mp3", ""), entry("b.flac", ""), entry("c.wav", "")];
        let plan = plan(files, &cloud_router());
        organize(&mut drive, "root", &plan, &fast(), &mut |_| {});
        // Music looked up once, then one lookup per subfolder.
        assert_eq!(drive.find_calls, 4);
    }
}
