//! Group files by destination folder before touching the store.

use super::entry::{route_entry, FileEntry};
use crate::category::Category;
use crate::route::{Route, Router};
use serde::Serialize;
use std::collections::BTreeMap;

/// One file and where it is going.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedMove {
    pub entry: FileEntry,
    pub route: Route,
}

/// All files sharing a destination folder (`Music/mp3`, `Others`, ...).
#[derive(Debug, Clone, Serialize)]
pub struct PlanGroup {
    pub category: Category,
    /// Folder names below the organized root, outermost first.
    pub folders: Vec<String>,
    pub moves: Vec<PlannedMove>,
}

/// Why a listed entry will not be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Folder,
    InProgress,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizePlan {
    /// Ordered by category, then subfolder name.
    pub groups: Vec<PlanGroup>,
    pub skipped: Vec<SkippedEntry>,
}

impl OrganizePlan {
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.moves.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build a plan for `files`.
///
/// Folders are left alone, and so are files still carrying one of the
/// router's in-progress markers: they are being written and will be handled
/// by the download hook once complete.
pub fn plan(files: Vec<FileEntry>, router: &Router) -> OrganizePlan {
    let mut grouped: BTreeMap<(Category, Vec<String>), Vec<PlannedMove>> = BTreeMap::new();
    let mut skipped = Vec::new();

    for entry in files {
        if entry.is_folder() {
            skipped.push(SkippedEntry {
                name: entry.name,
                reason: SkipReason::Folder,
            });
            continue;
        }
        if is_in_progress(&entry.name, router.markers()) {
            skipped.push(SkippedEntry {
                name: entry.name,
                reason: SkipReason::InProgress,
            });
            continue;
        }

        let route = route_entry(router, &entry);
        let key = (route.category, route.destination.folders().to_vec());
        grouped.entry(key).or_default().push(PlannedMove { entry, route });
    }

    let groups = grouped
        .into_iter()
        .map(|((category, folders), moves)| PlanGroup {
            category,
            folders,
            moves,
        })
        .collect();

    OrganizePlan { groups, skipped }
}

fn is_in_progress(name: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|m| !m.is_empty() && name.len() > m.len() && name.ends_with(m.as_str()))
}
