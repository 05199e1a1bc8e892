//! Folder organizer.
//!
//! Sorts the files of one folder into category/extension subfolders, the way
//! the download hook would have placed them. Works against any
//! [`FolderStore`]; [`LocalFolderStore`] is the on-disk implementation and a
//! cloud drive client can provide its own.
//!
//! The pass is plan-then-execute: [`plan`] is pure and groups files by
//! destination folder, [`organize`] resolves each folder once and moves files,
//! collecting per-file failures instead of aborting.

mod entry;
mod error;
mod local;
mod plan;
mod run;
mod store;

pub use entry::{route_entry, workspace_extension, FileEntry, FOLDER_MIME};
pub use error::{StoreError, StoreErrorKind};
pub use local::LocalFolderStore;
pub use plan::{plan, OrganizePlan, PlanGroup, PlannedMove, SkipReason, SkippedEntry};
pub use run::{organize, FailedFile, MovedFile, OrganizeEvent, OrganizeReport, SkippedFile};
pub use store::FolderStore;
