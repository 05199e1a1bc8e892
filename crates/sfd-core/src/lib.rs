//! SFD core: classify files by type and derive where they belong.
//!
//! [`classify()`] and [`derive_path`] are the pure core; [`route`], [`place`]
//! and [`organize`] are the download-hook and folder-organizer layers built on
//! top of them.

pub mod config;
pub mod logging;

pub mod category;
pub mod classify;
pub mod destination;
pub mod organize;
pub mod place;
pub mod retry;
pub mod route;
pub mod tables;

pub use category::{Category, FolderNaming};
pub use classify::{classify, classify_explained, MatchRule};
pub use destination::{derive_path, derive_path_with, DestinationPath};
pub use route::{Route, Router};
