//! Retry and backoff for folder-store operations.
//!
//! Folder stores (local disk, a cloud drive behind some client) can fail
//! transiently; the organizer retries those with exponential backoff and
//! gives up immediately on permanent errors.

mod policy;
mod run;

pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, Retryable};
