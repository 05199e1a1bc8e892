//! Errors reported by folder stores.

use crate::retry::{ErrorKind, Retryable};
use std::io;

/// Broad reason a store operation failed; drives retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    NotFound,
    /// Target name already taken and the store will not replace it.
    Conflict,
    PermissionDenied,
    Timeout,
    Throttled,
    Unavailable,
    Other,
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
    #[source]
    pub source: Option<io::Error>,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an I/O error, keeping `context` as the message.
    pub fn io(context: impl Into<String>, err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => StoreErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => StoreErrorKind::Conflict,
            io::ErrorKind::PermissionDenied => StoreErrorKind::PermissionDenied,
            io::ErrorKind::TimedOut => StoreErrorKind::Timeout,
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock => StoreErrorKind::Unavailable,
            _ => StoreErrorKind::Other,
        };
        Self {
            kind,
            message: format!("{}: {}", context.into(), err),
            source: Some(err),
        }
    }
}

impl Retryable for StoreError {
    fn retry_kind(&self) -> ErrorKind {
        match self.kind {
            StoreErrorKind::Timeout => ErrorKind::Timeout,
            StoreErrorKind::Throttled => ErrorKind::Throttled,
            StoreErrorKind::Unavailable => ErrorKind::Unavailable,
            StoreErrorKind::NotFound
            | StoreErrorKind::Conflict
            | StoreErrorKind::PermissionDenied
            | StoreErrorKind::Other => ErrorKind::Permanent,
        }
    }
}
