//! Apply a derived destination on the local filesystem.
//!
//! This is the download-hook side: given a finished file and its route, move
//! it under an explicit base directory, creating folders and resolving name
//! collisions according to the configured [`ConflictPolicy`].

use crate::config::ConflictPolicy;
use crate::destination::DestinationPath;
use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of placing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// File now lives at this path.
    Moved(PathBuf),
    /// Destination existed and the policy was Skip.
    Skipped { existing: PathBuf },
}

/// Upper bound on ` (n)` suffixes tried before giving up.
const MAX_UNIQUIFY: u32 = 10_000;

/// Returns `path` if free, otherwise the first free `stem (n).ext` sibling.
///
/// `.bashrc` and `README` keep the whole name as stem. Works on the raw
/// file name, so names that are not valid UTF-8 are preserved.
pub fn uniquify_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }
    let stem = path.file_stem().unwrap_or_default();

    for n in 1..=MAX_UNIQUIFY {
        let mut name = stem.to_os_string();
        name.push(format!(" ({n})"));
        if let Some(ext) = path.extension() {
            name.push(".");
            name.push(ext);
        }
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    anyhow::bail!("no free name for {} after {} attempts", path.display(), MAX_UNIQUIFY)
}

/// Where `src` lands under `base`.
///
/// Folders come from `destination`. The file name does too, unless the
/// source name is not valid UTF-8: then its own bytes are kept, minus the
/// suffix routing stripped from the lossy form.
pub fn target_path(src: &Path, base: &Path, destination: &DestinationPath) -> PathBuf {
    let dir = destination.folder_onto(base);
    match src.file_name() {
        Some(raw) if raw.to_str().is_none() => dir.join(raw_target_name(raw, destination.file_name())),
        _ => dir.join(destination.file_name()),
    }
}

#[cfg(unix)]
fn raw_target_name(raw: &OsStr, routed: &str) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let lossy = raw.to_string_lossy();
    if !lossy.starts_with(routed) {
        return raw.to_os_string();
    }
    let stripped = lossy.len() - routed.len();
    let bytes = raw.as_bytes();
    OsString::from_vec(bytes[..bytes.len().saturating_sub(stripped)].to_vec())
}

#[cfg(not(unix))]
fn raw_target_name(_raw: &OsStr, routed: &str) -> OsString {
    OsString::from(routed)
}

/// Move `src` to `base/<destination>`.
pub fn place_file(
    src: &Path,
    base: &Path,
    destination: &DestinationPath,
    conflict: ConflictPolicy,
) -> Result<Placement> {
    let target = target_path(src, base, destination);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let target = match conflict {
        ConflictPolicy::Uniquify => uniquify_path(&target)?,
        ConflictPolicy::Overwrite => target,
        ConflictPolicy::Skip if target.exists() => {
            tracing::info!(src = %src.display(), "destination exists, skipping: {}", target.display());
            return Ok(Placement::Skipped { existing: target });
        }
        ConflictPolicy::Skip => target,
    };

    move_file(src, &target)
        .with_context(|| format!("move {} -> {}", src.display(), target.display()))?;
    tracing::info!("placed {} at {}", src.display(), target.display());
    Ok(Placement::Moved(target))
}

/// Rename, falling back to copy + remove when crossing filesystems.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            fs::copy(src, dst)?;
            fs::remove_file(src)
        }
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error() == Some(libc::EXDEV)
}

#[cfg(not(unix))]
fn is_cross_device(_e: &io::Error) -> bool {
    false
}
