//! `sfd place <path>` – move a finished download under the base directory.

use anyhow::{Context, Result};
use sfd_core::config::SfdConfig;
use sfd_core::place::{place_file, target_path, Placement};
use sfd_core::{FolderNaming, Router};
use std::path::Path;

pub fn run_place(
    cfg: &SfdConfig,
    path: &Path,
    mime: &str,
    base: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    // Routing works on the lossy name; the raw name is kept on disk.
    let filename = path
        .file_name()
        .with_context(|| format!("not a file path: {}", path.display()))?
        .to_string_lossy();
    let base = cfg.resolve_base_dir(base)?;

    // Downloads always use the local folder layout.
    let router = Router::new(FolderNaming::Local, cfg.in_progress_suffixes.clone());
    let route = router.route(mime, &filename);
    let target = target_path(path, &base, &route.destination);

    if dry_run {
        println!("{} -> {} ({})", path.display(), target.display(), route.category);
        return Ok(());
    }

    match place_file(path, &base, &route.destination, cfg.conflict)? {
        Placement::Moved(to) => println!("Moved {} -> {}", path.display(), to.display()),
        Placement::Skipped { existing } => {
            println!("Skipped {}: {} already exists", path.display(), existing.display())
        }
    }
    Ok(())
}
