//! `sfd classify <filename>` – show category and destination.

use anyhow::Result;
use sfd_core::config::SfdConfig;
use sfd_core::{FolderNaming, Router};

pub fn run_classify(
    cfg: &SfdConfig,
    filename: &str,
    mime: &str,
    naming: Option<FolderNaming>,
    json: bool,
) -> Result<()> {
    let router = Router::new(naming.unwrap_or(cfg.naming), cfg.in_progress_suffixes.clone());
    let route = router.route(mime, filename);

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    println!("{:<12} {}", "category:", route.category);
    println!("{:<12} {:?}", "rule:", route.rule);
    println!(
        "{:<12} {}",
        "extension:",
        if route.extension.is_empty() { "-" } else { route.extension.as_str() }
    );
    println!("{:<12} {}", "file name:", route.file_name);
    println!("{:<12} {}", "destination:", route.destination);
    Ok(())
}
