//! `sfd organize <dir>` – sort a directory's files into category folders.

use anyhow::{Context, Result};
use sfd_core::config::SfdConfig;
use sfd_core::organize::{self, LocalFolderStore, OrganizeEvent, OrganizePlan, SkipReason};
use sfd_core::retry::RetryPolicy;
use sfd_core::{FolderNaming, Router};
use std::path::Path;

pub fn run_organize(
    cfg: &SfdConfig,
    dir: &Path,
    naming: Option<FolderNaming>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let files = LocalFolderStore::list_files(dir)
        .with_context(|| format!("list files in {}", dir.display()))?;
    let router = Router::new(naming.unwrap_or(cfg.naming), cfg.in_progress_suffixes.clone());
    let plan = organize::plan(files, &router);

    if plan.is_empty() || dry_run {
        if json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }
        if plan.is_empty() {
            println!("No files to organize in {}", dir.display());
        }
        for line in plan_lines(&plan) {
            println!("{line}");
        }
        return Ok(());
    }

    let policy = cfg
        .retry
        .as_ref()
        .map(RetryPolicy::from)
        .unwrap_or_default();
    let mut store = LocalFolderStore::new(cfg.conflict);
    let root = dir.to_string_lossy();
    let report = organize::organize(&mut store, &root, &plan, &policy, &mut |event| {
        if !json {
            print_event(event);
        }
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Organized {} file(s) into {} new folder(s); {} skipped, {} failed",
            report.moved.len(),
            report.folders_created,
            report.skipped.len(),
            report.failed.len()
        );
    }
    Ok(())
}

/// Human-readable plan: each destination folder with its files, then every
/// entry that will be left alone.
pub(crate) fn plan_lines(plan: &OrganizePlan) -> Vec<String> {
    let mut lines = Vec::new();
    for group in &plan.groups {
        lines.push(format!("{}/ ({} file(s))", group.folders.join("/"), group.moves.len()));
        for m in &group.moves {
            lines.push(format!("  {}", m.entry.name));
        }
    }
    for s in &plan.skipped {
        let reason = match s.reason {
            SkipReason::Folder => "folder",
            SkipReason::InProgress => "still downloading",
        };
        lines.push(format!("skip {} ({reason})", s.name));
    }
    lines
}

fn print_event(event: &OrganizeEvent) {
    match event {
        OrganizeEvent::GroupStarted { folder, files } => {
            println!("Processing {folder} ({files} file(s))...")
        }
        OrganizeEvent::FolderCreated { folder } => println!("  created {folder}/"),
        OrganizeEvent::Moved { name, .. } => println!("  moved {name}"),
        OrganizeEvent::Skipped { name, folder } => {
            println!("  skipped {name}: {folder}/{name} already exists")
        }
        OrganizeEvent::Failed { name, error } => eprintln!("  error moving {name}: {error}"),
    }
}
