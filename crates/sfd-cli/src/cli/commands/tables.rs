//! `sfd tables` – print the lookup tables.

use anyhow::Result;
use sfd_core::tables::{EXTENSION_TABLE, MIME_TABLE};
use sfd_core::Category;

pub fn run_tables(only: Option<Category>) -> Result<()> {
    let wanted = |c: &Category| only.map_or(true, |o| o == *c);

    println!("{:<12} {}", "EXTENSION", "CATEGORY");
    for (ext, category) in EXTENSION_TABLE.iter().filter(|(_, c)| wanted(c)) {
        println!("{:<12} {}", ext, category);
    }
    println!();
    println!("{:<72} {}", "MIME TYPE", "CATEGORY");
    for (mime, category) in MIME_TABLE.iter().filter(|(_, c)| wanted(c)) {
        println!("{:<72} {}", mime, category);
    }
    Ok(())
}
