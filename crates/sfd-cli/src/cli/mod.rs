//! CLI for SFD.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use sfd_core::config;
use sfd_core::{Category, FolderNaming};
use std::path::PathBuf;

use commands::{run_classify, run_completions, run_man, run_organize, run_place, run_tables};

/// Top-level CLI for SFD.
#[derive(Debug, Parser)]
#[command(name = "sfd")]
#[command(about = "SFD: sort downloads and folders by file type", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the category and destination a file would get.
    Classify {
        /// File name (an in-progress suffix such as .crdownload is ignored).
        filename: String,
        /// MIME type reported by the server, if known.
        #[arg(long, default_value = "")]
        mime: String,
        /// Folder naming scheme (local or cloud); defaults to the config value.
        #[arg(long)]
        naming: Option<FolderNaming>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Move a finished download into <base>/<category>/<ext>/.
    Place {
        /// Path of the downloaded file.
        path: PathBuf,
        /// MIME type reported by the server, if known.
        #[arg(long, default_value = "")]
        mime: String,
        /// Base directory (overrides base_dir from config; default: current directory).
        #[arg(long, value_name = "DIR")]
        base: Option<PathBuf>,
        /// Only print where the file would go.
        #[arg(long)]
        dry_run: bool,
    },

    /// Sort the files of a directory into category folders.
    Organize {
        /// Directory to organize in place.
        dir: PathBuf,
        /// Folder naming scheme (local or cloud); defaults to the config value.
        #[arg(long)]
        naming: Option<FolderNaming>,
        /// Only print the plan.
        #[arg(long)]
        dry_run: bool,
        /// Print the plan or report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the extension and MIME tables.
    Tables {
        /// Only show entries for this category.
        #[arg(long)]
        category: Option<Category>,
    },

    /// Generate shell completions.
    Completions {
        shell: Shell,
    },

    /// Print a man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(Cli::command(), shell),
            CliCommand::Man => return run_man(Cli::command()),
            CliCommand::Tables { category } => return run_tables(category),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify {
                filename,
                mime,
                naming,
                json,
            } => run_classify(&cfg, &filename, &mime, naming, json)?,
            CliCommand::Place {
                path,
                mime,
                base,
                dry_run,
            } => run_place(&cfg, &path, &mime, base.as_deref(), dry_run)?,
            CliCommand::Organize {
                dir,
                naming,
                dry_run,
                json,
            } => run_organize(&cfg, &dir, naming, dry_run, json)?,
            CliCommand::Tables { .. } | CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
