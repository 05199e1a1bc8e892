//! CLI command handlers. Each command is in its own file.

mod classify;
mod generate;
mod organize;
mod place;
mod tables;

pub use classify::run_classify;
pub use generate::{run_completions, run_man};
pub use organize::run_organize;
#[cfg(test)]
pub(crate) use organize::plan_lines;
pub use place::run_place;
pub use tables::run_tables;
