//! CLI module

mod commands;
mod output;
mod progress;

pub use commands::{Cli, Commands};
pub use output::{print_entry, print_failures, print_tree};
pub use progress::ProgressReporter;
