//! CLI commands using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::persistence::DEFAULT_STORE_FILE;

/// gifcat - GIF catalog
///
/// Scans folder trees for GIF files and keeps their version, canvas size,
/// color table size, frame count and comments in a JSON catalog.
#[derive(Parser)]
#[command(name = "gifcat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Catalog GIF files and their metadata", long_about = None)]
pub struct Cli {
    /// Catalog file
    #[arg(short, long, global = true, env = "GIFCAT_STORE", default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a folder tree and add its GIF files to the catalog
    Scan {
        /// Folder to scan
        folder: PathBuf,

        /// Scan one file at a time
        #[arg(long)]
        sequential: bool,

        /// Deepest folder level to descend into
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List cataloged files grouped by folder
    List,

    /// Show the stored fields of one file
    Show {
        /// Path as stored in the catalog
        path: String,
    },

    /// Find files whose path or any field contains the query
    Search {
        query: String,
    },

    /// Change one stored field
    Set {
        /// Path as stored in the catalog
        path: String,

        /// Field key (version, width, height, color_count, compression,
        /// number_format, background_color, image_count, creation_date,
        /// modified_date, comments)
        field: String,

        value: String,
    },
}

impl Cli {
    /// Default tracing filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_set_command() {
        let cli = Cli::try_parse_from([
            "gifcat", "--store", "c.json", "set", "a/b.gif", "comments", "hello",
        ])
        .unwrap();
        assert_eq!(cli.store, PathBuf::from("c.json"));
        match cli.command {
            Commands::Set { path, field, value } => {
                assert_eq!(path, "a/b.gif");
                assert_eq!(field, "comments");
                assert_eq!(value, "hello");
            }
            _ => panic!("expected set"),
        }
    }

    #[test]
    fn verbosity_picks_level() {
        let cli = Cli::try_parse_from(["gifcat", "-d", "list"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
    }
}
