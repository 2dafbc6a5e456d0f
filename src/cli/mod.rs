//! Command-line interface.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wild Séries - TV series catalogue
#[derive(Parser)]
#[command(name = "wildseries")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Fill the catalogue with generated sample data
    #[command(alias = "seed")]
    Fixtures {
        /// Seed for the random generator; overrides the config file
        #[arg(long)]
        seed: Option<u64>,

        /// Keep the existing rows instead of purging the catalogue first
        #[arg(long)]
        append: bool,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
