//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Platter - Terminal dashboard for a restaurant's menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the REST backend (overrides the config file)
    #[arg(long, env = "PLATTER_API_URL")]
    pub api_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the current menu to stdout without entering the TUI
    List,
}
