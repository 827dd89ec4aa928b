//! # CLI Argument Definitions

use crate::models::action::Action;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "licsel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Pick a license for course content and check which options combine")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); `CSTUDIO__*` variables override it
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// License catalog JSON to use instead of the configured or built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Show the detailed license preview
    #[arg(long, global = true)]
    pub preview: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List license types and their options
    Catalog {},
    /// Run selector actions in order and show the resulting license
    Apply {
        /// `type=<id>`, `toggle=<option>` or `set=<option>:<value>`
        #[arg(required = true, value_name = "ACTION")]
        actions: Vec<Action>,
    },
    /// Parse a license string and show it as the selector would
    Parse {
        /// License notation, e.g. "creative-commons: BY NC ND ver=4.0"
        text: String,
    },
}
