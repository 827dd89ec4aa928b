#![allow(clippy::print_stderr)]

mod handlers;
mod models;
mod render;

use crate::handlers::{apply, catalog, parse};
use crate::models::args::{AppCommands, Cli};
use anyhow::{Context, Result};
use clap::Parser;
use cstudio_kernel::config::load_config;
use cstudio_kernel::domain::SelectorConfig;
use cstudio_licensing::LicenseSelector;
use cstudio_licensing::catalog::{load_catalog, standard_catalog};
use cstudio_logger::Logger;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config: SelectorConfig = load_config(cli.config.as_deref())?;
    let _logger = Logger::from_config(env!("CARGO_BIN_NAME"), &config.log)?;

    let mut selector = build_selector(&cli, &config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        AppCommands::Catalog {} => catalog::list_catalog(selector.catalog(), &mut out)?,
        AppCommands::Apply { actions } => apply::apply_actions(&mut selector, &actions, &mut out)?,
        AppCommands::Parse { text } => parse::parse_notation(&mut selector, &text, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn build_selector(cli: &Cli, config: &SelectorConfig) -> Result<LicenseSelector> {
    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Cannot use catalog {}", path.display()))?,
        None => standard_catalog(),
    };

    debug!(types = catalog.len(), initial = %config.initial_type, "Selector ready");
    Ok(LicenseSelector::builder()
        .catalog(catalog)
        .initial_type(config.initial_type.as_str())
        .show_preview(cli.preview || config.show_preview)
        .build())
}
