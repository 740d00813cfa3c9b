// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod output;
pub mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use self::cli::Cli;
use self::config::{load_project, project_path};
use self::formatter::OutputGenerator;
use self::models::RuntimeConfig;
use self::output::{output_path, write_artifact};
use self::settings::resolve_settings;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve directories
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let runtime = resolve_settings(&current_dir)?;

    // 3. Compile and write
    let written = compile_project(&runtime, &args.project)?;

    println!("Compilation complete! Output written to: {}", written.display());
    Ok(())
}

/// Loads `identifier` from the projects directory and writes its artifact.
/// Nothing is written if the configuration cannot be loaded.
pub fn compile_project(runtime: &RuntimeConfig, identifier: &str) -> Result<PathBuf> {
    let config_path = project_path(&runtime.projects_dir, identifier)?;
    let destination = output_path(&runtime.output_dir, identifier)?;
    let config = load_project(&config_path)?;

    let artifact = OutputGenerator::compile(&config);
    write_artifact(&destination, &artifact.text)?;

    log::info!(
        "Compiled {} file(s) from {:?}, {} missing",
        config.files.len(),
        config_path,
        artifact.missing.len()
    );
    if !artifact.missing.is_empty() {
        log::warn!("⚠️ Missing files: {}", artifact.missing.join(", "));
    }

    Ok(destination)
}
