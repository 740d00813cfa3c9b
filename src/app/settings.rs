use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_PROJECTS_DIR: &str = "projects";
const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Deserialize, Debug, Clone, Default)]
struct SettingsFile {
    projects_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("context_compiler").join("settings.toml"))
}

/// No config directory means no settings file.
fn load_settings(path: Option<&Path>) -> Result<SettingsFile> {
    match path {
        Some(path) => load_settings_file(path),
        None => {
            log::debug!("No config directory available, using default settings");
            Ok(SettingsFile::default())
        }
    }
}

fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = fs::read_to_string(path)
        .context(format!("Failed to read settings at {:?}", path))?;

    toml::from_str(&content).context(format!("Failed to parse settings at {:?}", path))
}

/// Relative directories in the settings file are taken from `base`.
fn resolve_dirs(settings: SettingsFile, base: &Path) -> RuntimeConfig {
    let projects_dir = settings
        .projects_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECTS_DIR));
    let output_dir = settings
        .output_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    RuntimeConfig {
        projects_dir: base.join(projects_dir),
        output_dir: base.join(output_dir),
    }
}

pub fn resolve_settings(base: &Path) -> Result<RuntimeConfig> {
    let settings = load_settings(settings_path().as_deref())?;
    let config = resolve_dirs(settings, base);
    log::debug!(
        "Projects from {:?}, output to {:?}",
        config.projects_dir,
        config.output_dir
    );
    Ok(config)
}
