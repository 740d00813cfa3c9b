use crate::app::error::CompileError;
use crate::app::models::ProjectConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Locates `identifier` inside `projects_dir`.
pub fn project_path(projects_dir: &Path, identifier: &str) -> Result<PathBuf, CompileError> {
    if identifier.trim().is_empty() {
        return Err(CompileError::EmptyIdentifier);
    }
    Ok(projects_dir.join(identifier))
}

pub fn load_project(path: &Path) -> Result<ProjectConfig, CompileError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CompileError::ConfigNotFound(path.to_path_buf()),
        _ => CompileError::ConfigRead(path.to_path_buf(), e),
    })?;

    let config: ProjectConfig =
        serde_json::from_str(&content).map_err(|reason| CompileError::ConfigParse {
            path: path.to_path_buf(),
            reason,
        })?;

    if config.base_path.as_os_str().is_empty() || !config.base_path.is_absolute() {
        return Err(CompileError::InvalidBasePath(config.base_path));
    }
    if !config.base_path.is_dir() {
        log::warn!(
            "Base path {:?} is not an existing directory; listed files will be reported missing",
            config.base_path
        );
    }
    if config.files.is_empty() {
        log::warn!("No files listed in {:?}", path);
    }

    Ok(config)
}
