use crate::app::error::CompileError;
use std::fs;
use std::path::{Path, PathBuf};

/// `sub/my-project.json` becomes `<output_dir>/my-project.txt`.
pub fn output_path(output_dir: &Path, identifier: &str) -> Result<PathBuf, CompileError> {
    let stem = Path::new(identifier.trim())
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .ok_or(CompileError::EmptyIdentifier)?;

    Ok(output_dir.join(format!("{}.txt", stem)))
}

/// Overwrites any previous artifact at `path`.
pub fn write_artifact(path: &Path, text: &str) -> Result<(), CompileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CompileError::OutputWrite(path.to_path_buf(), e))?;
    }
    fs::write(path, text).map_err(|e| CompileError::OutputWrite(path.to_path_buf(), e))
}
