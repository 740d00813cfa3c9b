use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a compilation before any output is written.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("No configuration file name was given")]
    EmptyIdentifier,

    #[error("Could not find configuration file: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read configuration file {}", .0.display())]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse configuration file {}: {reason}", .path.display())]
    ConfigParse {
        path: PathBuf,
        reason: serde_json::Error,
    },

    #[error(
        "The 'absolute_path' field must be a non-empty absolute path, got {:?}",
        .0
    )]
    InvalidBasePath(PathBuf),

    #[error("Failed to write output file {}", .0.display())]
    OutputWrite(PathBuf, #[source] std::io::Error),
}
