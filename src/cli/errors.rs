use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not read declaration file {path:?}: {source}")]
    ReadDeclarations {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid declaration file: {0}")]
    Declarations(#[source] serde_json::Error),

    #[error("Could not render output: {0}")]
    Output(#[source] serde_json::Error),

    #[error(transparent)]
    Resolve(#[from] clom::Error),
}
