use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: could not read [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Config error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Invalid(String)
}
