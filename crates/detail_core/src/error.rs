use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetailError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse directory snapshot '{}': {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse settings file: {0}")]
    Settings(#[from] toml::de::Error),
}
