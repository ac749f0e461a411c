use std::path::PathBuf;

use seeker_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported file type for {} (expected .yaml, .yml or .json)", .path.display())]
    UnknownFormat { path: PathBuf },

    #[error("invalid seeker config")]
    Config(#[from] ConfigError),
}
