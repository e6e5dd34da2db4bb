//! Error types for the client frame loop

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid frame delta: {0}")]
    InvalidFrameDelta(f32),

    #[error("Invalid scheduler settings: {0}")]
    InvalidSchedule(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid game config: {0}")]
    Game(#[from] game_core::ConfigError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
