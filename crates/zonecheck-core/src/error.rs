//! Error types for zonecheck

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZonecheckError {
    // Geometry errors (raised at construction time only; containment
    // queries never fail, they degrade to "not inside")
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: PathBuf },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ZonecheckError>;
