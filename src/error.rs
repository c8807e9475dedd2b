//! Error types
//!
//! Only setup can fail. Everything inside the frame loop is total.

use std::path::PathBuf;

/// Errors raised while preparing the simulation's resources
#[derive(thiserror::Error, Debug)]
pub enum ArcsError {
    /// Sample file missing or unreadable
    #[error("Failed to read sound asset {path:?}: {source}")]
    AssetIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Sample file is not a decodable WAV
    #[error("Invalid WAV data in {path:?}: {source}")]
    InvalidWav { path: PathBuf, source: hound::Error },

    /// Sample file decodes but holds no frames
    #[error("Sound asset {path:?} contains no samples")]
    EmptySample { path: PathBuf },

    /// Audio output could not be opened or fed
    #[error("Audio device error: {0}")]
    AudioDevice(String),
}

/// Result alias for setup operations
pub type Result<T> = std::result::Result<T, ArcsError>;
