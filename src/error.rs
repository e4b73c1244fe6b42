//! Error types for startup and the terminal front end.
//!
//! The game core itself has no failure modes; everything here happens
//! before the first frame or at the terminal boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A sprite could not be made ready. Fatal at startup.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The sprite file could not be read.
    #[error("failed to read asset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The sprite file contained no drawable rows.
    #[error("asset {0} is empty")]
    Empty(PathBuf),
}

/// The configuration file could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Geometry or timing values that would break the game rules.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error returned by the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
