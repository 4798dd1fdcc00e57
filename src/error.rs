use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TristateError {
    #[error("Tristate error: {0}")]
    Generic(String),
    #[error(transparent)]
    Expected(#[from] TristateExpectedError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors caused by user input (config files, snapshots) rather than by bugs.
#[derive(Error, Debug)]
pub enum TristateExpectedError {
    #[error("{0}")]
    Generic(String),
    #[error("Configuration file not found ({path})")]
    ConfigNotFound { path: PathBuf },
    #[error("Failed to decode configuration file ({path}): {message}")]
    ConfigDecode { path: PathBuf, message: String },
    #[error("Missing key {key} in configuration file ({path})")]
    MissingConfigKey { key: String, path: PathBuf },
    #[error("Invalid value for {key} in configuration file ({path}): {message}")]
    InvalidConfigValue { key: String, path: PathBuf, message: String },
    #[error("Invalid selection snapshot: {message}")]
    InvalidSnapshot { message: String },
}

pub type Result<T> = std::result::Result<T, TristateError>;
