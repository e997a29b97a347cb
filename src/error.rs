// ABOUTME: Errors raised before any request reaches the panel.
// ABOUTME: Config discovery and parsing, header resolution, and init scaffolding.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} already exists (pass --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("no dockmate config found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("header {header}: environment variable {var} is not set and has no default")]
    MissingEnvVar { header: String, var: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dockmate config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
