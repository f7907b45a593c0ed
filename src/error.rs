//! Error types for Hostq

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the backing alias store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("alias store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while defining or expanding aliases.
///
/// A missing alias is not an error; lookups return `Option`.
#[derive(Error, Debug)]
pub enum AliasError {
    #[error("Argument mismatch, alias expects {expected} args, got {supplied}")]
    ArgumentMismatch { expected: usize, supplied: usize },

    #[error("Error creating alias: {0}")]
    Creation(#[source] StoreError),

    #[error("Alias name must not be empty")]
    EmptyName,
}

#[derive(Error, Debug)]
pub enum HostqError {
    #[error("unable to load config file at {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Alias(#[from] AliasError),

    #[error("REPL error: {0}")]
    Repl(String),

    #[error("No alias named '{0}'")]
    UnknownAlias(String),
}

pub type Result<T> = std::result::Result<T, HostqError>;
