//! Error types for droplist.

use std::io;

/// Errors produced by the droplist crates.
///
/// Pointer misses and value-search misses are not errors; those operations
/// report through `Option` / `bool`.
#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    #[error("dropdown requires at least one option")]
    EmptyOptions,

    #[error("config error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DropdownError>;
