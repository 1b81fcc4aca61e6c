//! Error types for husk.

use std::io;

/// Errors produced by the husk shell emulator.
#[derive(Debug, thiserror::Error)]
pub enum HuskError {
    #[error("config error: {0}")]
    Config(String),

    #[error("VFS error: {0}")]
    Vfs(String),

    #[error("mount error: {0}")]
    Mount(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HuskError>;
