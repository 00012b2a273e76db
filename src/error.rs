use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepocheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access check root: {path}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RepocheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
