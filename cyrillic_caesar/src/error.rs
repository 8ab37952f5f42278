//! Error types for cipher and analysis runs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaesarError {
    #[error(
        "Key {key} is out of range (must be in [-{max}; {max}])",
        max = crate::alphabet::LEN - 1
    )]
    KeyOutOfRange { key: i64 },

    #[error("Invalid key \"{token}\" (must be an integer)")]
    InvalidKey { token: String },

    #[error("Could not open file \"{}\"", path.display())]
    FileNotFound { path: PathBuf },

    #[error("\"{}\" is a directory, not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("Refusing to overwrite the input file \"{}\"", path.display())]
    SameFile { path: PathBuf },

    #[error("I/O error on \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CaesarError {
    /// Wraps an I/O error, promoting `NotFound` to [`CaesarError::FileNotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CaesarError::FileNotFound { path }
        } else {
            CaesarError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, CaesarError>;
