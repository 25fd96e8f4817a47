use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The course source could not be opened. Nothing was loaded.
    #[error("Could not open course source {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} is not a valid option.")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, Error>;
