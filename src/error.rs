// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid database password.")]
    InvalidPassword,

    #[error(
        "Could not find a WaykDen configuration in the given path. \
         Use New-WaykDenConfig, or make sure the WaykDen configuration is in \
         the current folder or set WAYK_DEN_HOME to its path."
    )]
    ConfigNotFound,

    #[error("collection {0} does not exist in the container")]
    MissingCollection(String),

    #[error("collection {0} already holds a record; insert is first-time only")]
    RecordExists(String),

    #[error("collection {0} holds no record to replace")]
    MissingRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
