use std::path::PathBuf;

use datagrid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of records")]
    NotAnArray,

    #[error("Record {0} is not a JSON object")]
    NotAnObject(usize),

    #[error(transparent)]
    Grid(#[from] GridError),
}
