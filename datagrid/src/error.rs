//! Grid error types.

use thiserror::Error;

/// Errors raised at the edges of the grid: configuration loading and event
/// dispatch naming things that do not exist. Rendering itself never fails.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Unknown header '{0}'")]
    UnknownHeader(String),

    #[error("Unknown row '{0}'")]
    UnknownRow(String),

    /// A column id is listed as pinned on both sides.
    #[error("Column '{0}' is pinned both left and right")]
    PinnedTwice(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
