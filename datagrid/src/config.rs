//! Grid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::table::{ColumnPinningState, ColumnResizeMode};

pub const DEFAULT_MIN_COLUMN_SIZE: f64 = 30.0;
pub const DEFAULT_EMPTY_TEXT: &str = "No results.";

/// Settings of a [`DataTable`](crate::components::DataTable).
///
/// Every field is optional when deserialized; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataTableConfig {
    /// Initial column pinning. Defaults to `checkbox` and `id` on the left.
    pub pinning: ColumnPinningState,
    /// Minimum width of every column that does not set its own.
    pub min_size: f64,
    pub resize_mode: ColumnResizeMode,
    pub page_size: usize,
    /// Text of the placeholder row shown when a page has no rows.
    pub empty_text: String,
}

impl Default for DataTableConfig {
    fn default() -> Self {
        Self {
            pinning: ColumnPinningState::new(["checkbox", "id"], Vec::<String>::new()),
            min_size: DEFAULT_MIN_COLUMN_SIZE,
            resize_mode: ColumnResizeMode::OnChange,
            page_size: 10,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
        }
    }
}

impl DataTableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pinning(mut self, pinning: ColumnPinningState) -> Self {
        self.pinning = pinning;
        self
    }

    pub fn min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn resize_mode(mut self, mode: ColumnResizeMode) -> Self {
        self.resize_mode = mode;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded grid config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if let Some(id) = self.pinning.overlap() {
            return Err(GridError::PinnedTwice(id.to_string()));
        }
        if self.page_size == 0 {
            return Err(GridError::InvalidConfig("page_size must be at least 1".into()));
        }
        if !(self.min_size.is_finite() && self.min_size >= 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "min_size must be a non-negative number, got {}",
                self.min_size
            )));
        }
        Ok(())
    }
}
