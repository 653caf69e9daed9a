//! Engine configuration.

use serde::{Deserialize, Serialize};

/// When a resize gesture writes to the sizing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnResizeMode {
    /// Sizes follow the pointer while dragging.
    OnChange,
    /// Sizes are applied once the pointer is released.
    #[default]
    OnEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnResizeDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Sizing defaults applied to every column that does not set its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDefaults {
    pub size: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self {
            size: 150.0,
            min_size: 20.0,
            max_size: f64::MAX,
        }
    }
}

impl ColumnDefaults {
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn max_size(mut self, max_size: f64) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Plain (non-state) table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub enable_row_selection: bool,
    pub enable_multi_row_selection: bool,
    pub enable_column_resizing: bool,
    pub enable_column_pinning: bool,
    pub column_resize_mode: ColumnResizeMode,
    pub column_resize_direction: ColumnResizeDirection,
    pub default_column: ColumnDefaults,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            enable_row_selection: true,
            enable_multi_row_selection: true,
            enable_column_resizing: true,
            enable_column_pinning: true,
            column_resize_mode: ColumnResizeMode::default(),
            column_resize_direction: ColumnResizeDirection::default(),
            default_column: ColumnDefaults::default(),
        }
    }
}

impl TableConfig {
    pub fn row_selection(mut self, enabled: bool) -> Self {
        self.enable_row_selection = enabled;
        self
    }

    pub fn multi_row_selection(mut self, enabled: bool) -> Self {
        self.enable_multi_row_selection = enabled;
        self
    }

    pub fn column_resizing(mut self, enabled: bool) -> Self {
        self.enable_column_resizing = enabled;
        self
    }

    pub fn column_pinning(mut self, enabled: bool) -> Self {
        self.enable_column_pinning = enabled;
        self
    }

    pub fn resize_mode(mut self, mode: ColumnResizeMode) -> Self {
        self.column_resize_mode = mode;
        self
    }

    pub fn resize_direction(mut self, direction: ColumnResizeDirection) -> Self {
        self.column_resize_direction = direction;
        self
    }

    pub fn default_column(mut self, defaults: ColumnDefaults) -> Self {
        self.default_column = defaults;
        self
    }
}
