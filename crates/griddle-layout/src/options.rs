#![forbid(unsafe_code)]

//! Per-grid configuration.
//!
//! These inputs shape geometry math (cell size denominators) but never the
//! gesture protocol. Gaps and heights are pixel lengths; `height` and
//! `min_item_height` are presentation hints the host's render sink applies —
//! the engine itself consumes the grid's measured pixel bounds and, for
//! content-driven rows, the measured row heights.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertical sizing policy for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GridHeight {
    /// Grow with content.
    #[default]
    Auto,
    /// Fill the containing element.
    Stretch,
    /// Fixed pixel height.
    Px(f64),
}

/// Configuration accepted per grid instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GridOptions {
    /// Number of columns (uniform fractions of grid width).
    pub columns: i32,
    /// Number of rows.
    pub rows: i32,
    /// Horizontal gap between cells, in pixels.
    pub column_gap: f64,
    /// Vertical gap between cells, in pixels.
    pub row_gap: f64,
    /// Minimum rendered item height; `None` keeps rows as uniform fractions.
    pub min_item_height: Option<f64>,
    /// Vertical sizing policy.
    pub height: GridHeight,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: 12,
            rows: 3,
            column_gap: 8.0,
            row_gap: 8.0,
            min_item_height: None,
            height: GridHeight::Auto,
        }
    }
}

impl GridOptions {
    /// Default configuration (12 columns, 3 rows, 8px gaps).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: i32) -> Self {
        self.columns = columns;
        self
    }

    /// Set the row count.
    #[must_use]
    pub fn with_rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    /// Set the horizontal cell gap.
    #[must_use]
    pub fn with_column_gap(mut self, gap: f64) -> Self {
        self.column_gap = gap;
        self
    }

    /// Set the vertical cell gap.
    #[must_use]
    pub fn with_row_gap(mut self, gap: f64) -> Self {
        self.row_gap = gap;
        self
    }

    /// Set the minimum rendered item height.
    #[must_use]
    pub fn with_min_item_height(mut self, height: f64) -> Self {
        self.min_item_height = Some(height);
        self
    }

    /// Set the vertical sizing policy.
    #[must_use]
    pub fn with_height(mut self, height: GridHeight) -> Self {
        self.height = height;
        self
    }

    /// Reject configurations that break geometry math.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.columns < 1 {
            return Err(OptionsError::InvalidColumns {
                columns: self.columns,
            });
        }
        if self.rows < 1 {
            return Err(OptionsError::InvalidRows { rows: self.rows });
        }
        if self.column_gap < 0.0 || self.row_gap < 0.0 {
            return Err(OptionsError::NegativeGap {
                column_gap: self.column_gap,
                row_gap: self.row_gap,
            });
        }
        Ok(())
    }
}

/// Structural configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Column count must be at least 1.
    InvalidColumns { columns: i32 },
    /// Row count must be at least 1.
    InvalidRows { rows: i32 },
    /// Gaps must be non-negative.
    NegativeGap { column_gap: f64, row_gap: f64 },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumns { columns } => {
                write!(f, "grid columns must be >= 1 (got {columns})")
            }
            Self::InvalidRows { rows } => write!(f, "grid rows must be >= 1 (got {rows})"),
            Self::NegativeGap {
                column_gap,
                row_gap,
            } => write!(
                f,
                "grid gaps must be >= 0 (got column_gap {column_gap}, row_gap {row_gap})"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}
