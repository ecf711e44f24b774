#![cfg_attr(not(test), forbid(unsafe_code))]

//! Grid geometry math for the griddle engine.
//!
//! Pure, host-agnostic layout: given a grid's pixel bounds and its
//! configuration, map pointer positions to 1-based cell coordinates, size
//! item footprints in pixels, and step item geometry during resize gestures.
//! Nothing in this crate holds gesture state; that lives in
//! `griddle-widgets`.
//!
//! - [`options`]: per-grid configuration (`columns`, `rows`, gaps, sizing).
//! - [`metrics`]: derived per-tick geometry and the snapping rules.
//! - [`resize`]: resize handles and their anchored cell/pixel math.

pub mod metrics;
pub mod options;
pub mod resize;

pub use metrics::{GridMetrics, cell_index_for_position, row_index_for_position};
pub use options::{GridHeight, GridOptions, OptionsError};
pub use resize::ResizeHandle;
