#![forbid(unsafe_code)]

//! Derived per-tick grid geometry and the authoritative snapping rules.
//!
//! A [`GridMetrics`] value is ephemeral: recomputed from the grid's current
//! pixel bounds and options on every gesture tick, never persisted. Columns
//! are uniform fractions of the grid width; rows may be content-driven and
//! non-uniform, so row mapping walks a measured height vector.
//!
//! # Snapping
//!
//! `cell_index_for_position` uses an asymmetric half-gap tie-break: a
//! position at or before the midpoint of the gap after the first cell maps
//! to 1, a position at or after the symmetric threshold before the last cell
//! maps to the last cell, and interior positions divide evenly. Edge cells
//! therefore win boundary positions without requiring full-cell overlap.

use griddle_core::geometry::{CellPoint, CellRect, PxPoint, PxRect, PxSize, clamp};

use crate::options::GridOptions;

/// Map a pixel offset along one axis to a 1-based cell index.
///
/// `position` is measured from the grid's content origin. Total for every
/// `max_cells >= 1` with positive `cell_size` and non-negative `gap`.
#[must_use]
pub fn cell_index_for_position(position: f64, cell_size: f64, gap: f64, max_cells: i32) -> i32 {
    if position <= cell_size + gap / 2.0 {
        return 1;
    }
    if position >= (cell_size + gap) * f64::from(max_cells - 1) - gap / 2.0 {
        return max_cells;
    }
    ((position - (cell_size + gap / 2.0)) / (cell_size + gap)).floor() as i32 + 2
}

/// Map a pixel offset to a 1-based row index over measured row heights.
///
/// Accumulates `row_heights[i] + gap` until the running total reaches
/// `position`; falls back to the last row when the position exceeds the
/// total height (or 1 when no rows were measured).
#[must_use]
pub fn row_index_for_position(position: f64, row_heights: &[f64], gap: f64) -> i32 {
    let mut reach = 0.0;
    for (index, height) in row_heights.iter().enumerate() {
        reach += height + gap;
        if position <= reach {
            return index as i32 + 1;
        }
    }
    row_heights.len().max(1) as i32
}

/// Per-tick geometry of one grid.
///
/// Bounds are viewport coordinates (the same space pointer events use).
#[derive(Debug, Clone, PartialEq)]
pub struct GridMetrics {
    pub bounds: PxRect,
    pub columns: i32,
    pub rows: i32,
    pub column_gap: f64,
    pub row_gap: f64,
    /// Uniform column width: `(width - column_gap * (columns - 1)) / columns`.
    pub cell_width: f64,
    /// Uniform row height, used for footprint sizing even when rows are
    /// content-driven.
    pub cell_height: f64,
    /// Measured row heights; uniform fill unless the host supplied them.
    pub row_heights: Vec<f64>,
}

impl GridMetrics {
    /// Measure a grid with uniform rows.
    ///
    /// `options` are assumed validated ([`GridOptions::validate`]).
    #[must_use]
    pub fn measure(bounds: PxRect, options: &GridOptions) -> Self {
        let cell_width =
            (bounds.width - options.column_gap * f64::from(options.columns - 1))
                / f64::from(options.columns);
        let cell_height = (bounds.height - options.row_gap * f64::from(options.rows - 1))
            / f64::from(options.rows);
        let row_heights = vec![cell_height; options.rows.max(0) as usize];
        Self {
            bounds,
            columns: options.columns,
            rows: options.rows,
            column_gap: options.column_gap,
            row_gap: options.row_gap,
            cell_width,
            cell_height,
            row_heights,
        }
    }

    /// Measure a grid whose rows were sized by content.
    ///
    /// An empty `row_heights` slice falls back to uniform rows.
    #[must_use]
    pub fn measure_with_rows(bounds: PxRect, options: &GridOptions, row_heights: &[f64]) -> Self {
        let mut metrics = Self::measure(bounds, options);
        if !row_heights.is_empty() {
            metrics.row_heights = row_heights.to_vec();
        }
        metrics
    }

    /// Column under a grid-relative x offset, pre-clamped into the grid.
    #[must_use]
    pub fn column_at(&self, x: f64) -> i32 {
        let on_grid = clamp(1.0, self.bounds.width, x);
        cell_index_for_position(on_grid, self.cell_width, self.column_gap, self.columns)
    }

    /// Row under a grid-relative y offset, pre-clamped into the grid.
    #[must_use]
    pub fn row_at(&self, y: f64) -> i32 {
        let on_grid = clamp(1.0, self.bounds.height, y);
        row_index_for_position(on_grid, &self.row_heights, self.row_gap)
    }

    /// Cell under an absolute pointer position.
    #[must_use]
    pub fn pointer_cell(&self, pointer: PxPoint) -> CellPoint {
        CellPoint::new(
            self.column_at(pointer.x - self.bounds.left()),
            self.row_at(pointer.y - self.bounds.top()),
        )
    }

    /// Pixel footprint of a `width x height` cell span, gaps included.
    #[must_use]
    pub fn span_size(&self, width: i32, height: i32) -> PxSize {
        PxSize::new(
            f64::from(width) * self.cell_width + f64::from(width - 1) * self.column_gap,
            f64::from(height) * self.cell_height + f64::from(height - 1) * self.row_gap,
        )
    }

    /// Pixel rectangle of a placed footprint, honoring measured row heights.
    #[must_use]
    pub fn item_rect(&self, rect: CellRect) -> PxRect {
        let x = self.bounds.x
            + f64::from(rect.x - 1) * (self.cell_width + self.column_gap);
        let width =
            f64::from(rect.width) * self.cell_width + f64::from(rect.width - 1) * self.column_gap;

        let first = ((rect.y - 1).max(0) as usize).min(self.row_heights.len());
        let last = (first + rect.height.max(0) as usize).min(self.row_heights.len());
        let y = self.bounds.y
            + self.row_heights[..first].iter().sum::<f64>()
            + f64::from(rect.y - 1) * self.row_gap;
        let height = self.row_heights[first..last].iter().sum::<f64>()
            + f64::from(rect.height.max(1) - 1) * self.row_gap;

        PxRect::new(x, y, width, height)
    }

    /// Clamp a target cell so a `width x height` footprint stays in bounds.
    #[must_use]
    pub fn clamp_cell(&self, target: CellPoint, width: i32, height: i32) -> CellPoint {
        let max_col = (self.columns - width + 1).max(1);
        let max_row = (self.rows - height + 1).max(1);
        CellPoint::new(
            clamp(1, max_col, target.col),
            clamp(1, max_row, target.row),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 12 columns x 100px with 8px gaps -> 1288px wide; 3 uniform 100px rows.
    fn grid() -> GridMetrics {
        let options = GridOptions::new().with_rows(3);
        GridMetrics::measure(PxRect::new(0.0, 0.0, 1288.0, 316.0), &options)
    }

    #[test]
    fn measure_derives_cell_sizes_from_bounds() {
        let metrics = grid();
        assert!((metrics.cell_width - 100.0).abs() < 1e-9);
        assert!((metrics.cell_height - 100.0).abs() < 1e-9);
        assert_eq!(metrics.row_heights.len(), 3);
    }

    #[test]
    fn half_gap_boundaries_bias_toward_edge_cells() {
        // cell_size 100, gap 20, 3 cells.
        assert_eq!(cell_index_for_position(0.0, 100.0, 20.0, 3), 1);
        assert_eq!(cell_index_for_position(110.0, 100.0, 20.0, 3), 1);
        assert_eq!(cell_index_for_position(111.0, 100.0, 20.0, 3), 2);
        assert_eq!(cell_index_for_position(229.0, 100.0, 20.0, 3), 2);
        assert_eq!(cell_index_for_position(230.0, 100.0, 20.0, 3), 3);
        assert_eq!(cell_index_for_position(10_000.0, 100.0, 20.0, 3), 3);
    }

    #[test]
    fn single_cell_axis_maps_everything_to_one() {
        assert_eq!(cell_index_for_position(0.0, 100.0, 20.0, 1), 1);
        assert_eq!(cell_index_for_position(500.0, 100.0, 20.0, 1), 1);
    }

    #[test]
    fn row_mapping_walks_measured_heights() {
        let heights = [40.0, 120.0, 60.0];
        assert_eq!(row_index_for_position(10.0, &heights, 8.0), 1);
        assert_eq!(row_index_for_position(48.0, &heights, 8.0), 1);
        assert_eq!(row_index_for_position(49.0, &heights, 8.0), 2);
        assert_eq!(row_index_for_position(176.0, &heights, 8.0), 2);
        assert_eq!(row_index_for_position(177.0, &heights, 8.0), 3);
    }

    #[test]
    fn row_mapping_falls_back_to_the_last_row() {
        let heights = [40.0, 40.0];
        assert_eq!(row_index_for_position(10_000.0, &heights, 8.0), 2);
        assert_eq!(row_index_for_position(10.0, &[], 8.0), 1);
    }

    #[test]
    fn pointer_cell_uses_grid_relative_offsets() {
        let options = GridOptions::new().with_rows(3);
        let metrics = GridMetrics::measure(PxRect::new(200.0, 100.0, 1288.0, 316.0), &options);
        assert_eq!(
            metrics.pointer_cell(PxPoint::new(200.0, 100.0)),
            CellPoint::new(1, 1)
        );
        // Pointer outside the grid clamps onto it.
        assert_eq!(
            metrics.pointer_cell(PxPoint::new(0.0, 0.0)),
            CellPoint::new(1, 1)
        );
        assert_eq!(
            metrics.pointer_cell(PxPoint::new(5_000.0, 5_000.0)),
            CellPoint::new(12, 3)
        );
    }

    #[test]
    fn span_size_includes_interior_gaps() {
        let metrics = grid();
        let size = metrics.span_size(3, 2);
        assert!((size.width - 316.0).abs() < 1e-9);
        assert!((size.height - 208.0).abs() < 1e-9);
    }

    #[test]
    fn item_rect_positions_by_cell_and_row_heights() {
        let metrics = grid();
        let rect = metrics.item_rect(CellRect::new(2, 2, 2, 1));
        assert!((rect.x - 108.0).abs() < 1e-9);
        assert!((rect.y - 108.0).abs() < 1e-9);
        assert!((rect.width - 208.0).abs() < 1e-9);
        assert!((rect.height - 100.0).abs() < 1e-9);
    }

    #[test]
    fn item_rect_accumulates_content_rows() {
        let options = GridOptions::new().with_rows(3);
        let metrics = GridMetrics::measure_with_rows(
            PxRect::new(0.0, 0.0, 1288.0, 316.0),
            &options,
            &[40.0, 120.0, 60.0],
        );
        let rect = metrics.item_rect(CellRect::new(1, 2, 1, 2));
        assert!((rect.y - 48.0).abs() < 1e-9);
        assert!((rect.height - 188.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_cell_keeps_footprints_inside() {
        let metrics = grid();
        assert_eq!(
            metrics.clamp_cell(CellPoint::new(11, 1), 3, 1),
            CellPoint::new(10, 1)
        );
        assert_eq!(
            metrics.clamp_cell(CellPoint::new(-4, 2), 3, 1),
            CellPoint::new(1, 2)
        );
        // Span wider than the grid pins to column 1 rather than inverting.
        assert_eq!(
            metrics.clamp_cell(CellPoint::new(5, 1), 20, 1),
            CellPoint::new(1, 1)
        );
    }
}
