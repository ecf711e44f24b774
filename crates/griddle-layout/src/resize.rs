#![forbid(unsafe_code)]

//! Resize handles and their anchored geometry math.
//!
//! Eight handles cover the item's edges and corners. Each handle pins the
//! opposite edge/corner: dragging the left edge keeps the right edge fixed,
//! dragging a top corner keeps the bottom edge fixed, and so on.
//!
//! Two computations run per move tick:
//!
//! - [`ResizeHandle::resize_cells`] steps the item's cell footprint from the
//!   pointer's snapped cell, clamped to the grid.
//! - [`ResizeHandle::preview_rect`] derives the placeholder's pixel
//!   rectangle from the item's freshly rendered rectangle and the raw
//!   pointer, so the ghost tracks the pointer between cell snaps.

use griddle_core::geometry::{CellPoint, CellRect, PxPoint, PxRect, ScrollOffset};
use serde::{Deserialize, Serialize};

/// A resize affordance on an item's edge or corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl ResizeHandle {
    /// All eight handles, clockwise from the top edge.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// Whether this handle moves a vertical edge (changes width).
    #[must_use]
    pub const fn horizontal(self) -> bool {
        !matches!(self, Self::Top | Self::Bottom)
    }

    /// Whether this handle moves a horizontal edge (changes height).
    #[must_use]
    pub const fn vertical(self) -> bool {
        !matches!(self, Self::Left | Self::Right)
    }

    /// Whether the right edge stays fixed (left-family handles).
    #[must_use]
    pub const fn anchors_right(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    /// Whether the bottom edge stays fixed (top-family handles).
    #[must_use]
    pub const fn anchors_bottom(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    /// Step an item's cell footprint toward the pointer's snapped cell.
    ///
    /// `current` is the live footprint, `init` the footprint at
    /// resize-start: anchored edges are recovered from `init` so the fixed
    /// edge never drifts across ticks. Spans never drop below 1 cell and
    /// growth is clamped to the grid's remaining columns/rows.
    #[must_use]
    pub fn resize_cells(
        self,
        current: CellRect,
        init: CellRect,
        pointer_cell: CellPoint,
        columns: i32,
        rows: i32,
    ) -> CellRect {
        let mut next = current;

        if self.anchors_right() {
            let width = (current.right() - pointer_cell.col + 1).max(1);
            next.width = width;
            next.x = ((init.x + init.width) - width).max(1);
        } else if self.horizontal() {
            let width = pointer_cell.col - current.x + 1;
            next.width = width.min(columns - current.x + 1).max(1);
        }

        if self.anchors_bottom() {
            let height = (current.bottom() - pointer_cell.row + 1).max(1);
            next.height = height;
            next.y = ((init.y + init.height) - height).max(1);
        } else if self.vertical() {
            let height = pointer_cell.row - current.y + 1;
            next.height = height.min(rows - current.y + 1).max(1);
        }

        next
    }

    /// Placeholder pixel rectangle for the current tick.
    ///
    /// `carry` is the placeholder's previous rectangle (axes this handle
    /// does not touch keep their values), `item_rect` the item's rendered
    /// rectangle after the cell step. Horizontal resizes keep the rendered
    /// height: rows are content-driven, the pointer says nothing about them.
    /// Both extents are floored at one pixel.
    #[must_use]
    pub fn preview_rect(
        self,
        carry: PxRect,
        item_rect: PxRect,
        pointer: PxPoint,
        scroll: ScrollOffset,
    ) -> PxRect {
        let mut x = carry.x;
        let mut y = carry.y;
        let mut width = carry.width;
        let mut height = carry.height;

        if self.horizontal() {
            if self.anchors_right() {
                x = (pointer.x + scroll.x).min(item_rect.right() + scroll.x);
                width = item_rect.right() - pointer.x;
            } else {
                width = pointer.x - item_rect.left();
            }
            height = item_rect.height;
        }

        if self.vertical() {
            if self.anchors_bottom() {
                y = (pointer.y + scroll.y).min(item_rect.bottom() + scroll.y);
                height = item_rect.bottom() - pointer.y;
            } else {
                height = pointer.y - item_rect.top();
            }
        }

        PxRect::new(x, y, width.max(1.0), height.max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLS: i32 = 12;
    const ROWS: i32 = 6;

    #[test]
    fn left_handle_keeps_the_right_edge_fixed() {
        let init = CellRect::new(3, 3, 2, 2);
        let next =
            ResizeHandle::Left.resize_cells(init, init, CellPoint::new(4, 3), COLS, ROWS);
        // Shrunk to one column: x moves to the anchored right edge.
        assert_eq!(next, CellRect::new(4, 3, 1, 2));
    }

    #[test]
    fn left_handle_grows_toward_column_one() {
        let init = CellRect::new(3, 3, 2, 2);
        let next =
            ResizeHandle::Left.resize_cells(init, init, CellPoint::new(1, 3), COLS, ROWS);
        assert_eq!(next, CellRect::new(1, 3, 4, 2));
    }

    #[test]
    fn right_handle_growth_is_clamped_to_remaining_columns() {
        let init = CellRect::new(10, 1, 3, 1);
        let next =
            ResizeHandle::Right.resize_cells(init, init, CellPoint::new(12, 1), COLS, ROWS);
        assert_eq!(next.width, 3);
        // Pointer snapped past the grid can never report width 4.
        let wide =
            ResizeHandle::Right.resize_cells(next, init, CellPoint::new(12, 1), COLS, ROWS);
        assert_eq!(wide.width, 3);
    }

    #[test]
    fn right_handle_never_collapses_below_one_cell() {
        let init = CellRect::new(5, 1, 3, 1);
        let next =
            ResizeHandle::Right.resize_cells(init, init, CellPoint::new(1, 1), COLS, ROWS);
        assert_eq!(next, CellRect::new(5, 1, 1, 1));
    }

    #[test]
    fn top_handle_keeps_the_bottom_edge_fixed() {
        let init = CellRect::new(2, 4, 1, 2);
        let next = ResizeHandle::Top.resize_cells(init, init, CellPoint::new(2, 5), COLS, ROWS);
        assert_eq!(next, CellRect::new(2, 5, 1, 1));
        let grown = ResizeHandle::Top.resize_cells(next, init, CellPoint::new(2, 1), COLS, ROWS);
        assert_eq!(grown, CellRect::new(2, 1, 1, 5));
    }

    #[test]
    fn corner_handles_step_both_axes() {
        let init = CellRect::new(4, 4, 2, 2);
        let next =
            ResizeHandle::TopLeft.resize_cells(init, init, CellPoint::new(2, 2), COLS, ROWS);
        assert_eq!(next, CellRect::new(2, 2, 4, 4));
    }

    #[test]
    fn pure_vertical_handles_leave_width_alone() {
        let init = CellRect::new(4, 4, 2, 2);
        let next =
            ResizeHandle::Bottom.resize_cells(init, init, CellPoint::new(9, 6), COLS, ROWS);
        assert_eq!(next.x, 4);
        assert_eq!(next.width, 2);
        assert_eq!(next.height, 3);
    }

    #[test]
    fn preview_right_tracks_the_pointer() {
        let carry = PxRect::new(100.0, 100.0, 200.0, 100.0);
        let rendered = PxRect::new(100.0, 100.0, 208.0, 100.0);
        let preview = ResizeHandle::Right.preview_rect(
            carry,
            rendered,
            PxPoint::new(350.0, 120.0),
            ScrollOffset::ZERO,
        );
        assert_eq!(preview, PxRect::new(100.0, 100.0, 250.0, 100.0));
    }

    #[test]
    fn preview_left_pins_at_the_right_edge() {
        let carry = PxRect::new(100.0, 100.0, 200.0, 100.0);
        let rendered = PxRect::new(100.0, 100.0, 200.0, 100.0);
        let preview = ResizeHandle::Left.preview_rect(
            carry,
            rendered,
            PxPoint::new(400.0, 120.0),
            ScrollOffset::ZERO,
        );
        // Pointer past the fixed edge: origin pins there, width floors at 1px.
        assert_eq!(preview.x, 300.0);
        assert_eq!(preview.width, 1.0);
    }

    #[test]
    fn preview_bottom_keeps_untouched_axis_from_carry() {
        let carry = PxRect::new(60.0, 80.0, 120.0, 90.0);
        let rendered = PxRect::new(60.0, 80.0, 120.0, 90.0);
        let preview = ResizeHandle::Bottom.preview_rect(
            carry,
            rendered,
            PxPoint::new(70.0, 240.0),
            ScrollOffset::ZERO,
        );
        assert_eq!(preview.x, 60.0);
        assert_eq!(preview.width, 120.0);
        assert_eq!(preview.height, 160.0);
    }

    #[test]
    fn handles_serialize_kebab_case() {
        let json = serde_json::to_string(&ResizeHandle::BottomLeft).unwrap();
        assert_eq!(json, "\"bottom-left\"");
        let back: ResizeHandle = serde_json::from_str("\"top-right\"").unwrap();
        assert_eq!(back, ResizeHandle::TopRight);
    }

    #[test]
    fn handle_axis_flags_match_their_edges() {
        assert!(ResizeHandle::Left.horizontal());
        assert!(!ResizeHandle::Left.vertical());
        assert!(ResizeHandle::Top.vertical());
        assert!(!ResizeHandle::Top.horizontal());
        assert!(ResizeHandle::TopLeft.horizontal() && ResizeHandle::TopLeft.vertical());
        assert!(ResizeHandle::BottomRight.horizontal() && ResizeHandle::BottomRight.vertical());
        assert!(!ResizeHandle::BottomRight.anchors_right());
        assert!(!ResizeHandle::BottomRight.anchors_bottom());
    }
}
