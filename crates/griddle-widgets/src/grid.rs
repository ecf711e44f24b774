#![forbid(unsafe_code)]

//! One grid container: committed items, the live element layer, and the
//! gesture handlers the stage drives.
//!
//! A grid keeps two item lists. `items` is the committed list — the host's
//! source of truth, updated only on structural changes (provisional entries
//! on enter/leave, the drop commit, cancel restoration, `set_items`). `live`
//! is the element layer: the geometry actually rendered this tick, mutated
//! freely while a gesture runs. Pointer-up resynchronizes `items` from
//! `live` and validates the result.
//!
//! # Invariants
//! 1. No two items in one grid share an id.
//! 2. The committed and live lists always have the same length.
//! 3. Every committed footprint placed by a gesture lies within
//!    `[1, columns] x [1, rows]`.
//!
//! Violations of 1–2 are host lifecycle bugs and surface as [`GridError`];
//! they are never silently repaired.

use std::fmt;

use ahash::AHashSet;
use griddle_core::geometry::{CellOffset, CellPoint, CellRect, PxPoint, PxRect, ScrollOffset};
use griddle_core::item::{Item, ItemId};
use griddle_layout::metrics::GridMetrics;
use griddle_layout::options::{GridOptions, OptionsError};
use griddle_layout::resize::ResizeHandle;

use crate::placeholder::Placeholder;
use crate::registry::GridId;
use crate::session::DragResizeSession;

/// Invariant violations inside one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    DuplicateItemId { id: ItemId },
    ItemCountMismatch { items: usize, elements: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItemId { id } => write!(f, "duplicate item id found: {id}"),
            Self::ItemCountMismatch { items, elements } => write!(
                f,
                "item count mismatch (got {items} committed, {elements} live)"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// State of an in-progress resize on one item.
#[derive(Debug, Clone)]
struct ResizeGesture {
    item_id: ItemId,
    handle: ResizeHandle,
    /// Cell footprint at resize start; anchored edges are recovered from it.
    init: CellRect,
}

/// What a drop commit produced.
#[derive(Debug, Clone)]
pub struct DropOutcome<T> {
    /// Item to report via `ItemDropped`, when the drop landed something new
    /// in this grid.
    pub dropped: Option<Item<T>>,
    /// The committed list after resynchronization.
    pub items: Vec<Item<T>>,
}

/// One mounted grid.
#[derive(Debug, Clone)]
pub struct GridContainer<T> {
    id: GridId,
    options: GridOptions,
    bounds: PxRect,
    row_heights: Vec<f64>,
    items: Vec<Item<T>>,
    live: Vec<Item<T>>,
    dragging: bool,
    resize: Option<ResizeGesture>,
}

impl<T> GridContainer<T> {
    /// Create a grid with validated options and empty bounds.
    pub fn new(id: GridId, options: GridOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            id,
            options,
            bounds: PxRect::new(0.0, 0.0, 0.0, 0.0),
            row_heights: Vec::new(),
            items: Vec::new(),
            live: Vec::new(),
            dragging: false,
            resize: None,
        })
    }

    /// This grid's id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> GridId {
        self.id
    }

    /// Grid configuration.
    #[must_use]
    pub const fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Viewport bounds as last pushed by the host.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> PxRect {
        self.bounds
    }

    /// Update the viewport bounds.
    pub fn set_bounds(&mut self, bounds: PxRect) {
        self.bounds = bounds;
    }

    /// Push measured per-row heights; an empty vector returns the grid to
    /// uniform rows.
    pub fn set_row_heights(&mut self, heights: Vec<f64>) {
        self.row_heights = heights;
    }

    /// Measured row heights, empty when rows are uniform.
    #[must_use]
    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// Committed item list.
    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Live element-layer items: the geometry to render this tick.
    #[must_use]
    pub fn live_items(&self) -> &[Item<T>] {
        &self.live
    }

    /// Live item by id.
    #[must_use]
    pub fn live_item(&self, id: &ItemId) -> Option<&Item<T>> {
        self.live.iter().find(|item| item.id == *id)
    }

    /// Whether a drag gesture is currently engaged with this grid.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a resize gesture is running on one of this grid's items.
    #[inline]
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Engage this grid as the origin of a starting drag.
    ///
    /// The pointer is already inside, so no enter fires; the grid must
    /// still accept live moves before the first boundary transition.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Pointer hit-test against this grid's bounds, edges inclusive.
    #[must_use]
    pub fn contains(&self, pointer: PxPoint) -> bool {
        self.bounds.contains(pointer)
    }

    /// Per-tick geometry derived from the current bounds and options.
    #[must_use]
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::measure_with_rows(self.bounds, &self.options, &self.row_heights)
    }

    /// Pixel rectangle of a live item.
    #[must_use]
    pub fn item_rect(&self, id: &ItemId) -> Option<PxRect> {
        let item = self.live_item(id)?;
        Some(self.metrics().item_rect(item.rect()))
    }

    /// Check the grid invariants: unique ids, matching list lengths.
    pub fn validate(&self) -> Result<(), GridError> {
        let mut seen = AHashSet::with_capacity(self.live.len());
        for item in &self.live {
            if !seen.insert(&item.id) {
                return Err(GridError::DuplicateItemId {
                    id: item.id.clone(),
                });
            }
        }
        if self.items.len() != self.live.len() {
            return Err(GridError::ItemCountMismatch {
                items: self.items.len(),
                elements: self.live.len(),
            });
        }
        Ok(())
    }

    fn live_index(&self, id: &ItemId) -> Option<usize> {
        self.live.iter().position(|item| item.id == *id)
    }

    fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        self.live.retain(|item| item.id != *id);
        self.items.len() != before
    }
}

impl<T: Clone> GridContainer<T> {
    /// Replace the committed list (and the live layer with it).
    ///
    /// Rejects duplicate ids without touching the grid.
    pub fn set_items(&mut self, items: Vec<Item<T>>) -> Result<(), GridError> {
        let mut seen = AHashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(GridError::DuplicateItemId {
                    id: item.id.clone(),
                });
            }
        }
        self.live = items.clone();
        self.items = items;
        Ok(())
    }

    /// The dragged item entered this grid.
    ///
    /// Engages the grid, resizes the placeholder to the item's cell
    /// footprint, and appends a provisional copy at the drop cell unless an
    /// item with that id is already present. Returns whether the committed
    /// list changed.
    pub fn drag_enter(
        &mut self,
        session: &DragResizeSession<T>,
        placeholder: &mut Placeholder,
        pointer: PxPoint,
    ) -> bool {
        self.dragging = true;

        let metrics = self.metrics();
        placeholder.resize(metrics.span_size(session.item.width, session.item.height));

        if self.live_index(&session.item.id).is_some() {
            return false;
        }

        let cell = drop_cell(
            &metrics,
            pointer,
            session.grab_offset,
            session.item.width,
            session.item.height,
        );
        let mut provisional = session.item.clone();
        provisional.x = cell.col;
        provisional.y = cell.row;

        self.items.push(provisional.clone());
        self.live.push(provisional);
        true
    }

    /// The dragged item left this grid.
    ///
    /// Disengages the grid, restores a freestanding source's placeholder to
    /// its natural size, and removes the item. Returns whether the committed
    /// list changed.
    pub fn drag_leave(
        &mut self,
        session: &DragResizeSession<T>,
        placeholder: &mut Placeholder,
    ) -> bool {
        self.dragging = false;

        if let Some(size) = session.source_size {
            placeholder.resize(size);
        }

        self.remove_item(&session.item.id)
    }

    /// Move the live item toward the pointer's snapped cell.
    ///
    /// Live-layer only; the committed list is untouched. Unknown item ids
    /// are ignored.
    pub fn drag_move(&mut self, session: &DragResizeSession<T>, pointer: PxPoint) {
        if !self.dragging {
            return;
        }
        let Some(index) = self.live_index(&session.item.id) else {
            return;
        };

        let metrics = self.metrics();
        let (width, height) = (self.live[index].width, self.live[index].height);
        let cell = drop_cell(&metrics, pointer, session.grab_offset, width, height);
        self.live[index].x = cell.col;
        self.live[index].y = cell.row;
    }

    /// Commit the gesture on pointer-up.
    ///
    /// A live transient-id entry (a freestanding source in flight) is
    /// replaced by a finalized item carrying a freshly generated id at the
    /// final drop cell. An item dragged in from another grid is reported as
    /// dropped. In all cases the committed list is resynchronized from the
    /// live layer and validated.
    pub fn drop_commit(
        &mut self,
        session: &DragResizeSession<T>,
        pointer: PxPoint,
    ) -> Result<DropOutcome<T>, GridError> {
        let metrics = self.metrics();

        let dropped = if let Some(index) = self.live.iter().position(|item| item.id.is_transient())
        {
            let transient = self.live.remove(index);
            let cell = drop_cell(
                &metrics,
                pointer,
                session.grab_offset,
                transient.width,
                transient.height,
            );
            let mut finalized = transient.with_fresh_id();
            finalized.x = cell.col;
            finalized.y = cell.row;
            self.live.push(finalized.clone());
            Some(finalized)
        } else if session.origin_grid != Some(self.id) {
            Some(session.item.clone())
        } else {
            None
        };

        self.items = self.live.clone();
        self.validate()?;
        self.dragging = false;

        Ok(DropOutcome {
            dropped,
            items: self.items.clone(),
        })
    }

    /// Undo this grid's part of a cancelled drag.
    ///
    /// For the gesture's origin grid the live geometry snaps back to the
    /// session snapshot; for any other grid the provisional entry is
    /// removed. Returns whether the committed list changed.
    pub fn cancel_drag(&mut self, session: &DragResizeSession<T>) -> bool {
        self.dragging = false;

        if session.origin_grid == Some(self.id) {
            if let Some(index) = self.live_index(&session.item.id) {
                let rect = session.item.rect();
                self.live[index].set_rect(rect);
            }
            return false;
        }

        self.remove_item(&session.item.id)
    }

    /// Put the gesture-start snapshot back after a cancelled cross-grid
    /// drag. Re-adds the item when absent, otherwise restores its live
    /// geometry. Returns whether the committed list changed.
    pub fn restore_item(&mut self, item: &Item<T>) -> bool {
        match self.live_index(&item.id) {
            Some(index) => {
                self.live[index].set_rect(item.rect());
                false
            }
            None => {
                self.items.push(item.clone());
                self.live.push(item.clone());
                true
            }
        }
    }

    /// Start resizing `item_id` with `handle`.
    ///
    /// Returns the item snapshot and its pixel rectangle (the placeholder
    /// anchor), or `None` when the item is unknown.
    pub fn begin_resize(
        &mut self,
        item_id: &ItemId,
        handle: ResizeHandle,
    ) -> Option<(Item<T>, PxRect)> {
        let item = self.live_item(item_id)?.clone();
        let anchor = self.metrics().item_rect(item.rect());
        self.resize = Some(ResizeGesture {
            item_id: item_id.clone(),
            handle,
            init: item.rect(),
        });
        Some((item, anchor))
    }

    /// Step the active resize toward the pointer and update the placeholder
    /// preview. No-op without an active resize.
    pub fn resize_tick(
        &mut self,
        pointer: PxPoint,
        scroll: ScrollOffset,
        placeholder: &mut Placeholder,
    ) {
        let Some(gesture) = self.resize.clone() else {
            return;
        };
        let Some(index) = self.live_index(&gesture.item_id) else {
            return;
        };

        let metrics = self.metrics();
        let cell = metrics.pointer_cell(pointer);
        let current = self.live[index].rect();
        let next =
            gesture
                .handle
                .resize_cells(current, gesture.init, cell, metrics.columns, metrics.rows);
        self.live[index].set_rect(next);

        let item_px = metrics.item_rect(next);
        let preview = gesture
            .handle
            .preview_rect(placeholder.rect(), item_px, pointer, scroll);
        placeholder.resize(preview.size());
        placeholder.move_to(preview.origin());
    }

    /// Finish the active resize: resynchronize the committed list and
    /// validate. `Ok(None)` when no resize was running.
    pub fn end_resize(&mut self) -> Result<Option<Vec<Item<T>>>, GridError> {
        if self.resize.take().is_none() {
            return Ok(None);
        }
        self.items = self.live.clone();
        self.validate()?;
        Ok(Some(self.items.clone()))
    }

    /// Abort the active resize, restoring the item's initial footprint.
    /// Returns whether a resize was running.
    pub fn cancel_resize(&mut self) -> bool {
        let Some(gesture) = self.resize.take() else {
            return false;
        };
        if let Some(index) = self.live_index(&gesture.item_id) {
            self.live[index].set_rect(gesture.init);
        }
        true
    }
}

/// Target cell for a dragged footprint: snapped pointer cell plus the grab
/// offset, clamped so the footprint stays inside the grid.
fn drop_cell(
    metrics: &GridMetrics,
    pointer: PxPoint,
    grab: CellOffset,
    width: i32,
    height: i32,
) -> CellPoint {
    let cell = metrics.pointer_cell(pointer);
    metrics.clamp_cell(
        CellPoint::new(cell.col + grab.x, cell.row + grab.y),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use griddle_core::geometry::PxSize;

    use super::*;

    // 12 columns x 100px cells with 8px gaps -> 1288px; 3 rows x 100px -> 316px.
    fn grid() -> GridContainer<&'static str> {
        let mut grid =
            GridContainer::new(GridId::new(1).unwrap(), GridOptions::new().with_rows(3)).unwrap();
        grid.set_bounds(PxRect::new(0.0, 0.0, 1288.0, 316.0));
        grid
    }

    fn item(id: &str, x: i32, y: i32, width: i32, height: i32) -> Item<&'static str> {
        Item::new(ItemId::new(id), x, y, width, height, "payload")
    }

    fn drag_session(
        origin: Option<GridId>,
        item: Item<&'static str>,
        grab: CellOffset,
    ) -> DragResizeSession<&'static str> {
        DragResizeSession::drag(
            origin,
            item,
            PxRect::new(0.0, 0.0, 100.0, 100.0),
            PxPoint::new(50.0, 50.0),
            grab,
        )
    }

    #[test]
    fn set_items_rejects_duplicate_ids() {
        let mut grid = grid();
        let result = grid.set_items(vec![item("a", 1, 1, 1, 1), item("a", 2, 1, 1, 1)]);
        assert_eq!(
            result,
            Err(GridError::DuplicateItemId {
                id: ItemId::new("a")
            })
        );
        assert!(grid.items().is_empty());
    }

    #[test]
    fn enter_appends_a_provisional_at_the_drop_cell() {
        let mut grid = grid();
        let mut placeholder = Placeholder::new();
        let session = drag_session(None, item("a", 1, 1, 2, 1), CellOffset::ZERO);

        // Pointer over column 4, row 1.
        let appended = grid.drag_enter(&session, &mut placeholder, PxPoint::new(350.0, 50.0));

        assert!(appended);
        assert!(grid.is_dragging());
        assert_eq!(grid.items().len(), 1);
        assert_eq!(grid.items()[0].rect(), CellRect::new(4, 1, 2, 1));
        // Placeholder resized to the 2x1 footprint: 2*100 + 8.
        assert_eq!(placeholder.size(), PxSize::new(208.0, 100.0));
    }

    #[test]
    fn enter_with_a_present_id_changes_nothing() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 2, 2, 2, 1)]).unwrap();
        let mut placeholder = Placeholder::new();
        let session = drag_session(Some(grid.id()), item("a", 2, 2, 2, 1), CellOffset::ZERO);

        let appended = grid.drag_enter(&session, &mut placeholder, PxPoint::new(50.0, 50.0));

        assert!(!appended);
        assert_eq!(grid.items().len(), 1);
        assert_eq!(grid.items()[0].rect(), CellRect::new(2, 2, 2, 1));
    }

    #[test]
    fn leave_removes_the_item_and_restores_a_source_placeholder() {
        let mut grid = grid();
        let mut placeholder = Placeholder::new();
        placeholder.show(PxSize::new(208.0, 100.0), PxPoint::ZERO);

        let source_item = Item::new(ItemId::transient(), 0, 0, 2, 1, "payload");
        let session = DragResizeSession::source_drag(
            source_item,
            PxRect::new(0.0, 0.0, 80.0, 40.0),
            PxPoint::new(10.0, 10.0),
        );

        grid.drag_enter(&session, &mut placeholder, PxPoint::new(350.0, 50.0));
        let removed = grid.drag_leave(&session, &mut placeholder);

        assert!(removed);
        assert!(!grid.is_dragging());
        assert!(grid.items().is_empty());
        assert_eq!(placeholder.size(), PxSize::new(80.0, 40.0));
    }

    #[test]
    fn drag_move_updates_live_geometry_only() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 1, 1, 2, 1)]).unwrap();
        let mut placeholder = Placeholder::new();
        let session = drag_session(Some(grid.id()), item("a", 1, 1, 2, 1), CellOffset::ZERO);

        grid.drag_enter(&session, &mut placeholder, PxPoint::new(50.0, 50.0));
        grid.drag_move(&session, PxPoint::new(565.0, 250.0));

        assert_eq!(grid.live_items()[0].rect(), CellRect::new(6, 3, 2, 1));
        assert_eq!(grid.items()[0].rect(), CellRect::new(1, 1, 2, 1));
    }

    #[test]
    fn drag_move_clamps_the_footprint_into_bounds() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 1, 1, 3, 2)]).unwrap();
        let mut placeholder = Placeholder::new();
        let session = drag_session(Some(grid.id()), item("a", 1, 1, 3, 2), CellOffset::ZERO);
        grid.drag_enter(&session, &mut placeholder, PxPoint::new(50.0, 50.0));

        // Far corner: column 12, row 3 would overflow a 3x2 item.
        grid.drag_move(&session, PxPoint::new(1280.0, 310.0));

        assert_eq!(grid.live_items()[0].rect(), CellRect::new(10, 2, 3, 2));
    }

    #[test]
    fn commit_replaces_a_transient_item_with_a_fresh_id() {
        let mut grid = grid();
        let mut placeholder = Placeholder::new();
        let source_item = Item::new(ItemId::transient(), 0, 0, 2, 1, "payload");
        let session = DragResizeSession::source_drag(
            source_item,
            PxRect::new(0.0, 0.0, 80.0, 40.0),
            PxPoint::new(10.0, 10.0),
        );
        grid.drag_enter(&session, &mut placeholder, PxPoint::new(350.0, 50.0));

        let outcome = grid
            .drop_commit(&session, PxPoint::new(565.0, 150.0))
            .unwrap();

        let dropped = outcome.dropped.expect("transient drop reports an item");
        assert!(!dropped.id.is_transient());
        assert_eq!(dropped.rect(), CellRect::new(6, 2, 2, 1));
        assert_eq!(grid.items().len(), 1);
        assert_eq!(grid.items()[0].id, dropped.id);
        assert!(!grid.is_dragging());
    }

    #[test]
    fn commit_reports_cross_grid_drops_with_the_session_item() {
        let mut grid = grid();
        let mut placeholder = Placeholder::new();
        let moved = item("a", 3, 1, 2, 1);
        let origin = GridId::new(9).unwrap();
        let mut session = drag_session(Some(origin), moved, CellOffset::ZERO);
        session.current_grid = Some(grid.id());

        grid.drag_enter(&session, &mut placeholder, PxPoint::new(350.0, 50.0));
        let outcome = grid
            .drop_commit(&session, PxPoint::new(350.0, 50.0))
            .unwrap();

        let dropped = outcome.dropped.expect("cross-grid drop reports an item");
        assert_eq!(dropped.id, ItemId::new("a"));
        // The report carries the gesture-start snapshot, not the drop cell.
        assert_eq!(dropped.rect(), CellRect::new(3, 1, 2, 1));
        assert_eq!(grid.items()[0].rect(), CellRect::new(4, 1, 2, 1));
    }

    #[test]
    fn same_grid_commit_reports_no_drop() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 1, 1, 2, 1)]).unwrap();
        let mut placeholder = Placeholder::new();
        let mut session = drag_session(Some(grid.id()), item("a", 1, 1, 2, 1), CellOffset::ZERO);
        session.current_grid = Some(grid.id());

        grid.drag_enter(&session, &mut placeholder, PxPoint::new(50.0, 50.0));
        grid.drag_move(&session, PxPoint::new(565.0, 50.0));
        let outcome = grid.drop_commit(&session, PxPoint::new(565.0, 50.0)).unwrap();

        assert!(outcome.dropped.is_none());
        assert_eq!(grid.items()[0].rect(), CellRect::new(6, 1, 2, 1));
    }

    #[test]
    fn cancel_drag_restores_the_origin_geometry() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 1, 1, 2, 1)]).unwrap();
        let mut placeholder = Placeholder::new();
        let session = drag_session(Some(grid.id()), item("a", 1, 1, 2, 1), CellOffset::ZERO);

        grid.drag_enter(&session, &mut placeholder, PxPoint::new(50.0, 50.0));
        grid.drag_move(&session, PxPoint::new(565.0, 250.0));
        let changed = grid.cancel_drag(&session);

        assert!(!changed);
        assert_eq!(grid.live_items()[0].rect(), CellRect::new(1, 1, 2, 1));
        assert!(!grid.is_dragging());
    }

    #[test]
    fn cancel_drag_drops_a_provisional_in_a_foreign_grid() {
        let mut grid = grid();
        let mut placeholder = Placeholder::new();
        let origin = GridId::new(9).unwrap();
        let session = drag_session(Some(origin), item("a", 1, 1, 2, 1), CellOffset::ZERO);

        grid.drag_enter(&session, &mut placeholder, PxPoint::new(350.0, 50.0));
        assert_eq!(grid.items().len(), 1);

        let changed = grid.cancel_drag(&session);
        assert!(changed);
        assert!(grid.items().is_empty());
    }

    #[test]
    fn restore_item_readds_or_snaps_back() {
        let mut grid = grid();
        let snapshot = item("a", 2, 2, 2, 1);

        assert!(grid.restore_item(&snapshot));
        assert_eq!(grid.items().len(), 1);

        grid.live[0].set_rect(CellRect::new(5, 1, 2, 1));
        assert!(!grid.restore_item(&snapshot));
        assert_eq!(grid.live_items()[0].rect(), CellRect::new(2, 2, 2, 1));
    }

    #[test]
    fn resize_tick_steps_the_live_footprint_and_placeholder() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 3, 1, 2, 1)]).unwrap();
        let mut placeholder = Placeholder::new();

        let (snapshot, anchor) = grid
            .begin_resize(&ItemId::new("a"), ResizeHandle::Left)
            .unwrap();
        assert_eq!(snapshot.rect(), CellRect::new(3, 1, 2, 1));
        // Columns 3..=4: origin 2*(108), width 2*100 + 8.
        assert_eq!(anchor, PxRect::new(216.0, 0.0, 208.0, 100.0));
        placeholder.show(anchor.size(), anchor.origin());

        // Pointer over column 4 shrinks the span to one column, pinning the
        // right edge: width 1, x 4.
        grid.resize_tick(PxPoint::new(350.0, 50.0), ScrollOffset::ZERO, &mut placeholder);
        assert_eq!(grid.live_items()[0].rect(), CellRect::new(4, 1, 1, 1));

        let ended = grid.end_resize().unwrap();
        assert_eq!(ended.unwrap()[0].rect(), CellRect::new(4, 1, 1, 1));
        assert!(!grid.is_resizing());
    }

    #[test]
    fn cancel_resize_restores_the_initial_footprint() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 3, 1, 2, 1)]).unwrap();
        let mut placeholder = Placeholder::new();

        grid.begin_resize(&ItemId::new("a"), ResizeHandle::Right).unwrap();
        grid.resize_tick(PxPoint::new(1000.0, 50.0), ScrollOffset::ZERO, &mut placeholder);
        assert_ne!(grid.live_items()[0].rect(), CellRect::new(3, 1, 2, 1));

        assert!(grid.cancel_resize());
        assert_eq!(grid.live_items()[0].rect(), CellRect::new(3, 1, 2, 1));
        assert!(!grid.cancel_resize());
    }

    #[test]
    fn validate_catches_count_mismatch() {
        let mut grid = grid();
        grid.set_items(vec![item("a", 1, 1, 1, 1)]).unwrap();
        grid.live.push(item("b", 2, 1, 1, 1));

        assert_eq!(
            grid.validate(),
            Err(GridError::ItemCountMismatch {
                items: 1,
                elements: 2
            })
        );
    }
}
