#![forbid(unsafe_code)]

//! The single process-wide gesture session.
//!
//! A [`DragResizeSession`] is created when a drag or resize starts, mutated
//! only by the coordinator while the pointer moves, and destroyed on
//! pointer-up or cancel. At most one session exists at a time; concurrent
//! start attempts are rejected upstream.

use griddle_core::geometry::{CellOffset, PxOffset, PxPoint, PxRect, PxSize};
use griddle_core::item::Item;

use crate::registry::GridId;

/// Which kind of gesture the session tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Moving an item (or a freestanding source) across grids.
    Drag,
    /// Resizing an item in place. Never changes grids.
    Resize,
}

/// State of the active drag or resize gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragResizeSession<T> {
    pub mode: SessionMode,
    /// Grid the item was grabbed from; `None` for freestanding sources.
    /// Resize sessions carry the resizing grid here so the commit routes
    /// back to it.
    pub origin_grid: Option<GridId>,
    /// Snapshot of the item at gesture start. Its geometry is the
    /// pre-gesture geometry used for cancel restoration.
    pub item: Item<T>,
    /// Placeholder corner minus pointer position at grab time.
    pub drag_offset: PxOffset,
    /// Item cell minus pointer cell at grab time; zero for freestanding
    /// sources and resizes.
    pub grab_offset: CellOffset,
    /// Grid currently under the pointer, if any.
    pub current_grid: Option<GridId>,
    /// Grid the pointer most recently left.
    pub previous_grid: Option<GridId>,
    /// Natural pixel size of a freestanding source element, used to restore
    /// the placeholder when the pointer leaves a grid.
    pub source_size: Option<PxSize>,
}

impl<T> DragResizeSession<T> {
    /// Session for an item grabbed from a grid.
    ///
    /// The pointer starts inside the origin grid, so it is also the initial
    /// current grid; the first boundary transition out of it fires a leave.
    #[must_use]
    pub fn drag(
        origin_grid: Option<GridId>,
        item: Item<T>,
        anchor: PxRect,
        pointer: PxPoint,
        grab_offset: CellOffset,
    ) -> Self {
        Self {
            mode: SessionMode::Drag,
            origin_grid,
            item,
            drag_offset: anchor.origin().offset_from(pointer),
            grab_offset,
            current_grid: origin_grid,
            previous_grid: None,
            source_size: None,
        }
    }

    /// Session for a freestanding drag source.
    #[must_use]
    pub fn source_drag(item: Item<T>, anchor: PxRect, pointer: PxPoint) -> Self {
        Self {
            mode: SessionMode::Drag,
            origin_grid: None,
            item,
            drag_offset: anchor.origin().offset_from(pointer),
            grab_offset: CellOffset::ZERO,
            current_grid: None,
            previous_grid: None,
            source_size: Some(anchor.size()),
        }
    }

    /// Session for resizing an item in place.
    #[must_use]
    pub fn resize(origin_grid: GridId, item: Item<T>, anchor: PxRect, pointer: PxPoint) -> Self {
        Self {
            mode: SessionMode::Resize,
            origin_grid: Some(origin_grid),
            item,
            drag_offset: anchor.origin().offset_from(pointer),
            grab_offset: CellOffset::ZERO,
            current_grid: None,
            previous_grid: None,
            source_size: None,
        }
    }

    /// Whether this session moves an item across grids.
    #[inline]
    #[must_use]
    pub const fn dragging(&self) -> bool {
        matches!(self.mode, SessionMode::Drag)
    }
}
