#![forbid(unsafe_code)]

//! Typed notifications returned from stage calls.
//!
//! Every inbound stage operation returns the [`GridEvent`]s it produced, in
//! emission order. There is no callback registration: the caller feeds input,
//! receives events, and queries state — all on one thread.
//!
//! # Invariants
//! 1. A cross-grid handoff produces exactly one `DragLeave` followed by
//!    exactly one `DragEnter`.
//! 2. `ItemsChanged` fires whenever a grid's committed item list changes
//!    structurally (provisional entry added or removed, drop commit, cancel
//!    restoration) — never for live-layer movement during a gesture.
//! 3. `ItemDropped` fires at most once per gesture, on pointer-up.

use griddle_core::geometry::PxPoint;
use griddle_core::item::Item;

use crate::registry::GridId;

/// A notification produced by one grid during gesture processing.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent<T> {
    /// The dragged item entered a grid's bounds.
    DragEnter {
        grid: GridId,
        item: Item<T>,
        pointer: PxPoint,
    },
    /// The dragged item left a grid's bounds.
    DragLeave {
        grid: GridId,
        item: Item<T>,
        pointer: PxPoint,
    },
    /// An item was dropped into a grid: either a freestanding source landed
    /// (the item carries its freshly generated id) or an item moved in from
    /// another grid (the item is the gesture-start snapshot).
    ItemDropped {
        grid: GridId,
        item: Item<T>,
        pointer: PxPoint,
    },
    /// A grid's committed item list changed; `items` is the new list.
    ItemsChanged { grid: GridId, items: Vec<Item<T>> },
    /// The active gesture was cancelled; `item` is the gesture-start
    /// snapshot whose geometry was restored.
    GestureCancelled { item: Item<T> },
}

impl<T> GridEvent<T> {
    /// Grid this event concerns, if any.
    #[must_use]
    pub fn grid(&self) -> Option<GridId> {
        match self {
            Self::DragEnter { grid, .. }
            | Self::DragLeave { grid, .. }
            | Self::ItemDropped { grid, .. }
            | Self::ItemsChanged { grid, .. } => Some(*grid),
            Self::GestureCancelled { .. } => None,
        }
    }
}
