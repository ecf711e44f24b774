#![forbid(unsafe_code)]

//! The rectangular entity placed on a grid.
//!
//! An [`Item`] is a plain value: 1-based cell coordinates, a span, an id,
//! and an opaque payload the engine never interprets. Bounds enforcement is
//! the grid container's job — an item never rejects coordinates on its own.
//!
//! # Identity
//!
//! Ids are strings. Hosts may assign their own; [`ItemId::generate`] mints a
//! process-unique one otherwise. One id is reserved: the transient sentinel
//! carried by a freestanding draggable while it is in flight. Dropping such
//! an item into a grid replaces the sentinel with a freshly generated id.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::CellRect;

/// Reserved id for a freestanding draggable in flight.
const TRANSIENT_ID: &str = "drag-item";

/// Monotonic source for generated ids.
static NEXT_GENERATED: AtomicU64 = AtomicU64::new(0);

/// Stable string identifier for items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from a host-supplied string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a process-unique id (`item-0`, `item-1`, ...).
    #[must_use]
    pub fn generate() -> Self {
        let n = NEXT_GENERATED.fetch_add(1, Ordering::Relaxed);
        Self(format!("item-{n}"))
    }

    /// The reserved in-flight id used by freestanding drag sources.
    #[must_use]
    pub fn transient() -> Self {
        Self(TRANSIENT_ID.to_string())
    }

    /// Whether this is the reserved in-flight id.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.0 == TRANSIENT_ID
    }

    /// Borrow the raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One placed rectangle: id, 1-based cell geometry, opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    pub id: ItemId,
    /// Leftmost occupied column (1-based).
    pub x: i32,
    /// Topmost occupied row (1-based).
    pub y: i32,
    /// Columns spanned (≥ 1).
    pub width: i32,
    /// Rows spanned (≥ 1).
    pub height: i32,
    /// Host payload, never interpreted by the engine.
    pub data: T,
}

impl<T> Item<T> {
    /// Create an item with an explicit id.
    #[must_use]
    pub fn new(id: ItemId, x: i32, y: i32, width: i32, height: i32, data: T) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            data,
        }
    }

    /// Create an item with a generated id.
    #[must_use]
    pub fn auto(x: i32, y: i32, width: i32, height: i32, data: T) -> Self {
        Self::new(ItemId::generate(), x, y, width, height, data)
    }

    /// Footprint in cell space.
    #[must_use]
    pub const fn rect(&self) -> CellRect {
        CellRect::new(self.x, self.y, self.width, self.height)
    }

    /// Replace the footprint, keeping id and payload.
    pub fn set_rect(&mut self, rect: CellRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }
}

impl<T: Clone> Item<T> {
    /// Copy of this item carrying a freshly generated id.
    #[must_use]
    pub fn with_fresh_id(&self) -> Self {
        Self::new(
            ItemId::generate(),
            self.x,
            self.y,
            self.width,
            self.height,
            self.data.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert!(!a.is_transient());
    }

    #[test]
    fn transient_id_round_trips() {
        let id = ItemId::transient();
        assert!(id.is_transient());
        assert!(ItemId::new(id.as_str()).is_transient());
    }

    #[test]
    fn clone_preserves_every_field() {
        let item = Item::new(ItemId::new("a"), 2, 3, 4, 5, "payload");
        let copy = item.clone();
        assert_eq!(copy, item);
    }

    #[test]
    fn fresh_id_copy_changes_only_the_id() {
        let item = Item::new(ItemId::new("a"), 2, 3, 4, 5, String::from("payload"));
        let copy = item.with_fresh_id();
        assert_ne!(copy.id, item.id);
        assert_eq!(copy.rect(), item.rect());
        assert_eq!(copy.data, item.data);
    }

    #[test]
    fn rect_round_trips_through_set_rect() {
        let mut item = Item::new(ItemId::new("a"), 1, 1, 1, 1, ());
        item.set_rect(CellRect::new(4, 2, 3, 2));
        assert_eq!(item.rect(), CellRect::new(4, 2, 3, 2));
    }
}
