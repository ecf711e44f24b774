#![forbid(unsafe_code)]

//! Freestanding drag sources: draggables that live outside any grid.
//!
//! A source describes the item a grid receives when the source is dropped
//! into it: a cell span plus a payload. While in flight the item carries the
//! reserved transient id; the drop commit replaces it with a generated one.

use griddle_core::item::{Item, ItemId};

/// A draggable element outside any grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource<T> {
    /// Columns the spawned item spans.
    pub width: i32,
    /// Rows the spawned item spans.
    pub height: i32,
    /// Payload copied into the spawned item.
    pub data: T,
    /// Whether dragging is enabled at all.
    pub draggable: bool,
    /// Disabled sources ignore pointer-downs without being unregistered.
    pub disabled: bool,
}

impl<T> DragSource<T> {
    /// Source spawning a `width x height` item carrying `data`.
    #[must_use]
    pub fn new(width: i32, height: i32, data: T) -> Self {
        Self {
            width,
            height,
            data,
            draggable: true,
            disabled: false,
        }
    }

    /// Set whether dragging is enabled.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether a pointer-down on this source may start a drag.
    #[must_use]
    pub const fn accepts_drag(&self) -> bool {
        self.draggable && !self.disabled
    }
}

impl<T: Clone> DragSource<T> {
    /// The in-flight item spawned when this source is grabbed.
    ///
    /// Position is meaningless until a grid computes one on enter.
    #[must_use]
    pub fn grab_item(&self) -> Item<T> {
        Item::new(
            ItemId::transient(),
            0,
            0,
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
    fn new_sources_accept_drags() {
        let source = DragSource::new(2, 1, "payload");
        assert!(source.accepts_drag());
    }

    #[test]
    fn disabled_or_undraggable_sources_reject_drags() {
        assert!(!DragSource::new(1, 1, ()).with_disabled(true).accepts_drag());
        assert!(
            !DragSource::new(1, 1, ())
                .with_draggable(false)
                .accepts_drag()
        );
    }

    #[test]
    fn grabbed_items_carry_the_transient_id_and_span() {
        let item = DragSource::new(3, 2, String::from("p")).grab_item();
        assert!(item.id.is_transient());
        assert_eq!((item.x, item.y), (0, 0));
        assert_eq!((item.width, item.height), (3, 2));
        assert_eq!(item.data, "p");
    }
}
