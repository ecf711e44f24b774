#![forbid(unsafe_code)]

//! Gesture arming for one placed item element.
//!
//! An [`ItemElement`] is a thin adapter between the host's hit-testing and
//! the stage: it decides whether a pointer-down starts a drag, starts a
//! resize, or does nothing. It holds no geometry — the grid owns that and is
//! queried by item id.
//!
//! Arming rules:
//! - Gestures start only on a primary-button press.
//! - When the element declares dedicated drag handles, only those handles
//!   start a drag; a press on the body is inert. Without handles, the body
//!   itself starts the drag — but a press on a descendant element does not.
//! - A press on a resize handle starts a resize iff that handle is in the
//!   element's configured set.

use griddle_core::event::PointerEvent;
use griddle_core::item::ItemId;
use griddle_layout::resize::ResizeHandle;

/// Where a pointer-down landed, as classified by the host's hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDownTarget {
    /// The item element itself.
    Body,
    /// A descendant of the element that is not a handle.
    Descendant,
    /// One of the element's dedicated drag handles.
    DragHandle,
    /// One of the element's resize handles.
    Resize(ResizeHandle),
}

/// What a pointer-down on an item element should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    Drag,
    Resize(ResizeHandle),
}

/// Per-element gesture configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemElement {
    /// Id of the item this element renders.
    pub item_id: ItemId,
    drag_handle_count: usize,
    resize_handles: Vec<ResizeHandle>,
}

impl ItemElement {
    /// Element with no dedicated drag handles and the default resize handle
    /// set (bottom-left only).
    #[must_use]
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            drag_handle_count: 0,
            resize_handles: vec![ResizeHandle::BottomLeft],
        }
    }

    /// Declare dedicated drag handles. Any non-zero count makes the body
    /// inert for dragging.
    #[must_use]
    pub fn with_drag_handles(mut self, count: usize) -> Self {
        self.drag_handle_count = count;
        self
    }

    /// Replace the resize handle set.
    #[must_use]
    pub fn with_resize_handles(mut self, handles: impl Into<Vec<ResizeHandle>>) -> Self {
        self.resize_handles = handles.into();
        self
    }

    /// Number of dedicated drag handles.
    #[must_use]
    pub const fn drag_handle_count(&self) -> usize {
        self.drag_handle_count
    }

    /// Configured resize handles.
    #[must_use]
    pub fn resize_handles(&self) -> &[ResizeHandle] {
        &self.resize_handles
    }

    /// Classify a pointer-down. `None` means the press is ignored.
    #[must_use]
    pub fn intent(&self, event: &PointerEvent, target: PointerDownTarget) -> Option<GestureIntent> {
        if !event.primary_engaged() {
            return None;
        }

        match target {
            PointerDownTarget::Body => {
                (self.drag_handle_count == 0).then_some(GestureIntent::Drag)
            }
            PointerDownTarget::Descendant => None,
            PointerDownTarget::DragHandle => {
                (self.drag_handle_count > 0).then_some(GestureIntent::Drag)
            }
            PointerDownTarget::Resize(handle) => self
                .resize_handles
                .contains(&handle)
                .then_some(GestureIntent::Resize(handle)),
        }
    }
}
