#![forbid(unsafe_code)]

//! The drop placeholder: a ghost rectangle tracking the active gesture.
//!
//! Exactly one placeholder exists per stage and its lifecycle is bound to
//! the session: shown at gesture start, resized and moved while the gesture
//! runs, hidden on pointer-up or cancel. Hiding keeps the last rectangle so
//! a render layer can fade it out in place.

use griddle_core::geometry::{PxPoint, PxRect, PxSize};

/// Ghost rectangle mirroring the session's target geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placeholder {
    rect: PxRect,
    visible: bool,
}

impl Placeholder {
    /// Hidden placeholder with an empty rectangle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rect: PxRect::new(0.0, 0.0, 0.0, 0.0),
            visible: false,
        }
    }

    /// Show the placeholder at `origin` with `size`.
    pub fn show(&mut self, size: PxSize, origin: PxPoint) {
        self.rect = PxRect::from_origin_size(origin, size);
        self.visible = true;
    }

    /// Change the placeholder's size, keeping its position.
    pub fn resize(&mut self, size: PxSize) {
        self.rect.width = size.width;
        self.rect.height = size.height;
    }

    /// Move the placeholder's top-left corner, keeping its size.
    pub fn move_to(&mut self, origin: PxPoint) {
        self.rect.x = origin.x;
        self.rect.y = origin.y;
    }

    /// Hide the placeholder. The rectangle is retained.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Current rectangle, visible or not.
    #[inline]
    #[must_use]
    pub const fn rect(&self) -> PxRect {
        self.rect
    }

    /// Current size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> PxSize {
        self.rect.size()
    }

    /// Whether a gesture is currently showing the placeholder.
    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}
