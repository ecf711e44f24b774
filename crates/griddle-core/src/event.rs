#![forbid(unsafe_code)]

//! Pointer events as delivered by the host UI layer.
//!
//! The engine consumes raw pointer samples (`pointerdown` / `pointermove` /
//! `pointerup` in browser terms) and nothing else. Conventions:
//!
//! - Positions are viewport pixel coordinates (`clientX`/`clientY`).
//! - `button` identifies the button that changed state on a down/up event.
//! - `buttons` is the bitmask of buttons held while the event fired; move
//!   events carry a meaningful mask and an arbitrary `button`.
//! - Gestures start only from the primary button (see
//!   [`PointerEvent::primary_engaged`]).

use bitflags::bitflags;

use crate::geometry::PxPoint;

/// The button that changed state on a pointer-down or pointer-up event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary button (usually the left mouse button, or a touch contact).
    #[default]
    Primary,

    /// Secondary button (usually the right mouse button).
    Secondary,

    /// Auxiliary button (usually the middle or wheel button).
    Auxiliary,
}

bitflags! {
    /// Buttons held down while a pointer event fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// No buttons held.
        const NONE      = 0b0000;
        /// Primary button held.
        const PRIMARY   = 0b0001;
        /// Secondary button held.
        const SECONDARY = 0b0010;
        /// Auxiliary button held.
        const AUXILIARY = 0b0100;
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// One pointer sample from the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Viewport position of the pointer.
    pub position: PxPoint,
    /// Button that changed state (down/up events).
    pub button: PointerButton,
    /// Buttons held while the event fired.
    pub buttons: PointerButtons,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(position: PxPoint, button: PointerButton, buttons: PointerButtons) -> Self {
        Self {
            position,
            button,
            buttons,
        }
    }

    /// Primary-button press at `position`: the shape every gesture starts from.
    #[must_use]
    pub const fn primary_down(position: PxPoint) -> Self {
        Self::new(position, PointerButton::Primary, PointerButtons::PRIMARY)
    }

    /// Move sample at `position` (no button change).
    #[must_use]
    pub const fn moved(position: PxPoint) -> Self {
        Self::new(position, PointerButton::Primary, PointerButtons::PRIMARY)
    }

    /// Release sample at `position`.
    #[must_use]
    pub const fn released(position: PxPoint) -> Self {
        Self::new(position, PointerButton::Primary, PointerButtons::NONE)
    }

    /// Same event with a different button identity.
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Same event with a different held-buttons mask.
    #[must_use]
    pub const fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Gesture-start gate: the changed button is primary, or the held mask is
    /// exactly the primary button. Anything else is ignored by gesture code.
    #[must_use]
    pub fn primary_engaged(&self) -> bool {
        matches!(self.button, PointerButton::Primary) || self.buttons == PointerButtons::PRIMARY
    }
}
