#![cfg_attr(not(test), forbid(unsafe_code))]

//! Core primitives for the griddle drag-and-drop grid layout engine.
//!
//! This crate holds the vocabulary shared by every other griddle crate:
//!
//! - [`geometry`]: pixel-space and cell-space primitives plus clamping.
//! - [`event`]: pointer events as delivered by the host UI layer.
//! - [`item`]: the rectangular entity placed on a grid, with an opaque
//!   payload the engine never interprets.
//! - [`throttle`]: latest-wins coalescing of the global pointer-move stream.
//!
//! Everything here is host-agnostic: no windowing, no DOM, no timers. The
//! host pushes pointer samples and scroll offsets in; geometry comes out.

pub mod event;
pub mod geometry;
pub mod item;
pub mod throttle;

pub use event::{PointerButton, PointerButtons, PointerEvent};
pub use geometry::{
    CellOffset, CellPoint, CellRect, PxOffset, PxPoint, PxRect, PxSize, ScrollOffset, clamp,
};
pub use item::{Item, ItemId};
pub use throttle::MoveThrottle;
