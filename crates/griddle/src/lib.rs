#![forbid(unsafe_code)]

//! Griddle public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! Most hosts only need a [`Stage`]: mount grids on it, feed it pointer
//! input, and apply the [`GridEvent`]s it returns.

// --- Core re-exports --------------------------------------------------------

pub use griddle_core::event::{PointerButton, PointerButtons, PointerEvent};
pub use griddle_core::geometry::{
    CellOffset, CellPoint, CellRect, PxOffset, PxPoint, PxRect, PxSize, ScrollOffset,
};
pub use griddle_core::item::{Item, ItemId};
pub use griddle_core::throttle::{DEFAULT_MOVE_INTERVAL, MoveThrottle};

// --- Layout re-exports ------------------------------------------------------

pub use griddle_layout::{GridHeight, GridMetrics, GridOptions, OptionsError, ResizeHandle};

// --- Widget re-exports ------------------------------------------------------

pub use griddle_widgets::{
    DragResizeSession, DragSource, DropOutcome, GestureCoordinator, GestureIntent, GridContainer,
    GridError, GridEvent, GridId, GridRegistry, IdMinter, ItemElement, MoveTransition, Placeholder,
    PointerDownTarget, RegistryError, SessionMode, SourceId, Stage, StageError,
};

/// Standard result type for griddle APIs.
pub type Result<T> = std::result::Result<T, StageError>;

// --- Prelude ----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DragSource, GridEvent, GridId, GridOptions, Item, ItemElement, ItemId, PointerDownTarget,
        PointerEvent, PxPoint, PxRect, ResizeHandle, Result, ScrollOffset, SourceId, Stage,
        StageError,
    };

    pub use crate::{core, layout, widgets};
}

pub use griddle_core as core;
pub use griddle_layout as layout;
pub use griddle_widgets as widgets;
