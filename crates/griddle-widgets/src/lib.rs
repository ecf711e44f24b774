#![cfg_attr(not(test), forbid(unsafe_code))]

//! Gesture engine for the griddle drag-and-drop grid layout toolkit.
//!
//! The [`Stage`] owns everything: grids, freestanding drag sources, the
//! single gesture session, and the placeholder ghost. Hosts push layout
//! facts and raw pointer input in; every call returns the [`GridEvent`]s it
//! produced. There are no callbacks and no shared-state plumbing between
//! grids — items move across grid boundaries purely through the stage's
//! routing.
//!
//! - [`stage`]: the host-facing surface; input routing and id minting.
//! - [`grid`]: one grid's committed/live item lists and gesture handlers.
//! - [`coordinator`]: the session slot, placeholder, and move throttling.
//! - [`session`]: the per-gesture snapshot (grab geometry, grid tracking).
//! - [`item_element`]: pointer-down classification on item chrome.
//! - [`source`]: freestanding elements that mint new items when dragged.
//! - [`registry`]: grid/source id books and the registration protocol.
//! - [`placeholder`]: the drop-preview rectangle.
//! - [`events`]: typed notifications returned from stage calls.
//!
//! A drag, end to end: a pointer-down on an item element starts a session;
//! throttled moves hand the item across grids (leave, then enter, with a
//! provisional copy following the pointer); pointer-up commits the engaged
//! grid's live layout and reports the drop. A resize runs the same loop
//! with the item pinned to its grid, stepping its footprint cell by cell.

pub mod coordinator;
pub mod events;
pub mod grid;
pub mod item_element;
pub mod placeholder;
pub mod registry;
pub mod session;
pub mod source;
pub mod stage;

pub use coordinator::{GestureCoordinator, MoveTransition};
pub use events::GridEvent;
pub use grid::{DropOutcome, GridContainer, GridError};
pub use item_element::{GestureIntent, ItemElement, PointerDownTarget};
pub use placeholder::Placeholder;
pub use registry::{GridId, GridRegistry, IdMinter, RegistryError, SourceId};
pub use session::{DragResizeSession, SessionMode};
pub use source::DragSource;
pub use stage::{Stage, StageError};
