#![forbid(unsafe_code)]

//! Single owner of every grid, drag source, and gesture.
//!
//! A [`Stage`] is the host-facing surface of the crate. The host pushes
//! layout facts in (grid bounds, scroll offsets, measured row heights) and
//! feeds it raw pointer input; each call hands back the [`GridEvent`]s it
//! produced, in emission order. Nothing inside holds a reference to
//! anything outside: grids, sources, the session, and the placeholder all
//! live here and are reached by id.
//!
//! Pointer input is serialized: downs start a gesture only while no session
//! is active, moves are throttled and routed to the session's current grid,
//! and an up (or cancel) always ends whatever is running. Anomalous input,
//! a move without a session, a down on an unregistered source, an up that
//! races a removed grid, is ignored rather than reported; only host
//! lifecycle bugs (duplicate registration, duplicate item ids) surface as
//! errors.

use std::fmt;
use std::time::Instant;

use ahash::AHashMap;
use griddle_core::event::PointerEvent;
use griddle_core::geometry::{CellOffset, PxPoint, PxRect, ScrollOffset};
use griddle_core::item::{Item, ItemId};
use griddle_layout::options::{GridOptions, OptionsError};
use griddle_layout::resize::ResizeHandle;

use crate::coordinator::GestureCoordinator;
use crate::events::GridEvent;
use crate::grid::{GridContainer, GridError};
use crate::item_element::{GestureIntent, ItemElement, PointerDownTarget};
use crate::placeholder::Placeholder;
use crate::registry::{GridId, GridRegistry, IdMinter, RegistryError, SourceId};
use crate::session::DragResizeSession;
use crate::source::DragSource;

/// Errors surfaced by stage operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StageError {
    /// Grid options failed validation.
    Options(OptionsError),
    /// A registration-protocol violation.
    Registry(RegistryError),
    /// A grid invariant violation.
    Grid(GridError),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(err) => err.fmt(f),
            Self::Registry(err) => err.fmt(f),
            Self::Grid(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Options(err) => Some(err),
            Self::Registry(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<OptionsError> for StageError {
    fn from(err: OptionsError) -> Self {
        Self::Options(err)
    }
}

impl From<RegistryError> for StageError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<GridError> for StageError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// The toolkit's root object.
#[derive(Debug)]
pub struct Stage<T> {
    registry: GridRegistry,
    grids: AHashMap<GridId, GridContainer<T>>,
    sources: AHashMap<SourceId, DragSource<T>>,
    coordinator: GestureCoordinator<T>,
    scroll: ScrollOffset,
    minter: IdMinter,
}

impl<T> Stage<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: GridRegistry::new(),
            grids: AHashMap::new(),
            sources: AHashMap::new(),
            coordinator: GestureCoordinator::new(),
            scroll: ScrollOffset::ZERO,
            minter: IdMinter::new(),
        }
    }

    /// A mounted grid, by id.
    #[must_use]
    pub fn grid(&self, id: GridId) -> Option<&GridContainer<T>> {
        self.grids.get(&id)
    }

    /// Committed items of a grid.
    #[must_use]
    pub fn items(&self, id: GridId) -> Option<&[Item<T>]> {
        self.grids.get(&id).map(GridContainer::items)
    }

    /// Live element-layer items of a grid: what to render this tick.
    #[must_use]
    pub fn live_items(&self, id: GridId) -> Option<&[Item<T>]> {
        self.grids.get(&id).map(GridContainer::live_items)
    }

    /// Pixel rectangle of one live item.
    #[must_use]
    pub fn item_rect(&self, id: GridId, item: &ItemId) -> Option<PxRect> {
        self.grids.get(&id)?.item_rect(item)
    }

    /// A registered drag source, by id.
    #[must_use]
    pub fn drag_source(&self, id: SourceId) -> Option<&DragSource<T>> {
        self.sources.get(&id)
    }

    /// The shared placeholder ghost.
    #[must_use]
    pub fn placeholder(&self) -> &Placeholder {
        self.coordinator.placeholder()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragResizeSession<T>> {
        self.coordinator.session()
    }

    /// Last pushed window scroll offset.
    #[inline]
    #[must_use]
    pub const fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Push the window scroll offset used to place the placeholder in
    /// document coordinates.
    pub fn set_scroll(&mut self, scroll: ScrollOffset) {
        self.scroll = scroll;
    }

    /// Push new viewport bounds for a grid.
    pub fn set_grid_bounds(&mut self, id: GridId, bounds: PxRect) -> Result<(), StageError> {
        self.grid_mut(id)?.set_bounds(bounds);
        Ok(())
    }

    /// Push measured per-row heights for a grid; empty restores uniform
    /// rows.
    pub fn set_grid_row_heights(
        &mut self,
        id: GridId,
        heights: Vec<f64>,
    ) -> Result<(), StageError> {
        self.grid_mut(id)?.set_row_heights(heights);
        Ok(())
    }

    /// Unregister a grid and drop its state.
    ///
    /// A gesture in flight degrades gracefully: the removed grid simply
    /// stops matching hit-tests.
    pub fn remove_grid(&mut self, id: GridId) -> Result<(), StageError> {
        self.registry.unregister_grid(id)?;
        self.grids.remove(&id);
        Ok(())
    }

    /// Unregister a drag source. Unknown ids are ignored.
    pub fn remove_drag_source(&mut self, id: SourceId) {
        self.registry.unregister_source(id);
        self.sources.remove(&id);
    }

    fn grid_mut(&mut self, id: GridId) -> Result<&mut GridContainer<T>, StageError> {
        self.grids
            .get_mut(&id)
            .ok_or(StageError::Registry(RegistryError::UnknownGrid { id }))
    }

    /// Registered grids in registration order, paired with their bounds.
    fn hit_slice(&self) -> Vec<(GridId, PxRect)> {
        self.registry
            .grids()
            .iter()
            .filter_map(|id| self.grids.get(id).map(|grid| (*id, grid.bounds())))
            .collect()
    }
}

impl<T: Clone> Stage<T> {
    /// Mount a grid and return its minted id.
    pub fn add_grid(&mut self, options: GridOptions) -> Result<GridId, StageError> {
        let id = self.minter.next_grid();
        let grid = GridContainer::new(id, options)?;
        self.registry.register_grid(id)?;
        self.grids.insert(id, grid);
        Ok(id)
    }

    /// Register a freestanding drag source and return its minted id.
    pub fn add_drag_source(&mut self, source: DragSource<T>) -> SourceId {
        let id = self.minter.next_source();
        self.registry.register_source(id);
        self.sources.insert(id, source);
        id
    }

    /// Replace a grid's committed item list.
    pub fn set_items(&mut self, id: GridId, items: Vec<Item<T>>) -> Result<(), StageError> {
        self.grid_mut(id)?.set_items(items)?;
        Ok(())
    }

    /// Pointer-down on an item element.
    ///
    /// Resolves the element's gesture intent (drag-handle wiring, resize
    /// handles, button state) and starts the matching session. Ignored
    /// while another session runs.
    pub fn item_pointer_down(
        &mut self,
        grid: GridId,
        element: &ItemElement,
        event: &PointerEvent,
        target: PointerDownTarget,
    ) -> Vec<GridEvent<T>> {
        match element.intent(event, target) {
            Some(GestureIntent::Drag) => {
                self.begin_item_drag(grid, &element.item_id, event.position);
            }
            Some(GestureIntent::Resize(handle)) => {
                self.begin_item_resize(grid, &element.item_id, handle, event.position);
            }
            None => {}
        }
        Vec::new()
    }

    /// Pointer-down on one of an item's resize handles.
    pub fn resize_pointer_down(
        &mut self,
        grid: GridId,
        element: &ItemElement,
        handle: ResizeHandle,
        event: &PointerEvent,
    ) -> Vec<GridEvent<T>> {
        self.item_pointer_down(grid, element, event, PointerDownTarget::Resize(handle))
    }

    /// Pointer-down on a freestanding drag source.
    ///
    /// `anchor` is the source element's current viewport rectangle; its
    /// size becomes the placeholder's natural size outside grids.
    pub fn source_pointer_down(
        &mut self,
        source: SourceId,
        event: &PointerEvent,
        anchor: PxRect,
    ) -> Vec<GridEvent<T>> {
        if !event.primary_engaged() {
            return Vec::new();
        }
        if !self.registry.contains_source(source) {
            return Vec::new();
        }
        let Some(definition) = self.sources.get(&source) else {
            return Vec::new();
        };
        if !definition.accepts_drag() {
            return Vec::new();
        }
        let item = definition.grab_item();
        self.coordinator
            .start_source_drag(item, anchor, event.position, self.scroll);
        Vec::new()
    }

    /// Pointer-move at `now`.
    ///
    /// Moves are coalesced: at most one sample per throttle interval is
    /// processed, the newest held in between. Ignored while no session is
    /// active.
    pub fn pointer_move(&mut self, event: &PointerEvent, now: Instant) -> Vec<GridEvent<T>> {
        match self.coordinator.offer_move(*event, now) {
            Some(admitted) => self.process_move(admitted),
            None => Vec::new(),
        }
    }

    /// Drain a held move sample on the host's tick.
    pub fn poll_moves(&mut self, now: Instant) -> Vec<GridEvent<T>> {
        match self.coordinator.poll_move(now) {
            Some(admitted) => self.process_move(admitted),
            None => Vec::new(),
        }
    }

    /// Pointer-up: commit and end the active gesture.
    ///
    /// Any move still held by the throttle is dropped, the placeholder is
    /// hidden, and the engaged grid commits. Ignored without a session.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Result<Vec<GridEvent<T>>, StageError> {
        let Some(session) = self.coordinator.finish() else {
            return Ok(Vec::new());
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "stage.pointer_up",
            dragging = session.dragging(),
            origin = session.origin_grid.map_or(0, GridId::get),
            current = session.current_grid.map_or(0, GridId::get)
        )
        .entered();

        let pointer = event.position;
        let mut events = Vec::new();

        if session.dragging() {
            if let Some(gid) = session.current_grid
                && let Some(grid) = self.grids.get_mut(&gid)
            {
                let outcome = grid.drop_commit(&session, pointer)?;
                if let Some(item) = outcome.dropped {
                    events.push(GridEvent::ItemDropped {
                        grid: gid,
                        item,
                        pointer,
                    });
                }
                events.push(GridEvent::ItemsChanged {
                    grid: gid,
                    items: outcome.items,
                });
            }
        } else if let Some(gid) = session.origin_grid
            && let Some(grid) = self.grids.get_mut(&gid)
            && let Some(items) = grid.end_resize()?
        {
            events.push(GridEvent::ItemsChanged { grid: gid, items });
        }

        Ok(events)
    }

    /// Abort the active gesture, restoring every grid it touched.
    ///
    /// The dragged item snaps back to its gesture-start geometry (or is
    /// re-added to its origin grid), provisional copies are removed, and a
    /// resize reverts to the initial footprint.
    pub fn cancel(&mut self) -> Vec<GridEvent<T>> {
        let Some(session) = self.coordinator.finish() else {
            return Vec::new();
        };

        let mut events = Vec::new();
        events.push(GridEvent::GestureCancelled {
            item: session.item.clone(),
        });

        if session.dragging() {
            if let Some(gid) = session.current_grid
                && let Some(grid) = self.grids.get_mut(&gid)
                && grid.cancel_drag(&session)
            {
                events.push(GridEvent::ItemsChanged {
                    grid: gid,
                    items: grid.items().to_vec(),
                });
            }
            if let Some(gid) = session.origin_grid
                && session.current_grid != Some(gid)
                && let Some(grid) = self.grids.get_mut(&gid)
                && grid.restore_item(&session.item)
            {
                events.push(GridEvent::ItemsChanged {
                    grid: gid,
                    items: grid.items().to_vec(),
                });
            }
        } else if let Some(gid) = session.origin_grid
            && let Some(grid) = self.grids.get_mut(&gid)
        {
            grid.cancel_resize();
        }

        events
    }

    fn begin_item_drag(&mut self, grid_id: GridId, item_id: &ItemId, pointer: PxPoint) {
        let Some(grid) = self.grids.get(&grid_id) else {
            return;
        };
        let Some(item) = grid.live_item(item_id).cloned() else {
            return;
        };
        let Some(anchor) = grid.item_rect(item_id) else {
            return;
        };

        let cell = grid.metrics().pointer_cell(pointer);
        let grab_offset = CellOffset::new(item.x - cell.col, item.y - cell.row);
        let started = self
            .coordinator
            .start_drag(grid_id, item, anchor, pointer, grab_offset, self.scroll);

        // The pointer is already inside the origin grid, so no enter will
        // fire for it; engage it here so live moves land before the first
        // boundary transition.
        if started && let Some(grid) = self.grids.get_mut(&grid_id) {
            grid.begin_drag();
        }
    }

    fn begin_item_resize(
        &mut self,
        grid_id: GridId,
        item_id: &ItemId,
        handle: ResizeHandle,
        pointer: PxPoint,
    ) {
        // Gate before touching grid state: begin_resize records gesture
        // state on the grid, which must not happen while a session runs.
        if self.coordinator.session().is_some() {
            return;
        }
        let Some(grid) = self.grids.get_mut(&grid_id) else {
            return;
        };
        let Some((item, anchor)) = grid.begin_resize(item_id, handle) else {
            return;
        };
        self.coordinator
            .start_resize(grid_id, item, anchor, pointer, self.scroll);
    }

    fn process_move(&mut self, event: PointerEvent) -> Vec<GridEvent<T>> {
        let pointer = event.position;
        let hits = self.hit_slice();
        let Some(transition) = self.coordinator.move_tick(pointer, self.scroll, &hits) else {
            return Vec::new();
        };

        let mut events = Vec::new();

        if let Some(gid) = transition.left
            && let Some(grid) = self.grids.get_mut(&gid)
            && let Some((session, placeholder)) = self.coordinator.parts()
        {
            let removed = grid.drag_leave(session, placeholder);
            events.push(GridEvent::DragLeave {
                grid: gid,
                item: session.item.clone(),
                pointer,
            });
            if removed {
                events.push(GridEvent::ItemsChanged {
                    grid: gid,
                    items: grid.items().to_vec(),
                });
            }
        }

        if let Some(gid) = transition.entered
            && let Some(grid) = self.grids.get_mut(&gid)
            && let Some((session, placeholder)) = self.coordinator.parts()
        {
            let appended = grid.drag_enter(session, placeholder, pointer);
            events.push(GridEvent::DragEnter {
                grid: gid,
                item: session.item.clone(),
                pointer,
            });
            if appended {
                events.push(GridEvent::ItemsChanged {
                    grid: gid,
                    items: grid.items().to_vec(),
                });
            }
        }

        // The admitted move itself: the engaged grid tracks the pointer.
        if let Some((session, placeholder)) = self.coordinator.parts() {
            if session.dragging() {
                if let Some(gid) = session.current_grid
                    && let Some(grid) = self.grids.get_mut(&gid)
                {
                    grid.drag_move(session, pointer);
                }
            } else if let Some(gid) = session.origin_grid
                && let Some(grid) = self.grids.get_mut(&gid)
            {
                grid.resize_tick(pointer, self.scroll, placeholder);
            }
        }

        events
    }
}

impl<T> Default for Stage<T> {
    fn default() -> Self {
        Self::new()
    }
}
