#![forbid(unsafe_code)]

//! Process-wide gesture coordination.
//!
//! One coordinator owns the three pieces every gesture shares: the single
//! session slot (at most one drag or resize at a time), the placeholder
//! ghost, and the pointer-move throttle. Grids never talk to each other;
//! the stage routes between them using the transitions reported here.
//!
//! # Move tick
//!
//! A throttled move does two things for a drag session. First the pointer
//! is hit-tested against the registered grids in registration order: while
//! the current grid still contains the pointer nothing changes, otherwise
//! the session hands off (leave, then enter on the first matching grid).
//! Second the placeholder follows the pointer, offset by the in-element
//! grab position and the window scroll. Resize sessions skip both; their
//! placeholder is driven by the resizing grid's preview.

use std::time::{Duration, Instant};

use griddle_core::event::PointerEvent;
use griddle_core::geometry::{CellOffset, PxPoint, PxRect, ScrollOffset};
use griddle_core::item::Item;
use griddle_core::throttle::MoveThrottle;

use crate::placeholder::Placeholder;
use crate::registry::GridId;
use crate::session::DragResizeSession;

/// Grid handoff produced by one move tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveTransition {
    /// Grid the dragged item just left.
    pub left: Option<GridId>,
    /// Grid the dragged item just entered.
    pub entered: Option<GridId>,
}

impl MoveTransition {
    /// Whether this tick handed the item off at all.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.left.is_some() || self.entered.is_some()
    }
}

/// Owner of the session slot, placeholder, and move throttle.
#[derive(Debug, Clone)]
pub struct GestureCoordinator<T> {
    session: Option<DragResizeSession<T>>,
    placeholder: Placeholder,
    throttle: MoveThrottle,
}

impl<T> GestureCoordinator<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: None,
            placeholder: Placeholder::new(),
            throttle: MoveThrottle::new(),
        }
    }

    /// Coordinator with a custom move-coalescing interval.
    #[must_use]
    pub fn with_move_interval(interval: Duration) -> Self {
        Self {
            session: None,
            placeholder: Placeholder::new(),
            throttle: MoveThrottle::with_interval(interval),
        }
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragResizeSession<T>> {
        self.session.as_ref()
    }

    /// The shared placeholder ghost.
    #[inline]
    #[must_use]
    pub const fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    /// The active session and the placeholder, split-borrowed so grid
    /// handlers can read one while mutating the other.
    pub fn parts(&mut self) -> Option<(&DragResizeSession<T>, &mut Placeholder)> {
        let session = self.session.as_ref()?;
        Some((session, &mut self.placeholder))
    }

    /// Begin dragging an item out of `origin`. Returns `false` when a
    /// session is already active.
    pub fn start_drag(
        &mut self,
        origin: GridId,
        item: Item<T>,
        anchor: PxRect,
        pointer: PxPoint,
        grab_offset: CellOffset,
        scroll: ScrollOffset,
    ) -> bool {
        let session = DragResizeSession::drag(Some(origin), item, anchor, pointer, grab_offset);
        let started = self.begin(session, anchor, scroll);
        #[cfg(feature = "tracing")]
        if started {
            self.trace_gesture("start_drag");
        }
        started
    }

    /// Begin dragging a freestanding source's item. Returns `false` when a
    /// session is already active.
    pub fn start_source_drag(
        &mut self,
        item: Item<T>,
        anchor: PxRect,
        pointer: PxPoint,
        scroll: ScrollOffset,
    ) -> bool {
        let session = DragResizeSession::source_drag(item, anchor, pointer);
        let started = self.begin(session, anchor, scroll);
        #[cfg(feature = "tracing")]
        if started {
            self.trace_gesture("start_source_drag");
        }
        started
    }

    /// Begin resizing an item in place. Returns `false` when a session is
    /// already active.
    pub fn start_resize(
        &mut self,
        origin: GridId,
        item: Item<T>,
        anchor: PxRect,
        pointer: PxPoint,
        scroll: ScrollOffset,
    ) -> bool {
        let session = DragResizeSession::resize(origin, item, anchor, pointer);
        let started = self.begin(session, anchor, scroll);
        #[cfg(feature = "tracing")]
        if started {
            self.trace_gesture("start_resize");
        }
        started
    }

    fn begin(
        &mut self,
        session: DragResizeSession<T>,
        anchor: PxRect,
        scroll: ScrollOffset,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.placeholder
            .show(anchor.size(), anchor.origin().scrolled(scroll));
        self.session = Some(session);
        true
    }

    /// Offer a pointer-move to the throttle. `None` while no session is
    /// active or the sample was held for a later tick.
    pub fn offer_move(&mut self, event: PointerEvent, now: Instant) -> Option<PointerEvent> {
        if self.session.is_none() {
            return None;
        }
        self.throttle.offer(event, now)
    }

    /// Drain a held move sample once the throttle interval has elapsed.
    pub fn poll_move(&mut self, now: Instant) -> Option<PointerEvent> {
        if self.session.is_none() {
            return None;
        }
        self.throttle.poll(now)
    }

    /// Process one admitted move sample.
    ///
    /// Updates the session's grid tracking and moves the placeholder.
    /// `None` when no session is active; a resize session reports an
    /// unchanged transition.
    pub fn move_tick(
        &mut self,
        pointer: PxPoint,
        scroll: ScrollOffset,
        hits: &[(GridId, PxRect)],
    ) -> Option<MoveTransition> {
        let session = self.session.as_mut()?;
        if !session.dragging() {
            return Some(MoveTransition::default());
        }

        let transition = if let Some(current) = session.current_grid
            && hits
                .iter()
                .any(|(id, rect)| *id == current && rect.contains(pointer))
        {
            MoveTransition::default()
        } else {
            let entered = hits
                .iter()
                .find(|(_, rect)| rect.contains(pointer))
                .map(|(id, _)| *id);
            let left = session.current_grid;
            if left.is_some() {
                session.previous_grid = left;
            }
            session.current_grid = entered;
            MoveTransition { left, entered }
        };

        self.placeholder
            .move_to(pointer.translated(session.drag_offset).scrolled(scroll));
        Some(transition)
    }

    /// End the gesture: hide the placeholder, drop any held move, and hand
    /// the session back for the commit or cancel path.
    pub fn finish(&mut self) -> Option<DragResizeSession<T>> {
        let session = self.session.take()?;
        self.placeholder.hide();
        self.throttle.clear();
        #[cfg(feature = "tracing")]
        self.trace_gesture("finish");
        Some(session)
    }

    #[cfg(feature = "tracing")]
    fn trace_gesture(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "gesture",
            operation,
            engaged = self.session.is_some(),
            placeholder_visible = self.placeholder.is_visible()
        )
        .entered();
    }
}

impl<T> Default for GestureCoordinator<T> {
    fn default() -> Self {
        Self::new()
    }
}
