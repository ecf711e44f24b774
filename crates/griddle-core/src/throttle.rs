#![forbid(unsafe_code)]

//! Latest-wins throttling of the global pointer-move stream.
//!
//! Fast pointers deliver moves far quicker than layout math needs. The
//! throttle admits at most one sample per interval (10ms by default) and
//! keeps only the newest sample in between, so a burst collapses to its
//! last position. The interval is a throughput/latency tradeoff, not a
//! correctness constant.
//!
//! Time is passed in explicitly, which keeps gesture code deterministic
//! under test and leaves scheduling to the host:
//!
//! ```
//! use std::time::{Duration, Instant};
//! use griddle_core::geometry::PxPoint;
//! use griddle_core::event::PointerEvent;
//! use griddle_core::throttle::MoveThrottle;
//!
//! let mut throttle = MoveThrottle::new();
//! let start = Instant::now();
//!
//! // The first sample of a burst passes through immediately.
//! let first = PointerEvent::moved(PxPoint::new(1.0, 1.0));
//! assert_eq!(throttle.offer(first, start), Some(first));
//!
//! // Samples inside the interval are held, newest wins.
//! let second = PointerEvent::moved(PxPoint::new(2.0, 2.0));
//! assert_eq!(throttle.offer(second, start), None);
//!
//! // The host's next tick drains the held sample.
//! assert_eq!(throttle.poll(start + Duration::from_millis(10)), Some(second));
//! ```

use std::time::{Duration, Instant};

use crate::event::PointerEvent;

/// Default admission interval.
pub const DEFAULT_MOVE_INTERVAL: Duration = Duration::from_millis(10);

/// Interval throttle with a single latest-wins slot.
#[derive(Debug, Clone)]
pub struct MoveThrottle {
    interval: Duration,
    last_emit: Option<Instant>,
    pending: Option<PointerEvent>,
}

impl MoveThrottle {
    /// Throttle with the default 10ms interval.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_MOVE_INTERVAL)
    }

    /// Throttle with a custom interval.
    #[must_use]
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
            pending: None,
        }
    }

    /// Offer a move sample at `now`.
    ///
    /// Returns the sample to process, or `None` when it was held. A held
    /// sample replaces any previously held one.
    pub fn offer(&mut self, event: PointerEvent, now: Instant) -> Option<PointerEvent> {
        if self.interval_elapsed(now) {
            self.last_emit = Some(now);
            self.pending = None;
            return Some(event);
        }
        self.pending = Some(event);
        None
    }

    /// Drain the held sample if the interval has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<PointerEvent> {
        if self.pending.is_some() && self.interval_elapsed(now) {
            self.last_emit = Some(now);
            return self.pending.take();
        }
        None
    }

    /// Whether a sample is currently held.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any held sample and reset the emission clock.
    ///
    /// Called on pointer-up: a gesture's trailing held move is dropped, it
    /// must not leak into the next gesture.
    pub fn clear(&mut self) {
        self.pending = None;
        self.last_emit = None;
    }

    fn interval_elapsed(&self, now: Instant) -> bool {
        match self.last_emit {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        }
    }
}

impl Default for MoveThrottle {
    fn default() -> Self {
        Self::new()
    }
}
