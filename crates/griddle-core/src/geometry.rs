#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Two coordinate spaces coexist in this engine:
//!
//! - **Pixel space** (`f64`): pointer positions, element bounding boxes, and
//!   the placeholder rectangle, as reported by the host UI layer.
//! - **Cell space** (`i32`, 1-based): grid coordinates occupied by items.
//!
//! Conversions between the two live in `griddle-layout`; this module only
//! defines the value types and the shared clamping helper.

/// Restrict `value` to `[min, max]`.
///
/// Mirrors the engine-wide argument order `(min, max, value)`. When
/// `max < min` the result is `max`, matching `min(max(value, min), max)`.
#[inline]
#[must_use]
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    let low = if value < min { min } else { value };
    if low > max { max } else { low }
}

/// A pointer position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    /// Origin point.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`.
    #[inline]
    #[must_use]
    pub const fn offset_from(self, other: Self) -> PxOffset {
        PxOffset::new(self.x - other.x, self.y - other.y)
    }

    /// Point moved by `offset`.
    #[inline]
    #[must_use]
    pub const fn translated(self, offset: PxOffset) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Point corrected by a scroll offset.
    #[inline]
    #[must_use]
    pub const fn scrolled(self, scroll: ScrollOffset) -> Self {
        Self::new(self.x + scroll.x, self.y + scroll.y)
    }
}

/// A displacement in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxOffset {
    pub x: f64,
    pub y: f64,
}

impl PxOffset {
    /// Zero displacement.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new offset.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxSize {
    pub width: f64,
    pub height: f64,
}

impl PxSize {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size with both axes floored at `min`.
    #[inline]
    #[must_use]
    pub fn at_least(self, min: f64) -> Self {
        Self::new(self.width.max(min), self.height.max(min))
    }
}

/// Scroll position of the host's scroll container.
///
/// The host pushes this into the stage; `{0, 0}` when nothing scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    /// No scrolling.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new scroll offset.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel space.
///
/// Edge semantics follow hit-testing in the host layer: `contains` is
/// inclusive on all four edges, so a pointer resting exactly on a shared
/// boundary tests inside both neighbours and registration order decides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PxRect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle from an origin point and a size.
    #[inline]
    #[must_use]
    pub const fn from_origin_size(origin: PxPoint, size: PxSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> PxPoint {
        PxPoint::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (inclusive).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (inclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle, edges included.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: PxPoint) -> bool {
        self.left() <= point.x
            && point.x <= self.right()
            && self.top() <= point.y
            && point.y <= self.bottom()
    }

    /// Rectangle moved by `offset`, keeping its size.
    #[inline]
    #[must_use]
    pub const fn translated(&self, offset: PxOffset) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

/// A cell coordinate on a grid (1-based on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPoint {
    pub col: i32,
    pub row: i32,
}

impl CellPoint {
    /// Create a new cell coordinate.
    #[inline]
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// A displacement in cell space.
///
/// Grab offsets are stored as `item cell − pointer cell`, so they are zero
/// or negative while the pointer stays inside the grabbed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CellOffset {
    pub x: i32,
    pub y: i32,
}

impl CellOffset {
    /// Zero displacement.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell offset.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An item footprint in cell space (1-based origin, spans ≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    /// Create a new cell rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rightmost occupied column (inclusive).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Bottommost occupied row (inclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_returns_value_in_range() {
        assert_eq!(clamp(1, 10, 5), 5);
        assert_eq!(clamp(1.0, 10.0, 5.5), 5.5);
    }

    #[test]
    fn clamp_restricts_out_of_range_values() {
        assert_eq!(clamp(1, 10, 0), 1);
        assert_eq!(clamp(1, 10, 42), 10);
    }

    #[test]
    fn clamp_prefers_max_when_bounds_cross() {
        // min(max(value, min), max) semantics: an inverted range yields max.
        assert_eq!(clamp(5, 2, 3), 2);
    }

    #[test]
    fn rect_contains_is_inclusive_on_all_edges() {
        let rect = PxRect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(PxPoint::new(10.0, 20.0)));
        assert!(rect.contains(PxPoint::new(110.0, 70.0)));
        assert!(rect.contains(PxPoint::new(60.0, 45.0)));
        assert!(!rect.contains(PxPoint::new(9.9, 45.0)));
        assert!(!rect.contains(PxPoint::new(110.1, 45.0)));
    }

    #[test]
    fn point_offset_round_trips_through_translation() {
        let anchor = PxPoint::new(40.0, 60.0);
        let pointer = PxPoint::new(55.0, 72.0);
        let offset = anchor.offset_from(pointer);
        assert_eq!(pointer.translated(offset), anchor);
    }

    #[test]
    fn scrolled_point_adds_both_axes() {
        let point = PxPoint::new(5.0, 6.0).scrolled(ScrollOffset::new(10.0, 20.0));
        assert_eq!(point, PxPoint::new(15.0, 26.0));
    }

    #[test]
    fn cell_rect_edges_are_inclusive() {
        let rect = CellRect::new(3, 2, 2, 4);
        assert_eq!(rect.right(), 4);
        assert_eq!(rect.bottom(), 5);
    }

    #[test]
    fn size_floor_applies_per_axis() {
        let size = PxSize::new(0.2, 40.0).at_least(1.0);
        assert_eq!(size, PxSize::new(1.0, 40.0));
    }
}
