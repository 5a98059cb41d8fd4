//! Drop-surface geometry.
//!
//! Pointer events arrive in viewport (client) coordinates. Element positions
//! are stored relative to the board's own origin, so moving or resizing the
//! board in the page layout does not shift the elements on it.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// A point in either client (viewport) or surface-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the drop surface in client coordinates.
///
/// Mirrors `getBoundingClientRect()`: `left`/`top` are the origin,
/// `width`/`height` the extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a client-space point to surface-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point { x: client.x - self.left, y: client.y - self.top }
    }

    /// Whether a client-space point lies inside the surface (edges inclusive).
    ///
    /// A surface with no measured extent accepts every point, so hosts that
    /// only know the origin still get drops.
    #[must_use]
    pub fn contains(&self, client: Point) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return true;
        }
        let local = self.to_local(client);
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.width && local.y <= self.height
    }
}

/// An element position expressed as `top`/`left`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl From<Point> for Position {
    fn from(local: Point) -> Self {
        Self { top: local.y, left: local.x }
    }
}
