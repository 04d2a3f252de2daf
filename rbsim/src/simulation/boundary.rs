//! Screen-edge contact
//!
//! Keeps each body inside `[0, width] x [0, height]`. On every violated edge
//! the position is clamped back and the matching velocity component is
//! scaled by `-restitution`. Edges are checked independently every tick, so a
//! body resting on the floor keeps a small, shrinking vertical velocity.

use super::states::{Body, Shape};

/// Source of the display size, queried on every resolution
pub trait DisplayBounds {
    fn screen_width(&self) -> f64;
    fn screen_height(&self) -> f64;
}

/// Fixed display size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl DisplayBounds for Bounds {
    fn screen_width(&self) -> f64 {
        self.width
    }

    fn screen_height(&self) -> f64 {
        self.height
    }
}

/// Clamp `body` inside `bounds` and reflect its velocity on contact
pub fn resolve_boundaries<B: DisplayBounds + ?Sized>(body: &mut Body, bounds: &B, restitution: f64) {
    let width = bounds.screen_width();
    let height = bounds.screen_height();
    let bounce = -restitution;

    // near/far extents of the shape around its reference point, per axis
    let (near, far) = match *body.shape() {
        Shape::Circle { radius } => ((radius, radius), (radius, radius)),
        Shape::Rectangle { width: w, height: h } => ((0.0, 0.0), (w, h)),
        Shape::Square { side } => ((0.0, 0.0), (side, side)),
        Shape::Point => ((0.0, 0.0), (0.0, 0.0)),
    };

    // bottom
    if body.position.y + far.1 > height {
        body.position.y = height - far.1;
        body.velocity.y *= bounce;
    }
    // top
    if body.position.y - near.1 < 0.0 {
        body.position.y = near.1;
        body.velocity.y *= bounce;
    }
    // right
    if body.position.x + far.0 > width {
        body.position.x = width - far.0;
        body.velocity.x *= bounce;
    }
    // left
    if body.position.x - near.0 < 0.0 {
        body.position.x = near.0;
        body.velocity.x *= bounce;
    }
}
