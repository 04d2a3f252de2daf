//! Core state types for the rigid-body sandbox.
//!
//! Defines the runtime records the step operates on:
//! - `NVec2`      2D vector alias over nalgebra
//! - `Shape`      closed set of collision shapes with their own dimensions
//! - `Appearance` display tag, ignored by the physics
//! - `Body` / `World` one simulated entity and the ordered live set
//!
//! Screen convention: origin at the top-left corner, y grows downward, so a
//! positive gravity pulls bodies toward the bottom edge.

use serde::Deserialize;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

use super::spawn::ValidationError;

/// Shape of a body. Circles are positioned by their center, boxes
/// (rectangle and square) by their top-left corner.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    /// No extent: integrated and drawn, never collides with other bodies
    Point,
}

impl Shape {
    /// Check every declared dimension is finite and strictly positive
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Shape::Circle { radius } => check_dimension("radius", radius),
            Shape::Rectangle { width, height } => {
                check_dimension("width", width)?;
                check_dimension("height", height)
            }
            Shape::Square { side } => check_dimension("side", side),
            Shape::Point => Ok(()),
        }
    }

    /// Width and height of a box shape; a square is a box with equal sides
    pub fn box_size(&self) -> Option<NVec2> {
        match *self {
            Shape::Rectangle { width, height } => Some(NVec2::new(width, height)),
            Shape::Square { side } => Some(NVec2::new(side, side)),
            Shape::Circle { .. } | Shape::Point => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Square { .. } => "square",
            Shape::Point => "point",
        }
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field, value });
    }
    if !(value > 0.0) {
        return Err(ValidationError::NonPositiveDimension { field, value });
    }
    Ok(())
}

/// Display colour of a body. Has no effect on the simulation.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
}

impl Appearance {
    /// Default colour for each shape kind
    pub fn for_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Circle { .. } => Appearance::Red,
            Shape::Rectangle { .. } => Appearance::Green,
            Shape::Square { .. } => Appearance::Blue,
            Shape::Point => Appearance::Yellow,
        }
    }

    /// sRGB components in `[0, 1]`
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            Appearance::Red => [1.0, 0.0, 0.0],
            Appearance::Green => [0.0, 1.0, 0.0],
            Appearance::Blue => [0.0, 0.0, 1.0],
            Appearance::Yellow => [1.0, 1.0, 0.0],
            Appearance::Black => [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: NVec2, // center for circles and points, top-left corner for boxes
    pub velocity: NVec2, // velocity
    pub acceleration: NVec2, // acceleration used by the last (or next) velocity update
    pub additive_acceleration: NVec2, // sum of additive forces over mass, kept across ticks
    pub constant_force: NVec2, // standing force, applied every tick
    pub pending_force: NVec2, // one-tick force, cleared after integration
    mass: f64,
    shape: Shape,
    pub appearance: Appearance,
}

impl Body {
    /// Create a body at rest. Fails if the position is not finite, or the mass
    /// or any shape dimension is not finite and strictly positive, in which
    /// case nothing is created.
    pub fn new(position: NVec2, shape: Shape, mass: f64) -> Result<Self, ValidationError> {
        check_finite("x", position.x)?;
        check_finite("y", position.y)?;
        shape.validate()?;
        check_finite("mass", mass)?;
        if !(mass > 0.0) {
            return Err(ValidationError::NonPositiveMass(mass));
        }

        Ok(Self {
            position,
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            additive_acceleration: NVec2::zeros(),
            constant_force: NVec2::zeros(),
            pending_force: NVec2::zeros(),
            mass,
            shape,
            appearance: Appearance::for_shape(&shape),
        })
    }

    pub fn with_velocity(mut self, velocity: NVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// Reject NaN and infinities
pub fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

/// The ordered live set of bodies plus simulated time.
///
/// Order only matters for the pairwise collision sweep, which visits each
/// unordered pair `(i, j)` with `i < j` exactly once per tick.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub bodies: Vec<Body>, // live bodies, in spawn order
    pub t: f64, // simulated time
    pub ticks: u64, // completed ticks
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Append an already validated body and return its index
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Remove the body at `index`, shifting later bodies down by one so the
    /// relative order of the survivors is kept
    pub fn despawn(&mut self, index: usize) -> Option<Body> {
        if index >= self.bodies.len() {
            return None;
        }
        let body = self.bodies.remove(index);
        tracing::info!(index, shape = body.shape().name(), "body despawned");
        Some(body)
    }

    /// Remove every body, returning how many were removed. Time and tick
    /// count keep running.
    pub fn clear(&mut self) -> usize {
        let n = self.bodies.len();
        self.bodies.clear();
        tracing::info!(removed = n, "world cleared");
        n
    }
}
