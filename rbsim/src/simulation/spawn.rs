//! Body-creation requests
//!
//! Every body enters the world through a [`SpawnRequest`]. The request is
//! validated as a whole before anything is appended, so a rejected request
//! leaves the world untouched.

use std::fmt;

use super::forces::ForceKind;
use super::states::{check_finite, Appearance, Body, NVec2, Shape, World};

/// Mass given to bodies when the request does not name one
pub const DEFAULT_MASS: f64 = 1.0;

/// A request that failed validation. The request is discarded and the
/// simulation carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NonPositiveDimension { field: &'static str, value: f64 },
    NonPositiveMass(f64),
    NonFinite { field: &'static str, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveDimension { field, value } => {
                write!(f, "{} must be greater than 0, got {}", field, value)
            }
            ValidationError::NonPositiveMass(m) => write!(f, "mass must be greater than 0, got {}", m),
            ValidationError::NonFinite { field, value } => write!(f, "{} must be a finite number, got {}", field, value),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    pub position: NVec2,
    pub shape: Shape,
    pub mass: f64,
    pub initial_force: NVec2,
    pub force_kind: ForceKind,
    pub appearance: Option<Appearance>, // `None` picks the shape's default colour
}

impl SpawnRequest {
    /// Request with default mass, no force and the shape's colour
    pub fn new(position: NVec2, shape: Shape) -> Self {
        Self {
            position,
            shape,
            mass: DEFAULT_MASS,
            initial_force: NVec2::zeros(),
            force_kind: ForceKind::Additive,
            appearance: None,
        }
    }

    pub fn with_force(mut self, force: NVec2, kind: ForceKind) -> Self {
        self.initial_force = force;
        self.force_kind = kind;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Build the body this request describes, with its initial force applied
    pub fn build(&self) -> Result<Body, ValidationError> {
        let mut body = Body::new(self.position, self.shape, self.mass)?;
        check_finite("fx", self.initial_force.x)?;
        check_finite("fy", self.initial_force.y)?;
        if let Some(appearance) = self.appearance {
            body = body.with_appearance(appearance);
        }
        self.force_kind.apply(&mut body, self.initial_force);
        Ok(body)
    }
}

impl World {
    /// Validate `request` and append the resulting body, returning its index
    pub fn spawn(&mut self, request: &SpawnRequest) -> Result<usize, ValidationError> {
        let body = request.build()?;
        let index = self.push(body);
        tracing::info!(
            index,
            shape = request.shape.name(),
            x = request.position.x,
            y = request.position.y,
            "body spawned"
        );
        Ok(index)
    }
}
