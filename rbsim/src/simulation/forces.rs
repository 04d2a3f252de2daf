//! Force application and per-tick acceleration contributors
//!
//! Three ways to push a body:
//! - [`apply_force`]          adds `F / m` onto the stored acceleration
//! - [`apply_impulse`]        queues `F` for the next tick only
//! - [`apply_constant_force`] adds `F` to a standing force felt every tick
//!
//! The queued and standing forces are turned into accelerations by the
//! [`AccelSet`] terms each tick; gravity is handled by the integrator itself.

use serde::Deserialize;

use super::integrator::AccelerationModel;
use super::states::{Body, NVec2, World};
use super::vector::{add, scale};

/// `acceleration += force / mass`, composed into the current acceleration.
///
/// The contribution is also kept in `additive_acceleration`, which the
/// accumulator model adds back every time it rebuilds the acceleration.
pub fn apply_force(body: &mut Body, force: NVec2) {
    let a = scale(force, body.mass().recip());
    body.acceleration = add(body.acceleration, a);
    body.additive_acceleration = add(body.additive_acceleration, a);
}

/// Force contributing to the next velocity update only
pub fn apply_impulse(body: &mut Body, force: NVec2) {
    body.pending_force += force;
}

/// Force contributing to every velocity update until cleared
pub fn apply_constant_force(body: &mut Body, force: NVec2) {
    body.constant_force += force;
}

pub fn clear_constant_force(body: &mut Body) {
    body.constant_force = NVec2::zeros();
}

/// How a spawn request's initial force is applied
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ForceKind {
    Additive,
    Impulse,
    Constant,
}

impl ForceKind {
    /// `additive` reproduces the legacy behaviour, `constant` is its uniform
    /// counterpart once the acceleration is rebuilt every tick
    pub fn default_for(model: AccelerationModel) -> Self {
        match model {
            AccelerationModel::Legacy => ForceKind::Additive,
            AccelerationModel::Accumulator => ForceKind::Constant,
        }
    }

    pub fn apply(self, body: &mut Body, force: NVec2) {
        match self {
            ForceKind::Additive => apply_force(body, force),
            ForceKind::Impulse => apply_impulse(body, force),
            ForceKind::Constant => apply_constant_force(body, force),
        }
    }
}

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `world`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, world: &World, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, world, out);
        }
    }
}

impl Default for AccelSet {
    /// The set used by every scenario: applied forces only
    fn default() -> Self {
        Self::new().with(AppliedForces)
    }
}

/// Acceleration sources operating on a [`World`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, world: &World, out: &mut [NVec2]);
}

/// Standing plus queued forces divided by mass
pub struct AppliedForces;

impl Acceleration for AppliedForces {
    fn acceleration(&self, _t: f64, world: &World, out: &mut [NVec2]) {
        for (b, a) in world.bodies.iter().zip(out.iter_mut()) {
            let force = add(b.constant_force, b.pending_force);
            *a += scale(force, b.mass().recip());
        }
    }
}
