//! High-level runtime engine settings
//!
//! Selects how accelerations are built each tick and how a spawn request's
//! initial force is applied, used when building and running a `Scenario`

use super::forces::ForceKind;
use super::integrator::AccelerationModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub acceleration_model: AccelerationModel, // legacy or accumulator
    pub force_kind: ForceKind, // default kind for spawn forces
}

impl Engine {
    pub fn new(acceleration_model: AccelerationModel) -> Self {
        Self {
            acceleration_model,
            force_kind: ForceKind::default_for(acceleration_model),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(AccelerationModel::default())
    }
}
