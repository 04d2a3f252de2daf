//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size `dt`,
//! - gravitational acceleration along +y (screen down),
//! - boundary restitution,
//! - display bounds the bodies are kept inside

use super::boundary::Bounds;

/// Gravitational acceleration in screen units per second squared
pub const GRAVITY: f64 = 9.8;

/// Fixed simulated time per tick
pub const DEFAULT_DT: f64 = 1.0 / 60.0;

/// Fraction of speed kept (and reversed) when a body hits a screen edge
pub const DEFAULT_RESTITUTION: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub gravity: f64, // y acceleration reasserted every tick
    pub restitution: f64, // boundary bounce factor
    pub bounds: Bounds, // display bounds
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravity: GRAVITY,
            restitution: DEFAULT_RESTITUTION,
            bounds: Bounds::default(),
        }
    }
}
