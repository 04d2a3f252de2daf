//! 2D vector primitives used by the integrator
//!
//! Thin named wrappers over nalgebra arithmetic so the update rules read the
//! same way they are written down: `v = add(v, scale(a, dt))`

use super::states::NVec2;

/// Componentwise sum
pub fn add(a: NVec2, b: NVec2) -> NVec2 {
    a + b
}

/// Componentwise multiply by scalar `k`
pub fn scale(v: NVec2, k: f64) -> NVec2 {
    v * k
}
