//! Collision response.
//!
//! The shipped response swaps the two velocity vectors outright, the textbook
//! result for a head-on elastic hit between equal point masses. Mass, shape
//! and contact geometry are ignored. Other responses plug in through
//! [`CollisionResponse`].

use crate::simulation::states::Body;

use super::detection::CollisionPair;

/// Post-collision velocity rule for an overlapping pair
pub trait CollisionResponse {
    fn respond(&self, a: &mut Body, b: &mut Body);
}

/// `a.velocity, b.velocity = b.velocity, a.velocity`
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocitySwap;

impl CollisionResponse for VelocitySwap {
    fn respond(&self, a: &mut Body, b: &mut Body) {
        std::mem::swap(&mut a.velocity, &mut b.velocity);
    }
}

/// Mutable access to two distinct bodies. `None` unless `i < j` and `j` is
/// in range.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
    if i >= j || j >= bodies.len() {
        return None;
    }
    let (left, right) = bodies.split_at_mut(j);
    Some((&mut left[i], &mut right[0]))
}

/// Apply `response` to each pair in the given order. A later pair may undo
/// part of an earlier pair's response within the same tick. Pairs that do not
/// name two ordered, in-range bodies are skipped.
pub fn resolve_pairs<R: CollisionResponse + ?Sized>(bodies: &mut [Body], pairs: &[CollisionPair], response: &R) {
    for pair in pairs {
        match pair_mut(bodies, pair.a, pair.b) {
            Some((a, b)) => response.respond(a, b),
            None => tracing::warn!(a = pair.a, b = pair.b, "skipping invalid collision pair"),
        }
    }
}
