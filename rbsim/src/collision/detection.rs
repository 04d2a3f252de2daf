//! Discrete overlap tests between bodies.
//!
//! All comparisons are strict: shapes that exactly touch do not overlap.

use crate::simulation::states::{Body, NVec2, Shape};

/// Two bodies found overlapping during a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub a: usize,
    pub b: usize,
}

/// Whether two bodies overlap.
///
/// Points have no extent and never overlap anything.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    match (*a.shape(), *b.shape()) {
        (Shape::Point, _) | (_, Shape::Point) => false,
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(a.position, ra, b.position, rb)
        }
        (Shape::Circle { radius }, other) => match other.box_size() {
            Some(size) => circle_box(a.position, radius, b.position, size),
            None => false,
        },
        (other, Shape::Circle { radius }) => match other.box_size() {
            Some(size) => circle_box(b.position, radius, a.position, size),
            None => false,
        },
        (sa, sb) => match (sa.box_size(), sb.box_size()) {
            (Some(size_a), Some(size_b)) => box_box(a.position, size_a, b.position, size_b),
            _ => false,
        },
    }
}

/// Center distance strictly below the sum of radii
pub fn circle_circle(ca: NVec2, ra: f64, cb: NVec2, rb: f64) -> bool {
    let distance = (ca - cb).norm();
    distance < ra + rb
}

/// Axis-aligned boxes given by top-left corner and size. Overlap only if
/// none of the four separating conditions holds.
pub fn box_box(pa: NVec2, size_a: NVec2, pb: NVec2, size_b: NVec2) -> bool {
    pa.x < pb.x + size_b.x
        && pa.x + size_a.x > pb.x
        && pa.y < pb.y + size_b.y
        && pa.y + size_a.y > pb.y
}

/// Circle against a box: clamp the circle center onto the box per axis and
/// compare the squared distance to that closest point with `radius²`
pub fn circle_box(center: NVec2, radius: f64, corner: NVec2, size: NVec2) -> bool {
    let closest = NVec2::new(
        center.x.min(corner.x + size.x).max(corner.x),
        center.y.min(corner.y + size.y).max(corner.y),
    );
    let d = center - closest;
    d.norm_squared() < radius * radius
}

/// Every overlapping pair `(i, j)` with `i < j`, in sweep order
pub fn overlapping_pairs(bodies: &[Body]) -> Vec<CollisionPair> {
    let n = bodies.len();
    let mut pairs = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if overlaps(&bodies[i], &bodies[j]) {
                pairs.push(CollisionPair { a: i, b: j });
            }
        }
    }

    pairs
}
