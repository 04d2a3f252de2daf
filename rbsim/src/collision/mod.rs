//! Pairwise body collisions.
//!
//! - **Detection**: geometric overlap test for every shape pair
//! - **Resolution**: post-collision velocities of an overlapping pair
//!
//! There is no broad phase: every unordered pair `(i, j), i < j` is tested
//! each tick, in container order.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
