//! Fixed-step semi-implicit Euler integrator
//!
//! Per body and tick:
//!
//! ```text
//! a = acceleration for this tick (see AccelerationModel)
//! v_n+1 = v_n + a * dt
//! x_n+1 = x_n + v_n+1 * dt
//! ```

use serde::Deserialize;

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Body, NVec2, World};
use super::vector::{add, scale};

/// How the acceleration used by a tick is obtained
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccelerationModel {
    /// `acceleration.y` is overwritten with gravity every tick while
    /// `acceleration.x` keeps whatever additive forces left there. Queued and
    /// standing forces are added on top for the velocity update.
    Legacy,
    /// Acceleration rebuilt every tick: gravity, plus the kept additive
    /// acceleration, plus queued and standing forces over mass. Same rule
    /// on both axes.
    #[default]
    Accumulator,
}

/// Advance a single body by `params.dt`
///
/// `applied` is the acceleration from queued and standing forces for this
/// tick. The queued force is consumed.
pub fn integrate_body(body: &mut Body, applied: NVec2, params: &Parameters, model: AccelerationModel) {
    debug_assert!(body.mass() > 0.0, "body mass must stay positive");
    let dt = params.dt;

    let a = match model {
        AccelerationModel::Legacy => {
            // gravity is reasserted, never accumulated
            body.acceleration.y = params.gravity;
            add(body.acceleration, applied)
        }
        AccelerationModel::Accumulator => {
            let base = add(NVec2::new(0.0, params.gravity), body.additive_acceleration);
            body.acceleration = add(base, applied);
            body.acceleration
        }
    };

    // v_n+1 = v_n + a dt
    body.velocity = add(body.velocity, scale(a, dt));

    // x_n+1 = x_n + v_n+1 dt
    body.position = add(body.position, scale(body.velocity, dt));

    body.pending_force = NVec2::zeros();
}

/// Advance every body in container order by one step and move `world.t`
/// forward by `params.dt`
pub fn integrate(world: &mut World, forces: &AccelSet, params: &Parameters, model: AccelerationModel) {
    let n = world.bodies.len();
    if n > 0 {
        let mut applied = vec![NVec2::zeros(); n];
        forces.accumulate_accels(world.t, &*world, &mut applied);

        for (b, a) in world.bodies.iter_mut().zip(applied.iter()) {
            integrate_body(b, *a, params, model);
        }
    }

    world.t += params.dt;
    world.ticks += 1;
}
