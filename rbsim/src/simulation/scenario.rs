//! Build and run fully-initialized sandbox scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - world state (`World` with its bodies at t = 0)
//! - active acceleration terms (`AccelSet`) and collision response
//! - the template used for interactive spawns
//!
//! `Scenario::step` is the per-tick orchestrator: integrate every body, then
//! resolve screen edges for every body, then sweep all pairs `(i, j), i < j`
//! and respond to each overlap. The phases never interleave.

use bevy::prelude::Resource;

use crate::collision::{overlapping_pairs, resolve_pairs, CollisionPair, CollisionResponse, VelocitySwap};
use crate::configuration::config::{BodyConfig, ScenarioConfig, SpawnConfig};
use crate::simulation::boundary::{resolve_boundaries, Bounds, DisplayBounds};
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::spawn::{SpawnRequest, ValidationError, DEFAULT_MASS};
use crate::simulation::states::{check_finite, Appearance, NVec2, Shape, World};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub tick: u64, // tick number, starting at 1
    pub collisions: Vec<CollisionPair>, // overlapping pairs, in resolution order
}

/// Shape, mass, force and colour used for bodies spawned by clicking
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTemplate {
    pub shape: Shape,
    pub mass: f64,
    pub force: NVec2,
    pub appearance: Option<Appearance>,
}

impl Default for SpawnTemplate {
    fn default() -> Self {
        Self {
            shape: Shape::Circle { radius: 20.0 },
            mass: DEFAULT_MASS,
            force: NVec2::zeros(),
            appearance: None,
        }
    }
}

/// Bevy resource representing a fully-initialized sandbox
///
/// In Bevy terms, this is inserted as a `Resource` and then read by the
/// stepping, input and drawing systems
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub world: World,
    pub forces: AccelSet,
    pub response: Box<dyn CollisionResponse + Send + Sync>,
    pub spawn_template: SpawnTemplate,
}

impl Scenario {
    /// Empty scenario with the velocity-swap response
    pub fn new(engine: Engine, parameters: Parameters) -> Self {
        Self {
            engine,
            parameters,
            world: World::new(),
            forces: AccelSet::default(),
            response: Box::new(VelocitySwap),
            spawn_template: SpawnTemplate::default(),
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let mut engine = Engine::new(e_cfg.acceleration_model);
        if let Some(kind) = e_cfg.force_kind {
            engine.force_kind = kind;
        }

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            gravity: p_cfg.gravity,
            restitution: p_cfg.restitution,
            bounds: Bounds::new(p_cfg.screen_width, p_cfg.screen_height),
        };

        let mut scenario = Self::new(engine, parameters);
        if let Some(spawn) = cfg.spawn {
            scenario.spawn_template = Self::template_from_config(&spawn);
        }

        // Bodies: map `BodyConfig` -> validated runtime `Body`, skipping bad ones
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let request = scenario.request_from_config(bc);
            let built = request.build().and_then(|body| match bc.v {
                Some([vx, vy]) => {
                    check_finite("vx", vx)?;
                    check_finite("vy", vy)?;
                    Ok(body.with_velocity(NVec2::new(vx, vy)))
                }
                None => Ok(body),
            });
            match built {
                Ok(body) => {
                    scenario.world.push(body);
                }
                Err(e) => tracing::warn!(entry = i, "skipping body: {}", e),
            }
        }

        tracing::info!(
            bodies = scenario.world.len(),
            model = ?scenario.engine.acceleration_model,
            force_kind = ?scenario.engine.force_kind,
            "scenario built"
        );

        scenario
    }

    fn template_from_config(cfg: &SpawnConfig) -> SpawnTemplate {
        SpawnTemplate {
            shape: cfg.shape,
            mass: cfg.m.unwrap_or(DEFAULT_MASS),
            force: cfg.force.map(|f| NVec2::new(f[0], f[1])).unwrap_or_else(NVec2::zeros),
            appearance: cfg.color,
        }
    }

    fn request_from_config(&self, bc: &BodyConfig) -> SpawnRequest {
        let mut request = self.request(NVec2::new(bc.x[0], bc.x[1]), bc.shape)
            .with_mass(bc.m.unwrap_or(DEFAULT_MASS));
        if let Some(f) = bc.force {
            request = request.with_force(NVec2::new(f[0], f[1]), self.engine.force_kind);
        }
        if let Some(color) = bc.color {
            request = request.with_appearance(color);
        }
        request
    }

    /// Request at `position` using this engine's force kind
    pub fn request(&self, position: NVec2, shape: Shape) -> SpawnRequest {
        let mut request = SpawnRequest::new(position, shape);
        request.force_kind = self.engine.force_kind;
        request
    }

    /// Spawn the click template at `position`
    pub fn spawn_from_template(&mut self, position: NVec2) -> Result<usize, ValidationError> {
        let template = self.spawn_template.clone();
        let mut request = self
            .request(position, template.shape)
            .with_mass(template.mass)
            .with_force(template.force, self.engine.force_kind);
        request.appearance = template.appearance;
        self.world.spawn(&request)
    }

    /// Advance one tick inside the scenario's own bounds
    pub fn step(&mut self) -> StepReport {
        let bounds = self.parameters.bounds;
        self.step_within(&bounds)
    }

    /// Advance one tick, querying `bounds` for the display size
    pub fn step_within<B: DisplayBounds + ?Sized>(&mut self, bounds: &B) -> StepReport {
        // (a) integrate every body
        integrate(&mut self.world, &self.forces, &self.parameters, self.engine.acceleration_model);

        // (b) screen edges
        let restitution = self.parameters.restitution;
        for body in self.world.bodies.iter_mut() {
            resolve_boundaries(body, bounds, restitution);
        }

        // (c) pairwise collisions; responses only touch velocities, so the
        // overlap set does not change while it is being resolved
        let collisions = overlapping_pairs(&self.world.bodies);
        resolve_pairs(&mut self.world.bodies, &collisions, self.response.as_ref());

        if !collisions.is_empty() {
            tracing::debug!(tick = self.world.ticks, count = collisions.len(), "collisions resolved");
        }

        StepReport {
            tick: self.world.ticks,
            collisions,
        }
    }

    /// Run `n` ticks, returning the total number of collisions resolved
    pub fn run(&mut self, n: usize) -> usize {
        (0..n).map(|_| self.step().collisions.len()).sum()
    }
}
