pub mod simulation;
pub mod collision;
pub mod configuration;
pub mod input;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Appearance, Body, NVec2, Shape, World};
pub use simulation::vector::{add, scale};
pub use simulation::forces::{
    apply_constant_force, apply_force, apply_impulse, clear_constant_force, AccelSet, Acceleration, ForceKind,
};
pub use simulation::integrator::{integrate, integrate_body, AccelerationModel};
pub use simulation::boundary::{resolve_boundaries, Bounds, DisplayBounds};
pub use simulation::spawn::{SpawnRequest, ValidationError};
pub use simulation::engine::Engine;
pub use simulation::params::{Parameters, GRAVITY};
pub use simulation::scenario::{Scenario, SpawnTemplate, StepReport};

pub use collision::{overlaps, overlapping_pairs, CollisionPair, CollisionResponse, VelocitySwap};

pub use configuration::config::{BodyConfig, ConfigError, EngineConfig, ParametersConfig, ScenarioConfig, SpawnConfig};

pub use input::console::{parse_command, run_console, Command, InputParseError};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step_curve;
