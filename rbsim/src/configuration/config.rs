//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – acceleration model and default force kind
//! - [`ParametersConfig`] – step size, gravity, restitution and display size
//! - [`BodyConfig`]       – initial state for each body
//! - [`SpawnConfig`]      – template for bodies spawned interactively
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section is optional; missing values take the defaults shown here.
//!
//! ```yaml
//! engine:
//!   acceleration_model: "accumulator"   # or "legacy"
//!   force_kind: "constant"              # "additive", "impulse" or "constant"
//!
//! parameters:
//!   dt: 0.0166666667        # fixed step, 1/60 s
//!   gravity: 9.8            # +y is down the screen
//!   restitution: 0.5        # edge bounce factor
//!   screen_width: 800.0
//!   screen_height: 600.0
//!
//! bodies:
//!   - x: [ 400.0, 100.0 ]
//!     shape: { kind: circle, radius: 20.0 }
//!     force: [ 50.0, 0.0 ]
//!   - x: [ 100.0, 300.0 ]
//!     shape: { kind: rectangle, width: 60.0, height: 30.0 }
//!     m: 2.0
//!     color: black
//!
//! spawn:
//!   shape: { kind: square, side: 25.0 }
//!   force: [ 0.0, -200.0 ]
//! ```
//!
//! Shape dimensions are not checked here; validation happens when the
//! scenario is built, where invalid bodies are reported and skipped.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::simulation::forces::ForceKind;
use crate::simulation::integrator::AccelerationModel;
use crate::simulation::params::{DEFAULT_DT, DEFAULT_RESTITUTION, GRAVITY};
use crate::simulation::states::{Appearance, Shape};

/// Error type for scenario loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "YAML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub acceleration_model: AccelerationModel, // how each tick's acceleration is built
    #[serde(default)]
    pub force_kind: Option<ForceKind>, // how spawn forces apply, defaults per model
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_dt")]
    pub dt: f64, // fixed time step
    #[serde(default = "default_gravity")]
    pub gravity: f64, // gravitational acceleration, +y down
    #[serde(default = "default_restitution")]
    pub restitution: f64, // edge bounce factor
    #[serde(default = "default_screen_width")]
    pub screen_width: f64, // display width
    #[serde(default = "default_screen_height")]
    pub screen_height: f64, // display height
}

fn default_dt() -> f64 {
    DEFAULT_DT
}

fn default_gravity() -> f64 {
    GRAVITY
}

fn default_restitution() -> f64 {
    DEFAULT_RESTITUTION
}

fn default_screen_width() -> f64 {
    800.0
}

fn default_screen_height() -> f64 {
    600.0
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            gravity: default_gravity(),
            restitution: default_restitution(),
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position, screen coordinates
    pub shape: Shape, // shape and its dimensions
    #[serde(default)]
    pub m: Option<f64>, // mass, 1.0 when absent
    #[serde(default)]
    pub v: Option<[f64; 2]>, // initial velocity
    #[serde(default)]
    pub force: Option<[f64; 2]>, // initial force
    #[serde(default)]
    pub color: Option<Appearance>, // overrides the shape colour
}

/// Template for bodies spawned from the viewer
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub shape: Shape,
    #[serde(default)]
    pub m: Option<f64>,
    #[serde(default)]
    pub force: Option<[f64; 2]>,
    #[serde(default)]
    pub color: Option<Appearance>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub spawn: Option<SpawnConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
