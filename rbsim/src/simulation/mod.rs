pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod boundary;
pub mod spawn;
pub mod scenario;
