use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, Shape};

/// Helper to build a scenario of `n` small circles spread over the screen
fn make_scenario(n: usize) -> Scenario {
    let mut scenario = Scenario::new(Engine::default(), Parameters::default());
    let bounds = scenario.parameters.bounds;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * bounds.width,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * bounds.height,
        );
        let shape = if i % 2 == 0 {
            Shape::Circle { radius: 3.0 }
        } else {
            Shape::Square { side: 5.0 }
        };

        if let Ok(body) = Body::new(x, shape, 1.0) {
            scenario.world.push(body);
        }
    }

    scenario
}

/// Time the full all-pairs step for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms,collisions_per_step");

    for n in (100..=3200).step_by(100) {
        // small n: average over more steps to smooth noise
        let steps = if n <= 800 { 20 } else { 3 };

        let mut scenario = make_scenario(n);

        // Warm-up one step
        scenario.step();

        let t0 = Instant::now();
        let collisions = scenario.run(steps);
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.1}", n, ms, collisions as f64 / steps as f64);
    }
}
