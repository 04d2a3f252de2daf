use rbsim::{ScenarioConfig, Scenario};
use rbsim::{run_2d, run_console};
use rbsim::bench_step_curve;

use clap::Parser;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D rigid-body sandbox")]
struct Args {
    /// Scenario file, looked up under the crate's `scenarios/` directory
    #[arg(short, default_value = "sandbox.yaml")]
    file_name: String,

    /// Run this many ticks without a window and print the final bodies
    #[arg(long, conflicts_with_all = ["console", "bench"])]
    headless: Option<usize>,

    /// Drive the scenario from stdin commands instead of a window
    #[arg(long, conflicts_with = "bench")]
    console: bool,

    /// Print the step timing curve and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

// the Bevy viewer installs its own subscriber through LogPlugin
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        init_logging();
        bench_step_curve();
        return Ok(());
    }

    if args.console {
        init_logging();
        let mut scenario = Scenario::build_scenario(load_scenario_from_yaml(&args.file_name)?);
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_console(&mut scenario, stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    if let Some(ticks) = args.headless {
        init_logging();
        let mut scenario = Scenario::build_scenario(load_scenario_from_yaml(&args.file_name)?);
        let collisions = scenario.run(ticks);
        println!("t = {:.4} s after {} ticks, {} collisions", scenario.world.t, ticks, collisions);
        for (i, b) in scenario.world.bodies.iter().enumerate() {
            println!(
                "{}: {} pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
                i,
                b.shape().name(),
                b.position.x,
                b.position.y,
                b.velocity.x,
                b.velocity.y
            );
        }
        return Ok(());
    }

    let scenario = Scenario::build_scenario(load_scenario_from_yaml(&args.file_name)?);
    run_2d(scenario);

    Ok(())
}
