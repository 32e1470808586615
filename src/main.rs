use orrery::{build_scenario, ScenarioConfig};
use orrery::{bench_gravity, bench_rk4};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar.yaml")]
    file_name: String,

    /// Override the tick count instead of running to t_end
    #[arg(short = 'n')]
    ticks: Option<u64>,

    /// Run the micro-benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_rk4();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut engine = build_scenario(scenario_cfg)?;

    let ticks = args
        .ticks
        .unwrap_or_else(|| (engine.parameters.t_end / engine.parameters.dt).ceil() as u64);

    println!(
        "running {} ticks with {} bodies, {} satellites",
        ticks,
        engine.system.bodies.len(),
        engine.system.satellites.len()
    );

    let report_every = (ticks / 10).max(1);
    for _ in 0..ticks {
        engine.advance_tick();
        if engine.system.ticks % report_every == 0 {
            println!(
                "day {:7.1}: {} bodies, {} satellites, {} explosion groups",
                engine.system.t,
                engine.system.bodies.len(),
                engine.system.satellites.len(),
                engine.system.explosions.len()
            );
        }
    }

    println!("final state at day {:.1}:", engine.system.t);
    for b in &engine.system.bodies {
        println!(
            "  {:8} m = {:10.3}  x = ({:9.2}, {:9.2})  |v| = {:7.3}",
            b.label,
            b.m,
            b.x.x,
            b.x.y,
            b.v.norm()
        );
    }
    for s in &engine.system.satellites {
        println!(
            "  {:8} (sat)  x = ({:9.2}, {:9.2})  r = {:6.1}",
            s.label, s.x.x, s.x.y, s.orbit_radius
        );
    }

    Ok(())
}
