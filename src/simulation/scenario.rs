//! Build a fully-initialized engine from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Engine`]: parameters mapped onto [`Parameters`], a sun at the
//! origin, and every configured body placed through the same
//! circular-orbit placement path the interactive caller would use.
//! Explicit velocities override the computed orbit vector

use anyhow::{bail, Context, Result};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::catalog;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

pub fn build_scenario(cfg: ScenarioConfig) -> Result<Engine> {
    // Parameters (runtime) from ParametersConfig
    let p_cfg = &cfg.parameters;
    let defaults = Parameters::default();
    let parameters = Parameters {
        t_end: p_cfg.t_end,
        dt: p_cfg.dt,
        G: p_cfg.G,
        eps2: p_cfg.eps2,
        orbit_rate: p_cfg.orbit_rate,
        trail_max: p_cfg.trail_max.unwrap_or(defaults.trail_max),
        seed: p_cfg.seed.unwrap_or(defaults.seed),
    };

    let mut engine = Engine::new(parameters);

    for bc in &cfg.bodies {
        place_config_body(&mut engine, bc)
            .with_context(|| format!("placing configured body {:?}", bc.kind))?;
    }

    Ok(engine)
}

fn place_config_body(engine: &mut Engine, bc: &BodyConfig) -> Result<()> {
    if bc.x.len() != 2 {
        bail!("body position must have exactly two components, got {}", bc.x.len());
    }
    let kind = bc.kind;

    match &bc.v {
        // No explicit velocity: go through the engine's placement path
        None => {
            engine
                .place_body(kind.name(), bc.x[0], bc.x[1])
                .with_context(|| format!("engine rejected kind {:?}", kind))?;
        }
        // Explicit velocity: insert directly with catalog mass and size
        Some(v) => {
            if v.len() != 2 {
                bail!("body velocity must have exactly two components, got {}", v.len());
            }
            let x = NVec2::new(bc.x[0], bc.x[1]);
            let vel = NVec2::new(v[0], v[1]);
            if kind.is_satellite() {
                // Satellites always derive their orbit from geometry, so
                // route them through placement and overwrite the stored
                // velocity afterwards
                engine
                    .place_body(kind.name(), bc.x[0], bc.x[1])
                    .with_context(|| format!("engine rejected kind {:?}", kind))?;
                if let Some(sat) = engine.system.satellites.last_mut() {
                    sat.v = vel;
                }
            } else {
                let id = engine.system.alloc_id();
                engine
                    .system
                    .bodies
                    .push(catalog::massive_body(kind, id, x, vel));
            }
        }
    }

    Ok(())
}
