use std::time::Instant;

use crate::simulation::forces::{AccelSet, NewtonianGravity, PointMass};
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{MassiveBody, NVec2, SimulationState};
use crate::simulation::catalog::BodyKind;

use std::collections::VecDeque;

/// Build a deterministic n-body state on a spiral, no rand needed
fn spiral_state(n: usize) -> SimulationState {
    let mut sys = SimulationState::new();
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
        let id = sys.alloc_id();
        sys.bodies.push(MassiveBody {
            id,
            label: format!("b{i}"),
            kind: BodyKind::Earth,
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            m: 1.0,
            size: 1.0,
            trail: VecDeque::new(),
        });
    }
    sys
}

pub fn bench_gravity() {
    // Different body counts to test
    let ns = [8, 16, 32, 64, 128, 256];

    for n in ns {
        let sys = spiral_state(n);
        let sources: Vec<PointMass> = sys
            .bodies
            .iter()
            .map(|b| PointMass { x: b.x, m: b.m })
            .collect();

        let gravity = AccelSet::new().with(NewtonianGravity { G: 1.0, eps2: 1.0 });

        // Warm up
        let mut sink = NVec2::zeros();
        for i in 0..n {
            sink += gravity.acceleration_at(sources[i].x, Some(i), &sources);
        }

        // Time one full round of point queries (one force stage)
        let t0 = Instant::now();
        for i in 0..n {
            sink += gravity.acceleration_at(sources[i].x, Some(i), &sources);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:4}, stage = {dt:10.8} s, sink = {:.3e}", sink.norm());
    }
}

pub fn bench_rk4() {
    // Different body counts, fixed step count
    let ns = [8, 16, 32, 64, 128];
    let steps = 1000;

    for n in ns {
        let mut sys = spiral_state(n);
        let params = Parameters::default();
        let forces = AccelSet::new().with(NewtonianGravity {
            G: params.G,
            eps2: params.eps2,
        });

        // Warm up
        rk4_integrator(&mut sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            rk4_integrator(&mut sys, &forces, &params);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:4}, {steps} steps = {dt:8.6} s, per step = {:10.8} s",
            dt / steps as f64
        );
    }
}
