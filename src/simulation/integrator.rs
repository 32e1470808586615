//! Fixed-step time integrator for the massive bodies
//!
//! Classical 4-stage Runge–Kutta applied independently per body, driven
//! by `AccelSet` and `Parameters`. All stages of every body read the
//! other bodies' positions frozen at the start of the tick; this
//! first-order decoupling of the stage evaluations is part of the
//! engine's observable behavior and is kept as-is

use super::forces::{AccelSet, PointMass};
use super::params::Parameters;
use super::states::{NVec2, SimulationState};

/// Advance every massive body by one step `params.dt` using RK4 and
/// update `sys.t` in-place. Satellites and explosions are untouched
pub fn rk4_integrator(sys: &mut SimulationState, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt;

    // Frozen snapshot of all gravity sources at t_n. Every stage of every
    // body queries this snapshot, so the order of body updates within the
    // tick cannot affect the result
    let frozen: Vec<PointMass> = sys
        .bodies
        .iter()
        .map(|b| PointMass { x: b.x, m: b.m })
        .collect();

    // Per-body deltas, applied only after all bodies are integrated
    let mut deltas: Vec<(NVec2, NVec2, NVec2)> = Vec::with_capacity(n);

    for (i, b) in sys.bodies.iter().enumerate() {
        let accel = |p: NVec2| forces.acceleration_at(p, Some(i), &frozen);

        // k1 at (x_n, v_n)
        let k1x = dt * b.v;
        let k1v = dt * accel(b.x);

        // k2 at the half-step offsets from k1
        let k2x = dt * (b.v + 0.5 * k1v);
        let k2v = dt * accel(b.x + 0.5 * k1x);

        // k3 at the half-step offsets from k2
        let k3x = dt * (b.v + 0.5 * k2v);
        let k3v = dt * accel(b.x + 0.5 * k2x);

        // k4 at the full-step offsets from k3
        let k4x = dt * (b.v + k3v);
        let k4v = dt * accel(b.x + k3x);

        // Weighted combination: (k1 + 2 k2 + 2 k3 + k4) / 6
        let dx = (k1x + 2.0 * k2x + 2.0 * k3x + k4x) / 6.0;
        let dv = (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0;

        // Stage-1 acceleration doubles as the exposed per-body
        // acceleration for this tick
        deltas.push((dx, dv, k1v / dt));
    }

    for (b, (dx, dv, a0)) in sys.bodies.iter_mut().zip(deltas) {
        b.x += dx;
        b.v += dv;
        b.a = a0;
        b.push_trail(params.trail_max);
    }

    // Increment the system time by one full step
    sys.t += dt;
}
