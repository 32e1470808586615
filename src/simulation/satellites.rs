//! Analytic satellite orbit tracking and capture
//!
//! Satellites do not feel gravity; each tick the phase angle advances by
//! a fixed increment and the satellite sits on a circle around its
//! reference body. If any other massive body is strictly closer to the
//! candidate position than the current orbital radius, the satellite is
//! captured onto it. The first closer body in list order wins; the scan
//! stops there, so the tie-break is deterministic but not
//! distance-optimal

use std::f64::consts::TAU;

use super::params::Parameters;
use super::states::{NVec2, SimulationState};

/// Advance every satellite's phase and position by one tick, applying
/// the capture rule before committing the new position
pub fn advance_satellites(sys: &mut SimulationState, params: &Parameters) {
    let step = params.orbit_rate * params.dt;

    // Disjoint field borrows: bodies are read-only here, satellites move
    let bodies = &sys.bodies;
    for sat in sys.satellites.iter_mut() {
        sat.theta = (sat.theta + step).rem_euclid(TAU);

        // Reference is kept valid by the collision resolver; a satellite
        // whose primary vanished mid-tick simply waits for the rebind
        let Some(mut ref_idx) = bodies.iter().position(|b| b.id == sat.reference) else {
            continue;
        };

        let mut candidate = bodies[ref_idx].x
            + sat.orbit_radius * NVec2::new(sat.theta.cos(), sat.theta.sin());

        // Capture: first body strictly closer to the candidate than the
        // current orbital radius takes over
        for (j, b) in bodies.iter().enumerate() {
            if j == ref_idx {
                continue;
            }
            let d = (candidate - b.x).norm();
            if d < sat.orbit_radius {
                sat.reference = b.id;
                sat.orbit_radius = d;
                let rel = candidate - b.x;
                sat.theta = rel.y.atan2(rel.x).rem_euclid(TAU);
                ref_idx = j;
                // Re-derive the candidate under the new reference before
                // committing
                candidate = bodies[ref_idx].x
                    + sat.orbit_radius * NVec2::new(sat.theta.cos(), sat.theta.sin());
                break;
            }
        }

        sat.x = candidate;
        sat.push_trail(params.trail_max);
    }
}

/// Pick the nearest massive body to `p` as an initial reference,
/// returning `(index, distance)`. Same strictly-closer, list-order rule
/// as the per-tick capture scan
pub fn nearest_reference(sys: &SimulationState, p: NVec2) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, b) in sys.bodies.iter().enumerate() {
        let d = (p - b.x).norm();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best
}
