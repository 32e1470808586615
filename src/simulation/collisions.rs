//! Collision detection and resolution
//!
//! Three independent O(n^2) scans per tick, each resolving at most one
//! event before returning:
//! - massive body vs massive body: perfectly-inelastic merge
//! - satellite vs massive body: the satellite is destroyed
//! - satellite vs satellite: both are destroyed
//!
//! Stopping after the first hit in each scan is the resolver's documented
//! policy: per-tick work stays bounded and in-place removals never
//! invalidate the indices of an ongoing scan. Remaining overlaps are
//! picked up on the next tick, so a simultaneous triple collision takes
//! more than one tick to settle

use std::collections::VecDeque;

use rand::Rng;

use super::explosions::ExplosionGroup;
use super::states::{BodyId, MassiveBody, NVec2, SimulationState};

/// Run all three collision scans for this tick
pub fn resolve_collisions<R: Rng>(sys: &mut SimulationState, rng: &mut R) {
    resolve_body_merge(sys, rng);
    resolve_satellite_body(sys, rng);
    resolve_satellite_pair(sys, rng);
}

/// Merge the first overlapping pair of massive bodies, if any.
///
/// The merged body follows the perfectly-inelastic center-of-mass rule
/// for position and velocity, conserves mass exactly, combines sizes
/// area-preservingly and inherits the heavier input's identity (the
/// first input on an exact mass tie). Returns whether a merge happened
pub fn resolve_body_merge<R: Rng>(sys: &mut SimulationState, rng: &mut R) -> bool {
    let n = sys.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let bi = &sys.bodies[i];
            let bj = &sys.bodies[j];

            let dist = (bi.x - bj.x).norm();
            if dist >= 0.5 * (bi.size + bj.size) {
                continue;
            }

            sys.explosions
                .push(ExplosionGroup::burst(0.5 * (bi.x + bj.x), rng));

            let m = bi.m + bj.m;
            let x = (bi.m * bi.x + bj.m * bj.x) / m;
            let v = (bi.m * bi.v + bj.m * bj.v) / m;
            let size = (bi.size * bi.size + bj.size * bj.size).sqrt();

            let heavier = if bj.m > bi.m { j } else { i };
            let kind = sys.bodies[heavier].kind;
            let label = sys.bodies[heavier].label.clone();

            let removed = (sys.bodies[i].id, sys.bodies[j].id);
            // Higher index first so `i` stays valid
            sys.bodies.remove(j);
            sys.bodies.remove(i);

            let id = sys.alloc_id();
            sys.bodies.push(MassiveBody {
                id,
                label,
                kind,
                x,
                v,
                a: NVec2::zeros(),
                m,
                size,
                trail: VecDeque::new(),
            });

            rebind_orphans(sys, removed, id);
            return true;
        }
    }
    false
}

/// Satellites whose reference was consumed by a merge are rebound to the
/// merged body in the same tick, with radius and phase recomputed
fn rebind_orphans(sys: &mut SimulationState, removed: (BodyId, BodyId), merged: BodyId) {
    let Some(idx) = sys.body_index(merged) else {
        return;
    };
    let merged_x = sys.bodies[idx].x;

    for sat in &mut sys.satellites {
        if sat.reference == removed.0 || sat.reference == removed.1 {
            let rel = sat.x - merged_x;
            sat.reference = merged;
            sat.orbit_radius = rel.norm();
            sat.theta = rel.y.atan2(rel.x).rem_euclid(std::f64::consts::TAU);
        }
    }
}

/// Destroy the first satellite overlapping a massive body, if any. The
/// body is unaffected; the explosion fires at the satellite's position
pub fn resolve_satellite_body<R: Rng>(sys: &mut SimulationState, rng: &mut R) -> bool {
    for si in 0..sys.satellites.len() {
        let sat = &sys.satellites[si];
        for b in &sys.bodies {
            let dist = (sat.x - b.x).norm();
            if dist < 0.5 * (sat.size + b.size) {
                let origin = sat.x;
                sys.satellites.remove(si);
                sys.explosions.push(ExplosionGroup::burst(origin, rng));
                return true;
            }
        }
    }
    false
}

/// Destroy the first overlapping satellite pair, if any. Satellites do
/// not merge; both are removed and the explosion fires at the midpoint
pub fn resolve_satellite_pair<R: Rng>(sys: &mut SimulationState, rng: &mut R) -> bool {
    let n = sys.satellites.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let si = &sys.satellites[i];
            let sj = &sys.satellites[j];

            let dist = (si.x - sj.x).norm();
            if dist < 0.5 * (si.size + sj.size) {
                let origin = 0.5 * (si.x + sj.x);
                // Higher index first so `i` stays valid
                sys.satellites.remove(j);
                sys.satellites.remove(i);
                sys.explosions.push(ExplosionGroup::burst(origin, rng));
                return true;
            }
        }
    }
    false
}
