//! The simulation engine: tick orchestration and the caller-facing surface
//!
//! `Engine` bundles the runtime parameters, the mutable state, the active
//! force set and the seeded rng. An external scheduler drives it by
//! calling [`Engine::advance_tick`] once per logical frame; everything
//! else (placement, tunables, reset) happens between ticks. The engine
//! owns no drawing or I/O and always leaves a renderable snapshot behind

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::catalog::{self, BodyKind};
use super::collisions::resolve_collisions;
use super::explosions::advance_explosions;
use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::rk4_integrator;
use super::params::Parameters;
use super::satellites::{advance_satellites, nearest_reference};
use super::states::{NVec2, SimulationState};

/// Floor for the placement radius. Placing a body exactly on top of the
/// sun would otherwise divide by zero in the circular-orbit velocity
pub const MIN_PLACEMENT_RADIUS: f64 = 1.0;

/// What a successful `place_body` created, with its index in the
/// corresponding list at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Massive(usize),
    Satellite(usize),
}

pub struct Engine {
    pub parameters: Parameters,
    pub system: SimulationState,
    pub forces: AccelSet,
    rng: StdRng,
}

impl Engine {
    /// Create an engine holding only the sun at the origin, at rest
    pub fn new(parameters: Parameters) -> Self {
        let system = initial_state();
        let forces = build_forces(&parameters);
        let rng = StdRng::seed_from_u64(parameters.seed);
        Self {
            parameters,
            system,
            forces,
            rng,
        }
    }

    /// Advance the whole simulation by one fixed step:
    /// integrator, satellite tracker, collision resolver, explosions.
    /// Runs to completion; no re-entrancy, no suspension
    pub fn advance_tick(&mut self) {
        let Engine {
            parameters,
            system,
            forces,
            rng,
        } = self;

        rk4_integrator(system, forces, parameters);
        advance_satellites(system, parameters);
        resolve_collisions(system, rng);
        advance_explosions(system);

        system.ticks += 1;
    }

    /// Place a body of the named kind at a world coordinate.
    ///
    /// The initial velocity is the circular-orbit vector around the sun
    /// (`bodies[0]`): v = sqrt(G M_sun / r), perpendicular to the radius
    /// vector. Placements within [`MIN_PLACEMENT_RADIUS`] of the sun are
    /// treated as sitting one clamp radius along +x. A satellite
    /// kind is additionally bound to its nearest massive body. An
    /// unrecognized kind creates nothing and returns `None`
    pub fn place_body(&mut self, kind: &str, world_x: f64, world_y: f64) -> Option<Placement> {
        let kind = BodyKind::from_name(kind)?;
        let pos = NVec2::new(world_x, world_y);

        let sun = self.system.bodies.first()?;
        let mut d = pos - sun.x;
        if d.norm() < MIN_PLACEMENT_RADIUS {
            // Degenerate placement on top of the sun has no usable
            // direction; treat it as sitting one clamp radius along +x
            d = NVec2::new(MIN_PLACEMENT_RADIUS, 0.0);
        }
        let r = d.norm();
        let v_mag = (self.parameters.G * sun.m / r).sqrt();
        let v = NVec2::new(-v_mag * d.y / r, v_mag * d.x / r);

        if kind.is_satellite() {
            let (ref_idx, orbit_radius) = nearest_reference(&self.system, pos)?;
            let reference = self.system.bodies[ref_idx].id;
            let rel = pos - self.system.bodies[ref_idx].x;
            let theta = rel.y.atan2(rel.x).rem_euclid(std::f64::consts::TAU);

            let id = self.system.alloc_id();
            self.system
                .satellites
                .push(catalog::satellite(kind, id, pos, v, reference, orbit_radius, theta));
            Some(Placement::Satellite(self.system.satellites.len() - 1))
        } else {
            let id = self.system.alloc_id();
            self.system
                .bodies
                .push(catalog::massive_body(kind, id, pos, v));
            Some(Placement::Massive(self.system.bodies.len() - 1))
        }
    }

    /// Change the gravitational constant for all subsequent force
    /// evaluations
    pub fn set_gravitational_constant(&mut self, value: f64) {
        self.parameters.G = value;
        self.forces = build_forces(&self.parameters);
    }

    /// Change the satellite angular-rate factor for all subsequent
    /// tracker evaluations
    pub fn set_orbit_rate_factor(&mut self, value: f64) {
        self.parameters.orbit_rate = value;
    }

    /// Clear everything back to a fresh sun at the origin. Tunables are
    /// kept; counters and the rng are reset
    pub fn reset(&mut self) {
        self.system = initial_state();
        self.rng = StdRng::seed_from_u64(self.parameters.seed);
    }
}

fn initial_state() -> SimulationState {
    let mut system = SimulationState::new();
    let id = system.alloc_id();
    system
        .bodies
        .push(catalog::massive_body(BodyKind::Sun, id, NVec2::zeros(), NVec2::zeros()));
    system
}

fn build_forces(params: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: params.G,
        eps2: params.eps2,
    })
}
