//! Core state types for the orbital simulation.
//!
//! Defines the body/system structs:
//! - `MassiveBody` - sun/planet-class object that exerts and feels gravity
//! - `Satellite`   - moon-class object on an analytic circular orbit
//! - `SimulationState` - owns all mutable collections and the clock
//!
//! The state holds the list of bodies, satellites and explosions plus the
//! current simulation time `t` and the tick counter.

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::simulation::catalog::BodyKind;
use crate::simulation::explosions::ExplosionGroup;

pub type NVec2 = Vector2<f64>;

/// Stable identity for a massive body.
///
/// Merges remove entries from `SimulationState::bodies` and append the
/// merged result, so list indices shift; satellites reference their
/// primary by id instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

#[derive(Debug, Clone)]
pub struct MassiveBody {
    pub id: BodyId,
    pub label: String, // display name, renamed on merge
    pub kind: BodyKind, // visual identity
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration at the start of the last tick
    pub m: f64, // mass (> 0)
    pub size: f64, // visual radius, also the collision threshold input
    pub trail: VecDeque<NVec2>, // past positions, oldest first
}

impl MassiveBody {
    /// Record the current position in the trail, dropping the oldest
    /// entries once `max` is reached. Observational only, never feeds
    /// back into physics
    pub fn push_trail(&mut self, max: usize) {
        if max == 0 {
            return;
        }
        while self.trail.len() >= max {
            self.trail.pop_front();
        }
        self.trail.push_back(self.x);
    }
}

/// Moon-class object. Structurally like [`MassiveBody`] plus the analytic
/// orbit bookkeeping: a reference primary, an orbital radius and a phase
/// angle in [0, 2pi)
#[derive(Debug, Clone)]
pub struct Satellite {
    pub id: BodyId,
    pub label: String,
    pub kind: BodyKind,
    pub x: NVec2,
    pub v: NVec2, // set at placement; the tracker itself is analytic
    pub m: f64,
    pub size: f64,
    pub reference: BodyId, // primary; always present in `bodies` while the satellite exists
    pub orbit_radius: f64, // distance to the reference
    pub theta: f64, // phase angle, radians in [0, 2pi)
    pub trail: VecDeque<NVec2>,
}

impl Satellite {
    pub fn push_trail(&mut self, max: usize) {
        if max == 0 {
            return;
        }
        while self.trail.len() >= max {
            self.trail.pop_front();
        }
        self.trail.push_back(self.x);
    }
}

/// The whole mutable simulation state. Mutated only inside
/// `Engine::advance_tick`; external collaborators treat it as a read-only
/// snapshot between ticks
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub bodies: Vec<MassiveBody>, // insertion order; bodies[0] is conventionally the sun
    pub satellites: Vec<Satellite>,
    pub explosions: Vec<ExplosionGroup>,
    pub t: f64, // simulation time
    pub ticks: u64, // completed ticks
    next_id: u64,
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            satellites: Vec::new(),
            explosions: Vec::new(),
            t: 0.0,
            ticks: 0,
            next_id: 0,
        }
    }

    /// Hand out the next stable body id
    pub fn alloc_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn body_by_id(&self, id: BodyId) -> Option<&MassiveBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_index(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
