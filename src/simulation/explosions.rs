//! Ephemeral explosion particles spawned by the collision resolver
//!
//! Particles fly out ballistically (plain per-tick position update, no
//! forces), age every tick and are dropped at their lifetime. A group
//! with no particles left is removed from the simulation

use std::f64::consts::TAU;

use rand::Rng;

use crate::simulation::states::{NVec2, SimulationState};

/// Particles spawned per burst
pub const PARTICLES_PER_BURST: usize = 50;

/// Ticks a particle lives before it is dropped
pub const PARTICLE_LIFETIME: u32 = 50;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2,
    pub v: NVec2, // applied raw each tick, no dt scaling
    pub radius: f64,
    pub age: u32,
    pub max_life: u32,
}

impl Particle {
    /// Rendering alpha, a linear fade from 1 to 0 over the lifetime
    pub fn alpha(&self) -> f64 {
        1.0 - self.age as f64 / self.max_life as f64
    }
}

#[derive(Debug, Clone)]
pub struct ExplosionGroup {
    pub particles: Vec<Particle>,
}

impl ExplosionGroup {
    /// Spawn a burst of particles at `origin` with random direction,
    /// speed in [2, 5) and radius in [2, 5)
    pub fn burst<R: Rng>(origin: NVec2, rng: &mut R) -> Self {
        let mut particles = Vec::with_capacity(PARTICLES_PER_BURST);
        for _ in 0..PARTICLES_PER_BURST {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(2.0..5.0);
            let radius = rng.gen_range(2.0..5.0);
            particles.push(Particle {
                x: origin,
                v: speed * NVec2::new(angle.cos(), angle.sin()),
                radius,
                age: 0,
                max_life: PARTICLE_LIFETIME,
            });
        }
        Self { particles }
    }

    /// Move and age every particle, dropping the expired ones
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.v;
            p.age += 1;
        }
        self.particles.retain(|p| p.age < p.max_life);
    }

    pub fn is_expired(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Advance every active group one tick and drop the expired ones
pub fn advance_explosions(sys: &mut SimulationState) {
    for group in &mut sys.explosions {
        group.advance();
    }
    sys.explosions.retain(|g| !g.is_expired());
}
