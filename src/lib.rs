pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{BodyId, MassiveBody, NVec2, Satellite, SimulationState};
pub use simulation::catalog::BodyKind;
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, PointMass};
pub use simulation::integrator::rk4_integrator;
pub use simulation::engine::{Engine, Placement, MIN_PLACEMENT_RADIUS};
pub use simulation::explosions::{ExplosionGroup, Particle, PARTICLES_PER_BURST, PARTICLE_LIFETIME};
pub use simulation::scenario::build_scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_rk4};
