pub mod states;
pub mod params;
pub mod catalog;
pub mod forces;
pub mod integrator;
pub mod satellites;
pub mod collisions;
pub mod explosions;
pub mod engine;
pub mod scenario;
