//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – one placement on top of the default sun
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 200.0            # total simulation time
//!   dt: 0.1                 # fixed step size
//!   G: 1.0                  # gravitational constant
//!   eps2: 1.0               # softening epsilon^2
//!   orbit_rate: 0.5         # satellite angular-rate factor
//!   trail_max: 100          # optional, trail cap per body
//!   seed: 42                # optional, deterministic seed
//!
//! bodies:
//!   - kind: earth
//!     x: [ 200.0, 0.0 ]     # circular-orbit velocity computed at build
//!   - kind: jupiter
//!     x: [ -400.0, 50.0 ]
//!     v: [ 3.0, 12.0 ]      # optional explicit velocity override
//!   - kind: moon
//!     x: [ 240.0, 0.0 ]     # satellite, bound to its nearest body
//! ```
//!
//! The engine maps this configuration into its internal runtime
//! representation; the sun itself is implicit and always starts at the
//! origin at rest.

use serde::Deserialize;

use crate::simulation::catalog::BodyKind;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,              // time end for the headless run
    pub dt: f64,                 // fixed step size
    pub G: f64,                  // gravitational constant
    pub eps2: f64,               // softening - prevents singular forces at small separations
    pub orbit_rate: f64,         // satellite angular-rate factor
    pub trail_max: Option<usize>, // trail cap per body
    pub seed: Option<u64>,       // deterministic seed to make runs reproducable
}

/// Configuration for a single placed body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub kind: BodyKind,      // catalog kind ("earth", "moon", ...); unknown names fail at load
    pub x: Vec<f64>,         // world position [x, y]
    pub v: Option<Vec<f64>>, // explicit velocity; default is the circular-orbit vector
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // placements added on top of the default sun
}
