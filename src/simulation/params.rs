//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - softening and gravitational constant (`eps2`, `G`),
//! - satellite angular-rate factor and trail cap,
//! - random seed for explosion spawning

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end for headless runs
    pub dt: f64, // fixed step size
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening length squared
    pub orbit_rate: f64, // satellite angular-rate factor (rad per time unit)
    pub trail_max: usize, // trail cap per body
    pub seed: u64, // deterministic seed for explosion spawning
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 100.0,
            dt: 0.1,
            G: 1.0,
            eps2: 1.0,
            orbit_rate: 0.5,
            trail_max: 100,
            seed: 42,
        }
    }
}
