//! Force / acceleration contributors for the orbital engine
//!
//! Defines the point-query acceleration trait and softened Newtonian
//! gravity. Terms are evaluated against a frozen snapshot of the massive
//! bodies so the integrator can probe offset positions without touching
//! live state

use crate::simulation::states::NVec2;

/// Frozen view of a gravitating body: position and mass at the start of
/// the tick
#[derive(Debug, Clone, Copy)]
pub struct PointMass {
    pub x: NVec2,
    pub m: f64,
}

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are
/// summed into a single acceleration vector per query
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration at point `p` from all terms, over the frozen
    /// `sources`. `exclude` names the source index the query point belongs
    /// to so a body never attracts itself
    pub fn acceleration_at(&self, p: NVec2, exclude: Option<usize>, sources: &[PointMass]) -> NVec2 {
        let mut out = NVec2::zeros();
        for term in &self.terms {
            out += term.acceleration(p, exclude, sources);
        }
        out
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources queried at a point
pub trait Acceleration {
    fn acceleration(&self, p: NVec2, exclude: Option<usize>, sources: &[PointMass]) -> NVec2;
}

/// Newtonian gravity with softening
/// `eps2` is added in quadrature to the separation to smooth close
/// encounters and avoid singularities at zero separation
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening length squared
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, p: NVec2, exclude: Option<usize>, sources: &[PointMass]) -> NVec2 {
        let mut out = NVec2::zeros();

        for (j, s) in sources.iter().enumerate() {
            if Some(j) == exclude {
                continue;
            }

            // r is the displacement from the query point to source j;
            // the pull on the query point is along +r
            let r = s.x - p;

            // Softened squared distance: d2 = |r|^2 + eps^2
            let d2 = r.dot(&r) + self.eps2;

            // 1 / |r_soft| and 1 / |r_soft|^3
            // (Newtonian acceleration is a = G m r / |r|^3)
            let inv_r = d2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;

            out += self.G * s.m * inv_r3 * r;
        }

        out
    }
}
