//! Catalog of placeable body kinds
//!
//! Each kind carries the visual radius and mass used when a caller places
//! it. The factory functions return a fresh instance every time; no state
//! is shared between placed bodies

use std::collections::VecDeque;

use serde::Deserialize;

use crate::simulation::states::{BodyId, MassiveBody, NVec2, Satellite};

/// Named body kinds known to the engine. `Moon` is satellite-class, the
/// rest are massive
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Sun,
    Mars,
    Earth,
    Jupiter,
    Saturn,
    Neptune,
    Moon,
}

impl BodyKind {
    /// Look a kind up by its lowercase name. Unknown names yield `None`;
    /// callers treat that as a placement no-op
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sun" => Some(Self::Sun),
            "mars" => Some(Self::Mars),
            "earth" => Some(Self::Earth),
            "jupiter" => Some(Self::Jupiter),
            "saturn" => Some(Self::Saturn),
            "neptune" => Some(Self::Neptune),
            "moon" => Some(Self::Moon),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Mars => "mars",
            Self::Earth => "earth",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Neptune => "neptune",
            Self::Moon => "moon",
        }
    }

    /// Visual radius, also the collision threshold input
    pub fn size(self) -> f64 {
        match self {
            Self::Sun => 80.0,
            Self::Mars => 20.0,
            Self::Earth => 30.0,
            Self::Jupiter => 60.0,
            Self::Saturn => 50.0,
            Self::Neptune => 40.0,
            Self::Moon => 15.0,
        }
    }

    /// Mass in Earth masses
    pub fn mass(self) -> f64 {
        match self {
            Self::Sun => 333000.0,
            Self::Mars => 0.107,
            Self::Earth => 1.0,
            Self::Jupiter => 317.8,
            Self::Saturn => 95.2,
            Self::Neptune => 17.1,
            Self::Moon => 0.0123,
        }
    }

    pub fn is_satellite(self) -> bool {
        matches!(self, Self::Moon)
    }
}

/// Build a fresh massive body of the given kind
pub fn massive_body(kind: BodyKind, id: BodyId, x: NVec2, v: NVec2) -> MassiveBody {
    MassiveBody {
        id,
        label: kind.name().to_string(),
        kind,
        x,
        v,
        a: NVec2::zeros(),
        m: kind.mass(),
        size: kind.size(),
        trail: VecDeque::new(),
    }
}

/// Build a fresh satellite of the given kind, bound to `reference`
pub fn satellite(
    kind: BodyKind,
    id: BodyId,
    x: NVec2,
    v: NVec2,
    reference: BodyId,
    orbit_radius: f64,
    theta: f64,
) -> Satellite {
    Satellite {
        id,
        label: kind.name().to_string(),
        kind,
        x,
        v,
        m: kind.mass(),
        size: kind.size(),
        reference,
        orbit_radius,
        theta,
        trail: VecDeque::new(),
    }
}
