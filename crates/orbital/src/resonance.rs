//! Mean-motion resonance spacing between neighbouring orbits.

use serde::{Deserialize, Serialize};

/// A period ratio p:q with p > q
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resonance {
    pub outer: u8,
    pub inner: u8,
}

impl Resonance {
    pub const fn new(outer: u8, inner: u8) -> Self {
        Self { outer, inner }
    }

    /// Period ratio P_outer / P_inner
    pub fn period_ratio(&self) -> f64 {
        self.outer as f64 / self.inner as f64
    }

    /// Distance ratio a_outer / a_inner implied by Kepler's third law
    pub fn distance_ratio(&self) -> f64 {
        self.period_ratio().powf(2.0 / 3.0)
    }
}

impl std::fmt::Display for Resonance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.outer, self.inner)
    }
}

/// Resonances used to space candidate orbits, most common first
pub const RESONANCE_RATIOS: [Resonance; 7] = [
    Resonance::new(2, 1),
    Resonance::new(3, 2),
    Resonance::new(5, 3),
    Resonance::new(7, 5),
    Resonance::new(8, 5),
    Resonance::new(5, 4),
    Resonance::new(4, 3),
];

/// Distance of the next orbit outward from `inner_au` at a resonance
///
/// ```text
/// a_next = a_inner × (p/q)^(2/3) × (1 + jitter)
/// ```
///
/// `jitter` is a fractional perturbation (e.g. ±0.2); pass `0.0` for an
/// exact resonance. Returns `0.0` for non-positive distance or a jitter
/// that would collapse the orbit.
pub fn resonance_spacing(inner_au: f64, resonance: Resonance, jitter: f64) -> f64 {
    if inner_au <= 0.0 || resonance.inner == 0 || jitter <= -1.0 {
        return 0.0;
    }
    inner_au * resonance.distance_ratio() * (1.0 + jitter)
}
