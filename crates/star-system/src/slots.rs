//! Candidate orbit slots around an orbit host.
//!
//! Slots are laid out from the inside out. Each step picks a mean-motion
//! resonance from [`RESONANCE_RATIOS`], jitters it, and never advances by
//! less than [`MIN_SPACING_FACTOR`] of the current distance. The field
//! stops at the host's outer stability limit or after [`MAX_SLOTS`].

use orbital::{Length, Mass, Perturber, RESONANCE_RATIOS, is_stable_against, resonance_spacing};
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::body::{BodyId, NodeId};
use crate::host::OrbitHost;

/// Hard cap on slots per host
pub const MAX_SLOTS: usize = 20;

/// Minimum fractional step between consecutive slots
pub const MIN_SPACING_FACTOR: f64 = 0.15;

/// Maximum fractional jitter applied to a resonance step
const RESONANCE_JITTER: f64 = 0.2;

/// Range of the multiplier applied to the innermost slot
const START_MULTIPLIER: (f64, f64) = (1.05, 1.2);

/// Closest slot allowed around a host, in stellar radii
const MIN_START_STELLAR_RADII: f64 = 3.0;

/// Fill probability floor and ceiling
const FILL_PROBABILITY_RANGE: (f64, f64) = (0.02, 1.0);

/// E-folding distance of the fill probability, in frost-line radii
const FILL_DECAY_FROST_LINES: f64 = 3.0;

/// Lower bound on the fill e-folding distance (AU)
const MIN_FILL_DECAY_AU: f64 = 0.5;

/// Thermal zone of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitZone {
    /// Inside the habitable zone's inner edge
    Hot,
    /// From the habitable zone's inner edge out to the frost line
    Temperate,
    /// At or beyond the frost line
    Cold,
}

impl OrbitZone {
    pub fn classify(distance_au: f64, host: &OrbitHost) -> Self {
        if distance_au < host.hz_inner_au {
            Self::Hot
        } else if distance_au < host.frost_line_au {
            Self::Temperate
        } else {
            Self::Cold
        }
    }

    /// Zone boundaries around `host` (AU)
    fn bounds(&self, host: &OrbitHost) -> (f64, f64) {
        match self {
            Self::Hot => (host.inner_stability_au, host.hz_inner_au),
            Self::Temperate => (host.hz_inner_au, host.frost_line_au),
            Self::Cold => (host.frost_line_au, host.outer_stability_au),
        }
    }

    /// Eccentricity ceiling at the zone's inner and outer edge
    fn eccentricity_range(&self) -> (f64, f64) {
        match self {
            Self::Hot => (0.02, 0.10),
            Self::Temperate => (0.05, 0.20),
            Self::Cold => (0.10, 0.35),
        }
    }
}

impl std::fmt::Display for OrbitZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hot => write!(f, "hot"),
            Self::Temperate => write!(f, "temperate"),
            Self::Cold => write!(f, "cold"),
        }
    }
}

/// A candidate orbit around one host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitSlot {
    pub host: NodeId,
    /// Position in the host's field, innermost first
    pub index: usize,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub zone: OrbitZone,
    /// Stable against the companions supplied at generation time
    pub stable: bool,
    pub fill_probability: f64,
    /// Body occupying the slot once filled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupant: Option<BodyId>,
}

impl OrbitSlot {
    pub fn is_filled(&self) -> bool {
        self.occupant.is_some()
    }

    /// Unfilled and stable
    pub fn is_available(&self) -> bool {
        !self.is_filled() && self.stable
    }

    /// Mark the slot as occupied; returns `false` if it already was
    pub(crate) fn fill(&mut self, body: BodyId) -> bool {
        if self.is_filled() {
            return false;
        }
        self.occupant = Some(body);
        true
    }
}

/// Suggested eccentricity: the ceiling grows across the zone, the draw
/// is squared to favour near-circular orbits
fn suggest_eccentricity(distance_au: f64, zone: OrbitZone, host: &OrbitHost, rng: &mut ChaChaRng) -> f64 {
    let (lo, hi) = zone.bounds(host);
    let depth = if hi > lo {
        ((distance_au - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (e_min, e_max) = zone.eccentricity_range();
    let ceiling = e_min + depth * (e_max - e_min);
    let u: f64 = rng.random();
    u * u * ceiling
}

/// Fill probability at `distance_au`: exponential decay clamped to
/// [0.02, 1.0]
pub fn fill_probability(distance_au: f64, host: &OrbitHost) -> f64 {
    let decay_au = (FILL_DECAY_FROST_LINES * host.frost_line_au).max(MIN_FILL_DECAY_AU);
    let (floor, ceiling) = FILL_PROBABILITY_RANGE;
    (-distance_au / decay_au).exp().clamp(floor, ceiling)
}

/// Next candidate distance outward from `distance_au`
fn next_distance(distance_au: f64, rng: &mut ChaChaRng) -> f64 {
    let resonance = RESONANCE_RATIOS[rng.random_range(0..RESONANCE_RATIOS.len())];
    let jitter = rng.random_range(-RESONANCE_JITTER..RESONANCE_JITTER);
    let floor = distance_au * (1.0 + MIN_SPACING_FACTOR);
    resonance_spacing(distance_au, resonance, jitter).max(floor)
}

/// Lay out the slot field for `host`
///
/// `perturbers` are companions checked by [`is_stable_against`]; an empty
/// list marks every slot stable.
pub fn generate_slots(host: &OrbitHost, perturbers: &[Perturber], rng: &mut ChaChaRng) -> Vec<OrbitSlot> {
    let mut slots = Vec::new();
    if !host.has_valid_zone() {
        return slots;
    }

    let base = host
        .inner_stability_au
        .max(MIN_START_STELLAR_RADII * host.max_star_radius_au);
    let mut distance_au = base * rng.random_range(START_MULTIPLIER.0..START_MULTIPLIER.1);

    while distance_au <= host.outer_stability_au && slots.len() < MAX_SLOTS {
        let zone = OrbitZone::classify(distance_au, host);
        let eccentricity = suggest_eccentricity(distance_au, zone, host, rng);

        slots.push(OrbitSlot {
            host: host.node,
            index: slots.len(),
            semi_major_axis_au: distance_au,
            eccentricity,
            zone,
            stable: is_stable_against(
                Length::from_au(distance_au),
                Mass::from_solar_masses(host.mass),
                perturbers,
            ),
            fill_probability: fill_probability(distance_au, host),
            occupant: None,
        });

        distance_au = next_distance(distance_au, rng);
    }

    debug!(
        node = %host.node,
        slots = slots.len(),
        "slot field generated"
    );
    slots
}
