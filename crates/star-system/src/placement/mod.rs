//! Population of orbit hosts: planets into slots, moons around planets,
//! asteroid belts into the gaps left over.
//!
//! Every stage draws its decisions from the shared stream and forks a
//! fresh stream for each body it asks a leaf generator for.

pub mod belts;
pub mod moons;
pub mod planets;

use planetary::ParentContext;

use crate::host::OrbitHost;

pub use belts::{
    AsteroidBelt, BeltComposition, BeltProbabilities, BeltRegion, Gap, INNER_BELT_PROBABILITY,
    OUTER_BELT_PROBABILITY, find_gap,
};
pub use moons::{MOON_DENSITY, moon_band_km};
pub use planets::{PlacementMode, archetype_weights};

pub(crate) use belts::place_belts;
pub(crate) use moons::place_moons;
pub(crate) use planets::{place_planets, select_slots};

/// Leaf-generator context for bodies orbiting `host`
pub fn host_context(host: &OrbitHost, age_gyr: f64, metallicity: f64) -> ParentContext {
    ParentContext::new(
        host.mass,
        host.luminosity,
        host.temperature,
        age_gyr,
        metallicity,
    )
}
