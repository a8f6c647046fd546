//! Orbital mechanics for system assembly
//!
//! Pure, stateless functions used to carve out the usable orbital regions
//! around stars and barycenters. Every function is total: non-physical
//! input (zero or negative masses, distances, periods) produces zero or
//! `false` instead of an error, so callers can treat "no answer" as
//! "this region is unusable".
//!
//! Stability limits take and return [`units::Length`] and [`units::Mass`].
//! The two-body relations in [`kepler`] work on bare numbers in AU, solar
//! masses, years and solar luminosities unless a name says otherwise.
//!
//! # References
//! - Holman & Wiegert (1999) - "Long-Term Stability of Planets in Binary Systems"
//! - Kopparapu et al. (2013) - habitable zone boundaries
//! - Hayashi (1981) - snow line scaling

pub mod constants;
pub mod kepler;
pub mod resonance;
pub mod stability;
pub mod zones;


pub use kepler::{hill_radius, orbital_period, roche_limit, semi_major_axis};
pub use resonance::{RESONANCE_RATIOS, Resonance, resonance_spacing};
pub use stability::{
    Perturber, is_stable_against, jacobi_radius, outer_region_limit, p_type_critical_radius,
    protoplanetary_disk_radius, s_type_critical_radius,
};
pub use units::{Length, Mass};
pub use zones::{HabitableZone, frost_line};
