//! Stability limits for planets in single and multiple star systems.
//!
//! # Orbital Types
//!
//! - **S-type (circumstellar)**: planet orbits one component, the companion
//!   is external. Stable inside a fraction of the binary separation.
//! - **P-type (circumbinary)**: planet orbits the pair. Stable outside a
//!   multiple of the binary separation.
//!
//! Both limits are the Holman & Wiegert (1999) polynomial fits in the mass
//! parameter μ = M₂/(M₁+M₂) and binary eccentricity e, with a safety margin
//! applied on top (S-type shrunk by 10%, P-type pushed out by 10%).
//!
//! Distances are [`Length`] and masses are [`Mass`]; the mass ratio μ and
//! eccentricities stay plain numbers.

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::kepler::hill_radius;

/// Safety margin applied to the S-type critical radius
const S_TYPE_MARGIN: f64 = 0.9;

/// Safety margin applied to the P-type critical radius
const P_TYPE_MARGIN: f64 = 1.1;

/// Protoplanetary disk truncation radius for a 1 M☉ star (AU)
const DISK_RADIUS_SOLAR_AU: f64 = 100.0;

/// Galactic tidal (Jacobi) radius for a 1 M☉ star (AU)
const JACOBI_RADIUS_SOLAR_AU: f64 = 1.7e5;

/// Fraction of a companion's periapsis an orbit may reach
const PERIAPSIS_FRACTION: f64 = 1.0 / 3.0;

/// Fraction of the host's Hill sphere (relative to a companion) an orbit may reach
const HILL_FRACTION: f64 = 0.5;

/// Multiple of an inner companion's apoapsis an orbit must clear
const INNER_CLEARANCE: f64 = 3.0;

fn valid_binary(separation: Length, mass_ratio: f64, eccentricity: f64) -> bool {
    separation.is_positive() && mass_ratio > 0.0 && mass_ratio < 1.0 && (0.0..1.0).contains(&eccentricity)
}

/// Maximum stable semi-major axis for an S-type orbit
///
/// ```text
/// a_crit = a_bin × (0.464 − 0.380μ − 0.631e + 0.586μe + 0.150e² − 0.198μe²) × 0.9
/// ```
///
/// `mass_ratio` is μ measured from the orbited star: companion mass over
/// total mass. Returns zero for invalid input or when the fit goes
/// non-positive (extremely eccentric binaries).
pub fn s_type_critical_radius(separation: Length, mass_ratio: f64, eccentricity: f64) -> Length {
    if !valid_binary(separation, mass_ratio, eccentricity) {
        return Length::zero();
    }

    let mu = mass_ratio;
    let e = eccentricity;
    let factor = 0.464 - 0.380 * mu - 0.631 * e + 0.586 * mu * e + 0.150 * e.powi(2)
        - 0.198 * mu * e.powi(2);

    if factor <= 0.0 {
        return Length::zero();
    }
    separation * factor * S_TYPE_MARGIN
}

/// Minimum stable semi-major axis for a P-type orbit
///
/// ```text
/// a_crit = a_bin × (1.60 + 5.10e − 2.22e² + 4.12μ − 4.27μe − 5.09μ² + 4.61μ²e²) × 1.1
/// ```
///
/// `mass_ratio` is the secondary's share of the total mass.
/// Returns zero for invalid input.
pub fn p_type_critical_radius(separation: Length, mass_ratio: f64, eccentricity: f64) -> Length {
    if !valid_binary(separation, mass_ratio, eccentricity) {
        return Length::zero();
    }

    let mu = mass_ratio;
    let e = eccentricity;
    let factor = 1.60 + 5.10 * e - 2.22 * e.powi(2) + 4.12 * mu - 4.27 * mu * e
        - 5.09 * mu.powi(2)
        + 4.61 * mu.powi(2) * e.powi(2);

    if factor <= 0.0 {
        return Length::zero();
    }
    separation * factor * P_TYPE_MARGIN
}

/// Outer edge of the planet-forming disk, scaling as M^0.6
pub fn protoplanetary_disk_radius(mass: Mass) -> Length {
    if !mass.is_positive() {
        return Length::zero();
    }
    Length::from_au(DISK_RADIUS_SOLAR_AU * mass.to_solar_masses().powf(0.6))
}

/// Galactic tidal radius, scaling as M^(1/3)
pub fn jacobi_radius(mass: Mass) -> Length {
    if !mass.is_positive() {
        return Length::zero();
    }
    Length::from_au(JACOBI_RADIUS_SOLAR_AU * mass.to_solar_masses().cbrt())
}

/// Outermost region that can host planets around an isolated mass
///
/// The smaller of the disk formation radius and the Jacobi radius.
pub fn outer_region_limit(mass: Mass) -> Length {
    protoplanetary_disk_radius(mass).min(jacobi_radius(mass))
}

/// A companion mass that may perturb orbits around a host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perturber {
    pub mass: Mass,
    /// Semi-major axis of the companion relative to the host
    pub separation: Length,
    pub eccentricity: f64,
}

impl Perturber {
    pub fn new(mass: Mass, separation: Length, eccentricity: f64) -> Self {
        Self {
            mass,
            separation,
            eccentricity,
        }
    }

    pub fn periapsis(&self) -> Length {
        self.separation * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> Length {
        self.separation * (1.0 + self.eccentricity)
    }
}

/// Heuristic check that an orbit survives every listed companion
///
/// For a companion outside the orbit, the orbit must stay inside a third
/// of the companion's periapsis and inside half of the host's Hill sphere
/// measured against the companion. For a companion inside the orbit, the
/// orbit must clear three times the companion's apoapsis.
///
/// An empty perturber list is trivially stable. Invalid orbit or host
/// mass yields `false`; perturbers with non-positive mass or separation
/// are ignored.
pub fn is_stable_against(orbit: Length, host_mass: Mass, perturbers: &[Perturber]) -> bool {
    if !orbit.is_positive() || !host_mass.is_positive() {
        return false;
    }

    perturbers
        .iter()
        .filter(|p| p.mass.is_positive() && p.separation.is_positive())
        .all(|p| {
            if p.separation > orbit {
                let hill = Length::from_au(hill_radius(
                    p.separation.to_au(),
                    host_mass.to_solar_masses(),
                    p.mass.to_solar_masses(),
                ));
                orbit < p.periapsis() * PERIAPSIS_FRACTION && orbit < hill * HILL_FRACTION
            } else {
                orbit > p.apoapsis() * INNER_CLEARANCE
            }
        })
}
