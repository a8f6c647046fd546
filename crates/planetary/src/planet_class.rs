//! Mass regimes of planets and what each regime implies for radius and
//! satellite systems.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Mass regime of a planet
///
/// | Class        | Mass (M⊕)  | Radius       | Typical satellites          |
/// |--------------|------------|--------------|-----------------------------|
/// | Rocky        | < 2        | R ∝ M^0.27   | none, sometimes one         |
/// | Transitional | 2-5        | R ∝ M^0.35   | none or a few               |
/// | Volatile     | 5-160      | R ∝ M^0.55   | several, many captured      |
/// | Giant        | ≥ 160      | ~11 R⊕       | large families              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetClass {
    Rocky,
    Transitional,
    Volatile,
    Giant,
}

/// Upper mass bounds (M⊕) of the first three classes
const CLASS_BOUNDS: [(PlanetClass, f64); 3] = [
    (PlanetClass::Rocky, 2.0),
    (PlanetClass::Transitional, 5.0),
    (PlanetClass::Volatile, 160.0),
];

/// How often planets of a class carry moons, and what kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonOccurrence {
    /// Probability of [none, one, two, three or more] moons
    pub count_weights: [f64; 4],
    /// Largest count drawn for the "three or more" bucket
    pub max_count: usize,
    /// Chance that any one moon is a captured irregular
    pub irregular_fraction: f64,
}

impl PlanetClass {
    pub fn from_earth_masses(mass_earth: f64) -> Self {
        CLASS_BOUNDS
            .iter()
            .find(|(_, bound)| mass_earth < *bound)
            .map_or(Self::Giant, |(class, _)| *class)
    }

    /// Holds a substantial gas or ice envelope
    pub fn is_gaseous(&self) -> bool {
        matches!(self, Self::Volatile | Self::Giant)
    }

    /// `(coefficient, exponent, log10 scatter)` of R = c × M^e in Earth units
    ///
    /// Chen & Kipping (2017) for the rocky side, Wolfgang et al. (2016) for
    /// envelopes, Thorngren et al. (2016) for giants.
    fn mass_radius_law(&self) -> (f64, f64, f64) {
        match self {
            Self::Rocky => (1.0, 0.27, 0.035),
            Self::Transitional => (1.0, 0.35, 0.06),
            Self::Volatile => (1.0, 0.55, 0.08),
            Self::Giant => (11.2, 0.01, 0.04),
        }
    }

    /// Mean radius (R⊕) for a mass (M⊕)
    pub fn radius_from_mass(&self, mass_earth: f64) -> f64 {
        let (coeff, exp, _) = self.mass_radius_law();
        coeff * mass_earth.powf(exp)
    }

    /// Radius (R⊕) with log-uniform scatter around the mean
    pub fn sample_radius(&self, mass_earth: f64, rng: &mut impl Rng) -> f64 {
        let (_, _, sigma) = self.mass_radius_law();
        self.radius_from_mass(mass_earth) * 10_f64.powf(rng.random_range(-sigma..sigma))
    }

    /// Satellite statistics, calibrated on the solar system's planets
    pub fn moon_occurrence(&self) -> MoonOccurrence {
        let (count_weights, max_count, irregular_fraction) = match self {
            Self::Rocky => ([0.70, 0.25, 0.05, 0.00], 4, 0.10),
            Self::Transitional => ([0.60, 0.28, 0.10, 0.02], 4, 0.15),
            Self::Volatile => ([0.15, 0.25, 0.35, 0.25], 8, 0.30),
            Self::Giant => ([0.03, 0.12, 0.35, 0.50], 16, 0.40),
        };
        MoonOccurrence {
            count_weights,
            max_count,
            irregular_fraction,
        }
    }
}

impl std::fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rocky => "rocky",
            Self::Transitional => "transitional",
            Self::Volatile => "volatile",
            Self::Giant => "giant",
        };
        f.write_str(name)
    }
}
