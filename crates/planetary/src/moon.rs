//! Moon (satellite) body.

use orbital::constants::EARTH_DENSITY;
use serde::{Deserialize, Serialize};

/// Dynamical family of a moon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonKind {
    /// Formed in place: prograde, near-circular, close in
    Regular,
    /// Captured: distant, eccentric, often retrograde
    Irregular,
}

impl MoonKind {
    /// Fraction of the planet's Hill sphere a moon of this kind may occupy
    pub fn hill_fraction(&self) -> f64 {
        match self {
            Self::Regular => 0.5,
            Self::Irregular => 0.7,
        }
    }
}

impl std::fmt::Display for MoonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "Regular"),
            Self::Irregular => write!(f, "Irregular"),
        }
    }
}

/// A generated moon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    pub kind: MoonKind,
    /// Mass in Earth masses (M⊕)
    pub mass_earth: f64,
    /// Radius in Earth radii (R⊕)
    pub radius_earth: f64,
    /// Semi-major axis around the planet (km)
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    /// Inclination to the planet's equator (degrees)
    pub inclination_deg: f64,
    pub retrograde: bool,
    /// Whether the moon is ice-dominated
    pub icy: bool,
}

impl Moon {
    /// Bulk density in g/cm³
    pub fn density(&self) -> f64 {
        if self.radius_earth <= 0.0 {
            return 0.0;
        }
        EARTH_DENSITY * self.mass_earth / self.radius_earth.powi(3)
    }
}

/// Roman numeral designation for the `index`-th moon (0 → "I")
pub fn moon_numeral(index: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut remaining = index + 1;
    let mut numeral = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }
    numeral
}
