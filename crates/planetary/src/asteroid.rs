//! Major asteroid body.

use serde::{Deserialize, Serialize};

/// Taxonomic composition of an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidComposition {
    /// C-type, dark and primitive
    Carbonaceous,
    /// S-type, stony
    Silicaceous,
    /// M-type, iron-nickel
    Metallic,
    /// Volatile-rich, beyond the frost line
    Icy,
}

impl AsteroidComposition {
    /// Bulk density in kg/m³
    pub fn density(&self) -> f64 {
        match self {
            Self::Carbonaceous => 1_700.0,
            Self::Silicaceous => 2_700.0,
            Self::Metallic => 5_300.0,
            Self::Icy => 1_000.0,
        }
    }

    /// Typical geometric albedo
    pub fn albedo(&self) -> f64 {
        match self {
            Self::Carbonaceous => 0.06,
            Self::Silicaceous => 0.22,
            Self::Metallic => 0.15,
            Self::Icy => 0.10,
        }
    }
}

impl std::fmt::Display for AsteroidComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Carbonaceous => write!(f, "C-type"),
            Self::Silicaceous => write!(f, "S-type"),
            Self::Metallic => write!(f, "M-type"),
            Self::Icy => write!(f, "Icy"),
        }
    }
}

/// A generated major asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asteroid {
    pub composition: AsteroidComposition,
    pub diameter_km: f64,
    /// Mass in kilograms
    pub mass_kg: f64,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub albedo: f64,
}
