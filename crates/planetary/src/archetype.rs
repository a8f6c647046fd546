//! Size-category archetypes requested by planet placement.

use serde::{Deserialize, Serialize};

/// Broad size category a planet is requested as
///
/// The archetype fixes the mass range; the leaf generator picks the exact
/// mass inside it and derives everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetArchetype {
    /// Mars- to Venus-sized bodies
    SubEarth,
    /// Earth analogs
    Terrestrial,
    /// Rocky planets above 2 M⊕
    SuperEarth,
    /// Small planets with a thin H/He envelope
    MiniNeptune,
    /// Uranus/Neptune analogs
    IceGiant,
    /// Saturn/Jupiter analogs, including hot Jupiters
    GasGiant,
}

impl PlanetArchetype {
    pub const ALL: [PlanetArchetype; 6] = [
        Self::SubEarth,
        Self::Terrestrial,
        Self::SuperEarth,
        Self::MiniNeptune,
        Self::IceGiant,
        Self::GasGiant,
    ];

    /// Mass range in Earth masses
    pub fn mass_range(&self) -> (f64, f64) {
        match self {
            Self::SubEarth => (0.05, 0.5),
            Self::Terrestrial => (0.5, 2.0),
            Self::SuperEarth => (2.0, 10.0),
            Self::MiniNeptune => (4.0, 20.0),
            Self::IceGiant => (10.0, 50.0),
            Self::GasGiant => (50.0, 3000.0),
        }
    }

    /// Whether the archetype carries a substantial gas envelope
    pub fn is_giant(&self) -> bool {
        matches!(self, Self::IceGiant | Self::GasGiant)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SubEarth => "Sub-Earth",
            Self::Terrestrial => "Terrestrial",
            Self::SuperEarth => "Super-Earth",
            Self::MiniNeptune => "Mini-Neptune",
            Self::IceGiant => "Ice Giant",
            Self::GasGiant => "Gas Giant",
        }
    }
}

impl std::fmt::Display for PlanetArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
