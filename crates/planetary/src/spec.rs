//! Typed requests for leaf generators.
//!
//! Each request carries an overrides struct listing exactly the fields the
//! system layer may pin. A leaf generator must reproduce every `Some` value
//! verbatim and is free to choose everything else from its own tables.

use serde::{Deserialize, Serialize};

use crate::archetype::PlanetArchetype;
use crate::asteroid::AsteroidComposition;
use crate::moon::MoonKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi_major_axis_au: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_earth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_earth: Option<f64>,
}

/// Request for a planet of a given size category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSpec {
    pub archetype: PlanetArchetype,
    #[serde(default)]
    pub overrides: PlanetOverrides,
}

impl PlanetSpec {
    pub fn new(archetype: PlanetArchetype) -> Self {
        Self {
            archetype,
            overrides: PlanetOverrides::default(),
        }
    }

    /// Pin the orbit so the generated body matches a slot exactly
    pub fn with_orbit(mut self, semi_major_axis_au: f64, eccentricity: f64) -> Self {
        self.overrides.semi_major_axis_au = Some(semi_major_axis_au);
        self.overrides.eccentricity = Some(eccentricity);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi_major_axis_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_earth: Option<f64>,
}

/// Request for a moon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonSpec {
    pub kind: MoonKind,
    #[serde(default)]
    pub overrides: MoonOverrides,
}

impl MoonSpec {
    pub fn new(kind: MoonKind) -> Self {
        Self {
            kind,
            overrides: MoonOverrides::default(),
        }
    }

    pub fn with_distance(mut self, semi_major_axis_km: f64) -> Self {
        self.overrides.semi_major_axis_km = Some(semi_major_axis_km);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi_major_axis_au: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
}

/// Request for a major asteroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidSpec {
    pub composition: AsteroidComposition,
    #[serde(default)]
    pub overrides: AsteroidOverrides,
}

impl AsteroidSpec {
    pub fn new(composition: AsteroidComposition) -> Self {
        Self {
            composition,
            overrides: AsteroidOverrides::default(),
        }
    }

    pub fn with_size_and_distance(mut self, diameter_km: f64, semi_major_axis_au: f64) -> Self {
        self.overrides.diameter_km = Some(diameter_km);
        self.overrides.semi_major_axis_au = Some(semi_major_axis_au);
        self
    }
}
