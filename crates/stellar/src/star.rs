//! Star body DTO.

use orbital::constants::solar_radii_to_au;
use serde::{Deserialize, Serialize};

use crate::spectral::SpectralType;

/// A generated main-sequence star
///
/// # Physical Ranges
/// * mass: 0.08-60 solar masses
/// * temperature: ~2400 K (M-type) to ~45,000 K (O-type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    /// Mass in solar masses (M☉)
    pub mass: f64,
    /// Radius in solar radii (R☉)
    pub radius: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Effective temperature (K)
    pub temperature: f64,
    pub spectral_type: SpectralType,
    /// Spectral subtype (0-9)
    pub subtype: u8,
    /// Metallicity [Fe/H] in dex (0.0 = solar)
    pub metallicity: f64,
    /// Age in billions of years
    pub age_gyr: f64,
}

impl Star {
    /// Radius in AU
    pub fn radius_au(&self) -> f64 {
        solar_radii_to_au(self.radius)
    }

    /// Spectral designation such as "G2V"
    pub fn spectral_designation(&self) -> String {
        format!("{}{}V", self.spectral_type, self.subtype)
    }
}
