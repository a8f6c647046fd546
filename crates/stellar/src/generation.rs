//! Star generation contract and the default main-sequence generator.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::sampling::{estimate_lifetime, sample_age, sample_mass_kroupa, sample_metallicity};
use crate::spectral::SpectralType;
use crate::star::Star;

/// Solar temperature in Kelvin
const SOLAR_TEMP: f64 = 5778.0;

/// Upper mass bound for unhinted stars (M☉)
const MAX_UNHINTED_MASS: f64 = 8.0;

/// Age of the universe (Gyr)
const UNIVERSE_AGE_GYR: f64 = 13.8;

/// Values that must be reproduced exactly on the generated star
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarOverrides {
    /// Mass in solar masses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    /// Age in billions of years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_gyr: Option<f64>,
    /// Metallicity [Fe/H] in dex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metallicity: Option<f64>,
}

/// Request for a single star
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSpec {
    /// Preferred spectral class; mass is drawn from its range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spectral_hint: Option<SpectralType>,
    /// System age shared by all stars (Gyr)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_gyr: Option<f64>,
    /// System metallicity shared by all stars ([Fe/H])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metallicity: Option<f64>,
    #[serde(default)]
    pub overrides: StarOverrides,
}

impl StarSpec {
    pub fn with_hint(hint: SpectralType) -> Self {
        Self {
            spectral_hint: Some(hint),
            ..Self::default()
        }
    }
}

/// Produces a star body from a request
///
/// Implementations must honor every field set in [`StarOverrides`] and draw
/// all randomness from `rng`.
pub trait StarGenerator {
    fn generate(&self, spec: &StarSpec, rng: &mut ChaChaRng) -> Star;
}

/// Main-sequence stars from mass-luminosity and mass-temperature relations
#[derive(Debug, Clone, Copy, Default)]
pub struct MainSequenceGenerator;

impl StarGenerator for MainSequenceGenerator {
    fn generate(&self, spec: &StarSpec, rng: &mut ChaChaRng) -> Star {
        let mass = match (spec.overrides.mass, spec.spectral_hint) {
            (Some(mass), _) => mass,
            (None, Some(hint)) => {
                let (min, max) = hint.mass_range();
                rng.random_range(min..max)
            }
            (None, None) => sample_mass_kroupa(rng, MAX_UNHINTED_MASS),
        };

        let metallicity = spec
            .overrides
            .metallicity
            .or(spec.metallicity)
            .unwrap_or_else(|| sample_metallicity(rng));

        let age_gyr = spec.overrides.age_gyr.or(spec.age_gyr).unwrap_or_else(|| {
            sample_age(rng, estimate_lifetime(mass).min(UNIVERSE_AGE_GYR))
        });

        main_sequence_star(mass, metallicity, age_gyr)
    }
}

/// Creates a main sequence star with properties derived from mass.
///
/// # Mass Categories and Properties
/// * Very Massive (>30 M☉): O-type stars, L ∝ M^3.5, T ~ 38,000K
/// * Massive (8-30 M☉): B-type stars, L ∝ M^3.5, T ~ 22,000K
/// * Intermediate (2-8 M☉): A/F-type stars, L ∝ M^3.5, T ~ 9,000K
/// * Solar-type (0.8-2 M☉): G-type stars, L ∝ M^4, T ~ 5,800K
/// * Low Mass (<0.8 M☉): K/M-type stars, L ∝ M^2.3, T ~ 2,500-4,800K
pub fn main_sequence_star(mass_solar: f64, metallicity: f64, age_gyr: f64) -> Star {
    let (luminosity, temperature) = calculate_ms_properties(mass_solar);

    Star {
        mass: mass_solar,
        radius: calculate_radius(luminosity, temperature),
        luminosity,
        temperature,
        spectral_type: SpectralType::from_temperature(temperature),
        subtype: SpectralType::subtype(temperature),
        metallicity,
        age_gyr,
    }
}

/// Calculate luminosity and temperature for a main sequence star of given mass.
fn calculate_ms_properties(mass_solar: f64) -> (f64, f64) {
    match mass_solar {
        m if m > 30.0 => {
            let luminosity = 3.0e4 * (m / 30.0).powf(3.5);
            let temperature = 38000.0 * (m / 30.0).powf(0.2);
            (luminosity, temperature)
        }
        m if m > 8.0 => {
            let luminosity = 1.0e3 * (m / 8.0).powf(3.5);
            let temperature = 22000.0 * (m / 8.0).powf(0.2);
            (luminosity, temperature)
        }
        m if m > 2.0 => {
            let luminosity = 25.0 * (m / 2.0).powf(3.5);
            let temperature = 9000.0 * (m / 2.0).powf(0.2);
            (luminosity, temperature)
        }
        m if m > 0.8 => (m.powf(4.0), 5800.0 * m.powf(0.1)),
        m => {
            let luminosity = m.powf(2.3);
            let temperature = if m < 0.45 {
                2500.0 * (m / 0.08).powf(0.23)
            } else {
                3700.0 * (m / 0.45).powf(0.45)
            };
            (luminosity, temperature)
        }
    }
}

/// Stefan-Boltzmann radius in solar radii from L (L☉) and T (K)
pub fn calculate_radius(luminosity: f64, temperature: f64) -> f64 {
    luminosity.powf(0.5) / (temperature / SOLAR_TEMP).powf(2.0)
}
