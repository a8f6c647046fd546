//! Environment handed to leaf generators.

use serde::{Deserialize, Serialize};

/// What a leaf generator knows about where its body lives
///
/// Stellar fields describe the orbit host (a single star or the combined
/// light of a barycenter). For moons, `parent_mass_earth` and
/// `parent_radius_earth` describe the planet being orbited and
/// `orbital_distance_au` is that planet's distance from the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentContext {
    /// Host mass (M☉)
    pub stellar_mass: f64,
    /// Host luminosity (L☉)
    pub stellar_luminosity: f64,
    /// Host effective temperature (K)
    pub stellar_temperature: f64,
    /// System age (Gyr)
    pub age_gyr: f64,
    /// Host metallicity [Fe/H]
    pub metallicity: f64,
    /// Distance from the host (AU)
    pub orbital_distance_au: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_mass_earth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_radius_earth: Option<f64>,
}

impl ParentContext {
    pub fn new(
        stellar_mass: f64,
        stellar_luminosity: f64,
        stellar_temperature: f64,
        age_gyr: f64,
        metallicity: f64,
    ) -> Self {
        Self {
            stellar_mass,
            stellar_luminosity,
            stellar_temperature,
            age_gyr,
            metallicity,
            orbital_distance_au: 0.0,
            parent_mass_earth: None,
            parent_radius_earth: None,
        }
    }

    /// Solar values at 1 AU
    pub fn solar() -> Self {
        Self::new(1.0, 1.0, 5778.0, 4.6, 0.0).at_distance(1.0)
    }

    pub fn at_distance(mut self, distance_au: f64) -> Self {
        self.orbital_distance_au = distance_au;
        self
    }

    pub fn with_parent(mut self, mass_earth: f64, radius_earth: f64) -> Self {
        self.parent_mass_earth = Some(mass_earth);
        self.parent_radius_earth = Some(radius_earth);
        self
    }

    /// Equilibrium temperature at `orbital_distance_au` (K)
    ///
    /// T_eq = 278 × (L/a²)^0.25
    pub fn equilibrium_temperature(&self) -> f64 {
        if self.orbital_distance_au <= 0.0 || self.stellar_luminosity <= 0.0 {
            return 0.0;
        }
        278.0 * (self.stellar_luminosity / self.orbital_distance_au.powi(2)).powf(0.25)
    }

    /// Whether `orbital_distance_au` lies beyond the frost line
    pub fn beyond_frost_line(&self) -> bool {
        self.orbital_distance_au >= orbital::frost_line(self.stellar_luminosity)
    }
}
