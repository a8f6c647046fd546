//! Planet body.

use orbital::constants::EARTH_DENSITY;
use orbital::zones::HabitableZone;
use serde::{Deserialize, Serialize};

use crate::archetype::PlanetArchetype;
use crate::planet_class::PlanetClass;

/// A generated planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Size category this planet was requested as
    pub archetype: PlanetArchetype,
    /// Mass-based physical regime
    pub class: PlanetClass,
    /// Mass in Earth masses (M⊕)
    pub mass_earth: f64,
    /// Radius in Earth radii (R⊕)
    pub radius_earth: f64,
    /// Semi-major axis around the orbit host (AU)
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    /// Orbital inclination (degrees)
    pub inclination_deg: f64,
    /// Equilibrium temperature (K)
    pub equilibrium_temp: f64,
}

impl Planet {
    /// Bulk density in g/cm³
    pub fn density(&self) -> f64 {
        if self.radius_earth <= 0.0 {
            return 0.0;
        }
        EARTH_DENSITY * self.mass_earth / self.radius_earth.powi(3)
    }

    pub fn periapsis_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 + self.eccentricity)
    }

    /// Whether the orbit lies inside the host's habitable zone
    pub fn in_habitable_zone(&self, host_luminosity: f64) -> bool {
        HabitableZone::from_luminosity(host_luminosity).contains(self.semi_major_axis_au)
    }
}
