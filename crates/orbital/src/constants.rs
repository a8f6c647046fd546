//! Physical constants and unit conversions shared across the workspace.

use units::{Length, Mass};

pub use units::{AU_KM, EARTH_MASSES_PER_SOLAR, SOLAR_RADIUS_AU};

/// Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Earth bulk density in g/cm³
pub const EARTH_DENSITY: f64 = 5.51;

/// Convert Earth masses to solar masses
#[inline]
pub fn earth_to_solar_masses(mass_earth: f64) -> f64 {
    Mass::from_earth_masses(mass_earth).to_solar_masses()
}

/// Convert solar radii to AU
#[inline]
pub fn solar_radii_to_au(radius_solar: f64) -> f64 {
    Length::from_solar_radii(radius_solar).to_au()
}

/// Convert AU to kilometers
#[inline]
pub fn au_to_km(au: f64) -> f64 {
    Length::from_au(au).to_km()
}

/// Convert kilometers to AU
#[inline]
pub fn km_to_au(km: f64) -> f64 {
    Length::from_km(km).to_au()
}
