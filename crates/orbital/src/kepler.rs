//! Two-body relations: Kepler's third law, Hill sphere and Roche limit.

/// Orbital period in years from semi-major axis (AU) and total mass (M☉)
///
/// Kepler's third law in solar units:
/// ```text
/// P² = a³ / M
/// ```
///
/// Returns `0.0` for non-positive input.
pub fn orbital_period(semi_major_axis_au: f64, total_mass_solar: f64) -> f64 {
    if semi_major_axis_au <= 0.0 || total_mass_solar <= 0.0 {
        return 0.0;
    }
    (semi_major_axis_au.powi(3) / total_mass_solar).sqrt()
}

/// Semi-major axis in AU from orbital period (years) and total mass (M☉)
///
/// Inverse of [`orbital_period`]. Returns `0.0` for non-positive input.
pub fn semi_major_axis(period_years: f64, total_mass_solar: f64) -> f64 {
    if period_years <= 0.0 || total_mass_solar <= 0.0 {
        return 0.0;
    }
    (period_years.powi(2) * total_mass_solar).cbrt()
}

/// Hill sphere radius
///
/// The region around a body where its own gravity dominates over the
/// primary it orbits:
/// ```text
/// R_H = a × (m / 3M)^(1/3)
/// ```
///
/// `body_mass` and `primary_mass` must share a unit; the result is in the
/// unit of `semi_major_axis`. Returns `0.0` for non-positive input.
pub fn hill_radius(semi_major_axis: f64, body_mass: f64, primary_mass: f64) -> f64 {
    if semi_major_axis <= 0.0 || body_mass <= 0.0 || primary_mass <= 0.0 {
        return 0.0;
    }
    semi_major_axis * (body_mass / (3.0 * primary_mass)).cbrt()
}

/// Fluid Roche limit
///
/// Inside this distance tidal forces exceed a satellite's self-gravity:
/// ```text
/// d = 2.44 × R_p × (ρ_p / ρ_s)^(1/3)
/// ```
///
/// The result is in the unit of `primary_radius`; densities only need to
/// share a unit with each other. Returns `0.0` for non-positive input.
pub fn roche_limit(primary_radius: f64, primary_density: f64, satellite_density: f64) -> f64 {
    if primary_radius <= 0.0 || primary_density <= 0.0 || satellite_density <= 0.0 {
        return 0.0;
    }
    2.44 * primary_radius * (primary_density / satellite_density).cbrt()
}
