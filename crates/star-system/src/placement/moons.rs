//! Moon placement around placed planets.
//!
//! Moons live in a band around their planet: no closer than 1.5× the
//! Roche limit (or twice the planet's radius) and no farther than a
//! fraction of the planet's Hill sphere. Regular moons may use half the
//! Hill sphere, captured irregulars up to 70%.

use orbital::constants::{EARTH_RADIUS_KM, au_to_km, earth_to_solar_masses};
use orbital::{hill_radius, roche_limit};
use planetary::{
    MoonGenerator, MoonKind, MoonOccurrence, MoonSpec, ParentContext, Planet, moon_numeral,
};
use rand::Rng;
use rand_chacha::ChaChaRng;
use stellar::fork_rng;
use stellar::sampling::{sample_log_uniform, sample_weighted_index};
use tracing::{debug, trace};

use crate::body::{Body, BodyId, BodyRegistry, Parent};

/// Assumed bulk density of a moon when computing the Roche limit (g/cm³)
pub const MOON_DENSITY: f64 = 2.5;

/// Lower band edge as a multiple of the Roche limit
const ROCHE_CLEARANCE: f64 = 1.5;

/// Lower band edge as a multiple of the planet's radius
const PLANET_RADIUS_CLEARANCE: f64 = 2.0;

/// Draw a moon count: first whether there are any, then how many
fn sample_moon_count(occurrence: &MoonOccurrence, rng: &mut ChaChaRng) -> usize {
    let dist = occurrence.count_weights;
    let any_moons = 1.0 - dist[0];
    if !rng.random_bool(any_moons.clamp(0.0, 1.0)) {
        return 0;
    }
    match sample_weighted_index(rng, &dist[1..]) {
        0 => 1,
        1 => 2,
        _ => rng.random_range(3..=occurrence.max_count),
    }
}

// =============================================================================
// Orbital band
// =============================================================================

/// Allowed orbital band (km) for a moon of `kind` around `planet`
///
/// `host_mass` is the mass (M☉) the planet orbits. Returns `None` when the
/// band is empty or degenerate.
pub fn moon_band_km(planet: &Planet, host_mass: f64, kind: MoonKind) -> Option<(f64, f64)> {
    let planet_radius_km = planet.radius_earth * EARTH_RADIUS_KM;
    let roche_km = roche_limit(planet_radius_km, planet.density(), MOON_DENSITY);
    let inner_km = (ROCHE_CLEARANCE * roche_km).max(PLANET_RADIUS_CLEARANCE * planet_radius_km);

    let hill_au = hill_radius(
        planet.semi_major_axis_au,
        earth_to_solar_masses(planet.mass_earth),
        host_mass,
    );
    let outer_km = au_to_km(hill_au) * kind.hill_fraction();

    (inner_km > 0.0 && outer_km > inner_km).then_some((inner_km, outer_km))
}

/// Generate and register moons for one planet
///
/// The count is drawn first, then a kind and a distance for each moon.
/// Moons are named by Roman numeral in order of distance. A planet
/// without a valid band gets no moons.
pub(crate) fn place_moons(
    planet_id: BodyId,
    planet_name: &str,
    planet: &Planet,
    ctx: &ParentContext,
    generator: &dyn MoonGenerator,
    registry: &mut BodyRegistry,
    rng: &mut ChaChaRng,
) -> Vec<BodyId> {
    if moon_band_km(planet, ctx.stellar_mass, MoonKind::Regular).is_none() {
        trace!(planet = %planet_id, "no valid moon band");
        return Vec::new();
    }

    let occurrence = planet.class.moon_occurrence();
    let count = sample_moon_count(&occurrence, rng);
    let mut orbits: Vec<(MoonKind, f64)> = Vec::with_capacity(count);
    for _ in 0..count {
        let kind = if rng.random_bool(occurrence.irregular_fraction) {
            MoonKind::Irregular
        } else {
            MoonKind::Regular
        };
        if let Some((inner_km, outer_km)) = moon_band_km(planet, ctx.stellar_mass, kind) {
            orbits.push((kind, sample_log_uniform(rng, inner_km, outer_km)));
        }
    }
    orbits.sort_by(|a, b| a.1.total_cmp(&b.1));

    let moon_ctx = ctx
        .at_distance(planet.semi_major_axis_au)
        .with_parent(planet.mass_earth, planet.radius_earth);

    let mut placed = Vec::with_capacity(orbits.len());
    for (index, (kind, distance_km)) in orbits.into_iter().enumerate() {
        let spec = MoonSpec::new(kind).with_distance(distance_km);
        let mut moon_rng = fork_rng(rng);
        let moon = generator.generate_moon(&spec, &moon_ctx, &mut moon_rng);

        let id = registry.insert(
            format!("{} {}", planet_name, moon_numeral(index)),
            Some(Parent::Body(planet_id)),
            Body::Moon(moon),
        );
        placed.push(id);
    }

    if !placed.is_empty() {
        debug!(planet = %planet_id, moons = placed.len(), "moons placed");
    }
    placed
}
