//! Leaf generator contracts and the default statistical generator.
//!
//! The system layer decides *where* bodies go and what size category they
//! are; a leaf generator decides everything else. The contracts are traits
//! so callers can plug in richer physical models without touching the
//! placement code.

use std::f64::consts::PI;

use orbital::constants::{EARTH_MASSES_PER_SOLAR, EARTH_RADIUS_KM};
use rand::Rng;
use rand_chacha::ChaChaRng;
use stellar::sampling::{sample_log_uniform, sample_power_law};

use crate::asteroid::Asteroid;
use crate::context::ParentContext;
use crate::moon::{Moon, MoonKind};
use crate::planet::Planet;
use crate::planet_class::PlanetClass;
use crate::spec::{AsteroidSpec, MoonSpec, PlanetSpec};

/// Maximum planet-to-star mass ratio
///
/// Keeps giant archetypes around low-mass stars below the brown dwarf regime.
const MAX_PLANET_STAR_MASS_RATIO: f64 = 0.003;

/// Produces planets
///
/// Implementations must reproduce every field set in
/// [`PlanetSpec::overrides`](crate::spec::PlanetOverrides) exactly.
pub trait PlanetGenerator {
    fn generate_planet(&self, spec: &PlanetSpec, ctx: &ParentContext, rng: &mut ChaChaRng)
    -> Planet;
}

/// Produces moons; `ctx` carries the parent planet's mass and radius
pub trait MoonGenerator {
    fn generate_moon(&self, spec: &MoonSpec, ctx: &ParentContext, rng: &mut ChaChaRng) -> Moon;
}

/// Produces major asteroids
pub trait AsteroidGenerator {
    fn generate_asteroid(
        &self,
        spec: &AsteroidSpec,
        ctx: &ParentContext,
        rng: &mut ChaChaRng,
    ) -> Asteroid;
}

/// Occurrence-rate driven generator for all three body kinds
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalGenerator;

impl PlanetGenerator for StatisticalGenerator {
    fn generate_planet(
        &self,
        spec: &PlanetSpec,
        ctx: &ParentContext,
        rng: &mut ChaChaRng,
    ) -> Planet {
        let overrides = &spec.overrides;

        let mass_earth = overrides.mass_earth.unwrap_or_else(|| {
            let (min, max) = spec.archetype.mass_range();
            let cap = ctx.stellar_mass * EARTH_MASSES_PER_SOLAR * MAX_PLANET_STAR_MASS_RATIO;
            sample_log_uniform(rng, min, max).min(cap)
        });
        let class = PlanetClass::from_earth_masses(mass_earth);

        let radius_earth = overrides
            .radius_earth
            .unwrap_or_else(|| class.sample_radius(mass_earth, rng));

        let semi_major_axis_au = overrides
            .semi_major_axis_au
            .unwrap_or(ctx.orbital_distance_au);

        let eccentricity = overrides.eccentricity.unwrap_or_else(|| {
            let u: f64 = rng.random();
            u * u * 0.1
        });

        let inclination_deg = rng.random_range(0.0..3.0);
        let equilibrium_temp = ctx.at_distance(semi_major_axis_au).equilibrium_temperature();

        Planet {
            archetype: spec.archetype,
            class,
            mass_earth,
            radius_earth,
            semi_major_axis_au,
            eccentricity,
            inclination_deg,
            equilibrium_temp,
        }
    }
}

impl MoonGenerator for StatisticalGenerator {
    fn generate_moon(&self, spec: &MoonSpec, ctx: &ParentContext, rng: &mut ChaChaRng) -> Moon {
        let overrides = &spec.overrides;
        let parent_mass = ctx.parent_mass_earth.unwrap_or(1.0);
        let parent_radius = ctx.parent_radius_earth.unwrap_or(1.0);
        let parent_class = PlanetClass::from_earth_masses(parent_mass);

        let mass_earth = overrides.mass_earth.unwrap_or_else(|| {
            let (min_ratio, max_ratio) = match spec.kind {
                // Galilean-style co-accretion in a circumplanetary disk
                MoonKind::Regular if parent_class.is_gaseous() => (1.0e-6, 2.0e-4),
                // Giant-impact debris (Earth-Moon style)
                MoonKind::Regular => (1.0e-3, 1.5e-2),
                MoonKind::Irregular => (1.0e-10, 1.0e-7),
            };
            parent_mass * sample_log_uniform(rng, min_ratio, max_ratio)
        });

        let radius_earth = if mass_earth > 0.01 {
            mass_earth.powf(0.27)
        } else {
            mass_earth.powf(0.33)
        };

        let semi_major_axis_km = overrides
            .semi_major_axis_km
            .unwrap_or(parent_radius * EARTH_RADIUS_KM * 20.0);

        let (eccentricity, inclination_deg, retrograde) = match spec.kind {
            MoonKind::Regular => (
                overrides
                    .eccentricity
                    .unwrap_or_else(|| rng.random_range(0.001..0.02)),
                rng.random_range(0.0..2.0),
                false,
            ),
            MoonKind::Irregular => (
                overrides
                    .eccentricity
                    .unwrap_or_else(|| rng.random_range(0.1..0.4)),
                rng.random_range(20.0..70.0),
                rng.random_bool(0.5),
            ),
        };

        Moon {
            kind: spec.kind,
            mass_earth,
            radius_earth,
            semi_major_axis_km,
            eccentricity,
            inclination_deg,
            retrograde,
            icy: ctx.beyond_frost_line(),
        }
    }
}

impl AsteroidGenerator for StatisticalGenerator {
    fn generate_asteroid(
        &self,
        spec: &AsteroidSpec,
        ctx: &ParentContext,
        rng: &mut ChaChaRng,
    ) -> Asteroid {
        let overrides = &spec.overrides;

        // Differential index -3.5 (collisional cascade)
        let diameter_km = overrides
            .diameter_km
            .unwrap_or_else(|| sample_power_law(1.0, 100.0, -3.5, rng));
        let semi_major_axis_au = overrides
            .semi_major_axis_au
            .unwrap_or(ctx.orbital_distance_au);
        let eccentricity = overrides
            .eccentricity
            .unwrap_or_else(|| rng.random_range(0.0..0.25));
        let inclination_deg = rng.random_range(0.0..20.0);

        let radius_m = diameter_km * 500.0;
        let mass_kg = spec.composition.density() * 4.0 / 3.0 * PI * radius_m.powi(3);

        Asteroid {
            composition: spec.composition,
            diameter_km,
            mass_kg,
            semi_major_axis_au,
            eccentricity,
            inclination_deg,
            albedo: spec.composition.albedo(),
        }
    }
}
