//! Generation pipeline.
//!
//! One call runs every stage to completion before the next starts:
//!
//! 1. stars, hierarchy and orbit hosts
//! 2. slot fields for every host
//! 3. planets into slots
//! 4. moons around planets
//! 5. asteroid belts into the remaining gaps
//!
//! All randomness comes from the caller's generator; leaf bodies get forked
//! streams. The same specification and seed always give the same system.
//! A system only regenerates from its provenance record when that
//! generator is [`seeded_rng`] of the same specification.

use planetary::{AsteroidGenerator, MoonGenerator, ParentContext, PlanetGenerator, StatisticalGenerator};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{MainSequenceGenerator, StarGenerator};
use tracing::{info, warn};

use crate::body::{Body, BodyCategory, BodyId, BodyRegistry};
use crate::configuration::build_configuration;
use crate::error::GenerationResult;
use crate::hierarchy::StellarHierarchy;
use crate::host::OrbitHost;
use crate::metadata::Provenance;
use crate::naming::host_name;
use crate::placement::{
    AsteroidBelt, BeltProbabilities, PlacementMode, host_context, place_belts, place_moons,
    place_planets, select_slots,
};
use crate::slots::{OrbitSlot, generate_slots};
use crate::spec::SystemSpec;
use crate::system::StarSystem;

/// Leaf generators used by the pipeline
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub stars: &'a dyn StarGenerator,
    pub planets: &'a dyn PlanetGenerator,
    pub moons: &'a dyn MoonGenerator,
    pub asteroids: &'a dyn AsteroidGenerator,
}

impl Default for Collaborators<'static> {
    fn default() -> Self {
        Self {
            stars: &MainSequenceGenerator,
            planets: &StatisticalGenerator,
            moons: &StatisticalGenerator,
            asteroids: &StatisticalGenerator,
        }
    }
}

/// The generator stream a specification's seed names
pub fn seeded_rng(spec: &SystemSpec) -> ChaChaRng {
    ChaChaRng::seed_from_u64(spec.seed)
}

/// True when `rng` is the untouched stream for `spec.seed`
pub fn is_seeded_from(spec: &SystemSpec, rng: &ChaChaRng) -> bool {
    rng.get_word_pos() == 0 && rng.get_seed() == seeded_rng(spec).get_seed()
}

/// Generate a system from `spec`, drawing from `rng`
///
/// Pass [`seeded_rng`] for a result that [`StarSystem::regenerate`] can
/// rebuild. Any other stream still generates, but the recorded seed will
/// not reproduce it and a warning is logged.
///
/// # Errors
///
/// Fails only on an invalid specification or when no stars or hierarchy
/// could be produced. Unusable hosts, empty moon bands and belts without
/// a gap are skipped.
pub fn generate_system(
    spec: &SystemSpec,
    rng: &mut ChaChaRng,
    collaborators: &Collaborators<'_>,
) -> GenerationResult<StarSystem> {
    spec.validate()?;
    if !is_seeded_from(spec, rng) {
        warn!(
            seed = spec.seed,
            "generator stream is not the one seeded from the specification; provenance will not reproduce this system"
        );
    }

    let provenance = Provenance::new(spec.clone());
    let catalog = provenance.catalog_name();
    let mut registry = BodyRegistry::default();

    // Stars, hierarchy, hosts
    let config = build_configuration(spec, &catalog, collaborators.stars, &mut registry, rng)?;

    let contexts: Vec<ParentContext> = config
        .hosts
        .iter()
        .map(|host| {
            let (age_gyr, metallicity) = host
                .stars
                .first()
                .and_then(|id| config.stars.get(id))
                .map(|star| (star.age_gyr, star.metallicity))
                .unwrap_or((0.0, 0.0));
            host_context(host, age_gyr, metallicity)
        })
        .collect();
    let names: Vec<String> = config
        .hosts
        .iter()
        .map(|host| host_name(&catalog, &host.stars, &config.star_ids))
        .collect();

    // Slot fields. Companion perturbers are not supplied here, so every
    // slot inside the host's stable annulus is marked stable.
    let mut slots: Vec<Vec<OrbitSlot>> = config
        .hosts
        .iter()
        .map(|host| generate_slots(host, &[], rng))
        .collect();

    // Planets
    let mode = spec
        .overrides
        .planet_count
        .map_or(PlacementMode::Probabilistic, PlacementMode::Targeted);
    let chosen = select_slots(&slots, mode, rng);
    let mut planets: Vec<(BodyId, usize)> = Vec::new();
    for (i, host) in config.hosts.iter().enumerate() {
        let placed = place_planets(
            host,
            &names[i],
            &mut slots[i],
            &chosen[i],
            &contexts[i],
            collaborators.planets,
            &mut registry,
            rng,
        );
        planets.extend(placed.into_iter().map(|id| (id, i)));
    }

    // Moons
    if spec.include_moons {
        for &(planet_id, host_index) in &planets {
            let Some(system_body) = registry.get(planet_id) else {
                continue;
            };
            let Body::Planet(planet) = &system_body.body else {
                continue;
            };
            let (planet, name) = (planet.clone(), system_body.name.clone());
            place_moons(
                planet_id,
                &name,
                &planet,
                &contexts[host_index],
                collaborators.moons,
                &mut registry,
                rng,
            );
        }
    }

    // Belts
    let mut belts = Vec::new();
    if spec.include_belts {
        let probabilities = belt_probabilities(spec);
        for (i, host) in config.hosts.iter().enumerate() {
            let placed = place_belts(
                host,
                &slots[i],
                &catalog,
                belts.len(),
                probabilities,
                &contexts[i],
                collaborators.asteroids,
                &mut registry,
                rng,
            );
            belts.extend(placed);
        }
    }

    let system = assemble(provenance, registry, config.hierarchy, config.hosts, slots, belts);
    info!(
        name = %system.name(),
        seed = spec.seed,
        stars = system.star_ids.len(),
        planets = system.planet_ids.len(),
        moons = system.moon_ids.len(),
        belts = system.belts.len(),
        "system generated"
    );
    Ok(system)
}

fn belt_probabilities(spec: &SystemSpec) -> BeltProbabilities {
    let defaults = BeltProbabilities::default();
    BeltProbabilities {
        inner: spec.overrides.inner_belt_probability.unwrap_or(defaults.inner),
        outer: spec.overrides.outer_belt_probability.unwrap_or(defaults.outer),
    }
}

fn assemble(
    provenance: Provenance,
    registry: BodyRegistry,
    hierarchy: StellarHierarchy,
    hosts: Vec<OrbitHost>,
    slots: Vec<Vec<OrbitSlot>>,
    belts: Vec<AsteroidBelt>,
) -> StarSystem {
    let bodies = registry.into_bodies();
    let ids_of = |category: BodyCategory| -> Vec<BodyId> {
        bodies
            .values()
            .filter(|b| b.body.category() == category)
            .map(|b| b.id)
            .collect()
    };

    StarSystem {
        star_ids: ids_of(BodyCategory::Star),
        planet_ids: ids_of(BodyCategory::Planet),
        moon_ids: ids_of(BodyCategory::Moon),
        asteroid_ids: ids_of(BodyCategory::Asteroid),
        provenance,
        bodies,
        hierarchy,
        hosts,
        slots: slots.into_iter().flatten().collect(),
        belts,
    }
}

impl StarSystem {
    /// Generate with the default collaborators, seeding from `spec.seed`
    pub fn from_spec(spec: &SystemSpec) -> GenerationResult<Self> {
        let mut rng = seeded_rng(spec);
        generate_system(spec, &mut rng, &Collaborators::default())
    }

    /// Rebuild a system from its provenance record
    ///
    /// The result has the same layout as the original when the record was
    /// written by the running generator version.
    pub fn regenerate(provenance: &Provenance) -> GenerationResult<Self> {
        if !provenance.is_current() {
            warn!(
                recorded = %provenance.generator_version,
                schema = provenance.schema_version,
                "regenerating a system recorded by a different generator"
            );
        }
        let mut spec = provenance.spec.clone();
        spec.seed = provenance.seed;
        Self::from_spec(&spec)
    }
}
