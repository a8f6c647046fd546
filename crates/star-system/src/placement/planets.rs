//! Planet placement into orbit slots.

use planetary::{ParentContext, PlanetArchetype, PlanetGenerator, PlanetSpec};
use rand::Rng;
use rand_chacha::ChaChaRng;
use stellar::fork_rng;
use stellar::sampling::sample_weighted_index;
use tracing::{debug, trace};

use crate::body::{Body, BodyId, BodyRegistry, Parent};
use crate::host::OrbitHost;
use crate::naming::planet_name;
use crate::slots::{OrbitSlot, OrbitZone};

/// Jitter added to fill probabilities when ranking slots in targeted mode
const TARGETED_JITTER: f64 = 0.1;

/// How slots are chosen for filling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Each slot filled independently with its fill probability
    #[default]
    Probabilistic,
    /// Exactly this many planets across the whole system (or as many as
    /// there are available slots), best slots first
    Targeted(usize),
}

/// Archetype weights per zone, in [`PlanetArchetype::ALL`] order
///
/// Hot orbits favour rocky and super-Earth sizes with a 5% allowance for
/// hot Jupiters. Cold orbits give ice and gas giants 55% between them.
pub fn archetype_weights(zone: OrbitZone) -> [f64; 6] {
    match zone {
        //                     SubE  Terr  SupE  MiniN  IceG  GasG
        OrbitZone::Hot => [0.25, 0.35, 0.30, 0.05, 0.00, 0.05],
        OrbitZone::Temperate => [0.20, 0.30, 0.25, 0.15, 0.05, 0.05],
        OrbitZone::Cold => [0.15, 0.10, 0.10, 0.10, 0.30, 0.25],
    }
}

fn sample_archetype(zone: OrbitZone, rng: &mut ChaChaRng) -> PlanetArchetype {
    PlanetArchetype::ALL[sample_weighted_index(rng, &archetype_weights(zone))]
}

/// Slot indices to fill in each host's field, innermost first
///
/// `fields` holds the slot field of every host. Probabilistic mode rolls
/// every available slot on its own. Targeted mode ranks the available
/// slots of all hosts together by jittered fill probability and keeps
/// the best `count`, so the system as a whole gets exactly that many
/// planets or every available slot if there are fewer.
pub(crate) fn select_slots(
    fields: &[Vec<OrbitSlot>],
    mode: PlacementMode,
    rng: &mut ChaChaRng,
) -> Vec<Vec<usize>> {
    match mode {
        PlacementMode::Probabilistic => fields
            .iter()
            .map(|slots| {
                slots
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_available())
                    .filter(|(_, slot)| rng.random_bool(slot.fill_probability.clamp(0.0, 1.0)))
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect(),
        PlacementMode::Targeted(count) => {
            let mut ranked: Vec<(usize, usize, f64)> = Vec::new();
            for (host, slots) in fields.iter().enumerate() {
                for (i, slot) in slots.iter().enumerate().filter(|(_, s)| s.is_available()) {
                    let jitter = rng.random_range(-TARGETED_JITTER..TARGETED_JITTER);
                    ranked.push((host, i, slot.fill_probability + jitter));
                }
            }
            ranked.sort_by(|a, b| b.2.total_cmp(&a.2));

            let mut chosen = vec![Vec::new(); fields.len()];
            for (host, i, _) in ranked.into_iter().take(count) {
                chosen[host].push(i);
            }
            for indices in &mut chosen {
                indices.sort_unstable();
            }
            chosen
        }
    }
}

/// Fill the `chosen` slots around `host` and register the resulting planets
///
/// Every planet's orbit is pinned to its slot's distance and eccentricity.
/// Returns the new planet ids innermost first.
#[allow(clippy::too_many_arguments)]
pub(crate) fn place_planets(
    host: &OrbitHost,
    host_name: &str,
    slots: &mut [OrbitSlot],
    chosen: &[usize],
    ctx: &ParentContext,
    generator: &dyn PlanetGenerator,
    registry: &mut BodyRegistry,
    rng: &mut ChaChaRng,
) -> Vec<BodyId> {
    let mut placed = Vec::with_capacity(chosen.len());

    for &index in chosen {
        let Some(slot) = slots.get_mut(index) else {
            continue;
        };
        let archetype = sample_archetype(slot.zone, rng);
        let spec = PlanetSpec::new(archetype).with_orbit(slot.semi_major_axis_au, slot.eccentricity);

        let mut planet_rng = fork_rng(rng);
        let planet = generator.generate_planet(
            &spec,
            &ctx.at_distance(slot.semi_major_axis_au),
            &mut planet_rng,
        );

        let id = registry.insert(
            planet_name(host_name, placed.len()),
            Some(Parent::Host(host.node)),
            Body::Planet(planet),
        );
        if slot.fill(id) {
            trace!(
                planet = %id,
                %archetype,
                distance_au = slot.semi_major_axis_au,
                zone = %slot.zone,
                "planet placed"
            );
            placed.push(id);
        }
    }

    debug!(node = %host.node, planets = placed.len(), "planets placed");
    placed
}
