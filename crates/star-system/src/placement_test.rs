use std::collections::BTreeMap;

use approx::assert_relative_eq;
use orbital::constants::{EARTH_RADIUS_KM, au_to_km, earth_to_solar_masses};
use orbital::{hill_radius, roche_limit};
use planetary::{
    MoonKind, Planet, PlanetArchetype, PlanetClass, StatisticalGenerator,
};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::generation::main_sequence_star;

use crate::body::{Body, BodyId, BodyRegistry, NodeId, Parent};
use crate::hierarchy::{HierarchyNode, StellarHierarchy};
use crate::host::{OrbitHost, compute_hosts};
use crate::placement::{
    BeltComposition, BeltProbabilities, BeltRegion, Gap, MOON_DENSITY, PlacementMode,
    archetype_weights, find_gap, host_context, moon_band_km, place_belts, place_moons,
    place_planets, select_slots,
};
use crate::slots::{OrbitSlot, OrbitZone, generate_slots};

fn solar_host() -> OrbitHost {
    let stars: BTreeMap<BodyId, _> = [(BodyId(0), main_sequence_star(1.0, 0.0, 4.6))].into();
    let hierarchy = StellarHierarchy::new(HierarchyNode::Star {
        id: NodeId(0),
        body: BodyId(0),
    });
    compute_hosts(&hierarchy, &stars).remove(0)
}

fn planet(mass_earth: f64, radius_earth: f64, distance_au: f64) -> Planet {
    Planet {
        archetype: PlanetArchetype::Terrestrial,
        class: PlanetClass::from_earth_masses(mass_earth),
        mass_earth,
        radius_earth,
        semi_major_axis_au: distance_au,
        eccentricity: 0.0,
        inclination_deg: 0.0,
        equilibrium_temp: 255.0,
    }
}

// =============================================================================
// Planets
// =============================================================================

#[test]
fn test_archetype_weights() {
    for zone in [OrbitZone::Hot, OrbitZone::Temperate, OrbitZone::Cold] {
        let total: f64 = archetype_weights(zone).iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }
    assert_relative_eq!(archetype_weights(OrbitZone::Hot)[5], 0.05);
    let cold = archetype_weights(OrbitZone::Cold);
    assert_relative_eq!(cold[4] + cold[5], 0.55, epsilon = 1e-12);
}

fn place(mode: PlacementMode, seed: u64) -> (Vec<OrbitSlot>, Vec<BodyId>, BodyRegistry) {
    let host = solar_host();
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut slots = generate_slots(&host, &[], &mut rng);
    let mut registry = BodyRegistry::default();
    let ctx = host_context(&host, 4.6, 0.0);
    let chosen = select_slots(std::slice::from_ref(&slots), mode, &mut rng).remove(0);
    let placed = place_planets(
        &host,
        "Test",
        &mut slots,
        &chosen,
        &ctx,
        &StatisticalGenerator,
        &mut registry,
        &mut rng,
    );
    (slots, placed, registry)
}

#[test]
fn test_planets_match_their_slots() {
    let (slots, placed, registry) = place(PlacementMode::Probabilistic, 11);

    for id in &placed {
        let slot = slots.iter().find(|s| s.occupant == Some(*id)).unwrap();
        let body = registry.get(*id).unwrap();
        let Body::Planet(planet) = &body.body else {
            panic!("expected a planet");
        };
        assert_eq!(planet.semi_major_axis_au, slot.semi_major_axis_au);
        assert_eq!(planet.eccentricity, slot.eccentricity);
        assert_eq!(body.parent, Some(Parent::Host(NodeId(0))));
    }
    assert_eq!(placed.len(), slots.iter().filter(|s| s.is_filled()).count());
}

#[test]
fn test_planets_are_lettered_outward() {
    let (_, placed, registry) = place(PlacementMode::Targeted(3), 12);
    let names: Vec<&str> = placed
        .iter()
        .map(|id| registry.get(*id).unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["Test b", "Test c", "Test d"]);
}

#[test]
fn test_targeted_mode_places_exact_count() {
    let (slots, placed, _) = place(PlacementMode::Targeted(4), 13);
    assert_eq!(placed.len(), 4);
    assert_eq!(slots.iter().filter(|s| s.is_filled()).count(), 4);
}

#[test]
fn test_targeted_mode_stops_when_slots_run_out() {
    let (slots, placed, _) = place(PlacementMode::Targeted(1000), 14);
    assert_eq!(placed.len(), slots.len());
}

#[test]
fn test_targeted_count_is_shared_across_hosts() {
    let host = solar_host();
    let mut rng = ChaChaRng::seed_from_u64(15);
    let fields: Vec<Vec<OrbitSlot>> = (0..3).map(|_| generate_slots(&host, &[], &mut rng)).collect();
    let available: usize = fields.iter().map(Vec::len).sum();
    assert!(available > 2);

    for seed in 0..40 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let chosen = select_slots(&fields, PlacementMode::Targeted(2), &mut rng);
        assert_eq!(chosen.len(), 3);
        assert_eq!(chosen.iter().map(Vec::len).sum::<usize>(), 2);
        for (indices, slots) in chosen.iter().zip(&fields) {
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
            assert!(indices.iter().all(|&i| i < slots.len()));
        }
    }

    let all = select_slots(&fields, PlacementMode::Targeted(1000), &mut rng);
    assert_eq!(all.iter().map(Vec::len).sum::<usize>(), available);
}

#[test]
fn test_filled_slots_are_never_selected() {
    let host = solar_host();
    let mut rng = ChaChaRng::seed_from_u64(16);
    let mut slots = generate_slots(&host, &[], &mut rng);
    slots[0].fill(BodyId(99));

    let chosen = select_slots(std::slice::from_ref(&slots), PlacementMode::Targeted(1000), &mut rng);
    assert_eq!(chosen[0].len(), slots.len() - 1);
    assert!(!chosen[0].contains(&0));
}

// =============================================================================
// Moons
// =============================================================================

#[test]
fn test_earth_moon_band() {
    let earth = planet(1.0, 1.0, 1.0);
    let (inner, outer) = moon_band_km(&earth, 1.0, MoonKind::Regular).unwrap();

    let roche = roche_limit(EARTH_RADIUS_KM, earth.density(), MOON_DENSITY);
    let hill = au_to_km(hill_radius(1.0, earth_to_solar_masses(1.0), 1.0));
    assert_relative_eq!(inner, 1.5 * roche, epsilon = 1e-6);
    assert_relative_eq!(outer, 0.5 * hill, epsilon = 1e-6);
    // The Moon's orbit fits
    assert!(inner < 384_400.0 && 384_400.0 < outer);

    let (_, irregular_outer) = moon_band_km(&earth, 1.0, MoonKind::Irregular).unwrap();
    assert!(irregular_outer > outer);
}

#[test]
fn test_no_band_when_hill_sphere_is_tiny() {
    let scorched = planet(1.0, 1.0, 0.01);
    assert!(moon_band_km(&scorched, 1.0, MoonKind::Regular).is_none());

    let mut registry = BodyRegistry::default();
    let mut rng = ChaChaRng::seed_from_u64(1);
    let ctx = host_context(&solar_host(), 4.6, 0.0);
    let moons = place_moons(
        BodyId(0),
        "Test b",
        &scorched,
        &ctx,
        &StatisticalGenerator,
        &mut registry,
        &mut rng,
    );
    assert!(moons.is_empty());
}

#[test]
fn test_giant_moons_stay_in_band() {
    let jupiter = planet(318.0, 11.2, 5.2);
    let ctx = host_context(&solar_host(), 4.6, 0.0);
    let (inner, _) = moon_band_km(&jupiter, 1.0, MoonKind::Regular).unwrap();
    let (_, outer) = moon_band_km(&jupiter, 1.0, MoonKind::Irregular).unwrap();

    let mut total = 0;
    for seed in 0..20 {
        let mut registry = BodyRegistry::default();
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let moons = place_moons(
            BodyId(0),
            "Test b",
            &jupiter,
            &ctx,
            &StatisticalGenerator,
            &mut registry,
            &mut rng,
        );
        total += moons.len();

        let mut previous = 0.0;
        for (i, id) in moons.iter().enumerate() {
            let body = registry.get(*id).unwrap();
            let Body::Moon(moon) = &body.body else {
                panic!("expected a moon");
            };
            assert!(moon.semi_major_axis_km >= inner && moon.semi_major_axis_km <= outer);
            assert!(moon.semi_major_axis_km >= previous);
            previous = moon.semi_major_axis_km;
            assert_eq!(body.parent, Some(Parent::Body(BodyId(0))));
            assert_eq!(body.name, format!("Test b {}", planetary::moon_numeral(i)));
        }
    }
    assert!(total > 0, "gas giants should usually have moons");
}

// =============================================================================
// Belts
// =============================================================================

#[test]
fn test_gap_between_planets() {
    let obstacles = [(1.0, 1.0), (5.2, 5.2), (9.5, 9.5)];
    let gap = find_gap(&obstacles, (0.5, 10.0), 2.3).unwrap();
    assert_eq!(
        gap,
        Gap {
            inner_au: 1.0,
            outer_au: 5.2
        }
    );
}

#[test]
fn test_gap_with_no_obstacles_is_the_region() {
    let gap = find_gap(&[], (1.0, 10.0), 2.7).unwrap();
    assert_eq!(gap.inner_au, 1.0);
    assert_eq!(gap.outer_au, 10.0);
}

#[test]
fn test_narrow_or_empty_regions_are_rejected() {
    assert!(find_gap(&[], (1.0, 1.05), 1.0).is_none());
    assert!(find_gap(&[], (3.0, 2.0), 2.5).is_none());
    assert!(find_gap(&[], (1.0, 10.0), 0.0).is_none());
}

#[test]
fn test_gap_avoids_existing_belts() {
    let gap = find_gap(&[(2.0, 3.0)], (1.0, 4.0), 2.5).unwrap();
    assert!(gap.outer_au <= 2.0 || gap.inner_au >= 3.0);
}

#[test]
fn test_gap_score_prefers_nearby_gaps() {
    let near = Gap {
        inner_au: 2.0,
        outer_au: 3.0,
    };
    let far = Gap {
        inner_au: 20.0,
        outer_au: 21.0,
    };
    assert!(near.score(2.5) > far.score(2.5));
}

#[test]
fn test_belts_avoid_planets() {
    let host = solar_host();
    let always = BeltProbabilities {
        inner: 1.0,
        outer: 1.0,
    };

    for seed in 0..20 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let mut slots = generate_slots(&host, &[], &mut rng);
        let mut registry = BodyRegistry::default();
        let ctx = host_context(&host, 4.6, 0.0);
        let chosen =
            select_slots(std::slice::from_ref(&slots), PlacementMode::Probabilistic, &mut rng)
                .remove(0);
        place_planets(
            &host,
            "Test",
            &mut slots,
            &chosen,
            &ctx,
            &StatisticalGenerator,
            &mut registry,
            &mut rng,
        );
        let belts = place_belts(
            &host,
            &slots,
            "Test",
            0,
            always,
            &ctx,
            &StatisticalGenerator,
            &mut registry,
            &mut rng,
        );

        for belt in &belts {
            for slot in slots.iter().filter(|s| s.is_filled()) {
                assert!(!belt.contains(slot.semi_major_axis_au));
            }
            assert!((3..=10).contains(&belt.asteroid_ids.len()));
            assert!(belt.mass_earth > 0.0);

            let diameters: Vec<f64> = belt
                .asteroid_ids
                .iter()
                .filter_map(|id| match &registry.get(*id)?.body {
                    Body::Asteroid(a) => Some(a.diameter_km),
                    _ => None,
                })
                .collect();
            assert!(diameters.windows(2).all(|w| w[0] >= w[1]));

            match belt.region {
                BeltRegion::Inner => assert_ne!(belt.composition, BeltComposition::Icy),
                BeltRegion::Outer => {
                    assert_eq!(belt.composition, BeltComposition::Icy);
                    assert!(belt.inner_radius_au >= 5.0 * host.frost_line_au);
                }
            }
        }
        if let [first, second] = belts.as_slice() {
            assert!(first.outer_radius_au < second.inner_radius_au || second.outer_radius_au < first.inner_radius_au);
        }
    }
}

#[test]
fn test_belt_composition_weights() {
    for composition in [BeltComposition::Rocky, BeltComposition::Metallic, BeltComposition::Icy] {
        let total: f64 = composition.asteroid_weights().iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }
    assert_eq!(serde_json::to_string(&BeltComposition::Icy).unwrap(), "\"icy\"");
}
