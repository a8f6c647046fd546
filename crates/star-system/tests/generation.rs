//! End-to-end generation through the public API.

mod common;

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use orbital::{Mass, outer_region_limit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use star_system::{
    BodyCategory, Collaborators, GenerationError, HierarchyNode, HostKind, Parent, SpecError,
    StarSystem, SystemSpec, compute_host, generate_system, is_seeded_from, seeded_rng,
};
use stellar::SpectralType;

use common::*;

fn generate(spec: &SystemSpec) -> StarSystem {
    StarSystem::from_spec(spec).expect("valid spec generates")
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_system() {
    for seed in [0, 1, 42, 7, 123_456_789, u64::MAX] {
        let spec = SystemSpec::new(seed);
        let a = generate(&spec);
        let b = generate(&spec);
        assert!(a.same_layout(&b), "seed {seed} diverged");
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(&SystemSpec::new(1).with_stars(1));
    let b = generate(&SystemSpec::new(2).with_stars(1));
    assert_ne!(a.provenance.id, b.provenance.id);
    assert!(!a.same_layout(&b));
}

#[test]
fn test_seeded_stream_matches_from_spec() {
    let spec = SystemSpec::new(77);
    let mut rng = seeded_rng(&spec);
    assert!(is_seeded_from(&spec, &rng));

    let system = generate_system(&spec, &mut rng, &Collaborators::default()).expect("generates");
    assert!(system.same_layout(&generate(&spec)));
    assert!(!is_seeded_from(&spec, &rng));
}

#[test]
fn test_foreign_stream_is_detected() {
    let spec = SystemSpec::new(77);
    assert!(!is_seeded_from(&spec, &ChaChaRng::seed_from_u64(78)));

    let mut advanced = seeded_rng(&spec);
    let _: u64 = advanced.random();
    assert!(!is_seeded_from(&spec, &advanced));

    // Still generates, but the recorded seed no longer describes it
    let mut foreign = ChaChaRng::seed_from_u64(78);
    let system = generate_system(&spec, &mut foreign, &Collaborators::default()).expect("generates");
    assert_eq!(system.provenance.seed, 77);
    let rebuilt = StarSystem::regenerate(&system.provenance).expect("regenerates");
    assert!(rebuilt.same_layout(&generate(&spec)));
}

// =============================================================================
// Single G star
// =============================================================================

#[test]
fn test_single_g_star() {
    let spec = SystemSpec::new(42).with_stars(1).with_hint(SpectralType::G);
    let system = generate(&spec);

    assert_eq!(system.star_ids.len(), 1);
    assert!(matches!(system.hierarchy.root, HierarchyNode::Star { .. }));
    assert_eq!(system.hierarchy.barycenter_count(), 0);

    let star = system.star(system.star_ids[0]).expect("star");
    assert!((0.8..1.04).contains(&star.mass));
    assert_eq!(system.body(system.star_ids[0]).map(|b| b.name.clone()), Some(system.name()));

    assert_eq!(system.hosts.len(), 1);
    let host = &system.hosts[0];
    assert_eq!(host.kind, HostKind::SType);
    assert_relative_eq!(host.luminosity, star.luminosity);
    assert_relative_eq!(host.hz_inner_au, (star.luminosity / 1.1).sqrt(), max_relative = 1e-9);
    assert_relative_eq!(host.hz_outer_au, (star.luminosity / 0.36).sqrt(), max_relative = 1e-9);
    assert_relative_eq!(host.frost_line_au, 2.7 * star.luminosity.sqrt(), max_relative = 1e-9);
    let outer = outer_region_limit(Mass::from_solar_masses(star.mass));
    assert_relative_eq!(host.outer_stability_au, outer.to_au(), max_relative = 1e-9);

    let slots: Vec<_> = system.slots_for(host.node).collect();
    assert!(!slots.is_empty());
    assert!(slots.iter().all(|s| s.stable));
    assert!(slots[0].semi_major_axis_au > host.inner_stability_au);

    for id in &system.planet_ids {
        let planet = system.planet(*id).expect("planet");
        assert!(
            slots
                .iter()
                .any(|s| s.occupant == Some(*id) && s.semi_major_axis_au == planet.semi_major_axis_au)
        );
        let name = &system.body(*id).expect("planet body").name;
        assert!(name.starts_with(&system.name()));
    }

    assert_all_invariants(&system);
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn test_solar_mass_host_zones() {
    let mut spec = SystemSpec::new(42).with_stars(1);
    spec.overrides.set("stars[0].mass", "1.0").expect("valid key");
    let system = generate(&spec);

    let host = &system.hosts[0];
    assert_eq!(host.kind, HostKind::SType);
    assert_relative_eq!(host.mass, 1.0);
    assert_relative_eq!(host.luminosity, 1.0, max_relative = 1e-9);
    assert_relative_eq!(host.hz_inner_au, 0.95, epsilon = 0.01);
    assert_relative_eq!(host.hz_outer_au, 1.67, epsilon = 0.01);
    assert_relative_eq!(host.frost_line_au, 2.7, epsilon = 1e-9);
    // Earth's orbit sits inside the zone
    assert!(host.hz_inner_au < 1.0 && 1.0 < host.hz_outer_au);
    assert_all_invariants(&system);
}

#[test]
fn test_binary_hierarchy_and_hosts() {
    let spec = SystemSpec::new(7).with_stars(2);
    let system = generate(&spec);

    assert_eq!(system.star_ids.len(), 2);
    let HierarchyNode::Barycenter {
        separation_au,
        eccentricity,
        period_years,
        ..
    } = &system.hierarchy.root
    else {
        panic!("two stars share a barycenter");
    };
    assert!((0.05..=1000.0).contains(separation_au));
    assert!((0.0..0.8).contains(eccentricity));
    assert!(*period_years > 0.0);

    let stars: BTreeMap<_, _> = system
        .star_ids
        .iter()
        .filter_map(|id| system.star(*id).map(|s| (*id, s.clone())))
        .collect();
    for node in system.hierarchy.flatten() {
        let expected = compute_host(&system.hierarchy, node, &stars).has_valid_zone();
        let listed = system.host(node.id()).is_some();
        assert_eq!(listed, expected, "host listing for {}", node.id());
    }

    for host in &system.hosts {
        match host.kind {
            HostKind::PType => {
                assert_eq!(host.node, system.hierarchy.root.id());
                assert_eq!(host.stars.len(), 2);
                assert_relative_eq!(
                    host.luminosity,
                    stars.values().map(|s| s.luminosity).sum::<f64>(),
                    max_relative = 1e-9
                );
            }
            HostKind::SType => {
                assert_eq!(host.stars.len(), 1);
                assert!(host.outer_stability_au < *separation_au);
            }
        }
    }

    let names: Vec<String> = system
        .star_ids
        .iter()
        .filter_map(|id| system.body(*id).map(|b| b.name.clone()))
        .collect();
    assert_eq!(names, vec![format!("{} A", system.name()), format!("{} B", system.name())]);

    assert_all_invariants(&system);
}

#[test]
fn test_multiple_star_invariants() {
    for seed in 0..30 {
        let spec = SystemSpec::new(seed).with_star_range(1, 7);
        let system = generate(&spec);
        assert!((1..=7).contains(&system.star_ids.len()));
        assert_all_invariants(&system);
    }
}

// =============================================================================
// Bodies
// =============================================================================

#[test]
fn test_parent_links() {
    let system = generate(&SystemSpec::new(11).with_stars(1));

    for id in &system.star_ids {
        assert_eq!(system.body(*id).and_then(|b| b.parent), None);
    }
    for id in &system.planet_ids {
        assert!(matches!(system.body(*id).and_then(|b| b.parent), Some(Parent::Host(_))));
        assert!(system.host_of(*id).is_some());
    }
    for id in &system.moon_ids {
        let Some(Parent::Body(planet)) = system.body(*id).and_then(|b| b.parent) else {
            panic!("moon without planet");
        };
        assert!(system.moons_of(planet).contains(id));
    }
    for id in &system.asteroid_ids {
        let Some(Parent::Belt(index)) = system.body(*id).and_then(|b| b.parent) else {
            panic!("asteroid without belt");
        };
        assert!(system.belts[index].asteroid_ids.contains(id));
    }

    let total: usize = [
        BodyCategory::Star,
        BodyCategory::Planet,
        BodyCategory::Moon,
        BodyCategory::Asteroid,
    ]
    .into_iter()
    .map(|c| system.ids(c).len())
    .sum();
    assert_eq!(total, system.bodies.len());
}

#[test]
fn test_moons_sorted_and_numbered() {
    let mut checked = 0;
    for seed in 0..40 {
        let system = generate(&SystemSpec::new(seed).with_stars(1));
        for planet in &system.planet_ids {
            let moons = system.moons_of(*planet);
            let planet_name = &system.body(*planet).expect("planet").name;
            for (i, pair) in moons.windows(2).enumerate() {
                let inner = system.moon(pair[0]).expect("moon");
                let outer = system.moon(pair[1]).expect("moon");
                assert!(inner.semi_major_axis_km <= outer.semi_major_axis_km, "moon {i} out of order");
            }
            if let Some(first) = moons.first() {
                assert_eq!(system.body(*first).expect("moon").name, format!("{planet_name} I"));
                checked += 1;
            }
        }
    }
    assert!(checked > 0, "no moons across 40 seeds");
}

#[test]
fn test_targeted_planet_count() {
    let mut spec = SystemSpec::new(3).with_stars(1);
    spec.overrides.planet_count = Some(4);
    let system = generate(&spec);

    let host = &system.hosts[0];
    let available = system.slots_for(host.node).filter(|s| s.stable).count();
    assert_eq!(system.planets_of(host.node).len(), available.min(4));
    assert_all_invariants(&system);
}

#[test]
fn test_targeted_planet_count_spans_all_hosts() {
    for seed in 0..40 {
        let mut spec = SystemSpec::new(seed).with_stars(3);
        spec.overrides.planet_count = Some(2);
        let system = generate(&spec);

        let available = system.slots.iter().filter(|s| s.stable).count();
        assert_eq!(system.planet_ids.len(), available.min(2), "seed {seed}");
        let per_host: usize = system.hosts.iter().map(|h| system.planets_of(h.node).len()).sum();
        assert_eq!(per_host, system.planet_ids.len());
        assert_all_invariants(&system);
    }
}

#[test]
fn test_disabled_moons_and_belts() {
    for seed in 0..10 {
        let mut spec = SystemSpec::new(seed);
        spec.include_moons = false;
        spec.include_belts = false;
        let system = generate(&spec);
        assert!(system.moon_ids.is_empty());
        assert!(system.belts.is_empty());
        assert!(system.asteroid_ids.is_empty());
    }
}

#[test]
fn test_disabling_belts_keeps_planets() {
    let mut spec = SystemSpec::new(21).with_stars(1);
    let with_belts = generate(&spec);
    spec.include_belts = false;
    let without = generate(&spec);

    assert_eq!(with_belts.planet_ids.len(), without.planet_ids.len());
    for (a, b) in with_belts.planet_ids.iter().zip(&without.planet_ids) {
        assert_eq!(with_belts.planet(*a), without.planet(*b));
    }
}

#[test]
fn test_certain_belts_placed() {
    let mut placed = 0;
    for seed in 0..10 {
        let mut spec = SystemSpec::new(seed).with_stars(1);
        spec.overrides.set("belts.inner.probability", "1").expect("valid key");
        spec.overrides.set("belts.outer.probability", "1").expect("valid key");
        let system = generate(&spec);
        placed += system.belts.len();
        assert_belts_clear_of_planets(&system);
        for belt in &system.belts {
            assert!(belt.mass_earth > 0.0);
            assert!((3..=10).contains(&belt.asteroid_ids.len()));
        }
    }
    assert!(placed > 0);
}

// =============================================================================
// Overrides and errors
// =============================================================================

#[test]
fn test_star_override_honored() {
    let mut spec = SystemSpec::new(5).with_stars(1);
    spec.overrides.set("stars[0].mass", "1.0").expect("valid key");
    spec.overrides.set("stars[0].age", "4.6").expect("valid key");
    spec.overrides.set("stars[0].metallicity", "0.0").expect("valid key");

    let system = generate(&spec);
    let star = system.star(system.star_ids[0]).expect("star");
    assert_eq!(star.mass, 1.0);
    assert_eq!(star.age_gyr, 4.6);
    assert_eq!(star.metallicity, 0.0);
    assert_relative_eq!(star.luminosity, 1.0);
}

#[test]
fn test_star_count_override_wins() {
    let mut spec = SystemSpec::new(9).with_star_range(1, 2);
    spec.overrides.star_count = Some(4);
    let system = generate(&spec);
    assert_eq!(system.star_ids.len(), 4);
    assert_eq!(system.hierarchy.barycenter_count(), 3);
}

#[test]
fn test_invalid_spec_rejected() {
    let spec = SystemSpec::new(1).with_star_range(3, 2);
    assert!(matches!(
        StarSystem::from_spec(&spec),
        Err(GenerationError::Spec(SpecError::InvalidValue { .. }))
    ));

    let spec = SystemSpec::new(1).with_stars(8);
    assert!(StarSystem::from_spec(&spec).is_err());
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn test_summary_counts() {
    let system = generate(&SystemSpec::new(42));
    let summary = system.summary();

    assert_eq!(summary.name, system.name());
    assert_eq!(summary.seed, 42);
    assert_eq!(summary.stars, system.star_ids.len());
    assert_eq!(summary.planets, system.planet_ids.len());
    assert_eq!(summary.slots, system.slots.len());
    assert!(summary.habitable_zone_planets <= summary.planets);

    let text = summary.to_string();
    assert!(text.starts_with(&format!("{} (seed 42)", system.name())));
    assert!(text.contains("planets:"));
}
