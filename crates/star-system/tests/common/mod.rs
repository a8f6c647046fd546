//! Invariant checks shared by the integration tests.

#![allow(dead_code)]

use orbital::constants::{EARTH_RADIUS_KM, au_to_km, earth_to_solar_masses};
use orbital::{hill_radius, roche_limit};
use star_system::placement::MOON_DENSITY;
use star_system::{MIN_SPACING_FACTOR, Parent, StarSystem};

pub fn assert_hierarchy_counts(system: &StarSystem) {
    let n = system.star_ids.len();
    assert_eq!(system.hierarchy.star_count(), n);
    assert_eq!(system.hierarchy.barycenter_count(), n - 1);

    let mut leaves = system.hierarchy.leaf_ids();
    leaves.sort();
    assert_eq!(leaves, system.star_ids);
}

pub fn assert_stability_ordering(system: &StarSystem) {
    for host in &system.hosts {
        assert!(host.inner_stability_au > 0.0);
        assert!(host.outer_stability_au > host.inner_stability_au);
        if host.luminosity > 0.0 {
            assert!(host.hz_inner_au < host.hz_outer_au);
            assert!(host.hz_outer_au < host.frost_line_au);
        }
    }
}

pub fn assert_slot_fields(system: &StarSystem) {
    for host in &system.hosts {
        let slots: Vec<_> = system.slots_for(host.node).collect();
        for pair in slots.windows(2) {
            let (inner, outer) = (pair[0], pair[1]);
            assert!(
                outer.semi_major_axis_au >= inner.semi_major_axis_au * (1.0 + MIN_SPACING_FACTOR) * (1.0 - 1e-12),
                "slots at {} and {} AU are too close",
                inner.semi_major_axis_au,
                outer.semi_major_axis_au
            );
            assert!(inner.fill_probability >= outer.fill_probability);
        }
        for slot in &slots {
            assert!(host.is_within_stable_zone(slot.semi_major_axis_au));
            if let Some(id) = slot.occupant {
                let planet = system.planet(id).expect("occupant is a planet");
                assert_eq!(planet.semi_major_axis_au, slot.semi_major_axis_au);
                assert_eq!(planet.eccentricity, slot.eccentricity);
            }
        }
    }
}

pub fn assert_belts_clear_of_planets(system: &StarSystem) {
    for host in &system.hosts {
        let distances = system.filled_slot_distances(host.node);
        for belt in system.belts_for(host.node) {
            assert!(belt.inner_radius_au < belt.outer_radius_au);
            for d in &distances {
                assert!(
                    !belt.contains(*d),
                    "planet at {} AU inside belt {}-{} AU",
                    d,
                    belt.inner_radius_au,
                    belt.outer_radius_au
                );
            }
            for id in &belt.asteroid_ids {
                let asteroid = system.asteroid(*id).expect("belt member is an asteroid");
                assert!(belt.contains(asteroid.semi_major_axis_au));
            }
        }
    }
}

pub fn assert_moons_contained(system: &StarSystem) {
    for moon_id in &system.moon_ids {
        let Some(Parent::Body(planet_id)) = system.body(*moon_id).and_then(|b| b.parent) else {
            panic!("moon {} has no planet", moon_id);
        };
        let planet = system.planet(planet_id).expect("moon parent is a planet");
        let host = system.host_of(planet_id).expect("planet has a host");
        let moon = system.moon(*moon_id).expect("moon");

        let roche_km = roche_limit(planet.radius_earth * EARTH_RADIUS_KM, planet.density(), MOON_DENSITY);
        let hill_km = au_to_km(hill_radius(
            planet.semi_major_axis_au,
            earth_to_solar_masses(planet.mass_earth),
            host.mass,
        ));
        assert!(moon.semi_major_axis_km >= roche_km);
        assert!(moon.semi_major_axis_km <= hill_km);
    }
}

pub fn assert_all_invariants(system: &StarSystem) {
    assert_hierarchy_counts(system);
    assert_stability_ordering(system);
    assert_slot_fields(system);
    assert_belts_clear_of_planets(system);
    assert_moons_contained(system);
}
