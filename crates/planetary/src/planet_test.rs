use approx::assert_relative_eq;

use crate::archetype::PlanetArchetype;
use crate::planet::Planet;
use crate::planet_class::PlanetClass;

fn earth() -> Planet {
    Planet {
        archetype: PlanetArchetype::Terrestrial,
        class: PlanetClass::Rocky,
        mass_earth: 1.0,
        radius_earth: 1.0,
        semi_major_axis_au: 1.0,
        eccentricity: 0.0167,
        inclination_deg: 0.0,
        equilibrium_temp: 255.0,
    }
}

#[test]
fn test_earth_density() {
    assert_relative_eq!(earth().density(), 5.51, epsilon = 1e-9);
}

#[test]
fn test_apsides() {
    let planet = earth();
    assert!(planet.periapsis_au() < 1.0);
    assert!(planet.apoapsis_au() > 1.0);
}

#[test]
fn test_earth_in_habitable_zone() {
    assert!(earth().in_habitable_zone(1.0));
    assert!(!earth().in_habitable_zone(0.01));
}

#[test]
fn test_archetype_ranges_are_ordered() {
    for archetype in PlanetArchetype::ALL {
        let (min, max) = archetype.mass_range();
        assert!(min > 0.0 && max > min, "{} has an empty range", archetype);
    }
    assert!(PlanetArchetype::GasGiant.is_giant());
    assert!(!PlanetArchetype::SuperEarth.is_giant());
}
