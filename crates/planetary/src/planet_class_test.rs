use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::planet_class::PlanetClass;

#[test]
fn test_classification_boundaries() {
    assert_eq!(PlanetClass::from_earth_masses(1.0), PlanetClass::Rocky);
    assert_eq!(PlanetClass::from_earth_masses(2.0), PlanetClass::Transitional);
    assert_eq!(PlanetClass::from_earth_masses(17.0), PlanetClass::Volatile);
    assert_eq!(PlanetClass::from_earth_masses(160.0), PlanetClass::Giant);
    assert_eq!(PlanetClass::from_earth_masses(318.0), PlanetClass::Giant);
}

#[test]
fn test_earth_radius() {
    assert_relative_eq!(PlanetClass::Rocky.radius_from_mass(1.0), 1.0);
}

#[test]
fn test_giant_radius_nearly_constant() {
    let saturn = PlanetClass::Giant.radius_from_mass(95.0);
    let jupiter = PlanetClass::Giant.radius_from_mass(318.0);
    assert!((jupiter / saturn) < 1.05);
}

#[test]
fn test_scatter_stays_close() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    for _ in 0..100 {
        let radius = PlanetClass::Rocky.sample_radius(1.0, &mut rng);
        assert!(radius > 0.9 && radius < 1.1, "Radius: {}", radius);
    }
}

#[test]
fn test_moon_occurrence() {
    for class in [
        PlanetClass::Rocky,
        PlanetClass::Transitional,
        PlanetClass::Volatile,
        PlanetClass::Giant,
    ] {
        let occurrence = class.moon_occurrence();
        assert_relative_eq!(occurrence.count_weights.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(occurrence.max_count >= 3);
    }

    let rocky = PlanetClass::Rocky.moon_occurrence();
    let giant = PlanetClass::Giant.moon_occurrence();
    assert!(giant.count_weights[0] < rocky.count_weights[0]);
    assert!(giant.irregular_fraction > rocky.irregular_fraction);
}

#[test]
fn test_lowercase_serde() {
    let json = serde_json::to_string(&PlanetClass::Giant).expect("serialize");
    assert_eq!(json, "\"giant\"");
    assert_eq!(PlanetClass::Volatile.to_string(), "volatile");
}
