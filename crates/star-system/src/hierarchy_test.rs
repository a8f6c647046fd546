use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use orbital::orbital_period;

use crate::body::{BodyId, NodeId};
use crate::error::GenerationError;
use crate::hierarchy::{HierarchyNode, SeparationCategory, StellarHierarchy, build_hierarchy};

fn stars(masses: &[f64]) -> Vec<(BodyId, f64)> {
    masses
        .iter()
        .enumerate()
        .map(|(i, m)| (BodyId(i as u32), *m))
        .collect()
}

fn assert_widening(node: &HierarchyNode) {
    if let HierarchyNode::Barycenter {
        separation_au,
        children,
        ..
    } = node
    {
        for child in children.iter() {
            assert!(
                *separation_au >= 3.0 * child.widest_separation() - 1e-9,
                "outer separation {} vs inner {}",
                separation_au,
                child.widest_separation()
            );
            assert_widening(child);
        }
    }
}

#[test]
fn test_single_star_is_a_leaf() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let hierarchy = build_hierarchy(&stars(&[1.0]), &mut rng).unwrap();

    assert!(hierarchy.root.is_star());
    assert_eq!(hierarchy.star_count(), 1);
    assert_eq!(hierarchy.barycenter_count(), 0);
    assert_eq!(hierarchy.depth(), 0);
}

#[test]
fn test_leaf_and_barycenter_counts() {
    for n in 1..=7 {
        let masses: Vec<f64> = (0..n).map(|i| 1.0 - 0.1 * i as f64).collect();
        let mut rng = ChaChaRng::seed_from_u64(n as u64);
        let hierarchy = build_hierarchy(&stars(&masses), &mut rng).unwrap();

        assert_eq!(hierarchy.star_count(), n);
        assert_eq!(hierarchy.barycenter_count(), n - 1);
        assert_eq!(hierarchy.flatten().len(), 2 * n - 1);

        let mut leaves = hierarchy.leaf_ids();
        leaves.sort();
        let expected: Vec<BodyId> = (0..n as u32).map(BodyId).collect();
        assert_eq!(leaves, expected);
    }
}

#[test]
fn test_nested_barycenters_are_widened() {
    for seed in 0..20 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let hierarchy = build_hierarchy(&stars(&[1.0, 0.8, 0.5, 0.3]), &mut rng).unwrap();
        assert_widening(&hierarchy.root);
    }
}

#[test]
fn test_barycenter_orbit_elements() {
    let masses = [1.0, 0.6];
    let mut rng = ChaChaRng::seed_from_u64(9);
    let hierarchy = build_hierarchy(&stars(&masses), &mut rng).unwrap();

    match &hierarchy.root {
        HierarchyNode::Barycenter {
            id,
            separation_au,
            eccentricity,
            period_years,
            children,
        } => {
            assert_eq!(*id, NodeId(2));
            assert!((0.05..=1000.0).contains(separation_au));
            assert!((0.0..0.8).contains(eccentricity));
            assert_relative_eq!(*period_years, orbital_period(*separation_au, 1.6), epsilon = 1e-9);
            // Primary first
            assert_eq!(children[0].star_body(), Some(BodyId(0)));
            assert_eq!(children[1].star_body(), Some(BodyId(1)));
        }
        HierarchyNode::Star { .. } => panic!("two stars must form a barycenter"),
    }
}

#[test]
fn test_lookup_helpers() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let hierarchy = build_hierarchy(&stars(&[1.0, 0.7, 0.4]), &mut rng).unwrap();
    let root_id = hierarchy.root.id();

    assert!(hierarchy.parent_of(root_id).is_none());
    assert!(hierarchy.sibling_of(root_id).is_none());

    for node in hierarchy.flatten() {
        assert_eq!(hierarchy.find(node.id()).map(|n| n.id()), Some(node.id()));
        if node.id() != root_id {
            let parent = hierarchy.parent_of(node.id()).unwrap();
            assert!(parent.children().unwrap().iter().any(|c| c.id() == node.id()));
            let sibling = hierarchy.sibling_of(node.id()).unwrap();
            assert_ne!(sibling.id(), node.id());
        }
    }
    assert!(hierarchy.find(NodeId(99)).is_none());
}

#[test]
fn test_no_stars_is_an_error() {
    let mut rng = ChaChaRng::seed_from_u64(0);
    assert_eq!(build_hierarchy(&[], &mut rng), Err(GenerationError::NoStars));
}

#[test]
fn test_same_seed_same_tree() {
    let input = stars(&[1.1, 0.9, 0.4, 0.2, 0.1]);
    let a = build_hierarchy(&input, &mut ChaChaRng::seed_from_u64(77)).unwrap();
    let b = build_hierarchy(&input, &mut ChaChaRng::seed_from_u64(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_separation_categories() {
    let total: f64 = SeparationCategory::ALL.iter().map(|c| c.weight()).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);

    for category in SeparationCategory::ALL {
        let (min, max) = category.range_au();
        assert!(max > min && min > 0.0);
        assert!(category.max_eccentricity() < 1.0);
    }
}

#[test]
fn test_hierarchy_serializes_with_type_tags() {
    let hierarchy = StellarHierarchy::new(HierarchyNode::Star {
        id: NodeId(0),
        body: BodyId(0),
    });
    let json = serde_json::to_string(&hierarchy).unwrap();
    assert!(json.contains("\"type\":\"star\""));
}
