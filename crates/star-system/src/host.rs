//! Orbit hosts: the stable region around each star or barycenter.

use std::collections::BTreeMap;

use orbital::{
    HabitableZone, Length, Mass, frost_line, outer_region_limit, p_type_critical_radius,
    s_type_critical_radius,
};
use serde::{Deserialize, Serialize};
use stellar::Star;
use tracing::{debug, trace};

use crate::body::{BodyId, NodeId};
use crate::hierarchy::{HierarchyNode, StellarHierarchy};

/// Closest orbit allowed around a star, in stellar radii
const MIN_ORBIT_STELLAR_RADII: f64 = 3.0;

/// Orbit geometry around a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Circumstellar: around one star
    SType,
    /// Circumbinary: around a barycenter
    PType,
}

impl std::fmt::Display for HostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SType => write!(f, "S-type"),
            Self::PType => write!(f, "P-type"),
        }
    }
}

/// Stability and temperature zones around one hierarchy node
///
/// All radii are in AU measured from the node (the star itself or the
/// barycenter of everything below it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitHost {
    pub node: NodeId,
    pub kind: HostKind,
    /// Stars whose light and mass this host combines
    pub stars: Vec<BodyId>,
    /// Combined mass (M☉)
    pub mass: f64,
    /// Combined luminosity (L☉)
    pub luminosity: f64,
    /// Luminosity-weighted effective temperature (K)
    pub temperature: f64,
    /// Largest stellar radius in the subtree (AU)
    pub max_star_radius_au: f64,
    pub inner_stability_au: f64,
    pub outer_stability_au: f64,
    pub hz_inner_au: f64,
    pub hz_outer_au: f64,
    pub frost_line_au: f64,
}

impl OrbitHost {
    /// Whether planets can exist here at all: outer > inner > 0
    pub fn has_valid_zone(&self) -> bool {
        self.inner_stability_au > 0.0 && self.outer_stability_au > self.inner_stability_au
    }

    pub fn habitable_zone(&self) -> HabitableZone {
        HabitableZone {
            inner_edge: self.hz_inner_au,
            outer_edge: self.hz_outer_au,
        }
    }

    /// Width of the stable annulus (AU)
    pub fn stable_width(&self) -> f64 {
        (self.outer_stability_au - self.inner_stability_au).max(0.0)
    }

    /// Whether `distance_au` lies in the stable annulus
    pub fn is_within_stable_zone(&self, distance_au: f64) -> bool {
        distance_au >= self.inner_stability_au && distance_au <= self.outer_stability_au
    }
}

/// Mass, light and size aggregated over a subtree
#[derive(Debug, Clone, Copy, Default)]
struct Aggregate {
    mass: f64,
    luminosity: f64,
    weighted_temperature: f64,
    max_radius_au: f64,
}

impl Aggregate {
    fn of(node: &HierarchyNode, stars: &BTreeMap<BodyId, Star>) -> Self {
        node.leaf_bodies()
            .iter()
            .filter_map(|id| stars.get(id))
            .fold(Self::default(), |acc, star| Self {
                mass: acc.mass + star.mass,
                luminosity: acc.luminosity + star.luminosity,
                weighted_temperature: acc.weighted_temperature
                    + star.temperature * star.luminosity,
                max_radius_au: acc.max_radius_au.max(star.radius_au()),
            })
    }

    fn temperature(&self) -> f64 {
        if self.luminosity > 0.0 {
            self.weighted_temperature / self.luminosity
        } else {
            0.0
        }
    }
}

/// Build an orbit host for `node`
///
/// The result may not have a valid zone; callers decide whether to keep it.
pub fn compute_host(
    hierarchy: &StellarHierarchy,
    node: &HierarchyNode,
    stars: &BTreeMap<BodyId, Star>,
) -> OrbitHost {
    let own = Aggregate::of(node, stars);

    let (kind, inner_stability_au) = match node {
        HierarchyNode::Star { .. } => (HostKind::SType, MIN_ORBIT_STELLAR_RADII * own.max_radius_au),
        HierarchyNode::Barycenter {
            separation_au,
            eccentricity,
            children,
            ..
        } => {
            let primary = Aggregate::of(&children[0], stars);
            let secondary = Aggregate::of(&children[1], stars);
            let mu = Mass::from_solar_masses(secondary.mass)
                .fraction_of_total(Mass::from_solar_masses(primary.mass));
            let limit = p_type_critical_radius(Length::from_au(*separation_au), mu, *eccentricity);
            (HostKind::PType, limit.to_au())
        }
    };

    // Nested nodes are truncated by their companion; the root only by the
    // disk and the galactic tide.
    let outer_stability_au = match (hierarchy.parent_of(node.id()), hierarchy.sibling_of(node.id())) {
        (
            Some(HierarchyNode::Barycenter {
                separation_au,
                eccentricity,
                ..
            }),
            Some(sibling),
        ) => {
            let companion = Aggregate::of(sibling, stars);
            let mu = Mass::from_solar_masses(companion.mass)
                .fraction_of_total(Mass::from_solar_masses(own.mass));
            s_type_critical_radius(Length::from_au(*separation_au), mu, *eccentricity).to_au()
        }
        _ => outer_region_limit(Mass::from_solar_masses(own.mass)).to_au(),
    };

    let hz = HabitableZone::from_luminosity(own.luminosity);

    OrbitHost {
        node: node.id(),
        kind,
        stars: node.leaf_bodies(),
        mass: own.mass,
        luminosity: own.luminosity,
        temperature: own.temperature(),
        max_star_radius_au: own.max_radius_au,
        inner_stability_au,
        outer_stability_au,
        hz_inner_au: hz.inner_edge,
        hz_outer_au: hz.outer_edge,
        frost_line_au: frost_line(own.luminosity),
    }
}

/// Build hosts for every hierarchy node, keeping only those with a valid zone
///
/// Hosts appear in hierarchy pre-order (root first).
pub fn compute_hosts(hierarchy: &StellarHierarchy, stars: &BTreeMap<BodyId, Star>) -> Vec<OrbitHost> {
    let hosts: Vec<OrbitHost> = hierarchy
        .flatten()
        .into_iter()
        .map(|node| compute_host(hierarchy, node, stars))
        .filter(|host| {
            let valid = host.has_valid_zone();
            if !valid {
                trace!(
                    node = %host.node,
                    kind = %host.kind,
                    inner = host.inner_stability_au,
                    outer = host.outer_stability_au,
                    "orbit host dropped"
                );
            }
            valid
        })
        .collect();

    debug!(hosts = hosts.len(), "orbit hosts computed");
    hosts
}
