//! The assembled star system and its queries.

use std::collections::BTreeMap;
use std::fmt;

use planetary::{Asteroid, Moon, Planet};
use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::body::{Body, BodyCategory, BodyId, NodeId, Parent, SystemBody};
use crate::hierarchy::StellarHierarchy;
use crate::host::OrbitHost;
use crate::metadata::Provenance;
use crate::placement::AsteroidBelt;
use crate::slots::OrbitSlot;

/// A generated system
///
/// Read-only once returned from generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub provenance: Provenance,
    pub bodies: BTreeMap<BodyId, SystemBody>,
    pub star_ids: Vec<BodyId>,
    pub planet_ids: Vec<BodyId>,
    pub moon_ids: Vec<BodyId>,
    pub asteroid_ids: Vec<BodyId>,
    pub hierarchy: StellarHierarchy,
    /// Usable hosts, hierarchy pre-order
    pub hosts: Vec<OrbitHost>,
    /// Slots of every host, grouped by host in `hosts` order
    pub slots: Vec<OrbitSlot>,
    pub belts: Vec<AsteroidBelt>,
}

impl StarSystem {
    pub fn name(&self) -> String {
        self.provenance.catalog_name()
    }

    // -------------------------------------------------------------------------
    // Bodies
    // -------------------------------------------------------------------------

    pub fn body(&self, id: BodyId) -> Option<&SystemBody> {
        self.bodies.get(&id)
    }

    pub fn star(&self, id: BodyId) -> Option<&Star> {
        match &self.body(id)?.body {
            Body::Star(star) => Some(star),
            _ => None,
        }
    }

    pub fn planet(&self, id: BodyId) -> Option<&Planet> {
        match &self.body(id)?.body {
            Body::Planet(planet) => Some(planet),
            _ => None,
        }
    }

    pub fn moon(&self, id: BodyId) -> Option<&Moon> {
        match &self.body(id)?.body {
            Body::Moon(moon) => Some(moon),
            _ => None,
        }
    }

    pub fn asteroid(&self, id: BodyId) -> Option<&Asteroid> {
        match &self.body(id)?.body {
            Body::Asteroid(asteroid) => Some(asteroid),
            _ => None,
        }
    }

    /// Ids of every body in `category`, in generation order
    pub fn ids(&self, category: BodyCategory) -> &[BodyId] {
        match category {
            BodyCategory::Star => &self.star_ids,
            BodyCategory::Planet => &self.planet_ids,
            BodyCategory::Moon => &self.moon_ids,
            BodyCategory::Asteroid => &self.asteroid_ids,
        }
    }

    // -------------------------------------------------------------------------
    // Hosts
    // -------------------------------------------------------------------------

    pub fn host(&self, node: NodeId) -> Option<&OrbitHost> {
        self.hosts.iter().find(|host| host.node == node)
    }

    pub fn slots_for(&self, node: NodeId) -> impl Iterator<Item = &OrbitSlot> {
        self.slots.iter().filter(move |slot| slot.host == node)
    }

    pub fn belts_for(&self, node: NodeId) -> impl Iterator<Item = &AsteroidBelt> {
        self.belts.iter().filter(move |belt| belt.host == node)
    }

    /// Planets orbiting `node`, innermost first
    pub fn planets_of(&self, node: NodeId) -> Vec<BodyId> {
        self.children_of(Parent::Host(node), &self.planet_ids)
    }

    /// Moons of `planet`, innermost first
    pub fn moons_of(&self, planet: BodyId) -> Vec<BodyId> {
        self.children_of(Parent::Body(planet), &self.moon_ids)
    }

    fn children_of(&self, parent: Parent, candidates: &[BodyId]) -> Vec<BodyId> {
        candidates
            .iter()
            .copied()
            .filter(|id| self.body(*id).and_then(|b| b.parent) == Some(parent))
            .collect()
    }

    /// Host a planet orbits
    pub fn host_of(&self, planet: BodyId) -> Option<&OrbitHost> {
        match self.body(planet)?.parent? {
            Parent::Host(node) => self.host(node),
            _ => None,
        }
    }

    /// Sorted distances of the occupied slots around `node` (AU)
    pub fn filled_slot_distances(&self, node: NodeId) -> Vec<f64> {
        let mut distances: Vec<f64> = self
            .slots_for(node)
            .filter(|slot| slot.is_filled())
            .map(|slot| slot.semi_major_axis_au)
            .collect();
        distances.sort_by(|a, b| a.total_cmp(b));
        distances
    }

    // -------------------------------------------------------------------------
    // Comparison and summary
    // -------------------------------------------------------------------------

    /// Equal in everything except the generation timestamp
    pub fn same_layout(&self, other: &StarSystem) -> bool {
        let mut provenance = other.provenance.clone();
        provenance.generated_at = self.provenance.generated_at;

        self.provenance == provenance
            && self.bodies == other.bodies
            && self.star_ids == other.star_ids
            && self.planet_ids == other.planet_ids
            && self.moon_ids == other.moon_ids
            && self.asteroid_ids == other.asteroid_ids
            && self.hierarchy == other.hierarchy
            && self.hosts == other.hosts
            && self.slots == other.slots
            && self.belts == other.belts
    }

    pub fn summary(&self) -> SystemSummary {
        let habitable_zone_planets = self
            .planet_ids
            .iter()
            .filter(|id| {
                match (self.planet(**id), self.host_of(**id)) {
                    (Some(planet), Some(host)) => host.habitable_zone().contains(planet.semi_major_axis_au),
                    _ => false,
                }
            })
            .count();

        SystemSummary {
            name: self.name(),
            seed: self.provenance.seed,
            stars: self.star_ids.len(),
            barycenters: self.hierarchy.barycenter_count(),
            hosts: self.hosts.len(),
            slots: self.slots.len(),
            planets: self.planet_ids.len(),
            moons: self.moon_ids.len(),
            belts: self.belts.len(),
            asteroids: self.asteroid_ids.len(),
            habitable_zone_planets,
        }
    }
}

/// Body and structure counts of a system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSummary {
    pub name: String,
    pub seed: u64,
    pub stars: usize,
    pub barycenters: usize,
    pub hosts: usize,
    pub slots: usize,
    pub planets: usize,
    pub moons: usize,
    pub belts: usize,
    pub asteroids: usize,
    pub habitable_zone_planets: usize,
}

impl fmt::Display for SystemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (seed {})", self.name, self.seed)?;
        writeln!(
            f,
            "  stars: {}  barycenters: {}  orbit hosts: {}  slots: {}",
            self.stars, self.barycenters, self.hosts, self.slots
        )?;
        writeln!(
            f,
            "  planets: {} ({} in a habitable zone)  moons: {}",
            self.planets, self.habitable_zone_planets, self.moons
        )?;
        write!(f, "  belts: {}  major asteroids: {}", self.belts, self.asteroids)
    }
}
