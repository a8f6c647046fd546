//! Body identifiers and the id-indexed body registry.

use std::collections::BTreeMap;

use planetary::{Asteroid, Moon, Planet};
use serde::{Deserialize, Serialize};
use stellar::Star;

/// Identifier of a generated body, allocated sequentially in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u32);

/// Identifier of a hierarchy node (star leaf or barycenter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "body-{}", self.0)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Category of a body, used for the partitioned id lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyCategory {
    Star,
    Planet,
    Moon,
    Asteroid,
}

/// Physical payload produced by a leaf generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Body {
    Star(Star),
    Planet(Planet),
    Moon(Moon),
    Asteroid(Asteroid),
}

impl Body {
    pub fn category(&self) -> BodyCategory {
        match self {
            Self::Star(_) => BodyCategory::Star,
            Self::Planet(_) => BodyCategory::Planet,
            Self::Moon(_) => BodyCategory::Moon,
            Self::Asteroid(_) => BodyCategory::Asteroid,
        }
    }
}

/// What a body orbits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum Parent {
    /// An orbit host (star or barycenter)
    Host(NodeId),
    /// Another body (a moon's planet)
    Body(BodyId),
    /// An asteroid belt, by index into the system's belt list
    Belt(usize),
}

/// A named body in the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemBody {
    pub id: BodyId,
    pub name: String,
    /// `None` for stars; their place is recorded in the hierarchy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    pub body: Body,
}

/// Allocates body ids and stores bodies in id order
#[derive(Debug, Default)]
pub(crate) struct BodyRegistry {
    next_id: u32,
    bodies: BTreeMap<BodyId, SystemBody>,
}

impl BodyRegistry {
    pub fn insert(&mut self, name: String, parent: Option<Parent>, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(
            id,
            SystemBody {
                id,
                name,
                parent,
                body,
            },
        );
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&SystemBody> {
        self.bodies.get(&id)
    }

    pub fn into_bodies(self) -> BTreeMap<BodyId, SystemBody> {
        self.bodies
    }
}
