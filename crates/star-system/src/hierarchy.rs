//! Stellar hierarchy: a binary tree of stars and barycenters.
//!
//! Multiple star systems are hierarchical in practice: a close pair orbited
//! by a distant third star, two pairs orbiting each other, and so on. Every
//! internal node is a barycenter of exactly two children, so an N-star
//! system always has N leaves and N−1 barycenters.
//!
//! # Construction
//!
//! Leaves are combined pairwise at random until one root remains. Each new
//! barycenter draws its separation log-uniformly from one of three weighted
//! categories and is widened to at least 3× the widest separation inside
//! either child, which keeps inner pairs dynamically tighter than the
//! orbits around them.

use orbital::orbital_period;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use stellar::sampling::{sample_log_uniform, sample_weighted_index};
use tracing::{debug, trace};

use crate::body::{BodyId, NodeId};
use crate::error::{GenerationError, GenerationResult};

/// Minimum ratio between a barycenter's separation and the widest
/// separation nested inside it
const HIERARCHY_WIDENING: f64 = 3.0;

// =============================================================================
// Separation categories
// =============================================================================

/// Binary separation regime
///
/// Weights follow the broad log-normal period distribution of solar-type
/// multiples (Raghavan et al. 2010) collapsed into three bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationCategory {
    /// 0.05-1 AU, mostly circularized
    Close,
    /// 1-50 AU
    Moderate,
    /// 50-1000 AU, often highly eccentric
    Wide,
}

impl SeparationCategory {
    pub const ALL: [Self; 3] = [Self::Close, Self::Moderate, Self::Wide];

    /// Separation range in AU
    pub fn range_au(&self) -> (f64, f64) {
        match self {
            Self::Close => (0.05, 1.0),
            Self::Moderate => (1.0, 50.0),
            Self::Wide => (50.0, 1000.0),
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            Self::Close => 0.30,
            Self::Moderate => 0.45,
            Self::Wide => 0.25,
        }
    }

    /// Upper bound on the drawn eccentricity
    pub fn max_eccentricity(&self) -> f64 {
        match self {
            Self::Close => 0.3,
            Self::Moderate => 0.6,
            Self::Wide => 0.8,
        }
    }

    pub fn sample(rng: &mut ChaChaRng) -> Self {
        let weights = Self::ALL.map(|c| c.weight());
        Self::ALL[sample_weighted_index(rng, &weights)]
    }
}

// =============================================================================
// Tree
// =============================================================================

/// One node of the stellar hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HierarchyNode {
    /// Leaf referencing a generated star body
    Star { id: NodeId, body: BodyId },
    /// Center of mass of two orbiting children, primary (heavier) first
    #[serde(rename_all = "camelCase")]
    Barycenter {
        id: NodeId,
        separation_au: f64,
        eccentricity: f64,
        period_years: f64,
        children: Box<[HierarchyNode; 2]>,
    },
}

impl HierarchyNode {
    pub fn id(&self) -> NodeId {
        match self {
            Self::Star { id, .. } | Self::Barycenter { id, .. } => *id,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star { .. })
    }

    /// Star body referenced by a leaf
    pub fn star_body(&self) -> Option<BodyId> {
        match self {
            Self::Star { body, .. } => Some(*body),
            Self::Barycenter { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[HierarchyNode; 2]> {
        match self {
            Self::Star { .. } => None,
            Self::Barycenter { children, .. } => Some(children),
        }
    }

    /// Star bodies in this subtree, left to right
    pub fn leaf_bodies(&self) -> Vec<BodyId> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, out: &mut Vec<BodyId>) {
        match self {
            Self::Star { body, .. } => out.push(*body),
            Self::Barycenter { children, .. } => {
                children[0].collect_leaves(out);
                children[1].collect_leaves(out);
            }
        }
    }

    /// Number of edges on the longest path to a leaf
    pub fn depth(&self) -> usize {
        match self {
            Self::Star { .. } => 0,
            Self::Barycenter { children, .. } => 1 + children[0].depth().max(children[1].depth()),
        }
    }

    /// Widest separation anywhere in this subtree (0 for a lone star)
    pub fn widest_separation(&self) -> f64 {
        match self {
            Self::Star { .. } => 0.0,
            Self::Barycenter {
                separation_au,
                children,
                ..
            } => separation_au
                .max(children[0].widest_separation())
                .max(children[1].widest_separation()),
        }
    }

    fn find(&self, target: NodeId) -> Option<&HierarchyNode> {
        if self.id() == target {
            return Some(self);
        }
        self.children()?.iter().find_map(|child| child.find(target))
    }

    fn find_parent(&self, target: NodeId) -> Option<&HierarchyNode> {
        let children = self.children()?;
        if children.iter().any(|child| child.id() == target) {
            return Some(self);
        }
        children.iter().find_map(|child| child.find_parent(target))
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a HierarchyNode>) {
        out.push(self);
        if let Some(children) = self.children() {
            children[0].flatten_into(out);
            children[1].flatten_into(out);
        }
    }
}

/// The assembled hierarchy, owned by the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarHierarchy {
    pub root: HierarchyNode,
}

impl StellarHierarchy {
    pub fn new(root: HierarchyNode) -> Self {
        Self { root }
    }

    pub fn find(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.root.find(id)
    }

    /// Barycenter directly containing `id`; `None` for the root
    pub fn parent_of(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.root.find_parent(id)
    }

    /// The other child of `id`'s parent
    pub fn sibling_of(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.parent_of(id)?
            .children()?
            .iter()
            .find(|child| child.id() != id)
    }

    /// All nodes in pre-order (root first)
    pub fn flatten(&self) -> Vec<&HierarchyNode> {
        let mut nodes = Vec::new();
        self.root.flatten_into(&mut nodes);
        nodes
    }

    pub fn leaf_ids(&self) -> Vec<BodyId> {
        self.root.leaf_bodies()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn star_count(&self) -> usize {
        self.flatten().iter().filter(|node| node.is_star()).count()
    }

    pub fn barycenter_count(&self) -> usize {
        self.flatten().iter().filter(|node| !node.is_star()).count()
    }
}

// =============================================================================
// Construction
// =============================================================================

/// A subtree waiting to be paired, with its total mass
struct Pending {
    node: HierarchyNode,
    mass: f64,
}

/// Assemble a hierarchy from generated stars by random pairing
///
/// `stars` lists each star body with its mass (M☉). Leaves take node ids
/// `0..N`; barycenters continue from `N` in creation order. Exactly N−1
/// pairings are made.
pub fn build_hierarchy(
    stars: &[(BodyId, f64)],
    rng: &mut ChaChaRng,
) -> GenerationResult<StellarHierarchy> {
    if stars.is_empty() {
        return Err(GenerationError::NoStars);
    }

    let mut pending: Vec<Pending> = stars
        .iter()
        .enumerate()
        .map(|(i, &(body, mass))| Pending {
            node: HierarchyNode::Star {
                id: NodeId(i as u32),
                body,
            },
            mass,
        })
        .collect();
    let mut next_id = stars.len() as u32;

    while pending.len() > 1 {
        let a = pending.remove(rng.random_range(0..pending.len()));
        let b = pending.remove(rng.random_range(0..pending.len()));

        let category = SeparationCategory::sample(rng);
        let (min_sep, max_sep) = category.range_au();
        let mut separation_au = sample_log_uniform(rng, min_sep, max_sep);

        let inner = a.node.widest_separation().max(b.node.widest_separation());
        if inner > 0.0 {
            separation_au = separation_au.max(HIERARCHY_WIDENING * inner);
        }

        let u: f64 = rng.random();
        let eccentricity = u * u * category.max_eccentricity();

        let mass = a.mass + b.mass;
        let period_years = orbital_period(separation_au, mass);
        let (primary, secondary) = if a.mass >= b.mass { (a, b) } else { (b, a) };

        let id = NodeId(next_id);
        next_id += 1;
        trace!(
            %id,
            ?category,
            separation_au,
            eccentricity,
            period_years,
            "barycenter formed"
        );

        pending.push(Pending {
            node: HierarchyNode::Barycenter {
                id,
                separation_au,
                eccentricity,
                period_years,
                children: Box::new([primary.node, secondary.node]),
            },
            mass,
        });
    }

    let root = pending
        .pop()
        .ok_or_else(|| GenerationError::Hierarchy("pairing left no root".into()))?;
    let hierarchy = StellarHierarchy::new(root.node);
    debug!(
        stars = stars.len(),
        depth = hierarchy.depth(),
        "stellar hierarchy assembled"
    );
    Ok(hierarchy)
}
