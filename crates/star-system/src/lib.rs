//! Deterministic star system assembly
//!
//! Builds a complete system from a [`SystemSpec`] and a seed: a hierarchy
//! of stars and barycenters, the stable orbital region around each of
//! them, a field of candidate orbits, and the planets, moons and asteroid
//! belts that occupy it.
//!
//! ```
//! use star_system::{StarSystem, SystemSpec};
//!
//! let spec = SystemSpec::new(42).with_stars(1);
//! let a = StarSystem::from_spec(&spec).unwrap();
//! let b = StarSystem::from_spec(&spec).unwrap();
//! assert!(a.same_layout(&b));
//! ```
//!
//! Leaf bodies come from the generator contracts in the `stellar` and
//! `planetary` crates; pass custom implementations through
//! [`Collaborators`] to [`generate_system`].

pub mod body;
pub mod configuration;
pub mod error;
pub mod generation;
pub mod hierarchy;
pub mod host;
pub mod metadata;
pub mod naming;
pub mod placement;
pub mod slots;
pub mod spec;
pub mod system;

#[cfg(test)]
mod hierarchy_test;
#[cfg(test)]
mod placement_test;

pub use body::{Body, BodyCategory, BodyId, NodeId, Parent, SystemBody};
pub use configuration::{StellarConfiguration, choose_star_count};
pub use error::{GenerationError, GenerationResult, SpecError};
pub use generation::{Collaborators, generate_system, is_seeded_from, seeded_rng};
pub use hierarchy::{HierarchyNode, SeparationCategory, StellarHierarchy, build_hierarchy};
pub use host::{HostKind, OrbitHost, compute_host, compute_hosts};
pub use metadata::{GENERATOR_VERSION, Provenance, SCHEMA_VERSION, system_id};
pub use placement::{AsteroidBelt, BeltComposition, BeltRegion, PlacementMode};
pub use slots::{MAX_SLOTS, MIN_SPACING_FACTOR, OrbitSlot, OrbitZone, generate_slots};
pub use spec::{OverrideKey, SystemOverrides, SystemSpec};
pub use system::{StarSystem, SystemSummary};
