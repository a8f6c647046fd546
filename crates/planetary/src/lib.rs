//! Planets, moons and asteroids
//!
//! Body types produced by the leaf generators, the typed request objects
//! ([`PlanetSpec`], [`MoonSpec`], [`AsteroidSpec`]) the system layer uses to
//! pin orbital placement, and a default statistical implementation of each
//! generator contract.

pub mod archetype;
pub mod asteroid;
pub mod context;
pub mod generation;
pub mod moon;
pub mod planet;
pub mod planet_class;
pub mod spec;

#[cfg(test)]
mod planet_class_test;
#[cfg(test)]
mod planet_test;

pub use archetype::PlanetArchetype;
pub use asteroid::{Asteroid, AsteroidComposition};
pub use context::ParentContext;
pub use generation::{AsteroidGenerator, MoonGenerator, PlanetGenerator, StatisticalGenerator};
pub use moon::{Moon, MoonKind, moon_numeral};
pub use planet::Planet;
pub use planet_class::{MoonOccurrence, PlanetClass};
pub use spec::{AsteroidOverrides, AsteroidSpec, MoonOverrides, MoonSpec, PlanetOverrides, PlanetSpec};
