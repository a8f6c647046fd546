//! Star bodies and star generation.
//!
//! The system assembler only needs a handful of stellar properties (mass,
//! radius, luminosity, effective temperature). This crate defines that
//! body, the [`StarGenerator`] contract the assembler calls, and a default
//! main-sequence implementation.

pub mod generation;
pub mod sampling;
pub mod spectral;
pub mod star;


pub use generation::{MainSequenceGenerator, StarGenerator, StarOverrides, StarSpec};
pub use sampling::fork_rng;
pub use spectral::SpectralType;
pub use star::Star;
