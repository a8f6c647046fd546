//! Provenance and identity of a generated system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::spec::SystemSpec;

/// Tag of the algorithm that produced a system
///
/// Systems generated under the same tag from the same specification are
/// identical apart from their timestamp.
pub const GENERATOR_VERSION: &str = concat!("star-system/", env!("CARGO_PKG_VERSION"));

/// Layout version of the serialized output
pub const SCHEMA_VERSION: u32 = 1;

/// Everything needed to reproduce a system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Stable identifier derived from the seed
    ///
    /// UUIDs are JSON-safe (serialized as strings) and avoid JavaScript's
    /// `Number.MAX_SAFE_INTEGER` limitation that corrupts large u64 values.
    pub id: Uuid,
    pub seed: u64,
    pub generator_version: String,
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    /// Snapshot of the specification the system was generated from
    pub spec: SystemSpec,
}

impl Provenance {
    /// Provenance for a generation starting now
    pub fn new(spec: SystemSpec) -> Self {
        Self {
            id: system_id(spec.seed),
            seed: spec.seed,
            generator_version: GENERATOR_VERSION.to_string(),
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            spec,
        }
    }

    /// Short catalog designation derived from the id
    ///
    /// Format: two uppercase letters + 4 digits (e.g. "KV-4729").
    /// Deterministic: the same seed always produces the same designation.
    /// Provides ~6.76 million unique combinations (26² × 10000).
    ///
    /// # Example
    /// ```
    /// use star_system::{Provenance, SystemSpec};
    ///
    /// let provenance = Provenance::new(SystemSpec::new(42));
    /// let name = provenance.catalog_name();
    /// assert_eq!(name.len(), 7);
    /// assert!(name.contains('-'));
    /// ```
    pub fn catalog_name(&self) -> String {
        catalog_name(&self.id)
    }

    /// Whether this record was written by the running generator
    pub fn is_current(&self) -> bool {
        self.generator_version == GENERATOR_VERSION && self.schema_version == SCHEMA_VERSION
    }
}

/// Name-based (v5) UUID for a seed
pub fn system_id(seed: u64) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, &seed.to_le_bytes())
}

fn catalog_name(id: &Uuid) -> String {
    let bytes = id.as_bytes();
    let prefix1 = (bytes[0] % 26 + b'A') as char;
    let prefix2 = (bytes[1] % 26 + b'A') as char;
    let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
    format!("{}{}-{:04}", prefix1, prefix2, number)
}
