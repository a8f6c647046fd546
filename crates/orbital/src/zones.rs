//! Temperature zones around a luminous host.

use serde::{Deserialize, Serialize};

/// Snow line coefficient at 1 L☉ (AU)
const FROST_LINE_SOLAR_AU: f64 = 2.7;

/// Effective stellar flux at the runaway-greenhouse edge (S☉)
const HZ_INNER_FLUX: f64 = 1.1;

/// Effective stellar flux at the maximum-greenhouse edge (S☉)
const HZ_OUTER_FLUX: f64 = 0.36;

/// Frost (snow) line distance in AU
///
/// Scales as √L: 2.7 AU for the Sun. Returns `0.0` for non-positive
/// luminosity.
pub fn frost_line(luminosity: f64) -> f64 {
    if luminosity <= 0.0 {
        return 0.0;
    }
    FROST_LINE_SOLAR_AU * luminosity.sqrt()
}

/// Habitable zone boundaries in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_edge: f64,
    pub outer_edge: f64,
}

impl HabitableZone {
    /// Boundaries where the incident flux equals 1.1 S☉ and 0.36 S☉
    ///
    /// A non-positive luminosity gives an empty zone at the origin.
    pub fn from_luminosity(luminosity: f64) -> Self {
        if luminosity <= 0.0 {
            return Self {
                inner_edge: 0.0,
                outer_edge: 0.0,
            };
        }
        Self {
            inner_edge: (luminosity / HZ_INNER_FLUX).sqrt(),
            outer_edge: (luminosity / HZ_OUTER_FLUX).sqrt(),
        }
    }

    pub fn contains(&self, distance_au: f64) -> bool {
        (self.inner_edge..=self.outer_edge).contains(&distance_au)
    }

    pub fn width(&self) -> f64 {
        self.outer_edge - self.inner_edge
    }
}
