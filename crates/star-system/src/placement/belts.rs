//! Asteroid belt placement.
//!
//! # Gap finding
//!
//! Filled planet slots are obstacles (points), and so are belts already
//! placed around the same host (intervals). The free stretches between
//! them inside a search region, including the two open-ended stretches at
//! either end, are scored as
//!
//! ```text
//! score = width / (1 + |center − target| / target)
//! ```
//!
//! which prefers wide gaps close to the physically motivated target. The
//! best gap is rejected if it is narrower than max(0.1 AU, 0.2 × target).
//!
//! # Belts
//!
//! - **Inner**: just inside the frost line, where a giant planet's
//!   resonances would have stalled accretion. Rocky or metallic.
//! - **Outer**: beyond 5× the frost line, a Kuiper-belt analog. Icy.

use planetary::{AsteroidComposition, AsteroidGenerator, AsteroidSpec, ParentContext};
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use stellar::fork_rng;
use stellar::sampling::{sample_log_uniform, sample_weighted_index};
use tracing::{debug, trace};

use crate::body::{Body, BodyId, BodyRegistry, NodeId, Parent};
use crate::host::OrbitHost;
use crate::naming::asteroid_name;
use crate::slots::OrbitSlot;

/// Default probability of an inner belt around a host
pub const INNER_BELT_PROBABILITY: f64 = 0.45;

/// Default probability of an outer belt around a host
pub const OUTER_BELT_PROBABILITY: f64 = 0.60;

/// Inner belt target as a fraction of the frost line
const INNER_BELT_FROST_FRACTION: f64 = 0.85;

/// Outer belt search region starts at this multiple of the frost line
const OUTER_BELT_FROST_MULTIPLE: f64 = 5.0;

/// Outer belt target range, in frost-line radii
const OUTER_BELT_TARGET_RANGE: (f64, f64) = (8.0, 15.0);

/// Absolute minimum gap width (AU)
const MIN_GAP_WIDTH_AU: f64 = 0.1;

/// Minimum gap width relative to the target distance
const MIN_GAP_TARGET_FRACTION: f64 = 0.2;

/// Belt half-width as a fraction of both the gap width and the target
const HALF_WIDTH_FRACTION: f64 = 0.2;

/// Clearance between a belt center and the gap edges, in half-widths
const EDGE_CLEARANCE: f64 = 1.25;

/// Major asteroids per belt
const MAJOR_ASTEROID_COUNT: (usize, usize) = (3, 10);

/// Cumulative size distribution index: N(>D) ∝ D^−2.5
const SIZE_DISTRIBUTION_INDEX: f64 = 2.5;

// =============================================================================
// Types
// =============================================================================

/// Where a belt sits relative to the frost line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeltRegion {
    Inner,
    Outer,
}

impl BeltRegion {
    /// Mass per AU of belt width (M⊕/AU)
    fn linear_density_range(&self) -> (f64, f64) {
        match self {
            Self::Inner => (1.0e-4, 1.0e-2),
            Self::Outer => (1.0e-2, 1.0e-1),
        }
    }

    /// Major asteroid diameter bounds (km)
    fn diameter_range(&self) -> (f64, f64) {
        match self {
            Self::Inner => (50.0, 1000.0),
            Self::Outer => (100.0, 2500.0),
        }
    }
}

impl std::fmt::Display for BeltRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inner => write!(f, "inner"),
            Self::Outer => write!(f, "outer"),
        }
    }
}

/// Dominant material of a belt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeltComposition {
    Rocky,
    Metallic,
    Icy,
}

impl BeltComposition {
    /// Asteroid composition weights: carbonaceous, silicaceous, metallic, icy
    pub fn asteroid_weights(&self) -> [f64; 4] {
        match self {
            Self::Rocky => [0.60, 0.30, 0.10, 0.00],
            Self::Metallic => [0.30, 0.30, 0.40, 0.00],
            Self::Icy => [0.25, 0.05, 0.00, 0.70],
        }
    }

    fn sample_asteroid(&self, rng: &mut ChaChaRng) -> AsteroidComposition {
        const KINDS: [AsteroidComposition; 4] = [
            AsteroidComposition::Carbonaceous,
            AsteroidComposition::Silicaceous,
            AsteroidComposition::Metallic,
            AsteroidComposition::Icy,
        ];
        KINDS[sample_weighted_index(rng, &self.asteroid_weights())]
    }
}

impl std::fmt::Display for BeltComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rocky => write!(f, "rocky"),
            Self::Metallic => write!(f, "metallic"),
            Self::Icy => write!(f, "icy"),
        }
    }
}

/// A placed asteroid belt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidBelt {
    pub host: NodeId,
    pub region: BeltRegion,
    pub composition: BeltComposition,
    pub inner_radius_au: f64,
    pub outer_radius_au: f64,
    /// Total estimated mass (M⊕)
    pub mass_earth: f64,
    /// Major asteroids, largest first
    pub asteroid_ids: Vec<BodyId>,
}

impl AsteroidBelt {
    pub fn width(&self) -> f64 {
        self.outer_radius_au - self.inner_radius_au
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.inner_radius_au + self.outer_radius_au)
    }

    pub fn contains(&self, distance_au: f64) -> bool {
        (self.inner_radius_au..=self.outer_radius_au).contains(&distance_au)
    }
}

/// A free stretch between obstacles (AU)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    pub inner_au: f64,
    pub outer_au: f64,
}

impl Gap {
    pub fn width(&self) -> f64 {
        self.outer_au - self.inner_au
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.inner_au + self.outer_au)
    }

    pub fn score(&self, target_au: f64) -> f64 {
        self.width() / (1.0 + (self.center() - target_au).abs() / target_au)
    }
}

// =============================================================================
// Gap finding
// =============================================================================

/// Best gap in `region` around `target_au`
///
/// `obstacles` are `(inner, outer)` intervals in AU; a planet is a
/// zero-width interval. Returns `None` when the region is empty or the
/// best gap is too narrow.
pub fn find_gap(obstacles: &[(f64, f64)], region: (f64, f64), target_au: f64) -> Option<Gap> {
    let (lo, hi) = region;
    if hi <= lo || target_au <= 0.0 {
        return None;
    }

    let mut clipped: Vec<(f64, f64)> = obstacles
        .iter()
        .filter(|(start, end)| *end >= lo && *start <= hi)
        .map(|&(start, end)| (start.max(lo), end.min(hi)))
        .collect();
    clipped.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut gaps = Vec::with_capacity(clipped.len() + 1);
    let mut cursor = lo;
    for (start, end) in clipped {
        if start > cursor {
            gaps.push(Gap {
                inner_au: cursor,
                outer_au: start,
            });
        }
        cursor = cursor.max(end);
    }
    if hi > cursor {
        gaps.push(Gap {
            inner_au: cursor,
            outer_au: hi,
        });
    }

    let best = gaps
        .into_iter()
        .fold(None::<Gap>, |best, gap| match best {
            Some(b) if b.score(target_au) >= gap.score(target_au) => Some(b),
            _ => Some(gap),
        })?;

    let min_width = MIN_GAP_WIDTH_AU.max(MIN_GAP_TARGET_FRACTION * target_au);
    (best.width() >= min_width).then_some(best)
}

/// Belt edges strictly inside `gap`, centered as close to `target_au` as
/// the edge clearance allows
fn belt_edges(gap: &Gap, target_au: f64) -> (f64, f64) {
    let half_width = HALF_WIDTH_FRACTION * gap.width().min(target_au);
    let clearance = EDGE_CLEARANCE * half_width;
    let center = target_au.clamp(gap.inner_au + clearance, gap.outer_au - clearance);
    (center - half_width, center + half_width)
}

// =============================================================================
// Placement
// =============================================================================

/// Inclusion probabilities for the two belts around a host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltProbabilities {
    pub inner: f64,
    pub outer: f64,
}

impl Default for BeltProbabilities {
    fn default() -> Self {
        Self {
            inner: INNER_BELT_PROBABILITY,
            outer: OUTER_BELT_PROBABILITY,
        }
    }
}

/// Roll and place the inner and outer belts around `host`
///
/// `first_index` is the system-wide index the next belt will get; it
/// parents that belt's asteroids and appears in their names.
#[allow(clippy::too_many_arguments)]
pub(crate) fn place_belts(
    host: &OrbitHost,
    slots: &[OrbitSlot],
    catalog: &str,
    first_index: usize,
    probabilities: BeltProbabilities,
    ctx: &ParentContext,
    generator: &dyn AsteroidGenerator,
    registry: &mut BodyRegistry,
    rng: &mut ChaChaRng,
) -> Vec<AsteroidBelt> {
    let mut obstacles: Vec<(f64, f64)> = slots
        .iter()
        .filter(|slot| slot.is_filled())
        .map(|slot| (slot.semi_major_axis_au, slot.semi_major_axis_au))
        .collect();
    let mut belts = Vec::new();

    for region in [BeltRegion::Inner, BeltRegion::Outer] {
        let probability = match region {
            BeltRegion::Inner => probabilities.inner,
            BeltRegion::Outer => probabilities.outer,
        };
        if !rng.random_bool(probability.clamp(0.0, 1.0)) {
            continue;
        }

        let (search, target_au, composition) = match region {
            BeltRegion::Inner => {
                let composition = if rng.random_bool(0.75) {
                    BeltComposition::Rocky
                } else {
                    BeltComposition::Metallic
                };
                (
                    (host.inner_stability_au, host.outer_stability_au),
                    INNER_BELT_FROST_FRACTION * host.frost_line_au,
                    composition,
                )
            }
            BeltRegion::Outer => {
                let (lo, hi) = OUTER_BELT_TARGET_RANGE;
                (
                    (
                        OUTER_BELT_FROST_MULTIPLE * host.frost_line_au,
                        host.outer_stability_au,
                    ),
                    host.frost_line_au * rng.random_range(lo..hi),
                    BeltComposition::Icy,
                )
            }
        };

        let Some(gap) = find_gap(&obstacles, search, target_au) else {
            trace!(node = %host.node, %region, target_au, "no gap for belt");
            continue;
        };

        let (inner_radius_au, outer_radius_au) = belt_edges(&gap, target_au);
        let (density_min, density_max) = region.linear_density_range();
        let mass_earth =
            sample_log_uniform(rng, density_min, density_max) * (outer_radius_au - inner_radius_au);

        let index = first_index + belts.len();
        let asteroid_ids = place_major_asteroids(
            region,
            composition,
            (inner_radius_au, outer_radius_au),
            catalog,
            index,
            ctx,
            generator,
            registry,
            rng,
        );

        debug!(
            node = %host.node,
            %region,
            %composition,
            inner_radius_au,
            outer_radius_au,
            asteroids = asteroid_ids.len(),
            "belt placed"
        );
        obstacles.push((inner_radius_au, outer_radius_au));
        belts.push(AsteroidBelt {
            host: host.node,
            region,
            composition,
            inner_radius_au,
            outer_radius_au,
            mass_earth,
            asteroid_ids,
        });
    }

    belts
}

/// Populate a belt with its largest members, largest first
#[allow(clippy::too_many_arguments)]
fn place_major_asteroids(
    region: BeltRegion,
    composition: BeltComposition,
    (inner_au, outer_au): (f64, f64),
    catalog: &str,
    belt_index: usize,
    ctx: &ParentContext,
    generator: &dyn AsteroidGenerator,
    registry: &mut BodyRegistry,
    rng: &mut ChaChaRng,
) -> Vec<BodyId> {
    let (min_count, max_count) = MAJOR_ASTEROID_COUNT;
    let count = rng.random_range(min_count..=max_count);
    let (d_min, d_max) = region.diameter_range();

    let mut diameters: Vec<f64> = (0..count)
        .map(|_| {
            // 1 − u keeps the draw in (0, 1]
            let u = 1.0 - rng.random::<f64>();
            (d_min * u.powf(-1.0 / SIZE_DISTRIBUTION_INDEX)).min(d_max)
        })
        .collect();
    diameters.sort_by(|a, b| b.total_cmp(a));

    diameters
        .into_iter()
        .enumerate()
        .map(|(rank, diameter_km)| {
            let kind = composition.sample_asteroid(rng);
            let distance_au = rng.random_range(inner_au..=outer_au);
            let spec = AsteroidSpec::new(kind).with_size_and_distance(diameter_km, distance_au);

            let mut asteroid_rng = fork_rng(rng);
            let asteroid =
                generator.generate_asteroid(&spec, &ctx.at_distance(distance_au), &mut asteroid_rng);

            registry.insert(
                asteroid_name(catalog, belt_index, rank),
                Some(Parent::Belt(belt_index)),
                Body::Asteroid(asteroid),
            )
        })
        .collect()
}
