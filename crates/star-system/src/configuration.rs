//! Stellar configuration: star count, star bodies, hierarchy and hosts.

use std::collections::BTreeMap;

use rand_chacha::ChaChaRng;
use stellar::sampling::{sample_age, sample_metallicity, sample_weighted_index};
use stellar::{Star, StarGenerator, StarSpec, fork_rng};
use tracing::{debug, trace};

use crate::body::{Body, BodyId, BodyRegistry};
use crate::error::{GenerationError, GenerationResult};
use crate::hierarchy::{StellarHierarchy, build_hierarchy};
use crate::host::{OrbitHost, compute_hosts};
use crate::naming::star_name;
use crate::spec::SystemSpec;

/// Relative frequency of 1, 2, 3 and 4+ star systems among field stars
/// (Raghavan et al. 2010)
const MULTIPLICITY_WEIGHTS: [f64; 4] = [0.54, 0.33, 0.09, 0.04];

/// Upper age bound when the system age is drawn (Gyr)
const MAX_SAMPLED_AGE_GYR: f64 = 10.0;

/// Stars, hierarchy and usable hosts of one system
#[derive(Debug, Clone)]
pub struct StellarConfiguration {
    /// Star bodies in generation order
    pub star_ids: Vec<BodyId>,
    pub stars: BTreeMap<BodyId, Star>,
    pub hierarchy: StellarHierarchy,
    /// Hosts with a valid zone, hierarchy pre-order
    pub hosts: Vec<OrbitHost>,
}

/// Number of stars to generate
///
/// An explicit `star_count` override wins. A fixed range (`min == max`)
/// uses that count. Otherwise the field multiplicity distribution is
/// sampled and clamped into the range.
pub fn choose_star_count(spec: &SystemSpec, rng: &mut ChaChaRng) -> GenerationResult<usize> {
    if let Some(count) = spec.overrides.star_count {
        return match count {
            0 => Err(GenerationError::NoStars),
            n => Ok(n),
        };
    }
    if spec.min_stars == 0 || spec.max_stars < spec.min_stars {
        return Err(GenerationError::InvalidStarRange {
            min: spec.min_stars,
            max: spec.max_stars,
        });
    }
    if spec.min_stars == spec.max_stars {
        return Ok(spec.min_stars);
    }

    let drawn = sample_weighted_index(rng, &MULTIPLICITY_WEIGHTS) + 1;
    Ok(drawn.clamp(spec.min_stars, spec.max_stars))
}

/// Generate the stars and assemble hierarchy and hosts
///
/// Age and metallicity are resolved once for the whole system so every
/// component shares them; per-star overrides still win.
pub(crate) fn build_configuration(
    spec: &SystemSpec,
    catalog: &str,
    generator: &dyn StarGenerator,
    registry: &mut BodyRegistry,
    rng: &mut ChaChaRng,
) -> GenerationResult<StellarConfiguration> {
    let count = choose_star_count(spec, rng)?;
    let metallicity = spec.metallicity.unwrap_or_else(|| sample_metallicity(rng));
    let age_gyr = spec
        .age_gyr
        .unwrap_or_else(|| sample_age(rng, MAX_SAMPLED_AGE_GYR));
    debug!(count, age_gyr, metallicity, "star count chosen");

    let mut star_ids = Vec::with_capacity(count);
    let mut stars = BTreeMap::new();
    let mut masses = Vec::with_capacity(count);

    for index in 0..count {
        let star_spec = StarSpec {
            spectral_hint: spec.spectral_hints.get(index).copied(),
            age_gyr: Some(age_gyr),
            metallicity: Some(metallicity),
            overrides: spec.overrides.star(index),
        };
        let mut star_rng = fork_rng(rng);
        let star = generator.generate(&star_spec, &mut star_rng);
        trace!(
            index,
            mass = star.mass,
            class = %star.spectral_designation(),
            "star generated"
        );

        let id = registry.insert(
            star_name(catalog, index, count),
            None,
            Body::Star(star.clone()),
        );
        star_ids.push(id);
        masses.push((id, star.mass));
        stars.insert(id, star);
    }

    if stars.is_empty() {
        return Err(GenerationError::NoStars);
    }

    let hierarchy = build_hierarchy(&masses, rng)?;
    if hierarchy.star_count() != count {
        return Err(GenerationError::Hierarchy(format!(
            "expected {} leaves, found {}",
            count,
            hierarchy.star_count()
        )));
    }

    let hosts = compute_hosts(&hierarchy, &stars);

    Ok(StellarConfiguration {
        star_ids,
        stars,
        hierarchy,
        hosts,
    })
}
