use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Derive an independent generator from a shared one
///
/// Draws exactly one `u64` from `rng` and seeds a fresh ChaCha stream with
/// it. Each sub-object gets its own stream so that the number of draws it
/// makes never shifts the draws of its siblings.
pub fn fork_rng(rng: &mut ChaChaRng) -> ChaChaRng {
    ChaChaRng::seed_from_u64(rng.random::<u64>())
}

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // Keep u1 away from zero so ln() stays finite
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from a power-law distribution
///
/// Samples from p(x) ∝ x^α between x_min and x_max using inverse transform sampling.
pub fn sample_power_law(x_min: f64, x_max: f64, alpha: f64, rng: &mut ChaChaRng) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample uniformly in log space between `min` and `max`
///
/// Both bounds must be positive; if `max <= min` the lower bound is returned
/// without consuming a draw.
pub fn sample_log_uniform(rng: &mut ChaChaRng, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    let log_min = min.ln();
    let log_max = max.ln();
    (log_min + rng.random::<f64>() * (log_max - log_min)).exp()
}

/// Pick an index from a table of relative weights
///
/// Weights need not sum to one. Returns the last index if rounding leaves
/// the roll past the final bucket.
pub fn sample_weighted_index(rng: &mut ChaChaRng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let roll = rng.random::<f64>() * total;
    let mut cumulative = 0.0;

    for (i, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return i;
        }
    }
    weights.len().saturating_sub(1)
}

/// Sample metallicity from local galactic distribution
///
/// Returns [Fe/H] in dex, centered on solar (0.0) with σ ≈ 0.2 dex,
/// clamped to [-0.5, 0.4].
pub fn sample_metallicity(rng: &mut ChaChaRng) -> f64 {
    sample_gaussian(rng, 0.0, 0.2).clamp(-0.5, 0.4)
}

/// Sample stellar mass from the Kroupa (2001) Initial Mass Function
///
/// The Kroupa IMF is a broken power law:
/// - 0.08 ≤ M < 0.5 M☉: α = -1.3
/// - 0.5 ≤ M < 1.0 M☉: α = -2.3
/// - M ≥ 1.0 M☉: α = -2.3
///
/// `max_mass` caps the upper segment in solar masses.
pub fn sample_mass_kroupa(rng: &mut ChaChaRng, max_mass: f64) -> f64 {
    let segment_weights = [0.80, 0.15, 0.05];
    let rand: f64 = rng.random();

    if rand < segment_weights[0] {
        sample_power_law(0.08, max_mass.min(0.5), -1.3, rng)
    } else if rand < segment_weights[0] + segment_weights[1] {
        sample_power_law(0.5, max_mass.min(1.0), -2.3, rng)
    } else {
        sample_power_law(1.0, max_mass.max(1.0), -2.3, rng)
    }
}

/// Main-sequence lifetime in billions of years
pub fn estimate_lifetime(mass: f64) -> f64 {
    match mass {
        m if m > 10.0 => 0.02 * (m / 10.0).powf(-2.0),
        m if m > 2.0 => 1.0 * (m / 2.0).powf(-2.5),
        m if m > 0.5 => 10.0 * m.powf(-2.5),
        _ => 100.0 * mass.powf(-2.5),
    }
}

/// Sample a population age in billions of years
///
/// Thin-disk population: Gaussian around 5 Gyr with a 2 Gyr spread,
/// clamped to [0.1, `max_age_gyr`].
pub fn sample_age(rng: &mut ChaChaRng, max_age_gyr: f64) -> f64 {
    const MIN_AGE_GYR: f64 = 0.1;
    let max_age = max_age_gyr.max(MIN_AGE_GYR);
    sample_gaussian(rng, 5.0, 2.0).clamp(MIN_AGE_GYR, max_age)
}
