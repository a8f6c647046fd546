//! System specification and typed overrides.
//!
//! A [`SystemSpec`] fully determines a generated system together with its
//! seed. It can be built in code or loaded from TOML:
//!
//! ```toml
//! seed = 42
//! minStars = 1
//! maxStars = 2
//! spectralHints = ["G", "M"]
//! includeBelts = true
//!
//! [overrides]
//! planetCount = 5
//! ```
//!
//! String overrides (`--set key=value` on the command line) go through
//! [`OverrideKey`], which accepts a fixed set of paths and nothing else.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stellar::{SpectralType, StarOverrides};

use crate::error::SpecError;

/// Most stars a system may request
pub const MAX_STARS: usize = 7;

/// Age of the universe (Gyr)
const MAX_AGE_GYR: f64 = 13.8;

/// Accepted metallicity range [Fe/H]
const METALLICITY_RANGE: (f64, f64) = (-2.0, 1.0);

/// Values pinned by the caller instead of drawn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemOverrides {
    /// Exact number of stars, ignoring the min/max range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_count: Option<usize>,
    /// Per-star overrides by generation index
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stars: Vec<StarOverrides>,
    /// Exact planet count for the whole system; switches planet placement
    /// to targeted mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_belt_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_belt_probability: Option<f64>,
}

impl SystemOverrides {
    /// Overrides for the `index`-th star
    pub fn star(&self, index: usize) -> StarOverrides {
        self.stars.get(index).copied().unwrap_or_default()
    }

    fn star_mut(&mut self, index: usize) -> &mut StarOverrides {
        if self.stars.len() <= index {
            self.stars.resize(index + 1, StarOverrides::default());
        }
        &mut self.stars[index]
    }

    /// Apply a `key=value` pair; on error the overrides are left unchanged
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SpecError> {
        let mut next = self.clone();
        next.apply(key.parse()?, key, value)?;
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn apply(&mut self, parsed: OverrideKey, key: &str, value: &str) -> Result<(), SpecError> {
        match parsed {
            OverrideKey::StarCount => {
                self.star_count = Some(parse_count(key, value)?);
            }
            OverrideKey::PlanetCount => {
                self.planet_count = Some(parse_count(key, value)?);
            }
            OverrideKey::StarMass(i) => {
                self.star_mut(i).mass = Some(parse_number(key, value)?);
            }
            OverrideKey::StarAge(i) => {
                self.star_mut(i).age_gyr = Some(parse_number(key, value)?);
            }
            OverrideKey::StarMetallicity(i) => {
                self.star_mut(i).metallicity = Some(parse_number(key, value)?);
            }
            OverrideKey::InnerBeltProbability => {
                self.inner_belt_probability = Some(parse_number(key, value)?);
            }
            OverrideKey::OuterBeltProbability => {
                self.outer_belt_probability = Some(parse_number(key, value)?);
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if let Some(count) = self.star_count {
            if !(1..=MAX_STARS).contains(&count) {
                return Err(SpecError::invalid(
                    "star_count",
                    format!("must be between 1 and {MAX_STARS}"),
                ));
            }
        }

        for (i, star) in self.stars.iter().enumerate() {
            if star.mass.is_some_and(|m| m <= 0.0) {
                return Err(SpecError::invalid(format!("stars[{i}].mass"), "must be positive"));
            }
            if let Some(age) = star.age_gyr {
                validate_age(&format!("stars[{i}].age"), age)?;
            }
            if let Some(metallicity) = star.metallicity {
                validate_metallicity(&format!("stars[{i}].metallicity"), metallicity)?;
            }
        }

        for (key, probability) in [
            ("belts.inner.probability", self.inner_belt_probability),
            ("belts.outer.probability", self.outer_belt_probability),
        ] {
            if probability.is_some_and(|p| !(0.0..=1.0).contains(&p)) {
                return Err(SpecError::invalid(key, "must be within [0, 1]"));
            }
        }
        Ok(())
    }
}

/// The override paths accepted from string input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKey {
    /// `star_count`
    StarCount,
    /// `stars[i].mass`
    StarMass(usize),
    /// `stars[i].age`
    StarAge(usize),
    /// `stars[i].metallicity`
    StarMetallicity(usize),
    /// `planet_count`
    PlanetCount,
    /// `belts.inner.probability`
    InnerBeltProbability,
    /// `belts.outer.probability`
    OuterBeltProbability,
}

impl FromStr for OverrideKey {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SpecError::UnknownKey(s.to_string());
        match s {
            "star_count" => Ok(Self::StarCount),
            "planet_count" => Ok(Self::PlanetCount),
            "belts.inner.probability" => Ok(Self::InnerBeltProbability),
            "belts.outer.probability" => Ok(Self::OuterBeltProbability),
            _ => {
                let (index, field) = s
                    .strip_prefix("stars[")
                    .and_then(|rest| rest.split_once("]."))
                    .ok_or_else(unknown)?;
                let index: usize = index.parse().map_err(|_| unknown())?;
                if index >= MAX_STARS {
                    return Err(SpecError::invalid(s, format!("star index must be below {MAX_STARS}")));
                }
                match field {
                    "mass" => Ok(Self::StarMass(index)),
                    "age" => Ok(Self::StarAge(index)),
                    "metallicity" => Ok(Self::StarMetallicity(index)),
                    _ => Err(unknown()),
                }
            }
        }
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, SpecError> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| SpecError::invalid(key, format!("`{value}` is not a number")))?;
    if !number.is_finite() {
        return Err(SpecError::invalid(key, "must be finite"));
    }
    Ok(number)
}

fn parse_count(key: &str, value: &str) -> Result<usize, SpecError> {
    value
        .trim()
        .parse()
        .map_err(|_| SpecError::invalid(key, format!("`{value}` is not a count")))
}

fn validate_age(key: &str, age: f64) -> Result<(), SpecError> {
    if age <= 0.0 || age > MAX_AGE_GYR {
        return Err(SpecError::invalid(key, format!("must be within (0, {MAX_AGE_GYR}] Gyr")));
    }
    Ok(())
}

fn validate_metallicity(key: &str, metallicity: f64) -> Result<(), SpecError> {
    let (min, max) = METALLICITY_RANGE;
    if !(min..=max).contains(&metallicity) {
        return Err(SpecError::invalid(key, format!("must be within [{min}, {max}]")));
    }
    Ok(())
}

/// Everything a generation call needs besides the random stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSpec {
    pub seed: u64,
    pub min_stars: usize,
    pub max_stars: usize,
    /// Spectral class hint for the `i`-th star
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spectral_hints: Vec<SpectralType>,
    /// System age shared by every star (Gyr)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_gyr: Option<f64>,
    /// System metallicity shared by every star ([Fe/H])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metallicity: Option<f64>,
    pub include_belts: bool,
    pub include_moons: bool,
    pub overrides: SystemOverrides,
}

impl Default for SystemSpec {
    fn default() -> Self {
        Self {
            seed: 0,
            min_stars: 1,
            max_stars: 3,
            spectral_hints: Vec::new(),
            age_gyr: None,
            metallicity: None,
            include_belts: true,
            include_moons: true,
            overrides: SystemOverrides::default(),
        }
    }
}

impl SystemSpec {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_star_range(mut self, min_stars: usize, max_stars: usize) -> Self {
        self.min_stars = min_stars;
        self.max_stars = max_stars;
        self
    }

    pub fn with_stars(self, count: usize) -> Self {
        self.with_star_range(count, count)
    }

    pub fn with_hint(mut self, hint: SpectralType) -> Self {
        self.spectral_hints.push(hint);
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, SpecError> {
        let spec: Self = toml::from_str(source).map_err(|e| SpecError::Parse(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.min_stars < 1 {
            return Err(SpecError::invalid("minStars", "must be at least 1"));
        }
        if self.max_stars < self.min_stars || self.max_stars > MAX_STARS {
            return Err(SpecError::invalid(
                "maxStars",
                format!("must be between minStars and {MAX_STARS}"),
            ));
        }
        if let Some(age) = self.age_gyr {
            validate_age("ageGyr", age)?;
        }
        if let Some(metallicity) = self.metallicity {
            validate_metallicity("metallicity", metallicity)?;
        }
        self.overrides.validate()
    }
}
