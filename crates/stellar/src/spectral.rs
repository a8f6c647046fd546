use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Main-sequence spectral classes a star can be requested as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

/// Lower temperature bound of each class (K), hottest first
pub const TEMP_BOUNDS: [(SpectralType, f64); 7] = [
    (SpectralType::O, 30000.0),
    (SpectralType::B, 10000.0),
    (SpectralType::A, 7500.0),
    (SpectralType::F, 6000.0),
    (SpectralType::G, 5200.0),
    (SpectralType::K, 3700.0),
    (SpectralType::M, 0.0),
];

impl SpectralType {
    /// Main-sequence mass range for this class in solar masses
    pub fn mass_range(&self) -> (f64, f64) {
        match self {
            Self::O => (16.0, 60.0),
            Self::B => (2.1, 16.0),
            Self::A => (1.4, 2.1),
            Self::F => (1.04, 1.4),
            Self::G => (0.8, 1.04),
            Self::K => (0.45, 0.8),
            Self::M => (0.08, 0.45),
        }
    }

    /// Classify by effective temperature
    pub fn from_temperature(temperature: f64) -> Self {
        TEMP_BOUNDS
            .iter()
            .find(|(_, bound)| temperature >= *bound)
            .map(|(class, _)| *class)
            .unwrap_or(Self::M)
    }

    /// Spectral subtype (0-9) within the class, 0 hottest
    pub fn subtype(temperature: f64) -> u8 {
        let index = TEMP_BOUNDS
            .iter()
            .position(|(_, bound)| temperature >= *bound)
            .unwrap_or(TEMP_BOUNDS.len() - 1);

        let lower = TEMP_BOUNDS[index].1;
        let upper = if index == 0 {
            50000.0
        } else {
            TEMP_BOUNDS[index - 1].1
        };
        // M dwarfs bottom out around 2400 K
        let lower = if lower == 0.0 { 2400.0 } else { lower };

        let position = (upper - temperature) / (upper - lower);
        (9.0 * position).round().clamp(0.0, 9.0) as u8
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for SpectralType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(Self::O),
            "B" => Ok(Self::B),
            "A" => Ok(Self::A),
            "F" => Ok(Self::F),
            "G" => Ok(Self::G),
            "K" => Ok(Self::K),
            "M" => Ok(Self::M),
            other => Err(format!("unknown spectral class '{}'", other)),
        }
    }
}
