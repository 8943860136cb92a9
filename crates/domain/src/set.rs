use std::fmt;

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Reps in reserve, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rir(u8);

impl Rir {
    pub fn new(value: f32) -> Result<Self, RirError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RirError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(RirError::InvalidResolution);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tenths = (value * 10.0) as u8;

        Ok(Self(tenths))
    }
}

impl From<Rir> for f32 {
    fn from(value: Rir) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for Rir {
    type Error = RirError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Rir::new(parsed_value),
            Err(_) => Err(RirError::ParseError),
        }
    }
}

impl fmt::Display for Rir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RirError {
    #[error("RIR must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RIR must be a multiple of 0.1")]
    InvalidResolution,
    #[error("RIR must be a decimal")]
    ParseError,
}

/// Load of a single set.
///
/// Bodyweight work carries no numeric load. It is kept as its own variant
/// so that analysis can skip it instead of treating it as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    Kg(f32),
    Bodyweight,
}

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self::Kg(value))
    }

    #[must_use]
    pub fn kg(self) -> Option<f32> {
        match self {
            Weight::Kg(value) => Some(value),
            Weight::Bodyweight => None,
        }
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed_value = value.trim();

        if trimmed_value.eq_ignore_ascii_case("bodyweight") {
            return Ok(Weight::Bodyweight);
        }

        match trimmed_value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Kg(value) => write!(f, "{value} kg"),
            Weight::Bodyweight => write!(f, "bodyweight"),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a decimal or \"bodyweight\"")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub reps: Reps,
    pub weight: Weight,
    pub rir: Option<Rir>,
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.reps, self.weight)?;

        if let Some(rir) = self.rir {
            write!(f, " @ RIR {rir}")?;
        }

        Ok(())
    }
}
