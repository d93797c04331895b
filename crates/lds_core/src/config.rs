//! Randomisation configuration for digital nets.
//!
//! This module provides [`RandomType`], which selects the scrambling scheme,
//! and [`DigitalNetConfig`] with its builder.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{LdsError, Result};

/// Randomisation applied by [`PointSet::randomise`](crate::sequence::PointSet::randomise).
///
/// Every variant finishes with a fresh digital shift; the matrix scrambling
/// variants transform the generator matrix first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RandomType {
    /// Digital shift only.
    #[default]
    RandomShift,

    /// Random upper-triangular left multiply (Faure & Tezuka, 2002).
    LeftMatrixScrambling,

    /// Random right multiply (Faure & Tezuka, 2002; Hong & Hickernell, 2003).
    RightMatrixScrambling,

    /// Deterministic striped left multiply (Owen, 2003).
    StripedMatrixScrambling,
}

impl RandomType {
    /// Short name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            RandomType::RandomShift => "shift",
            RandomType::LeftMatrixScrambling => "left",
            RandomType::RightMatrixScrambling => "right",
            RandomType::StripedMatrixScrambling => "striped",
        }
    }

    /// Returns `true` if the variant transforms the generator matrix.
    #[inline]
    pub fn scrambles_matrix(&self) -> bool {
        !matches!(self, RandomType::RandomShift)
    }
}

impl FromStr for RandomType {
    type Err = LdsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "shift" | "random_shift" => Ok(RandomType::RandomShift),
            "left" | "left_matrix_scrambling" => Ok(RandomType::LeftMatrixScrambling),
            "right" | "right_matrix_scrambling" => Ok(RandomType::RightMatrixScrambling),
            "striped" | "striped_matrix_scrambling" => Ok(RandomType::StripedMatrixScrambling),
            _ => Err(LdsError::InvalidParameter {
                name: "random_type",
                reason: format!("unknown randomisation '{}'", s),
            }),
        }
    }
}

impl fmt::Display for RandomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction options for a [`DigitalNet`](crate::net::DigitalNet).
///
/// Use [`DigitalNetConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use lds_core::config::{DigitalNetConfig, RandomType};
///
/// let config = DigitalNetConfig::builder()
///     .random_type(RandomType::LeftMatrixScrambling)
///     .build()
///     .expect("valid configuration");
///
/// assert!(config.randomise());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitalNetConfig {
    /// Scrambling scheme.
    random_type: RandomType,
    /// Whether to randomise at construction.
    randomise: bool,
    /// Fixed shift installed after construction.
    shift: Option<Vec<u32>>,
}

impl Default for DigitalNetConfig {
    fn default() -> Self {
        Self {
            random_type: RandomType::default(),
            randomise: true,
            shift: None,
        }
    }
}

impl DigitalNetConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> DigitalNetConfigBuilder {
        DigitalNetConfigBuilder::default()
    }

    /// Configuration with a given scheme and all other options defaulted.
    #[inline]
    pub fn with_random_type(random_type: RandomType) -> Self {
        Self {
            random_type,
            ..Self::default()
        }
    }

    /// Scrambling scheme.
    #[inline]
    pub fn random_type(&self) -> RandomType {
        self.random_type
    }

    /// Whether scrambling and a random shift are drawn at construction.
    #[inline]
    pub fn randomise(&self) -> bool {
        self.randomise
    }

    /// Fixed shift installed after construction, if any.
    #[inline]
    pub fn shift(&self) -> Option<&[u32]> {
        self.shift.as_deref()
    }

    /// Checks the fixed shift, if any, against the net's dimension.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::ShiftLengthMismatch`] if the shift length differs
    /// from `dim`.
    pub fn validate_for(&self, dim: usize) -> Result<()> {
        match &self.shift {
            Some(shift) if shift.len() != dim => Err(LdsError::ShiftLengthMismatch {
                expected: dim,
                actual: shift.len(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`DigitalNetConfig`].
///
/// # Examples
///
/// ```rust
/// use lds_core::config::DigitalNetConfig;
///
/// // A plain, unrandomised net with an all-zero shift.
/// let config = DigitalNetConfig::builder()
///     .randomise(false)
///     .shift(vec![0, 0])
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.shift(), Some(&[0u32, 0][..]));
/// ```
#[derive(Clone, Debug)]
pub struct DigitalNetConfigBuilder {
    random_type: RandomType,
    randomise: bool,
    shift: Option<Vec<u32>>,
}

impl Default for DigitalNetConfigBuilder {
    fn default() -> Self {
        Self {
            random_type: RandomType::default(),
            randomise: true,
            shift: None,
        }
    }
}

impl DigitalNetConfigBuilder {
    /// Sets the scrambling scheme.
    #[inline]
    pub fn random_type(mut self, random_type: RandomType) -> Self {
        self.random_type = random_type;
        self
    }

    /// Sets whether to randomise at construction.
    #[inline]
    pub fn randomise(mut self, randomise: bool) -> Self {
        self.randomise = randomise;
        self
    }

    /// Sets a fixed digital shift, one mask per dimension.
    ///
    /// The shift replaces whatever shift construction-time randomisation
    /// drew; a later `randomise()` call draws a fresh one.
    #[inline]
    pub fn shift(mut self, shift: Vec<u32>) -> Self {
        self.shift = Some(shift);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidParameter`] for an empty fixed shift.
    pub fn build(self) -> Result<DigitalNetConfig> {
        if matches!(&self.shift, Some(shift) if shift.is_empty()) {
            return Err(LdsError::InvalidParameter {
                name: "shift",
                reason: "fixed shift must cover at least one dimension".to_string(),
            });
        }
        Ok(DigitalNetConfig {
            random_type: self.random_type,
            randomise: self.randomise,
            shift: self.shift,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DigitalNetConfig::default();
        assert_eq!(config.random_type(), RandomType::RandomShift);
        assert!(config.randomise());
        assert!(config.shift().is_none());
        assert_eq!(DigitalNetConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_builder_rejects_empty_shift() {
        let err = DigitalNetConfig::builder().shift(vec![]).build().unwrap_err();
        assert!(matches!(err, LdsError::InvalidParameter { name: "shift", .. }));
    }

    #[test]
    fn test_validate_for_dimension() {
        let config = DigitalNetConfig::builder()
            .shift(vec![1, 2, 3])
            .build()
            .unwrap();
        assert!(config.validate_for(3).is_ok());
        assert_eq!(
            config.validate_for(2),
            Err(LdsError::ShiftLengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_random_type_parse_and_display() {
        for t in [
            RandomType::RandomShift,
            RandomType::LeftMatrixScrambling,
            RandomType::RightMatrixScrambling,
            RandomType::StripedMatrixScrambling,
        ] {
            assert_eq!(t.to_string().parse::<RandomType>().unwrap(), t);
        }
        assert_eq!(
            "STRIPED".parse::<RandomType>().unwrap(),
            RandomType::StripedMatrixScrambling
        );
        assert!("owen".parse::<RandomType>().is_err());
        assert!(!RandomType::RandomShift.scrambles_matrix());
        assert!(RandomType::RightMatrixScrambling.scrambles_matrix());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_config() {
        let config = DigitalNetConfig::with_random_type(RandomType::LeftMatrixScrambling);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("left_matrix_scrambling"));
        let back: DigitalNetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
