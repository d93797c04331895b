//! Error types for the digital-net engine.
//!
//! Two families of failure exist:
//!
//! - **Configuration errors** are returned by constructors and builders when
//!   a dimension, column count or vector length is out of range. Nothing is
//!   clamped.
//! - **Exhaustion errors** are returned by coordinate accessors when a read
//!   goes past the declared number of points or dimensions.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LdsError>;

/// Errors raised by point-set construction and coordinate extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LdsError {
    /// Dimension outside the range accepted by the point set.
    #[error("Invalid dimension {dim}: must be in range [1, {max}]")]
    InvalidDimension {
        /// Requested dimension.
        dim: usize,
        /// Largest dimension supported.
        max: usize,
    },

    /// Column count (log2 of the point count) too large.
    #[error("Invalid column count {n_cols}: must be less than {max_bits}")]
    InvalidColumnCount {
        /// Requested column count.
        n_cols: u32,
        /// Word width of a generator column.
        max_bits: u32,
    },

    /// Generator matrix data does not hold `dim * n_cols` columns.
    #[error("Generator matrix holds {actual} columns, expected {expected}")]
    ColumnCountMismatch {
        /// `dim * n_cols`.
        expected: usize,
        /// Length of the supplied column data.
        actual: usize,
    },

    /// Fixed digital shift does not cover every dimension.
    #[error("Digital shift has {actual} entries, expected {expected}")]
    ShiftLengthMismatch {
        /// Number of dimensions.
        expected: usize,
        /// Length of the supplied shift.
        actual: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Every point of the set has been consumed.
    #[error("Not enough points available: the point set holds {points} points")]
    PointsExhausted {
        /// Number of points in the set.
        points: usize,
    },

    /// Every coordinate of the current point has been consumed.
    #[error("Not enough coordinates available: each point has {dimensions} coordinates")]
    CoordinatesExhausted {
        /// Number of coordinates per point.
        dimensions: usize,
    },
}

impl LdsError {
    /// Returns `true` for errors raised by reading past the end of the
    /// sequence, as opposed to configuration errors.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            Self::PointsExhausted { .. } | Self::CoordinatesExhausted { .. }
        )
    }
}
