//! Point/coordinate cursor and the boolean bit cache.
//!
//! Every point-set family walks its points through a [`Cursor`]: a point
//! index in `[0, points)` and a coordinate index in `[0, dimensions)`.
//! Reading a coordinate claims the current coordinate index and moves past
//! it; moving to another point starts again at coordinate 0.

use crate::error::{LdsError, Result};

/// Current position within a point set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    points: usize,
    dimensions: usize,
    point_idx: usize,
    coord_idx: usize,
}

impl Cursor {
    /// Creates a cursor positioned on coordinate 0 of point 0.
    #[inline]
    pub fn new(points: usize, dimensions: usize) -> Self {
        Self {
            points,
            dimensions,
            point_idx: 0,
            coord_idx: 0,
        }
    }

    /// Number of points in the set.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Index of the current point.
    #[inline]
    pub fn point_index(&self) -> usize {
        self.point_idx
    }

    /// Index of the next coordinate to be read.
    #[inline]
    pub fn coord_index(&self) -> usize {
        self.coord_idx
    }

    /// Moves to coordinate 0 of point `i`.
    #[inline]
    pub fn set_point(&mut self, i: usize) {
        self.point_idx = i;
        self.coord_idx = 0;
    }

    /// Moves to coordinate 0 of the following point and returns its index.
    #[inline]
    pub fn advance_point(&mut self) -> usize {
        self.point_idx += 1;
        self.coord_idx = 0;
        self.point_idx
    }

    /// Moves back to coordinate 0 of the current point.
    #[inline]
    pub fn reset_coord(&mut self) {
        self.coord_idx = 0;
    }

    /// Fails with the matching exhaustion error if the cursor is out of
    /// bounds. Points are checked before coordinates.
    #[inline]
    pub fn check_bounds(&self) -> Result<()> {
        if self.point_idx >= self.points {
            return Err(LdsError::PointsExhausted {
                points: self.points,
            });
        }
        if self.coord_idx >= self.dimensions {
            return Err(LdsError::CoordinatesExhausted {
                dimensions: self.dimensions,
            });
        }
        Ok(())
    }

    /// Claims the current coordinate index and moves past it.
    #[inline]
    pub fn claim_coord(&mut self) -> Result<usize> {
        self.check_bounds()?;
        let j = self.coord_idx;
        self.coord_idx += 1;
        Ok(j)
    }
}

/// Cache of the most recent 32-bit word handed out one bit at a time.
///
/// The mask starts at the least significant bit and is shifted upwards on
/// every draw; once it overflows to zero a fresh word is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitCache {
    word: u32,
    mask: u32,
}

impl BitCache {
    /// Returns the next cached bit, or `None` when a fresh word is needed.
    #[inline]
    pub fn next_bit(&mut self) -> Option<bool> {
        self.mask <<= 1;
        if self.mask == 0 {
            None
        } else {
            Some(self.word & self.mask != 0)
        }
    }

    /// Installs a fresh word and returns its least significant bit.
    #[inline]
    pub fn refill(&mut self, word: u32) -> bool {
        self.word = word;
        self.mask = 1;
        word & 1 != 0
    }

    /// Forgets the cached word.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
