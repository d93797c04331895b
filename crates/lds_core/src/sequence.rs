//! Point-set traits shared by every family.
//!
//! [`PointSet`] is the 32-bit contract: a cursor over `points() x
//! dimensions()` coordinates with restart, substream and jump semantics.
//! [`LowDiscrepancySequence`] is the floating-point view used by
//! quasi-Monte Carlo integration and is implemented for every `PointSet`.

use crate::cursor::BitCache;
use crate::error::{LdsError, Result};

/// Scale taking a 32-bit coordinate to `[0, 1)`.
pub const INV_TWO_POW_32: f64 = 1.0 / 4_294_967_296.0;

/// A finite point set read one 32-bit coordinate at a time.
///
/// Implementors supply [`next_u32`](PointSet::next_u32) and the cursor
/// operations; [`next_bool`](PointSet::next_bool) and
/// [`next_f64`](PointSet::next_f64) are derived from it, so a family only has
/// to say how a coordinate is produced.
pub trait PointSet {
    /// Number of points in the set.
    fn points(&self) -> usize;

    /// Number of coordinates per point.
    fn dimensions(&self) -> usize;

    /// Index of the current point.
    fn point_index(&self) -> usize;

    /// Reseeds the random source and restarts the stream.
    fn seed(&mut self, seed: i64);

    /// Moves to coordinate 0 of point 0.
    fn restart(&mut self);

    /// Moves back to coordinate 0 of the current point.
    fn restart_substream(&mut self);

    /// Moves to coordinate 0 of the next point.
    fn jump(&mut self);

    /// Moves to coordinate 0 of point `i`.
    fn set_point_index(&mut self, i: usize);

    /// Draws a fresh randomisation and restarts the stream.
    fn randomise(&mut self);

    /// Returns the next coordinate of the current point.
    ///
    /// # Errors
    ///
    /// [`LdsError::PointsExhausted`] or [`LdsError::CoordinatesExhausted`]
    /// when reading past the end of the set or of the point.
    fn next_u32(&mut self) -> Result<u32>;

    /// Bit cache backing [`next_bool`](PointSet::next_bool).
    fn bit_cache(&mut self) -> &mut BitCache;

    /// Returns the next bit of the most recently drawn coordinate, drawing a
    /// new coordinate once all 32 bits have been handed out.
    fn next_bool(&mut self) -> Result<bool> {
        if let Some(bit) = self.bit_cache().next_bit() {
            return Ok(bit);
        }
        let word = self.next_u32()?;
        Ok(self.bit_cache().refill(word))
    }

    /// Returns the next coordinate scaled to `[0, 1)`.
    #[inline]
    fn next_f64(&mut self) -> Result<f64> {
        Ok(self.next_u32()? as f64 * INV_TWO_POW_32)
    }
}

/// Low-discrepancy sequence viewed as points in the unit hypercube.
///
/// Low-discrepancy sequences provide more uniform coverage of the unit
/// hypercube than pseudo-random sequences, often leading to faster
/// convergence in numerical integration.
pub trait LowDiscrepancySequence {
    /// Returns the dimensionality of the sequence.
    fn dimension(&self) -> usize;

    /// Writes the current point into `out` and advances to the next point.
    ///
    /// # Errors
    ///
    /// - [`LdsError::InvalidParameter`] if `out.len() != dimension()`
    /// - [`LdsError::PointsExhausted`] once every point has been read
    fn fill_point(&mut self, out: &mut [f64]) -> Result<()>;

    /// Resets the sequence to its initial state.
    fn reset(&mut self);

    /// Skips ahead by `n` points.
    ///
    /// Useful for parallel computation where different workers need to
    /// process non-overlapping portions of the sequence.
    fn skip(&mut self, n: usize);
}

impl<P: PointSet + ?Sized> LowDiscrepancySequence for P {
    #[inline]
    fn dimension(&self) -> usize {
        self.dimensions()
    }

    fn fill_point(&mut self, out: &mut [f64]) -> Result<()> {
        if out.len() != self.dimensions() {
            return Err(LdsError::InvalidParameter {
                name: "out",
                reason: format!(
                    "buffer holds {} values, expected {}",
                    out.len(),
                    self.dimensions()
                ),
            });
        }
        self.restart_substream();
        for value in out.iter_mut() {
            *value = self.next_f64()?;
        }
        self.jump();
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        self.restart();
    }

    fn skip(&mut self, n: usize) {
        match n {
            0 => {}
            1 => self.jump(),
            _ => {
                let target = self.point_index().saturating_add(n);
                self.set_point_index(target);
            }
        }
    }
}
