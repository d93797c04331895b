//! Rank-1 lattice point sets (Sloan & Joe, 1994) and Korobov lattices
//! (Korobov, 1959).
//!
//! Point `i` of a rank-1 lattice with `n` points and generator vector `a` is
//! `(i / n) * a mod 1`. Coordinates are returned as 32-bit fractions of the
//! unit interval, so the random shift is added modulo `2^32`.

use lds_core::cursor::{BitCache, Cursor};
use lds_core::shift::DigitalShift;
use lds_core::{BitSource, LdsError, PointSet, Result, SeedRng};
use tracing::debug;

/// Largest supported modulus; keeps `i * a_j` within 64 bits.
pub const MAX_LATTICE_POINTS: u64 = 1 << 32;

/// Rank-1 lattice with an optional random shift modulo 1.
#[derive(Clone, Debug)]
pub struct Rank1Lattice<S: BitSource = SeedRng> {
    /// Generator vector reduced modulo the point count.
    generators: Vec<u32>,
    shift: Option<DigitalShift>,
    cursor: Cursor,
    bits: BitCache,
    source: S,
}

impl<S: BitSource> Rank1Lattice<S> {
    /// Randomly shifted lattice with `n` points; the generator vector's
    /// length is the dimension.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of points, in `[1, 2^32]`
    /// * `generators` - Generator vector, one entry per dimension
    /// * `source` - Random source for the shift
    ///
    /// # Returns
    ///
    /// A lattice with a shift drawn for every dimension.
    ///
    /// # Errors
    ///
    /// - [`LdsError::InvalidParameter`] unless `1 <= n <= 2^32`
    /// - [`LdsError::InvalidDimension`] for an empty generator vector
    pub fn new(n: u64, generators: &[u64], source: S) -> Result<Self> {
        let mut lattice = Self::unshifted(n, generators, source)?;
        lattice.add_random_shift(0, lattice.dimensions());
        debug!(n, dim = lattice.dimensions(), "rank-1 lattice randomised");
        Ok(lattice)
    }

    /// Lattice without a random shift.
    ///
    /// # Errors
    ///
    /// As for [`Rank1Lattice::new`].
    pub fn unshifted(n: u64, generators: &[u64], source: S) -> Result<Self> {
        validate_modulus(n)?;
        if generators.is_empty() {
            return Err(LdsError::InvalidDimension {
                dim: 0,
                max: usize::MAX,
            });
        }
        // Reduced values are below n <= 2^32.
        let generators: Vec<u32> = generators.iter().map(|&a| (a % n) as u32).collect();
        let dim = generators.len();

        debug!(n, dim, "rank-1 lattice initialised");
        Ok(Self {
            generators,
            shift: None,
            cursor: Cursor::new(n as usize, dim),
            bits: BitCache::default(),
            source,
        })
    }

    /// Generator vector reduced modulo the point count.
    #[inline]
    pub fn generators(&self) -> &[u32] {
        &self.generators
    }

    /// Current random shift, if any.
    #[inline]
    pub fn shift(&self) -> Option<&[u32]> {
        self.shift.as_ref().map(DigitalShift::as_slice)
    }

    /// Draws fresh shift entries `[from, to)`, keeping `[0, from)`.
    /// `to == 0` means every dimension.
    pub fn add_random_shift(&mut self, from: usize, to: usize) {
        let to = if to == 0 { self.dimensions().max(1) } else { to };
        let shift = self
            .shift
            .get_or_insert_with(|| DigitalShift::with_capacity(to));
        shift.redraw(from, to, &mut self.source);
    }

    fn unshifted_coordinate(&self, j: usize) -> u32 {
        let n = self.cursor.points() as u64;
        let residue = (self.cursor.point_index() as u64 * self.generators[j] as u64) % n;
        ((residue << 32) / n) as u32
    }
}

fn validate_modulus(n: u64) -> Result<()> {
    if n == 0 || n > MAX_LATTICE_POINTS {
        return Err(LdsError::InvalidParameter {
            name: "n",
            reason: format!("point count {} must be in range [1, 2^32]", n),
        });
    }
    Ok(())
}

/// Generator vector `(a^t, a^(t+1), ..., a^(t+dim-1)) mod n` of a Korobov
/// lattice whose first `t` coordinates are dropped.
///
/// # Arguments
///
/// * `n` - Modulus (number of points), in `[1, 2^32]`
/// * `a` - Multiplier
/// * `dim` - Number of dimensions
/// * `t` - Number of leading powers skipped
///
/// # Returns
///
/// The generator vector, each entry reduced modulo `n`.
///
/// # Errors
///
/// [`LdsError::InvalidParameter`] unless `1 <= n <= 2^32`.
pub fn korobov_generators(n: u64, a: u64, dim: usize, t: u32) -> Result<Vec<u64>> {
    validate_modulus(n)?;
    let a = a % n;

    let mut first = 1 % n;
    for _ in 0..t {
        first = first * a % n;
    }

    let mut generators = Vec::with_capacity(dim);
    let mut current = first;
    for _ in 0..dim {
        generators.push(current);
        current = current * a % n;
    }
    Ok(generators)
}

/// Randomly shifted Korobov lattice with modulus `n` and multiplier `a`.
///
/// `t = 0` gives the standard Korobov lattice.
///
/// # Errors
///
/// As for [`korobov_generators`] and [`Rank1Lattice::new`].
pub fn korobov<S: BitSource>(
    n: u64,
    a: u64,
    dim: usize,
    t: u32,
    source: S,
) -> Result<Rank1Lattice<S>> {
    Rank1Lattice::new(n, &korobov_generators(n, a, dim, t)?, source)
}

impl<S: BitSource> PointSet for Rank1Lattice<S> {
    #[inline]
    fn points(&self) -> usize {
        self.cursor.points()
    }

    #[inline]
    fn dimensions(&self) -> usize {
        self.cursor.dimensions()
    }

    #[inline]
    fn point_index(&self) -> usize {
        self.cursor.point_index()
    }

    fn seed(&mut self, seed: i64) {
        self.source.reseed(seed);
        self.restart();
    }

    fn restart(&mut self) {
        self.cursor.set_point(0);
        self.bits.clear();
    }

    fn restart_substream(&mut self) {
        self.cursor.reset_coord();
        self.bits.clear();
    }

    fn jump(&mut self) {
        self.cursor.advance_point();
        self.bits.clear();
    }

    fn set_point_index(&mut self, i: usize) {
        self.cursor.set_point(i);
        self.bits.clear();
    }

    fn randomise(&mut self) {
        self.add_random_shift(0, self.dimensions());
        self.restart();
    }

    fn next_u32(&mut self) -> Result<u32> {
        let j = self.cursor.claim_coord()?;
        let mut x = self.unshifted_coordinate(j);

        if let Some(shift) = self.shift.as_mut() {
            if j >= shift.len() {
                let from = shift.len();
                shift.redraw(from, j + 1, &mut self.source);
            }
            x = x.wrapping_add(shift.as_slice()[j]);
        }
        Ok(x)
    }

    #[inline]
    fn bit_cache(&mut self) -> &mut BitCache {
        &mut self.bits
    }
}
