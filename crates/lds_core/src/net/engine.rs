//! Base-2 digital net with a Gray-code point cache.

use tracing::{debug, trace};

use super::matrix::GeneratorMatrix;
use super::scramble::scramble;
use crate::config::{DigitalNetConfig, RandomType};
use crate::cursor::{BitCache, Cursor};
use crate::error::Result;
use crate::sequence::PointSet;
use crate::shift::DigitalShift;
use crate::source::{default_source, BitSource, SeedRng, SharedRng};

/// Base-2 digital net over a per-dimension generator matrix.
///
/// Points are enumerated in Gray-code order: point `i` is
/// `shift XOR (XOR of the columns c for which bit c of i ^ (i >> 1) is set)`.
/// Consecutive Gray codes differ in a single bit, so [`PointSet::jump`]
/// updates the cached point with one column per dimension, while
/// [`PointSet::set_point_index`] rebuilds it from the Gray code directly.
///
/// # Examples
///
/// ```rust
/// use lds_core::config::DigitalNetConfig;
/// use lds_core::net::{DigitalNet, GeneratorMatrix};
/// use lds_core::source::SeedRng;
/// use lds_core::PointSet;
///
/// let matrix = GeneratorMatrix::new(1, 3, vec![0x8000_0000, 0x4000_0000, 0x2000_0000]).unwrap();
/// let config = DigitalNetConfig::builder().randomise(false).build().unwrap();
/// let mut net = DigitalNet::new(matrix, &config, SeedRng::default()).unwrap();
///
/// let mut top_bits = Vec::new();
/// for _ in 0..net.points() {
///     top_bits.push(net.next_u32().unwrap() >> 29);
///     net.jump();
/// }
/// assert_eq!(top_bits, vec![0, 4, 6, 2, 3, 7, 5, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct DigitalNet<S: BitSource = SeedRng> {
    /// Matrix supplied by the family; never modified.
    original: GeneratorMatrix,
    /// Scrambled matrix, present once a matrix scrambling has been applied.
    scrambled: Option<GeneratorMatrix>,
    shift: Option<DigitalShift>,
    /// Coordinates of the current point.
    cache: Vec<u32>,
    cursor: Cursor,
    bits: BitCache,
    random_type: RandomType,
    source: S,
}

impl<S: BitSource> DigitalNet<S> {
    /// Builds a net over `matrix`.
    ///
    /// When `config.randomise()` is set, the configured scrambling and a
    /// random shift covering every dimension are drawn from `source`. A fixed
    /// shift from the configuration is installed afterwards. The cache is then
    /// primed on point 0.
    ///
    /// # Arguments
    ///
    /// * `matrix` - Generator matrix supplied by the family
    /// * `config` - Randomisation options
    /// * `source` - Random source for scrambling and shifts
    ///
    /// # Returns
    ///
    /// A net positioned on coordinate 0 of point 0.
    ///
    /// # Errors
    ///
    /// [`LdsError::ShiftLengthMismatch`](crate::LdsError::ShiftLengthMismatch)
    /// if a fixed shift does not match the matrix dimension.
    pub fn new(matrix: GeneratorMatrix, config: &DigitalNetConfig, source: S) -> Result<Self> {
        config.validate_for(matrix.dim())?;

        let dim = matrix.dim();
        let mut net = Self {
            cursor: Cursor::new(matrix.points(), dim),
            original: matrix,
            scrambled: None,
            shift: None,
            cache: vec![0; dim],
            bits: BitCache::default(),
            random_type: config.random_type(),
            source,
        };

        if config.randomise() {
            net.apply_randomisation();
        }
        if let Some(shift) = config.shift() {
            net.shift = Some(DigitalShift::fixed(shift.to_vec()));
        }
        net.reset_cur_point_index();

        debug!(
            dim,
            n_cols = net.original.n_cols(),
            random_type = %net.random_type,
            randomised = config.randomise(),
            "digital net initialised"
        );
        Ok(net)
    }

    /// Builds a net from raw column data laid out dimension by dimension.
    ///
    /// # Errors
    ///
    /// Any shape error from [`GeneratorMatrix::new`], or a shift mismatch as
    /// for [`DigitalNet::new`].
    pub fn from_columns(
        dim: usize,
        n_cols: u32,
        columns: Vec<u32>,
        config: &DigitalNetConfig,
        source: S,
    ) -> Result<Self> {
        Self::new(GeneratorMatrix::new(dim, n_cols, columns)?, config, source)
    }

    /// Matrix the points are currently generated from (scrambled if a
    /// matrix scrambling has been applied).
    #[inline]
    pub fn generator_matrix(&self) -> &GeneratorMatrix {
        self.scrambled.as_ref().unwrap_or(&self.original)
    }

    /// Matrix as supplied at construction.
    #[inline]
    pub fn original_matrix(&self) -> &GeneratorMatrix {
        &self.original
    }

    /// Configured randomisation.
    #[inline]
    pub fn random_type(&self) -> RandomType {
        self.random_type
    }

    /// Current digital shift, if one has been drawn or installed.
    #[inline]
    pub fn digital_shift(&self) -> Option<&[u32]> {
        self.shift.as_ref().map(DigitalShift::as_slice)
    }

    /// Coordinates of the current point.
    #[inline]
    pub fn current_point(&self) -> &[u32] {
        &self.cache
    }

    /// Index of the next coordinate to be read.
    #[inline]
    pub fn coord_index(&self) -> usize {
        self.cursor.coord_index()
    }

    /// Random source used for scrambling and shifts.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the random source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Draws fresh shift masks for dimensions `[from, to)`, keeping
    /// `[0, from)`. `to == 0` means every dimension.
    ///
    /// The cached point is rebuilt on the current point index with the new
    /// masks; reading restarts at coordinate 0.
    pub fn add_random_shift(&mut self, from: usize, to: usize) {
        self.draw_shift(from, to);
        self.set_cur_point_index(self.cursor.point_index());
    }

    fn draw_shift(&mut self, from: usize, to: usize) {
        let to = if to == 0 { self.dimensions().max(1) } else { to };
        match self.shift.as_mut() {
            Some(shift) => shift.redraw(from, to, &mut self.source),
            None => {
                // Entries below `from` were never drawn and stay zero.
                let mut shift = DigitalShift::with_capacity(to);
                shift.redraw(from, to, &mut self.source);
                self.shift = Some(shift);
            }
        }
    }

    fn apply_randomisation(&mut self) {
        if self.random_type.scrambles_matrix() {
            self.scrambled = scramble(&self.original, self.random_type, &mut self.source);
        }
        self.draw_shift(0, self.dimensions());
    }

    /// Seeds the cache with the digital shift, growing the shift first if it
    /// does not yet cover every dimension.
    fn add_shift_to_cache(&mut self) {
        let dim = self.dimensions();
        match self.shift.as_mut() {
            None => self.cache.fill(0),
            Some(shift) => {
                if shift.len() < dim {
                    let from = shift.len();
                    shift.redraw(from, dim, &mut self.source);
                }
                self.cache.copy_from_slice(&shift.as_slice()[..dim]);
            }
        }
    }

    fn reset_cur_point_index(&mut self) {
        self.add_shift_to_cache();
        self.cursor.set_point(0);
        self.bits.clear();
    }

    fn reset_to_next_point(&mut self) -> usize {
        // Position of the Gray-code change: the lowest zero bit of the index.
        let pos = self.cursor.point_index().trailing_ones();
        if pos < self.original.n_cols() {
            let matrix = self.scrambled.as_ref().unwrap_or(&self.original);
            xor_column(&mut self.cache, matrix, pos as usize);
        }
        self.bits.clear();
        self.cursor.advance_point()
    }

    fn set_cur_point_index(&mut self, i: usize) {
        if i == 0 {
            self.reset_cur_point_index();
            return;
        }

        // Out-of-order access: rebuild the cached point from scratch.
        self.cursor.set_point(i);
        self.bits.clear();
        self.add_shift_to_cache();

        let gray = i ^ (i >> 1);
        let significant = (usize::BITS - gray.leading_zeros()).min(self.original.n_cols());
        let matrix = self.scrambled.as_ref().unwrap_or(&self.original);
        for pos in 0..significant as usize {
            if (gray >> pos) & 1 != 0 {
                xor_column(&mut self.cache, matrix, pos);
            }
        }
        trace!(point = i, gray, "recomputed cached point");
    }
}

impl DigitalNet<SharedRng> {
    /// Builds a net drawing from this thread's [`default_source`].
    ///
    /// # Errors
    ///
    /// As for [`DigitalNet::new`].
    pub fn with_default_source(matrix: GeneratorMatrix, config: &DigitalNetConfig) -> Result<Self> {
        Self::new(matrix, config, default_source())
    }
}

/// XORs column `pos` of every dimension into the cached point.
#[inline]
fn xor_column(cache: &mut [u32], matrix: &GeneratorMatrix, pos: usize) {
    for (j, value) in cache.iter_mut().enumerate() {
        *value ^= matrix.column(j, pos);
    }
}

impl<S: BitSource> PointSet for DigitalNet<S> {
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
        self.reset_cur_point_index();
    }

    fn restart(&mut self) {
        self.reset_cur_point_index();
    }

    fn restart_substream(&mut self) {
        self.cursor.reset_coord();
        self.bits.clear();
    }

    #[inline]
    fn jump(&mut self) {
        self.reset_to_next_point();
    }

    fn set_point_index(&mut self, i: usize) {
        self.set_cur_point_index(i);
    }

    /// Re-draws the configured scrambling from the original matrix, draws a
    /// fresh shift for every dimension and restarts on point 0.
    fn randomise(&mut self) {
        self.apply_randomisation();
        self.reset_cur_point_index();
        debug!(random_type = %self.random_type, "digital net randomised");
    }

    #[inline]
    fn next_u32(&mut self) -> Result<u32> {
        let j = self.cursor.claim_coord()?;
        Ok(self.cache[j])
    }

    #[inline]
    fn bit_cache(&mut self) -> &mut BitCache {
        &mut self.bits
    }
}
