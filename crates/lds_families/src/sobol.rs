//! 32-bit Sobol sequences.
//!
//! Generator matrices are built from primitive polynomials and initial
//! direction numbers of Joe & Kuo (new-joe-kuo-6.21201), see
//! <https://web.maths.unsw.edu.au/~fkuo/sobol/>. Dimension 0 is the van der
//! Corput sequence; the table below covers the next fifteen dimensions.

use lds_core::{BitSource, DigitalNet, DigitalNetConfig, GeneratorMatrix, LdsError, Result};
use tracing::debug;

/// Largest dimension supported by the embedded table.
pub const MAX_SOBOL_DIM: usize = 1 + DIRECTION_NUMBERS.len();

/// Primitive polynomial and initial direction numbers of one dimension.
#[derive(Clone, Copy, Debug)]
pub struct DirectionNumbers {
    /// Degree of the primitive polynomial.
    pub degree: u32,
    /// Interior coefficients `a_1 .. a_{s-1}`, `a_1` most significant.
    pub coefficients: u32,
    /// Initial direction numbers `m_1 .. m_s`; `m_i` is odd and below `2^i`.
    pub initial: &'static [u32],
}

const fn dn(degree: u32, coefficients: u32, initial: &'static [u32]) -> DirectionNumbers {
    DirectionNumbers {
        degree,
        coefficients,
        initial,
    }
}

/// Dimensions 1 to 15 (dimension 0 is van der Corput).
pub const DIRECTION_NUMBERS: [DirectionNumbers; 15] = [
    dn(1, 0, &[1]),
    dn(2, 1, &[1, 3]),
    dn(3, 1, &[1, 3, 1]),
    dn(3, 2, &[1, 1, 1]),
    dn(4, 1, &[1, 1, 3, 3]),
    dn(4, 4, &[1, 3, 5, 13]),
    dn(5, 2, &[1, 1, 5, 5, 17]),
    dn(5, 4, &[1, 1, 5, 5, 5]),
    dn(5, 7, &[1, 1, 7, 11, 19]),
    dn(5, 11, &[1, 1, 5, 1, 1]),
    dn(5, 13, &[1, 1, 1, 3, 11]),
    dn(5, 14, &[1, 3, 5, 5, 31]),
    dn(6, 1, &[1, 3, 3, 9, 7, 49]),
    dn(6, 13, &[1, 1, 1, 15, 21, 21]),
    dn(6, 16, &[1, 3, 1, 13, 27, 49]),
];

/// Fills `v` with the direction numbers of one dimension.
fn fill_direction_numbers(params: &DirectionNumbers, v: &mut [u32]) {
    let s = params.degree as usize;
    for (c, (dst, &m)) in v.iter_mut().zip(params.initial).enumerate() {
        *dst = m << (31 - c);
    }
    for c in s..v.len() {
        let base = v[c - s];
        let mut next = base ^ (base >> s);
        for t in 0..s - 1 {
            if (params.coefficients >> t) & 1 != 0 {
                next ^= v[c - s + 1 + t];
            }
        }
        v[c] = next;
    }
}

/// Sobol generator matrix for `2^k` points in `dim` dimensions.
///
/// # Errors
///
/// - [`LdsError::InvalidDimension`] unless `1 <= dim <= MAX_SOBOL_DIM`
/// - [`LdsError::InvalidColumnCount`] if `k >= 32`
pub fn sobol_matrix(k: u32, dim: usize) -> Result<GeneratorMatrix> {
    if dim == 0 || dim > MAX_SOBOL_DIM {
        return Err(LdsError::InvalidDimension {
            dim,
            max: MAX_SOBOL_DIM,
        });
    }
    if k >= lds_core::net::MAXBITS {
        return Err(LdsError::InvalidColumnCount {
            n_cols: k,
            max_bits: lds_core::net::MAXBITS,
        });
    }

    let cols = k as usize;
    let mut columns = vec![0u32; dim * cols];
    for (c, col) in columns[..cols].iter_mut().enumerate() {
        *col = 1 << (31 - c);
    }
    for (j, params) in DIRECTION_NUMBERS.iter().take(dim - 1).enumerate() {
        let start = (j + 1) * cols;
        fill_direction_numbers(params, &mut columns[start..start + cols]);
    }
    GeneratorMatrix::new(dim, k, columns)
}

/// Sobol point set with `2^k` points in `dim` dimensions.
///
/// # Arguments
///
/// * `k` - log2 of the point count, below 32
/// * `dim` - Number of dimensions, at most [`MAX_SOBOL_DIM`]
/// * `config` - Randomisation options
/// * `source` - Random source for scrambling and shifts
///
/// # Returns
///
/// A [`DigitalNet`] over the Sobol generator matrix.
///
/// # Examples
///
/// ```rust
/// use lds_core::{DigitalNetConfig, PointSet, RandomType, SeedRng};
/// use lds_families::sobol::sobol;
///
/// let config = DigitalNetConfig::with_random_type(RandomType::LeftMatrixScrambling);
/// let mut points = sobol(10, 5, &config, SeedRng::from_seed(1)).unwrap();
/// assert_eq!(points.points(), 1024);
/// let x = points.next_f64().unwrap();
/// assert!((0.0..1.0).contains(&x));
/// ```
///
/// # Errors
///
/// As for [`sobol_matrix`], plus configuration errors from
/// [`DigitalNet::new`].
pub fn sobol<S: BitSource>(
    k: u32,
    dim: usize,
    config: &DigitalNetConfig,
    source: S,
) -> Result<DigitalNet<S>> {
    let matrix = sobol_matrix(k, dim)?;
    debug!(k, dim, "built Sobol generator matrix");
    DigitalNet::new(matrix, config, source)
}
