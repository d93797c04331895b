//! Matrix scrambling of generator matrices.
//!
//! Each scheme composes every dimension's generator matrix with a
//! triangular matrix over GF(2) whose diagonal is all ones, so the result is
//! always an invertible transform of the original:
//!
//! - **Left** (Faure & Tezuka, 2002): random upper rows mix each output digit
//!   with the less significant digits below it.
//! - **Striped** (Owen, 2003): the left multiply with every admissible
//!   entry set; no randomness is consumed.
//! - **Right** (Faure & Tezuka 2002; Hong & Hickernell 2003): random
//!   combinations of earlier columns, which reorders the points.
//!
//! Scrambling always reads the pristine matrix and writes a fresh one.

use tracing::trace;

use super::matrix::{GeneratorMatrix, MAXBITS};
use crate::config::RandomType;
use crate::source::BitSource;

/// Rows of a 32x32 scrambling matrix.
pub type ScrambleRows = [u32; MAXBITS as usize];

/// Random left-scrambling rows: row 0 is all ones, row `d` is a fresh draw
/// shifted left by `d`.
pub fn left_scramble_rows<S: BitSource + ?Sized>(source: &mut S) -> ScrambleRows {
    let mut rows = [0u32; MAXBITS as usize];
    rows[0] = u32::MAX;
    for (d, row) in rows.iter_mut().enumerate().skip(1) {
        *row = source.next_u32() << d;
    }
    rows
}

/// Deterministic striped rows: row `d` keeps bits `d..32`.
pub fn striped_rows() -> ScrambleRows {
    let mut rows = [0u32; MAXBITS as usize];
    for (d, row) in rows.iter_mut().enumerate() {
        *row = (u32::MAX >> d) << d;
    }
    rows
}

/// Random right-scrambling rows for `n_cols` columns.
///
/// Row `c` carries its unit diagonal at bit `31 - c`; the bits above it are
/// drawn uniformly below `2^0 + 2^1 + ... + 2^c`.
pub fn right_scramble_rows<S: BitSource + ?Sized>(n_cols: u32, source: &mut S) -> ScrambleRows {
    let mut rows = [0u32; MAXBITS as usize];
    let mut bound: u32 = 0;
    for c in 0..n_cols {
        bound += 1 << c;
        rows[c as usize] = (1 | source.below(bound)) << (MAXBITS - c - 1);
    }
    rows
}

/// Left-multiplies the columns of one dimension: for each column, output
/// digit `k` is the dot product of row `d` with the input digits, aligned by
/// shifting right by `d`.
pub fn left_multiply(rows: &ScrambleRows, original: &[u32], out: &mut [u32]) {
    for (dst, &col) in out.iter_mut().zip(original) {
        *dst = rows
            .iter()
            .enumerate()
            .fold(0, |acc, (d, &row)| acc ^ ((row & col) >> d));
    }
}

/// Right-multiplies the columns of one dimension: output column `c` is the
/// original column `c` plus every earlier column `r` whose bit `31 - r` is
/// set in row `c`.
pub fn right_multiply(rows: &ScrambleRows, original: &[u32], out: &mut [u32]) {
    for (c, dst) in out.iter_mut().enumerate() {
        let mut col = original[c];
        let mut mask = 1u32 << (MAXBITS - 1);
        for &earlier in &original[..c] {
            if rows[c] & mask != 0 {
                col ^= earlier;
            }
            mask >>= 1;
        }
        *dst = col;
    }
}

/// Builds the scrambled counterpart of `original` for `random_type`.
///
/// Returns `None` for [`RandomType::RandomShift`], which leaves the matrix
/// untouched. Random schemes draw a separate matrix for each dimension,
/// dimensions in order.
pub fn scramble<S: BitSource + ?Sized>(
    original: &GeneratorMatrix,
    random_type: RandomType,
    source: &mut S,
) -> Option<GeneratorMatrix> {
    let scrambled = match random_type {
        RandomType::RandomShift => return None,
        RandomType::LeftMatrixScrambling => map_dimensions(original, |col, out| {
            left_multiply(&left_scramble_rows(source), col, out)
        }),
        RandomType::StripedMatrixScrambling => {
            let rows = striped_rows();
            map_dimensions(original, |col, out| left_multiply(&rows, col, out))
        }
        RandomType::RightMatrixScrambling => {
            let n_cols = original.n_cols();
            map_dimensions(original, |col, out| {
                right_multiply(&right_scramble_rows(n_cols, source), col, out)
            })
        }
    };
    trace!(?random_type, dim = original.dim(), "scrambled generator matrix");
    Some(scrambled)
}

/// Applies `f` to every dimension's columns, writing into a fresh matrix.
fn map_dimensions<F>(original: &GeneratorMatrix, mut f: F) -> GeneratorMatrix
where
    F: FnMut(&[u32], &mut [u32]),
{
    let mut scrambled = original.zeroed_like();
    for j in 0..original.dim() {
        f(original.columns_of(j), scrambled.columns_of_mut(j));
    }
    scrambled
}
