//! # lds_families: Concrete Low-Discrepancy Point Sets
//!
//! Generator tables and constructions layered on the `lds_core` engine:
//! - Sobol digital nets from Joe-Kuo direction numbers (`sobol`)
//! - Rank-1 and Korobov lattices with a random shift modulo 1 (`lattice`)
//!
//! Every family implements [`lds_core::PointSet`], so the same traversal and
//! floating-point view apply to all of them.
//!
//! ## Usage Example
//!
//! ```rust
//! use lds_core::{LowDiscrepancySequence, SeedRng};
//! use lds_families::lattice::korobov;
//!
//! let mut lattice = korobov(1021, 76, 3, 0, SeedRng::from_seed(9)).unwrap();
//! let mut point = [0.0; 3];
//! lattice.fill_point(&mut point).unwrap();
//! assert!(point.iter().all(|&x| (0.0..1.0).contains(&x)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod lattice;
pub mod sobol;

pub use lattice::{korobov, korobov_generators, Rank1Lattice};
pub use sobol::{sobol, sobol_matrix, MAX_SOBOL_DIM};
