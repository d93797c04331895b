//! # lds_core: Base-2 Digital-Net Point Engine
//!
//! ## Core Layer Role
//!
//! lds_core is the bottom layer of the low-discrepancy sequence workspace.
//! It provides the machinery every base-2 digital net shares:
//! - Point/coordinate cursor with restart, substream and jump semantics (`cursor`)
//! - Lazily-growing digital shift store (`shift`)
//! - Generator matrices, Gray-code point cache and matrix scrambling (`net`)
//! - Reseedable pseudo-random bit sources (`source`)
//! - Randomisation configuration (`config`)
//! - Point-set traits (`sequence`) and error types (`error`)
//!
//! Concrete generator tables (Sobol direction numbers, lattice generators)
//! live in `lds_families`.
//!
//! ## Usage Example
//!
//! ```rust
//! use lds_core::config::{DigitalNetConfig, RandomType};
//! use lds_core::net::{DigitalNet, GeneratorMatrix};
//! use lds_core::source::SeedRng;
//! use lds_core::{LowDiscrepancySequence, PointSet};
//!
//! // Two-dimensional net with 2^4 points.
//! let columns = vec![
//!     0x8000_0000, 0x4000_0000, 0x2000_0000, 0x1000_0000, // van der Corput
//!     0x8000_0000, 0xC000_0000, 0xA000_0000, 0xF000_0000, // Sobol dimension 2
//! ];
//! let matrix = GeneratorMatrix::new(2, 4, columns).unwrap();
//! let config = DigitalNetConfig::with_random_type(RandomType::LeftMatrixScrambling);
//! let mut net = DigitalNet::new(matrix, &config, SeedRng::from_seed(42)).unwrap();
//!
//! let mut point = [0.0; 2];
//! for _ in 0..net.points() {
//!     net.fill_point(&mut point).unwrap();
//!     assert!(point.iter().all(|&x| (0.0..1.0).contains(&x)));
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `RandomType` and `DigitalNetConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod net;
pub mod sequence;
pub mod shift;
pub mod source;

pub use config::{DigitalNetConfig, RandomType};
pub use error::{LdsError, Result};
pub use net::{DigitalNet, GeneratorMatrix};
pub use sequence::{LowDiscrepancySequence, PointSet};
pub use source::{default_source, BitSource, SeedRng, SharedRng};
