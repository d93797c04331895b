//! Base-2 digital nets.
//!
//! ## Module Structure
//!
//! - [`matrix`]: per-dimension generator matrices over GF(2)
//! - [`scramble`]: left, right and striped matrix scrambling
//! - [`engine`]: the [`DigitalNet`] point set with its Gray-code cache

pub mod engine;
pub mod matrix;
pub mod scramble;

pub use engine::DigitalNet;
pub use matrix::{GeneratorMatrix, MAXBITS};
