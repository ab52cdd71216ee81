//! Error types for the Astryx hashing engine

use thiserror::Error;

use crate::params::MAX_OUTPUT_BITS;

/// Errors reported by [`Astryx::new`](crate::Astryx::new) and the
/// single-shot [`hash`](crate::hash) function.
///
/// The algorithm itself never fails on finite inputs; numerical
/// degeneracy inside the walk is recovered internally from the history
/// buffer. The only rejectable condition is an unusable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstryxError {
    /// `output_bits` is zero, not a multiple of 64, or more than the
    /// 512-bit accumulator can supply.
    #[error(
        "output_bits must be a multiple of 64 between 64 and {MAX_OUTPUT_BITS}, got {0}"
    )]
    InvalidOutputBits(usize),
}
