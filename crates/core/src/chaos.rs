//! Chaotic hop generator
//!
//! Each evolution step needs a non-local shift distance that depends
//! nonlinearly on both the input byte and its position, so that the walk
//! trajectory cannot be predicted from byte values alone. A few rounds of
//! a bounded logistic map provide that.

use crate::params::{CHAOS_GAIN, CHAOS_ROUNDS};

/// Derive the hop distance for the byte at `step`.
///
/// Seeds `x = (byte + step + 1) mod 256`, then iterates
/// `x = (gain * x * (256 - x) / 64) mod 256` in double precision and
/// truncates. The iterate stays in `[0, 256)` because `x` and `256 - x`
/// are both non-negative before each reduction.
pub(crate) fn chaos_hop(byte: u8, step: usize) -> usize {
    let mut x = ((byte as usize + step + 1) % 256) as f64;
    for _ in 0..CHAOS_ROUNDS {
        x = (CHAOS_GAIN * x * (256.0 - x) / 64.0) % 256.0;
    }
    x as usize
}
