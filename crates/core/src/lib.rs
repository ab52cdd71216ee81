//! # Astryx GAQWH Core Algorithm
//!
//! Adaptive quantum-walk hashing: a keyless, deterministic digest built
//! from a simulated discrete-time walk over a 512-site complex amplitude
//! lattice, driven by a chaotic per-byte hop function.
//!
//! ## Pipeline
//!
//! 1. **Preprocess** - pad inputs shorter than 64 bytes with a
//!    deterministic LCG stream
//! 2. **Walk** - one evolution step per byte: four shifted copies of the
//!    state combined by the coin row, blended with two prior snapshots
//!    from a 4-deep history ring, then renormalized
//! 3. **Compress** - quantize the final probabilities and fold them into
//!    an 8-word (512-bit) accumulator with rotate/XOR/add mixing
//! 4. **Squeeze** - derive `output_bits / 64` output words, each mixed
//!    against the whole accumulator, rendered as lowercase hex
//!
//! The computation is a pure function of `(data, output_bits)`: no I/O,
//! no shared state, safe to call concurrently from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use astryx_core::{hash, hash_256, Astryx};
//!
//! // Single-shot hashing at the default 256-bit width
//! let digest = hash_256("transaction payload");
//! assert_eq!(digest.len(), 64);
//!
//! // Explicit width (must be a multiple of 64, at most 512)
//! let wide = hash(b"transaction payload".as_slice(), 512).unwrap();
//! assert_eq!(wide.len(), 128);
//!
//! // Reusable engine with validated configuration
//! let engine = Astryx::new(256).unwrap();
//! assert_eq!(engine.hash("abc"), engine.hash("abc"));
//! ```
//!
//! ## Security
//!
//! This crate is **experimental and unaudited**. No preimage or collision
//! resistance claims have been validated; do not use it where vetted
//! cryptography is required.

mod chaos;
mod compress;
mod error;
mod pad;
mod params;
mod walk;

pub use error::AstryxError;
pub use params::{DEFAULT_OUTPUT_BITS, MAX_OUTPUT_BITS, NODES};

use compress::{compress, squeeze};
use pad::pad_message;
use params::COIN;
use walk::evolve;

/// Reusable Astryx hashing engine.
///
/// Holds the validated output width and the coin matrix. Construction is
/// the only place configuration errors can arise; [`Astryx::hash`] itself
/// never fails for finite inputs.
pub struct Astryx {
    output_bits: usize,
    coin: [[f64; 4]; 4],
}

impl Astryx {
    /// Create an engine producing `output_bits`-bit digests.
    ///
    /// `output_bits` must be a positive multiple of 64 no larger than
    /// [`MAX_OUTPUT_BITS`]; anything else is rejected up front rather
    /// than truncated later.
    pub fn new(output_bits: usize) -> Result<Self, AstryxError> {
        if output_bits == 0 || output_bits % 64 != 0 || output_bits > MAX_OUTPUT_BITS {
            return Err(AstryxError::InvalidOutputBits(output_bits));
        }
        Ok(Self {
            output_bits,
            coin: COIN,
        })
    }

    /// Configured digest width in bits.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// Compute the digest of `data` as raw bytes (`output_bits / 8` long).
    pub fn hash_raw(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        let padded = pad_message(data.as_ref());
        let state = evolve(&padded, &self.coin[0]);
        let acc = compress(&state);
        squeeze(&acc, self.output_bits)
    }

    /// Compute the digest of `data` as a lowercase hex string of exactly
    /// `output_bits / 4` characters.
    ///
    /// Text and raw bytes hash identically: a `&str` is processed as its
    /// UTF-8 bytes.
    pub fn hash(&self, data: impl AsRef<[u8]>) -> String {
        hex::encode(self.hash_raw(data))
    }
}

/// Single-shot hashing at an explicit output width.
///
/// Equivalent to `Astryx::new(output_bits)?.hash(data)`. Prefer holding
/// an [`Astryx`] instance when hashing many inputs at the same width.
pub fn hash(data: impl AsRef<[u8]>, output_bits: usize) -> Result<String, AstryxError> {
    Ok(Astryx::new(output_bits)?.hash(data))
}

/// Single-shot hashing at the default 256-bit width.
pub fn hash_256(data: impl AsRef<[u8]>) -> String {
    let engine = Astryx {
        output_bits: DEFAULT_OUTPUT_BITS,
        coin: COIN,
    };
    engine.hash(data)
}
