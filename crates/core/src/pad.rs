//! Message preprocessing
//!
//! Inputs shorter than [`MIN_MESSAGE_LEN`] bytes are extended with a
//! deterministic LCG stream so the walk always runs at least 64 steps.
//! Longer inputs pass through untouched.

use crate::params::{EMPTY_PAD_SEED, MIN_MESSAGE_LEN, PAD_LCG_MUL};

/// Pad `input` to at least [`MIN_MESSAGE_LEN`] bytes.
///
/// The padding seed is the byte sum of the message, or [`EMPTY_PAD_SEED`]
/// for an empty message, so the pad stream itself depends on the input.
pub(crate) fn pad_message(input: &[u8]) -> Vec<u8> {
    let mut buf = input.to_vec();
    if buf.len() >= MIN_MESSAGE_LEN {
        return buf;
    }

    let mut seed: u64 = if buf.is_empty() {
        EMPTY_PAD_SEED
    } else {
        buf.iter().map(|&b| u64::from(b)).sum()
    };

    while buf.len() < MIN_MESSAGE_LEN {
        seed = seed.wrapping_mul(PAD_LCG_MUL).wrapping_add(1);
        buf.push((seed % 256) as u8);
    }

    buf
}
