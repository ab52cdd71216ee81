//! Measurement, compression and squeeze stages
//!
//! The final state vector is measured into 512 quantized probabilities,
//! folded into an 8-word accumulator with rotate/XOR/add mixing, and the
//! requested number of output words is squeezed out, each one reading the
//! whole accumulator.

use crate::params::{
    ACC_LANE_MUL, ACC_MIX_MUL, ACC_ROTATE, ACC_WORDS, QUANT_SCALE, SQUEEZE_MUL, SQUEEZE_ROTATE,
};
use crate::walk::StateVector;

/// Fold the measured state into the 512-bit accumulator.
///
/// Positions are processed strictly in increasing index order; the
/// rotate-and-add updates make the result order-dependent, so this loop
/// must not be reordered or parallelized.
pub(crate) fn compress(state: &StateVector) -> [u64; ACC_WORDS] {
    let mut acc = [0u64; ACC_WORDS];

    for (i, amp) in state.iter().enumerate() {
        // Squared magnitude, scaled to 32 significant bits and truncated.
        let quantized = (amp.norm_sqr() * QUANT_SCALE) as u64;

        // i % 63 never reaches 63, so rotate_left reproduces the
        // shift-or-zero mixer exactly, including the i % 63 == 0 case.
        let mixer = quantized.rotate_left((i % 63) as u32);

        let slot = &mut acc[i % ACC_WORDS];
        *slot ^= mixer.wrapping_mul(ACC_MIX_MUL);
        *slot = slot.rotate_left(ACC_ROTATE);
        *slot = slot.wrapping_add((i as u64).wrapping_mul(ACC_LANE_MUL));
    }

    acc
}

/// Squeeze `output_bits / 64` words out of the accumulator.
///
/// Word `k` starts from `acc[k]` and absorbs every accumulator slot, so
/// all output words depend on the whole 512-bit accumulator state.
/// Returns the digest as big-endian word bytes.
pub(crate) fn squeeze(acc: &[u64; ACC_WORDS], output_bits: usize) -> Vec<u8> {
    let words = output_bits / 64;
    let mut out = Vec::with_capacity(words * 8);

    for k in 0..words {
        let mut word = acc[k];
        for &slot in acc {
            word ^= slot.wrapping_mul(SQUEEZE_MUL);
            word = word.rotate_left(SQUEEZE_ROTATE);
        }
        out.extend_from_slice(&word.to_be_bytes());
    }

    out
}
