//! Adaptive quantum-walk state engine
//!
//! The walk evolves a 512-site complex amplitude vector, one step per
//! message byte. Each step superposes four circularly shifted copies of
//! the state (unit shifts plus a chaotic non-local hop), blends in two
//! prior snapshots from a bounded history ring, and renormalizes. The
//! history blend makes the step non-Markovian: inverting one step would
//! require knowing states several steps back.

use num_complex::Complex64;

use crate::chaos::chaos_hop;
use crate::params::{
    CENTER, CURRENT_WEIGHT, ECHO_WEIGHT, HISTORY_DEPTH, MAX_HOP, NODES, NORM_EPSILON, NORM_FLOOR,
    OLDEST_WEIGHT, STABILIZE_INTERVAL,
};

/// One full amplitude vector over the cyclic lattice.
pub(crate) type StateVector = [Complex64; NODES];

/// Fixed-capacity ring of prior state snapshots, oldest-evict.
///
/// `head` points at the oldest snapshot; logical index `k` (0 = oldest,
/// `HISTORY_DEPTH - 1` = newest) lives at `(head + k) % HISTORY_DEPTH`.
struct HistoryRing {
    snapshots: [StateVector; HISTORY_DEPTH],
    head: usize,
}

impl HistoryRing {
    fn new(initial: &StateVector) -> Self {
        Self {
            snapshots: [*initial; HISTORY_DEPTH],
            head: 0,
        }
    }

    fn get(&self, logical: usize) -> &StateVector {
        &self.snapshots[(self.head + logical) % HISTORY_DEPTH]
    }

    fn newest(&self) -> &StateVector {
        self.get(HISTORY_DEPTH - 1)
    }

    /// Evict the oldest snapshot and store `state` as the newest.
    fn push(&mut self, state: &StateVector) {
        self.snapshots[self.head] = *state;
        self.head = (self.head + 1) % HISTORY_DEPTH;
    }
}

/// Euclidean norm of the amplitude vector.
fn vector_norm(state: &StateVector) -> f64 {
    let mut norm_sqr = 0.0f64;
    for amp in state {
        norm_sqr += amp.norm_sqr();
    }
    norm_sqr.sqrt()
}

/// Divide every component by `norm` when it is large enough to divide by.
fn renormalize(state: &mut StateVector, norm: f64) {
    if norm > NORM_EPSILON {
        for amp in state.iter_mut() {
            *amp /= norm;
        }
    }
}

/// Run the full walk over `message` and return the final state vector.
///
/// `coin_row` supplies the four weights combining the shifted copies.
/// The operation order inside each step is load-bearing: shifted-copy
/// superposition, then history blend, then degeneracy check, then
/// renormalization, then the history update, then the periodic extra
/// renormalization pass. Floating-point addition is not associative, so
/// reordering any of these changes digests.
pub(crate) fn evolve(message: &[u8], coin_row: &[f64; 4]) -> StateVector {
    let mut psi: StateVector = [Complex64::new(0.0, 0.0); NODES];
    psi[CENTER] = Complex64::new(1.0, 0.0);

    let mut history = HistoryRing::new(&psi);
    let mut next: StateVector = [Complex64::new(0.0, 0.0); NODES];

    for (step, &byte) in message.iter().enumerate() {
        let hop = chaos_hop(byte, step) % MAX_HOP;

        // Superpose the four shifted copies: unit shift each way plus the
        // chaotic hop each way. Index arithmetic wraps on the lattice.
        for (i, amp) in next.iter_mut().enumerate() {
            let left = psi[(i + NODES - 1) % NODES];
            let right = psi[(i + 1) % NODES];
            let hop_left = psi[(i + NODES - hop) % NODES];
            let hop_right = psi[(i + hop) % NODES];

            *amp = left * coin_row[0] + right * coin_row[1] + hop_left * coin_row[2]
                + hop_right * coin_row[3];
        }

        // Non-Markovian feedback from the oldest and third-oldest snapshots.
        {
            let oldest = history.get(0);
            let echo = history.get(2);
            for i in 0..NODES {
                next[i] = next[i] * CURRENT_WEIGHT + oldest[i] * OLDEST_WEIGHT
                    + echo[i] * ECHO_WEIGHT;
            }
        }

        let mut norm = vector_norm(&next);
        if !norm.is_finite() || norm <= NORM_FLOOR {
            // Collapsed or non-finite state: restart from the newest
            // snapshot, which is always finite and near unit norm.
            next = *history.newest();
            norm = vector_norm(&next);
        }
        renormalize(&mut next, norm);

        history.push(&next);
        psi = next;

        // Periodic extra stabilization pass. The snapshot above keeps the
        // once-normalized state; only the live vector is rescaled again.
        if step % STABILIZE_INTERVAL == 0 {
            let norm = vector_norm(&psi);
            renormalize(&mut psi, norm);
        }
    }

    psi
}
