//! Astryx GAQWH Algorithm Parameters
//!
//! These parameters define the canonical walk geometry and mixing schedule.
//! Changing any of them changes every digest, so they are fixed here rather
//! than exposed as runtime configuration.

/// Number of lattice sites in the cyclic state vector
pub const NODES: usize = 512;

/// Starting site for the walk (center of the lattice)
pub const CENTER: usize = NODES / 2;

/// Maximum non-local hop distance (one quarter of the lattice)
pub const MAX_HOP: usize = NODES / 4;

/// Number of prior state snapshots retained for feedback
pub const HISTORY_DEPTH: usize = 4;

/// Minimum processed message length in bytes; shorter inputs are padded
pub const MIN_MESSAGE_LEN: usize = 64;

/// LCG multiplier for deterministic padding (PCG default multiplier)
pub const PAD_LCG_MUL: u64 = 0x5851F42D4C957F2D;

/// Padding seed used when the input message is empty
pub const EMPTY_PAD_SEED: u64 = 0xDEADBEEF;

/// Logistic-map gain for the chaotic hop function
pub const CHAOS_GAIN: f64 = 3.99;

/// Iterations of the logistic map per hop
pub const CHAOS_ROUNDS: usize = 3;

/// 4x4 coin matrix. Only the first row drives the canonical walk; the
/// remaining rows are part of the declared configuration and are kept
/// so the full parameter set stays on record.
pub const COIN: [[f64; 4]; 4] = [
    [0.5, 0.5, 0.5, 0.5],
    [0.5, -0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5, 0.5],
];

/// Weight of the freshly shifted state in the history blend
pub const CURRENT_WEIGHT: f64 = 0.6;

/// Weight of the oldest history snapshot in the blend
pub const OLDEST_WEIGHT: f64 = 0.25;

/// Weight of the third-oldest history snapshot in the blend
pub const ECHO_WEIGHT: f64 = 0.15;

/// Norm at or below this threshold counts as a collapsed (degenerate) state
pub const NORM_FLOOR: f64 = 1e-300;

/// Minimum norm required before renormalization divides by it
pub const NORM_EPSILON: f64 = 1e-15;

/// Every this many steps the state gets an extra renormalization pass
pub const STABILIZE_INTERVAL: usize = 8;

/// Scale applied to probabilities before integer truncation
pub const QUANT_SCALE: f64 = 0xFFFF_FFFFu32 as f64;

/// Number of 64-bit words in the compression accumulator
pub const ACC_WORDS: usize = 8;

/// Multiplier applied to the rotated mixer during accumulation (splitmix64)
pub const ACC_MIX_MUL: u64 = 0xBF58476D1CE4E5B9;

/// Per-position additive multiplier during accumulation (splitmix64)
pub const ACC_LANE_MUL: u64 = 0x94D049BB133111EB;

/// Multiplier applied to each accumulator slot during the squeeze pass
pub const SQUEEZE_MUL: u64 = 0x632BE59BD9B4E019;

/// Accumulator slot rotation after each XOR fold
pub const ACC_ROTATE: u32 = 13;

/// Output word rotation after each squeeze fold
pub const SQUEEZE_ROTATE: u32 = 21;

/// Default digest width in bits
pub const DEFAULT_OUTPUT_BITS: usize = 256;

/// Largest digest width the 8-word accumulator can supply
pub const MAX_OUTPUT_BITS: usize = ACC_WORDS * 64;
