//! ChaCha-backed sampling helpers shared by the generation stages.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub(super) fn random_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// Uniform draw in [0, 1) with 53 bits of precision.
pub(super) fn unit_value(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

/// Fisher-Yates shuffle driven by the injected generator.
pub(super) fn shuffle<T>(rng: &mut ChaCha8Rng, values: &mut [T]) {
    for index in (1..values.len()).rev() {
        let other = random_index(rng, index + 1);
        values.swap(index, other);
    }
}
