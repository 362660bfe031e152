//! Seeded linear congruential generator
//!
//! The generator and shuffle must stay bit-for-bit stable: the seed is
//! persisted and has to reproduce the same answer order after a restart.

const MULTIPLIER: u64 = 2_862_933_555_777_941_757;
const INCREMENT: u64 = 3_037_000_493;

/// Deterministic 64-bit LCG
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance and return the new state
    ///
    /// `state = state * 2862933555777941757 + 3037000493 (mod 2^64)`
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Fisher-Yates shuffle in place
    ///
    /// For `i` from `len - 1` down to 1, swaps `i` with `next() % (i + 1)`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_u64() % (i as u64 + 1)) as usize;
            items.swap(i, j);
        }
    }

    /// Shuffled copy of `items`
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }
}
