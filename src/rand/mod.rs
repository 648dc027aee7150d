//! Random index selection backed by hardware entropy.
//!
//! The composer never touches the entropy state directly; it draws indexes
//! through [`IndexSource`], so tests can substitute a deterministic source.

mod hw;

use core::cell::UnsafeCell;
use std::sync::LazyLock;

/// A source of uniform random indexes.
pub trait IndexSource {
    /// Draw one index in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

// Odd multipliers for the state transition and the SplitMix64 finalizer.
const MULT: usize = 0xd1b5_4a32_d192_ed03;
const MIX_A: usize = 0xbf58_476d_1ce4_e5b9;
const MIX_B: usize = 0x94d0_49bb_1331_11eb;

static STATE: LazyLock<State> = LazyLock::new(State::new);

struct State(UnsafeCell<usize>);

// Single-threaded generation; the cell is never aliased across threads.
unsafe impl Sync for State {}

impl State {
    fn new() -> Self {
        State(UnsafeCell::new(hw::entropy() as usize))
    }

    #[inline(always)]
    fn next(&self) -> usize {
        let state = unsafe { *self.0.get() };
        let ent = hw::entropy() as usize;

        // Rotate, multiply, fold in fresh entropy.
        let new_state = state.rotate_left(17).wrapping_mul(MULT) ^ ent;
        unsafe { *self.0.get() = new_state };

        // SplitMix64 output finalizer.
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_A);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_B);
        z ^ (z >> 31)
    }
}

/// The production source: hardware-entropy-mixed generator state.
pub struct EntropyRng;

impl IndexSource for EntropyRng {
    #[inline(always)]
    fn next_index(&mut self, bound: usize) -> usize {
        STATE.next() % bound
    }
}

/// Zero the generator state. Called from exit and crash handlers.
pub fn zeroize_state() {
    unsafe { std::ptr::write_volatile(STATE.0.get(), 0) }
}

/// Name of the active entropy source, for display.
pub fn entropy_source() -> &'static str {
    hw::source_name()
}

/// Deterministic source for tests: replays a fixed index sequence.
#[cfg(test)]
pub struct SeqSource {
    seq: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl SeqSource {
    pub fn new(seq: Vec<usize>) -> Self {
        SeqSource { seq, pos: 0 }
    }
}

#[cfg(test)]
impl IndexSource for SeqSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let v = self.seq[self.pos % self.seq.len()];
        self.pos += 1;
        v % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_rng_stays_in_bounds() {
        let mut rng = EntropyRng;
        for bound in [1, 2, 7, 72] {
            for _ in 0..200 {
                assert!(rng.next_index(bound) < bound);
            }
        }
    }

    #[test]
    fn seq_source_replays_and_wraps() {
        let mut src = SeqSource::new(vec![0, 3, 9]);
        assert_eq!(src.next_index(10), 0);
        assert_eq!(src.next_index(10), 3);
        assert_eq!(src.next_index(4), 1); // 9 % 4
        assert_eq!(src.next_index(10), 0); // wrapped
    }
}
