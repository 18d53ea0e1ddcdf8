//! Substream Positioning
//!
//! Places independent streams on one xoshiro256 sequence the way parallel
//! engines do: `JUMP` (2^128 steps) separates streams of one process,
//! `LONG_JUMP` (2^192 steps) separates clusters of processes.

use crate::types::{JumpConstant, State, JUMP, LONG_JUMP};

/// Starting state of stream `thread_id` in cluster `cluster_id`.
///
/// Applies [`JUMP`] `thread_id` times, then [`LONG_JUMP`] `cluster_id` times.
/// Each application costs 256 steps.
#[must_use]
pub fn substream_state(state: &State, thread_id: u64, cluster_id: u64) -> State {
    let mut current = *state;
    for _ in 0..thread_id {
        current = JUMP.apply(&current);
    }
    for _ in 0..cluster_id {
        current = LONG_JUMP.apply(&current);
    }
    current
}

/// Iterator over successive stream starting states.
///
/// The first item is the seed state itself; every following item is one
/// `jump` further along the sequence.
#[derive(Clone, Debug)]
pub struct Substreams {
    next: State,
    jump: JumpConstant,
}

impl Substreams {
    /// Streams separated by [`JUMP`].
    #[must_use]
    pub const fn new(state: State) -> Self {
        Self::with_jump(state, JUMP)
    }

    /// Streams separated by an arbitrary jump.
    #[must_use]
    pub const fn with_jump(state: State, jump: JumpConstant) -> Self {
        Self { next: state, jump }
    }
}

impl Iterator for Substreams {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let current = self.next;
        self.next = self.jump.apply(&current);
        Some(current)
    }
}
