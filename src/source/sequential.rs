//! Sequential index generation
//!
//! Generates indices in round-robin order: the k-th call returns `k % n`.
//! Not random at all, which makes the output of every operation predictable
//! for tests and dry runs.

use crate::source::IndexSource;

/// Sequential index generator
#[derive(Debug, Default, Clone)]
pub struct SequentialIndex {
    /// Number of indices handed out so far
    counter: usize,
}

impl SequentialIndex {
    /// Create a new sequential source starting at 0
    pub fn new() -> Self {
        Self { counter: 0 }
    }
}

impl IndexSource for SequentialIndex {
    fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }

        let idx = self.counter % n;
        self.counter = self.counter.wrapping_add(1);
        idx
    }
}
