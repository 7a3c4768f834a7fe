//! Uniform random index source
//!
//! Uses the xoshiro256++ PRNG, which is fast and has good statistical
//! properties. The context-preserving scatter can draw thousands of indices
//! per placed unit, so the generator sits on the hot path.
//!
//! # Example
//!
//! ```
//! use wigperm::source::{IndexSource, uniform::UniformIndex};
//!
//! let mut source = UniformIndex::new();
//!
//! for _ in 0..10 {
//!     assert!(source.next_index(1024) < 1024);
//! }
//! ```

use super::IndexSource;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random index source
///
/// Every index in [0, n) has equal probability.
#[derive(Debug, Clone)]
pub struct UniformIndex {
    rng: Xoshiro256PlusPlus,
}

impl UniformIndex {
    /// Create a new uniform source with random seed
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a new uniform source with specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for UniformIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for UniformIndex {
    #[inline(always)]
    fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::AllPositions;
    use crate::scatter::{position_shuffle, unit_scatter};
    use crate::source::sequential::SequentialIndex;

    #[test]
    fn test_uniform_index_zero_range() {
        let mut source = UniformIndex::new();
        assert_eq!(source.next_index(0), 0);
    }

    #[test]
    fn test_single_choice_sources_agree() {
        // A lone eligible position or a one-byte table entry leaves one choice
        let mut uniform = UniformIndex::with_seed(3);
        let mut sequential = SequentialIndex::new();
        for _ in 0..20 {
            assert_eq!(uniform.next_index(1), 0);
            assert_eq!(sequential.next_index(1), 0);
        }
    }

    #[test]
    fn test_seeded_scatter_is_reproducible() {
        let wig = [7, 0, 3, 0, 0, 12, 1, 0];
        let mut source1 = UniformIndex::with_seed(12345);
        let mut source2 = UniformIndex::with_seed(12345);

        assert_eq!(
            unit_scatter(&wig, &AllPositions, &mut source1),
            unit_scatter(&wig, &AllPositions, &mut source2)
        );
        assert_eq!(
            position_shuffle(&wig, &AllPositions, &mut source1),
            position_shuffle(&wig, &AllPositions, &mut source2)
        );
    }

    #[test]
    fn test_scatter_spreads_units_evenly() {
        let mut wig = vec![0u64; 6];
        wig[0] = 6000;
        let mut source = UniformIndex::with_seed(42);

        let out = unit_scatter(&wig, &AllPositions, &mut source).unwrap();

        // Each position should get roughly 1000 units, allow 20% deviation
        for count in out {
            assert!(count > 800 && count < 1200, "position got {} units", count);
        }
    }
}
