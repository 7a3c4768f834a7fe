//! Random index sources
//!
//! Every randomization in this crate consumes uniformly distributed indices
//! through the [`IndexSource`] trait. Sources are owned by the caller and
//! passed explicitly into each operation, so a fixed seed reproduces a run
//! exactly and independent instances can be used side by side.
//!
//! # Sources
//!
//! - **Uniform**: xoshiro256++ backed, entropy or fixed seed
//! - **Sequential**: deterministic round robin, for reproducible tests
//!
//! # Example
//!
//! ```
//! use wigperm::source::{IndexSource, uniform::UniformIndex};
//!
//! let mut source = UniformIndex::with_seed(7);
//! let idx = source.next_index(6); // Random index in range [0, 6)
//! assert!(idx < 6);
//! ```

/// Source of uniformly distributed indices
///
/// # Thread Safety
///
/// Sources must be `Send` so they can be moved into the thread that owns a
/// redistribution. A single instance is not meant to be shared between
/// concurrent operations; give each one its own source.
pub trait IndexSource: Send {
    /// Generate next index within range
    ///
    /// Returns an index in the range [0, n). Implementations return 0 when
    /// `n` is 0; callers never rely on that value.
    fn next_index(&mut self, n: usize) -> usize;
}

pub mod sequential;
pub mod uniform;
