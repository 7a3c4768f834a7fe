//! wigperm - Mass-conserving randomization of wigs
//!
//! A wig is a fixed-length array of non-negative unit counts, one per
//! position (mutations per base, reads per bin, ...). wigperm builds null
//! models for such arrays by moving units around while keeping the total
//! mass exactly.
//!
//! # Architecture
//!
//! - **Randomizers**: per-unit scatter, per-position shuffle, and a
//!   context-preserving scatter driven by a reference byte sequence
//! - **Eligibility**: closures restrict which positions take part
//! - **Explicit randomness**: every operation takes an owned index source,
//!   seeded or from entropy
//! - **Configuration**: retry ceiling and seed from TOML
//!
//! # Example
//!
//! ```
//! use wigperm::eligibility::AllPositions;
//! use wigperm::scatter::position_shuffle;
//! use wigperm::source::uniform::UniformIndex;
//!
//! let wig = [10, 1, 2, 3];
//! let mut source = UniformIndex::with_seed(1);
//! let mut shuffled = position_shuffle(&wig, &AllPositions, &mut source);
//! shuffled.sort_unstable();
//! assert_eq!(shuffled, vec![1, 2, 3, 10]);
//! ```

pub mod config;
pub mod content;
pub mod eligibility;
pub mod error;
pub mod pattern;
pub mod scatter;
pub mod source;
pub mod window;

// Re-export commonly used types
pub use config::ScatterConfig;
pub use eligibility::{AllPositions, Eligibility};
pub use error::{Error, Result};
pub use scatter::{context_preserving_scatter, position_shuffle, unit_scatter, ContextScatter};
pub use source::IndexSource;
pub use window::Window;
