//! Mass-conserving redistributions
//!
//! Three ways of randomizing a wig, all sharing the same contract: the
//! output has the input's length and total, positions rejected by the
//! eligibility predicate keep their value, and no unit lands on such a
//! position. Every operation borrows its input and returns a fresh wig.
//!
//! - [`unit_scatter`]: each unit independently to a uniform eligible position
//! - [`position_shuffle`]: whole values permuted among eligible positions
//! - [`context_preserving_scatter`]: units placed where the reference bytes
//!   around the target resemble those around the sources
//!
//! # Example
//!
//! ```
//! use wigperm::eligibility::AllPositions;
//! use wigperm::scatter::{total_mass, unit_scatter};
//! use wigperm::source::uniform::UniformIndex;
//!
//! let wig = [10, 1, 2, 3];
//! let mut source = UniformIndex::with_seed(1);
//! let scattered = unit_scatter(&wig, &AllPositions, &mut source).unwrap();
//! assert_eq!(total_mass(&scattered), 16);
//! ```

pub mod context;
pub mod shuffle;
pub mod unit;

pub use context::{context_preserving_scatter, ContextScatter, DEFAULT_MAX_TRIES};
pub use shuffle::position_shuffle;
pub use unit::unit_scatter;

use crate::eligibility::Eligibility;
use crate::error::{Error, Result};

/// Sum of all values in `wig`, saturating at `u64::MAX`
///
/// Meant for inspecting results; the operations themselves reject
/// overflowing input through [`eligible_mass`].
pub fn total_mass(wig: &[u64]) -> u64 {
    wig.iter().fold(0, |acc, &v| acc.saturating_add(v))
}

/// Sum of the values at eligible positions
///
/// # Errors
///
/// [`Error::MassOverflow`] naming the first position whose units push the
/// sum past `u64::MAX`.
pub fn eligible_mass<E>(wig: &[u64], eligible: &E) -> Result<u64>
where
    E: Eligibility + ?Sized,
{
    wig.iter()
        .enumerate()
        .filter(|&(pos, &count)| count > 0 && eligible.is_eligible(pos))
        .try_fold(0u64, |acc, (position, &count)| {
            acc.checked_add(count).ok_or(Error::MassOverflow { position })
        })
}

/// Positions of `wig` accepted by `eligible`, in increasing order
pub fn eligible_positions<E>(len: usize, eligible: &E) -> Vec<usize>
where
    E: Eligibility + ?Sized,
{
    (0..len).filter(|&pos| eligible.is_eligible(pos)).collect()
}

/// Copy eligible positions of `placed` over `wig`, keeping the rest.
fn merge_eligible<E>(wig: &[u64], placed: Vec<u64>, eligible: &E) -> Vec<u64>
where
    E: Eligibility + ?Sized,
{
    wig.iter()
        .zip(placed)
        .enumerate()
        .map(|(pos, (&orig, new))| if eligible.is_eligible(pos) { new } else { orig })
        .collect()
}
