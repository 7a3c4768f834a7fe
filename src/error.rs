//! Error types for wigperm.

use thiserror::Error;

/// Result type for randomization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while redistributing units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window start lies after its end.
    #[error("invalid window: from ({from}) must not exceed to ({to})")]
    InvalidWindow { from: isize, to: isize },

    /// The reference sequence is not position-aligned with the distribution.
    #[error("reference length {reference} does not match distribution length {distribution}")]
    LengthMismatch { distribution: usize, reference: usize },

    /// There is mass to place but nowhere to put it.
    #[error("{units} units to place but no eligible positions")]
    NoEligiblePositions { units: u64 },

    /// The eligible units do not fit in a `u64`.
    #[error("eligible mass overflows u64 at position {position}")]
    MassOverflow { position: usize },

    /// The rejection sampler gave up with units still unplaced.
    #[error(
        "placement exhausted after {tries} consecutive failed draws: {placed} placed, {remaining} remaining"
    )]
    PlacementExhausted {
        placed: u64,
        remaining: u64,
        tries: usize,
    },
}
