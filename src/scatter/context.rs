//! Context-preserving scatter
//!
//! Units are re-placed one at a time onto positions whose surrounding
//! reference bytes look like the bytes around the original units. The
//! per-offset byte composition around the sources is captured in a
//! [`ContentTable`]; each placement draws a candidate byte pattern from that
//! table, looks it up in the reference and puts the unit on one of the
//! matches. Patterns that do not occur, or whose chosen match lands on an
//! ineligible position, are rejected and redrawn.
//!
//! There is no closed form for where a drawn pattern occurs, so the loop is
//! bounded by a ceiling on consecutive rejections. Hitting the ceiling is a
//! hard error: a partially placed wig would not conserve mass.
//!
//! # Example
//!
//! ```
//! use wigperm::scatter::context_preserving_scatter;
//! use wigperm::source::uniform::UniformIndex;
//!
//! let wig = [10, 5, 0, 0, 0, 0];
//! let mut source = UniformIndex::with_seed(1);
//! let all = |_: usize| true;
//! let out = context_preserving_scatter(&wig, b"ACCCGT", 0, 0, &all, &mut source).unwrap();
//!
//! // Units only land on 'A' or 'C'
//! assert_eq!(out[4] + out[5], 0);
//! assert_eq!(out.iter().sum::<u64>(), 15);
//! ```

use super::{eligible_mass, merge_eligible};
use crate::config::ScatterConfig;
use crate::content::ContentTable;
use crate::eligibility::Eligibility;
use crate::error::{Error, Result};
use crate::source::IndexSource;
use crate::window::Window;
use tracing::{debug, trace, warn};

/// Consecutive rejections tolerated before giving up
pub const DEFAULT_MAX_TRIES: usize = 1000;

/// Context-preserving scatter over a fixed window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextScatter {
    window: Window,
    max_tries: usize,
}

impl ContextScatter {
    /// Scatter with the default retry ceiling
    pub fn new(window: Window) -> Self {
        Self {
            window,
            max_tries: DEFAULT_MAX_TRIES,
        }
    }

    /// Scatter using the retry ceiling from `config`
    pub fn from_config(config: &ScatterConfig, window: Window) -> Self {
        Self::new(window).with_max_tries(config.max_tries)
    }

    /// Set the number of consecutive rejections tolerated.
    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Redistribute the eligible units of `wig` over `reference`.
    ///
    /// A wig without eligible units comes back unchanged without a draw.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if `reference` and `wig` differ in length
    /// - [`Error::MassOverflow`] if the eligible units do not fit in a `u64`
    /// - [`Error::PlacementExhausted`] if `max_tries` candidates in a row are
    ///   rejected while units remain, or at once with `tries: 0` when the
    ///   window is wider than the reference and nothing could ever match
    pub fn run<E, R>(
        &self,
        wig: &[u64],
        reference: &[u8],
        eligible: &E,
        source: &mut R,
    ) -> Result<Vec<u64>>
    where
        E: Eligibility + ?Sized,
        R: IndexSource + ?Sized,
    {
        if reference.len() != wig.len() {
            return Err(Error::LengthMismatch {
                distribution: wig.len(),
                reference: reference.len(),
            });
        }

        let units = eligible_mass(wig, eligible)?;
        if units == 0 {
            return Ok(wig.to_vec());
        }

        let Some(table) = ContentTable::build(wig, reference, self.window, eligible) else {
            warn!(
                units,
                from = self.window.from(),
                to = self.window.to(),
                len = wig.len(),
                "window wider than reference"
            );
            return Err(Error::PlacementExhausted {
                placed: 0,
                remaining: units,
                tries: 0,
            });
        };
        debug!(
            units,
            from = self.window.from(),
            to = self.window.to(),
            len = wig.len(),
            "scattering units by context"
        );

        let mut placed = vec![0u64; wig.len()];
        let mut remaining = units;
        let mut tries = 0usize;

        while remaining > 0 && tries < self.max_tries {
            let pattern = table.draw_pattern(source);
            let matches = pattern.find_all(reference);
            if matches.is_empty() {
                trace!(%pattern, "pattern absent from reference");
                tries += 1;
                continue;
            }

            let start = matches[source.next_index(matches.len())];
            match self.window.anchor(start, wig.len()) {
                Some(pos) if eligible.is_eligible(pos) => {
                    placed[pos] += 1;
                    remaining -= 1;
                    tries = 0;
                }
                target => {
                    trace!(%pattern, start, ?target, "match rejected");
                    tries += 1;
                }
            }
        }

        if remaining > 0 {
            warn!(placed = units - remaining, remaining, tries, "retry ceiling reached");
            return Err(Error::PlacementExhausted {
                placed: units - remaining,
                remaining,
                tries,
            });
        }

        Ok(merge_eligible(wig, placed, eligible))
    }
}

/// Redistribute the eligible units of `wig` keeping the byte context of
/// `reference` in the window `[from, to]` around each unit.
///
/// Uses [`DEFAULT_MAX_TRIES`] as the retry ceiling; see [`ContextScatter`]
/// to change it.
///
/// # Errors
///
/// [`Error::InvalidWindow`] when `from > to`, otherwise as
/// [`ContextScatter::run`]. Both precondition errors are raised before any
/// draw is made.
pub fn context_preserving_scatter<E, R>(
    wig: &[u64],
    reference: &[u8],
    from: isize,
    to: isize,
    eligible: &E,
    source: &mut R,
) -> Result<Vec<u64>>
where
    E: Eligibility + ?Sized,
    R: IndexSource + ?Sized,
{
    let window = Window::new(from, to)?;
    ContextScatter::new(window).run(wig, reference, eligible, source)
}
