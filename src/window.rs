//! Context windows
//!
//! A [`Window`] is a closed range of signed offsets `[from, to]` around a
//! position. `Window::new(-1, 1)` covers the byte before, at and after a
//! position; `Window::new(0, 0)` covers the position alone.

use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Closed interval of offsets relative to a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    from: isize,
    to: isize,
}

impl Window {
    /// Create a window, rejecting `from > to`.
    pub fn new(from: isize, to: isize) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// Window covering only the position itself
    pub fn point() -> Self {
        Self { from: 0, to: 0 }
    }

    pub fn from(&self) -> isize {
        self.from
    }

    pub fn to(&self) -> isize {
        self.to
    }

    /// Number of offsets in the window, `None` if it does not fit a `usize`
    pub fn width(&self) -> Option<usize> {
        self.to.abs_diff(self.from).checked_add(1)
    }

    /// Whether the whole window can lie inside a sequence of `len` bytes
    pub fn fits(&self, len: usize) -> bool {
        self.width().is_some_and(|width| width <= len)
    }

    pub fn offsets(&self) -> RangeInclusive<isize> {
        self.from..=self.to
    }

    /// Absolute index of `pos + offset`, if it falls inside `[0, len)`.
    pub fn resolve(pos: usize, offset: isize, len: usize) -> Option<usize> {
        pos.checked_add_signed(offset).filter(|&idx| idx < len)
    }

    /// Position whose window starts at `start`, if it is a valid index.
    pub fn anchor(&self, start: usize, len: usize) -> Option<usize> {
        Self::resolve(start, self.from.checked_neg()?, len)
    }

    /// Bytes of `reference` covered by the window around `pos`.
    ///
    /// Returns `None` when any part of the window falls outside the
    /// reference.
    pub fn context<'a>(&self, reference: &'a [u8], pos: usize) -> Option<&'a [u8]> {
        let start = Self::resolve(pos, self.from, reference.len())?;
        let end = Self::resolve(pos, self.to, reference.len())?;
        Some(&reference[start..=end])
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::point()
    }
}
