//! Content tables
//!
//! A [`ContentTable`] records, for each offset of a window, the bytes found
//! at that offset around every eligible source position, one copy per unit.
//! Drawing a byte uniformly from an offset's entry therefore samples the
//! unit-weighted byte composition at that offset.

use crate::eligibility::Eligibility;
use crate::pattern::Pattern;
use crate::source::IndexSource;
use crate::window::Window;
use std::collections::BTreeMap;

/// Per-offset multiset of bytes observed around source positions
#[derive(Debug, Clone)]
pub struct ContentTable {
    window: Window,
    /// Entry `k` holds the bytes seen at offset `window.from() + k`.
    entries: Vec<Vec<u8>>,
    /// Units contributed by eligible source positions
    units: u64,
}

impl ContentTable {
    /// Collect the table for `wig` over `reference`.
    ///
    /// Positions with no units or failing `eligible` contribute nothing.
    /// Offsets that fall outside the reference are skipped for that
    /// position. Both slices must have the same length.
    ///
    /// Returns `None` when the window is wider than the reference: no
    /// pattern drawn from such a table could ever match.
    pub fn build<E>(wig: &[u64], reference: &[u8], window: Window, eligible: &E) -> Option<Self>
    where
        E: Eligibility + ?Sized,
    {
        if !window.fits(reference.len()) {
            return None;
        }

        let mut entries = vec![Vec::new(); window.width()?];
        let mut units = 0u64;

        for (pos, &count) in wig.iter().enumerate() {
            if count == 0 || !eligible.is_eligible(pos) {
                continue;
            }
            for (entry, offset) in entries.iter_mut().zip(window.offsets()) {
                if let Some(idx) = Window::resolve(pos, offset, reference.len()) {
                    let byte = reference[idx];
                    entry.extend(std::iter::repeat(byte).take(count as usize));
                }
            }
            units = units.saturating_add(count);
        }

        Some(Self {
            window,
            entries,
            units,
        })
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Total units that fed the table
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Bytes recorded at `offset`, empty when nothing was observed there
    /// or the offset lies outside the window.
    pub fn at(&self, offset: isize) -> &[u8] {
        offset
            .checked_sub(self.window.from())
            .and_then(|k| usize::try_from(k).ok())
            .and_then(|k| self.entries.get(k))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Draw a candidate pattern, one slot per window offset.
    ///
    /// Offsets with an empty entry become wildcards and consume no draw.
    pub fn draw_pattern<R>(&self, source: &mut R) -> Pattern
    where
        R: IndexSource + ?Sized,
    {
        let slots = self
            .entries
            .iter()
            .map(|entry| {
                if entry.is_empty() {
                    None
                } else {
                    Some(entry[source.next_index(entry.len())])
                }
            })
            .collect();
        Pattern::new(slots)
    }

    /// Whether `context` could have been drawn from this table.
    ///
    /// Every byte must appear in its offset's entry unless that entry is
    /// empty (a wildcard slot).
    pub fn admits(&self, context: &[u8]) -> bool {
        context.len() == self.entries.len()
            && self
                .entries
                .iter()
                .zip(context)
                .all(|(entry, b)| entry.is_empty() || entry.contains(b))
    }
}

/// Units per reference byte: the mass of `wig` grouped by the byte found at
/// each position.
pub fn byte_composition(wig: &[u64], reference: &[u8]) -> BTreeMap<u8, u64> {
    let mut composition = BTreeMap::new();
    for (&count, &byte) in wig.iter().zip(reference) {
        if count > 0 {
            *composition.entry(byte).or_insert(0) += count;
        }
    }
    composition
}
