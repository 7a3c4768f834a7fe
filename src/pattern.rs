//! Wildcard byte patterns
//!
//! A [`Pattern`] is a fixed-length sequence of byte slots, each either a
//! literal byte or a wildcard that matches any single byte. Matching is
//! literal: bytes that would be special in a regular expression (`.`, `*`,
//! ...) match only themselves.

use std::fmt;

/// Fixed-length byte pattern with single-byte wildcards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

impl Pattern {
    /// Build a pattern from slots, `None` being a wildcard.
    pub fn new(slots: Vec<Option<u8>>) -> Self {
        Self { slots }
    }

    /// Pattern matching exactly `bytes`.
    pub fn literal(bytes: &[u8]) -> Self {
        Self {
            slots: bytes.iter().copied().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Whether the pattern matches `candidate`, which must be the same length.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        candidate.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(candidate)
                .all(|(slot, &b)| slot.map_or(true, |want| want == b))
    }

    /// Start offsets of every match in `haystack`, overlapping ones included.
    ///
    /// An empty pattern matches nowhere.
    pub fn find_all(&self, haystack: &[u8]) -> Vec<usize> {
        if self.slots.is_empty() || self.slots.len() > haystack.len() {
            return Vec::new();
        }

        // Anchor on the first literal slot to skip hopeless starts quickly.
        let anchor = self
            .slots
            .iter()
            .enumerate()
            .find_map(|(k, slot)| slot.map(|b| (k, b)));

        haystack
            .windows(self.slots.len())
            .enumerate()
            .filter(|(_, candidate)| match anchor {
                Some((k, b)) => candidate[k] == b && self.matches(candidate),
                None => true,
            })
            .map(|(start, _)| start)
            .collect()
    }
}

impl fmt::Display for Pattern {
    /// Renders literals as ASCII where printable and wildcards as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(b) if b.is_ascii_graphic() => write!(f, "{}", *b as char)?,
                Some(b) => write!(f, "\\x{:02x}", b)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
