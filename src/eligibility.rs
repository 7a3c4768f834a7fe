//! Eligibility predicates
//!
//! A predicate decides which wig positions take part in a redistribution.
//! Ineligible positions are neither read as sources nor written as
//! destinations; their values pass through unchanged.
//!
//! Any `Fn(usize) -> bool` closure is a predicate. [`AllPositions`] admits
//! everything, and `Option<E>` treats `None` as "no predicate".
//!
//! Predicates are evaluated many times per call and must answer the same way
//! for the same position every time.

/// Per-position participation test
pub trait Eligibility {
    /// Whether `pos` may give and receive units
    fn is_eligible(&self, pos: usize) -> bool;
}

impl<F> Eligibility for F
where
    F: Fn(usize) -> bool + ?Sized,
{
    #[inline]
    fn is_eligible(&self, pos: usize) -> bool {
        self(pos)
    }
}

/// Predicate that admits every position
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllPositions;

impl Eligibility for AllPositions {
    #[inline]
    fn is_eligible(&self, _pos: usize) -> bool {
        true
    }
}

impl<E: Eligibility> Eligibility for Option<E> {
    #[inline]
    fn is_eligible(&self, pos: usize) -> bool {
        match self {
            Some(inner) => inner.is_eligible(pos),
            None => true,
        }
    }
}
