//! Independent per-unit scatter

use super::{eligible_mass, eligible_positions, merge_eligible};
use crate::eligibility::Eligibility;
use crate::error::{Error, Result};
use crate::source::IndexSource;
use tracing::debug;

/// Reassign every unit of the eligible positions to a uniformly random
/// eligible position, independently of the other units.
///
/// Consumes exactly one draw per unit. Ineligible positions are copied
/// through unchanged.
///
/// # Errors
///
/// - [`Error::MassOverflow`] if the eligible units do not fit in a `u64`
/// - [`Error::NoEligiblePositions`] if there are units to place and no
///   eligible position to receive them. A wig with nothing eligible carries
///   no eligible mass, so it comes back unchanged.
pub fn unit_scatter<E, R>(wig: &[u64], eligible: &E, source: &mut R) -> Result<Vec<u64>>
where
    E: Eligibility + ?Sized,
    R: IndexSource + ?Sized,
{
    let units = eligible_mass(wig, eligible)?;
    let valids = eligible_positions(wig.len(), eligible);

    if units > 0 && valids.is_empty() {
        return Err(Error::NoEligiblePositions { units });
    }

    debug!(units, eligible = valids.len(), len = wig.len(), "scattering units");

    let mut placed = vec![0u64; wig.len()];
    for _ in 0..units {
        let k = source.next_index(valids.len());
        placed[valids[k]] += 1;
    }

    Ok(merge_eligible(wig, placed, eligible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::AllPositions;
    use crate::scatter::total_mass;
    use crate::source::sequential::SequentialIndex;
    use crate::source::uniform::UniformIndex;

    #[test]
    fn test_unit_scatter_conserves_mass() {
        let wig = [10, 5, 0, 0, 0, 0];
        let mut source = UniformIndex::with_seed(1);

        let out = unit_scatter(&wig, &AllPositions, &mut source).unwrap();
        assert_eq!(out.len(), wig.len());
        assert_eq!(total_mass(&out), 15);
    }

    #[test]
    fn test_unit_scatter_sequential() {
        let wig = [10, 5, 0, 0, 0, 0];
        let mut source = SequentialIndex::new();

        let out = unit_scatter(&wig, &AllPositions, &mut source).unwrap();
        assert_eq!(out, vec![3, 3, 3, 2, 2, 2]);
    }

    #[test]
    fn test_unit_scatter_restricted() {
        let wig = [10, 5, 0, 0, 0, 0];
        let mut source = UniformIndex::with_seed(1);

        let out = unit_scatter(&wig, &|i: usize| i <= 1, &mut source).unwrap();
        assert_eq!(out[0] + out[1], 15);
        assert_eq!(&out[2..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_unit_scatter_keeps_ineligible() {
        let wig = [4, 7, 0, 9, 1, 0];
        let mut source = UniformIndex::with_seed(99);
        let odd = |i: usize| i % 2 == 1;

        let out = unit_scatter(&wig, &odd, &mut source).unwrap();
        assert_eq!(out[0], 4);
        assert_eq!(out[2], 0);
        assert_eq!(out[4], 1);
        assert_eq!(out[1] + out[3] + out[5], 16);
    }

    #[test]
    fn test_unit_scatter_single_eligible() {
        let wig = [2, 8, 3, 0];
        let mut source = UniformIndex::with_seed(5);

        let out = unit_scatter(&wig, &|i: usize| i == 3, &mut source).unwrap();
        assert_eq!(out, vec![2, 8, 3, 0]);

        let out = unit_scatter(&wig, &|i: usize| i == 1, &mut source).unwrap();
        assert_eq!(out, vec![2, 8, 3, 0]);
    }

    #[test]
    fn test_unit_scatter_nothing_eligible() {
        let wig = [10, 5, 0];
        let mut source = UniformIndex::with_seed(5);

        let out = unit_scatter(&wig, &|_: usize| false, &mut source).unwrap();
        assert_eq!(out, wig.to_vec());
    }

    #[test]
    fn test_unit_scatter_mass_overflow() {
        let wig = [u64::MAX, 1, 0];
        let mut source = SequentialIndex::new();

        let err = unit_scatter(&wig, &AllPositions, &mut source).unwrap_err();
        assert_eq!(err, Error::MassOverflow { position: 1 });
    }

    #[test]
    fn test_unit_scatter_empty() {
        let mut source = UniformIndex::with_seed(5);
        let out = unit_scatter(&[], &AllPositions, &mut source).unwrap();
        assert!(out.is_empty());
    }
}
