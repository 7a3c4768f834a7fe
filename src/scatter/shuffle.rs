//! Joint per-position shuffle

use crate::eligibility::Eligibility;
use crate::source::IndexSource;
use tracing::debug;

/// Permute the values of the eligible positions uniformly at random.
///
/// Runs an inside-out Fisher–Yates over the eligible subsequence in
/// increasing position order: each newly seen eligible position swaps its
/// value with a uniformly chosen eligible position seen so far, itself
/// included. Consumes one draw per eligible position.
///
/// Ineligible positions are never read or written. With at most one
/// eligible position the output equals the input. Nothing can fail, so the
/// result is returned directly.
pub fn position_shuffle<E, R>(wig: &[u64], eligible: &E, source: &mut R) -> Vec<u64>
where
    E: Eligibility + ?Sized,
    R: IndexSource + ?Sized,
{
    let mut out = wig.to_vec();
    let mut valids = Vec::new();

    for pos in 0..out.len() {
        if !eligible.is_eligible(pos) {
            continue;
        }
        valids.push(pos);
        let k = source.next_index(valids.len());
        out.swap(pos, valids[k]);
    }

    debug!(eligible = valids.len(), len = wig.len(), "shuffled positions");
    out
}
