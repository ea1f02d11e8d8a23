use std::ops::Range;

use crate::chess::census::PieceCensus;
use crate::chess::piece::PieceKind;

/// A fixed list of piece kinds ("slots") plus contiguous ranges of identical pieces.
///
/// Slots are ordered by decreasing [`PieceKind::weight`], so pieces covering the most
/// squares are placed first. Identical pieces stay contiguous, which is what lets the
/// permutation generator keep each run non-decreasing instead of deduplicating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceLayout {
    kinds: Vec<PieceKind>,
    identical_runs: Vec<Range<usize>>,
}

impl PieceLayout {
    pub fn from_census(census: &PieceCensus) -> Self {
        let mut order: Vec<PieceKind> = PieceKind::ALL.to_vec();
        order.sort_by_key(|k| std::cmp::Reverse(k.weight()));

        let mut kinds = Vec::with_capacity(census.total());
        for kind in order {
            kinds.extend(std::iter::repeat(kind).take(census.count(kind)));
        }

        let identical_runs = compute_runs(&kinds);

        Self {
            kinds,
            identical_runs,
        }
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn kinds(&self) -> &[PieceKind] {
        &self.kinds
    }

    #[inline]
    pub fn identical_runs(&self) -> &[Range<usize>] {
        &self.identical_runs
    }
}

fn compute_runs(kinds: &[PieceKind]) -> Vec<Range<usize>> {
    if kinds.is_empty() {
        return Vec::new();
    }

    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=kinds.len() {
        if i == kinds.len() || kinds[i] != kinds[start] {
            runs.push(start..i);
            start = i;
        }
    }
    runs
}
