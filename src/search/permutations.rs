//! Depth-first enumeration of piece placements with subtree skipping.
//!
//! Positions are counted like an odometer: slot `k` holds the square of the `k`-th piece of a
//! [`PieceLayout`], the deepest slot turns fastest, and every slot ranges over
//! `0..range_size`. Within a run of identical pieces the squares are kept non-decreasing, so
//! each unordered placement of identical pieces is produced exactly once.
//!
//! [`Permutations::skip_branch`] abandons every permutation sharing the current prefix up to
//! a depth. It pushes all deeper slots to their maximum, so the following increment carries
//! straight into the prefix and lands on the first permutation of the next sibling subtree.

use crate::chess::layout::PieceLayout;
use crate::chess::piece::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Nothing produced yet.
    Fresh,
    /// `indexes` holds the last permutation returned.
    Active,
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Permutations {
    kinds: Vec<PieceKind>,
    /// `same_as_next[k]` is true when slot `k + 1` holds the same kind as slot `k`.
    same_as_next: Vec<bool>,
    range_size: usize,
    indexes: Vec<usize>,
    cursor: Cursor,
}

impl Permutations {
    pub fn new(layout: &PieceLayout, range_size: usize) -> Self {
        let depth = layout.piece_count();
        let mut same_as_next = vec![false; depth.saturating_sub(1)];
        for run in layout.identical_runs() {
            for k in run.start..run.end - 1 {
                same_as_next[k] = true;
            }
        }

        Self {
            kinds: layout.kinds().to_vec(),
            same_as_next,
            range_size,
            indexes: vec![0; depth],
            cursor: if range_size == 0 {
                Cursor::Exhausted
            } else {
                Cursor::Fresh
            },
        }
    }

    #[inline]
    pub fn kinds(&self) -> &[PieceKind] {
        &self.kinds
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn range_size(&self) -> usize {
        self.range_size
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// Advance to the next permutation, or `None` once the space is exhausted.
    ///
    /// The returned slice is indexed like [`Permutations::kinds`].
    pub fn try_next(&mut self) -> Option<&[usize]> {
        match self.cursor {
            Cursor::Exhausted => return None,
            Cursor::Fresh => {
                self.indexes.fill(0);
                self.cursor = Cursor::Active;
            }
            Cursor::Active => {
                if self.is_last() {
                    self.cursor = Cursor::Exhausted;
                    return None;
                }
                self.increment();
            }
        }
        Some(self.indexes.as_slice())
    }

    /// Abandon every permutation sharing the current prefix `indexes[..=level]`.
    ///
    /// Slots at `level` and above are untouched, so no sibling at depth `<= level` is lost.
    pub fn skip_branch(&mut self, level: usize) {
        if self.cursor != Cursor::Active {
            return;
        }
        let max = self.range_size - 1;
        for i in (level + 1)..self.depth() {
            self.indexes[i] = max;
        }
    }

    fn is_last(&self) -> bool {
        let max = self.range_size - 1;
        self.indexes.iter().all(|&i| i == max)
    }

    fn increment(&mut self) {
        // Increment from the deepest slot, carrying upwards on overflow.
        for slot in (0..self.depth()).rev() {
            self.indexes[slot] += 1;
            if self.indexes[slot] < self.range_size {
                break;
            }
            self.indexes[slot] = 0;
        }

        // Keep identical runs non-decreasing. Left-to-right, so a raised slot propagates.
        for k in 0..self.same_as_next.len() {
            if self.same_as_next[k] && self.indexes[k] > self.indexes[k + 1] {
                self.indexes[k + 1] = self.indexes[k];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::census::PieceCensus;

    fn drain(gen: &mut Permutations) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        while let Some(p) = gen.try_next() {
            out.push(p.to_vec());
        }
        out
    }

    #[test]
    fn single_piece_walks_the_range() {
        let layout = PieceLayout::from_census(&PieceCensus::new().with_kings(1));
        let mut gen = Permutations::new(&layout, 3);
        assert_eq!(drain(&mut gen), vec![vec![0], vec![1], vec![2]]);
        assert!(gen.is_exhausted());
        assert_eq!(gen.try_next(), None);
    }

    #[test]
    fn identical_pieces_are_combinations() {
        let layout = PieceLayout::from_census(&PieceCensus::new().with_rooks(2));
        let mut gen = Permutations::new(&layout, 3);
        assert_eq!(
            drain(&mut gen),
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2],
            ]
        );
    }

    #[test]
    fn empty_range_is_exhausted_immediately() {
        let layout = PieceLayout::from_census(&PieceCensus::new().with_kings(1));
        let mut gen = Permutations::new(&layout, 0);
        assert_eq!(gen.try_next(), None);
    }

    #[test]
    fn skip_at_deepest_level_is_a_no_op() {
        let layout = PieceLayout::from_census(&PieceCensus::new().with_queens(1).with_rooks(1));
        let mut gen = Permutations::new(&layout, 2);
        assert_eq!(gen.try_next(), Some(&[0, 0][..]));
        gen.skip_branch(1);
        assert_eq!(gen.try_next(), Some(&[0, 1][..]));
        gen.skip_branch(0);
        assert_eq!(gen.try_next(), Some(&[1, 0][..]));
    }
}
