use derive_more::Constructor;

use crate::pairwise::scoring::Score;

// Gap scoring function MUST be additive
// `pos` is the position of the symbol aligned against the gap
pub trait Scorer {
    type Score: Score;

    fn seq1_gap_open(&self, pos: usize) -> Self::Score;
    fn seq1_gap_extend(&self, pos: usize) -> Self::Score;

    fn seq2_gap_open(&self, pos: usize) -> Self::Score;
    fn seq2_gap_extend(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap_open(&self) -> Self::GapScore;
    fn gap_extend(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap_open(&self, _: usize) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self, _: usize) -> Self::Score {
        self.gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self, _: usize) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self, _: usize) -> Self::Score {
        self.gap_extend()
    }
}

/// Affine gap penalties. Both values are expected to be non-positive, `open <= extend` is usual
/// but not enforced.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> Default for Affine<S> {
    /// Gap opening -3, gap extension -1.
    fn default() -> Self {
        let one = S::one();
        Self {
            open: -(one + one + one),
            extend: -one,
        }
    }
}

impl<S: Score> PosInvariantScorer for Affine<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::GapScore {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::GapScore {
        self.extend
    }
}
