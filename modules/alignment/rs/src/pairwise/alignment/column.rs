use derive_getters::Dissolve;
use derive_more::{Constructor, From, Into};

/// A single alignment column: positions of the aligned symbols in both sequences.
/// `None` marks a gap on the corresponding side. Columns with two gaps are never produced.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Constructor, Dissolve, From, Into,
)]
pub struct Column {
    pub seq1: Option<usize>,
    pub seq2: Option<usize>,
}

impl Column {
    pub fn paired(seq1: usize, seq2: usize) -> Self {
        Self {
            seq1: Some(seq1),
            seq2: Some(seq2),
        }
    }

    /// Symbol of the first sequence aligned against a gap
    pub fn only_seq1(seq1: usize) -> Self {
        Self {
            seq1: Some(seq1),
            seq2: None,
        }
    }

    /// Symbol of the second sequence aligned against a gap
    pub fn only_seq2(seq2: usize) -> Self {
        Self {
            seq1: None,
            seq2: Some(seq2),
        }
    }

    pub fn is_gap(&self) -> bool {
        self.seq1.is_none() || self.seq2.is_none()
    }

    /// The same column with the roles of the sequences swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            seq1: self.seq2,
            seq2: self.seq1,
        }
    }
}
