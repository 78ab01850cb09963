use super::Column;

/// `Op` represents the kind of a single alignment column.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A symbol of the first sequence aligned against a gap (v)
    GapFirst,
    /// A symbol of the second sequence aligned against a gap (^)
    GapSecond,
    /// Identical symbols (=)
    Match,
    /// Different symbols (X)
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement in the alignment matrix.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Classify an alignment column. `identical` is only consulted for paired columns.
    pub fn classify(column: &Column, identical: impl FnOnce(usize, usize) -> bool) -> Option<Op> {
        match (column.seq1, column.seq2) {
            (Some(s1), Some(s2)) => Some(if identical(s1, s2) {
                Op::Match
            } else {
                Op::Mismatch
            }),
            (Some(_), None) => Some(Op::GapFirst),
            (None, Some(_)) => Some(Op::GapSecond),
            (None, None) => None,
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
