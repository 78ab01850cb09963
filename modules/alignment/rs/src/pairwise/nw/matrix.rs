use derive_getters::{Dissolve, Getters};
use derive_more::{BitAnd, BitOr, BitOrAssign};

use cooptimal_core_rs::Alignable;

use crate::pairwise::scoring::{gaps, symbols, Score};

/// Predecessor directions of a DP cell. Several bits are set when directions tie.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default, BitOr, BitAnd, BitOrAssign)]
pub struct Trace(u8);

impl Trace {
    /// Border cell, the traceback stops here
    pub const NONE: Trace = Trace(0);
    /// Symbols of both sequences are aligned: (i-1, j-1)
    pub const DIAGONAL: Trace = Trace(1);
    /// Symbol of the second sequence is aligned against a gap: (i, j-1)
    pub const LEFT: Trace = Trace(2);
    /// Symbol of the first sequence is aligned against a gap: (i-1, j)
    pub const UP: Trace = Trace(4);

    #[inline(always)]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn has(self, direction: Trace) -> bool {
        self.0 & direction.0 != 0
    }

    /// Predecessor cells in the fixed priority order: diagonal, left, up.
    pub fn predecessors(self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        // Wrapping is harmless: the border cells have no bits set
        [
            (Trace::DIAGONAL, (row.wrapping_sub(1), col.wrapping_sub(1))),
            (Trace::LEFT, (row, col.wrapping_sub(1))),
            (Trace::UP, (row.wrapping_sub(1), col)),
        ]
        .into_iter()
        .filter(move |(direction, _)| self.has(*direction))
        .map(|(_, cell)| cell)
    }
}

/// Dense row-major DP matrix.
#[derive(Clone, Eq, PartialEq, Debug, Dissolve)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

pub type ScoreMatrix<S> = Matrix<S>;
pub type TraceMatrix = Matrix<Trace>;

/// Score and trace matrices of size (len(seq1) + 1) x (len(seq2) + 1).
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Tables<S: Score> {
    scores: ScoreMatrix<S>,
    trace: TraceMatrix,
}

impl<S: Score> Tables<S> {
    /// Score of the global alignment, i.e. the bottom-right cell.
    pub fn optimum(&self) -> S {
        self.scores.at(self.scores.rows() - 1, self.scores.cols() - 1)
    }
}

/// Fill the DP matrices for the global alignment of `seq1` (rows) and `seq2` (columns).
///
/// Borders cost one unit per skipped symbol regardless of the gap penalties. Inside the matrix
/// a gap move extends the gap if the predecessor cell itself was reached by the same move and
/// opens a new gap otherwise. All moves reaching the maximum are recorded in the trace.
pub fn fill<S, Sym, Seq1, Seq2, Symbols, Gaps>(
    seq1: &Seq1,
    seq2: &Seq2,
    symbols: &Symbols,
    gaps: &Gaps,
) -> Tables<S>
where
    S: Score,
    Seq1: Alignable<Symbol = Sym> + ?Sized,
    Seq2: Alignable<Symbol = Sym> + ?Sized,
    Symbols: symbols::Scorer<Score = S, Symbol = Sym>,
    Gaps: gaps::Scorer<Score = S>,
{
    let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
    let mut scores = Matrix::new(rows, cols, S::zero());
    let mut trace = Matrix::new(rows, cols, Trace::NONE);

    let mut border = S::zero();
    for row in 1..rows {
        border = border - S::one();
        scores.set(row, 0, border);
    }
    border = S::zero();
    for col in 1..cols {
        border = border - S::one();
        scores.set(0, col, border);
    }

    for row in 1..rows {
        let s1 = seq1.at(row - 1);
        for col in 1..cols {
            let s2 = seq2.at(col - 1);

            let diagonal = scores.at(row - 1, col - 1) + symbols.score(row - 1, s1, col - 1, s2);

            let left = scores.at(row, col - 1)
                + if trace.at(row, col - 1).has(Trace::LEFT) {
                    gaps.seq2_gap_extend(col - 1)
                } else {
                    gaps.seq2_gap_open(col - 1)
                };

            let up = scores.at(row - 1, col)
                + if trace.at(row - 1, col).has(Trace::UP) {
                    gaps.seq1_gap_extend(row - 1)
                } else {
                    gaps.seq1_gap_open(row - 1)
                };

            let (direction, score) = best(diagonal, left, up);
            scores.set(row, col, score);
            trace.set(row, col, direction);
        }
    }

    Tables { scores, trace }
}

/// The maximum of the three candidate scores and every direction that reaches it.
#[inline(always)]
fn best<S: Score>(diagonal: S, left: S, up: S) -> (Trace, S) {
    let score = diagonal.max(left).max(up);

    let mut direction = Trace::NONE;
    if diagonal == score {
        direction |= Trace::DIAGONAL;
    }
    if left == score {
        direction |= Trace::LEFT;
    }
    if up == score {
        direction |= Trace::UP;
    }
    (direction, score)
}
