use derive_getters::{Dissolve, Getters};

use cooptimal_core_rs::Alignable;

use super::{Column, Op, Step};

/// One co-optimal global alignment of two borrowed sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<'a, Seq1, Seq2, Score> {
    #[getter(skip)]
    seq1: &'a Seq1,
    #[getter(skip)]
    seq2: &'a Seq2,
    columns: Vec<Column>,
    score: Score,
}

impl<'a, Seq1, Seq2, Score> Alignment<'a, Seq1, Seq2, Score> {
    pub fn new(seq1: &'a Seq1, seq2: &'a Seq2, columns: Vec<Column>, score: Score) -> Self {
        Self {
            seq1,
            seq2,
            columns,
            score,
        }
    }

    pub fn seq1(&self) -> &'a Seq1 {
        self.seq1
    }

    pub fn seq2(&self) -> &'a Seq2 {
        self.seq2
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Only two empty sequences produce an empty alignment.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Aligned positions of the first sequence, gaps excluded.
    pub fn seq1_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.iter().filter_map(|x| x.seq1)
    }

    /// Aligned positions of the second sequence, gaps excluded.
    pub fn seq2_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.iter().filter_map(|x| x.seq2)
    }
}

impl<Seq1, Seq2, Score, Symbol> Alignment<'_, Seq1, Seq2, Score>
where
    Seq1: Alignable<Symbol = Symbol>,
    Seq2: Alignable<Symbol = Symbol>,
    Symbol: PartialEq,
{
    /// Run-length encoded alignment operations. Match/mismatch is decided by symbol equality.
    pub fn steps(&self) -> Vec<Step<usize>> {
        let mut steps: Vec<_> = self
            .columns
            .iter()
            .filter_map(|column| {
                Op::classify(column, |s1, s2| self.seq1.at(s1) == self.seq2.at(s2))
            })
            .map(Step::unit)
            .collect();
        Step::collapse(&mut steps);
        steps
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1v2X`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps().iter())
    }
}
