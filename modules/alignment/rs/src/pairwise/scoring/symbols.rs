use std::marker::PhantomData;
use std::sync::Arc;

use eyre::{eyre, Result};

use cooptimal_core_rs::Alphabet;

use crate::pairwise::scoring::Score;

pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;
}

pub trait PosInvariantScorer {
    type SymScore: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::SymScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Self::Symbol, _: usize, s2: &Self::Symbol) -> Self::Score {
        PosInvariantScorer::score(self, s1, s2)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> PosInvariantScorer for Equality<S, Symbol> {
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        if a == b { self.equal } else { self.different }
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

/// Substitution scores for every pair of codes from two alphabets.
/// Scores are stored row-major: one row per symbol of the first alphabet.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SubstitutionMatrix<S: Score> {
    alphabet1: Arc<Alphabet>,
    alphabet2: Arc<Alphabet>,
    scores: Vec<S>,
}

impl<S: Score> SubstitutionMatrix<S> {
    pub fn new(alphabet1: Arc<Alphabet>, alphabet2: Arc<Alphabet>, scores: Vec<S>) -> Result<Self> {
        let expected = alphabet1.len() * alphabet2.len();
        if scores.len() != expected {
            return Err(eyre!(
                "Substitution matrix for alphabets {} and {} must contain {} scores, got {}",
                alphabet1,
                alphabet2,
                expected,
                scores.len()
            ));
        }
        Ok(Self {
            alphabet1,
            alphabet2,
            scores,
        })
    }

    /// Build the matrix by evaluating `f` on every pair of symbols (not codes).
    pub fn from_fn(
        alphabet1: Arc<Alphabet>,
        alphabet2: Arc<Alphabet>,
        mut f: impl FnMut(u8, u8) -> S,
    ) -> Self {
        let mut scores = Vec::with_capacity(alphabet1.len() * alphabet2.len());
        for a in alphabet1.symbols() {
            for b in alphabet2.symbols() {
                scores.push(f(*a, *b));
            }
        }
        Self {
            alphabet1,
            alphabet2,
            scores,
        }
    }

    pub fn identity(alphabet: Arc<Alphabet>, equal: S, different: S) -> Self {
        Self::from_fn(alphabet.clone(), alphabet, |a, b| {
            if a == b { equal } else { different }
        })
    }

    pub fn alphabet1(&self) -> &Arc<Alphabet> {
        &self.alphabet1
    }

    pub fn alphabet2(&self) -> &Arc<Alphabet> {
        &self.alphabet2
    }

    /// Codes must belong to the matrix alphabets, see [`super::validate`].
    #[inline(always)]
    pub fn score_by_code(&self, code1: u8, code2: u8) -> S {
        self.scores[code1 as usize * self.alphabet2.len() + code2 as usize]
    }
}

impl<S: Score> PosInvariantScorer for SubstitutionMatrix<S> {
    type SymScore = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore {
        self.score_by_code(*s1, *s2)
    }
}
