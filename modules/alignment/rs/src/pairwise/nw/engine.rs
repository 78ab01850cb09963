use derive_getters::Getters;
use rayon::prelude::*;
use rayon::ThreadPool;

use cooptimal_core_rs::Alignable;

use crate::pairwise::alignment::{assemble, Alignment, Column};
use crate::pairwise::scoring::{gaps, symbols, Score};

use super::{matrix, traceback};

/// Global alignment of `seq1` and `seq2` reporting every alignment with the optimal score.
///
/// Sequences must be encoded in a way the `scorer` understands, e.g. check them with
/// [`crate::pairwise::scoring::validate`] before aligning codes with a substitution matrix.
pub fn align_global<'a, S, Seq1, Seq2, Symbols>(
    seq1: &'a Seq1,
    seq2: &'a Seq2,
    scorer: &Symbols,
    gap_opening: S,
    gap_extension: S,
) -> Vec<Alignment<'a, Seq1, Seq2, S>>
where
    S: Score,
    Symbols: symbols::Scorer<Score = S>,
    Seq1: Alignable<Symbol = Symbols::Symbol>,
    Seq2: Alignable<Symbol = Symbols::Symbol>,
{
    let gaps = gaps::Affine::new(gap_opening, gap_extension);
    run(seq1, seq2, scorer, &gaps, None, None)
}

/// Reusable global aligner with a fixed scoring scheme.
#[derive(Getters)]
pub struct Engine<Symbols, Gaps>
where
    Symbols: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Symbols::Score>,
{
    symbols: Symbols,
    gaps: Gaps,
    max_alignments: Option<usize>,
    #[getter(skip)]
    thread_pool: Option<ThreadPool>,
}

impl<Symbols, Gaps> Engine<Symbols, Gaps>
where
    Symbols: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Symbols::Score>,
{
    pub fn new(symbols: Symbols, gaps: Gaps) -> Self {
        EngineBuilder::new(symbols, gaps).build()
    }

    pub fn builder(symbols: Symbols, gaps: Gaps) -> EngineBuilder<Symbols, Gaps> {
        EngineBuilder::new(symbols, gaps)
    }

    pub fn with_scoring(&mut self, symbols: Symbols, gaps: Gaps) {
        self.symbols = symbols;
        self.gaps = gaps;
    }

    pub fn align<'a, Seq1, Seq2>(
        &self,
        seq1: &'a Seq1,
        seq2: &'a Seq2,
    ) -> Vec<Alignment<'a, Seq1, Seq2, Symbols::Score>>
    where
        Seq1: Alignable<Symbol = Symbols::Symbol>,
        Seq2: Alignable<Symbol = Symbols::Symbol>,
    {
        run(
            seq1,
            seq2,
            &self.symbols,
            &self.gaps,
            self.max_alignments,
            self.thread_pool.as_ref(),
        )
    }
}

pub struct EngineBuilder<Symbols, Gaps>
where
    Symbols: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Symbols::Score>,
{
    symbols: Symbols,
    gaps: Gaps,
    max_alignments: Option<usize>,
    thread_pool: Option<ThreadPool>,
}

impl<Symbols, Gaps> EngineBuilder<Symbols, Gaps>
where
    Symbols: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Symbols::Score>,
{
    pub fn new(symbols: Symbols, gaps: Gaps) -> Self {
        Self {
            symbols,
            gaps,
            max_alignments: None,
            thread_pool: None,
        }
    }

    /// Stop the traceback after `limit` co-optimal alignments.
    /// Highly repetitive inputs can have exponentially many of them.
    pub fn set_max_alignments(mut self, limit: usize) -> Self {
        self.max_alignments = Some(limit);
        self
    }

    /// Assemble alignments inside the given pool instead of the calling thread.
    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    pub fn build(self) -> Engine<Symbols, Gaps> {
        Engine {
            symbols: self.symbols,
            gaps: self.gaps,
            max_alignments: self.max_alignments,
            thread_pool: self.thread_pool,
        }
    }
}

fn run<'a, Seq1, Seq2, Symbols, Gaps>(
    seq1: &'a Seq1,
    seq2: &'a Seq2,
    symbols: &Symbols,
    gaps: &Gaps,
    limit: Option<usize>,
    pool: Option<&ThreadPool>,
) -> Vec<Alignment<'a, Seq1, Seq2, Symbols::Score>>
where
    Symbols: symbols::Scorer,
    Gaps: gaps::Scorer<Score = Symbols::Score>,
    Seq1: Alignable<Symbol = Symbols::Symbol>,
    Seq2: Alignable<Symbol = Symbols::Symbol>,
{
    let tables = matrix::fill(seq1, seq2, symbols, gaps);
    let score = tables.optimum();
    log::debug!(
        "Filled {}x{} alignment matrices, optimal score {:?}",
        tables.scores().rows(),
        tables.scores().cols(),
        score
    );

    let paths = traceback::enumerate(tables.trace(), limit);
    if *paths.truncated() {
        log::warn!(
            "Traceback stopped after {} co-optimal alignments, the rest were discarded",
            paths.len()
        );
    } else {
        log::debug!("Found {} co-optimal alignments", paths.len());
    }

    let (paths, _) = paths.dissolve();
    let columns: Vec<Vec<Column>> = match pool {
        Some(pool) => pool.install(|| paths.par_iter().map(|x| assemble(x)).collect()),
        None => paths.iter().map(|x| assemble(x)).collect(),
    };

    columns
        .into_iter()
        .map(|x| Alignment::new(seq1, seq2, x, score))
        .collect()
}
