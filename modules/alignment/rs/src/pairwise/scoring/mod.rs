use eyre::{eyre, Result};

use cooptimal_core_rs::EncodedSequence;

pub use crate::Score;
pub use symbols::SubstitutionMatrix;

pub mod gaps;
pub mod symbols;

/// Ensure that both sequences are encoded with the alphabets the substitution matrix was built for.
/// Alignment itself never re-checks alphabets, so this must run before any alignment over codes.
pub fn validate<S: Score>(
    matrix: &SubstitutionMatrix<S>,
    seq1: &EncodedSequence,
    seq2: &EncodedSequence,
) -> Result<()> {
    if seq1.alphabet().as_ref() != matrix.alphabet1().as_ref() {
        return Err(eyre!(
            "The first sequence alphabet {} doesn't fit the substitution matrix alphabet {}",
            seq1.alphabet(),
            matrix.alphabet1()
        ));
    }
    if seq2.alphabet().as_ref() != matrix.alphabet2().as_ref() {
        return Err(eyre!(
            "The second sequence alphabet {} doesn't fit the substitution matrix alphabet {}",
            seq2.alphabet(),
            matrix.alphabet2()
        ));
    }
    Ok(())
}
