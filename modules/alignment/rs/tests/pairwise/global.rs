use std::collections::BTreeSet;
use std::sync::Arc;

use eyre::Result;

use cooptimal_alignment_rs::pairwise::nw::{fill, Engine};
use cooptimal_alignment_rs::pairwise::scoring::symbols::{Equality, PosInvariantScorer};
use cooptimal_alignment_rs::pairwise::scoring::{gaps, validate, SubstitutionMatrix};
use cooptimal_alignment_rs::pairwise::Column;
use cooptimal_alignment_rs::{align_global, Alphabet, EncodedSequence};

pub type Score = i32;

fn encode(text: &[u8]) -> Result<EncodedSequence> {
    EncodedSequence::new(Arc::new(Alphabet::nucleotides()), text)
}

fn columns_set<'a>(alignments: impl Iterator<Item = &'a Vec<Column>>) -> BTreeSet<Vec<Column>> {
    alignments.cloned().collect()
}

/// Every possible global alignment of sequences with the given lengths.
fn all_alignments(len1: usize, len2: usize) -> Vec<Vec<Column>> {
    fn extend(i: usize, j: usize, len1: usize, len2: usize, prefix: &mut Vec<Column>, saveto: &mut Vec<Vec<Column>>) {
        if i == len1 && j == len2 {
            saveto.push(prefix.clone());
            return;
        }
        if i < len1 && j < len2 {
            prefix.push(Column::paired(i, j));
            extend(i + 1, j + 1, len1, len2, prefix, saveto);
            prefix.pop();
        }
        if j < len2 {
            prefix.push(Column::only_seq2(j));
            extend(i, j + 1, len1, len2, prefix, saveto);
            prefix.pop();
        }
        if i < len1 {
            prefix.push(Column::only_seq1(i));
            extend(i + 1, j, len1, len2, prefix, saveto);
            prefix.pop();
        }
    }

    let mut saveto = Vec::new();
    extend(0, 0, len1, len2, &mut Vec::new(), &mut saveto);
    saveto
}

/// Brute-force co-optimal alignments under a linear gap cost of -1, which is exactly what the
/// DP computes when gap opening == gap extension == -1 (the border cost is -1 per symbol too).
fn brute_force(
    seq1: &[u8],
    seq2: &[u8],
    scorer: &impl PosInvariantScorer<SymScore = Score, Symbol = u8>,
) -> (Score, BTreeSet<Vec<Column>>) {
    let scored: Vec<_> = all_alignments(seq1.len(), seq2.len())
        .into_iter()
        .map(|columns| {
            let score = columns
                .iter()
                .map(|column| match (column.seq1, column.seq2) {
                    (Some(a), Some(b)) => scorer.score(&seq1[a], &seq2[b]),
                    _ => -1,
                })
                .sum::<Score>();
            (score, columns)
        })
        .collect();

    let best = scored.iter().map(|x| x.0).max().unwrap_or(0);
    let optimal = scored
        .into_iter()
        .filter(|x| x.0 == best)
        .map(|x| x.1)
        .collect();
    (best, optimal)
}

#[test]
fn test_matches_brute_force_for_linear_gaps() -> Result<()> {
    let workload: Vec<(&[u8], &[u8])> = vec![
        (b"A", b"A"),
        (b"A", b"C"),
        (b"GA", b"AC"),
        (b"ACGT", b"AGT"),
        (b"AAAA", b"AA"),
        (b"GATTACA", b"GCATGC"),
        (b"TTTT", b"AAAA"),
        (b"ACACAC", b"CACA"),
        (b"G", b"GGGGG"),
    ];

    for (equal, different) in [(1, -1), (2, -1), (1, -3), (0, 0)] {
        let scorer = Equality::new(equal, different);
        for (seq1, seq2) in &workload {
            let (score, expected) = brute_force(seq1, seq2, &scorer);

            let alignments = align_global(seq1, seq2, &scorer, -1, -1);
            assert_eq!(alignments.len(), expected.len(), "{seq1:?} vs {seq2:?}");
            for alignment in &alignments {
                assert_eq!(*alignment.score(), score);
            }
            let found = columns_set(alignments.iter().map(|x| x.columns()));
            assert_eq!(found, expected);
        }
    }
    Ok(())
}

#[test]
fn test_identity() -> Result<()> {
    let dna = Arc::new(Alphabet::nucleotides());
    let matrix = SubstitutionMatrix::identity(dna, 2, -1);

    let texts: [&[u8]; 4] = [b"A", b"GATTACA", b"ACGTACGTTTGCA", b"AAAAAAAA"];
    for text in texts {
        let seq = encode(text)?;
        validate(&matrix, &seq, &seq)?;

        let alignments = align_global(&seq, &seq, &matrix, -3, -1);
        assert_eq!(alignments.len(), 1);
        assert_eq!(*alignments[0].score(), 2 * text.len() as Score);
        assert_eq!(alignments[0].rle(), format!("{}=", text.len()));
        for (ind, column) in alignments[0].columns().iter().enumerate() {
            assert_eq!(*column, Column::paired(ind, ind));
        }
    }
    Ok(())
}

#[test]
fn test_symmetry() -> Result<()> {
    let workload: Vec<(&[u8], &[u8])> = vec![
        (b"GA", b"AC"),
        (b"GATTACA", b"GCATGC"),
        (b"ACGTTTACG", b"ACGACG"),
        (b"CCCCC", b"C"),
        (b"ATATATAT", b"TATA"),
    ];
    let dna = Arc::new(Alphabet::nucleotides());
    let matrix = SubstitutionMatrix::identity(dna, 1, -1);

    for (open, extend) in [(-3, -1), (-1, -1), (-5, -2)] {
        for (text1, text2) in &workload {
            let (seq1, seq2) = (encode(text1)?, encode(text2)?);

            let forward = align_global(&seq1, &seq2, &matrix, open, extend);
            let backward = align_global(&seq2, &seq1, &matrix, open, extend);
            assert_eq!(forward[0].score(), backward[0].score());

            let mirrored = backward
                .iter()
                .map(|x| x.columns().iter().map(Column::mirrored).collect::<Vec<_>>())
                .collect::<BTreeSet<_>>();
            assert_eq!(columns_set(forward.iter().map(|x| x.columns())), mirrored);
        }
    }
    Ok(())
}

#[test]
fn test_alignments_are_global_and_distinct() -> Result<()> {
    let dna = Arc::new(Alphabet::nucleotides());
    // Identical scores for every pair of symbols
    let matrix = SubstitutionMatrix::from_fn(dna.clone(), dna, |_, _| -2);

    let workload: Vec<(&[u8], &[u8])> = vec![(b"ACG", b"TT"), (b"GATTACA", b"GCA"), (b"A", b"CCCCC")];
    for (text1, text2) in workload {
        let (seq1, seq2) = (encode(text1)?, encode(text2)?);
        for (open, extend) in [(-1, -1), (-3, -1), (-2, -2)] {
            let alignments = align_global(&seq1, &seq2, &matrix, open, extend);
            assert!(!alignments.is_empty());

            let score = *alignments[0].score();
            for alignment in &alignments {
                assert_eq!(*alignment.score(), score);
                assert_eq!(
                    alignment.seq1_positions().collect::<Vec<_>>(),
                    (0..text1.len()).collect::<Vec<_>>()
                );
                assert_eq!(
                    alignment.seq2_positions().collect::<Vec<_>>(),
                    (0..text2.len()).collect::<Vec<_>>()
                );
                assert!(alignment.columns().iter().all(|x| x.seq1.is_some() || x.seq2.is_some()));
            }

            let unique = columns_set(alignments.iter().map(|x| x.columns()));
            assert_eq!(unique.len(), alignments.len());
        }

        // A substitution costs as much as two gaps: everything is co-optimal
        let alignments = align_global(&seq1, &seq2, &matrix, -1, -1);
        assert!(alignments.len() > 1);
        assert_eq!(
            *alignments[0].score(),
            -((text1.len() + text2.len()) as Score)
        );
    }
    Ok(())
}

#[test]
fn test_concrete_scenario() -> Result<()> {
    let dna = Arc::new(Alphabet::nucleotides());
    let matrix = SubstitutionMatrix::identity(dna, 1, -1);
    let (seq1, seq2) = (encode(b"GA")?, encode(b"AC")?);

    let alignments = align_global(&seq1, &seq2, &matrix, -3, -1);
    assert_eq!(alignments.len(), 1);
    // Two mismatches beat any alignment that opens an interior gap
    assert_eq!(*alignments[0].score(), -2);
    assert_eq!(alignments[0].rle(), "2X");
    assert!(std::ptr::eq(alignments[0].seq1(), &seq1));
    assert!(std::ptr::eq(alignments[0].seq2(), &seq2));
    Ok(())
}

#[test]
fn test_border_initialization() -> Result<()> {
    let dna = Arc::new(Alphabet::nucleotides());
    let matrix = SubstitutionMatrix::identity(dna, 1, -1);
    let (seq1, seq2) = (encode(b"T")?, encode(b"ACGTA")?);

    let gaps = gaps::Affine::new(-3, -1);
    let tables = fill(&seq1, &seq2, &matrix, &gaps);
    assert_eq!(tables.scores().at(1, 0), -1);
    assert_eq!(tables.scores().at(0, 5), -5);

    let alignments = Engine::new(matrix, gaps).align(&seq1, &seq2);
    assert_eq!(*alignments[0].score(), tables.optimum());
    for alignment in &alignments {
        assert_eq!(alignment.seq1_positions().collect::<Vec<_>>(), vec![0]);
        assert_eq!(alignment.seq2_positions().count(), 5);
    }
    Ok(())
}

#[test]
fn test_no_ties_single_result() -> Result<()> {
    let dna = Arc::new(Alphabet::nucleotides());
    // Distinct scores for every pair of symbols
    let matrix = SubstitutionMatrix::new(
        dna.clone(),
        dna,
        vec![
            10, -3, -7, -11, //
            -2, 9, -5, -13, //
            -6, -4, 8, -17, //
            -9, -12, -15, 7,
        ],
    )?;
    let (seq1, seq2) = (encode(b"ACGTAGCA")?, encode(b"ACGTGCA")?);
    let alignments = align_global(&seq1, &seq2, &matrix, -20, -19);
    assert_eq!(alignments.len(), 1);
    assert_eq!(*alignments[0].score(), 41);
    assert_eq!(alignments[0].rle(), "4=1v3=");
    Ok(())
}
