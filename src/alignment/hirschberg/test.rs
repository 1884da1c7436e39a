use super::*;
use crate::alignment::{AlignmentStates, nw::nw_score};

const SCORING: LinearScoring = LinearScoring::DEFAULT;

#[test]
fn hirschberg_base_cases() {
    assert_eq!(hirschberg_align(b"", b"ACGT", &SCORING).to_string(), "----\nACGT");
    assert_eq!(hirschberg_align(b"ACGT", b"", &SCORING).to_string(), "ACGT\n----");
    assert!(hirschberg_align(b"", b"", &SCORING).is_empty());

    // A single symbol on either side defers to the full matrix
    assert_eq!(hirschberg_align(b"A", b"ACGT", &SCORING), nw_align(b"A", b"ACGT", &SCORING).0);
    assert_eq!(hirschberg_align(b"ACGT", b"T", &SCORING), nw_align(b"ACGT", b"T", &SCORING).0);
}

#[test]
fn hirschberg_pinned_alignment() {
    let aligned = hirschberg_align(b"AGTACGCA", b"TATGC", &SCORING);
    assert_eq!(aligned.first, b"AGTACGCA");
    assert_eq!(aligned.second, b"--TATGC-");
    assert_eq!(aligned.score(&SCORING), Ok(0));
    assert_eq!(aligned.score(&SCORING).unwrap(), nw_align(b"AGTACGCA", b"TATGC", &SCORING).1);

    let aligned = hirschberg_align(b"GATTACA", b"GCATGCU", &SCORING);
    assert_eq!(aligned.to_string(), "G-ATTACA\nGCA-TGCU");
    assert_eq!(aligned.to_states(), AlignmentStates::try_from("1M1I1M1D4M").unwrap());

    let aligned = hirschberg_align(b"GGCCACAGGATTGAG", b"TACCACAGTATTAG", &SCORING);
    assert_eq!(aligned.to_states(), AlignmentStates::try_from("12M1D2M").unwrap());
    assert_eq!(aligned.score(&SCORING), Ok(7));
}

#[test]
fn hirschberg_identity() {
    let x = b"ACGTTGCAACGTAGCTAGCTAGGATCGA";
    let aligned = hirschberg_align(x, x, &SCORING);
    assert_eq!(aligned.first, x);
    assert_eq!(aligned.second, x);
}

#[test]
fn split_point() {
    assert_eq!(
        find_split(b"AGTACGCA", b"TATGC", &SCORING),
        SplitPoint {
            x_mid: 4,
            y_mid: 2,
            score: 0,
        }
    );

    // Several columns tie on the maximal sum, and the first is taken
    assert_eq!(
        find_split(b"AAAA", b"TT", &SCORING),
        SplitPoint {
            x_mid: 2,
            y_mid: 0,
            score: -4,
        }
    );

    let split = find_split(b"ACGT", b"ACGT", &SCORING);
    assert_eq!((split.x_mid, split.y_mid, split.score), (2, 2, 4));
}

#[test]
fn split_score_is_global_score() {
    let pairs: [(&[u8], &[u8]); 5] = [
        (b"AGTACGCA", b"TATGC"),
        (b"TATGC", b"AGTACGCA"),
        (b"GATTACA", b"GCATGCU"),
        (b"ACGT", b"T"),
        (b"kitten", b"sitting"),
    ];

    for (x, y) in pairs {
        assert_eq!(find_split(x, y, &SCORING).score, nw_score(x, y, &SCORING));
    }
}

#[test]
fn scored_matches_full() {
    let scoring = LinearScoring::new(2, -1, -2).unwrap();
    let pairs: [(&[u8], &[u8]); 5] = [
        (b"GATTACA", b"GCATGCU"),
        (b"", b"ACG"),
        (b"ACG", b""),
        (b"A", b"GATTACA"),
        (b"PLEASANTLY", b"MEANLY"),
    ];

    for (x, y) in pairs {
        let (aligned, score) = hirschberg_align_scored(x, y, &scoring);
        assert_eq!(score, nw_align(x, y, &scoring).1);
        assert_eq!(aligned.score(&scoring), Ok(score));
        assert_eq!(aligned, hirschberg_align(x, y, &scoring));
    }
}

#[test]
fn alignment_spells_inputs() {
    let x = b"the quick brown fox jumps over the lazy dog";
    let y = b"a quick brown dog jumped over lazy foxes";
    let aligned = hirschberg_align(x, y, &SCORING);

    assert_eq!(aligned.validate(), Ok(()));
    assert_eq!(aligned.ungapped_first(), x);
    assert_eq!(aligned.ungapped_second(), y);
    assert_eq!(aligned.score(&SCORING), Ok(nw_score(x, y, &SCORING)));
}

#[test]
fn gap_symbol_in_inputs() {
    // '-' in the inputs is aligned like any other symbol
    let aligned = hirschberg_align(b"A-", b"-", &SCORING);
    assert_eq!(aligned.to_string(), "A-\n--");
    assert_eq!(aligned, nw_align(b"A-", b"-", &SCORING).0);
    assert_eq!(aligned.validate(), Err(crate::alignment::AlignmentError::DoubleGap(1)));
}

#[cfg(feature = "rand")]
#[test]
fn agrees_with_full_matrix() {
    use crate::generate::SequenceGenerator;

    let weights = [
        LinearScoring::DEFAULT,
        LinearScoring::new_unchecked(2, -1, -2),
        LinearScoring::new_unchecked(5, -4, -3),
        LinearScoring::new_unchecked(1, 0, 0),
    ];

    let mut generator = SequenceGenerator::dna(42);
    for scoring in weights {
        for _ in 0..200 {
            let (x, y) = generator.pair_up_to(24);
            let (_, expected) = nw_align(&x, &y, &scoring);
            let aligned = hirschberg_align(&x, &y, &scoring);

            assert_eq!(aligned.score(&scoring), Ok(expected), "{x:?} vs {y:?}");
            assert_eq!(aligned.ungapped_first(), x);
            assert_eq!(aligned.ungapped_second(), y);
        }
    }
}
