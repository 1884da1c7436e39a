use super::*;
use crate::alignment::AlignmentStates;

const SCORING: LinearScoring = LinearScoring::DEFAULT;

#[test]
fn nw_pinned_alignment() {
    let (aligned, score) = nw_align(b"AGTACGCA", b"TATGC", &SCORING);
    assert_eq!(score, 0);
    assert_eq!(aligned.first, b"AGTACGCA");
    assert_eq!(aligned.second, b"--TATGC-");
    assert_eq!(aligned.to_states(), AlignmentStates::try_from(b"2D5M1D").unwrap());
    assert_eq!(aligned.score(&SCORING), Ok(score));
}

#[test]
fn nw_swapped_inputs() {
    let (forward, forward_score) = nw_align(b"AGTACGCA", b"TATGC", &SCORING);
    let (swapped, swapped_score) = nw_align(b"TATGC", b"AGTACGCA", &SCORING);

    assert_eq!(forward_score, swapped_score);
    assert_eq!(swapped.first, b"--TATGC-");
    assert_eq!(swapped.second, b"AGTACGCA");
    assert_eq!(forward.first, swapped.second);
}

#[test]
fn nw_identity() {
    for x in [&b"A"[..], b"ACGT", b"GATTACA", b"PLEASANTLY"] {
        let (aligned, score) = nw_align(x, x, &SCORING);
        assert_eq!(aligned.first, x);
        assert_eq!(aligned.second, x);
        assert_eq!(score, i32::try_from(x.len()).unwrap());
    }
}

#[test]
fn nw_empty() {
    let (aligned, score) = nw_align(b"", b"", &SCORING);
    assert!(aligned.is_empty());
    assert_eq!(score, 0);

    let (aligned, score) = nw_align(b"", b"ACG", &SCORING);
    assert_eq!(aligned.to_string(), "---\nACG");
    assert_eq!(score, -3);

    let (aligned, score) = nw_align(b"ACG", b"", &SCORING);
    assert_eq!(aligned.to_string(), "ACG\n---");
    assert_eq!(score, -3);
}

#[test]
fn nw_tie_breaking() {
    // Diagonal is preferred over gaps, then up over left
    let (aligned, score) = nw_align(b"A", b"ACGT", &SCORING);
    assert_eq!(aligned.to_string(), "A---\nACGT");
    assert_eq!(score, -2);

    let (aligned, score) = nw_align(b"ACGT", b"T", &SCORING);
    assert_eq!(aligned.to_string(), "ACGT\n---T");
    assert_eq!(score, -2);

    let (aligned, score) = nw_align(b"AAAA", b"TT", &SCORING);
    assert_eq!(aligned.to_string(), "AAAA\n--TT");
    assert_eq!(score, -4);
}

#[test]
fn nw_longer() {
    let (aligned, score) = nw_align(b"GGCCACAGGATTGAG", b"TACCACAGTATTAG", &SCORING);
    assert_eq!(score, 7);
    assert_eq!(aligned.to_states(), AlignmentStates::try_from("12M1D2M").unwrap());
    assert_eq!(aligned.second, b"TACCACAGTATT-AG");
}

#[test]
fn nw_custom_scoring() {
    let scoring = LinearScoring::new(2, -1, -2).unwrap();
    let (aligned, score) = nw_align(b"GATTACA", b"GCATGCU", &scoring);
    assert_eq!(score, 2);
    assert_eq!(aligned.score(&scoring), Ok(2));
    assert_eq!(aligned.to_verbose_states(), AlignmentStates::try_from("1=2X1=1X1=1X").unwrap());
}

#[test]
fn score_row_values() {
    assert_eq!(nw_score_row(b"AGTACGCA", b"TATGC", &SCORING), [-8, -6, -4, -4, -2, 0]);
    assert_eq!(nw_score_row(b"TATGC", b"AGTACGCA", &SCORING), [-5, -3, -1, -1, -2, 0, -1, 1, 0]);
    assert_eq!(nw_score_row(b"", b"ACG", &SCORING), [0, -1, -2, -3]);
    assert_eq!(nw_score_row(b"ACG", b"", &SCORING), [-3]);
}

#[test]
fn score_row_matches_full_matrix() {
    let pairs: [(&[u8], &[u8]); 4] = [
        (b"AGTACGCA", b"TATGC"),
        (b"GATTACA", b"GCATGCU"),
        (b"A", b"ACGT"),
        (b"GGCCACAGGATTGAG", b"TACCACAGTATTAG"),
    ];

    for (x, y) in pairs {
        let (_, score) = nw_align(x, y, &SCORING);
        let row = nw_score_row(x, y, &SCORING);
        assert_eq!(row.len(), y.len() + 1);
        assert_eq!(row[y.len()], score);
        assert_eq!(nw_score(x, y, &SCORING), score);

        // Every entry is the optimal score against a prefix of y
        for (j, value) in row.iter().enumerate() {
            assert_eq!(*value, nw_align(x, &y[..j], &SCORING).1);
        }
    }
}

#[test]
fn score_row_reversed() {
    let x = b"AGTACGCA";
    let y = b"TATGC";
    let x_rev: Vec<u8> = x.iter().rev().copied().collect();
    let y_rev: Vec<u8> = y.iter().rev().copied().collect();

    assert_eq!(
        nw_score_row_reversed(x, y, &SCORING),
        nw_score_row(&x_rev, &y_rev, &SCORING)
    );
    assert_eq!(nw_score_row_reversed(b"", b"AC", &SCORING), [0, -1, -2]);
}
