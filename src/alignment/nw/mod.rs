//! ## Needleman–Wunsch Alignment
//!
//! For the optimal global alignment and its score, use [`nw_align`]. It keeps
//! the full score matrix and so needs quadratic space; for long sequences use
//! [`hirschberg_align`] instead.
//!
//! For the score only, [`nw_score_row`] computes the last row of the score
//! matrix while retaining just two rows at a time, and [`nw_score`] returns the
//! final cell of that row.
//!
//! ### Linear Gap Penalties
//!
//! Every gap position costs the same `gap` penalty from [`LinearScoring`], so
//! a gap of length $k$ contributes $k \cdot gap$. Aligned symbols contribute the
//! match score when equal and the mismatch score otherwise.
//!
//! ### Recurrence
//!
//! For sequences $X$ (length $n$) and $Y$ (length $m$), with $M$ an
//! $(n+1) \times (m+1)$ matrix:
//!
//! - $M[i,0] = i \cdot gap$ and $M[0,j] = j \cdot gap$
//! - $M[i,j] = \max(M[i-1,j-1] + s(X_{i-1}, Y_{j-1}),\ M[i,j-1] + gap,\ M[i-1,j] + gap)$
//!
//! ```
//! # use hirschberg::alignment::{LinearScoring, nw::nw_align};
//! let (aligned, score) = nw_align(b"AGTACGCA", b"TATGC", &LinearScoring::default());
//!
//! assert_eq!(score, 0);
//! assert_eq!(aligned.first, b"AGTACGCA");
//! assert_eq!(aligned.second, b"--TATGC-");
//! ```
//!
//! [`hirschberg_align`]: crate::alignment::hirschberg::hirschberg_align

use crate::alignment::{AlignedPair, GAP, LinearScoring, ScoreMatrix, max3};

/// Needleman–Wunsch algorithm, yielding an optimal global alignment and its
/// score.
///
/// The full score matrix is built, then traced back from the bottom-right
/// corner. At each cell the recurrence cases are re-checked in a fixed order:
/// the diagonal (both symbols aligned), then up (a symbol of `x` against a
/// gap), and finally left (a gap against a symbol of `y`). When several
/// optimal alignments exist, this order decides which one is returned.
///
/// Input bytes are compared literally, including [`GAP`]. If both inputs
/// contain `-`, the two may be aligned against each other, giving a column
/// that [`AlignedPair::validate`] reports as a double gap.
///
/// ## Complexity
///
/// For `x` of length $n$ and `y` of length $m$:
///
/// - Time: $O(nm)$
/// - Space: $O(nm)$
///
/// ## Example
///
/// ```
/// # use hirschberg::alignment::{LinearScoring, nw::nw_align};
/// let scoring = LinearScoring::new(2, -1, -2).unwrap();
/// let (aligned, score) = nw_align(b"GATTACA", b"GCATGCU", &scoring);
///
/// assert_eq!(score, 2);
/// assert_eq!(aligned.to_string(), "GATTACA\nGCATGCU");
/// ```
#[must_use]
pub fn nw_align(x: &[u8], y: &[u8], scoring: &LinearScoring) -> (AlignedPair, i32) {
    let matrix = fill_matrix(x, y, scoring);
    let score = matrix.get(x.len(), y.len());
    (traceback(&matrix, x, y, scoring), score)
}

fn fill_matrix(x: &[u8], y: &[u8], scoring: &LinearScoring) -> ScoreMatrix {
    let (n, m) = (x.len(), y.len());
    let mut matrix = ScoreMatrix::new(n + 1, m + 1);

    for i in 1..=n {
        matrix.set(i, 0, matrix.get(i - 1, 0) + scoring.gap);
    }
    for j in 1..=m {
        matrix.set(0, j, matrix.get(0, j - 1) + scoring.gap);
    }

    for i in 1..=n {
        for j in 1..=m {
            let diagonal = matrix.get(i - 1, j - 1) + scoring.match_score(x[i - 1], y[j - 1]);
            let left = matrix.get(i, j - 1) + scoring.gap;
            let up = matrix.get(i - 1, j) + scoring.gap;
            matrix.set(i, j, max3(diagonal, left, up));
        }
    }

    matrix.log_trace();
    matrix
}

fn traceback(matrix: &ScoreMatrix, x: &[u8], y: &[u8], scoring: &LinearScoring) -> AlignedPair {
    let (mut i, mut j) = (x.len(), y.len());
    let mut first = Vec::with_capacity(i + j);
    let mut second = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let h = matrix.get(i, j);
        if i > 0 && j > 0 && h == matrix.get(i - 1, j - 1) + scoring.match_score(x[i - 1], y[j - 1]) {
            first.push(x[i - 1]);
            second.push(y[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && h == matrix.get(i - 1, j) + scoring.gap {
            first.push(x[i - 1]);
            second.push(GAP);
            i -= 1;
        } else {
            // Column 0 is always reached from above, so j > 0 here
            debug_assert!(j > 0);
            first.push(GAP);
            second.push(y[j - 1]);
            j -= 1;
        }
    }

    AlignedPair::from_reversed(first, second)
}

/// Computes the last row of the Needleman–Wunsch score matrix for `x` against
/// `y`, of length `y.len() + 1`.
///
/// Entry `j` of the output is the optimal score of aligning all of `x` against
/// the prefix `y[..j]`. Only two rows are kept in memory at any time.
///
/// ## Complexity
///
/// For `x` of length $n$ and `y` of length $m$:
///
/// - Time: $O(nm)$
/// - Space: $O(m)$
///
/// ## Example
///
/// ```
/// # use hirschberg::alignment::{LinearScoring, nw::nw_score_row};
/// let row = nw_score_row(b"AGTACGCA", b"TATGC", &LinearScoring::default());
/// assert_eq!(row, [-8, -6, -4, -4, -2, 0]);
/// ```
#[must_use]
pub fn nw_score_row(x: &[u8], y: &[u8], scoring: &LinearScoring) -> Vec<i32> {
    last_row(x, y, false, scoring)
}

/// Computes the last row of the Needleman–Wunsch score matrix for the reverse
/// of `x` against the reverse of `y`, without copying either sequence.
///
/// Entry `j` of the output is the optimal score of aligning all of `x` against
/// the suffix `y[y.len() - j..]`.
///
/// ## Example
///
/// ```
/// # use hirschberg::alignment::{LinearScoring, nw::{nw_score_row, nw_score_row_reversed}};
/// let scoring = LinearScoring::default();
/// assert_eq!(
///     nw_score_row_reversed(b"ACGA", b"TAGC", &scoring),
///     nw_score_row(b"AGCA", b"CGAT", &scoring)
/// );
/// ```
#[must_use]
pub fn nw_score_row_reversed(x: &[u8], y: &[u8], scoring: &LinearScoring) -> Vec<i32> {
    last_row(x, y, true, scoring)
}

/// The optimal global alignment score of `x` against `y`, computed in $O(m)$
/// space.
///
/// ## Example
///
/// ```
/// # use hirschberg::alignment::{LinearScoring, nw::nw_score};
/// assert_eq!(nw_score(b"GGCCACAGGATTGAG", b"TACCACAGTATTAG", &LinearScoring::default()), 7);
/// ```
#[must_use]
pub fn nw_score(x: &[u8], y: &[u8], scoring: &LinearScoring) -> i32 {
    nw_score_row(x, y, scoring)[y.len()]
}

#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
#[allow(clippy::needless_range_loop)]
fn last_row(x: &[u8], y: &[u8], reversed: bool, scoring: &LinearScoring) -> Vec<i32> {
    let (n, m) = (x.len(), y.len());
    let gap = scoring.gap;

    let mut previous: Vec<i32> = (0..=m).map(|j| scoring.gap_run(j)).collect();
    let mut current = vec![0; m + 1];

    for i in 1..=n {
        let x_base = if reversed { x[n - i] } else { x[i - 1] };
        current[0] = previous[0] + gap;

        for j in 1..=m {
            let y_base = if reversed { y[m - j] } else { y[j - 1] };
            current[j] = max3(
                current[j - 1] + gap,
                previous[j] + gap,
                previous[j - 1] + scoring.match_score(x_base, y_base),
            );
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous
}

#[cfg(test)]
mod test;
