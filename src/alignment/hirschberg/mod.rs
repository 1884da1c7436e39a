//! ## Hirschberg Alignment
//!
//! Optimal global alignment in linear space. [`hirschberg_align`] returns the
//! same score as [`nw_align`], but never holds more than two score rows at a
//! time outside of its small base cases.
//!
//! ### Divide and conquer
//!
//! For $X$ of length $n$ and $Y$ of length $m$, the first sequence is split at
//! $x_{mid} = \lfloor n/2 \rfloor$. Two linear-space score passes give, for
//! every column $j$, the best score of $X[..x_{mid}]$ against $Y[..j]$ and of
//! $X[x_{mid}..]$ against $Y[j..]$. The column $y_{mid}$ maximizing their sum
//! lies on an optimal alignment path, so aligning the two halves independently
//! and concatenating the results gives an optimal alignment of the whole.
//!
//! The recursion stops when either sequence is empty (all gaps) or has a
//! single symbol, in which case [`nw_align`] is used directly.
//!
//! ### Tie-breaking
//!
//! When several columns attain the maximal sum, the first one is chosen. Base
//! cases inherit the traceback order of [`nw_align`].
//!
//! ## Module Citations
//!
//! 1. Hirschberg, D. S. (1975). "A linear space algorithm for computing
//!    maximal common subsequences". *Communications of the ACM*. 18 (6):
//!    341–343.
//!
//! [`nw_align`]: crate::alignment::nw::nw_align

use crate::alignment::{
    AlignedPair, LinearScoring,
    nw::{nw_align, nw_score_row, nw_score_row_reversed},
};

/// A split of the alignment problem at row `x_mid` and column `y_mid` of the
/// full score matrix, chosen to lie on an optimal alignment path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SplitPoint {
    /// Where the first sequence is split, `floor(n / 2)`
    pub x_mid: usize,
    /// Where the second sequence is split
    pub y_mid: usize,
    /// The optimal global score through the split, which is the optimal
    /// score of the whole alignment
    pub score: i32,
}

/// Hirschberg's algorithm, yielding an optimal global alignment in linear
/// space.
///
/// As with [`nw_align`], input bytes are compared literally, so inputs
/// containing the gap character `-` can produce a column with a gap in both
/// rows. Reject such inputs beforehand if the output must
/// [`validate`](AlignedPair::validate).
///
/// ## Complexity
///
/// For `x` of length $n$ and `y` of length $m$:
///
/// - Time: $O(nm)$
/// - Space: $O(n + m)$
///
/// ## Example
///
/// ```
/// # use hirschberg::alignment::{LinearScoring, hirschberg::hirschberg_align};
/// let scoring = LinearScoring::default();
///
/// let aligned = hirschberg_align(b"AGTACGCA", b"TATGC", &scoring);
/// assert_eq!(aligned.first, b"AGTACGCA");
/// assert_eq!(aligned.second, b"--TATGC-");
///
/// let aligned = hirschberg_align(b"", b"ACGT", &scoring);
/// assert_eq!(aligned.to_string(), "----\nACGT");
/// ```
#[must_use]
pub fn hirschberg_align(x: &[u8], y: &[u8], scoring: &LinearScoring) -> AlignedPair {
    log::debug!("Aligning sequences of length {} and {} in linear space", x.len(), y.len());
    align_recursive(x, y, scoring)
}

/// Hirschberg's algorithm, yielding an optimal global alignment in linear
/// space together with its score.
///
/// The score is taken from the top-level split, so no extra pass over the
/// alignment is needed.
///
/// ## Example
///
/// ```
/// # use hirschberg::alignment::{LinearScoring, hirschberg::hirschberg_align_scored};
/// let scoring = LinearScoring::new(2, -1, -2).unwrap();
/// let (aligned, score) = hirschberg_align_scored(b"GATTACA", b"GCATGCU", &scoring);
///
/// assert_eq!(score, 2);
/// assert_eq!(aligned.score(&scoring), Ok(score));
/// ```
#[must_use]
pub fn hirschberg_align_scored(x: &[u8], y: &[u8], scoring: &LinearScoring) -> (AlignedPair, i32) {
    let (aligned, score) = match (x.len(), y.len()) {
        (0, m) => (AlignedPair::gapped_first(y), scoring.gap_run(m)),
        (n, 0) => (AlignedPair::gapped_second(x), scoring.gap_run(n)),
        (1, _) | (_, 1) => nw_align(x, y, scoring),
        _ => {
            let split = find_split(x, y, scoring);
            (divide(x, y, split, scoring), split.score)
        }
    };
    log::debug!(
        "Aligned sequences of length {} and {} in linear space with score {score}",
        x.len(),
        y.len()
    );
    (aligned, score)
}

/// Finds where to split `x` and `y` so that the two halves can be aligned
/// independently.
///
/// `x` is split at its midpoint. The column of `y` is the first one maximizing
/// the score of the left half of `x` against the prefix of `y` plus the score
/// of the right half of `x` against the remaining suffix of `y`.
///
/// ## Example
///
/// ```
/// # use hirschberg::alignment::{LinearScoring, hirschberg::{SplitPoint, find_split}};
/// let split = find_split(b"AGTACGCA", b"TATGC", &LinearScoring::default());
/// assert_eq!(split, SplitPoint { x_mid: 4, y_mid: 2, score: 0 });
/// ```
#[must_use]
pub fn find_split(x: &[u8], y: &[u8], scoring: &LinearScoring) -> SplitPoint {
    let x_mid = x.len() / 2;
    let (x_left, x_right) = x.split_at(x_mid);

    let score_left = nw_score_row(x_left, y, scoring);
    let score_right = nw_score_row_reversed(x_right, y, scoring);
    debug_assert_eq!(
        score_left.len(),
        score_right.len(),
        "Score rows for the split must have equal length"
    );

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("ScoreL: {score_left:?}");
        log::trace!("ScoreR: {score_right:?}");
    }

    // score_right is indexed by suffix length, so reading it backwards lines
    // it up with the prefix columns of score_left
    let mut y_mid = 0;
    let mut score = score_left[0] + score_right[score_right.len() - 1];
    for (j, total) in score_left
        .iter()
        .zip(score_right.iter().rev())
        .map(|(left, right)| left + right)
        .enumerate()
        .skip(1)
    {
        if total > score {
            score = total;
            y_mid = j;
        }
    }

    SplitPoint { x_mid, y_mid, score }
}

fn align_recursive(x: &[u8], y: &[u8], scoring: &LinearScoring) -> AlignedPair {
    match (x.len(), y.len()) {
        (0, _) => AlignedPair::gapped_first(y),
        (_, 0) => AlignedPair::gapped_second(x),
        (1, _) | (_, 1) => nw_align(x, y, scoring).0,
        _ => divide(x, y, find_split(x, y, scoring), scoring),
    }
}

fn divide(x: &[u8], y: &[u8], split: SplitPoint, scoring: &LinearScoring) -> AlignedPair {
    let SplitPoint { x_mid, y_mid, score } = split;
    log::trace!(
        "Split {}x{} at x_mid = {x_mid}, y_mid = {y_mid} (score {score})",
        x.len(),
        y.len()
    );

    let (x_left, x_right) = x.split_at(x_mid);
    let (y_left, y_right) = y.split_at(y_mid);

    align_recursive(x_left, y_left, scoring) + align_recursive(x_right, y_right, scoring)
}

#[cfg(test)]
mod test;

#[cfg(all(test, feature = "dev-bench"))]
mod bench;
