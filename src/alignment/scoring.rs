use crate::alignment::{AlignedPair, ScoringError, hirschberg::hirschberg_align, nw};

/// A linear scoring scheme for global alignment: a fixed score for matching
/// symbols, a fixed score for mismatching symbols, and a fixed penalty for
/// each gap position. There is no distinction between opening and extending a
/// gap.
///
/// The default is a match score of `1`, a mismatch score of `-1`, and a gap
/// penalty of `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinearScoring {
    pub match_score:    i32,
    pub mismatch_score: i32,
    pub gap:            i32,
}

impl LinearScoring {
    /// The default scheme: match `1`, mismatch `-1`, gap `-1`.
    pub const DEFAULT: LinearScoring = LinearScoring::new_unchecked(1, -1, -1);

    /// Creates a new scoring scheme.
    ///
    /// ## Errors
    ///
    /// - `gap` must be zero or negative.
    /// - `mismatch_score` must not be greater than `match_score`.
    pub fn new(match_score: i32, mismatch_score: i32, gap: i32) -> Result<Self, ScoringError> {
        if gap > 0 {
            return Err(ScoringError::PositiveGap(gap));
        }
        if mismatch_score > match_score {
            return Err(ScoringError::MismatchAboveMatch {
                match_score,
                mismatch_score,
            });
        }
        Ok(Self::new_unchecked(match_score, mismatch_score, gap))
    }

    /// Creates a new scoring scheme without validating the weights. Usable in
    /// `const` contexts.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        LinearScoring {
            match_score,
            mismatch_score,
            gap,
        }
    }

    /// The score contributed by aligning `c1` against `c2`.
    #[inline]
    #[must_use]
    pub fn match_score(&self, c1: u8, c2: u8) -> i32 {
        if c1 == c2 { self.match_score } else { self.mismatch_score }
    }

    /// The score of aligning `len` symbols against gaps.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn gap_run(&self, len: usize) -> i32 {
        self.gap * len as i32
    }

    /// Quadratic-space Needleman-Wunsch alignment, returning the aligned pair
    /// and its optimal score. See [`nw_align`](nw::nw_align).
    #[inline]
    #[must_use]
    pub fn align_full(&self, x: &[u8], y: &[u8]) -> (AlignedPair, i32) {
        nw::nw_align(x, y, self)
    }

    /// Linear-space Hirschberg alignment. See
    /// [`hirschberg_align`](crate::alignment::hirschberg::hirschberg_align).
    #[inline]
    #[must_use]
    pub fn align_linear_space(&self, x: &[u8], y: &[u8]) -> AlignedPair {
        hirschberg_align(x, y, self)
    }

    /// The last row of the Needleman-Wunsch score matrix, of length
    /// `y.len() + 1`. See [`nw_score_row`](nw::nw_score_row).
    #[inline]
    #[must_use]
    pub fn score_row(&self, x: &[u8], y: &[u8]) -> Vec<i32> {
        nw::nw_score_row(x, y, self)
    }
}

impl Default for LinearScoring {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The maximum of three scores.
#[inline]
#[must_use]
pub fn max3(a: i32, b: i32, c: i32) -> i32 {
    a.max(b).max(c)
}
