use crate::alignment::{AlignmentError, AlignmentStates, Ciglet, LinearScoring};

/// The gap character inserted into aligned sequences.
pub const GAP: u8 = b'-';

/// A pair of aligned sequences with gaps inserted.
///
/// `first` is the first input sequence and `second` is the second, each with
/// [`GAP`] characters inserted so that both rows have the same length. Every
/// aligner in this crate returns a pair where no column holds a gap in both
/// rows. Pairs built by hand can be checked with [`validate`].
///
/// [`validate`]: AlignedPair::validate
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct AlignedPair {
    /// The first sequence, with gaps
    pub first:  Vec<u8>,
    /// The second sequence, with gaps
    pub second: Vec<u8>,
}

/// Column counts of an [`AlignedPair`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct AlignmentStats {
    pub matches:    usize,
    pub mismatches: usize,
    pub gaps:       usize,
}

impl AlignmentStats {
    /// The number of aligned columns.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }

    /// The proportion of columns that are matches, or `None` for an empty
    /// alignment.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn identity(&self) -> Option<f64> {
        let columns = self.columns();
        (columns > 0).then(|| self.matches as f64 / columns as f64)
    }
}

impl AlignedPair {
    /// Creates an empty alignment.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        AlignedPair::default()
    }

    /// Creates an empty alignment with room for `columns` columns.
    #[inline]
    #[must_use]
    pub fn with_capacity(columns: usize) -> Self {
        AlignedPair {
            first:  Vec::with_capacity(columns),
            second: Vec::with_capacity(columns),
        }
    }

    /// Wraps two aligned rows, checking that they form a valid alignment.
    ///
    /// ## Errors
    ///
    /// See [`validate`](AlignedPair::validate).
    pub fn from_rows(first: Vec<u8>, second: Vec<u8>) -> Result<Self, AlignmentError> {
        let pair = AlignedPair { first, second };
        pair.validate()?;
        Ok(pair)
    }

    /// The alignment of an empty first sequence against `y`: every symbol of
    /// `y` is placed against a gap.
    #[must_use]
    pub fn gapped_first(y: &[u8]) -> Self {
        AlignedPair {
            first:  vec![GAP; y.len()],
            second: y.to_vec(),
        }
    }

    /// The alignment of `x` against an empty second sequence: every symbol of
    /// `x` is placed against a gap.
    #[must_use]
    pub fn gapped_second(x: &[u8]) -> Self {
        AlignedPair {
            first:  x.to_vec(),
            second: vec![GAP; x.len()],
        }
    }

    /// Builds a pair from rows that were collected back to front, as during a
    /// traceback.
    #[inline]
    pub(crate) fn from_reversed(mut first: Vec<u8>, mut second: Vec<u8>) -> Self {
        debug_assert_eq!(first.len(), second.len());
        first.reverse();
        second.reverse();
        AlignedPair { first, second }
    }

    /// The number of aligned columns.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len().max(self.second.len())
    }

    /// Returns `true` if the alignment has no columns.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    /// Iterates over the aligned columns as `(first, second)` byte pairs.
    #[inline]
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.first.iter().copied().zip(self.second.iter().copied())
    }

    /// Appends `other` to the end of `self`, row by row.
    #[inline]
    pub fn append(&mut self, mut other: AlignedPair) {
        self.first.append(&mut other.first);
        self.second.append(&mut other.second);
    }

    /// Concatenates two alignments component-wise: `(a1 + b1, a2 + b2)`.
    #[inline]
    #[must_use]
    pub fn concat(mut self, other: AlignedPair) -> Self {
        self.append(other);
        self
    }

    /// Checks that both rows have the same length and that no column is a gap
    /// in both rows.
    ///
    /// ## Errors
    ///
    /// - [`AlignmentError::LengthMismatch`] if the rows differ in length.
    /// - [`AlignmentError::DoubleGap`] for the first column with two gaps.
    pub fn validate(&self) -> Result<(), AlignmentError> {
        if self.first.len() != self.second.len() {
            return Err(AlignmentError::LengthMismatch {
                first:  self.first.len(),
                second: self.second.len(),
            });
        }
        match self.columns().position(|(a, b)| a == GAP && b == GAP) {
            Some(column) => Err(AlignmentError::DoubleGap(column)),
            None => Ok(()),
        }
    }

    /// Scores the alignment column by column under `scoring`.
    ///
    /// ## Errors
    ///
    /// The alignment must be valid, see [`validate`](AlignedPair::validate).
    pub fn score(&self, scoring: &LinearScoring) -> Result<i32, AlignmentError> {
        self.validate()?;
        Ok(self
            .columns()
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    scoring.gap
                } else {
                    scoring.match_score(a, b)
                }
            })
            .sum())
    }

    /// Counts matches, mismatches, and gap columns.
    #[must_use]
    pub fn stats(&self) -> AlignmentStats {
        self.columns().fold(AlignmentStats::default(), |mut stats, (a, b)| {
            if a == GAP || b == GAP {
                stats.gaps += 1;
            } else if a == b {
                stats.matches += 1;
            } else {
                stats.mismatches += 1;
            }
            stats
        })
    }

    /// The first row with gaps removed.
    #[inline]
    #[must_use]
    pub fn ungapped_first(&self) -> Vec<u8> {
        self.first.iter().copied().filter(|&b| b != GAP).collect()
    }

    /// The second row with gaps removed.
    #[inline]
    #[must_use]
    pub fn ungapped_second(&self) -> Vec<u8> {
        self.second.iter().copied().filter(|&b| b != GAP).collect()
    }

    /// Run-length encodes the columns as [`AlignmentStates`]. `M` is an aligned
    /// pair of symbols (match or mismatch), `D` is a symbol of the first
    /// sequence against a gap, and `I` is a gap against a symbol of the second
    /// sequence.
    #[must_use]
    pub fn to_states(&self) -> AlignmentStates {
        self.columns_to_states(|_, _| b'M')
    }

    /// Like [`to_states`], but uses `=` for matches and `X` for mismatches.
    ///
    /// [`to_states`]: AlignedPair::to_states
    #[must_use]
    pub fn to_verbose_states(&self) -> AlignmentStates {
        self.columns_to_states(|a, b| if a == b { b'=' } else { b'X' })
    }

    fn columns_to_states(&self, aligned_op: impl Fn(u8, u8) -> u8) -> AlignmentStates {
        let mut states = AlignmentStates::new();
        for (a, b) in self.columns() {
            let op = if a == GAP {
                b'I'
            } else if b == GAP {
                b'D'
            } else {
                aligned_op(a, b)
            };
            states.add_state(op);
        }
        states
    }

    /// Expands [`AlignmentStates`] into aligned rows for the sequences `x` and
    /// `y`. This is the inverse of [`to_states`]. `=` and `X` are treated like
    /// `M`; whether the symbols actually match is not checked.
    ///
    /// ## Errors
    ///
    /// - The states may only contain operations in `M=XID`.
    /// - Both `x` and `y` must be fully consumed, and neither may run out.
    ///
    /// [`to_states`]: AlignedPair::to_states
    pub fn from_states(x: &[u8], y: &[u8], states: &AlignmentStates) -> Result<Self, AlignmentError> {
        let mut pair = AlignedPair::with_capacity(x.len() + y.len());
        let (mut x_index, mut y_index) = (0usize, 0usize);

        for Ciglet { inc, op } in states {
            match op {
                b'M' | b'=' | b'X' => {
                    let xs = x.get(x_index..x_index.saturating_add(inc)).ok_or(AlignmentError::FirstEnded)?;
                    let ys = y.get(y_index..y_index.saturating_add(inc)).ok_or(AlignmentError::SecondEnded)?;
                    pair.first.extend_from_slice(xs);
                    pair.second.extend_from_slice(ys);
                    x_index += inc;
                    y_index += inc;
                }
                b'D' => {
                    let xs = x.get(x_index..x_index.saturating_add(inc)).ok_or(AlignmentError::FirstEnded)?;
                    pair.first.extend_from_slice(xs);
                    pair.second.extend(std::iter::repeat_n(GAP, inc));
                    x_index += inc;
                }
                b'I' => {
                    let ys = y.get(y_index..y_index.saturating_add(inc)).ok_or(AlignmentError::SecondEnded)?;
                    pair.first.extend(std::iter::repeat_n(GAP, inc));
                    pair.second.extend_from_slice(ys);
                    y_index += inc;
                }
                op => return Err(AlignmentError::InvalidState(op)),
            }
        }

        if x_index < x.len() {
            return Err(AlignmentError::FirstNotConsumed);
        }
        if y_index < y.len() {
            return Err(AlignmentError::SecondNotConsumed);
        }

        Ok(pair)
    }
}
