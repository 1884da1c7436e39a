use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// An enum representing invalid weights passed to
/// [`LinearScoring::new`](super::LinearScoring::new).
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    /// The gap penalty was positive, so gaps would be rewarded
    PositiveGap(i32),
    /// The mismatch score exceeded the match score
    MismatchAboveMatch {
        match_score:    i32,
        mismatch_score: i32,
    },
}

impl fmt::Display for ScoringError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoringError::PositiveGap(gap) => {
                write!(f, "The gap penalty must be zero or negative, but {gap} was provided")
            }
            ScoringError::MismatchAboveMatch {
                match_score,
                mismatch_score,
            } => write!(
                f,
                "The mismatch score ({mismatch_score}) must not exceed the match score ({match_score})"
            ),
        }
    }
}

impl fmt::Debug for ScoringError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ScoringError {}
impl GetCode for ScoringError {}

/// An enum representing errors when validating, scoring, or reconstructing an
/// [`AlignedPair`](super::AlignedPair), or when an input sequence is missing.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlignmentError {
    /// A sequence was not provided. Holds which one (`"first"` or `"second"`).
    MissingInput(&'static str),
    /// An input sequence contains the gap character. Holds which one.
    GapInInput(&'static str),
    /// The two aligned rows do not have the same length
    LengthMismatch { first: usize, second: usize },
    /// Both rows contain a gap at the given column
    DoubleGap(usize),
    /// The first sequence ended before the alignment states were consumed
    FirstEnded,
    /// The second sequence ended before the alignment states were consumed
    SecondEnded,
    /// The alignment states did not consume the full first sequence
    FirstNotConsumed,
    /// The alignment states did not consume the full second sequence
    SecondNotConsumed,
    /// An operation other than `M`, `=`, `X`, `I`, or `D` was encountered
    InvalidState(u8),
}

impl fmt::Display for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentError::MissingInput(which) => write!(f, "The {which} sequence was not provided!"),
            AlignmentError::GapInInput(which) => {
                write!(f, "The {which} sequence contains the gap character '-'")
            }
            AlignmentError::LengthMismatch { first, second } => {
                write!(f, "The aligned rows have different lengths: {first} and {second}")
            }
            AlignmentError::DoubleGap(column) => write!(f, "Both aligned rows have a gap at column {column}"),
            AlignmentError::FirstEnded => write!(f, "The first sequence ended before all states were consumed!"),
            AlignmentError::SecondEnded => write!(f, "The second sequence ended before all states were consumed!"),
            AlignmentError::FirstNotConsumed => write!(f, "Failed to consume the full first sequence!"),
            AlignmentError::SecondNotConsumed => write!(f, "Failed to consume the full second sequence!"),
            AlignmentError::InvalidState(op) => {
                write!(f, "An unsupported alignment operation was encountered: {}", *op as char)
            }
        }
    }
}

impl fmt::Debug for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlignmentError {}

impl GetCode for AlignmentError {
    #[inline]
    fn get_code(&self) -> i32 {
        match self {
            AlignmentError::MissingInput(_) => 2,
            _ => 1,
        }
    }
}

/// Errors produced when parsing [`AlignmentStates`](super::AlignmentStates)
/// from CIGAR-style text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StatesError {
    InvalidOperation,
    IncZero,
    IncOverflow,
    MissingInc,
    MissingOp,
}

impl fmt::Display for StatesError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatesError::InvalidOperation => write!(f, "Alignment operator must be one of: M, I, D, X, ="),
            StatesError::IncZero => write!(f, "Alignment increment must be a non-zero positive integer"),
            StatesError::IncOverflow => write!(f, "Alignment increment must be smaller than {}", usize::MAX),
            StatesError::MissingInc => write!(f, "Alignment operator must have preceding increment"),
            StatesError::MissingOp => write!(f, "Alignment increment must be followed by operator"),
        }
    }
}

impl fmt::Debug for StatesError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for StatesError {}
impl GetCode for StatesError {}
