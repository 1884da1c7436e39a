//! ## Functions for aligning sequence data.
//!
//! This module computes optimal *global* alignments between two byte
//! sequences under a linear scoring scheme (a fixed match score, mismatch
//! score, and gap penalty).
//!
//! - [Needleman-Wunsch]: The quadratic-space baseline in the [`nw`] module,
//!   including the linear-space score pass [`nw_score_row`].
//! - [Hirschberg]: Divide-and-conquer alignment in linear space in the
//!   [`hirschberg`] module.
//!
//! Both produce an [`AlignedPair`]: the two input sequences with the gap
//! character `-` inserted.
//!
//! ```
//! # use hirschberg::alignment::LinearScoring;
//! let scoring = LinearScoring::default();
//! let aligned = scoring.align_linear_space(b"AGTACGCA", b"TATGC");
//!
//! assert_eq!(aligned.to_string(), "AGTACGCA\n--TATGC-");
//! assert_eq!(aligned.score(&scoring), Ok(0));
//! ```
//!
//! [Needleman-Wunsch]: https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm
//! [Hirschberg]: https://en.wikipedia.org/wiki/Hirschberg%27s_algorithm
//! [`nw_score_row`]: nw::nw_score_row

pub mod hirschberg;
pub mod nw;

mod errors;
mod scoring;
mod types;

pub use errors::*;
pub use scoring::*;
pub use types::*;
