#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]
#![cfg_attr(feature = "dev-bench", feature(test))]

/// Alignment functions
pub mod alignment;
/// Error and exit code handling, plus fuzzing support.
pub mod data;

/// Generate sequences for testing and benchmarking.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{
        AlignedPair, AlignmentStates, LinearScoring, hirschberg::hirschberg_align, nw::nw_align, nw::nw_score_row,
    };
    pub use crate::data::err::OrFail;
    #[cfg(feature = "rand")]
    pub use crate::generate::SequenceGenerator;
}
