//! ## Exit codes, error reporting, and fuzzing support.
//!
//! [`err`] holds the [`GetCode`](err::GetCode) and [`OrFail`](err::OrFail)
//! traits used to turn errors into process exit codes. With the *fuzzing*
//! feature enabled, [`arbitrary`] provides
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations for scoring schemes and sequences.

pub mod err;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
