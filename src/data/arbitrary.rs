//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the scoring scheme, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::alignment::LinearScoring;
use arbitrary::{Arbitrary, Result, Unstructured};
use std::ops::{Deref, DerefMut};

impl<'a> Arbitrary<'a> for LinearScoring {
    /// Generates a scheme accepted by [`LinearScoring::new`], with weights
    /// small enough that no alignment score of a fuzzed input can overflow.
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let match_score = u.int_in_range(0..=10)?;
        let mismatch_score = u.int_in_range(-10..=match_score)?;
        let gap = u.int_in_range(-10..=0)?;
        Ok(LinearScoring::new_unchecked(match_score, mismatch_score, gap))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (3, Some(3))
    }
}

/// A wrapper around [`Vec<u8>`] such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates bases in `ACGT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NucleotideSequence(pub Vec<u8>);

impl Deref for NucleotideSequence {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for NucleotideSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<NucleotideSequence> for Vec<u8> {
    #[inline]
    fn from(val: NucleotideSequence) -> Vec<u8> {
        val.0
    }
}

impl<'a> Arbitrary<'a> for NucleotideSequence {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"ACGT";
        Ok(NucleotideSequence(
            u.arbitrary_iter::<u8>()?
                .flatten()
                .map(|b| ALPHA[b as usize % ALPHA.len()])
                .collect(),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arbitrary_scoring_is_valid() {
        let bytes: Vec<u8> = (0..=255).collect();
        let mut u = Unstructured::new(&bytes);
        for _ in 0..50 {
            let scoring = LinearScoring::arbitrary(&mut u).unwrap();
            let checked = LinearScoring::new(scoring.match_score, scoring.mismatch_score, scoring.gap);
            assert_eq!(checked, Ok(scoring));
        }
    }

    #[test]
    fn arbitrary_sequence_alphabet() {
        let bytes: Vec<u8> = (0..=255).rev().collect();
        let sequence = NucleotideSequence::arbitrary(&mut Unstructured::new(&bytes)).unwrap();
        assert!(sequence.iter().all(|b| b"ACGT".contains(b)));
    }
}
