use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// A seeded source of random sequences over a fixed alphabet.
///
/// ## Example
///
/// ```
/// # use hirschberg::generate::SequenceGenerator;
/// let mut generator = SequenceGenerator::dna(42);
/// let sequence = generator.sequence(100);
///
/// assert_eq!(sequence.len(), 100);
/// assert!(sequence.iter().all(|b| b"ACGT".contains(b)));
/// ```
#[derive(Clone, Debug)]
pub struct SequenceGenerator<'a> {
    alphabet: &'a [u8],
    rng:      Xoshiro256PlusPlus,
}

impl<'a> SequenceGenerator<'a> {
    /// Creates a generator drawing uniformly from `alphabet`.
    ///
    /// ## Panics
    ///
    /// `alphabet` must not be empty.
    #[must_use]
    pub fn new(alphabet: &'a [u8], seed: u64) -> Self {
        assert!(!alphabet.is_empty(), "The alphabet must contain at least one symbol");
        SequenceGenerator {
            alphabet,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// A generator for the bases `ACGT`.
    #[inline]
    #[must_use]
    pub fn dna(seed: u64) -> SequenceGenerator<'static> {
        SequenceGenerator::new(b"ACGT", seed)
    }

    fn below(&mut self, bound: usize) -> usize {
        self.rng.next_u32() as usize % bound
    }

    /// A random sequence of exactly `length` symbols.
    pub fn sequence(&mut self, length: usize) -> Vec<u8> {
        let alphabet = self.alphabet;
        (0..length).map(|_| alphabet[self.below(alphabet.len())]).collect()
    }

    /// A random sequence whose length is drawn from `0..=max_length`.
    pub fn sequence_up_to(&mut self, max_length: usize) -> Vec<u8> {
        let length = self.below(max_length + 1);
        self.sequence(length)
    }

    /// Two independent random sequences, each up to `max_length` symbols.
    pub fn pair_up_to(&mut self, max_length: usize) -> (Vec<u8>, Vec<u8>) {
        (self.sequence_up_to(max_length), self.sequence_up_to(max_length))
    }
}

#[cfg(test)]
mod test {
    use super::SequenceGenerator;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = SequenceGenerator::dna(42).sequence(LEN);
        assert_eq!(LEN, random_sequence.len());

        for base in b"ACGT" {
            assert!(random_sequence.contains(base));
        }
    }

    #[test]
    fn seeded() {
        let a = SequenceGenerator::new(b"xyz", 7).pair_up_to(50);
        let b = SequenceGenerator::new(b"xyz", 7).pair_up_to(50);
        assert_eq!(a, b);
        assert!(a.0.len() <= 50 && a.1.len() <= 50);
    }
}
