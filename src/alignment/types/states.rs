/// A single increment-opcode pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Ciglet {
    /// Increment or repetition count.
    pub inc: usize,
    /// Alignment operation code.
    pub op:  u8,
}

/// A run-length encoding of the columns of an alignment, printed in CIGAR
/// notation (e.g. `2D5M1D`).
///
/// The operations are `M` (aligned symbols), `=` (match), `X` (mismatch), `D`
/// (a symbol of the first sequence against a gap), and `I` (a gap against a
/// symbol of the second sequence). Adjacent ciglets never share an operation,
/// and increments are never zero.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct AlignmentStates(pub(crate) Vec<Ciglet>);

impl AlignmentStates {
    /// Initializes an empty set of states.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        AlignmentStates(Vec::new())
    }

    /// Initializes the states with capacity for `n` (inc, op) pairs.
    #[inline]
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        AlignmentStates(Vec::with_capacity(n))
    }

    /// Returns the [`Ciglet`] elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Ciglet] {
        self.0.as_slice()
    }

    /// Returns `true` if there are no states.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of alignment columns described, i.e. the sum of all
    /// increments.
    #[inline]
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.0.iter().map(|c| c.inc).sum()
    }

    /// Adds a state to the right end of the alignment.
    #[inline]
    pub fn add_state(&mut self, op: u8) {
        self.add_ciglet(Ciglet { inc: 1, op });
    }

    /// Adds a ciglet to the right end of the alignment. If the operation is the
    /// same as the rightmost operation, the ciglet is merged with the last one.
    pub fn add_ciglet(&mut self, ciglet: Ciglet) {
        if ciglet.inc > 0 {
            if let Some(c) = self.0.last_mut()
                && c.op == ciglet.op
            {
                c.inc += ciglet.inc;
            } else {
                self.0.push(ciglet);
            }
        }
    }

    /// Adds an alignment `op` of size `inc`.
    #[inline]
    pub fn add_inc_op(&mut self, inc: usize, op: u8) {
        self.add_ciglet(Ciglet { inc, op });
    }

    /// Appends all states of `other`, merging at the boundary if needed.
    pub fn extend_from_states(&mut self, other: &AlignmentStates) {
        for ciglet in other {
            self.add_ciglet(ciglet);
        }
    }

    /// Reverses the order of the stored alignment states in-place.
    #[inline]
    pub fn make_reverse(&mut self) {
        self.0.reverse();
    }

    /// Yields an iterator over the alignment states.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Ciglet> {
        self.0.iter()
    }
}
