use crate::alignment::{AlignedPair, AlignmentStates, Ciglet, StatesError};
use std::{
    fmt::{self, Write},
    ops::{Add, AddAssign},
};

impl fmt::Display for AlignedPair {
    /// Writes the two aligned rows on separate lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            String::from_utf8_lossy(&self.first),
            String::from_utf8_lossy(&self.second)
        )
    }
}

impl Add for AlignedPair {
    type Output = AlignedPair;

    #[inline]
    fn add(self, rhs: AlignedPair) -> Self::Output {
        self.concat(rhs)
    }
}

impl AddAssign for AlignedPair {
    #[inline]
    fn add_assign(&mut self, rhs: AlignedPair) {
        self.append(rhs);
    }
}

impl FromIterator<(u8, u8)> for AlignedPair {
    #[inline]
    fn from_iter<T: IntoIterator<Item = (u8, u8)>>(iter: T) -> Self {
        let (first, second) = iter.into_iter().unzip();
        AlignedPair { first, second }
    }
}

impl<'a> IntoIterator for &'a AlignmentStates {
    type Item = Ciglet;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Ciglet>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl IntoIterator for AlignmentStates {
    type Item = Ciglet;
    type IntoIter = <Vec<Ciglet> as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Ciglet> for AlignmentStates {
    /// Collects ciglets, merging adjacent ones with the same operation and
    /// dropping zero increments.
    #[inline]
    fn from_iter<T: IntoIterator<Item = Ciglet>>(iter: T) -> Self {
        let mut states = AlignmentStates::new();
        for ciglet in iter {
            states.add_ciglet(ciglet);
        }
        states
    }
}

impl fmt::Debug for AlignmentStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|c| (c.inc, c.op as char))).finish()
    }
}

impl fmt::Display for AlignmentStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_char('*');
        }
        let mut buff = itoa::Buffer::new();
        for Ciglet { inc, op } in self {
            f.write_str(buff.format(inc))?;
            f.write_char(op as char)?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for AlignmentStates {
    type Error = StatesError;

    fn try_from(v: &[u8]) -> Result<Self, StatesError> {
        let mut states = AlignmentStates::new();
        if v == b"*" {
            return Ok(states);
        }

        let mut inc: usize = 0;
        let mut has_inc = false;

        for &b in v {
            if b.is_ascii_digit() {
                inc = inc
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(usize::from(b - b'0')))
                    .ok_or(StatesError::IncOverflow)?;
                has_inc = true;
            } else if matches!(b, b'M' | b'=' | b'X' | b'I' | b'D') {
                if !has_inc {
                    return Err(StatesError::MissingInc);
                }
                if inc == 0 {
                    return Err(StatesError::IncZero);
                }
                states.add_inc_op(inc, b);
                inc = 0;
                has_inc = false;
            } else {
                return Err(StatesError::InvalidOperation);
            }
        }

        if has_inc {
            return Err(StatesError::MissingOp);
        }

        Ok(states)
    }
}

impl<const N: usize> TryFrom<&[u8; N]> for AlignmentStates {
    type Error = StatesError;

    #[inline]
    fn try_from(v: &[u8; N]) -> Result<Self, Self::Error> {
        AlignmentStates::try_from(v.as_slice())
    }
}

impl TryFrom<&str> for AlignmentStates {
    type Error = StatesError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        AlignmentStates::try_from(s.as_bytes())
    }
}
