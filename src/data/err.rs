use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    /// Returns the value, or prints the error to stderr and exits with its
    /// code.
    fn unwrap_or_fail(self) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::GetCode;
    use crate::alignment::{AlignmentError, ScoringError, StatesError};

    #[test]
    fn exit_codes() {
        assert_eq!(AlignmentError::MissingInput("first sequence").get_code(), 2);
        assert_eq!(AlignmentError::DoubleGap(3).get_code(), 1);
        assert_eq!(AlignmentError::GapInInput("second").get_code(), 1);
        assert_eq!(ScoringError::PositiveGap(2).get_code(), 1);
        assert_eq!(StatesError::MissingOp.get_code(), 1);
        assert_eq!(std::io::Error::other("closed").get_code(), 1);
    }
}
