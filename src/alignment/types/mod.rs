mod aligned;
mod matrix;
mod states;
mod std_traits;

pub(crate) use matrix::*;

pub use aligned::*;
pub use states::*;
