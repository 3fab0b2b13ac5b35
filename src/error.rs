/// The ways construction can fail.
///
/// Arithmetic on well-formed values never fails – arbitrary precision
/// leaves no room for overflow.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Input is not an optionally `-`-prefixed run of ASCII digits.
    #[error("not a decimal integer")]
    InvalidFormat,
    /// Too few elements to pick three from.
    #[error("fewer than three elements")]
    InvalidArgument,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
