/// A single base-10 digit. [`DecimalBigInt`](crate::DecimalBigInt) is composed of many digits.
///
/// Stored as the digit's value (`0..=9`), never as its ASCII code point.
pub type Digit = u8;

/// Multiple [`Digit`]s, most-significant first.
pub type Digits = [Digit];

/// The base of the representation.
pub(crate) const RADIX: Digit = 10;
