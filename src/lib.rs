//! Arbitrary-precision signed decimal integers.
//!
//! [`DecimalBigInt`] stores base-10 digits, most significant first,
//! next to a [`Sign`]. Addition, subtraction, and negation are pure:
//! operands are never mutated and every result is a freshly allocated,
//! canonical value (no leading zeros out of arithmetic, no negative
//! zero). With no interior mutability anywhere, values can be shared
//! across threads freely.
//!
//! The [`max_product`] module is an independent exercise living in the
//! same crate: the largest product of any three elements of a slice,
//! solved once by sorting and once in a single pass.

mod arithmetic;
mod digit;
pub use digit::{Digit, Digits};
mod error;
pub use error::{Error, Result};
mod integer;
pub use integer::{DecimalBigInt, Sign};
mod magnitude;
pub use magnitude::Magnitude;
pub mod max_product;
