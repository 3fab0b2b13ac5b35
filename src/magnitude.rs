use core::ops::Deref;

use ref_cast::RefCast;

use crate::{Digit, Digits};

/// Borrowed view of a digit sequence as a non-negative magnitude.
///
/// Most-significant digit first. Owning code keeps a `Vec<Digit>` and
/// borrows it here (the `Path`/`PathBuf` split); the cast is free since
/// the wrapper is `repr(transparent)`.
///
/// The magnitude-only comparison lives next to the carry/borrow
/// routines, as it is one of the three primitives the sign dispatch is
/// built from.
#[repr(transparent)]
#[derive(Debug, Eq, PartialEq, RefCast)]
pub struct Magnitude(Digits);

impl Magnitude {
    pub fn from_digits(digits: &Digits) -> &Self {
        Self::ref_cast(digits)
    }

    /// True iff every digit is zero.
    ///
    /// Trimmed producers only ever leave the single-digit `[0]` shape
    /// behind, but untrimmed caller-supplied magnitudes are allowed, so
    /// all digits are checked.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&digit| digit == 0)
    }
}

impl Deref for Magnitude {
    type Target = Digits;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Drop leading zeros, collapsing an all-zero sequence to the canonical
/// single `0` digit. Never returns an empty sequence.
pub(crate) fn trim_leading_zeros(mut digits: Vec<Digit>) -> Vec<Digit> {
    debug_assert!(!digits.is_empty());
    let leading = digits.iter().take_while(|&&digit| digit == 0).count();
    if leading == digits.len() {
        digits.truncate(1);
    } else {
        digits.drain(..leading);
    }
    digits
}
