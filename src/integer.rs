use crate::digit::{Digit, RADIX};
use crate::magnitude::Magnitude;

mod trait_implementations;

/// Sign of a [`DecimalBigInt`].
///
/// Zero always carries `Positive`; there is no negative zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn is_positive(self) -> bool {
        matches!(self, Sign::Positive)
    }

    /// The opposite sign.
    pub fn negated(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Signed decimal integer of unbounded magnitude.
///
/// Base-10 digits, most significant first, at least one digit. Values
/// are immutable once constructed: the arithmetic operators allocate
/// fresh results and never touch their operands, so sharing values
/// across threads needs no synchronization.
///
/// Construction goes through [`str::parse`] for decimal strings, or
/// [`Self::from_digits`] for an already-computed magnitude.
///
/// ```
/// use decint::DecimalBigInt;
///
/// let a: DecimalBigInt = "-1102020".parse().unwrap();
/// let b: DecimalBigInt = "-2912993".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "-4015013");
/// assert_eq!((&a - &b).to_string(), "1810973");
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct DecimalBigInt {
    digits: Vec<Digit>,
    sign: Sign,
}

impl DecimalBigInt {
    /// The canonical zero: single `0` digit, positive sign.
    pub fn zero() -> Self {
        Self { digits: vec![0], sign: Sign::Positive }
    }

    /// Construct from an already-computed magnitude.
    ///
    /// Trusts the caller on trimming – the arithmetic producers trim
    /// their results and string parsing canonicalizes before calling
    /// here – but a zero magnitude never keeps a negative sign.
    ///
    /// The digits must be base-10 values (not ASCII), most significant
    /// first, and non-empty.
    pub fn from_digits(digits: Vec<Digit>, sign: Sign) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&digit| digit < RADIX));
        let sign = if Magnitude::from_digits(&digits).is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { digits, sign }
    }

    /// The digit sequence, most significant first.
    pub fn magnitude(&self) -> &Magnitude {
        Magnitude::from_digits(&self.digits)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_positive(&self) -> bool {
        self.sign.is_positive()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude().is_zero()
    }
}
