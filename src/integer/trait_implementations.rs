use core::{cmp::Ordering, fmt, ops::Neg, str::FromStr};

use super::{DecimalBigInt, Sign};
use crate::magnitude::trim_leading_zeros;
use crate::{Error, Result};

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl FromStr for DecimalBigInt {
    type Err = Error;

    /// An optional leading `-`, then one or more ASCII digits.
    ///
    /// Anything else – the empty string, a bare `-`, a `+` prefix, any
    /// non-digit character – is [`Error::InvalidFormat`].
    ///
    /// The parsed value is canonical: leading zeros are dropped and
    /// `-0` comes back as plain zero, so parsing followed by
    /// [`Display`](fmt::Display) yields the canonical form of the
    /// input.
    fn from_str(s: &str) -> Result<Self> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        if digits.is_empty() {
            return Err(Error::InvalidFormat);
        }
        let digits = digits
            .bytes()
            .map(|byte| match byte {
                b'0'..=b'9' => Ok(byte - b'0'),
                _ => Err(Error::InvalidFormat),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_digits(trim_leading_zeros(digits), sign))
    }
}

impl fmt::Display for DecimalBigInt {
    /// A `-` for negative values, then the digits most significant
    /// first. Zero is normalized to a positive sign at construction,
    /// so `-0` cannot be printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive() {
            f.write_str("-")?;
        }
        for &digit in self.magnitude().iter() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DecimalBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalBigInt({})", self)
    }
}

// The derived order would compare the digit vectors as plain slices,
// front to back, and ignore the sign. Numeric order needs the sign
// first, and between two negatives the larger magnitude is the smaller
// value.
impl Ord for DecimalBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude().cmp(other.magnitude()),
            (Sign::Negative, Sign::Negative) => other.magnitude().cmp(self.magnitude()),
        }
    }
}

impl PartialOrd for DecimalBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for DecimalBigInt {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let mut remaining = value.unsigned_abs();
        let mut digits = Vec::new();
        loop {
            digits.push((remaining % 10) as u8);
            remaining /= 10;
            if remaining == 0 {
                break;
            }
        }
        digits.reverse();
        Self::from_digits(digits, sign)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn int(s: &str) -> DecimalBigInt {
        s.parse().unwrap()
    }

    #[test]
    fn round_trip() {
        for s in ["0", "7", "-7", "1102020", "-2912993", "123456789123456789"] {
            assert_eq!(int(s).to_string(), s);
        }
    }

    #[test]
    fn parsing_canonicalizes() {
        assert_eq!(int("007").to_string(), "7");
        assert_eq!(int("-007").to_string(), "-7");
        assert_eq!(int("000").to_string(), "0");
        assert_eq!(int("-0").to_string(), "0");
        assert!(int("-0").is_positive());
    }

    #[test]
    fn invalid_format() {
        for s in ["", "-", "12a3", "+5", "1.5", " 1", "--1", "-1-"] {
            assert_eq!(s.parse::<DecimalBigInt>(), Err(Error::InvalidFormat));
        }
    }

    #[test]
    fn from_i64() {
        assert_eq!(DecimalBigInt::from(0).to_string(), "0");
        assert_eq!(DecimalBigInt::from(-42).to_string(), "-42");
        assert_eq!(DecimalBigInt::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(DecimalBigInt::from(905), int("905"));
    }

    #[test]
    fn numeric_order() {
        let mut values = vec![int("10"), int("-10"), int("0"), int("9"), int("-2")];
        values.sort();
        let sorted: Vec<_> = values.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, ["-10", "-2", "0", "9", "10"]);
    }

    #[test]
    fn debug_shows_decimal() {
        assert_eq!(format!("{:?}", int("-42")), "DecimalBigInt(-42)");
    }
}
