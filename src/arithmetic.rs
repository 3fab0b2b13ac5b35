//! Sign-aware addition, subtraction, and negation.
//!
//! The magnitude routines in the submodules know nothing about signs;
//! this module pairs them with a case analysis over the operand signs.
//! Same-sign addition (and opposite-sign subtraction) adds magnitudes,
//! everything else compares magnitudes to pick a subtraction order and
//! the sign of the result.
//!
//! Operands are never mutated; every operation allocates a fresh value.

use core::cmp::Ordering;
use core::ops::{Add, Neg, Sub};

use crate::{DecimalBigInt, Sign};

mod add;
mod compare;
mod subtract;

use add::add_magnitudes;
pub(crate) use compare::cmp_magnitudes;
use subtract::sub_magnitudes;

impl Add for &DecimalBigInt {
    type Output = DecimalBigInt;

    fn add(self, summand: Self) -> Self::Output {
        let (x, y) = (self.magnitude(), summand.magnitude());
        match (self.sign(), summand.sign()) {
            (sign_x, sign_y) if sign_x == sign_y => {
                DecimalBigInt::from_digits(add_magnitudes(x, y), sign_x)
            }
            (sign_x, sign_y) => match cmp_magnitudes(x, y) {
                Ordering::Equal => DecimalBigInt::zero(),
                Ordering::Greater => DecimalBigInt::from_digits(sub_magnitudes(x, y), sign_x),
                Ordering::Less => DecimalBigInt::from_digits(sub_magnitudes(y, x), sign_y),
            },
        }
    }
}

impl Sub for &DecimalBigInt {
    type Output = DecimalBigInt;

    /// Mirrors the case analysis of [`Add`] rather than rewriting
    /// `x - y` as `x + (-y)`: opposite signs add magnitudes under
    /// `self`'s sign; matching signs subtract the smaller magnitude
    /// from the larger, and when the subtrahend's magnitude wins, the
    /// result takes the opposite of the subtrahend's sign.
    fn sub(self, subtrahend: Self) -> Self::Output {
        let (x, y) = (self.magnitude(), subtrahend.magnitude());
        match (self.sign(), subtrahend.sign()) {
            (sign_x, sign_y) if sign_x != sign_y => {
                DecimalBigInt::from_digits(add_magnitudes(x, y), sign_x)
            }
            (sign_x, sign_y) => match cmp_magnitudes(x, y) {
                Ordering::Equal => DecimalBigInt::zero(),
                Ordering::Greater => DecimalBigInt::from_digits(sub_magnitudes(x, y), sign_x),
                Ordering::Less => {
                    DecimalBigInt::from_digits(sub_magnitudes(y, x), sign_y.negated())
                }
            },
        }
    }
}

impl Neg for &DecimalBigInt {
    type Output = DecimalBigInt;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            // zero has no negative representation
            DecimalBigInt::zero()
        } else {
            DecimalBigInt::from_digits(self.magnitude().to_vec(), self.sign().negated())
        }
    }
}

impl Add for DecimalBigInt {
    type Output = Self;

    fn add(self, summand: Self) -> Self::Output {
        &self + &summand
    }
}

impl Sub for DecimalBigInt {
    type Output = Self;

    fn sub(self, subtrahend: Self) -> Self::Output {
        &self - &subtrahend
    }
}

impl Neg for DecimalBigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[cfg(test)]
mod test {
    use crate::DecimalBigInt;

    fn int(s: &str) -> DecimalBigInt {
        s.parse().unwrap()
    }

    #[test]
    fn add_two_negatives() {
        assert_eq!((&int("-1102020") + &int("-2912993")).to_string(), "-4015013");
    }

    #[test]
    fn subtract_two_negatives() {
        assert_eq!((&int("-1102020") - &int("-2912993")).to_string(), "1810973");
    }

    #[test]
    fn subtract_self_is_zero() {
        let difference = &int("500") - &int("500");
        assert_eq!(difference.to_string(), "0");
        assert!(difference.is_positive());
    }

    #[test]
    fn add_carry_across_lengths() {
        assert_eq!((&int("999") + &int("1")).to_string(), "1000");
        assert_eq!((&int("1") + &int("999")).to_string(), "1000");
    }

    #[test]
    fn subtract_borrow_across_lengths() {
        assert_eq!((&int("1000") - &int("1")).to_string(), "999");
    }

    #[test]
    fn add_opposite_signs() {
        assert_eq!((&int("100") + &int("-1")).to_string(), "99");
        assert_eq!((&int("1") + &int("-100")).to_string(), "-99");
        assert_eq!((&int("-100") + &int("100")).to_string(), "0");
    }

    #[test]
    fn subtract_opposite_signs() {
        assert_eq!((&int("100") - &int("-1")).to_string(), "101");
        assert_eq!((&int("-100") - &int("1")).to_string(), "-101");
        assert_eq!((&int("1") - &int("100")).to_string(), "-99");
    }

    #[test]
    fn addition_commutes() {
        for (a, b) in [("123456789", "-987654321"), ("-5", "-5"), ("0", "42")] {
            assert_eq!(&int(a) + &int(b), &int(b) + &int(a));
        }
    }

    #[test]
    fn inverse_property() {
        for s in ["0", "7", "-7", "123456789123456789"] {
            assert_eq!(&int(s) - &int(s), DecimalBigInt::zero());
        }
    }

    #[test]
    fn double_negation() {
        for s in ["42", "-42", "0"] {
            let value = int(s);
            assert_eq!(-&-&value, value);
        }
    }

    #[test]
    fn negate_zero_stays_canonical() {
        let negated = -&int("0");
        assert!(negated.is_positive());
        assert_eq!(negated.to_string(), "0");
    }

    #[test]
    fn zero_through_arithmetic_is_canonical() {
        // sum of opposites must not keep a negative sign
        assert!((&int("-500") + &int("500")).is_positive());
        assert!((&int("-500") - &int("-500")).is_positive());
    }

    #[test]
    fn owned_operators_delegate() {
        assert_eq!((int("2") + int("3")).to_string(), "5");
        assert_eq!((int("2") - int("3")).to_string(), "-1");
        assert_eq!((-int("2")).to_string(), "-2");
    }
}
