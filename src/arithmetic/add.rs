use crate::digit::{Digit, RADIX};
use crate::magnitude::Magnitude;

/// Add with carry: digit sum of `a + b + carry`, carry updated in place.
#[inline]
pub(crate) fn adc(a: Digit, b: Digit, carry: &mut Digit) -> Digit {
    let sum = a + b + *carry;
    *carry = sum / RADIX;
    sum % RADIX
}

/// Digit sequence of `a + b`, both taken as non-negative magnitudes.
///
/// Walks the operands least-significant first, zero-padding the shorter
/// one, and prepends the final carry if one is left over. The result
/// carries no leading zero unless both inputs are zero, in which case it
/// is the single digit `0`.
pub(crate) fn add_magnitudes(a: &Magnitude, b: &Magnitude) -> Vec<Digit> {
    let (n_a, n_b) = (a.len(), b.len());
    let n = n_a.max(n_b);

    let mut sum = vec![0; n];
    let mut carry = 0;
    for i in 0..n {
        let t_a = if i < n_a { a[n_a - 1 - i] } else { 0 };
        let t_b = if i < n_b { b[n_b - 1 - i] } else { 0 };
        sum[n - 1 - i] = adc(t_a, t_b, &mut carry);
    }

    if carry != 0 {
        sum.insert(0, carry);
    }
    sum
}

#[cfg(test)]
mod test {
    use super::*;

    fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
        add_magnitudes(Magnitude::from_digits(a), Magnitude::from_digits(b))
    }

    #[test]
    fn no_carry() {
        assert_eq!(add(&[1, 2, 3], &[4, 5, 6]), vec![5, 7, 9]);
    }

    #[test]
    fn carry_chain() {
        assert_eq!(add(&[9, 9, 9], &[1]), vec![1, 0, 0, 0]);
        assert_eq!(add(&[1], &[9, 9, 9]), vec![1, 0, 0, 0]);
    }

    #[test]
    fn uneven_lengths() {
        assert_eq!(add(&[1, 0, 0, 0], &[2, 5]), vec![1, 0, 2, 5]);
    }

    #[test]
    fn zero_operands() {
        assert_eq!(add(&[0], &[0]), vec![0]);
        assert_eq!(add(&[0], &[7, 7]), vec![7, 7]);
    }
}
