use crate::digit::{Digit, RADIX};
use crate::magnitude::{trim_leading_zeros, Magnitude};

/// Subtract with borrow: digit difference of `a - borrow - b`, borrow
/// updated in place.
#[inline]
pub(crate) fn sbb(a: Digit, b: Digit, borrow: &mut Digit) -> Digit {
    // digits and borrow fit an i8 with room to spare
    let difference = a as i8 - *borrow as i8 - b as i8;
    if difference < 0 {
        *borrow = 1;
        (difference + RADIX as i8) as Digit
    } else {
        *borrow = 0;
        difference as Digit
    }
}

/// Digit sequence of `a - b`.
///
/// Precondition: `a >= b` as magnitudes. The sign dispatch in the parent
/// module orders its operands before calling here, so a borrow out of
/// the most significant position cannot happen.
///
/// Leading zeros are trimmed from the result; an all-zero difference
/// collapses to the single digit `0`.
pub(crate) fn sub_magnitudes(a: &Magnitude, b: &Magnitude) -> Vec<Digit> {
    debug_assert!(super::cmp_magnitudes(a, b) != core::cmp::Ordering::Less);
    let (n_a, n_b) = (a.len(), b.len());

    let mut difference = vec![0; n_a];
    let mut borrow = 0;
    for i in 0..n_a {
        let t_b = if i < n_b { b[n_b - 1 - i] } else { 0 };
        difference[n_a - 1 - i] = sbb(a[n_a - 1 - i], t_b, &mut borrow);
    }
    debug_assert_eq!(borrow, 0);

    trim_leading_zeros(difference)
}
