//! Maximum product of any three elements of a slice.
//!
//! Two interchangeable implementations. Both reduce to the same two
//! candidate triples: the three largest values, or the two smallest
//! (most negative) values times the single largest. [`max_product`]
//! sorts, [`max_product_linear`] keeps five running extrema in a single
//! pass. Unlike the big-integer type in the rest of this crate, the
//! arithmetic here is plain fixed-width `i64`.

use crate::{Error, Result};

/// Sort-based variant, `O(n log n)`.
///
/// Fails with [`Error::InvalidArgument`] for slices shorter than three.
pub fn max_product(values: &[i64]) -> Result<i64> {
    let n = values.len();
    if n < 3 {
        return Err(Error::InvalidArgument);
    }
    if n == 3 {
        return Ok(values[0] * values[1] * values[2]);
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    Ok((sorted[0] * sorted[1] * sorted[n - 1]).max(sorted[n - 3] * sorted[n - 2] * sorted[n - 1]))
}

/// Running-selection variant, `O(n)`.
///
/// Tracks the three largest and two smallest elements seen so far; the
/// five slots replace the sort. Agrees with [`max_product`] on every
/// input, including the short-slice error.
pub fn max_product_linear(values: &[i64]) -> Result<i64> {
    if values.len() < 3 {
        return Err(Error::InvalidArgument);
    }

    let (mut max1, mut max2, mut max3) = (i64::MIN, i64::MIN, i64::MIN);
    let (mut min1, mut min2) = (i64::MAX, i64::MAX);
    for &value in values {
        if value > max1 {
            max3 = max2;
            max2 = max1;
            max1 = value;
        } else if value > max2 {
            max3 = max2;
            max2 = value;
        } else if value > max3 {
            max3 = value;
        }
        if value < min1 {
            min2 = min1;
            min1 = value;
        } else if value < min2 {
            min2 = value;
        }
    }

    Ok((max1 * max2 * max3).max(min1 * min2 * max1))
}
