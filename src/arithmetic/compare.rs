use core::cmp::Ordering;

use crate::magnitude::Magnitude;

/// Order two trimmed magnitudes.
///
/// A shorter digit sequence is always the smaller magnitude; this
/// relies on producers never leaving leading zeros behind. Equal
/// lengths fall back to digit-by-digit comparison, most significant
/// digit first, with the first differing position deciding.
pub(crate) fn cmp_magnitudes(a: &Magnitude, b: &Magnitude) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_magnitudes(self, other)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
