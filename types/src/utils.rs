//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Round the number to the given amount of decimal fraction digits.
///
/// The halves are rounded away from zero.
/// When more digits requested than `f64` can hold meaningfully,
/// the value is returned as is: the formatter is exact at that point.
pub(crate) fn round_to_digits(value: f64, digits: usize) -> f64 {
    if digits > f64::DIGITS as usize {
        return value;
    }

    let scale = 10_f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn round_whole() {
        assert_abs_diff_eq!(round_to_digits(59.4, 0), 59.0);
        assert_abs_diff_eq!(round_to_digits(59.5, 0), 60.0);
        assert_abs_diff_eq!(round_to_digits(30.5, 0), 31.0);
    }

    #[test]
    fn round_fraction() {
        assert_abs_diff_eq!(round_to_digits(12.344, 2), 12.34);
        assert_abs_diff_eq!(round_to_digits(12.346, 2), 12.35);
        assert_abs_diff_eq!(round_to_digits(59.999_96, 4), 60.0);
    }

    #[test]
    fn too_many_digits_are_kept() {
        let value = 59.999_999_999_999_99;
        assert_eq!(round_to_digits(value, 20).to_bits(), value.to_bits());
    }
}
