use std::fmt;

use crate::utils::round_to_digits;

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN,
        DEFAULT_FRACTION_DIGITS, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE,
    },
    Dms,
};

impl Dms {
    /// Parts of the angle as they appear when printed
    /// with the given number of arc seconds' fraction digits.
    ///
    /// Rounding the seconds can reach the full minute (e.g. `59.6"` with no fraction digits).
    /// The overflow is carried into the minutes and further into the degrees,
    /// so the printed seconds and minutes are always less than 60.
    pub fn display_parts(self, fraction_digits: usize) -> (f64, f64, f64) {
        let mut degrees = self.degrees;
        let mut minutes = self.minutes;
        let mut seconds = round_to_digits(self.seconds, fraction_digits);

        if seconds >= SECONDS_IN_MINUTE {
            seconds = 0.0;
            minutes += 1.0;

            if minutes >= MINUTES_IN_DEGREE {
                minutes -= MINUTES_IN_DEGREE;
                degrees += 1.0;
            }
        }

        (degrees, minutes, seconds)
    }

    /// Text representation with the given number of arc seconds' fraction digits,
    /// the same as `format!("{:.N}", angle)`.
    pub fn to_string_with(self, fraction_digits: usize) -> String {
        format!("{:.*}", fraction_digits, self)
    }
}

/// By default, prints the angle as `-D°M'S"`.
///
/// The precision sets the number of arc seconds' fraction digits.
/// The alternate form uses the prime signs: `-D°M′S″`.
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction_digits = f.precision().unwrap_or(DEFAULT_FRACTION_DIGITS);
        let (deg, arc_min, arc_sec) = self.display_parts(fraction_digits);

        let (min_sign, sec_sign) = if f.alternate() {
            (ARC_MINUTE_SIGN, ARC_SECOND_SIGN)
        } else {
            (ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN)
        };

        if self.sign.is_negative() {
            write!(f, "-")?;
        }

        write!(
            f,
            "{}{}{}{}{:.*}{}",
            deg, DEGREE_SIGN, arc_min, min_sign, fraction_digits, arc_sec, sec_sign
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_whole() {
        let angle = Dms::new(45, 30, 15, 1).unwrap();
        assert_eq!(angle.to_string(), "45°30'15\"");
    }

    #[test]
    fn print_zero() {
        assert_eq!(Dms::default().to_string(), "0°0'0\"");
    }

    #[test]
    fn print_negative() {
        let angle = Dms::new(10, 0, 0, -1).unwrap();
        assert_eq!(angle.to_string(), "-10°0'0\"");
    }

    #[test]
    fn print_negative_less_than_degree() {
        let angle = Dms::new(0, 0, 30, -1).unwrap();
        assert_eq!(angle.to_string(), "-0°0'30\"");
    }

    #[test]
    fn print_fraction() {
        let angle = Dms::new(60, 32, 48.18, 1).unwrap();
        assert_eq!(format!("{:.2}", angle), "60°32'48.18\"");
        assert_eq!(format!("{:.3}", angle), "60°32'48.180\"");
        assert_eq!(angle.to_string_with(1), "60°32'48.2\"");
    }

    #[test]
    fn print_default_precision_rounds() {
        let angle = Dms::new(60, 32, 48.5, 1).unwrap();
        assert_eq!(angle.to_string(), "60°32'49\"");

        let angle = Dms::new(60, 32, 48.49, 1).unwrap();
        assert_eq!(angle.to_string(), "60°32'48\"");
    }

    #[test]
    fn print_as_primes() {
        let angle = Dms::new(60, 32, 48.18, -1).unwrap();
        assert_eq!(format!("{:#.2}", angle), "-60°32′48.18″");
    }

    #[test]
    fn print_fractional_parts() {
        let angle = Dms::new(45.5, 0, 0, 1).unwrap();
        assert_eq!(angle.to_string(), "45.5°0'0\"");
    }

    #[test]
    fn seconds_overflow_into_minutes() {
        let angle = Dms::new(10, 30, 59.6, 1).unwrap();
        assert_eq!(angle.to_string(), "10°31'0\"");
        assert_eq!(angle.to_string_with(1), "10°30'59.6\"");
    }

    #[test]
    fn seconds_overflow_with_fraction_digits() {
        let angle = Dms::new(10, 30, 59.996, 1).unwrap();
        assert_eq!(angle.to_string_with(2), "10°31'0.00\"");
        assert_eq!(angle.to_string_with(3), "10°30'59.996\"");
    }

    #[test]
    fn seconds_overflow_into_degrees() {
        let angle = Dms::new(35, 59, 59.9, -1).unwrap();
        assert_eq!(angle.to_string(), "-36°0'0\"");
    }

    #[test]
    fn overflow_from_decimal() {
        let angle = Dms::from_decimal(35.999_999_999).unwrap();
        assert_eq!(angle.to_string_with(0), "36°0'0\"");
        assert_eq!(angle.to_string_with(4), "36°0'0.0000\"");
    }

    #[test]
    fn overflow_does_not_change_the_angle() {
        let angle = Dms::from_decimal(35.999_999_999).unwrap();
        let _s = angle.to_string();

        assert_eq!(angle.degrees(), 35.0);
        assert_eq!(angle.minutes(), 59.0);
    }

    #[test]
    fn many_fraction_digits() {
        let angle = Dms::new(1, 2, 3.5, 1).unwrap();
        assert_eq!(angle.to_string_with(20), "1°2'3.50000000000000000000\"");
    }

    #[test]
    fn display_parts() {
        let angle = Dms::new(7, 59, 59.5, 1).unwrap();
        assert_eq!(angle.display_parts(0), (8.0, 0.0, 0.0));
        assert_eq!(angle.display_parts(1), (7.0, 59.0, 59.5));
    }
}
