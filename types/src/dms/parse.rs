use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::{consts::NEGATIVE_SIGN, errors::ParseDmsError, Dms, Sign};

lazy_static! {
    // anything except the digits, decimal point and the minus sign
    static ref SEPARATORS: Regex = Regex::new(r"[^\d.\-]+").expect("Separators regex is valid");
}

impl Dms {
    /// Try to interpret the human-entered text as an angle.
    ///
    /// Up to three numbers (degrees, minutes and seconds) separated by
    /// anything except the decimal point are recognized,
    /// so all of the `45 30 15`, `45°30'15"` and `45d 30m 15s` produce the same angle.
    /// A single minus sign anywhere in the text makes the angle negative.
    ///
    /// Malformed, ambiguous or out-of-range text produces `None`.
    /// Use the [`FromStr`] implementation to get the reason.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse()
            .map_err(|err: ParseDmsError| debug!("Rejected angle {:?}: {}", text, err))
            .ok()
    }

    /// The same as [`parse`](#method.parse), but the missing text is not an angle either.
    pub fn parse_optional(text: Option<&str>) -> Option<Self> {
        text.and_then(Self::parse)
    }

    /// Absolute values of the first three numbers in the text.
    /// The missing ones are zeros.
    fn magnitudes(s: &str) -> Result<[f64; 3], ParseDmsError> {
        // separators at the ends produce empty pieces
        let tokens = SEPARATORS.split(s).filter(|token| !token.is_empty());

        let mut parts = [0.0; 3];
        for (part, token) in parts.iter_mut().zip(tokens) {
            *part = token.parse::<f64>()?.abs();
        }

        Ok(parts)
    }
}

impl FromStr for Dms {
    type Err = ParseDmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseDmsError::Empty);
        }

        let minus_count = s.matches(NEGATIVE_SIGN).count();
        if minus_count > 1 {
            return Err(ParseDmsError::AmbiguousSign);
        }

        let [deg, min, sec] = Self::magnitudes(s)?;
        let sign = Sign::from(minus_count == 0);

        Ok(Self::with_sign(deg, min, sec, sign)?)
    }
}
