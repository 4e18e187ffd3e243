//! Two-way conversion for the text field where an angle is typed
//! either in decimal degrees or in DMS.

use std::{error::Error, fmt};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    dms::{consts::DEFAULT_FRACTION_DIGITS, Dms},
    value::{as_number, AngleValue},
};

lazy_static! {
    static ref NOT_ANGLE_CHAR: Regex =
        Regex::new(r"[^\s.\-\d]").expect("Angle characters regex is valid");
}

/// The text typed into the field is neither a number nor a DMS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAngleInput {
    text: String,
}

impl InvalidAngleInput {
    /// The rejected text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for InvalidAngleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not an angle: {:?}", self.text)
    }
}

impl Error for InvalidAngleInput {}

/// Convert the text typed by a user into decimal degrees.
///
/// All the characters except the digits, whitespaces, decimal points and the minus
/// are treated as separators, so the text is either a plain number
/// or up to three numbers of the DMS.
///
/// The empty text gives no value at all (`Ok(None)`) and is not an error.
///
/// # Errors
/// When the text cannot be interpreted as an angle.
pub fn parse_view(text: &str) -> Result<Option<f64>, InvalidAngleInput> {
    if text.is_empty() {
        return Ok(None);
    }

    let cleaned = NOT_ANGLE_CHAR.replace_all(text, " ");
    if let Some(value) = as_number(&cleaned) {
        return Ok(Some(value));
    }

    if let Some(angle) = Dms::parse(&cleaned) {
        return Ok(Some(angle.to_decimal()));
    }

    debug!("Invalid angle input {:?}", text);
    Err(InvalidAngleInput {
        text: text.to_owned(),
    })
}

/// Show the stored value in the text field.
///
/// The numbers are shown as is, everything else as DMS
/// (or nothing, if the value is not an angle).
pub fn format_model(value: &AngleValue) -> String {
    match value {
        AngleValue::Number(number) if number.is_finite() => number.to_string(),
        AngleValue::Text(text) => as_number(text).map_or_else(
            || value.dms_string(DEFAULT_FRACTION_DIGITS),
            |number| number.to_string(),
        ),
        _ => value.dms_string(DEFAULT_FRACTION_DIGITS),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn empty_has_no_value() {
        assert_eq!(parse_view(""), Ok(None));
    }

    #[test]
    fn plain_number() {
        assert_eq!(parse_view("12.5"), Ok(Some(12.5)));
        assert_eq!(parse_view("-0.75"), Ok(Some(-0.75)));
    }

    #[test]
    fn number_with_degree_sign() {
        assert_eq!(parse_view("12.5°"), Ok(Some(12.5)));
    }

    #[test]
    fn dms() {
        let value = parse_view("45°30'15\"").unwrap().unwrap();
        assert_abs_diff_eq!(value, 45.504_166_666_666_67, epsilon = 1e-12);

        let value = parse_view("-10d 15m").unwrap().unwrap();
        assert_abs_diff_eq!(value, -10.25);
    }

    #[test]
    fn invalid() {
        let err = parse_view("10 75 0").unwrap_err();
        assert_eq!(err.text(), "10 75 0");
        assert_eq!(err.to_string(), "Not an angle: \"10 75 0\"");

        assert!(parse_view("1-2-3").is_err());
        assert!(parse_view("1.2.3").is_err());
    }

    #[test]
    fn letters_only_is_zero() {
        assert_eq!(parse_view("abc"), Ok(Some(0.0)));
        assert_eq!(parse_view("   "), Ok(Some(0.0)));
    }

    #[test]
    fn format_numbers() {
        assert_eq!(format_model(&AngleValue::from(12.5)), "12.5");
        assert_eq!(format_model(&AngleValue::from(-3.0)), "-3");
        assert_eq!(format_model(&AngleValue::from(" 7.25 ")), "7.25");
    }

    #[test]
    fn format_dms() {
        assert_eq!(format_model(&AngleValue::from("12 30 15.4")), "12°30'15\"");

        let angle = Dms::new(1, 2, 3, -1).unwrap();
        assert_eq!(format_model(&AngleValue::from(angle)), "-1°2'3\"");

        assert_eq!(format_model(&AngleValue::from("north")), "0°0'0\"");
    }

    #[test]
    fn format_not_an_angle() {
        assert_eq!(format_model(&AngleValue::from("1-2-3")), "");
        assert_eq!(format_model(&AngleValue::from(f64::NAN)), "");
    }

    #[test]
    fn typed_value_shown_back() {
        let value = parse_view("-33 52 10").unwrap().unwrap();
        let dms = AngleValue::from(Dms::from_decimal(value).unwrap());
        assert_eq!(format_model(&dms), "-33°52'10\"");
    }
}
