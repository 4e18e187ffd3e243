//! A value which can hold an angle in any of the forms
//! the user is able to provide: a decimal number, a text or an already constructed angle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dms::Dms;

/// Whether the text is a plain decimal number.
///
/// The surrounding whitespaces are ignored.
/// Infinities and NaN-s are not considered numbers.
pub fn as_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// The text should be treated as decimal degrees and not as DMS
pub fn is_numeric(text: &str) -> bool {
    as_number(text).is_some()
}

/// Anything that can represent an angle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum AngleValue {
    /// Decimal degrees
    Number(f64),
    /// The decimal degrees or the DMS in a free form
    Text(String),
    /// Validated DMS
    Angle(Dms),
}

/// The [`AngleValue`] after the classification
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Normalized {
    /// The value is the decimal degrees
    Decimal(f64),
    /// The value is the DMS
    Angle(Dms),
    /// Nothing looks like an angle
    Unresolved,
}

impl AngleValue {
    /// Classify the value. Every conversion starts here.
    pub fn normalize(&self) -> Normalized {
        match self {
            Self::Number(value) if value.is_finite() => Normalized::Decimal(*value),
            Self::Number(_) => Normalized::Unresolved,
            Self::Text(text) => as_number(text)
                .map(Normalized::Decimal)
                .or_else(|| Dms::parse(text).map(Normalized::Angle))
                .unwrap_or(Normalized::Unresolved),
            Self::Angle(angle) => Normalized::Angle(*angle),
        }
    }

    /// The value as the signed decimal degrees
    pub fn to_decimal(&self) -> Option<f64> {
        match self.normalize() {
            Normalized::Decimal(value) => Some(value),
            Normalized::Angle(angle) => Some(angle.to_decimal()),
            Normalized::Unresolved => None,
        }
    }

    /// The value as the DMS
    pub fn to_dms(&self) -> Option<Dms> {
        match self.normalize() {
            Normalized::Decimal(value) => Dms::from_decimal(value).ok(),
            Normalized::Angle(angle) => Some(angle),
            Normalized::Unresolved => None,
        }
    }

    /// The DMS text representation of the value
    /// or an empty string if the value is not an angle.
    pub fn dms_string(&self, fraction_digits: usize) -> String {
        self.to_dms()
            .map(|angle| angle.to_string_with(fraction_digits))
            .unwrap_or_default()
    }
}

impl From<f64> for AngleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AngleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for AngleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Dms> for AngleValue {
    fn from(angle: Dms) -> Self {
        Self::Angle(angle)
    }
}
