//! The angle stored as separate degrees, arc minutes and arc seconds
//! along with the sign of the whole angle.
//!
//! Unlike the fixed-point angles, the parts are kept as floating numbers,
//! so the decimal degrees converted into DMS and back
//! differ only by the floating point error.

use std::ops::Neg;

use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) mod consts;
mod errors;
mod format;
mod parse;

pub use errors::{Component, ParseDmsError, ValidationError};

use self::consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE};

/// The direction of an angle
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// Zero or more
    #[default]
    Positive,
    /// Less than zero
    Negative,
}

impl Sign {
    /// The multiplier for the angle's magnitude
    pub const fn factor(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    /// Is the angle less than zero
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl From<bool> for Sign {
    fn from(is_positive: bool) -> Self {
        if is_positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl TryFrom<f64> for Sign {
    type Error = ValidationError;

    #[allow(clippy::float_cmp)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Self::Positive)
        } else if value == -1.0 {
            Ok(Self::Negative)
        } else {
            Err(ValidationError::InvalidSign)
        }
    }
}

impl TryFrom<i8> for Sign {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            _ => Err(ValidationError::InvalidSign),
        }
    }
}

/// Validated Degree-Minute-Second representation of an angle.
///
/// The sign of the angle is kept separately,
/// so all the parts are non-negative.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "DmsParts", into = "DmsParts")
)]
pub struct Dms {
    degrees: f64,
    minutes: f64,
    seconds: f64,
    sign: Sign,
}

impl Dms {
    /// Construct the angle from its parts.
    /// Any number-like values are accepted.
    ///
    /// # Errors
    /// When some part cannot be represented as a finite number,
    /// or it is out of its range:
    /// - `degrees >= 0`;
    /// - `0 <= minutes < 60`;
    /// - `0 <= seconds < 60`;
    /// - `sign` is either `1` or `-1`.
    pub fn new<D, M, S, G>(
        degrees: D,
        minutes: M,
        seconds: S,
        sign: G,
    ) -> Result<Self, ValidationError>
    where
        D: ToPrimitive,
        M: ToPrimitive,
        S: ToPrimitive,
        G: ToPrimitive,
    {
        let degrees = finite(degrees.to_f64(), Component::Degrees)?;
        let minutes = finite(minutes.to_f64(), Component::Minutes)?;
        let seconds = finite(seconds.to_f64(), Component::Seconds)?;
        let sign = sign
            .to_f64()
            .ok_or(ValidationError::InvalidSign)
            .and_then(Sign::try_from)?;

        Self::with_sign(degrees, minutes, seconds, sign)
    }

    /// Construct the angle from its parts and the typed sign.
    ///
    /// # Errors
    /// See [`new`](#method.new).
    pub fn with_sign(
        degrees: f64,
        minutes: f64,
        seconds: f64,
        sign: Sign,
    ) -> Result<Self, ValidationError> {
        Self::check_dms(degrees, minutes, seconds)?;

        // `abs` only affects the negative zeros here
        Ok(Self {
            degrees: degrees.abs(),
            minutes: minutes.abs(),
            seconds: seconds.abs(),
            sign,
        })
    }

    fn check_dms(degrees: f64, minutes: f64, seconds: f64) -> Result<(), ValidationError> {
        let _ = finite(Some(degrees), Component::Degrees)?;
        let _ = finite(Some(minutes), Component::Minutes)?;
        let _ = finite(Some(seconds), Component::Seconds)?;

        if degrees < 0.0 {
            return Err(ValidationError::NegativeDegrees);
        }

        let valid_minutes = 0.0..MINUTES_IN_DEGREE;
        if !valid_minutes.contains(&minutes) {
            return Err(ValidationError::ArcMinutes);
        }

        let valid_seconds = 0.0..SECONDS_IN_MINUTE;
        if !valid_seconds.contains(&seconds) {
            return Err(ValidationError::ArcSeconds);
        }

        Ok(())
    }

    /// Decompose the decimal degrees into the DMS parts.
    ///
    /// ```
    /// # use dms_types::{Dms, Sign};
    /// let angle = Dms::from_decimal(-45.504_166_666_666_67).unwrap();
    ///
    /// assert_eq!(angle.sign(), Sign::Negative);
    /// assert_eq!(angle.degrees(), 45.0);
    /// assert_eq!(angle.minutes(), 30.0);
    /// assert!((angle.seconds() - 15.0).abs() < 1e-9);
    /// ```
    ///
    /// # Errors
    /// When the value is not a finite number.
    pub fn from_decimal(value: f64) -> Result<Self, ValidationError> {
        let value = finite(Some(value), Component::Decimal)?;

        let sign = Sign::from(value >= 0.0);
        let magnitude = value.abs();

        let degrees = magnitude.floor();
        let minutes = ((magnitude - degrees) * MINUTES_IN_DEGREE).floor();
        let seconds = (magnitude - degrees - minutes / MINUTES_IN_DEGREE) * SECONDS_IN_DEGREE;

        Ok(Self::carry(degrees, minutes, seconds, sign))
    }

    /// Restore the ranges of the parts broken by the floating point error
    /// of the decimal decomposition.
    fn carry(mut degrees: f64, mut minutes: f64, mut seconds: f64, sign: Sign) -> Self {
        if seconds < 0.0 {
            seconds = 0.0;
        }

        if seconds >= SECONDS_IN_MINUTE {
            seconds = 0.0;
            minutes += 1.0;
        }

        if minutes >= MINUTES_IN_DEGREE {
            minutes = 0.0;
            degrees += 1.0;
        }

        Self {
            degrees,
            minutes,
            seconds,
            sign,
        }
    }

    /// The whole number of degrees in the angle
    /// (can have a fraction when parsed from a decimal text).
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    /// The arc minutes component of the angle.
    pub const fn minutes(self) -> f64 {
        self.minutes
    }

    /// The arc seconds component of the angle.
    pub const fn seconds(self) -> f64 {
        self.seconds
    }

    /// The direction of the angle.
    pub const fn sign(self) -> Sign {
        self.sign
    }

    /// The same angle in the positive direction
    #[must_use]
    pub const fn abs(self) -> Self {
        Self {
            sign: Sign::Positive,
            ..self
        }
    }

    /// Signed decimal degrees
    pub fn to_decimal(self) -> f64 {
        let magnitude = self.degrees
            + self.minutes / MINUTES_IN_DEGREE
            + self.seconds / SECONDS_IN_DEGREE;
        f64::from(self.sign.factor()) * magnitude
    }
}

fn finite(value: Option<f64>, component: Component) -> Result<f64, ValidationError> {
    value
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::NotNumeric(component))
}

impl Neg for Dms {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            sign: -self.sign,
            ..self
        }
    }
}

impl TryFrom<f64> for Dms {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Dms> for f64 {
    fn from(angle: Dms) -> Self {
        angle.to_decimal()
    }
}

impl TryFrom<(f64, f64, f64)> for Dms {
    type Error = ValidationError;

    fn try_from(value: (f64, f64, f64)) -> Result<Self, Self::Error> {
        let (deg, min, sec) = value;
        Self::with_sign(deg, min, sec, Sign::Positive)
    }
}

impl TryFrom<(f64, f64, f64, Sign)> for Dms {
    type Error = ValidationError;

    fn try_from(value: (f64, f64, f64, Sign)) -> Result<Self, Self::Error> {
        let (deg, min, sec, sign) = value;
        Self::with_sign(deg, min, sec, sign)
    }
}

/// The serialized form of the angle validated on deserialization
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct DmsParts {
    degrees: f64,
    minutes: f64,
    seconds: f64,
    sign: i8,
}

#[cfg(feature = "serde")]
impl TryFrom<DmsParts> for Dms {
    type Error = ValidationError;

    fn try_from(parts: DmsParts) -> Result<Self, Self::Error> {
        let sign = Sign::try_from(parts.sign)?;
        Self::with_sign(parts.degrees, parts.minutes, parts.seconds, sign)
    }
}

#[cfg(feature = "serde")]
impl From<Dms> for DmsParts {
    fn from(angle: Dms) -> Self {
        Self {
            degrees: angle.degrees,
            minutes: angle.minutes,
            seconds: angle.seconds,
            sign: angle.sign.factor(),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serialize() {
        let angle = Dms::new(10, 20, 30.5, -1).unwrap();
        let json = serde_json::to_string(&angle).unwrap();
        assert_eq!(
            json,
            r#"{"degrees":10.0,"minutes":20.0,"seconds":30.5,"sign":-1}"#
        );

        let back: Dms = serde_json::from_str(&json).unwrap();
        assert_eq!(back, angle);
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{"degrees":10.0,"minutes":60.0,"seconds":0.0,"sign":1}"#;
        assert!(serde_json::from_str::<Dms>(json).is_err());

        let json = r#"{"degrees":10.0,"minutes":0.0,"seconds":0.0,"sign":0}"#;
        assert!(serde_json::from_str::<Dms>(json).is_err());
    }
}
