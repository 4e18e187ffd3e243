use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The argument of the angle construction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    /// Whole (or fractional) degrees
    Degrees,
    /// Arc minutes
    Minutes,
    /// Arc seconds
    Seconds,
    /// The direction of the angle (`1` or `-1`)
    Sign,
    /// The single decimal degrees value
    Decimal,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Degrees => "degrees",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Sign => "sign",
            Self::Decimal => "decimal degrees",
        };

        write!(f, "{name}")
    }
}

/// The angle cannot be constructed from the given parts
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The argument is not a finite number
    NotNumeric(Component),
    /// deg < 0
    NegativeDegrees,
    /// min < 0 || min >= 60
    ArcMinutes,
    /// sec < 0 || sec >= 60
    ArcSeconds,
    /// sign != 1 && sign != -1
    InvalidSign,
}

impl ValidationError {
    /// Which argument of the construction failed
    pub const fn component(self) -> Component {
        match self {
            Self::NotNumeric(component) => component,
            Self::NegativeDegrees => Component::Degrees,
            Self::ArcMinutes => Component::Minutes,
            Self::ArcSeconds => Component::Seconds,
            Self::InvalidSign => Component::Sign,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric(component) => write!(f, "The {component} argument must be numeric"),
            Self::NegativeDegrees => write!(f, "The degrees argument must be a non-negative number"),
            Self::ArcMinutes => write!(f, "Angle's arc minute value not in range [0..60)"),
            Self::ArcSeconds => write!(f, "Angle's arc second value not in range [0..60)"),
            Self::InvalidSign => write!(f, "The sign argument must be 1 or -1"),
        }
    }
}

impl Error for ValidationError {}

/// The reason the free-form text is not an angle
#[derive(Debug, Clone, PartialEq)]
pub enum ParseDmsError {
    /// Nothing to parse
    Empty,
    /// More than one minus sign
    AmbiguousSign,
    /// Some part is not a number
    Number(ParseFloatError),
    /// The parts cannot form an angle
    Invalid(ValidationError),
}

enum_trivial_from_impl!(ParseFloatError => ParseDmsError:Number);
enum_trivial_from_impl!(ValidationError => ParseDmsError:Invalid);

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Empty => write!(f, "empty string provided"),
            Self::AmbiguousSign => write!(f, "more than one minus sign found"),
            Self::Number(inner) => write!(f, "{inner}"),
            Self::Invalid(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseDmsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Number(inner) => Some(inner),
            Self::Invalid(inner) => Some(inner),
            _ => None,
        }
    }
}
