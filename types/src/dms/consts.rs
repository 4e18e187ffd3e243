pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const ASCII_ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ASCII_ARC_SECOND_SIGN: char = '"';

pub(crate) const NEGATIVE_SIGN: char = '-';

/// The number of arc seconds fraction digits
/// used when formatting without an explicit precision.
pub const DEFAULT_FRACTION_DIGITS: usize = 0;
