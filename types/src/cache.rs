//! Conversion of the decimal degrees into DMS with an optional memoization.
//!
//! The memoization map is owned by the caller: nothing is attached
//! to the numbers themselves and there is no global state.

use std::collections::HashMap;

use log::trace;

use crate::dms::{Dms, ValidationError};

/// Decompose the decimal degrees into the DMS parts.
///
/// # Errors
/// When the value is not a finite number.
pub fn to_dms(value: f64) -> Result<Dms, ValidationError> {
    Dms::from_decimal(value)
}

/// Remembers the angles derived from (or converted into) decimal degrees.
///
/// The key is the exact bit pattern of the number,
/// so `0.0` and `-0.0` are different entries producing equal angles.
/// Deriving the same number twice always gives the same angle,
/// so a lost entry only costs the recomputation.
#[derive(Debug, Default, Clone)]
pub struct DmsCache {
    entries: HashMap<u64, Dms>,
}

impl DmsCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The angle for the given decimal degrees.
    /// Derived only the first time the number is requested.
    ///
    /// # Errors
    /// When the value is not a finite number. Such values are never stored.
    pub fn get(&mut self, value: f64) -> Result<Dms, ValidationError> {
        let key = value.to_bits();
        if let Some(angle) = self.entries.get(&key) {
            return Ok(*angle);
        }

        trace!("Deriving DMS for {}", value);
        let angle = to_dms(value)?;
        let _ = self.entries.insert(key, angle);
        Ok(angle)
    }

    /// Convert the angle into decimal degrees and remember
    /// the angle the number originates from.
    ///
    /// The later [`get`](#method.get) for the number returns this angle as is,
    /// without the floating point error of the decomposition.
    pub fn decimal_of(&mut self, angle: Dms) -> f64 {
        let value = angle.to_decimal();
        let _ = self.entries.insert(value.to_bits(), angle);
        value
    }

    /// The number of remembered angles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Nothing is remembered yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
