//! Textual encodings of a single coordinate.
//!
//! All encoders derive their digits from the same rounding step,
//! [`minute_units`], so a DAO extension always agrees with the DMS digits
//! it extends.

pub mod base91;
pub mod dao;
pub mod dms;

use crate::constants::{MINUTE_UNITS_PER_DEGREE, MINUTE_UNITS_PER_MINUTE};

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere letter for the sign of the value.
    pub fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }

    /// Zero-padded width of the degrees field.
    pub fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// This differs from [`f64::round`] for negative halves: `-2.5` rounds to `-2`.
pub fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    let whole = floor as i64;
    if x - floor >= 0.5 {
        whole.saturating_add(1)
    } else {
        whole
    }
}

/// Decimal degrees in ten-thousandths of an arc minute, rounded.
pub fn minute_units(degrees: f64) -> i64 {
    round_half_up(degrees * MINUTE_UNITS_PER_DEGREE)
}

/// Unsigned split of a rounded coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteParts {
    pub negative: bool,
    pub degrees: u64,
    pub minutes: u64,
    /// Ten-thousandths of a minute below the whole minute (0..10000)
    pub remainder: u64,
}

impl MinuteParts {
    pub fn from_degrees(value: f64) -> Self {
        let units = minute_units(value);
        let negative = units < 0;
        let units = units.unsigned_abs();
        let per_minute = MINUTE_UNITS_PER_MINUTE as u64;
        Self {
            negative,
            degrees: units / (per_minute * 60),
            minutes: (units / per_minute) % 60,
            remainder: units % per_minute,
        }
    }
}
