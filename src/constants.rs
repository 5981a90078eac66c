//! Protocol constants for APRS position encodings
//!
//! These values are fixed by the APRS specification and must not be tuned.

/// Degrees to ten-thousandths of an arc minute (60 * 10000).
pub const MINUTE_UNITS_PER_DEGREE: f64 = 600_000.0;

/// Ten-thousandths of a minute per whole minute.
pub const MINUTE_UNITS_PER_MINUTE: i64 = 10_000;

/// Scale applied before rounding decimal accessors to 5 places (~1.1 m).
pub const DECIMAL_ROUNDING_SCALE: f64 = 100_000.0;

/// Base91 compressed latitude scale: 180 degrees onto 91^4 codes.
pub const BASE91_LATITUDE_SCALE: f64 = 380_926.0;

/// Base91 compressed longitude scale: 360 degrees onto 91^4 codes.
pub const BASE91_LONGITUDE_SCALE: f64 = 190_463.0;

/// Radix of the compressed and DAO encodings.
pub const BASE91_RADIX: i64 = 91;

/// Offset of the first printable radix-91 digit (`!`).
pub const BASE91_OFFSET: u8 = 33;

/// Mean Earth radius in statute miles used for haversine distances.
pub const EARTH_RADIUS_MILES: f64 = 3958.75;

/// Statute miles to kilometers.
pub const KILOMETERS_PER_MILE: f64 = 1.609_344;

/// Placeholder course/speed field meaning "unused".
pub const DEFAULT_CST_FIELD: &str = " sT";
