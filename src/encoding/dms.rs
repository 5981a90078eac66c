//! Fixed-width APRS degrees/minutes rendering (`DDMM.hhN`, `DDDMM.hhE`).
//!
//! Blanked digits are spaces, never zeros:
//!
//! | ambiguity       | minutes field |
//! |-----------------|---------------|
//! | none            | `MM.ff`       |
//! | degrees         | `  .  `       |
//! | ten minutes     | `M .  `       |
//! | minutes         | `MM.  `       |
//! | tenth minutes   | `MM.f `       |
//!
//! Hundredths that round up to 100 carry into minutes and degrees before
//! blanking, at every ambiguity level. Revealed digits therefore agree
//! across levels, and a coarse report can move into the next box:
//! 34.99999 renders `35  .  N` at the degrees level.

use super::{Axis, MinuteParts, round_half_up};
use crate::precision::Precision;

/// Digits of the minutes field before blanking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MinutesField {
    degrees: u64,
    minutes: u64,
    hundredths: u64,
}

impl MinutesField {
    fn new(parts: MinuteParts, precision: Precision) -> Self {
        let MinuteParts {
            mut degrees,
            mut minutes,
            remainder,
            ..
        } = parts;

        if precision.is_dao() {
            // Truncate; the DAO field carries the rest.
            return Self {
                degrees,
                minutes,
                hundredths: remainder / 100,
            };
        }

        let mut hundredths = round_half_up(remainder as f64 * 0.01) as u64;
        if hundredths >= 100 {
            hundredths -= 100;
            minutes += 1;
            if minutes >= 60 {
                minutes -= 60;
                degrees += 1;
            }
        }

        Self {
            degrees,
            minutes,
            hundredths,
        }
    }

    /// `MM.ff` with the digits past `revealed` replaced by spaces.
    fn masked(&self, revealed: usize) -> String {
        let digits = format!("{:02}{:02}", self.minutes % 100, self.hundredths % 100);
        let mut out = String::with_capacity(5);
        for (i, digit) in digits.chars().enumerate() {
            if i == 2 {
                out.push('.');
            }
            out.push(if i < revealed { digit } else { ' ' });
        }
        out
    }
}

/// Render one coordinate in APRS uncompressed form.
///
/// # Example
/// ```
/// use aprs_position::encoding::{Axis, dms};
/// use aprs_position::precision::Precision;
///
/// assert_eq!(dms::format(34.12559, Axis::Latitude, Precision::FULL), "3407.54N");
/// assert_eq!(dms::format(-84.13697, Axis::Longitude, Precision::FULL), "08408.22W");
/// ```
pub fn format(value: f64, axis: Axis, precision: Precision) -> String {
    let parts = MinuteParts::from_degrees(value);
    let field = MinutesField::new(parts, precision);
    let revealed = precision.ambiguity().revealed_digits();

    format!(
        "{:0width$}{}{}",
        field.degrees,
        field.masked(revealed),
        axis.hemisphere(parts.negative),
        width = axis.degree_width()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::{Ambiguity, DaoMode};

    fn ambiguous(level: Ambiguity) -> Precision {
        Precision::Standard(level)
    }

    #[test]
    fn test_full_precision() {
        assert_eq!(format(34.12559, Axis::Latitude, Precision::FULL), "3407.54N");
        assert_eq!(format(-84.13697, Axis::Longitude, Precision::FULL), "08408.22W");
        assert_eq!(format(0.0, Axis::Latitude, Precision::FULL), "0000.00N");
        assert_eq!(format(0.0, Axis::Longitude, Precision::FULL), "00000.00E");
    }

    #[test]
    fn test_southern_and_eastern() {
        assert_eq!(format(-33.8688, Axis::Latitude, Precision::FULL), "3352.13S");
        assert_eq!(format(151.2093, Axis::Longitude, Precision::FULL), "15112.56E");
    }

    #[test]
    fn test_ambiguity_levels() {
        let lat = 34.12559;
        assert_eq!(format(lat, Axis::Latitude, ambiguous(Ambiguity::Degrees)), "34  .  N");
        assert_eq!(format(lat, Axis::Latitude, ambiguous(Ambiguity::TenMinutes)), "340 .  N");
        assert_eq!(format(lat, Axis::Latitude, ambiguous(Ambiguity::Minutes)), "3407.  N");
        assert_eq!(format(lat, Axis::Latitude, ambiguous(Ambiguity::TenthMinutes)), "3407.5 N");

        let lon = -84.13697;
        assert_eq!(format(lon, Axis::Longitude, ambiguous(Ambiguity::Degrees)), "084  .  W");
        assert_eq!(format(lon, Axis::Longitude, ambiguous(Ambiguity::TenthMinutes)), "08408.2 W");
    }

    #[test]
    fn test_dao_truncates_fraction() {
        // 0.00999 degrees = 0.5994 minutes; rounding gives .60, truncation .59
        let value = 10.00999;
        assert_eq!(format(value, Axis::Latitude, Precision::FULL), "1000.60N");
        assert_eq!(
            format(value, Axis::Latitude, Precision::Dao(DaoMode::Plaintext)),
            "1000.59N"
        );
    }

    #[test]
    fn test_fraction_carries_into_minutes() {
        // 12 deg 59.996 min rounds up to 13 deg 00.00 min
        let value = 12.0 + 59.996 / 60.0;
        assert_eq!(format(value, Axis::Latitude, Precision::FULL), "1300.00N");
        assert_eq!(
            format(value, Axis::Latitude, Precision::Dao(DaoMode::Radix91)),
            "1259.99N"
        );
    }

    #[test]
    fn test_carry_applies_to_blanked_levels() {
        let value = 34.99999;
        assert_eq!(format(value, Axis::Latitude, Precision::FULL), "3500.00N");
        assert_eq!(format(value, Axis::Latitude, ambiguous(Ambiguity::Degrees)), "35  .  N");
        assert_eq!(format(value, Axis::Latitude, ambiguous(Ambiguity::Minutes)), "3500.  N");
        assert_eq!(
            format(-84.99999, Axis::Longitude, ambiguous(Ambiguity::Degrees)),
            "085  .  W"
        );
    }

    #[test]
    fn test_fixed_width() {
        for value in [-89.99999, -45.5, 0.000001, 45.25, 89.99999] {
            assert_eq!(format(value, Axis::Latitude, Precision::FULL).len(), 8);
        }
        for value in [-179.99999, -0.5, 120.75, 179.99999] {
            assert_eq!(format(value, Axis::Longitude, Precision::FULL).len(), 9);
        }
    }
}
