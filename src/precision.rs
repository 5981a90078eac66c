//! Position precision modes.
//!
//! APRS carries precision as a signed integer: 0..=4 selects position
//! ambiguity (digit blanking) and negative values select the DAO
//! high-precision extension. [`Precision`] makes that choice explicit.

use std::fmt;
use std::str::FromStr;

use crate::error::{PositionError, Result};

/// Position ambiguity level.
///
/// Each level blanks trailing digits of the `MM.ff` minutes field with
/// spaces. Revealed digits are identical across levels for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ambiguity {
    /// `MM.ff` full precision
    #[default]
    None,
    /// `  .  ` degrees only
    Degrees,
    /// `M .  ` tens of minutes
    TenMinutes,
    /// `MM.  ` whole minutes
    Minutes,
    /// `MM.f ` tenths of a minute
    TenthMinutes,
}

impl Ambiguity {
    /// Number of `MMff` digits left visible.
    pub fn revealed_digits(self) -> usize {
        match self {
            Ambiguity::None => 4,
            Ambiguity::Degrees => 0,
            Ambiguity::TenMinutes => 1,
            Ambiguity::Minutes => 2,
            Ambiguity::TenthMinutes => 3,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Ambiguity::None => 0,
            Ambiguity::Degrees => 1,
            Ambiguity::TenMinutes => 2,
            Ambiguity::Minutes => 3,
            Ambiguity::TenthMinutes => 4,
        }
    }
}

/// DAO extension flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaoMode {
    /// One extra decimal digit per axis (`!W..!`)
    Plaintext,
    /// One radix-91 character per axis (`!w..!`)
    Radix91,
}

impl DaoMode {
    /// Datum/mode character placed after the leading `!`.
    pub fn tag(self) -> char {
        match self {
            DaoMode::Plaintext => 'W',
            DaoMode::Radix91 => 'w',
        }
    }

    pub fn code(self) -> i32 {
        match self {
            DaoMode::Plaintext => -1,
            DaoMode::Radix91 => -2,
        }
    }
}

/// Precision mode of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Standard `DDMM.hh` report, possibly with blanked digits
    Standard(Ambiguity),
    /// Full `DDMM.hh` report extended by a DAO field
    Dao(DaoMode),
}

impl Precision {
    pub const FULL: Precision = Precision::Standard(Ambiguity::None);

    /// Map any integer code to a precision mode.
    ///
    /// Codes above 4 format at full precision and codes below -2 behave as
    /// radix-91 DAO, matching what APRS software has historically done with
    /// out-of-range values.
    pub fn from_code_lossy(code: i32) -> Self {
        match Self::try_from(code) {
            Ok(precision) => precision,
            Err(_) => {
                log::warn!("Position ambiguity code {} out of range", code);
                if code < 0 {
                    Precision::Dao(DaoMode::Radix91)
                } else {
                    Precision::FULL
                }
            }
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Precision::Standard(ambiguity) => ambiguity.code(),
            Precision::Dao(mode) => mode.code(),
        }
    }

    pub fn is_dao(self) -> bool {
        matches!(self, Precision::Dao(_))
    }

    /// Whether decimal accessors round to 5 places.
    ///
    /// DAO mode returns raw values so the extension keeps its extra digits.
    pub fn rounds_accessors(self) -> bool {
        !self.is_dao()
    }

    /// Ambiguity applied to the DMS digits. DAO modes render full precision.
    pub fn ambiguity(self) -> Ambiguity {
        match self {
            Precision::Standard(ambiguity) => ambiguity,
            Precision::Dao(_) => Ambiguity::None,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<i32> for Precision {
    type Error = PositionError;

    fn try_from(code: i32) -> Result<Self> {
        let precision = match code {
            -2 => Precision::Dao(DaoMode::Radix91),
            -1 => Precision::Dao(DaoMode::Plaintext),
            0 => Precision::Standard(Ambiguity::None),
            1 => Precision::Standard(Ambiguity::Degrees),
            2 => Precision::Standard(Ambiguity::TenMinutes),
            3 => Precision::Standard(Ambiguity::Minutes),
            4 => Precision::Standard(Ambiguity::TenthMinutes),
            other => return Err(PositionError::InvalidAmbiguity(other)),
        };
        Ok(precision)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precision::Standard(Ambiguity::None) => "none",
            Precision::Standard(Ambiguity::Degrees) => "degrees",
            Precision::Standard(Ambiguity::TenMinutes) => "ten-minutes",
            Precision::Standard(Ambiguity::Minutes) => "minutes",
            Precision::Standard(Ambiguity::TenthMinutes) => "tenth-minutes",
            Precision::Dao(DaoMode::Plaintext) => "dao",
            Precision::Dao(DaoMode::Radix91) => "dao91",
        };
        f.write_str(name)
    }
}

/// Parses either the integer code (`-2`..`4`) or a mode name.
///
/// # Example
/// ```
/// use aprs_position::precision::{DaoMode, Precision};
///
/// let p: Precision = "-2".parse().unwrap();
/// assert_eq!(p, Precision::Dao(DaoMode::Radix91));
/// let p: Precision = "dao".parse().unwrap();
/// assert_eq!(p.code(), -1);
/// ```
impl FromStr for Precision {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return Self::try_from(code);
        }

        let precision = match s.to_ascii_lowercase().as_str() {
            "none" | "full" => Precision::Standard(Ambiguity::None),
            "degrees" => Precision::Standard(Ambiguity::Degrees),
            "ten-minutes" => Precision::Standard(Ambiguity::TenMinutes),
            "minutes" => Precision::Standard(Ambiguity::Minutes),
            "tenth-minutes" => Precision::Standard(Ambiguity::TenthMinutes),
            "dao" | "plaintext" => Precision::Dao(DaoMode::Plaintext),
            "dao91" | "radix91" => Precision::Dao(DaoMode::Radix91),
            _ => return Err(PositionError::Config(format!("unknown precision: {}", s))),
        };
        Ok(precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in -2..=4 {
            let precision = Precision::try_from(code).unwrap();
            assert_eq!(precision.code(), code);
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            Precision::try_from(5),
            Err(PositionError::InvalidAmbiguity(5))
        );
        assert!(Precision::try_from(-3).is_err());
    }

    #[test]
    fn test_lossy_fallback() {
        assert_eq!(Precision::from_code_lossy(7), Precision::FULL);
        assert_eq!(
            Precision::from_code_lossy(-9),
            Precision::Dao(DaoMode::Radix91)
        );
        assert_eq!(
            Precision::from_code_lossy(3),
            Precision::Standard(Ambiguity::Minutes)
        );
    }

    #[test]
    fn test_revealed_digits_are_ordered() {
        let levels = [
            Ambiguity::Degrees,
            Ambiguity::TenMinutes,
            Ambiguity::Minutes,
            Ambiguity::TenthMinutes,
            Ambiguity::None,
        ];
        for pair in levels.windows(2) {
            assert_eq!(pair[0].revealed_digits() + 1, pair[1].revealed_digits());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "ten-minutes".parse::<Precision>().unwrap(),
            Precision::Standard(Ambiguity::TenMinutes)
        );
        assert_eq!(
            "RADIX91".parse::<Precision>().unwrap(),
            Precision::Dao(DaoMode::Radix91)
        );
        assert!("coarse".parse::<Precision>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for code in -2..=4 {
            let precision = Precision::try_from(code).unwrap();
            assert_eq!(precision.to_string().parse::<Precision>().unwrap(), precision);
        }
    }

    #[test]
    fn test_dao_renders_full_ambiguity() {
        assert_eq!(Precision::Dao(DaoMode::Plaintext).ambiguity(), Ambiguity::None);
        assert!(!Precision::Dao(DaoMode::Radix91).rounds_accessors());
        assert!(Precision::Standard(Ambiguity::Degrees).rounds_accessors());
    }
}
