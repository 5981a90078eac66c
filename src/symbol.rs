use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_CST_FIELD;
use crate::error::PositionError;

/// APRS map symbol: table identifier and symbol code.
///
/// Passed through unmodified; not checked against the real symbol tables.
///
/// # Example
/// ```
/// use aprs_position::Symbol;
///
/// let symbol: Symbol = "/o".parse().unwrap();
/// assert_eq!(symbol.table, '/');
/// assert_eq!(symbol.code, 'o');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct Symbol {
    pub table: char,
    pub code: char,
}

impl Symbol {
    pub fn new(table: char, code: char) -> Self {
        Self { table, code }
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new('\\', '.')
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.table, self.code)
    }
}

impl FromStr for Symbol {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(table), Some(code), None) => Ok(Self::new(table, code)),
            _ => Err(PositionError::InvalidSymbol(s.to_string())),
        }
    }
}

impl TryFrom<String> for Symbol {
    type Error = PositionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Three-character course/speed, altitude or range field of a compressed report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CsTField(String);

impl CsTField {
    pub fn new(value: &str) -> Result<Self, PositionError> {
        if value.chars().count() == 3 {
            Ok(Self(value.to_string()))
        } else {
            Err(PositionError::InvalidCsTField(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CsTField {
    fn default() -> Self {
        Self(DEFAULT_CST_FIELD.to_string())
    }
}

impl FromStr for CsTField {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CsTField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
