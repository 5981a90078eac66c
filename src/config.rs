//! Station configuration for building position reports.
//!
//! Loaded from TOML by the binaries:
//!
//! ```toml
//! symbol = "/o"
//! ambiguity = -1      # 0..=4 ambiguity, -1 DAO, -2 radix91 DAO
//! cst = "7P1"         # optional course/speed field
//! strict = true       # reject out-of-range coordinates and codes
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{PositionError, Result};
use crate::position::Position;
use crate::precision::Precision;
use crate::symbol::Symbol;

/// Defaults applied to every position a station reports.
///
/// # Example
/// ```
/// use aprs_position::config::StationConfig;
///
/// let config = StationConfig::from_toml_str("symbol = \"/o\"\nambiguity = 3").unwrap();
/// let pos = config.build_position(34.12559, -84.13697).unwrap();
/// assert_eq!(pos.to_string(), "3407.  N/08408.  Wo");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    /// Symbol table and code, e.g. `"/o"`
    pub symbol: Symbol,
    /// Integer precision code
    pub ambiguity: i32,
    /// Course/speed field for compressed reports
    pub cst: Option<String>,
    /// Fail instead of falling back on invalid input
    pub strict: bool,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            symbol: Symbol::default(),
            ambiguity: 0,
            cst: None,
            strict: false,
        }
    }
}

impl StationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PositionError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PositionError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn precision(&self) -> Result<Precision> {
        if self.strict {
            Precision::try_from(self.ambiguity)
        } else {
            Ok(Precision::from_code_lossy(self.ambiguity))
        }
    }

    /// Position at the given coordinates with this station's settings.
    pub fn build_position(&self, latitude: f64, longitude: f64) -> Result<Position> {
        let precision = self.precision()?;
        let mut position = if self.strict {
            Position::try_new(latitude, longitude, precision, self.symbol)?
        } else {
            Position::with_symbol(latitude, longitude, precision, self.symbol)
        };

        if let Some(ref cst) = self.cst {
            if self.strict && !cst.is_empty() && cst.chars().count() != 3 {
                return Err(PositionError::InvalidCsTField(cst.clone()));
            }
            position.set_cst_field(cst);
        }

        Ok(position)
    }
}
