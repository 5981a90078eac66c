//! APRS position entity.
//!
//! A [`Position`] stores raw decimal degrees and renders them in the
//! uncompressed (DMS), DAO and Base91 compressed encodings. Rounding for
//! display happens at read time; stored coordinates are never modified by
//! accessors or formatters.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::constants::{DECIMAL_ROUNDING_SCALE, DEFAULT_CST_FIELD};
use crate::encoding::{Axis, base91, dao, dms, round_half_up};
use crate::error::{PositionError, Result};
use crate::geodesy;
use crate::precision::Precision;
use crate::symbol::{CsTField, Symbol};

/// A single APRS position report.
///
/// # Example
/// ```
/// use aprs_position::{Position, Precision, Symbol};
///
/// let pos = Position::with_symbol(34.12559, -84.13697, Precision::FULL, Symbol::new('/', 'o'));
/// assert_eq!(pos.to_string(), "3407.54N/08408.22Wo");
/// assert_eq!(pos.dao(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    latitude: f64,
    longitude: f64,
    altitude: Option<i32>,
    precision: Precision,
    timestamp: DateTime<Utc>,
    symbol: Symbol,
    cst: Option<CsTField>,
}

impl Default for Position {
    fn default() -> Self {
        Self::with_symbol(0.0, 0.0, Precision::FULL, Symbol::default())
    }
}

impl Position {
    /// Full-precision position with the default `\.` symbol.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::with_symbol(latitude, longitude, Precision::FULL, Symbol::default())
    }

    pub fn with_symbol(latitude: f64, longitude: f64, precision: Precision, symbol: Symbol) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            precision,
            timestamp: Utc::now(),
            symbol,
            cst: None,
        }
    }

    /// Like [`Position::with_symbol`], but rejects coordinates outside
    /// ±90° latitude and ±180° longitude.
    pub fn try_new(
        latitude: f64,
        longitude: f64,
        precision: Precision,
        symbol: Symbol,
    ) -> Result<Self> {
        let position = Self::with_symbol(latitude, longitude, precision, symbol);
        position.validate()?;
        Ok(position)
    }

    /// Check that the stored coordinates are finite and on the globe.
    pub fn validate(&self) -> Result<()> {
        let valid_lat = self.latitude.is_finite() && self.latitude.abs() <= 90.0;
        let valid_lon = self.longitude.is_finite() && self.longitude.abs() <= 180.0;
        if valid_lat && valid_lon {
            Ok(())
        } else {
            Err(PositionError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    fn rounded(&self, value: f64) -> f64 {
        if self.precision.rounds_accessors() {
            round_half_up(value * DECIMAL_ROUNDING_SCALE) as f64 / DECIMAL_ROUNDING_SCALE
        } else {
            value
        }
    }

    /// Latitude rounded to 5 decimal places, or raw in DAO mode.
    pub fn latitude(&self) -> f64 {
        self.rounded(self.latitude)
    }

    /// Longitude rounded to 5 decimal places, or raw in DAO mode.
    pub fn longitude(&self) -> f64 {
        self.rounded(self.longitude)
    }

    pub fn raw_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn raw_longitude(&self) -> f64 {
        self.longitude
    }

    pub fn set_latitude(&mut self, latitude: f64) {
        self.latitude = latitude;
    }

    pub fn set_longitude(&mut self, longitude: f64) {
        self.longitude = longitude;
    }

    /// Altitude in feet, `None` when unknown.
    pub fn altitude(&self) -> Option<i32> {
        self.altitude
    }

    pub fn set_altitude(&mut self, altitude: Option<i32>) {
        self.altitude = altitude;
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    /// Integer ambiguity code: 0..=4 ambiguity, -1/-2 DAO.
    pub fn position_ambiguity(&self) -> i32 {
        self.precision.code()
    }

    /// Set precision from an integer code.
    ///
    /// Out-of-range codes are accepted and fall back as described in
    /// [`Precision::from_code_lossy`].
    pub fn set_position_ambiguity(&mut self, code: i32) {
        self.precision = Precision::from_code_lossy(code);
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = timestamp;
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
    }

    pub fn symbol_table(&self) -> char {
        self.symbol.table
    }

    pub fn set_symbol_table(&mut self, table: char) {
        self.symbol.table = table;
    }

    pub fn symbol_code(&self) -> char {
        self.symbol.code
    }

    pub fn set_symbol_code(&mut self, code: char) {
        self.symbol.code = code;
    }

    /// Course/speed field appended to the compressed encoding.
    pub fn cst_field(&self) -> &str {
        self.cst.as_ref().map_or(DEFAULT_CST_FIELD, CsTField::as_str)
    }

    /// Store a 3-character course/speed field.
    ///
    /// Anything else, including the empty string, resets to the `" sT"`
    /// placeholder.
    pub fn set_cst_field(&mut self, value: &str) {
        self.cst = match CsTField::new(value) {
            Ok(field) => Some(field),
            Err(e) => {
                if !value.is_empty() {
                    log::debug!("{}, using default", e);
                }
                None
            }
        };
    }

    /// Uncompressed `DDMM.hhN` / `DDDMM.hhE` rendering of one coordinate.
    pub fn dms(&self, value: f64, axis: Axis) -> String {
        dms::format(value, axis, self.precision)
    }

    /// DAO extension (`!Wxy!` or `!wXY!`), empty unless in DAO mode.
    pub fn dao(&self) -> String {
        match self.precision {
            Precision::Dao(mode) => dao::encode(self.latitude, self.longitude, mode),
            Precision::Standard(_) => String::new(),
        }
    }

    /// 13-character Base91 compressed position block.
    pub fn to_compressed_string(&self) -> String {
        let mut out = String::with_capacity(13);
        out.push(self.symbol.table);
        out.extend(base91::latitude_digits(self.latitude));
        out.extend(base91::longitude_digits(self.longitude));
        out.push(self.symbol.code);
        out.push_str(self.cst_field());
        out
    }

    /// `"<lat>, <lon>"` using the rounded accessors.
    pub fn to_decimal_string(&self) -> String {
        // Debug keeps the trailing ".0" on whole degrees
        format!("{:?}, {:?}", self.latitude(), self.longitude())
    }

    /// Great-circle distance to `other` in statute miles.
    pub fn distance(&self, other: &Position) -> f64 {
        geodesy::dist_from(
            self.latitude(),
            self.longitude(),
            other.latitude(),
            other.longitude(),
        )
    }

    /// Initial bearing from `other` to this position, in [0, 360) degrees.
    pub fn direction(&self, other: &Position) -> f64 {
        geodesy::initial_bearing(
            other.latitude(),
            other.longitude(),
            self.latitude(),
            self.longitude(),
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.dms(self.latitude, Axis::Latitude),
            self.symbol.table,
            self.dms(self.longitude, Axis::Longitude),
            self.symbol.code
        )
    }
}
