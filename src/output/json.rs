use serde::Serialize;

use super::{Formatter, iso8601_timestamp};
use crate::position::Position;

/// Serializable snapshot of a position and all of its encodings.
#[derive(Debug, Clone, Serialize)]
pub struct PositionRecord {
    pub ts: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<i32>,
    pub ambiguity: i32,
    pub symbol: String,
    pub report: String,
    pub dao: Option<String>,
    pub compressed: String,
}

impl From<&Position> for PositionRecord {
    fn from(position: &Position) -> Self {
        let dao = position.dao();
        Self {
            ts: iso8601_timestamp(position.timestamp()),
            latitude: position.latitude(),
            longitude: position.longitude(),
            altitude: position.altitude(),
            ambiguity: position.position_ambiguity(),
            symbol: position.symbol().to_string(),
            report: position.to_string(),
            dao: (!dao.is_empty()).then_some(dao),
            compressed: position.to_compressed_string(),
        }
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, position: &Position) -> String {
        let record = PositionRecord::from(position);
        match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize position: {}", e);
                String::new()
            }
        }
    }
}
