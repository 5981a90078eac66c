use super::{Formatter, iso8601_timestamp};
use crate::position::Position;

/// Quote a text field; report, DAO and compressed text may contain `,` and `"`.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, position: &Position) -> String {
        let altitude = position
            .altitude()
            .map_or(String::new(), |a| a.to_string());
        format!(
            "{},{:?},{:?},{},{},{},{},{}",
            iso8601_timestamp(position.timestamp()),
            position.latitude(),
            position.longitude(),
            altitude,
            position.position_ambiguity(),
            quoted(&position.to_string()),
            quoted(&position.dao()),
            quoted(&position.to_compressed_string())
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("ts,latitude,longitude,altitude,ambiguity,report,dao,compressed")
    }
}
