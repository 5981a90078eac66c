use super::{Formatter, iso8601_timestamp};
use crate::position::Position;

/// Uncompressed report followed by the DAO field, if any.
pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, position: &Position) -> String {
        if self.verbose {
            let altitude = position
                .altitude()
                .map_or("-".to_string(), |a| format!("{} ft", a));
            format!(
                "{}{} [{}, precision: {}, alt: {}, ts: {}]",
                position,
                position.dao(),
                position.to_decimal_string(),
                position.precision(),
                altitude,
                iso8601_timestamp(position.timestamp())
            )
        } else {
            format!("{}{}", position, position.dao())
        }
    }
}
