use super::Formatter;
use crate::position::Position;

pub struct DecimalFormatter;

impl Formatter for DecimalFormatter {
    fn format(&self, position: &Position) -> String {
        position.to_decimal_string()
    }
}
