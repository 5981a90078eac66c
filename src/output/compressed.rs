//! APRS Base91 compressed position block.
//!
//! Fixed-width 13-character format:
//! - Position 0: symbol table
//! - Positions 1-4: latitude, four radix-91 digits
//! - Positions 5-8: longitude, four radix-91 digits
//! - Position 9: symbol code
//! - Positions 10-12: course/speed, altitude or range field
//!
//! Example: `/5L!!<*e7o sT` = 49°30'N 72°45'W, symbol `/o`, no course/speed
//!
//! Reference: APRS Protocol Reference 1.01, chapter 9.

use super::Formatter;
use crate::position::Position;

pub struct CompressedFormatter;

impl Formatter for CompressedFormatter {
    fn format(&self, position: &Position) -> String {
        position.to_compressed_string()
    }
}
