//! DAO (Datum Added Offset) precision extension.
//!
//! The DAO field appends digits below the hundredths of a minute shown in
//! the DMS report. Both flavors start from the same rounded value as
//! [`super::dms::format`], so the extension never contradicts the digits
//! already transmitted.

use super::MinuteParts;
use crate::constants::BASE91_OFFSET;
use crate::precision::DaoMode;

/// Ten-thousandths of a minute below the DMS hundredths (0..100).
fn sub_hundredths(value: f64) -> u64 {
    MinuteParts::from_degrees(value).remainder % 100
}

/// Single extra decimal digit of minutes (thousandths).
pub fn plaintext_digit(value: f64) -> u8 {
    let remainder = sub_hundredths(value);
    let digit = (remainder / 10) as u8;
    log::trace!("dao plaintext of {} => remainder {} digit {}", value, remainder, digit);
    digit
}

/// Radix-91 value (0..=90) of the sub-hundredths remainder, rescaled from 0..100.
pub fn radix91_value(value: f64) -> u8 {
    let remainder = sub_hundredths(value);
    let scaled = ((remainder * 20 + 11) / 22) as u8;
    log::trace!("dao radix91 of {} => remainder {} base91 {}", value, remainder, scaled);
    scaled
}

/// Character for one axis in the given mode.
pub fn axis_char(value: f64, mode: DaoMode) -> char {
    match mode {
        DaoMode::Plaintext => char::from(b'0' + plaintext_digit(value)),
        DaoMode::Radix91 => char::from(radix91_value(value) + BASE91_OFFSET),
    }
}

/// Full five-character DAO field, e.g. `!W58!` or `!wSl!`.
pub fn encode(latitude: f64, longitude: f64, mode: DaoMode) -> String {
    let mut out = String::with_capacity(5);
    out.push('!');
    out.push(mode.tag());
    out.push(axis_char(latitude, mode));
    out.push(axis_char(longitude, mode));
    out.push('!');
    out
}
