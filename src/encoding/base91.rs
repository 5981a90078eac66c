//! Base91 compressed position digits.
//!
//! Latitude and longitude are scaled onto `91^4` codes and written as four
//! printable radix-91 digits, most significant first.

use super::round_half_up;
use crate::constants::{
    BASE91_LATITUDE_SCALE, BASE91_LONGITUDE_SCALE, BASE91_OFFSET, BASE91_RADIX,
};

/// Four radix-91 digits of `value`, offset into printable ASCII.
///
/// Values outside `0..91^4` (coordinates out of range) produce defined but
/// meaningless characters.
pub fn encode_digits(value: i64) -> [char; 4] {
    let mut remaining = value;
    let mut digits = ['!'; 4];
    for (i, slot) in digits.iter_mut().enumerate() {
        let place = BASE91_RADIX.pow(3 - i as u32);
        let digit = remaining / place;
        remaining %= place;
        *slot = char::from((digit + BASE91_OFFSET as i64) as u8);
    }
    digits
}

/// Compressed latitude code, `round(380926 * (90 - lat))`.
pub fn latitude_code(latitude: f64) -> i64 {
    round_half_up(BASE91_LATITUDE_SCALE * (90.0 - latitude))
}

/// Compressed longitude code, `round(190463 * (180 + lon))`.
pub fn longitude_code(longitude: f64) -> i64 {
    round_half_up(BASE91_LONGITUDE_SCALE * (180.0 + longitude))
}

pub fn latitude_digits(latitude: f64) -> [char; 4] {
    let code = latitude_code(latitude);
    log::trace!("base91 latitude {} => {}", latitude, code);
    encode_digits(code)
}

pub fn longitude_digits(longitude: f64) -> [char; 4] {
    let code = longitude_code(longitude);
    log::trace!("base91 longitude {} => {}", longitude, code);
    encode_digits(code)
}
