//! Decoders used to check encoder output from the receiving side.

#![allow(dead_code)]

use aprs_position::encoding::Axis;
use aprs_position::DaoMode;

/// Parse a fully-specified `DDMM.hhN` / `DDDMM.hhE` field into signed degrees.
pub fn parse_dms(field: &str, axis: Axis) -> f64 {
    let width = match axis {
        Axis::Latitude => 2,
        Axis::Longitude => 3,
    };
    let degrees: f64 = field[..width].parse().expect("degrees");
    let minutes: f64 = field[width..field.len() - 1].parse().expect("minutes");
    let value = degrees + minutes / 60.0;
    match field.chars().last() {
        Some('S') | Some('W') => -value,
        _ => value,
    }
}

/// Extra minutes carried by one DAO axis character.
pub fn dao_extra_minutes(ch: char, mode: DaoMode) -> f64 {
    match mode {
        DaoMode::Plaintext => ch.to_digit(10).expect("digit") as f64 / 1000.0,
        DaoMode::Radix91 => (ch as u8 - 33) as f64 * 1.1 / 10_000.0,
    }
}

/// Parse a truncated DMS field extended by one DAO axis character.
pub fn parse_dms_with_dao(field: &str, axis: Axis, ch: char, mode: DaoMode) -> f64 {
    let value = parse_dms(field, axis).abs() + dao_extra_minutes(ch, mode) / 60.0;
    match field.chars().last() {
        Some('S') | Some('W') => -value,
        _ => value,
    }
}

/// Value of four radix-91 digits.
pub fn base91_value(digits: &str) -> i64 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 91 + (b as i64 - 33))
}

/// Split an uncompressed report `DDMM.hhNTDDDMM.hhEC` into its coordinate fields.
pub fn split_report(report: &str) -> (&str, &str) {
    (&report[..8], &report[9..18])
}
