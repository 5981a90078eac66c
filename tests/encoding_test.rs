mod test_positions;

use approx::assert_relative_eq;
use aprs_position::encoding::Axis;
use aprs_position::geodesy::dist_from;
use aprs_position::{Ambiguity, DaoMode, Position, Precision, Symbol};

use test_positions::{base91_value, parse_dms, split_report};

fn symbol() -> Symbol {
    Symbol::new('/', 'o')
}

#[test]
fn test_reference_uncompressed_report() {
    let pos = Position::with_symbol(34.12559, -84.13697, Precision::FULL, symbol());
    assert_eq!(pos.to_string(), "3407.54N/08408.22Wo");
    assert_eq!(pos.to_decimal_string(), "34.12559, -84.13697");
}

#[test]
fn test_plaintext_dao_scenario() {
    let pos = Position::with_symbol(
        34.1255911,
        -84.13697,
        Precision::Dao(DaoMode::Plaintext),
        symbol(),
    );

    assert_eq!(pos.latitude(), 34.1255911);

    let dao = pos.dao();
    let chars: Vec<char> = dao.chars().collect();
    assert_eq!(chars.len(), 5);
    assert_eq!(&dao[..2], "!W");
    assert!(chars[2].is_ascii_digit());
    assert!(chars[3].is_ascii_digit());
    assert_eq!(chars[4], '!');

    let compressed: Vec<char> = pos.to_compressed_string().chars().collect();
    assert_eq!(compressed.len(), 13);
    assert_eq!(compressed[0], '/');
    assert_eq!(compressed[9], 'o');
}

#[test]
fn test_dao_extends_dms_digits() {
    let pos = Position::with_symbol(
        34.1255911,
        -84.13697,
        Precision::Dao(DaoMode::Plaintext),
        symbol(),
    );
    let report = pos.to_string();
    let (lat_field, lon_field) = split_report(&report);
    assert_eq!(lat_field, "3407.53N");
    assert_eq!(lon_field, "08408.21W");

    // 07.535' and 08.218'
    assert_eq!(pos.dao(), "!W58!");
}

#[test]
fn test_ambiguity_blanks_with_spaces() {
    let expected = [
        (Ambiguity::Degrees, "34  .  N/084  .  Wo"),
        (Ambiguity::TenMinutes, "340 .  N/0840 .  Wo"),
        (Ambiguity::Minutes, "3407.  N/08408.  Wo"),
        (Ambiguity::TenthMinutes, "3407.5 N/08408.2 Wo"),
        (Ambiguity::None, "3407.54N/08408.22Wo"),
    ];
    for (level, report) in expected {
        let pos = Position::with_symbol(34.12559, -84.13697, Precision::Standard(level), symbol());
        assert_eq!(pos.to_string(), report, "level {:?}", level);
        assert_eq!(pos.dao(), "");
    }
}

#[test]
fn test_compressed_reference_example() {
    // APRS 1.01 compressed example position
    let pos = Position::with_symbol(49.5, -72.75, Precision::FULL, symbol());
    assert_eq!(pos.to_compressed_string(), "/5L!!<*e7o sT");
}

#[test]
fn test_compressed_decodes_back() {
    let pos = Position::with_symbol(-33.8688, 151.2093, Precision::FULL, symbol());
    let compressed = pos.to_compressed_string();
    let lat = 90.0 - base91_value(&compressed[1..5]) as f64 / 380_926.0;
    let lon = base91_value(&compressed[5..9]) as f64 / 190_463.0 - 180.0;
    assert_relative_eq!(lat, -33.8688, epsilon = 1.0 / 380_926.0);
    assert_relative_eq!(lon, 151.2093, epsilon = 1.0 / 190_463.0);
}

#[test]
fn test_dms_parses_back_within_hundredth_minute() {
    let pos = Position::with_symbol(51.477928, -0.001545, Precision::FULL, symbol());
    let report = pos.to_string();
    let (lat_field, lon_field) = split_report(&report);
    assert_eq!(lon_field, "00000.09W");
    assert_relative_eq!(parse_dms(lat_field, Axis::Latitude), 51.477928, epsilon = 0.005 / 60.0);
    assert_relative_eq!(parse_dms(lon_field, Axis::Longitude), -0.001545, epsilon = 0.005 / 60.0);
}

#[test]
fn test_one_kilometer_at_equator() {
    let miles = dist_from(0.0, 0.0, 0.0089, 0.0);
    assert_relative_eq!(miles, 0.62, max_relative = 0.01);
}

#[test]
fn test_direction_is_from_other_to_self() {
    let station = Position::new(34.0, -84.0);
    let east = Position::new(34.0, -83.0);
    let bearing = east.direction(&station);
    // Heading east from the station, slightly north of 90 on a great circle
    assert!(bearing > 89.0 && bearing < 90.0, "bearing {}", bearing);
    let back = station.direction(&east);
    assert!(back > 270.0 && back < 271.0, "bearing {}", back);
}

#[test]
fn test_distance_uses_rounded_accessors() {
    let a = Position::new(10.000001, 20.000001);
    let b = Position::new(10.0, 20.0);
    assert_eq!(a.distance(&b), 0.0);

    let mut a_dao = a.clone();
    a_dao.set_precision(Precision::Dao(DaoMode::Radix91));
    assert!(a_dao.distance(&b) > 0.0);
}
