//! Tests for the DMS parser

use crate::errors::GeoError;
use crate::geo::Coordinate;
use crate::parser::{parse_coordinate, parse_decimal, parse_dms};

#[test]
fn test_parse_symbol_notation() {
    let coord = parse_dms("48°51'30\"N 2°17'40\"E").unwrap();
    assert!((coord.latitude - 48.8583).abs() < 1e-4, "lat {}", coord.latitude);
    assert!((coord.longitude - 2.2944).abs() < 1e-4, "lon {}", coord.longitude);
}

#[test]
fn test_parse_spaced_prime_notation() {
    let coord = parse_dms("48° 51′ 30.24″ N, 2° 17′ 40.2″ E").unwrap();
    assert!((coord.latitude - 48.8584).abs() < 1e-4, "lat {}", coord.latitude);
    assert!((coord.longitude - 2.2945).abs() < 1e-4, "lon {}", coord.longitude);
}

#[test]
fn test_letter_markers_parse_like_symbols() {
    let letters = parse_dms("48d51m30.24sN 2d17m40.2sE").unwrap();
    let symbols = parse_dms("48°51'30.24\"N 2°17'40.2\"E").unwrap();
    assert_eq!(letters, symbols);
}

#[test]
fn test_southern_and_western_hemispheres_negate() {
    let sydney = parse_dms("33°52'4\"S 151°12'30\"E").unwrap();
    assert!(sydney.latitude < 0.0);
    assert!(sydney.longitude > 0.0);

    let dc = parse_dms("38°53'53\"N 77°2'13\"W").unwrap();
    assert!(dc.latitude > 0.0);
    assert!(dc.longitude < 0.0);
}

#[test]
fn test_garbage_input_fails() {
    let result = parse_dms("not a coordinate");
    assert!(matches!(result, Err(GeoError::InvalidDms(_))));
}

#[test]
fn test_single_token_fails() {
    let result = parse_dms("48°51'30\"N");
    assert!(matches!(result, Err(GeoError::InvalidDms(_))));
}

#[test]
fn test_swapped_token_order_fails() {
    // Longitude token first: previously this would silently misassign
    let result = parse_dms("2°17'40\"E 48°51'30\"N");
    assert!(matches!(result, Err(GeoError::HemisphereMismatch(_))));
}

#[test]
fn test_two_latitude_tokens_fail() {
    let result = parse_dms("48°51'30\"N 48°51'30\"S");
    assert!(matches!(result, Err(GeoError::HemisphereMismatch(_))));
}

#[test]
fn test_out_of_range_latitude_fails() {
    let result = parse_dms("99°0'0\"N 2°17'40\"E");
    assert!(matches!(result, Err(GeoError::OutOfRange { what: "latitude", .. })));
}

#[test]
fn test_dms_round_trip() {
    let cases = [
        Coordinate::new(48.8583, 2.2944),
        Coordinate::new(-33.8678, 151.2073),
        Coordinate::new(0.0, 0.0),
        Coordinate::new(89.9999, -179.9999),
    ];

    for original in cases {
        let rendered = original.to_dms_string();
        let parsed = parse_dms(&rendered).unwrap();
        assert!((parsed.latitude - original.latitude).abs() <= 1e-4,
                "{} -> {} -> {}", original, rendered, parsed);
        assert!((parsed.longitude - original.longitude).abs() <= 1e-4,
                "{} -> {} -> {}", original, rendered, parsed);
    }
}

#[test]
fn test_parse_decimal_pair() {
    let coord = parse_decimal("38.898, -77.037").unwrap();
    assert_eq!(coord, Coordinate::new(38.898, -77.037));

    assert!(parse_decimal("38.898").is_err());
    assert!(parse_decimal("38.898, abc").is_err());
    assert!(parse_decimal("91.0, 0.0").is_err());
}

#[test]
fn test_parse_coordinate_accepts_both_notations() {
    let dms = parse_coordinate("48°51'30\"N 2°17'40\"E").unwrap();
    let decimal = parse_coordinate("48.8583, 2.2944").unwrap();
    assert!((dms.latitude - decimal.latitude).abs() < 1e-4);
    assert!((dms.longitude - decimal.longitude).abs() < 1e-4);
}

#[test]
fn test_display_uses_fixed_six_decimals() {
    let coord = Coordinate::new(48.8583, 2.2944);
    assert_eq!(coord.to_string(), "48.858300, 2.294400");
}
