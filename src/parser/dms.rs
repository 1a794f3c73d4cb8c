//! DMS coordinate text parsing
//!
//! Extracts a latitude/longitude pair from free-form
//! degrees-minutes-seconds notation. The token pattern is deliberately
//! lenient about formatting, so all of these parse to the same pair:
//!
//! ```text
//! 48°51'30"N 2°17'40"E
//! 48° 51′ 30.24″ N, 2° 17′ 40.2″ E
//! 48d51m30.24sN 2d17m40.2sE
//! ```

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::errors::{GeoError, GeoResult};
use crate::geo::Coordinate;

lazy_static! {
    // One DMS token: 1-3 degree digits, optional degree marker, 1-2
    // minute digits, optional minute marker, seconds (possibly
    // fractional), optional second marker, then a hemisphere letter.
    static ref DMS_TOKEN: Regex = Regex::new(
        r#"(\d{1,3})[°dD]?\s?(\d{1,2})['′mM]?\s?(\d{1,2}\.?\d*)["″sS]?\s?([NSEWnsew])"#
    ).expect("DMS token pattern is valid");
}

/// One matched DMS token before conversion to decimal degrees
struct DmsToken {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    hemisphere: char,
}

impl DmsToken {
    fn from_captures(caps: &Captures) -> GeoResult<Self> {
        let degrees = caps[1].parse::<u32>()
            .map_err(|_| GeoError::InvalidNumber(caps[1].to_string()))?;
        let minutes = caps[2].parse::<u32>()
            .map_err(|_| GeoError::InvalidNumber(caps[2].to_string()))?;
        let seconds = caps[3].parse::<f64>()
            .map_err(|_| GeoError::InvalidNumber(caps[3].to_string()))?;
        let hemisphere = caps[4].chars().next()
            .ok_or_else(|| GeoError::InvalidDms("empty hemisphere capture".to_string()))?
            .to_ascii_uppercase();

        Ok(DmsToken { degrees, minutes, seconds, hemisphere })
    }

    /// Convert to signed decimal degrees, rounded to 4 decimal places
    ///
    /// The rounding (~11 m of precision) absorbs floating-point noise
    /// from the minutes/seconds division chain.
    fn to_decimal(&self) -> f64 {
        let decimal = self.degrees as f64
            + self.minutes as f64 / 60.0
            + self.seconds / 3600.0;
        let signed = match self.hemisphere {
            'S' | 'W' => -decimal,
            _ => decimal,
        };
        (signed * 10_000.0).round() / 10_000.0
    }

    fn is_latitude(&self) -> bool {
        self.hemisphere == 'N' || self.hemisphere == 'S'
    }
}

/// Parse a latitude/longitude pair from DMS text
///
/// The first matched token is the latitude and must carry an N/S
/// hemisphere, the second is the longitude and must carry E/W. Text
/// between and around the tokens (whitespace, commas, other punctuation)
/// is ignored.
///
/// # Arguments
/// * `text` - Free-form text containing two DMS tokens
///
/// # Returns
/// The parsed coordinate, or an error when fewer than two tokens are
/// found, a hemisphere letter conflicts with its position, a numeric
/// field fails to parse, or the result is out of range
pub fn parse_dms(text: &str) -> GeoResult<Coordinate> {
    let mut tokens = Vec::new();
    for caps in DMS_TOKEN.captures_iter(text) {
        tokens.push(DmsToken::from_captures(&caps)?);
    }

    if tokens.len() < 2 {
        return Err(GeoError::InvalidDms(format!(
            "expected two DMS tokens, found {} in '{}'", tokens.len(), text)));
    }

    let lat_token = &tokens[0];
    let lon_token = &tokens[1];

    if !lat_token.is_latitude() {
        return Err(GeoError::HemisphereMismatch(format!(
            "first token must be N/S, found '{}'", lat_token.hemisphere)));
    }
    if lon_token.is_latitude() {
        return Err(GeoError::HemisphereMismatch(format!(
            "second token must be E/W, found '{}'", lon_token.hemisphere)));
    }

    Coordinate::checked(lat_token.to_decimal(), lon_token.to_decimal())
}

/// Parse a plain decimal coordinate pair ("lat,lon")
///
/// # Arguments
/// * `text` - Comma-separated decimal degrees, latitude first
///
/// # Returns
/// The parsed coordinate or an error for malformed or out-of-range input
pub fn parse_decimal(text: &str) -> GeoResult<Coordinate> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(GeoError::InvalidDms(format!(
            "decimal coordinate must be 'lat,lon', got '{}'", text)));
    }

    let latitude = parts[0].trim().parse::<f64>()
        .map_err(|_| GeoError::InvalidNumber(parts[0].trim().to_string()))?;
    let longitude = parts[1].trim().parse::<f64>()
        .map_err(|_| GeoError::InvalidNumber(parts[1].trim().to_string()))?;

    Coordinate::checked(latitude, longitude)
}

/// Parse coordinate text in either DMS or decimal notation
///
/// DMS is tried first; decimal text never contains a hemisphere letter,
/// so the two notations cannot be confused.
pub fn parse_coordinate(text: &str) -> GeoResult<Coordinate> {
    match parse_dms(text) {
        Ok(coord) => Ok(coord),
        Err(GeoError::InvalidDms(_)) => parse_decimal(text),
        Err(e) => Err(e),
    }
}
