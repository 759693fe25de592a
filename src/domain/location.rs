use serde::Serialize;
use std::fmt;

use super::fixed::to_fixed;
use crate::config::defaults::COORDINATE_DECIMALS;

/// Coordinates derived from an address, plus the address they came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    /// Comma-joined address parts, casing preserved
    pub normalized_address: String,
}

impl GeocodeResult {
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl fmt::Display for GeocodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°, {}°",
            format_coordinate(Some(self.latitude)),
            format_coordinate(Some(self.longitude))
        )
    }
}

/// Where a game session takes place, ready to be stored
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLocation {
    pub address_approx: String,
    pub latitude: f64,
    pub longitude: f64,
    pub geohash: String,
}

/// Format a coordinate with six fixed decimals, empty when unknown
pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => to_fixed(v, COORDINATE_DECIMALS),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(Some(48.8566)), "48.856600");
        assert_eq!(format_coordinate(Some(-2.5)), "-2.500000");
        assert_eq!(format_coordinate(None), "");
        assert_eq!(format_coordinate(Some(f64::NAN)), "");
    }

    #[test]
    fn test_format_coordinate_halves_and_infinity() {
        assert_eq!(format_coordinate(Some(0.0078125)), "0.007813");
        assert_eq!(format_coordinate(Some(-0.0078125)), "-0.007813");
        assert_eq!(format_coordinate(Some(f64::INFINITY)), "Infinity");
        assert_eq!(format_coordinate(Some(f64::NEG_INFINITY)), "-Infinity");
    }

    #[test]
    fn test_display_result() {
        let result = GeocodeResult {
            latitude: 12.5,
            longitude: -45.25,
            normalized_address: "Somewhere".to_string(),
        };
        assert_eq!(result.to_string(), "12.500000°, -45.250000°");
    }

    #[test]
    fn test_serialize_camel_case() {
        let result = GeocodeResult {
            latitude: 1.0,
            longitude: 2.0,
            normalized_address: "A, B".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["normalizedAddress"], "A, B");
        assert_eq!(json["latitude"], 1.0);
    }
}
