use super::{decode_bounds, encode};
use crate::error::Result;

/// (lat step, lon step) in cell units: N, NE, E, SE, S, SW, W, NW
const DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-1.0, 0.0),
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
];

/// Cells of the same precision surrounding `hash`.
///
/// Longitude wraps around the antimeridian. Cells beyond a pole do not exist
/// and are left out, so polar cells have fewer than eight neighbors.
pub fn neighbors(hash: &str) -> Result<Vec<String>> {
    let bounds = decode_bounds(hash)?;
    let (lat, lon) = bounds.center();
    let precision = hash.chars().count();

    let mut cells = Vec::with_capacity(DIRECTIONS.len());
    for (dlat, dlon) in DIRECTIONS {
        let neighbor_lat = lat + dlat * bounds.lat_span();
        if !(-90.0..=90.0).contains(&neighbor_lat) {
            continue;
        }
        let neighbor_lon = wrap_longitude(lon + dlon * bounds.lon_span());
        cells.push(encode(neighbor_lat, neighbor_lon, precision)?);
    }

    Ok(cells)
}

fn wrap_longitude(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else if lon < -180.0 {
        lon + 360.0
    } else {
        lon
    }
}
