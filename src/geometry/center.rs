use geo::{Centroid, MultiPoint, Point};

use crate::config::defaults::FALLBACK_CENTER;

/// Center a map on a set of (lat, lon) points.
///
/// Uses the arithmetic mean of the points, which is good enough for the
/// city-scale spreads a meetup map shows. Falls back to central France when
/// there is nothing to show.
pub fn map_center(points: &[(f64, f64)]) -> (f64, f64) {
    map_center_or(points, FALLBACK_CENTER)
}

/// Same as [`map_center`] with an explicit fallback
pub fn map_center_or(points: &[(f64, f64)], fallback: (f64, f64)) -> (f64, f64) {
    let multi: MultiPoint<f64> = points
        .iter()
        .map(|&(lat, lon)| Point::new(lon, lat))
        .collect();

    multi
        .centroid()
        .map(|c| (c.y(), c.x()))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_fallback() {
        assert_eq!(map_center(&[]), (46.2276, 2.2137));
        assert_eq!(map_center_or(&[], (1.0, 2.0)), (1.0, 2.0));
    }

    #[test]
    fn test_single_point() {
        let (lat, lon) = map_center(&[(48.8566, 2.3522)]);
        assert!((lat - 48.8566).abs() < 1e-9);
        assert!((lon - 2.3522).abs() < 1e-9);
    }

    #[test]
    fn test_mean_of_points() {
        let points = vec![(10.0, 20.0), (20.0, 40.0), (30.0, 60.0)];
        let (lat, lon) = map_center(&points);
        assert!((lat - 20.0).abs() < 1e-9);
        assert!((lon - 40.0).abs() < 1e-9);
    }
}
