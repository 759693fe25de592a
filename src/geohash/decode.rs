use super::{BITS_PER_CHAR, char_value};
use crate::error::{Error, Result};

/// The rectangle of coordinates covered by a geohash cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Center of the cell as (lat, lon)
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Half-open containment, matching how the encoder assigns midpoints
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat < self.max_lat && lon >= self.min_lon && lon < self.max_lon
    }
}

/// Replay the encoder's bisections to recover the cell a geohash names
pub fn decode_bounds(hash: &str) -> Result<Bounds> {
    if hash.is_empty() {
        return Err(Error::InvalidGeohash("empty geohash".to_string()));
    }

    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut is_lon_bit = true;

    for c in hash.chars() {
        let value = char_value(c).ok_or_else(|| {
            Error::InvalidGeohash(format!("unexpected character '{}' in \"{}\"", c, hash))
        })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            let range = if is_lon_bit {
                &mut lon_range
            } else {
                &mut lat_range
            };
            let mid = (range.0 + range.1) / 2.0;
            if (value >> shift) & 1 == 1 {
                range.0 = mid;
            } else {
                range.1 = mid;
            }
            is_lon_bit = !is_lon_bit;
        }
    }

    Ok(Bounds {
        min_lat: lat_range.0,
        max_lat: lat_range.1,
        min_lon: lon_range.0,
        max_lon: lon_range.1,
    })
}

/// Decode a geohash to the (lat, lon) center of its cell
pub fn decode(hash: &str) -> Result<(f64, f64)> {
    decode_bounds(hash).map(|b| b.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::encode;

    #[test]
    fn test_single_char_bounds() {
        let b = decode_bounds("s").unwrap();
        assert_eq!(b.min_lat, 0.0);
        assert_eq!(b.max_lat, 45.0);
        assert_eq!(b.min_lon, 0.0);
        assert_eq!(b.max_lon, 45.0);
        assert_eq!(b.center(), (22.5, 22.5));
    }

    #[test]
    fn test_cell_contains_encoded_point() {
        let (lat, lon) = (57.64911, 10.40744);
        let hash = encode(lat, lon, 11).unwrap();
        let b = decode_bounds(&hash).unwrap();

        assert!(b.contains(lat, lon));
        assert!(b.lat_span() < 1e-5);
        assert!(b.lon_span() < 1e-5);
    }

    #[test]
    fn test_decode_center_close_to_encoded_point() {
        let (lat, lon) = decode("ww8p1r4t8").unwrap();
        assert!((lat - 37.8324).abs() < 1e-4);
        assert!((lon - 112.5584).abs() < 1e-4);
    }

    #[test]
    fn test_accepts_uppercase() {
        assert_eq!(decode_bounds("U4PRU").unwrap(), decode_bounds("u4pru").unwrap());
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(decode_bounds(""), Err(Error::InvalidGeohash(_))));
        // 'a', 'i', 'l' and 'o' are not part of the alphabet
        assert!(matches!(decode_bounds("u4a"), Err(Error::InvalidGeohash(_))));
        assert!(matches!(decode_bounds("lo"), Err(Error::InvalidGeohash(_))));
    }
}
