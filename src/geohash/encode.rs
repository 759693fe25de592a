use super::{BASE32, BITS_PER_CHAR};
use crate::config::defaults::DEFAULT_PRECISION;
use crate::error::{Error, Result};

/// Encode a coordinate pair as a geohash of exactly `precision` characters.
///
/// Bits alternate between longitude and latitude, starting with longitude.
/// Each bit halves the active range: `1` keeps the upper half (value >= midpoint),
/// `0` the lower half. Every 5 bits become one base-32 character.
///
/// Out-of-domain values (e.g. latitude 95) are not rejected, they just saturate
/// the bit sequence. Non-finite input is a hard error.
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(Error::InvalidCoordinate {
            latitude,
            longitude,
        });
    }

    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut hash = String::with_capacity(precision);
    let mut bit = 0;
    let mut ch = 0usize;
    let mut is_lon_bit = true;

    while hash.len() < precision {
        let (range, value) = if is_lon_bit {
            (&mut lon_range, longitude)
        } else {
            (&mut lat_range, latitude)
        };

        let mid = (range.0 + range.1) / 2.0;
        if value >= mid {
            ch = (ch << 1) | 1;
            range.0 = mid;
        } else {
            ch <<= 1;
            range.1 = mid;
        }

        is_lon_bit = !is_lon_bit;
        bit += 1;

        if bit == BITS_PER_CHAR {
            hash.push(BASE32[ch] as char);
            bit = 0;
            ch = 0;
        }
    }

    Ok(hash)
}

/// Encode at the precision stored alongside game sessions
pub fn encode_default(latitude: f64, longitude: f64) -> Result<String> {
    encode(latitude, longitude, DEFAULT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_hashes() {
        assert_eq!(encode(37.8324, 112.5584, 9).unwrap(), "ww8p1r4t8");
        assert_eq!(encode(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
        assert_eq!(encode(0.0, 0.0, 9).unwrap(), "s00000000");
    }

    #[test]
    fn test_prefix_of_longer_hash() {
        let long = encode(48.8566, 2.3522, 12).unwrap();
        let short = encode(48.8566, 2.3522, 5).unwrap();
        assert!(long.starts_with(&short));
    }

    #[test]
    fn test_deterministic() {
        let a = encode(48.8566, 2.3522, 9).unwrap();
        let b = encode(48.8566, 2.3522, 9).unwrap();
        assert_eq!(a, b);
        assert_eq!(encode_default(48.8566, 2.3522).unwrap(), a);
    }

    #[test]
    fn test_zero_precision_is_empty() {
        assert_eq!(encode(10.0, 10.0, 0).unwrap(), "");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(encode(90.0, 180.0, 4).unwrap(), "zzzz");
        assert_eq!(encode(-90.0, -180.0, 4).unwrap(), "0000");
    }

    #[test]
    fn test_out_of_domain_saturates() {
        assert_eq!(encode(95.0, 200.0, 3).unwrap(), "zzz");
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            encode(f64::NAN, 2.35, 9),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            encode(48.85, f64::INFINITY, 9),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            encode(f64::NEG_INFINITY, 0.0, 1),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    proptest! {
        #[test]
        fn test_length_and_alphabet(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            precision in 1usize..=20,
        ) {
            let hash = encode(lat, lon, precision).unwrap();
            prop_assert_eq!(hash.len(), precision);
            prop_assert!(hash.bytes().all(|b| BASE32.contains(&b)));
        }
    }
}
