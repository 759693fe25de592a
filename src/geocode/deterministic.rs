//! Hash-based stand-in for a geocoding service
//!
//! The lower-cased query is hashed with SHA-256:
//! - bytes 0..4 (u32 big-endian) map linearly onto latitude [-90, 90]
//! - bytes 4..8 (u32 big-endian) map linearly onto longitude [-180, 180]
//!
//! Both values are rounded to 6 decimals. Stored coordinates depend on this
//! exact derivation, so the algorithm, offsets and rounding must not change.

use sha2::{Digest, Sha256};

use super::normalize::build_query;
use crate::config::defaults::COORDINATE_DECIMALS;
use crate::domain::{GeocodeInput, GeocodeResult, round_fixed};

const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Derive reproducible coordinates for an address.
///
/// Returns `None` when no address part is usable; callers should turn that into
/// a validation message rather than substitute a default location.
pub fn geocode(input: &GeocodeInput) -> Option<GeocodeResult> {
    let query = build_query(input);
    if query.is_empty() {
        return None;
    }

    let digest = Sha256::digest(query.to_lowercase().as_bytes());
    let latitude = coordinate_from_digest(&digest, 0, LATITUDE_RANGE);
    let longitude = coordinate_from_digest(&digest, 4, LONGITUDE_RANGE);

    Some(GeocodeResult {
        latitude,
        longitude,
        normalized_address: query,
    })
}

/// Map 4 digest bytes at `offset` onto `range`
fn coordinate_from_digest(digest: &[u8], offset: usize, range: (f64, f64)) -> f64 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&digest[offset..offset + 4]);

    let fraction = u32::from_be_bytes(word) as f64 / u32::MAX as f64;
    let (min, max) = range;
    round_fixed(min + fraction * (max - min), COORDINATE_DECIMALS)
}
