//! Base-32 geohash encoding and cell arithmetic
//!
//! A geohash names a rectangle by recursive bisection of the longitude and
//! latitude ranges. Hashes sharing a prefix lie in the same cell, which is what
//! proximity bucketing relies on.

pub mod decode;
pub mod encode;
pub mod neighbors;
pub mod proximity;

pub use decode::{Bounds, decode, decode_bounds};
pub use encode::{encode, encode_default};
pub use neighbors::neighbors;
pub use proximity::Proximity;

pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const BITS_PER_CHAR: u32 = 5;

/// 5-bit value of a geohash character, case-insensitive
fn char_value(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    BASE32
        .iter()
        .position(|&b| b as char == c)
        .map(|i| i as u32)
}
