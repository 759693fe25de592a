//! meetup-geo - Deterministic address geocoding and geohash encoding for game meetups

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod geocode;
pub mod geohash;
pub mod geometry;
pub mod session;

pub use domain::{GeocodeInput, GeocodeResult};
pub use error::{Error, Result};
pub use geocode::geocode;
pub use geohash::{encode as encode_geohash, encode_default as encode_geohash_default};
