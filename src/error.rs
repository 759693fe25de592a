use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Latitude and longitude must be finite numbers (got {latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),

    #[error("Add a street address to your profile first")]
    ProfileAddressMissing,

    #[error("Provide an address for the session")]
    AddressMissing,

    #[error("{0}")]
    Ungeocodable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
