//! Resolving where a game session takes place
//!
//! A host either reuses the address saved on their profile or types one in.
//! Profile coordinates computed on an earlier save are reused as-is; anything
//! else goes through the deterministic geocoder. The result is always encoded
//! as a geohash for proximity lookups.

use crate::domain::{GeocodeInput, ProfileAddress, SessionLocation};
use crate::error::{Error, Result};
use crate::geocode::{build_query, geocode};
use crate::geohash::encode;

/// Where the session address comes from
#[derive(Debug, Clone, Copy)]
pub enum LocationSource<'a> {
    Profile(&'a ProfileAddress),
    Manual(&'a str),
}

pub fn locate_session(source: LocationSource<'_>, precision: usize) -> Result<SessionLocation> {
    let (address_approx, (latitude, longitude)) = match source {
        LocationSource::Profile(profile) => locate_profile(profile)?,
        LocationSource::Manual(address) => locate_manual(address)?,
    };

    let geohash = encode(latitude, longitude, precision)?;

    Ok(SessionLocation {
        address_approx,
        latitude,
        longitude,
        geohash,
    })
}

fn locate_profile(profile: &ProfileAddress) -> Result<(String, (f64, f64))> {
    let street = profile
        .address
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(Error::ProfileAddressMissing)?;

    let input = profile.input();

    if let Some(coords) = profile.stored_coordinates() {
        let mut address_approx = build_query(&input);
        if address_approx.is_empty() {
            address_approx = street.to_string();
        }
        return Ok((address_approx, coords));
    }

    let result = geocode(&input).ok_or_else(|| {
        Error::Ungeocodable("Unable to calculate coordinates for your profile address".to_string())
    })?;
    let coords = result.coordinates();
    Ok((result.normalized_address, coords))
}

fn locate_manual(address: &str) -> Result<(String, (f64, f64))> {
    if address.trim().is_empty() {
        return Err(Error::AddressMissing);
    }

    let result = geocode(&GeocodeInput::from_address(address)).ok_or_else(|| {
        Error::Ungeocodable("Unable to calculate coordinates for this session address".to_string())
    })?;
    let coords = result.coordinates();
    Ok((result.normalized_address, coords))
}
