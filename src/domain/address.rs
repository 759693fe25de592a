use serde::Deserialize;

/// Raw postal address fields as entered by a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeInput {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_complement: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl GeocodeInput {
    pub fn new(
        address: Option<String>,
        address_complement: Option<String>,
        zip_code: Option<String>,
    ) -> Self {
        Self {
            address,
            address_complement,
            zip_code,
        }
    }

    /// Input carrying only the street address line
    pub fn from_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Default::default()
        }
    }

    /// Fields in join order: address, complement, zip code
    pub fn parts(&self) -> [Option<&str>; 3] {
        [
            self.address.as_deref(),
            self.address_complement.as_deref(),
            self.zip_code.as_deref(),
        ]
    }
}

/// A user's saved address, possibly with coordinates computed on a previous save
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAddress {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_complement: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ProfileAddress {
    pub fn input(&self) -> GeocodeInput {
        GeocodeInput::new(
            self.address.clone(),
            self.address_complement.clone(),
            self.zip_code.clone(),
        )
    }

    /// Stored coordinates, only when both halves are present
    pub fn stored_coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
