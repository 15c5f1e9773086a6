//! Wire types for the Google Geocoding API and the normalized output record.
//!
//! The deserialize structs mirror the provider's JSON contract. Fields the
//! provider sends beyond these are ignored; a missing `status` or a
//! non-numeric coordinate fails deserialization.

use serde::Deserialize;

use crate::precision::Precision;

/// Normalized location produced from the first geocoding result
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub street: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub precision: Precision,
}

/// Top-level geocoding response
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// Present on some non-success statuses
    pub error_message: Option<String>,
}

/// One geocoding candidate; only the first in a response is consumed
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A fragment of the structured address, tagged with its semantic roles
#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
