//! Interpretation of raw geocoding payloads.
//!
//! The pipeline is `parse_response` then `StatusOutcome::classify` then
//! `to_location`, all pure and free of I/O.

use crate::components::{
    component_value, COUNTRY_TYPES, LOCALITY_TYPES, POSTAL_CODE_TYPES, REGION_TYPES, STREET_TYPES,
};
use crate::error::{GoogleGeocodeError, Result};
use crate::precision::Precision;
use crate::status::StatusOutcome;
use crate::types::{GeocodeResponse, GeocodeResult, Location};

/// Deserialize a raw payload into the provider's response shape.
///
/// Unrecognized fields are ignored; a missing `status`, non-numeric
/// coordinates, or structurally invalid nesting is `Malformed`.
pub fn parse_response(payload: &str) -> Result<GeocodeResponse> {
    serde_json::from_str(payload).map_err(GoogleGeocodeError::from)
}

/// Assemble the normalized location record from one geocoding result.
pub fn to_location(result: &GeocodeResult) -> Location {
    let components = &result.address_components;
    Location {
        latitude: result.geometry.location.lat,
        longitude: result.geometry.location.lng,
        street: component_value(components, STREET_TYPES).map(str::to_string),
        locality: component_value(components, LOCALITY_TYPES).map(str::to_string),
        region: component_value(components, REGION_TYPES).map(str::to_string),
        postal_code: component_value(components, POSTAL_CODE_TYPES).map(str::to_string),
        country: component_value(components, COUNTRY_TYPES).map(str::to_string),
        precision: Precision::of_types(&result.types),
    }
}

/// Interpret a raw payload: parse it, classify the provider status, and
/// normalize the first result.
///
/// Candidates after the first are deliberately discarded; the provider
/// orders results most-to-least likely and this client takes its word for
/// it. An `OK` status guarantees at least one result, so an empty list is
/// a contract violation surfaced as `Malformed`, never as a partial
/// `Location`.
pub fn interpret(payload: &str) -> Result<Location> {
    let response = parse_response(payload)?;

    match StatusOutcome::classify(&response.status) {
        StatusOutcome::Success => {}
        StatusOutcome::AddressNotFound => return Err(GoogleGeocodeError::AddressNotFound),
        StatusOutcome::Credentials(reason) => return Err(GoogleGeocodeError::Credentials(reason)),
        StatusOutcome::UnknownProvider(code) => {
            let detail = match response.error_message {
                Some(msg) => format!("{code} ({msg})"),
                None => code,
            };
            return Err(GoogleGeocodeError::UnknownStatus(detail));
        }
    }

    let result = response
        .results
        .first()
        .ok_or_else(|| GoogleGeocodeError::Malformed("status OK with no results".to_string()))?;

    Ok(to_location(result))
}
