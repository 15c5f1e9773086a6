//! Classification of provider status codes.

/// Outcome of inspecting the provider's `status` field.
///
/// Three provider codes collapse into `Credentials`, each keeping its own
/// reason; any unrecognized code lands in `UnknownProvider` with the raw
/// code preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Success,
    AddressNotFound,
    Credentials(&'static str),
    UnknownProvider(String),
}

impl StatusOutcome {
    /// Map a raw status code to its outcome. Pure mapping, no retries.
    pub fn classify(code: &str) -> Self {
        match code {
            "OK" => Self::Success,
            "ZERO_RESULTS" => Self::AddressNotFound,
            "OVER_QUERY_LIMIT" => Self::Credentials("Too many queries!"),
            "REQUEST_DENIED" => {
                Self::Credentials("Request denied! Did you include the sensor parameter?")
            }
            "INVALID_REQUEST" => {
                Self::Credentials("Invalid request. Did you include an address or latlng?")
            }
            other => Self::UnknownProvider(other.to_string()),
        }
    }
}
