//! Error types for the Google Geocoding client

use std::fmt;

/// Errors from geocoding a query
#[derive(Debug)]
pub enum GoogleGeocodeError {
    /// HTTP request failed or returned a non-success status
    Http(reqwest::Error),
    /// Payload does not conform to the expected response shape
    Malformed(String),
    /// Provider reported zero matches for the query
    AddressNotFound,
    /// Quota exhausted, request denied, or malformed request
    Credentials(&'static str),
    /// Unrecognized provider status code, kept raw for diagnostics
    UnknownStatus(String),
}

impl fmt::Display for GoogleGeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Malformed(msg) => write!(f, "Malformed geocoding response: {msg}"),
            Self::AddressNotFound => write!(f, "Address not found!"),
            Self::Credentials(reason) => write!(f, "{reason}"),
            Self::UnknownStatus(code) => write!(f, "Unknown error: {code}"),
        }
    }
}

impl std::error::Error for GoogleGeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GoogleGeocodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<serde_json::Error> for GoogleGeocodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GoogleGeocodeError>;
