//! HTTP shell for the Google Geocoding API.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::response;
use crate::types::Location;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_USER_AGENT: &str = "google-geocode-client-rs/0.1";

/// Client for the Google Geocoding API.
///
/// Issues a forward-geocode query for a free-text address and normalizes
/// the response into a [`Location`]. Retry, caching, batching, and rate
/// limiting are left to the caller.
pub struct GoogleGeocodeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleGeocodeClient {
    /// Create a client against the default endpoint (30 second timeout)
    pub fn new(api_key: Option<&str>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(base_url: &str, api_key: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    /// Geocode a free-text address to a normalized location
    pub async fn locate(&self, address: &str) -> Result<Location> {
        let url = self.request_url(address);

        let body = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match response::interpret(&body) {
            Ok(location) => {
                debug!(
                    address,
                    lat = location.latitude,
                    lng = location.longitude,
                    precision = ?location.precision,
                    "Geocoded address"
                );
                Ok(location)
            }
            Err(err) => {
                warn!(address, error = %err, "Geocoding failed");
                Err(err)
            }
        }
    }

    fn request_url(&self, address: &str) -> String {
        let mut url = format!(
            "{}?address={}&sensor=false",
            self.base_url,
            urlencoding::encode(address)
        );
        if let Some(ref key) = self.api_key {
            url.push_str(&format!("&key={}", urlencoding::encode(key)));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_address() {
        let client = GoogleGeocodeClient::new(None);
        assert_eq!(
            client.request_url("1600 Amphitheatre Pkwy, Mountain View, CA"),
            "https://maps.googleapis.com/maps/api/geocode/json\
             ?address=1600%20Amphitheatre%20Pkwy%2C%20Mountain%20View%2C%20CA&sensor=false"
        );
    }

    #[test]
    fn test_request_url_appends_api_key() {
        let client = GoogleGeocodeClient::with_base_url("http://localhost:8080/geocode", Some("abc123"));
        assert_eq!(
            client.request_url("Oslo"),
            "http://localhost:8080/geocode?address=Oslo&sensor=false&key=abc123"
        );
    }
}
