//! Google Geocoding API Client
//!
//! A Rust client for the Google [Geocoding API] that turns a geocoding
//! response into a normalized [`Location`] with a [`Precision`]
//! classification and a typed error.
//!
//! The interpretation pipeline is pure and synchronous: [`parse_response`]
//! deserializes the raw payload, [`StatusOutcome::classify`] inspects the
//! provider's status code, and [`to_location`] assembles the normalized
//! record from the first result. [`GoogleGeocodeClient`] wraps the pipeline
//! in a thin async HTTP shell.
//!
//! [Geocoding API]: https://developers.google.com/maps/documentation/geocoding

mod client;
mod components;
mod error;
mod precision;
mod response;
mod status;
mod types;

pub use client::GoogleGeocodeClient;
pub use error::{GoogleGeocodeError, Result};
pub use precision::Precision;
pub use response::{interpret, parse_response, to_location};
pub use status::StatusOutcome;
pub use types::{AddressComponent, Coordinates, GeocodeResponse, GeocodeResult, Geometry, Location};
