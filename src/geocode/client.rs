// src/geocode/client.rs
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::USER_AGENT;
use crate::config::options::GeocodeOptions;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Address -> coordinates. One call per address, no retries.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Coordinates>;
}

/* ---------------- Wire format ---------------- */

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Decode a geocoding JSON body. Anything but `"OK"` with a first result is an error.
pub fn parse_response(body: &str) -> Result<Coordinates> {
    let resp: GeocodeResponse = serde_json::from_str(body)?;
    if resp.status != "OK" {
        return Err(Error::GeocodeStatus(resp.status));
    }
    let first = resp
        .results
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse(s!("status OK but no results")))?;
    let loc = first.geometry.location;
    if !loc.lat.is_finite() || !loc.lng.is_finite() {
        return Err(Error::MalformedResponse(s!("non-finite coordinates")));
    }
    Ok(Coordinates { lat: loc.lat, lng: loc.lng })
}

/* ---------------- HTTP client ---------------- */

/// Google-style geocoding endpoint: GET `?address=..&key=..`.
pub struct HttpGeocoder {
    client: Client,
    endpoint: String,
    key: String,
}

impl HttpGeocoder {
    pub fn new(endpoint: &str, key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint: s!(endpoint), key })
    }

    /// Build from config; fails early when the API key variable is unset.
    pub fn from_options(opts: &GeocodeOptions) -> Result<Self> {
        let key = opts.api_key()?;
        Self::new(&opts.endpoint, key, opts.timeout())
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, address: &str) -> Result<Coordinates> {
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.key.as_str())])
            .send()?
            .error_for_status()?
            .text()?;
        parse_response(&body)
    }
}
