use crate::http;
use cepgeo_core::gateways::{geocode::GeoCodingGateway, Result};
use cepgeo_entities::query::QueryCandidate;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.opencagedata.com";

/// Geocoding based on opencagedata.com.
#[derive(Clone)]
pub struct OpenCage {
    api_base_url: String,
    api_key: String,
    country_code: String,
    client: reqwest::blocking::Client,
}

impl OpenCage {
    pub fn new(api_base_url: &str, api_key: String, country_code: String) -> Self {
        Self {
            api_base_url: http::base_url(api_base_url),
            api_key,
            country_code,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl std::fmt::Debug for OpenCage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenCage")
            .field("api_base_url", &self.api_base_url)
            .field("country_code", &self.country_code)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    results: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct Match {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn decode_lat_lng(payload: &str) -> Result<Option<(f64, f64)>> {
    let Payload { results } = http::decode(payload)?;
    Ok(results
        .first()
        .map(|Match { geometry }| (geometry.lat, geometry.lng)))
}

impl GeoCodingGateway for OpenCage {
    fn resolve_query_lat_lng(&self, query: &QueryCandidate) -> Result<Option<(f64, f64)>> {
        log::debug!("OpenCage search: '{query}'");
        let request = self
            .client
            .get(format!("{}/geocode/v1/json", self.api_base_url))
            .query(&[
                ("q", query.as_str()),
                ("key", self.api_key.as_str()),
                ("limit", "1"),
                ("countrycode", self.country_code.as_str()),
                ("no_annotations", "1"),
            ]);
        let payload = http::fetch(request)?;
        decode_lat_lng(&payload)
    }
}
