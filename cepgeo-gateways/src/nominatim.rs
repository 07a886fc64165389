use crate::http;
use cepgeo_core::gateways::{geocode::GeoCodingGateway, Error, Result};
use cepgeo_entities::query::QueryCandidate;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Geocoding based on the public OpenStreetMap Nominatim service.
///
/// The usage policy requires an identifying `User-Agent`
/// and at most one request per second.
#[derive(Debug, Clone)]
pub struct Nominatim {
    api_base_url: String,
    user_agent: String,
    country_codes: String,
    client: reqwest::blocking::Client,
}

impl Nominatim {
    pub fn new(api_base_url: &str, user_agent: String, country_codes: String) -> Self {
        Self {
            api_base_url: http::base_url(api_base_url),
            user_agent,
            country_codes,
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

fn parse_deg(deg: &str) -> Result<f64> {
    deg.trim()
        .parse()
        .map_err(|_| Error::Decode(format!("Invalid coordinate '{deg}'")))
}

fn decode_lat_lng(payload: &str) -> Result<Option<(f64, f64)>> {
    let places: Vec<Place> = http::decode(payload)?;
    let Some(place) = places.first() else {
        return Ok(None);
    };
    let lat = parse_deg(&place.lat)?;
    let lng = parse_deg(&place.lon)?;
    Ok(Some((lat, lng)))
}

impl GeoCodingGateway for Nominatim {
    fn resolve_query_lat_lng(&self, query: &QueryCandidate) -> Result<Option<(f64, f64)>> {
        log::debug!("Nominatim search: '{query}'");
        let request = self
            .client
            .get(format!("{}/search", self.api_base_url))
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("format", "json"),
                ("q", query.as_str()),
                ("limit", "1"),
                ("countrycodes", self.country_codes.as_str()),
            ]);
        let payload = http::fetch(request)?;
        decode_lat_lng(&payload)
    }
}
