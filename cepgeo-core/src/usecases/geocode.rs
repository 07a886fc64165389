use super::{build_query_candidates::city_level_query, prelude::*};
use std::{thread, time::Duration};

/// Default pause between two requests to the same geocoding service.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Minimum time between two consecutive requests
/// to a shared public geocoding service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPacing {
    pub interval: Duration,
}

impl RequestPacing {
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn pause(&self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

impl Default for RequestPacing {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_INTERVAL)
    }
}

fn resolve_coordinate<G>(gw: &G, query: &QueryCandidate) -> Option<Coordinate>
where
    G: GeoCodingGateway + ?Sized,
{
    match gw.resolve_query_lat_lng(query) {
        Ok(Some((lat, lng))) => {
            let coordinate = Coordinate::from_lat_lng_deg(lat, lng);
            match &coordinate {
                Some(c) => log::debug!("Resolved location of '{query}': {c}"),
                None => log::warn!("Ignoring invalid location of '{query}': ({lat}, {lng})"),
            }
            coordinate
        }
        Ok(None) => {
            log::debug!("No location found for '{query}'");
            None
        }
        Err(err) => {
            log::warn!("Failed to resolve location of '{query}': {err}");
            None
        }
    }
}

/// Tries one query after the other and stops at the first match.
///
/// The requests are strictly sequential and paced:
/// every request after the first one waits for the configured interval.
pub fn geocode_candidates<G>(
    gw: &G,
    candidates: &[QueryCandidate],
    pacing: &RequestPacing,
) -> Option<Coordinate>
where
    G: GeoCodingGateway + ?Sized,
{
    for (i, query) in candidates.iter().enumerate() {
        if i > 0 {
            pacing.pause();
        }
        if let Some(coordinate) = resolve_coordinate(gw, query) {
            return Some(coordinate);
        }
    }
    None
}

/// A single city level request to an independent geocoding service.
pub fn geocode_fallback<G>(gw: &G, city: &str, state: &str) -> Option<Coordinate>
where
    G: GeoCodingGateway + ?Sized,
{
    let query = city_level_query(city, state)?;
    resolve_coordinate(gw, &query)
}
