use super::prelude::*;
use itertools::Itertools;

const COUNTRY_NAME: &str = "Brasil";

fn join_query_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .join(", ")
}

/// Builds the geocoding queries for an address, most specific first:
///
/// 1. `{street}, {city}, {state}, Brasil` (only with a street)
/// 2. `{city}, {state}, Brasil`
/// 3. `{city}, {state}`
///
/// Blank parts are skipped rather than leaving empty slots
/// like `, SP, Brasil`. Without city and state there is nothing to search for.
pub fn build_query_candidates(
    city: &str,
    state: &str,
    street: Option<&str>,
) -> Vec<QueryCandidate> {
    let city_level = join_query_parts([city, state]);
    if city_level.is_empty() {
        return vec![];
    }
    let mut queries = Vec::with_capacity(3);
    let street = street.map(str::trim).filter(|s| !s.is_empty());
    if let Some(street) = street {
        if !city.trim().is_empty() && !state.trim().is_empty() {
            queries.push(join_query_parts([street, city, state, COUNTRY_NAME]));
        }
    }
    queries.push(join_query_parts([city_level.as_str(), COUNTRY_NAME]));
    queries.push(city_level);
    queries.into_iter().filter_map(QueryCandidate::new).collect()
}

/// The single query for the fallback geocoder that
/// ignores any street level details.
pub fn city_level_query(city: &str, state: &str) -> Option<QueryCandidate> {
    QueryCandidate::new(join_query_parts([city, state]))
}
