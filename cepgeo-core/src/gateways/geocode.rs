use super::Result;
use cepgeo_entities::query::QueryCandidate;

pub trait GeoCodingGateway {
    /// Returns the position of the best match in decimal degrees
    /// or `None` if the service did not find anything.
    fn resolve_query_lat_lng(&self, query: &QueryCandidate) -> Result<Option<(f64, f64)>>;
}
