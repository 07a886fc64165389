use super::{
    build_query_candidates, geocode_candidates, geocode_fallback, prelude::*,
    resolve_postal_code, RequestPacing,
};

/// The external services needed to resolve an address.
pub struct AddressGateways<'a, P: ?Sized, G: ?Sized, F: ?Sized> {
    pub postal_registry: &'a P,
    pub geocoding: &'a G,
    pub fallback_geocoding: Option<&'a F>,
}

/// Resolves the street address of a postal code and
/// tries to find its geographic coordinate.
///
/// Returns `None` only if the postal code is malformed or unknown.
/// A missing coordinate is not an error: the address is
/// returned without it.
pub fn resolve_address<P, G, F>(
    gateways: AddressGateways<'_, P, G, F>,
    pacing: &RequestPacing,
    raw_postal_code: &str,
) -> Option<ResolvedAddress>
where
    P: PostalRegistryGateway + ?Sized,
    G: GeoCodingGateway + ?Sized,
    F: GeoCodingGateway + ?Sized,
{
    let AddressGateways {
        postal_registry,
        geocoding,
        fallback_geocoding,
    } = gateways;
    let address = resolve_postal_code(postal_registry, raw_postal_code)?;
    let street = address.has_street().then_some(address.street.as_str());
    let candidates = build_query_candidates(&address.city, &address.state, street);
    let coordinate = geocode_candidates(geocoding, &candidates, pacing).or_else(|| {
        let gw = fallback_geocoding?;
        log::debug!("Trying fallback geocoding for '{}'", raw_postal_code);
        geocode_fallback(gw, &address.city, &address.state)
    });
    if coordinate.is_none() {
        log::info!(
            "No coordinate found for postal code '{}' ({}, {})",
            raw_postal_code,
            address.city,
            address.state
        );
    }
    Some(ResolvedAddress {
        address,
        coordinate,
    })
}

type BoxedPostalRegistry = Box<dyn PostalRegistryGateway + Send + Sync>;
type BoxedGeoCoding = Box<dyn GeoCodingGateway + Send + Sync>;

/// Owns the configured gateways and answers
/// "address and coordinate of postal code X".
///
/// Independent invocations share no mutable state.
pub struct AddressResolver {
    postal_registry: BoxedPostalRegistry,
    geocoding: BoxedGeoCoding,
    fallback_geocoding: Option<BoxedGeoCoding>,
    pacing: RequestPacing,
}

impl AddressResolver {
    pub fn new(
        postal_registry: BoxedPostalRegistry,
        geocoding: BoxedGeoCoding,
        fallback_geocoding: Option<BoxedGeoCoding>,
        pacing: RequestPacing,
    ) -> Self {
        Self {
            postal_registry,
            geocoding,
            fallback_geocoding,
            pacing,
        }
    }

    pub fn resolve(&self, raw_postal_code: &str) -> Option<ResolvedAddress> {
        let gateways = AddressGateways {
            postal_registry: &*self.postal_registry,
            geocoding: &*self.geocoding,
            fallback_geocoding: self.fallback_geocoding.as_deref(),
        };
        resolve_address(gateways, &self.pacing, raw_postal_code)
    }
}

impl std::fmt::Debug for AddressResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressResolver")
            .field("fallback_geocoding", &self.fallback_geocoding.is_some())
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}
