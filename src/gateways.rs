use crate::config::{Config, GeocodingGateway, PostalRegistryGateway};
use cepgeo_core::{
    gateways::geocode::GeoCodingGateway,
    usecases::{AddressResolver, RequestPacing},
};
use cepgeo_gateways::{nominatim::Nominatim, opencage::OpenCage, viacep::ViaCep};

type GeoCodingGw = Box<dyn GeoCodingGateway + Send + Sync>;

fn geocoding_gateway(gw: &GeocodingGateway, country_code: &str) -> GeoCodingGw {
    match gw {
        GeocodingGateway::Nominatim {
            api_base_url,
            user_agent,
        } => Box::new(Nominatim::new(
            api_base_url,
            user_agent.clone(),
            country_code.to_string(),
        )),
        GeocodingGateway::OpenCage {
            api_base_url,
            api_key,
        } => Box::new(OpenCage::new(
            api_base_url,
            api_key.clone(),
            country_code.to_string(),
        )),
    }
}

pub fn address_resolver(cfg: &Config) -> AddressResolver {
    let postal_registry = match &cfg.postal_registry {
        PostalRegistryGateway::ViaCep { api_base_url } => ViaCep::new(api_base_url),
    };
    let geocoding = &cfg.geocoding;
    let primary = geocoding_gateway(&geocoding.gateway, &geocoding.country_code);
    let fallback = geocoding
        .fallback_gateway
        .as_ref()
        .map(|gw| geocoding_gateway(gw, &geocoding.country_code));
    AddressResolver::new(
        Box::new(postal_registry),
        primary,
        fallback,
        RequestPacing::new(geocoding.request_interval),
    )
}
