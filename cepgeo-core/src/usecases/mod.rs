mod build_query_candidates;
mod geocode;
mod resolve_address;
mod resolve_postal_code;

#[cfg(test)]
pub mod tests;

pub use self::{
    build_query_candidates::*, geocode::*, resolve_address::*, resolve_postal_code::*,
};

mod prelude {
    pub use crate::{
        entities::*,
        gateways::{geocode::GeoCodingGateway, postal_registry::PostalRegistryGateway},
    };
}
