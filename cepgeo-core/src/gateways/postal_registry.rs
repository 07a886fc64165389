use super::Result;
use cepgeo_entities::{address::PostalAddress, postal_code::PostalCode};

pub trait PostalRegistryGateway {
    /// Returns `None` if the registry explicitly reports
    /// that the postal code does not exist.
    fn lookup_postal_code(&self, code: &PostalCode) -> Result<Option<PostalAddress>>;
}
