//! HTTP clients of the external lookup services.

mod http;

pub mod nominatim;
pub mod opencage;
pub mod viacep;
