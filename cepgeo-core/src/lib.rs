pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use cepgeo_entities::{address::*, geo::*, postal_code::*, query::*};
}
