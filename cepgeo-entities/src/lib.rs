#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # cepgeo-entities
//!
//! Reusable, agnostic domain entities for resolving Brazilian postal codes
//! into street addresses and geographic coordinates.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod geo;
pub mod postal_code;
pub mod query;
