use thiserror::Error;

pub mod geocode;
pub mod postal_registry;

/// A failure while talking to an external lookup service.
///
/// Gateway errors never leave the use cases: they are
/// logged and treated like a missing result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Invalid response payload: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
