use cepgeo_core::gateways::{Error, Result};
use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;

pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

pub(crate) fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|err| Error::Decode(err.to_string()))
}

/// Sends the request and returns the body of a successful response.
pub(crate) fn fetch(request: RequestBuilder) -> Result<String> {
    let response = request.send().map_err(transport_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }
    response.text().map_err(transport_error)
}

pub(crate) fn base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
