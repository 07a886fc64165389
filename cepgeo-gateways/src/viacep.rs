use crate::http;
use cepgeo_core::gateways::{postal_registry::PostalRegistryGateway, Result};
use cepgeo_entities::{address::PostalAddress, postal_code::PostalCode};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_API_BASE_URL: &str = "https://viacep.com.br/ws";

/// Postal registry based on viacep.com.br.
#[derive(Debug, Clone)]
pub struct ViaCep {
    api_base_url: String,
    client: reqwest::blocking::Client,
}

impl ViaCep {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: http::base_url(api_base_url),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self, code: &PostalCode) -> String {
        format!("{}/{}/json/", self.api_base_url, code)
    }
}

impl Default for ViaCep {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[derive(Debug, Deserialize)]
struct Payload {
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
    /// Either `true` or `"true"` for unknown postal codes.
    erro: Option<Value>,
}

impl Payload {
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(erro)) => *erro,
            Some(Value::String(erro)) => erro.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

fn decode_address(payload: &str) -> Result<Option<PostalAddress>> {
    let payload: Payload = http::decode(payload)?;
    if payload.is_not_found() {
        return Ok(None);
    }
    let Payload {
        logradouro,
        bairro,
        localidade,
        uf,
        ..
    } = payload;
    Ok(Some(PostalAddress {
        street: logradouro.unwrap_or_default(),
        neighborhood: bairro.unwrap_or_default(),
        city: localidade.unwrap_or_default(),
        state: uf.unwrap_or_default(),
    }))
}

impl PostalRegistryGateway for ViaCep {
    fn lookup_postal_code(&self, code: &PostalCode) -> Result<Option<PostalAddress>> {
        let url = self.url(code);
        log::debug!("Looking up postal code {code}: {url}");
        let payload = http::fetch(self.client.get(&url))?;
        decode_address(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cepgeo_core::gateways::Error;

    #[test]
    fn decode_found_address() {
        let payload = r#"{
          "cep": "01001-000",
          "logradouro": "Praça da Sé",
          "complemento": "lado ímpar",
          "unidade": "",
          "bairro": "Sé",
          "localidade": "São Paulo",
          "uf": "SP",
          "estado": "São Paulo",
          "regiao": "Sudeste",
          "ibge": "3550308",
          "gia": "1004",
          "ddd": "11",
          "siafi": "7107"
        }"#;
        let address = decode_address(payload).unwrap().unwrap();
        assert_eq!(
            PostalAddress {
                street: "Praça da Sé".into(),
                neighborhood: "Sé".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
            },
            address
        );
    }

    #[test]
    fn missing_fields_become_empty() {
        let payload = r#"{
          "cep": "69900-000",
          "logradouro": "",
          "bairro": null,
          "localidade": "Rio Branco",
          "uf": "AC"
        }"#;
        let address = decode_address(payload).unwrap().unwrap();
        assert_eq!("", address.street);
        assert_eq!("", address.neighborhood);
        assert_eq!("Rio Branco", address.city);
        assert_eq!("AC", address.state);
    }

    #[test]
    fn decode_not_found_marker() {
        assert!(decode_address(r#"{"erro": true}"#).unwrap().is_none());
        assert!(decode_address(r#"{"erro": "true"}"#).unwrap().is_none());
        assert!(decode_address(r#"{"erro": false, "uf": "SP"}"#)
            .unwrap()
            .is_some());
    }

    #[test]
    fn malformed_payload() {
        assert!(matches!(
            decode_address("<html>Bad Request</html>"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn lookup_url() {
        let gw = ViaCep::new("https://viacep.com.br/ws/");
        let code = "01001-000".parse().unwrap();
        assert_eq!("https://viacep.com.br/ws/01001000/json/", gw.url(&code));
    }
}
