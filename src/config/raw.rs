use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("cepgeo.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub postal_registry: Option<PostalRegistry>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PostalRegistry {
    pub gateway: Option<PostalRegistryGateway>,
}

impl Default for PostalRegistry {
    fn default() -> Self {
        Config::default()
            .postal_registry
            .expect("Postal registry configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostalRegistryGateway {
    Viacep,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub fallback_gateway: Option<GeocodingGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub request_interval: Option<Duration>,
    pub country_code: Option<String>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    Opencage,
}

impl GeocodingGateway {
    pub const fn toml_name(self) -> &'static str {
        match self {
            Self::Nominatim => "nominatim",
            Self::Opencage => "opencage",
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub viacep: Option<ViaCep>,
    pub nominatim: Option<Nominatim>,
    pub opencage: Option<OpenCage>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

impl Gateway {
    /// Completes missing sections with the default configuration.
    pub fn with_default_sections(self) -> Self {
        let Self {
            viacep,
            nominatim,
            opencage,
        } = Self::default();
        Self {
            viacep: self.viacep.or(viacep),
            nominatim: self.nominatim.or(nominatim),
            opencage: self.opencage.or(opencage),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ViaCep {
    pub api_base_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub api_base_url: Option<String>,
    pub user_agent: String,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
}
