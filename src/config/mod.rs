use anyhow::{anyhow, Result};
use cepgeo_core::usecases::DEFAULT_REQUEST_INTERVAL;
use cepgeo_gateways::{nominatim, opencage, viacep};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "cepgeo.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

const DEFAULT_COUNTRY_CODE: &str = "br";

#[derive(Debug)]
pub struct Config {
    pub postal_registry: PostalRegistryGateway,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        override_opencage_api_key(&mut raw_config, env::var(ENV_NAME_OPENCAGE_API_KEY).ok());
        Self::try_from(raw_config)
    }
}

/// Blank values (e.g. `OPENCAGE_API_KEY=` in a `.env` file) are ignored.
fn override_opencage_api_key(raw_config: &mut raw::Config, api_key: Option<String>) {
    let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) else {
        return;
    };
    log::debug!("Use OpenCage API key from {ENV_NAME_OPENCAGE_API_KEY}");
    let gateway = raw_config.gateway.get_or_insert_with(Default::default);
    gateway.opencage.get_or_insert_with(Default::default).api_key = Some(api_key);
}

fn checked_request_interval(interval: Option<Duration>) -> Duration {
    match interval {
        Some(interval) if interval < DEFAULT_REQUEST_INTERVAL => {
            log::warn!(
                "Request interval {interval:?} is too short: use {DEFAULT_REQUEST_INTERVAL:?}"
            );
            DEFAULT_REQUEST_INTERVAL
        }
        Some(interval) => interval,
        None => DEFAULT_REQUEST_INTERVAL,
    }
}

#[derive(Debug)]
pub enum PostalRegistryGateway {
    ViaCep { api_base_url: String },
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub fallback_gateway: Option<GeocodingGateway>,
    /// Minimum pause between two requests to the primary gateway.
    pub request_interval: Duration,
    /// ISO 3166-1 alpha-2 code that restricts all searches.
    pub country_code: String,
}

pub enum GeocodingGateway {
    Nominatim {
        api_base_url: String,
        user_agent: String,
    },
    OpenCage {
        api_base_url: String,
        api_key: String,
    },
}

impl std::fmt::Debug for GeocodingGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nominatim {
                api_base_url,
                user_agent,
            } => f
                .debug_struct("Nominatim")
                .field("api_base_url", api_base_url)
                .field("user_agent", user_agent)
                .finish(),
            Self::OpenCage { api_base_url, .. } => f
                .debug_struct("OpenCage")
                .field("api_base_url", api_base_url)
                .finish_non_exhaustive(),
        }
    }
}

fn geocoding_gateway(
    gw_name: raw::GeocodingGateway,
    gateway: &raw::Gateway,
) -> Result<Option<GeocodingGateway>> {
    let toml_name = gw_name.toml_name();
    let gw = match gw_name {
        raw::GeocodingGateway::Nominatim => {
            let raw::Nominatim {
                api_base_url,
                user_agent,
            } = gateway
                .nominatim
                .clone()
                .ok_or_else(|| anyhow!("Missing '{toml_name}' gateway configuration"))?;
            if user_agent.trim().is_empty() {
                return Err(anyhow!("Missing user agent for the '{toml_name}' gateway"));
            }
            GeocodingGateway::Nominatim {
                api_base_url: api_base_url
                    .unwrap_or_else(|| nominatim::DEFAULT_API_BASE_URL.to_string()),
                user_agent,
            }
        }
        raw::GeocodingGateway::Opencage => {
            let raw::OpenCage {
                api_base_url,
                api_key,
            } = gateway.opencage.clone().unwrap_or_default();
            let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) else {
                return Ok(None);
            };
            GeocodingGateway::OpenCage {
                api_base_url: api_base_url
                    .unwrap_or_else(|| opencage::DEFAULT_API_BASE_URL.to_string()),
                api_key,
            }
        }
    };
    Ok(Some(gw))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            postal_registry,
            geocoding,
            gateway,
        } = from;
        let gateway = gateway.unwrap_or_default().with_default_sections();

        let raw::PostalRegistry {
            gateway: registry_gw_name,
        } = postal_registry.unwrap_or_default();

        let postal_registry = match registry_gw_name.unwrap_or(raw::PostalRegistryGateway::Viacep) {
            raw::PostalRegistryGateway::Viacep => {
                let api_base_url = gateway
                    .viacep
                    .clone()
                    .and_then(|gw| gw.api_base_url)
                    .unwrap_or_else(|| viacep::DEFAULT_API_BASE_URL.to_string());
                log::info!("Use ViaCEP postal registry ({api_base_url})");
                PostalRegistryGateway::ViaCep { api_base_url }
            }
        };

        let raw::Geocoding {
            gateway: gw_name,
            fallback_gateway: fallback_gw_name,
            request_interval,
            country_code,
        } = geocoding.unwrap_or_default();

        let gw_name = gw_name.unwrap_or(raw::GeocodingGateway::Nominatim);
        let primary = geocoding_gateway(gw_name, &gateway)?.ok_or_else(|| {
            anyhow!("The primary geocoding gateway requires an OpenCage API key")
        })?;
        log::info!("Use {primary:?} as primary geocoding gateway");

        let fallback = match fallback_gw_name {
            Some(name) => {
                let fallback = geocoding_gateway(name, &gateway)?;
                match &fallback {
                    Some(gw) => log::info!("Use {gw:?} as fallback geocoding gateway"),
                    None => log::warn!("No OpenCage API key found: fallback geocoding disabled"),
                }
                fallback
            }
            None => None,
        };

        let country_code = country_code
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());

        let geocoding = Geocoding {
            gateway: primary,
            fallback_gateway: fallback,
            request_interval: checked_request_interval(request_interval),
            country_code,
        };

        Ok(Self {
            postal_registry,
            geocoding,
        })
    }
}
