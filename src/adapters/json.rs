use cepgeo_core::entities as e;
use serde::Serialize;

/// The resolved address as expected by registration forms:
/// missing coordinates are empty strings.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedAddress {
    pub street       : String,
    pub neighborhood : String,
    pub city         : String,
    pub state        : String,
    pub latitude     : String,
    pub longitude    : String,
}

impl From<e::ResolvedAddress> for ResolvedAddress {
    fn from(from: e::ResolvedAddress) -> Self {
        let latitude = from.latitude().to_string();
        let longitude = from.longitude().to_string();
        let e::ResolvedAddress { address, .. } = from;
        let e::PostalAddress {
            street,
            neighborhood,
            city,
            state,
        } = address;
        Self {
            street,
            neighborhood,
            city,
            state,
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sao_paulo_se() -> e::PostalAddress {
        e::PostalAddress {
            street: "Praça da Sé".into(),
            neighborhood: "Sé".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        }
    }

    #[test]
    fn serialize_resolved_address() {
        let resolved = e::ResolvedAddress {
            address: sao_paulo_se(),
            coordinate: e::Coordinate::from_lat_lng_deg(-23.5505199, -46.6333094),
        };
        let json = serde_json::to_value(ResolvedAddress::from(resolved)).unwrap();
        assert_eq!(
            json!({
                "street": "Praça da Sé",
                "neighborhood": "Sé",
                "city": "São Paulo",
                "state": "SP",
                "latitude": "-23.550520",
                "longitude": "-46.633309"
            }),
            json
        );
    }

    #[test]
    fn serialize_degraded_address() {
        let resolved = e::ResolvedAddress {
            address: sao_paulo_se(),
            coordinate: None,
        };
        let json = serde_json::to_value(ResolvedAddress::from(resolved)).unwrap();
        assert_eq!("", json["latitude"]);
        assert_eq!("", json["longitude"]);
        assert_eq!("São Paulo", json["city"]);
    }
}
