pub mod prelude {
    pub use crate::{
        entities::*,
        gateways::{
            self, geocode::GeoCodingGateway, postal_registry::PostalRegistryGateway,
        },
        usecases::RequestPacing,
    };
    use std::{collections::HashMap, sync::Mutex, time::Instant};

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn no_pacing() -> RequestPacing {
        RequestPacing::new(std::time::Duration::ZERO)
    }

    pub fn sao_paulo_se() -> PostalAddress {
        PostalAddress {
            street: "Praça da Sé".into(),
            neighborhood: "Sé".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        }
    }

    #[derive(Default)]
    pub struct FakePostalRegistry {
        addresses: HashMap<String, PostalAddress>,
        failing: bool,
        lookups: Mutex<Vec<String>>,
    }

    impl FakePostalRegistry {
        pub fn with_address(code: &str, address: PostalAddress) -> Self {
            let mut addresses = HashMap::new();
            addresses.insert(code.to_string(), address);
            Self {
                addresses,
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }

        pub fn lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }
    }

    impl PostalRegistryGateway for FakePostalRegistry {
        fn lookup_postal_code(&self, code: &PostalCode) -> gateways::Result<Option<PostalAddress>> {
            self.lookups.lock().unwrap().push(code.to_string());
            if self.failing {
                return Err(gateways::Error::Status(503));
            }
            Ok(self.addresses.get(code.as_str()).cloned())
        }
    }

    enum Outcome {
        Hit(f64, f64),
        Fail,
    }

    /// Answers every unknown query with an empty result.
    #[derive(Default)]
    pub struct FakeGeoCoder {
        outcomes: HashMap<String, Outcome>,
        requests: Mutex<Vec<(String, Instant)>>,
    }

    impl FakeGeoCoder {
        pub fn hit(mut self, query: &str, lat: f64, lng: f64) -> Self {
            self.outcomes.insert(query.to_string(), Outcome::Hit(lat, lng));
            self
        }

        pub fn fail(mut self, query: &str) -> Self {
            self.outcomes.insert(query.to_string(), Outcome::Fail);
            self
        }

        pub fn queries(&self) -> Vec<String> {
            let requests = self.requests.lock().unwrap();
            requests.iter().map(|(q, _)| q.clone()).collect()
        }

        pub fn timestamps(&self) -> Vec<Instant> {
            let requests = self.requests.lock().unwrap();
            requests.iter().map(|(_, t)| *t).collect()
        }
    }

    impl GeoCodingGateway for FakeGeoCoder {
        fn resolve_query_lat_lng(&self, query: &QueryCandidate) -> gateways::Result<Option<(f64, f64)>> {
            self.requests
                .lock()
                .unwrap()
                .push((query.as_str().to_string(), Instant::now()));
            match self.outcomes.get(query.as_str()) {
                Some(Outcome::Hit(lat, lng)) => Ok(Some((*lat, *lng))),
                Some(Outcome::Fail) => Err(gateways::Error::Transport("connection reset".into())),
                None => Ok(None),
            }
        }
    }
}
