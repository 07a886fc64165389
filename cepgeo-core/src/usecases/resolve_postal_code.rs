use super::prelude::*;

/// Looks up the street address of a (possibly formatted) postal code.
///
/// Malformed codes are rejected without contacting the registry.
/// Any registry failure is reported as `None`.
pub fn resolve_postal_code<G>(gw: &G, raw_code: &str) -> Option<PostalAddress>
where
    G: PostalRegistryGateway + ?Sized,
{
    let code = match raw_code.parse::<PostalCode>() {
        Ok(code) => code,
        Err(err) => {
            log::debug!("Rejected postal code '{raw_code}': {err}");
            return None;
        }
    };
    match gw.lookup_postal_code(&code) {
        Ok(Some(address)) => {
            log::debug!("Resolved postal code {code}: {address:?}");
            Some(address)
        }
        Ok(None) => {
            log::info!("Postal code {code} not found");
            None
        }
        Err(err) => {
            log::warn!("Failed to look up postal code {code}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use super::*;

    #[test]
    fn malformed_codes_are_rejected_without_lookup() {
        let gw = FakePostalRegistry::with_address("01001000", sao_paulo_se());
        for raw in ["0100100", "01001-0000", "", "abc", "0100-100"] {
            assert!(resolve_postal_code(&gw, raw).is_none());
        }
        assert!(gw.lookups().is_empty());
    }

    #[test]
    fn lookup_with_normalized_code() {
        let gw = FakePostalRegistry::with_address("01001000", sao_paulo_se());
        let address = resolve_postal_code(&gw, "01001-000").unwrap();
        assert_eq!(sao_paulo_se(), address);
        assert_eq!(vec!["01001000".to_string()], gw.lookups());
    }

    #[test]
    fn unknown_code() {
        let gw = FakePostalRegistry::default();
        assert!(resolve_postal_code(&gw, "99999-999").is_none());
        assert_eq!(1, gw.lookups().len());
    }

    #[test]
    fn registry_failure_is_absorbed() {
        let gw = FakePostalRegistry::failing();
        assert!(resolve_postal_code(&gw, "01001000").is_none());
        assert_eq!(1, gw.lookups().len());
    }
}
