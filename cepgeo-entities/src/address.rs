use crate::geo::Coordinate;

/// A street address as known by the postal registry.
///
/// Missing values are represented by empty strings.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostalAddress {
    pub street       : String,
    pub neighborhood : String,
    pub city         : String,
    /// Two-letter code of the federal state, e.g. `SP`.
    pub state        : String,
}

impl PostalAddress {
    pub fn has_street(&self) -> bool {
        !self.street.trim().is_empty()
    }
}

/// The outcome of a successful postal code resolution.
///
/// The coordinate is best-effort and might be missing even
/// though the address itself has been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub address: PostalAddress,
    pub coordinate: Option<Coordinate>,
}

impl ResolvedAddress {
    pub fn latitude(&self) -> &str {
        self.coordinate
            .as_ref()
            .map(Coordinate::latitude)
            .unwrap_or_default()
    }

    pub fn longitude(&self) -> &str {
        self.coordinate
            .as_ref()
            .map(Coordinate::longitude)
            .unwrap_or_default()
    }

    /// The address has been found but no coordinate.
    pub fn is_degraded(&self) -> bool {
        self.coordinate.is_none()
    }
}
