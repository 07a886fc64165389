use std::fmt;

/// Number of fractional digits of a formatted coordinate value.
pub const COORDINATE_PRECISION: usize = 6;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A geographical position in decimal degrees, formatted
/// as text with a fixed precision of 6 fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    latitude: String,
    longitude: String,
}

impl Coordinate {
    /// Returns `None` if one of the values is not finite or out of range.
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !is_valid_deg(lat, LAT_DEG_MAX) || !is_valid_deg(lng, LNG_DEG_MAX) {
            return None;
        }
        Some(Self {
            latitude: format_deg(lat),
            longitude: format_deg(lng),
        })
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

fn is_valid_deg(deg: f64, max: f64) -> bool {
    deg.is_finite() && (-max..=max).contains(&deg)
}

/// Every finite `f64` has at most this many fractional decimal digits.
const F64_MAX_FRACTION_DIGITS: usize = 1074;

/// Rounds half away from zero, e.g. `0.0078125` becomes `0.007813`.
fn format_deg(deg: f64) -> String {
    let exact = format!("{:.prec$}", deg.abs(), prec = F64_MAX_FRACTION_DIGITS);
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(COORDINATE_PRECISION))
        .collect();
    if fraction
        .as_bytes()
        .get(COORDINATE_PRECISION)
        .is_some_and(|d| *d >= b'5')
    {
        round_up(&mut digits);
    }
    let (int_digits, fraction_digits) = digits.split_at(digits.len() - COORDINATE_PRECISION);
    let sign = if deg < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(int_digits),
        String::from_utf8_lossy(fraction_digits)
    )
}

fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
