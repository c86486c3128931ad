use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Brazilian CEP: exactly eight digits once separators are stripped.
///
/// Raw user input may carry separators such as `-` or `.`; those are removed
/// before validation, never truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// Number of digits in a well-formed CEP.
    pub const LEN: usize = 8;

    /// Remove every non-digit character from `raw`.
    pub fn strip(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    /// Parse raw input into a validated postal code, or `None` if the
    /// stripped form does not contain exactly eight digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = Self::strip(raw);
        (digits.len() == Self::LEN).then_some(Self(digits))
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    /// The cleaned eight-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A place resolved from a postal code.
///
/// `name` is the lookup key for the weather service; the rest is metadata
/// returned by the postal lookup and kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locality {
    pub name: String,
    pub region: Option<String>,
    pub street: Option<String>,
    pub neighbourhood: Option<String>,
}

/// A current-weather observation for a locality at the moment of the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Location name as reported by the weather service.
    pub location_name: String,
    pub temperature_c: f64,
    pub observed_at: DateTime<Utc>,
}

/// The response payload: one Celsius source value in three units.
///
/// Always fully populated; the three fields are derived together from a
/// single reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureTriple {
    #[serde(rename = "temp_C")]
    pub celsius: f64,
    #[serde(rename = "temp_F")]
    pub fahrenheit: f64,
    #[serde(rename = "temp_K")]
    pub kelvin: f64,
}

impl TemperatureTriple {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius * 1.8 + 32.0,
            kelvin: celsius + 273.15,
        }
    }
}
