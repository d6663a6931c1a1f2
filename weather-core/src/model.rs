use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the user asked about: a coordinate pair or a postal code, never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationQuery {
    Coordinates { longitude: f64, latitude: f64 },
    PostalCode(u32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    /// Kelvin when requested with `units=standard`.
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
    /// Meteorological degrees, 0 = from the north.
    pub deg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub main: String,
    pub description: String,
}

/// Current-conditions payload as returned by the provider.
///
/// Every field defaults, so an error body such as
/// `{"cod":401,"message":"Invalid API key"}` still decodes into an
/// (empty) record. Values are kept verbatim; nothing is clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRecord {
    pub name: String,
    pub coord: Coordinates,
    pub main: MainReadings,
    pub wind: Wind,
    pub weather: Vec<Condition>,
    /// Observation time as a unix timestamp.
    pub dt: Option<i64>,
}

impl WeatherRecord {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// Comma-joined condition descriptions, if the provider sent any.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .weather
            .iter()
            .map(|c| c.description.as_str())
            .filter(|d| !d.is_empty())
            .collect();

        if parts.is_empty() { None } else { Some(parts.join(", ")) }
    }
}

/// Identity of the location behind the most recent successful query.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInformation {
    pub name: String,
    pub postal_code: Option<u32>,
    pub coordinates: Coordinates,
}

impl LocationInformation {
    /// Coordinate queries keep what the user typed; postal-code queries take
    /// the coordinates the provider resolved.
    pub fn resolve(query: &LocationQuery, record: &WeatherRecord) -> Self {
        match *query {
            LocationQuery::Coordinates { longitude, latitude } => Self {
                name: record.name.clone(),
                postal_code: None,
                coordinates: Coordinates { lon: longitude, lat: latitude },
            },
            LocationQuery::PostalCode(code) => Self {
                name: record.name.clone(),
                postal_code: Some(code),
                coordinates: record.coord,
            },
        }
    }
}
