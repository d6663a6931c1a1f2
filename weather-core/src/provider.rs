use crate::{
    ApiSettings, LocationQuery, ResponseStatus, WeatherError, WeatherRecord,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherExecutor;

/// Unit system requested from the provider. The converters expect Kelvin and m/s.
pub const UNITS: &str = "standard";

/// Fully-formed description of one current-conditions request.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub endpoint: String,
    pub params: Vec<(&'static str, String)>,
}

impl WeatherRequest {
    pub fn current_conditions(settings: &ApiSettings, query: &LocationQuery) -> Self {
        let mut params = vec![
            ("appid", settings.api_key.clone()),
            ("units", UNITS.to_string()),
        ];

        match *query {
            LocationQuery::Coordinates { longitude, latitude } => {
                params.push(("lat", latitude.to_string()));
                params.push(("lon", longitude.to_string()));
            }
            LocationQuery::PostalCode(code) => {
                params.push(("zip", code.to_string()));
            }
        }

        Self { endpoint: settings.base_url.clone(), params }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }
}

/// Record and status of a single attempt.
///
/// `record` may be present under a failing status (the provider's error
/// body decodes to a default record); check `status` before trusting it.
/// `decode_error` is set whenever the body could not be decoded at all.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherOutcome {
    pub record: Option<WeatherRecord>,
    pub status: ResponseStatus,
    pub decode_error: Option<String>,
    /// Transport error text when `status` is `TransportError`.
    pub transport_error: Option<String>,
}

impl WeatherOutcome {
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        Self {
            record: None,
            status: ResponseStatus::TransportError,
            decode_error: None,
            transport_error: Some(reason.into()),
        }
    }

    /// `Complete` with a decoded record.
    pub fn is_success(&self) -> bool {
        self.status.is_complete() && self.record.is_some()
    }

    pub fn into_result(self) -> Result<WeatherRecord, WeatherError> {
        match self.status {
            ResponseStatus::TransportError => Err(WeatherError::Transport(
                self.transport_error.unwrap_or_else(|| "unknown transport failure".to_string()),
            )),
            ResponseStatus::Unauthorized => Err(WeatherError::Unauthorized),
            ResponseStatus::BadRequest => Err(WeatherError::BadRequest),
            ResponseStatus::Complete => match (self.record, self.decode_error) {
                (Some(record), _) => Ok(record),
                (None, Some(err)) => Err(WeatherError::Decode(err)),
                (None, None) => Err(WeatherError::Decode("empty response".to_string())),
            },
        }
    }
}

/// Executes exactly one outbound request per call. Expected failures come
/// back as data in [`WeatherOutcome::status`], never as a panic or error.
#[async_trait]
pub trait RequestExecutor: Send + Sync + Debug {
    async fn execute(&self, request: &WeatherRequest) -> WeatherOutcome;
}
