use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    WeatherRecord,
    provider::{RequestExecutor, WeatherOutcome, WeatherRequest},
    status::{HttpOutcome, classify},
};

/// reqwest-backed executor for the OpenWeatherMap current-conditions API.
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherExecutor {
    http: Client,
}

impl OpenWeatherExecutor {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

/// Error body shape, only used for logging.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[async_trait]
impl RequestExecutor for OpenWeatherExecutor {
    async fn execute(&self, request: &WeatherRequest) -> WeatherOutcome {
        debug!(endpoint = %request.endpoint, "Sending current-conditions request");

        let res = match self.http.get(&request.endpoint).query(&request.params).send().await {
            Ok(res) => res,
            Err(err) => {
                let outcome = HttpOutcome::TransportFailed { status: err.status() };
                warn!(error = %err, status = ?classify(&outcome), "OpenWeather request failed");
                return WeatherOutcome::transport_failure(err.to_string());
            }
        };

        let http_status = res.status();
        let body = match res.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "Failed to read OpenWeather response body");
                return WeatherOutcome::transport_failure(err.to_string());
            }
        };

        let status = classify(&HttpOutcome::Received(http_status));
        debug!(http_status = %http_status, %status, "OpenWeather responded");

        if !http_status.is_success() {
            let message = serde_json::from_str::<OwErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| truncate_body(&body));
            warn!(http_status = %http_status, %message, "OpenWeather returned an error");
        }

        // Decode is attempted regardless of status.
        let (record, decode_error) = match serde_json::from_str::<WeatherRecord>(&body) {
            Ok(record) => (Some(record), None),
            Err(err) => {
                warn!(error = %err, body = %truncate_body(&body), "Failed to parse OpenWeather JSON");
                (None, Some(err.to_string()))
            }
        };

        WeatherOutcome { record, status, decode_error, transport_error: None }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
