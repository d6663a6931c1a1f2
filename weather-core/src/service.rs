use tracing::instrument;

use crate::{
    ApiSettings, LocationQuery,
    provider::{OpenWeatherExecutor, RequestExecutor, WeatherOutcome, WeatherRequest},
};

/// Parameter shaping over a [`RequestExecutor`]; status semantics are left
/// entirely to the executor.
#[derive(Debug, Clone)]
pub struct WeatherService<E = OpenWeatherExecutor> {
    executor: E,
    settings: ApiSettings,
}

impl WeatherService<OpenWeatherExecutor> {
    pub fn openweather(settings: ApiSettings) -> Self {
        Self::new(OpenWeatherExecutor::new(), settings)
    }
}

impl<E: RequestExecutor> WeatherService<E> {
    pub fn new(executor: E, settings: ApiSettings) -> Self {
        Self { executor, settings }
    }

    #[instrument(skip(self))]
    pub async fn get_weather_by_coordinates(&self, longitude: f64, latitude: f64) -> WeatherOutcome {
        self.get_weather(&LocationQuery::Coordinates { longitude, latitude }).await
    }

    #[instrument(skip(self))]
    pub async fn get_weather_by_postal_code(&self, postal_code: u32) -> WeatherOutcome {
        self.get_weather(&LocationQuery::PostalCode(postal_code)).await
    }

    pub async fn get_weather(&self, query: &LocationQuery) -> WeatherOutcome {
        let request = WeatherRequest::current_conditions(&self.settings, query);
        self.executor.execute(&request).await
    }
}
