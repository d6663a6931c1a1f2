//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The request executor and its status classifier
//! - A facade for querying by coordinates or postal code
//! - Unit conversion and display formatting
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;
pub mod service;
pub mod status;

pub use config::{ApiSettings, Config};
pub use model::{
    Condition, Coordinates, LocationInformation, LocationQuery, MainReadings, WeatherRecord, Wind,
};
pub use provider::{OpenWeatherExecutor, RequestExecutor, WeatherOutcome, WeatherRequest};
pub use service::WeatherService;
pub use status::{HttpOutcome, ResponseStatus, WeatherError, classify};
