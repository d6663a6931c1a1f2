use inquire::{CustomType, InquireError, Select};
use std::fmt;
use tracing::debug;
use weather_core::{
    LocationInformation, LocationQuery, RequestExecutor, ResponseStatus, WeatherOutcome,
    WeatherRecord, WeatherService, format,
};

use crate::theme::Theme;

const RULE: &str = "*************************************************************************************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ByCoordinates,
    ByPostalCode,
    ShowShortFormat,
    Quit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 4] = [
        MenuChoice::ByCoordinates,
        MenuChoice::ByPostalCode,
        MenuChoice::ShowShortFormat,
        MenuChoice::Quit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MenuChoice::ByCoordinates => "A. Get Weather Data by Longitude and Latitude",
            MenuChoice::ByPostalCode => "B. Get Weather Data by Zip Code",
            MenuChoice::ShowShortFormat => "C. Display Weather Data Short Format",
            MenuChoice::Quit => "Q. Quit",
        };
        f.write_str(s)
    }
}

/// Result of the most recent successful query.
#[derive(Debug, Clone)]
struct Session {
    record: WeatherRecord,
    location: LocationInformation,
}

#[derive(Debug)]
pub struct Presenter<E> {
    service: WeatherService<E>,
    theme: Theme,
    session: Option<Session>,
}

impl<E: RequestExecutor> Presenter<E> {
    pub fn new(service: WeatherService<E>, theme: Theme) -> Self {
        Self { service, theme, session: None }
    }

    pub async fn run_menu(mut self) -> anyhow::Result<()> {
        self.banner("Weather Web API Demo");

        loop {
            self.header("Main Menu");
            let choice = match Select::new("Enter Menu Choice:", MenuChoice::ALL.to_vec()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(err) => return Err(err.into()),
            };
            debug!(?choice, "Menu selection");

            match choice {
                MenuChoice::ByCoordinates => {
                    let Some(query) = prompt_coordinates()? else { break };
                    self.query(query).await;
                }
                MenuChoice::ByPostalCode => {
                    let Some(query) = prompt_postal_code()? else { break };
                    self.query(query).await;
                }
                MenuChoice::ShowShortFormat => self.show_short_format(),
                MenuChoice::Quit => break,
            }
        }

        self.banner("Thanks for using the weather demo.");
        Ok(())
    }

    /// Runs one query, prints its status and replaces the session.
    pub async fn query(&mut self, query: LocationQuery) -> bool {
        self.session = None;
        let outcome = self.service.get_weather(&query).await;

        match session_from(&query, outcome) {
            Ok(session) => {
                println!("\t{}", self.theme.text(&acquired_message(&query)));
                self.session = Some(session);
                true
            }
            Err(lines) => {
                for line in lines {
                    println!("{}", self.theme.error(&line));
                }
                false
            }
        }
    }

    pub fn show_short_format(&self) {
        self.header("Current Weather Data");

        match &self.session {
            Some(session) => {
                for line in format::short_report(&session.record, &session.location) {
                    println!("\t{}", self.theme.text(&line));
                }
            }
            None => println!("\t{}", self.theme.error("No weather data acquired yet.")),
        }
    }

    fn header(&self, text: &str) {
        println!();
        println!("\t\t{}", self.theme.header(text));
        println!();
    }

    fn banner(&self, text: &str) {
        println!();
        println!("\t{}", self.theme.banner(text));
        println!();
    }
}

fn prompt_coordinates() -> anyhow::Result<Option<LocationQuery>> {
    let Some(longitude) = prompt_value::<f64>("Enter Longitude:")? else { return Ok(None) };
    let Some(latitude) = prompt_value::<f64>("Enter Latitude:")? else { return Ok(None) };
    Ok(Some(LocationQuery::Coordinates { longitude, latitude }))
}

fn prompt_postal_code() -> anyhow::Result<Option<LocationQuery>> {
    Ok(prompt_value::<u32>("Enter Zip Code:")?.map(LocationQuery::PostalCode))
}

/// Re-prompts until the input parses; `None` when the user cancels.
fn prompt_value<T>(message: &str) -> anyhow::Result<Option<T>>
where
    T: Clone + std::str::FromStr + ToString,
{
    match CustomType::<T>::new(message).with_error_message("Please enter a number").prompt() {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// A session for a usable outcome, otherwise the error box to print.
fn session_from(query: &LocationQuery, outcome: WeatherOutcome) -> Result<Session, Vec<String>> {
    let status = outcome.status;
    match outcome.into_result() {
        Ok(record) => {
            let location = LocationInformation::resolve(query, &record);
            Ok(Session { record, location })
        }
        Err(err) => Err(error_box(status, &err.to_string())),
    }
}

fn error_box(status: ResponseStatus, detail: &str) -> Vec<String> {
    let message = status.user_message().unwrap_or(detail);
    vec![format!("\t{RULE}"), format!("\t\t{message}"), format!("\t{RULE}")]
}

fn acquired_message(query: &LocationQuery) -> String {
    match query {
        LocationQuery::Coordinates { longitude, latitude } => format!(
            "Weather data for Longitude:{longitude:.2} and Latitude:{latitude:.2} acquired."
        ),
        LocationQuery::PostalCode(code) => format!("Weather data for Zip Code:{code} acquired."),
    }
}
