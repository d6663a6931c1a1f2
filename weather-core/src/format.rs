//! Unit conversion and display formatting for raw provider values.
//!
//! All functions are pure and total over `f64`.

use crate::{LocationInformation, WeatherRecord};

const KELVIN_OFFSET: f64 = 273.15;

/// Statute mile is 1609.344 m.
pub const MPS_TO_MPH: f64 = 3600.0 / 1609.344;

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - KELVIN_OFFSET) * 1.8 + 32.0
}

pub fn format_fahrenheit(kelvin: f64) -> String {
    format!("{:.1}°F", kelvin_to_fahrenheit(kelvin))
}

pub fn mps_to_mph(meters_per_second: f64) -> f64 {
    meters_per_second * MPS_TO_MPH
}

pub fn format_mph(meters_per_second: f64) -> String {
    format!("{:.1} mph", mps_to_mph(meters_per_second))
}

/// Nearest of the eight compass points; 360 wraps back to north.
pub fn cardinal_direction(degrees: f64) -> &'static str {
    let bucket = (degrees.rem_euclid(360.0) / 45.0).round() as usize;
    COMPASS_POINTS[bucket % COMPASS_POINTS.len()]
}

pub fn format_wind_direction(degrees: f64) -> String {
    format!("{degrees:.0}° {}", cardinal_direction(degrees))
}

pub fn format_longitude(longitude: f64) -> String {
    let hemisphere = if longitude >= 0.0 { 'E' } else { 'W' };
    format!("{} {hemisphere}", longitude.abs())
}

pub fn format_latitude(latitude: f64) -> String {
    let hemisphere = if latitude >= 0.0 { 'N' } else { 'S' };
    format!("{} {hemisphere}", latitude.abs())
}

/// Longitude and latitude with hemisphere letters, one per line.
pub fn format_coordinates(longitude: f64, latitude: f64) -> String {
    format!(
        "Longitude: {}\nLatitude: {}",
        format_longitude(longitude),
        format_latitude(latitude)
    )
}

pub fn format_humidity(percent: f64) -> String {
    format!("{percent:.0}%")
}

/// At most two decimals, trailing zeros dropped.
fn compact(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Lines of the short-format weather display.
pub fn short_report(record: &WeatherRecord, location: &LocationInformation) -> Vec<String> {
    let mut lines = vec![format!("Weather Data for {}", location.name)];

    if let Some(code) = location.postal_code {
        lines.push(format!("Zip Code: {code}"));
    }
    lines.push(format!("Longitude: {}", compact(location.coordinates.lon)));
    lines.push(format!("Latitude: {}", compact(location.coordinates.lat)));
    lines.extend(format_coordinates(record.coord.lon, record.coord.lat).lines().map(String::from));
    lines.push(String::new());

    lines.push(format!("Temperature: {}", format_fahrenheit(record.main.temp)));
    lines.push(format!("Humidity: {}", format_humidity(record.main.humidity)));
    lines.push(format!(
        "Wind: {} {}",
        format_mph(record.wind.speed),
        format_wind_direction(record.wind.deg)
    ));

    if let Some(summary) = record.summary() {
        lines.push(format!("Conditions: {summary}"));
    }
    if let Some(ts) = record.observed_at() {
        lines.push(format!("Observed: {}", ts.format("%Y-%m-%d %H:%M UTC")));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinates, LocationQuery, MainReadings, Wind};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fahrenheit_fixed_points() {
        assert!(approx(kelvin_to_fahrenheit(273.15), 32.0));
        assert!(approx(kelvin_to_fahrenheit(373.15), 212.0));
        assert!(approx(kelvin_to_fahrenheit(0.0), -459.67));
        assert_eq!(format_fahrenheit(273.15), "32.0°F");
        assert_eq!(format_fahrenheit(373.15), "212.0°F");
    }

    #[test]
    fn mph_uses_statute_mile() {
        assert!(approx(mps_to_mph(0.0), 0.0));
        assert!((mps_to_mph(1.0) - 2.23694).abs() < 1e-5);
        assert_eq!(format_mph(10.0), "22.4 mph");
    }

    #[test]
    fn cardinal_direction_buckets() {
        assert_eq!(cardinal_direction(0.0), "N");
        assert_eq!(cardinal_direction(45.0), "NE");
        assert_eq!(cardinal_direction(90.0), "E");
        assert_eq!(cardinal_direction(135.0), "SE");
        assert_eq!(cardinal_direction(180.0), "S");
        assert_eq!(cardinal_direction(225.0), "SW");
        assert_eq!(cardinal_direction(270.0), "W");
        assert_eq!(cardinal_direction(315.0), "NW");
        assert_eq!(cardinal_direction(360.0), "N");
    }

    #[test]
    fn cardinal_direction_rounds_to_nearest_point() {
        assert_eq!(cardinal_direction(22.0), "N");
        assert_eq!(cardinal_direction(23.0), "NE");
        assert_eq!(cardinal_direction(350.0), "N");
        assert_eq!(cardinal_direction(-90.0), "W");
        assert_eq!(cardinal_direction(720.0), "N");
    }

    #[test]
    fn wind_direction_text() {
        assert_eq!(format_wind_direction(90.0), "90° E");
        assert_eq!(format_wind_direction(350.0), "350° N");
    }

    #[test]
    fn coordinates_map_sign_to_hemisphere() {
        assert_eq!(format_coordinates(-83.5, 44.5), "Longitude: 83.5 W\nLatitude: 44.5 N");
        assert_eq!(format_coordinates(83.5, -44.5), "Longitude: 83.5 E\nLatitude: 44.5 S");
        assert_eq!(format_coordinates(-1.25, -2.5), "Longitude: 1.25 W\nLatitude: 2.5 S");
        assert_eq!(format_coordinates(10.0, 20.0), "Longitude: 10 E\nLatitude: 20 N");
    }

    #[test]
    fn zero_maps_to_east_and_north() {
        assert_eq!(format_longitude(0.0), "0 E");
        assert_eq!(format_latitude(0.0), "0 N");
        assert_eq!(format_longitude(-0.0), "0 E");
        assert_eq!(format_latitude(-0.0), "0 N");
    }

    #[test]
    fn compact_drops_trailing_zeros() {
        assert_eq!(compact(44.5), "44.5");
        assert_eq!(compact(-85.6234), "-85.62");
        assert_eq!(compact(10.0), "10");
        assert_eq!(compact(-0.001), "0");
    }

    #[test]
    fn short_report_for_postal_code_query() {
        let record = WeatherRecord {
            name: "Traverse City".into(),
            coord: Coordinates { lon: -85.62, lat: 44.76 },
            main: MainReadings { temp: 273.15, humidity: 81.0 },
            wind: Wind { speed: 10.0, deg: 270.0 },
            ..Default::default()
        };
        let info = LocationInformation::resolve(&LocationQuery::PostalCode(49686), &record);

        let lines = short_report(&record, &info);
        assert_eq!(
            lines,
            vec![
                "Weather Data for Traverse City",
                "Zip Code: 49686",
                "Longitude: -85.62",
                "Latitude: 44.76",
                "Longitude: 85.62 W",
                "Latitude: 44.76 N",
                "",
                "Temperature: 32.0°F",
                "Humidity: 81%",
                "Wind: 22.4 mph 270° W",
            ]
        );
    }

    #[test]
    fn short_report_omits_zip_and_adds_extras_when_present() {
        let record = WeatherRecord {
            name: "Nowhere".into(),
            weather: vec![crate::model::Condition {
                main: "Rain".into(),
                description: "light rain".into(),
            }],
            dt: Some(0),
            ..Default::default()
        };
        let query = LocationQuery::Coordinates { longitude: 1.0, latitude: 2.0 };
        let info = LocationInformation::resolve(&query, &record);

        let lines = short_report(&record, &info);
        assert!(!lines.iter().any(|l| l.starts_with("Zip Code")));
        assert!(lines.contains(&"Conditions: light rain".to_string()));
        assert!(lines.contains(&"Observed: 1970-01-01 00:00 UTC".to_string()));
    }
}
