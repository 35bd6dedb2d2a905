use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{Condition, CurrentWeather, ForecastEntry, parse_dt_txt};

pub const OPENWEATHER_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City not found")]
    CityNotFound,
    #[error("{0}")]
    Request(#[source] reqwest::Error),
    #[error("malformed weather payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("weather payload has no conditions")]
    NoConditions,
    #[error("Forecast unavailable.")]
    MissingForecast,
}

/// The request URL carries the API key, so it never reaches the message.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OPENWEATHER_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Any non-success status is reported as [`WeatherError::CityNotFound`].
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&self.query(city))
            .send()
            .await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), city, "current weather rejected");
            return Err(WeatherError::CityNotFound);
        }
        let body = response.text().await?;
        parse_current(&body)
    }

    /// The status code is ignored; only the payload decides success.
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let body = self
            .client
            .get(format!("{}/data/2.5/forecast", self.base_url))
            .query(&self.query(city))
            .send()
            .await?
            .text()
            .await?;
        parse_forecast(&body)
    }

    fn query<'a>(&'a self, city: &'a str) -> [(&'static str, &'a str); 3] {
        [("q", city), ("appid", self.api_key.as_str()), ("units", "metric")]
    }
}

pub fn parse_current(body: &str) -> Result<CurrentWeather, WeatherError> {
    let payload: CurrentResponse = serde_json::from_str(body)?;
    let condition = payload
        .weather
        .into_iter()
        .next()
        .map(Condition::from)
        .ok_or(WeatherError::NoConditions)?;
    Ok(CurrentWeather {
        name: payload.name,
        temperature_c: payload.main.temp,
        condition,
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
    })
}

/// Entries with an unparseable `dt_txt` or no condition are skipped.
pub fn parse_forecast(body: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
    let payload: ForecastResponse =
        serde_json::from_str(body).map_err(|_| WeatherError::MissingForecast)?;
    let list = payload.list.ok_or(WeatherError::MissingForecast)?;
    Ok(list
        .into_iter()
        .filter_map(|item| {
            let timestamp = parse_dt_txt(&item.dt_txt)?;
            let condition = item.weather.into_iter().next()?.into();
            Some(ForecastEntry {
                timestamp,
                temperature_c: item.main.temp,
                condition,
            })
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    #[serde(default)]
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Option<Vec<ForecastItem>>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt_txt: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f32,
    #[serde(default)]
    humidity: f32,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f32,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

impl From<ConditionBlock> for Condition {
    fn from(block: ConditionBlock) -> Self {
        Self {
            main: block.main,
            description: block.description,
            icon: block.icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_payload() {
        let body = r#"{
            "name": "London",
            "main": {"temp": 11.6, "humidity": 81},
            "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}],
            "wind": {"speed": 4.1}
        }"#;
        let current = parse_current(body).expect("valid payload");
        assert_eq!(current.name, "London");
        assert_eq!(current.condition.main, "Rain");
        assert_eq!(current.condition.icon, "10d");
        assert!((current.humidity - 81.0).abs() < f32::EPSILON);
        assert!((current.wind_speed - 4.1).abs() < 1e-6);
    }

    #[test]
    fn current_without_conditions_is_an_error() {
        let body = r#"{"name": "X", "main": {"temp": 1.0, "humidity": 2}, "weather": []}"#;
        assert!(matches!(parse_current(body), Err(WeatherError::NoConditions)));
    }

    #[test]
    fn forecast_without_list_is_unavailable() {
        let err = parse_forecast(r#"{"cod": "404", "message": "city not found"}"#)
            .expect_err("missing list");
        assert!(matches!(err, WeatherError::MissingForecast));
        assert_eq!(err.to_string(), "Forecast unavailable.");
        assert!(matches!(
            parse_forecast("not json"),
            Err(WeatherError::MissingForecast)
        ));
    }

    #[test]
    fn forecast_skips_unusable_items() {
        let body = r#"{"list": [
            {"dt_txt": "2026-02-12 12:00:00", "main": {"temp": 3.4},
             "weather": [{"main": "Snow", "description": "snow", "icon": "13d"}]},
            {"dt_txt": "garbage", "main": {"temp": 1.0},
             "weather": [{"main": "Clear", "description": "clear", "icon": "01d"}]},
            {"dt_txt": "2026-02-13 12:00:00", "main": {"temp": 1.0}, "weather": []}
        ]}"#;
        let entries = parse_forecast(body).expect("list present");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].condition.main, "Snow");
        assert_eq!(entries[0].rounded_temp(), 3);
    }

    #[test]
    fn city_not_found_message_matches_panel_text() {
        assert_eq!(WeatherError::CityNotFound.to_string(), "City not found");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = WeatherClient::with_base_url("http://localhost:9/", "k");
        assert_eq!(client.base_url(), "http://localhost:9");
    }
}
