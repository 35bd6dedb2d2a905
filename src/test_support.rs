use chrono::NaiveDateTime;

use crate::{
    cli::Cli,
    domain::weather::{Condition, CurrentWeather, DEFAULT_ICON_BASE, ForecastEntry},
};

pub(crate) fn state_test_cli() -> Cli {
    Cli {
        city: None,
        api_key: Some("test-key".to_string()),
        api_url: "http://127.0.0.1:9".to_string(),
        icon_base: DEFAULT_ICON_BASE.to_string(),
        fps: 30,
        no_animation: false,
        clock_zones: Vec::new(),
        discard_stale: false,
        one_shot: false,
        log_file: None,
    }
}

pub(crate) fn condition(main: &str, icon: &str) -> Condition {
    Condition {
        main: main.to_string(),
        description: main.to_lowercase(),
        icon: icon.to_string(),
    }
}

pub(crate) fn sample_current(main: &str) -> CurrentWeather {
    CurrentWeather {
        name: "London".to_string(),
        temperature_c: 11.6,
        condition: condition(main, "10d"),
        humidity: 81.0,
        wind_speed: 4.1,
    }
}

pub(crate) fn forecast_entry(dt_txt: &str, temperature_c: f32) -> ForecastEntry {
    ForecastEntry {
        timestamp: NaiveDateTime::parse_from_str(dt_txt, "%Y-%m-%d %H:%M:%S")
            .expect("valid dt_txt fixture"),
        temperature_c,
        condition: condition("Clouds", "03d"),
    }
}

/// Three-hourly entries over six days starting at midnight.
pub(crate) fn sample_forecast() -> Vec<ForecastEntry> {
    (12..18)
        .flat_map(|day| {
            (0..24).step_by(3).map(move |hour| {
                forecast_entry(&format!("2026-02-{day:02} {hour:02}:00:00"), day as f32)
            })
        })
        .collect()
}
