use std::fmt::Write as _;

use anyhow::Result;

use crate::{
    cli::Cli,
    data::{WeatherClient, WeatherError},
    domain::{
        forecast::five_day_summary,
        weather::{CurrentWeather, ForecastEntry, icon_url},
    },
    ui::widgets::{
        forecast::{TITLE, UNAVAILABLE, forecast_line},
        weather::{heading, weather_lines},
    },
};

/// Plain-text rendition of both panels.
#[must_use]
pub fn render_report(
    current: &CurrentWeather,
    forecast: &Result<Vec<ForecastEntry>, WeatherError>,
    icon_base: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(current));
    for line in weather_lines(current) {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "Icon: {}", icon_url(icon_base, &current.condition.icon));
    let _ = writeln!(out);
    let _ = writeln!(out, "{TITLE}");
    match forecast {
        Ok(entries) => {
            for day in five_day_summary(entries) {
                let _ = writeln!(out, "{}", forecast_line(&day));
            }
        }
        Err(_) => {
            let _ = writeln!(out, "{UNAVAILABLE}");
        }
    }
    out
}

/// Fetches once and prints; a failed current lookup is the only error.
pub async fn run_one_shot(cli: &Cli) -> Result<()> {
    let city = cli.initial_city().unwrap_or_default();
    let client = WeatherClient::with_base_url(&cli.api_url, cli.api_key());
    let current = client.fetch_current(city).await?;
    let forecast = client.fetch_forecast(city).await;
    if let Err(err) = &forecast {
        tracing::warn!(error = %err, "forecast failed");
    }
    print!("{}", render_report(&current, &forecast, &cli.icon_base));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::weather::DEFAULT_ICON_BASE,
        test_support::{sample_current, sample_forecast},
    };

    #[test]
    fn report_lists_current_and_five_days() {
        let report = render_report(
            &sample_current("Rain"),
            &Ok(sample_forecast()),
            DEFAULT_ICON_BASE,
        );
        insta::assert_snapshot!(report.trim_end(), @r"
        Weather in London
        Temperature: 11.6 °C
        Description: rain
        Humidity: 81%
        Wind Speed: 4.1 m/s
        Icon: https://openweathermap.org/img/wn/10d@2x.png

        5-Day Forecast
        Thu, Feb 12  ☁   12°C  Clouds
        Fri, Feb 13  ☁   13°C  Clouds
        Sat, Feb 14  ☁   14°C  Clouds
        Sun, Feb 15  ☁   15°C  Clouds
        Mon, Feb 16  ☁   16°C  Clouds
        ");
    }

    #[test]
    fn report_marks_forecast_unavailable() {
        let report = render_report(
            &sample_current("Clear"),
            &Err(WeatherError::MissingForecast),
            DEFAULT_ICON_BASE,
        );
        assert!(report.ends_with("5-Day Forecast\nForecast unavailable.\n"));
    }
}
