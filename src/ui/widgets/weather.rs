use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::panel_block;
use crate::{
    app::state::{AppState, WeatherPanel},
    domain::weather::{CurrentWeather, icon_glyph, icon_url},
};

/// Body lines shared by the panel and the plain-text report.
#[must_use]
pub fn weather_lines(current: &CurrentWeather) -> Vec<String> {
    vec![
        format!("Temperature: {} °C", current.temperature_c),
        format!("Description: {}", current.condition.description),
        format!("Humidity: {}%", current.humidity),
        format!("Wind Speed: {} m/s", current.wind_speed),
    ]
}

#[must_use]
pub fn heading(current: &CurrentWeather) -> String {
    format!("Weather in {}", current.name)
}

fn panel_lines<'a>(panel: &'a WeatherPanel, icon_base: &str) -> Vec<Line<'a>> {
    match panel {
        WeatherPanel::Idle => vec![Line::from("Search for a city to see its weather.").italic()],
        WeatherPanel::Loading(_) => vec![Line::from("Loading...")],
        WeatherPanel::Error(message) => vec![Line::from(message.as_str())],
        WeatherPanel::Ready(current) => {
            let mut lines = vec![Line::from(vec![
                Span::raw(format!("{} ", icon_glyph(&current.condition.icon))),
                Span::styled(heading(current), Style::default().add_modifier(Modifier::BOLD)),
            ])];
            lines.extend(weather_lines(current).into_iter().map(Line::from));
            lines.push(Line::from(icon_url(icon_base, &current.condition.icon)).dim());
            lines
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block("Current", state.background);
    let body = Paragraph::new(panel_lines(&state.weather, &state.icon_base))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}
