use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};

use super::panel_block;
use crate::{
    app::state::{AppState, ForecastPanel},
    domain::weather::{ForecastEntry, icon_glyph},
};

pub const TITLE: &str = "5-Day Forecast";
pub const UNAVAILABLE: &str = "Forecast unavailable.";

#[must_use]
pub fn day_label(entry: &ForecastEntry) -> String {
    entry.timestamp.format("%a, %b %-d").to_string()
}

#[must_use]
pub fn forecast_line(entry: &ForecastEntry) -> String {
    format!(
        "{:<12} {} {:>4}°C  {}",
        day_label(entry),
        icon_glyph(&entry.condition.icon),
        entry.rounded_temp(),
        entry.condition.main
    )
}

fn panel_lines(panel: &ForecastPanel) -> Vec<Line<'static>> {
    match panel {
        ForecastPanel::Empty => Vec::new(),
        ForecastPanel::Unavailable => vec![Line::from(UNAVAILABLE).italic()],
        ForecastPanel::Ready(days) => days.iter().map(|day| Line::from(forecast_line(day))).collect(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.forecast == ForecastPanel::Empty {
        return;
    }
    let block = panel_block(TITLE, state.background);
    frame.render_widget(Paragraph::new(panel_lines(&state.forecast)).block(block), area);
}
