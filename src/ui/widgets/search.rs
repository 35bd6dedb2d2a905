use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};

use super::panel_block;
use crate::app::state::AppState;

const PLACEHOLDER: &str = "Enter city name";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block("Search · Enter to submit · Esc to quit", state.background);
    let inner = block.inner(area);
    let text = if state.input.is_empty() {
        Line::from(PLACEHOLDER).italic()
    } else {
        Line::from(state.input.as_str())
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    let typed = u16::try_from(state.input.chars().count()).unwrap_or(u16::MAX);
    if inner.width > 0 && inner.height > 0 {
        let x = inner.x.saturating_add(typed.min(inner.width - 1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
