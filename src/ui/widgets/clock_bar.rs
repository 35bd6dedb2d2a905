use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    domain::clock::WorldClock,
    ui::theme::{contrast_text, to_color},
};

#[must_use]
pub fn clock_line(clock: &WorldClock) -> Line<'_> {
    let mut spans = Vec::with_capacity(clock.len() * 3);
    for (index, (city, time)) in clock.readings().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  │  "));
        }
        spans.push(Span::styled(city, Style::default().add_modifier(Modifier::DIM)));
        spans.push(Span::styled(
            format!(" {time}"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans).centered()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = Style::default()
        .fg(to_color(contrast_text(state.background)))
        .bg(to_color(state.background));
    frame.render_widget(Paragraph::new(clock_line(&state.clock)).style(style), area);
}
