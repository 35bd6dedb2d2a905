pub mod effects;
pub mod globe;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 12;
const PANEL_WIDTH: u16 = 48;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new("Terminal too small. Resize to at least 30x12.")
            .block(Block::default().borders(Borders::ALL).title("weather-globe"));
        frame.render_widget(warning, area);
        return;
    }

    frame.render_widget(
        widgets::backdrop::GlobeBackdrop {
            canvas: &state.globe_canvas,
            background: state.background,
        },
        area,
    );
    frame.render_widget(
        widgets::overlay::EffectOverlay {
            canvas: &state.effect_canvas,
            fallback: state.background,
        },
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    widgets::clock_bar::render(frame, rows[0], state);

    let column = panel_column(rows[1]);
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(column);
    widgets::search::render(frame, panels[0], state);
    widgets::weather::render(frame, panels[1], state);
    widgets::forecast::render(frame, panels[2], state);
}

fn panel_column(body: Rect) -> Rect {
    Rect {
        x: body.x.saturating_add(1),
        y: body.y.saturating_add(1),
        width: PANEL_WIDTH.min(body.width.saturating_sub(2)),
        height: body.height.saturating_sub(1),
    }
}
