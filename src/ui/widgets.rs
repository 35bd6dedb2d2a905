pub mod backdrop;
pub mod clock_bar;
pub mod forecast;
pub mod overlay;
pub mod search;
pub mod weather;

use ratatui::{
    style::Style,
    widgets::{Block, BorderType, Borders},
};

use crate::{
    domain::weather::Rgb,
    ui::theme::{contrast_text, panel_surface, to_color},
};

pub(super) fn panel_style(background: Rgb) -> Style {
    Style::default()
        .fg(to_color(contrast_text(background)))
        .bg(to_color(panel_surface(background)))
}

pub(super) fn panel_block(title: &str, background: Rgb) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(panel_style(background))
}
