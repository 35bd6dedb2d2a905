#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::style::Color;

use crate::domain::weather::Rgb;

pub const DARK_TEXT: Rgb = Rgb(24, 28, 36);
pub const LIGHT_TEXT: Rgb = Rgb(246, 248, 250);

#[must_use]
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[must_use]
pub fn color_rgb(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb(r, g, b)),
        Color::Black => Some(Rgb(0, 0, 0)),
        Color::White => Some(Rgb(255, 255, 255)),
        _ => None,
    }
}

/// Linear mix; `t = 0` keeps `from`, `t = 1` yields `to`.
#[must_use]
pub fn blend(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

#[must_use]
pub fn luminance(rgb: Rgb) -> f32 {
    (0.2126 * f32::from(rgb.0) + 0.7152 * f32::from(rgb.1) + 0.0722 * f32::from(rgb.2)) / 255.0
}

#[must_use]
pub fn contrast_text(background: Rgb) -> Rgb {
    if luminance(background) > 0.55 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Panel fill: the condition background pulled slightly toward its text color.
#[must_use]
pub fn panel_surface(background: Rgb) -> Rgb {
    blend(background, contrast_text(background), 0.08)
}
