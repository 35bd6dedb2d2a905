use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{
    domain::weather::Rgb,
    ui::{globe::GlobeCanvas, theme::to_color},
};

/// Paints the globe raster with upper-half blocks: foreground is the top
/// pixel of the cell, background the bottom one. Pixels off the sphere take
/// the condition background.
pub struct GlobeBackdrop<'a> {
    pub canvas: &'a GlobeCanvas,
    pub background: Rgb,
}

impl Widget for GlobeBackdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            let row = usize::from(y - area.top()) * 2;
            for x in area.left()..area.right() {
                let col = usize::from(x - area.left());
                let top = self.canvas.pixel(col, row).unwrap_or(self.background);
                let bottom = self.canvas.pixel(col, row + 1).unwrap_or(self.background);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('▀')
                        .set_fg(to_color(top))
                        .set_bg(to_color(bottom));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::ui::{
        effects::{FrameInfo, FrameLoop, FrameScheduler},
        globe::{GlobeRenderer, GlobeTexture},
    };

    #[test]
    fn blank_canvas_shows_background_only() {
        let canvas = GlobeCanvas::for_cells(10, 4);
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        GlobeBackdrop {
            canvas: &canvas,
            background: Rgb(1, 2, 3),
        }
        .render(area, &mut buf);
        let cell = &buf[(5, 2)];
        assert_eq!(cell.fg, Color::Rgb(1, 2, 3));
        assert_eq!(cell.bg, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn sphere_center_differs_from_background() {
        let mut canvas = GlobeCanvas::for_cells(40, 20);
        let mut frames = FrameLoop::new();
        frames.start(Box::new(GlobeRenderer::new(GlobeTexture::load())));
        frames.tick(&mut canvas, FrameInfo { now_millis: 0 });

        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        let background = Rgb(255, 255, 255);
        GlobeBackdrop {
            canvas: &canvas,
            background,
        }
        .render(area, &mut buf);
        assert_ne!(buf[(20, 10)].bg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(255, 255, 255));
    }
}
