#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{
    domain::weather::Rgb,
    ui::{
        effects::{CELL_PX_H, CELL_PX_W, EffectCanvas, Rgba, Shape},
        theme::{blend, color_rgb, to_color},
    },
};

const DOT_W: f64 = CELL_PX_W / 2.0;
const DOT_H: f64 = CELL_PX_H / 4.0;
const LINE_STEP: f64 = 2.0;
/// Faint shapes are lifted to this opacity so they stay visible in a cell.
const MIN_ALPHA: f32 = 0.35;

const BRAILLE_BASE: u32 = 0x2800;
const BRAILLE_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

#[derive(Debug, Clone, Copy, PartialEq)]
struct DotCell {
    bits: u8,
    color: (f32, f32, f32),
    alpha: f32,
    shape: usize,
}

/// Braille raster of the effect canvas, 2×4 dots per terminal cell.
#[derive(Debug)]
pub struct DotGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Option<DotCell>>,
}

impl DotGrid {
    #[must_use]
    pub fn rasterize(canvas: &EffectCanvas, cols: u16, rows: u16) -> Self {
        let mut grid = Self {
            cols: usize::from(cols),
            rows: usize::from(rows),
            cells: vec![None; usize::from(cols) * usize::from(rows)],
        };
        for (index, shape) in canvas.shapes().iter().enumerate() {
            grid.draw(index, shape);
        }
        grid
    }

    /// Braille glyph and composited color for a cell, if anything was drawn.
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<(char, Rgb, f32)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let cell = self.cells[row * self.cols + col]?;
        let glyph = char::from_u32(BRAILLE_BASE + u32::from(cell.bits))?;
        let channel = |value: f32| value.round().clamp(0.0, 255.0) as u8;
        let color = Rgb(channel(cell.color.0), channel(cell.color.1), channel(cell.color.2));
        Some((glyph, color, cell.alpha))
    }

    fn draw(&mut self, index: usize, shape: &Shape) {
        match shape {
            Shape::Line {
                from,
                to,
                width,
                color,
            } => self.line(index, *from, *to, *width, *color),
            Shape::Path {
                points,
                width,
                color,
            } => {
                for pair in points.windows(2) {
                    self.line(index, pair[0], pair[1], *width, *color);
                }
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => self.ellipse(index, *center, *radius, *radius, *color),
            Shape::Ellipse {
                center,
                rx,
                ry,
                color,
            } => self.ellipse(index, *center, *rx, *ry, *color),
        }
    }

    fn line(&mut self, index: usize, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = dx.hypot(dy);
        let steps = (length / LINE_STEP).ceil().max(1.0) as usize;
        let normal = if length > 0.0 {
            (-dy / length, dx / length)
        } else {
            (0.0, 0.0)
        };
        let offsets: &[f64] = if width > DOT_W {
            &[-0.5, 0.0, 0.5]
        } else {
            &[0.0]
        };
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let (x, y) = (from.0 + dx * t, from.1 + dy * t);
            for offset in offsets {
                let shift = offset * width;
                self.mark(index, x + normal.0 * shift, y + normal.1 * shift, color);
            }
        }
    }

    fn ellipse(&mut self, index: usize, center: (f64, f64), rx: f64, ry: f64, color: Rgba) {
        let mut marked = false;
        if rx > 0.0 && ry > 0.0 {
            let first_col = ((center.0 - rx) / DOT_W).floor().max(0.0) as usize;
            let last_col = ((center.0 + rx) / DOT_W).ceil().max(0.0) as usize;
            let first_row = ((center.1 - ry) / DOT_H).floor().max(0.0) as usize;
            let last_row = ((center.1 + ry) / DOT_H).ceil().max(0.0) as usize;
            for dot_row in first_row..=last_row {
                for dot_col in first_col..=last_col {
                    let x = (dot_col as f64 + 0.5) * DOT_W;
                    let y = (dot_row as f64 + 0.5) * DOT_H;
                    let (nx, ny) = ((x - center.0) / rx, (y - center.1) / ry);
                    if nx * nx + ny * ny <= 1.0 {
                        marked |= self.mark(index, x, y, color);
                    }
                }
            }
        }
        if !marked {
            self.mark(index, center.0, center.1, color);
        }
    }

    fn mark(&mut self, index: usize, x: f64, y: f64, color: Rgba) -> bool {
        if x < 0.0 || y < 0.0 {
            return false;
        }
        let dot_col = (x / DOT_W) as usize;
        let dot_row = (y / DOT_H) as usize;
        let (col, row) = (dot_col / 2, dot_row / 4);
        if col >= self.cols || row >= self.rows {
            return false;
        }
        let bit = BRAILLE_BITS[dot_col % 2][dot_row % 4];
        let slot = &mut self.cells[row * self.cols + col];
        let cell = slot.get_or_insert(DotCell {
            bits: 0,
            color: (0.0, 0.0, 0.0),
            alpha: 0.0,
            shape: usize::MAX,
        });
        cell.bits |= bit;
        if cell.shape != index {
            cell.shape = index;
            composite(cell, color);
        }
        true
    }
}

/// Porter-Duff "over" of `color` onto what the cell already holds.
fn composite(cell: &mut DotCell, color: Rgba) {
    let a = color.a.clamp(0.0, 1.0);
    let out = a + cell.alpha * (1.0 - a);
    if out <= 0.0 {
        return;
    }
    let over = |src: u8, dst: f32| (f32::from(src) * a + dst * cell.alpha * (1.0 - a)) / out;
    cell.color = (
        over(color.r, cell.color.0),
        over(color.g, cell.color.1),
        over(color.b, cell.color.2),
    );
    cell.alpha = out;
}

/// Draws the effect canvas over whatever is already in the buffer,
/// blending each glyph onto the cell's existing background.
pub struct EffectOverlay<'a> {
    pub canvas: &'a EffectCanvas,
    pub fallback: Rgb,
}

impl Widget for EffectOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.canvas.is_blank() {
            return;
        }
        let grid = DotGrid::rasterize(self.canvas, area.width, area.height);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let Some((glyph, color, alpha)) =
                    grid.cell(usize::from(x - area.left()), usize::from(y - area.top()))
                else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    let backdrop = color_rgb(cell.bg).unwrap_or(self.fallback);
                    let fg = blend(backdrop, color, alpha.max(MIN_ALPHA));
                    cell.set_char(glyph).set_fg(to_color(fg));
                }
            }
        }
    }
}
