/// Logical pixels per terminal cell. Effect constants are expressed in these
/// units so they read the same as on a browser canvas.
pub const CELL_PX_W: f64 = 8.0;
pub const CELL_PX_H: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Rgba,
    },
    Path {
        points: Vec<(f64, f64)>,
        width: f64,
        color: Rgba,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Rgba,
    },
    Ellipse {
        center: (f64, f64),
        rx: f64,
        ry: f64,
        color: Rgba,
    },
}

/// Retained-mode drawing surface for the overlay. Origin is top-left, y grows
/// downward. Renderers record shapes; the UI turns them into terminal cells.
#[derive(Debug, Clone, Default)]
pub struct EffectCanvas {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
}

impl EffectCanvas {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            shapes: Vec::new(),
        }
    }

    #[must_use]
    pub fn for_cells(cols: u16, rows: u16) -> Self {
        Self::new(f64::from(cols) * CELL_PX_W, f64::from(rows) * CELL_PX_H)
    }

    /// Resizing drops whatever was drawn, like resizing an HTML canvas.
    pub fn resize_cells(&mut self, cols: u16, rows: u16) {
        self.width = f64::from(cols) * CELL_PX_W;
        self.height = f64::from(rows) * CELL_PX_H;
        self.shapes.clear();
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.shapes.is_empty()
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba) {
        self.shapes.push(Shape::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn stroke_path(&mut self, points: Vec<(f64, f64)>, width: f64, color: Rgba) {
        if points.len() < 2 {
            return;
        }
        self.shapes.push(Shape::Path {
            points,
            width,
            color,
        });
    }

    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgba) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn fill_ellipse(&mut self, center: (f64, f64), rx: f64, ry: f64, color: Rgba) {
        self.shapes.push(Shape::Ellipse {
            center,
            rx,
            ry,
            color,
        });
    }
}
