//! Rotating textured sphere drawn behind everything else.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

mod texture;

use std::f64::consts::{PI, TAU};

use crate::domain::weather::Rgb;
use crate::ui::effects::{FrameInfo, Renderer};

pub use texture::GlobeTexture;

/// Radians added to the spin every frame.
pub const ROTATION_STEP: f64 = 0.002;

/// Apparent radius as a share of the half-height: a radius-7 sphere seen from
/// distance 13 through a 75° vertical field of view.
const RADIUS_FRACTION: f64 = 0.83;

const AMBIENT: f64 = 0.7;
const DIRECTIONAL: f64 = 0.8;
const LIGHT_DIR: (f64, f64, f64) = (5.0, 3.0, 5.0);

const OCEAN: Rgb = Rgb(18, 58, 112);
const LAND: Rgb = Rgb(62, 120, 66);
const ICE: Rgb = Rgb(226, 232, 238);

/// Square-pixel raster; each terminal cell holds two vertically stacked
/// pixels. `None` marks pixels outside the sphere.
#[derive(Debug, Clone, Default)]
pub struct GlobeCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Option<Rgb>>,
}

impl GlobeCanvas {
    #[must_use]
    pub fn for_cells(cols: u16, rows: u16) -> Self {
        let mut canvas = Self::default();
        canvas.resize_cells(cols, rows);
        canvas
    }

    pub fn resize_cells(&mut self, cols: u16, rows: u16) {
        self.width = usize::from(cols);
        self.height = usize::from(rows) * 2;
        self.pixels = vec![None; self.width * self.height];
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, color: Option<Rgb>) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub viewport: (usize, usize),
    pub center: (f64, f64),
    pub radius: f64,
}

impl Projection {
    #[must_use]
    pub fn for_viewport(width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        let radius = (RADIUS_FRACTION * h / 2.0).min(0.95 * w / 2.0).max(0.0);
        Self {
            viewport: (width, height),
            center: (w / 2.0, h / 2.0),
            radius,
        }
    }

    /// Unit-sphere normal for a pixel center, facing the viewer (+z).
    #[must_use]
    pub fn normal_at(&self, x: usize, y: usize) -> Option<(f64, f64, f64)> {
        if self.radius <= 0.0 {
            return None;
        }
        let nx = (x as f64 + 0.5 - self.center.0) / self.radius;
        let ny = (self.center.1 - (y as f64 + 0.5)) / self.radius;
        let d2 = nx * nx + ny * ny;
        (d2 <= 1.0).then(|| (nx, ny, (1.0 - d2).sqrt()))
    }
}

#[derive(Debug)]
pub struct GlobeRenderer {
    texture: GlobeTexture,
    rotation: f64,
    step: f64,
    projection: Projection,
}

impl GlobeRenderer {
    #[must_use]
    pub fn new(texture: GlobeTexture) -> Self {
        Self {
            texture,
            rotation: 0.0,
            step: ROTATION_STEP,
            projection: Projection::for_viewport(0, 0),
        }
    }

    /// A globe that is drawn but never spins.
    #[must_use]
    pub fn frozen(texture: GlobeTexture) -> Self {
        Self {
            step: 0.0,
            ..Self::new(texture)
        }
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    fn shade(&self, normal: (f64, f64, f64)) -> Rgb {
        let (nx, ny, nz) = normal;
        let lat = ny.clamp(-1.0, 1.0).asin();
        let lon = (nx.atan2(nz) + self.rotation + PI).rem_euclid(TAU) - PI;
        let base = match (self.texture.is_land(lat, lon), lat.abs() > 66f64.to_radians()) {
            (true, true) => ICE,
            (true, false) => LAND,
            (false, _) => OCEAN,
        };
        let light = normalize(LIGHT_DIR);
        let diffuse = (nx * light.0 + ny * light.1 + nz * light.2).max(0.0);
        scale(base, (AMBIENT + DIRECTIONAL * diffuse).min(1.0))
    }
}

impl Renderer<GlobeCanvas> for GlobeRenderer {
    fn frame(&mut self, canvas: &mut GlobeCanvas, _info: FrameInfo) {
        if self.projection.viewport != (canvas.width(), canvas.height()) {
            self.projection = Projection::for_viewport(canvas.width(), canvas.height());
        }
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let color = self.projection.normal_at(x, y).map(|n| self.shade(n));
                canvas.set(x, y, color);
            }
        }
        self.rotation = (self.rotation + self.step) % TAU;
    }
}

fn normalize((x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
    let len = (x * x + y * y + z * z).sqrt();
    (x / len, y / len, z / len)
}

fn scale(color: Rgb, factor: f64) -> Rgb {
    let channel = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
    Rgb(channel(color.0), channel(color.1), channel(color.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: FrameInfo = FrameInfo { now_millis: 0 };

    #[test]
    fn rotation_advances_by_fixed_step_per_frame() {
        let mut canvas = GlobeCanvas::for_cells(40, 20);
        let mut globe = GlobeRenderer::new(GlobeTexture::load());
        for _ in 0..10 {
            globe.frame(&mut canvas, NOW);
        }
        assert!((globe.rotation() - 10.0 * ROTATION_STEP).abs() < 1e-12);
    }

    #[test]
    fn frozen_globe_keeps_its_orientation() {
        let mut canvas = GlobeCanvas::for_cells(40, 20);
        let mut globe = GlobeRenderer::frozen(GlobeTexture::load());
        globe.frame(&mut canvas, NOW);
        globe.frame(&mut canvas, NOW);
        assert!(globe.rotation().abs() < f64::EPSILON);
        assert!(canvas.pixel(20, 20).is_some());
    }

    #[test]
    fn resize_recomputes_projection() {
        let mut canvas = GlobeCanvas::for_cells(80, 24);
        let mut globe = GlobeRenderer::new(GlobeTexture::load());
        globe.frame(&mut canvas, NOW);
        let before = globe.projection();
        assert_eq!(before.viewport, (80, 48));
        assert!((before.radius - 0.83 * 24.0).abs() < 1e-9);

        canvas.resize_cells(120, 40);
        globe.frame(&mut canvas, NOW);
        let after = globe.projection();
        assert_eq!(after.viewport, (120, 80));
        assert!((after.center.0 - 60.0).abs() < f64::EPSILON);
        assert!(after.radius > before.radius);
    }

    #[test]
    fn corners_are_outside_the_sphere() {
        let mut canvas = GlobeCanvas::for_cells(60, 20);
        let mut globe = GlobeRenderer::new(GlobeTexture::load());
        globe.frame(&mut canvas, NOW);
        assert!(canvas.pixel(0, 0).is_none());
        assert!(canvas.pixel(59, 39).is_none());
        assert!(canvas.pixel(30, 20).is_some());
    }

    #[test]
    fn narrow_viewports_limit_radius_by_width() {
        let projection = Projection::for_viewport(20, 100);
        assert!((projection.radius - 9.5).abs() < 1e-9);
        assert!(Projection::for_viewport(0, 0).normal_at(0, 0).is_none());
    }
}
