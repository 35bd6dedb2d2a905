use std::f64::consts::TAU;

use super::{EffectCanvas, FrameInfo, Renderer, Rgba};

pub const RAY_COUNT: usize = 12;
const DISC_RADIUS: f64 = 40.0;
const RAY_INNER: f64 = 50.0;
const RAY_OUTER: f64 = 70.0;
const RAY_WIDTH: f64 = 4.0;
const GOLD: Rgba = Rgba::new(0xff, 0xd7, 0x00, 0.5);

/// A disc with rotating rays. The spin comes from wall-clock time, so it is
/// independent of frame rate.
#[derive(Debug, Default)]
pub struct SunEffect;

impl SunEffect {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ray_angle(index: usize, now_millis: i64) -> f64 {
    TAU * index as f64 / RAY_COUNT as f64 + now_millis as f64 * 0.0005
}

impl Renderer<EffectCanvas> for SunEffect {
    fn frame(&mut self, canvas: &mut EffectCanvas, info: FrameInfo) {
        canvas.clear();
        let center = (canvas.width() - 100.0, 100.0);
        canvas.fill_circle(center, DISC_RADIUS, GOLD);
        for index in 0..RAY_COUNT {
            // segment along the rotated +y axis
            let angle = ray_angle(index, info.now_millis);
            let (sin, cos) = angle.sin_cos();
            let along = |dist: f64| (center.0 - dist * sin, center.1 + dist * cos);
            canvas.stroke_line(along(RAY_INNER), along(RAY_OUTER), RAY_WIDTH, GOLD);
        }
    }
}
