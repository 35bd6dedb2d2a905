use std::f64::consts::TAU;

use super::{EffectCanvas, FrameInfo, Renderer, Rgba};

pub const SPIRAL_COUNT: usize = 5;
const ANGLE_STEP: f64 = 0.1;
const STROKE_WIDTH: f64 = 3.0;
const COLOR: Rgba = Rgba::new(120, 120, 120, 0.3);

/// Concentric wobbling rings anchored near the top-right corner. There are no
/// particles; every curve is recomputed from the frame counter.
#[derive(Debug, Default)]
pub struct WindEffect {
    t: u64,
}

impl WindEffect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn spiral_points(index: usize, t: u64, width: f64) -> Vec<(f64, f64)> {
    let i = index as f64;
    let t = t as f64;
    let mut points = Vec::with_capacity(64);
    let mut a = 0.0;
    while a < TAU {
        let r = 40.0 + 10.0 * i + 8.0 * (a * 3.0 + t / 10.0 + i).sin();
        let sweep = a + t / 40.0 + i;
        points.push((width - 120.0 + sweep.cos() * r, 120.0 + sweep.sin() * r));
        a += ANGLE_STEP;
    }
    points
}

impl Renderer<EffectCanvas> for WindEffect {
    fn frame(&mut self, canvas: &mut EffectCanvas, _info: FrameInfo) {
        canvas.clear();
        for index in 0..SPIRAL_COUNT {
            canvas.stroke_path(
                spiral_points(index, self.t, canvas.width()),
                STROKE_WIDTH,
                COLOR,
            );
        }
        self.t += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_five_curves_per_frame() {
        let mut canvas = EffectCanvas::new(800.0, 600.0);
        let mut effect = WindEffect::new();
        effect.frame(&mut canvas, FrameInfo { now_millis: 0 });
        effect.frame(&mut canvas, FrameInfo { now_millis: 0 });
        assert_eq!(canvas.shapes().len(), SPIRAL_COUNT);
    }

    #[test]
    fn spiral_radius_stays_in_its_band() {
        for t in [0, 13, 400, 9_999] {
            for index in 0..SPIRAL_COUNT {
                let points = spiral_points(index, t, 800.0);
                assert_eq!(points.len(), 63);
                #[allow(clippy::cast_precision_loss)]
                let base = 40.0 + 10.0 * index as f64;
                for (x, y) in points {
                    let r = ((x - 680.0).powi(2) + (y - 120.0).powi(2)).sqrt();
                    assert!(r >= base - 8.0 - 1e-9 && r <= base + 8.0 + 1e-9);
                }
            }
        }
    }
}
