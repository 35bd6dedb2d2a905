use super::{EffectCanvas, FrameInfo, Renderer, Rgba};

pub const BANK_COUNT: usize = 4;

/// Four wide, faint banks swaying around fixed anchors.
#[derive(Debug, Default)]
pub struct FogEffect {
    t: u64,
}

impl FogEffect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.t
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bank_geometry(index: usize, t: u64, width: f64) -> ((f64, f64), f64, f64) {
    let i = index as f64;
    let t = t as f64;
    let center = (
        (width / 4.0) * i + (t / 60.0 + i).sin() * 40.0,
        120.0 + i * 40.0 + (t / 80.0 + i).cos() * 10.0,
    );
    (center, width / 2.0, 60.0 + i * 10.0)
}

impl Renderer<EffectCanvas> for FogEffect {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn frame(&mut self, canvas: &mut EffectCanvas, _info: FrameInfo) {
        canvas.clear();
        for index in 0..BANK_COUNT {
            let (center, rx, ry) = bank_geometry(index, self.t, canvas.width());
            let alpha = 0.12 + 0.04 * index as f32;
            canvas.fill_ellipse(center, rx, ry, Rgba::new(0xcc, 0xcc, 0xcc, alpha));
        }
        self.t += 1;
    }
}
