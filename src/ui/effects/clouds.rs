use rand::{Rng, rngs::StdRng};

use super::{EffectCanvas, FrameInfo, Renderer, Rgba, random_upto};

pub const CLOUD_COUNT: usize = 6;
const COLOR: Rgba = Rgba::new(255, 255, 255, 0.5);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub size: f64,
}

/// Puffs drifting right at a constant per-cloud speed.
#[derive(Debug)]
pub struct CloudsEffect {
    clouds: Vec<Cloud>,
}

impl CloudsEffect {
    #[must_use]
    pub fn new(width: f64, mut rng: StdRng) -> Self {
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                x: random_upto(&mut rng, width),
                y: 40.0 + rng.random_range(0.0..120.0),
                speed: 0.2 + rng.random_range(0.0..0.3),
                size: 60.0 + rng.random_range(0.0..40.0),
            })
            .collect();
        Self { clouds }
    }

    #[must_use]
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }
}

impl Renderer<EffectCanvas> for CloudsEffect {
    fn frame(&mut self, canvas: &mut EffectCanvas, _info: FrameInfo) {
        canvas.clear();
        let width = canvas.width();
        for cloud in &mut self.clouds {
            canvas.fill_ellipse((cloud.x, cloud.y), cloud.size, cloud.size * 0.6, COLOR);
            cloud.x += cloud.speed;
            // wraps only once the whole puff is past the right edge
            if cloud.x - cloud.size > width {
                cloud.x = -cloud.size;
            }
        }
    }
}
