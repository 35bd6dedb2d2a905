use rand::{Rng, rngs::StdRng};

use super::{EffectCanvas, FrameInfo, Renderer, Rgba, random_upto};

pub const DROP_COUNT: usize = 100;
const RESPAWN_Y: f64 = -20.0;
const STROKE_WIDTH: f64 = 2.0;
const COLOR: Rgba = Rgba::new(174, 194, 224, 0.5);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub xs: f64,
    pub ys: f64,
}

/// Streaks falling with a slight per-drop sideways drift.
#[derive(Debug)]
pub struct RainEffect {
    drops: Vec<Raindrop>,
    rng: StdRng,
}

impl RainEffect {
    #[must_use]
    pub fn new(width: f64, height: f64, mut rng: StdRng) -> Self {
        let drops = (0..DROP_COUNT)
            .map(|_| Raindrop {
                x: random_upto(&mut rng, width),
                y: random_upto(&mut rng, height),
                length: rng.random_range(10.0..20.0),
                xs: rng.random_range(-2.0..2.0),
                ys: rng.random_range(10.0..20.0),
            })
            .collect();
        Self { drops, rng }
    }

    #[must_use]
    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }
}

impl Renderer<EffectCanvas> for RainEffect {
    fn frame(&mut self, canvas: &mut EffectCanvas, _info: FrameInfo) {
        canvas.clear();
        let (width, height) = (canvas.width(), canvas.height());
        for drop in &mut self.drops {
            canvas.stroke_line(
                (drop.x, drop.y),
                (drop.x + drop.xs, drop.y + drop.length),
                STROKE_WIDTH,
                COLOR,
            );
            drop.x += drop.xs;
            drop.y += drop.ys;
            if drop.y > height {
                drop.x = random_upto(&mut self.rng, width);
                drop.y = RESPAWN_Y;
            }
        }
    }
}
