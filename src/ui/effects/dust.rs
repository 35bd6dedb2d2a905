use rand::{Rng, rngs::StdRng};

use super::{EffectCanvas, FrameInfo, Renderer, Rgba, random_upto};

pub const MOTE_COUNT: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mote {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub alpha: f32,
}

/// Sand-colored grains blown to the right.
#[derive(Debug)]
pub struct DustEffect {
    motes: Vec<Mote>,
    rng: StdRng,
}

impl DustEffect {
    #[must_use]
    pub fn new(width: f64, height: f64, mut rng: StdRng) -> Self {
        let motes = (0..MOTE_COUNT)
            .map(|_| Mote {
                x: random_upto(&mut rng, width),
                y: random_upto(&mut rng, height),
                radius: rng.random_range(2.0..4.0),
                speed: rng.random_range(0.5..1.5),
                alpha: rng.random_range(0.2..0.5),
            })
            .collect();
        Self { motes, rng }
    }

    #[must_use]
    pub fn motes(&self) -> &[Mote] {
        &self.motes
    }
}

impl Renderer<EffectCanvas> for DustEffect {
    fn frame(&mut self, canvas: &mut EffectCanvas, _info: FrameInfo) {
        canvas.clear();
        let (width, height) = (canvas.width(), canvas.height());
        for mote in &mut self.motes {
            canvas.fill_circle(
                (mote.x, mote.y),
                mote.radius,
                Rgba::new(194, 178, 128, mote.alpha),
            );
            mote.x += mote.speed;
            if mote.x > width {
                mote.x = -mote.radius;
                mote.y = random_upto(&mut self.rng, height);
            }
        }
    }
}
