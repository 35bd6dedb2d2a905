use rand::{Rng, rngs::StdRng};

use super::{EffectCanvas, FrameInfo, Renderer, Rgba, random_upto};

pub const FLAKE_COUNT: usize = 80;
const RESPAWN_Y: f64 = -10.0;
const COLOR: Rgba = Rgba::new(255, 255, 255, 0.8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flake {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Extra fall speed on top of the base 1px per frame.
    pub density: f64,
}

/// Flakes sway sideways with `sin(y * 0.01)` as they fall.
#[derive(Debug)]
pub struct SnowEffect {
    flakes: Vec<Flake>,
    rng: StdRng,
}

impl SnowEffect {
    #[must_use]
    pub fn new(width: f64, height: f64, mut rng: StdRng) -> Self {
        let flakes = (0..FLAKE_COUNT)
            .map(|_| Flake {
                x: random_upto(&mut rng, width),
                y: random_upto(&mut rng, height),
                radius: rng.random_range(1.0..4.0),
                density: rng.random_range(0.0..1.0),
            })
            .collect();
        Self { flakes, rng }
    }

    #[must_use]
    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }
}

impl Renderer<EffectCanvas> for SnowEffect {
    fn frame(&mut self, canvas: &mut EffectCanvas, _info: FrameInfo) {
        canvas.clear();
        for flake in &self.flakes {
            canvas.fill_circle((flake.x, flake.y), flake.radius, COLOR);
        }

        let (width, height) = (canvas.width(), canvas.height());
        for flake in &mut self.flakes {
            flake.y += 1.0 + flake.density;
            flake.x += (flake.y * 0.01).sin();
            if flake.y > height {
                flake.x = random_upto(&mut self.rng, width);
                flake.y = RESPAWN_Y;
            }
        }
    }
}
