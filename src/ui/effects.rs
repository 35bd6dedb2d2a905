//! Condition overlays: one particle system per [`EffectKind`], driven by a
//! [`FrameLoop`] and swapped by [`EffectSlot`].

mod canvas;
mod clouds;
mod dust;
mod fog;
mod rain;
mod scheduler;
mod selector;
mod snow;
mod sun;
mod wind;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::weather::EffectKind;

pub use canvas::{CELL_PX_H, CELL_PX_W, EffectCanvas, Rgba, Shape};
pub use clouds::{Cloud, CloudsEffect};
pub use dust::{DustEffect, Mote};
pub use fog::FogEffect;
pub use rain::{RainEffect, Raindrop};
pub use scheduler::{FrameHandle, FrameInfo, FrameLoop, FrameScheduler, Renderer};
pub use selector::{ActiveEffect, EffectSlot, swap_effect};
pub use snow::{Flake, SnowEffect};
pub use sun::SunEffect;
pub use wind::WindEffect;

/// Builds a fresh renderer sized to the current canvas. Particle renderers get
/// their own generator seeded from `rng`.
pub fn build_renderer(
    kind: EffectKind,
    width: f64,
    height: f64,
    rng: &mut impl Rng,
) -> Box<dyn Renderer<EffectCanvas>> {
    let seeded = StdRng::seed_from_u64(rng.random());
    match kind {
        EffectKind::Sun => Box::new(SunEffect::new()),
        EffectKind::Clouds => Box::new(CloudsEffect::new(width, seeded)),
        EffectKind::Rain => Box::new(RainEffect::new(width, height, seeded)),
        EffectKind::Snow => Box::new(SnowEffect::new(width, height, seeded)),
        EffectKind::Fog => Box::new(FogEffect::new()),
        EffectKind::Dust => Box::new(DustEffect::new(width, height, seeded)),
        EffectKind::Wind => Box::new(WindEffect::new()),
    }
}

/// Uniform sample in `[0, max)`; collapses to 0 on an empty canvas.
pub(crate) fn random_upto(rng: &mut impl Rng, max: f64) -> f64 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}
