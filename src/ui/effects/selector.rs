use rand::Rng;

use super::{EffectCanvas, FrameHandle, FrameScheduler, build_renderer};
use crate::domain::weather::{ConditionLabel, EffectKind, effect_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveEffect {
    pub handle: FrameHandle,
    pub kind: EffectKind,
}

/// Tears down `previous` (cancel, clear, drop particles) and schedules the
/// renderer mapped from `label`. Returns the new active effect, if any.
pub fn swap_effect<F>(
    previous: Option<ActiveEffect>,
    label: Option<ConditionLabel>,
    scheduler: &mut F,
    canvas: &mut EffectCanvas,
    rng: &mut impl Rng,
) -> Option<ActiveEffect>
where
    F: FrameScheduler<EffectCanvas> + ?Sized,
{
    if let Some(previous) = previous {
        scheduler.cancel(previous.handle);
    }
    canvas.clear();

    let kind = effect_for(label?);
    let renderer = build_renderer(kind, canvas.width(), canvas.height(), rng);
    let handle = scheduler.start(renderer);
    Some(ActiveEffect { handle, kind })
}

/// Owner of the single active-effect slot.
#[derive(Debug, Default)]
pub struct EffectSlot {
    active: Option<ActiveEffect>,
}

impl EffectSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_effect<F>(
        &mut self,
        label: Option<ConditionLabel>,
        scheduler: &mut F,
        canvas: &mut EffectCanvas,
        rng: &mut impl Rng,
    ) -> Option<EffectKind>
    where
        F: FrameScheduler<EffectCanvas> + ?Sized,
    {
        self.active = swap_effect(self.active.take(), label, scheduler, canvas, rng);
        tracing::debug!(?label, effect = ?self.kind(), "weather effect switched");
        self.kind()
    }

    #[must_use]
    pub fn active(&self) -> Option<ActiveEffect> {
        self.active
    }

    #[must_use]
    pub fn kind(&self) -> Option<EffectKind> {
        self.active.map(|active| active.kind)
    }
}
