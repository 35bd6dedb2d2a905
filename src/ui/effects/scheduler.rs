use std::fmt::Debug;

/// Per-tick context handed to every scheduled renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Wall-clock time in milliseconds since the Unix epoch.
    pub now_millis: i64,
}

impl FrameInfo {
    #[must_use]
    pub fn now() -> Self {
        Self {
            now_millis: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// A per-frame routine. Each call draws the current state to `surface` and
/// then advances it by one step.
pub trait Renderer<S: ?Sized>: Debug {
    fn frame(&mut self, surface: &mut S, info: FrameInfo);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

pub trait FrameScheduler<S: ?Sized> {
    fn start(&mut self, renderer: Box<dyn Renderer<S>>) -> FrameHandle;

    /// Cancelling an unknown or already cancelled handle is a no-op.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Platform-independent frame scheduler. Whatever owns the clock (the tokio
/// frame ticker in the app) calls [`FrameLoop::tick`] once per frame.
#[derive(Debug)]
pub struct FrameLoop<S: ?Sized> {
    next_id: u64,
    scheduled: Vec<(FrameHandle, Box<dyn Renderer<S>>)>,
}

impl<S: ?Sized> Default for FrameLoop<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> FrameLoop<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            scheduled: Vec::new(),
        }
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.scheduled.len()
    }

    #[must_use]
    pub fn is_scheduled(&self, handle: FrameHandle) -> bool {
        self.scheduled.iter().any(|(candidate, _)| *candidate == handle)
    }

    pub fn tick(&mut self, surface: &mut S, info: FrameInfo) {
        for (_, renderer) in &mut self.scheduled {
            renderer.frame(surface, info);
        }
    }
}

impl<S: ?Sized> FrameScheduler<S> for FrameLoop<S> {
    fn start(&mut self, renderer: Box<dyn Renderer<S>>) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.scheduled.push((handle, renderer));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.scheduled.retain(|(candidate, _)| *candidate != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Counter;

    impl Renderer<Vec<u64>> for Counter {
        fn frame(&mut self, surface: &mut Vec<u64>, info: FrameInfo) {
            surface.push(info.now_millis.unsigned_abs());
        }
    }

    #[test]
    fn tick_runs_every_scheduled_renderer_once() {
        let mut frames = FrameLoop::new();
        frames.start(Box::new(Counter));
        frames.start(Box::new(Counter));
        let mut calls = Vec::new();
        frames.tick(&mut calls, FrameInfo { now_millis: 7 });
        assert_eq!(calls, vec![7, 7]);
    }

    #[test]
    fn cancelled_renderer_is_not_called_again() {
        let mut frames = FrameLoop::new();
        let handle = frames.start(Box::new(Counter));
        assert!(frames.is_scheduled(handle));
        frames.cancel(handle);
        frames.cancel(handle);
        assert!(!frames.is_scheduled(handle));
        assert_eq!(frames.active_count(), 0);

        let mut calls = Vec::new();
        frames.tick(&mut calls, FrameInfo { now_millis: 1 });
        assert!(calls.is_empty());
    }

    #[test]
    fn handles_are_never_reused() {
        let mut frames: FrameLoop<Vec<u64>> = FrameLoop::new();
        let first = frames.start(Box::new(Counter));
        frames.cancel(first);
        let second = frames.start(Box::new(Counter));
        assert_ne!(first, second);
    }
}
