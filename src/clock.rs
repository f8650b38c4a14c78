// Turns raw millisecond tick counts into per-iteration deltas.

pub struct FrameClock {
    last_tick_ms: u64,
}

impl FrameClock {
    /// Start measuring from `now_ms`; the first `tick` reports time since here.
    pub fn new(now_ms: u64) -> Self {
        Self { last_tick_ms: now_ms }
    }

    /// Milliseconds since the previous tick. A tick source that steps backwards
    /// yields 0 instead of a negative delta.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let delta = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = self.last_tick_ms.max(now_ms);
        delta as f32
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }
}
