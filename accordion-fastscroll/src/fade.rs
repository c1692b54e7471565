/// A small linear fade helper for the scrollbar's show/hide animation.
///
/// Samples are a fraction in `0.0..=1.0`; the controller scales them to an
/// alpha value for drawing. Driven entirely by the host clock passed to
/// [`crate::FastScroller::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Fade {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        (self.from + (self.to - self.from) * t).clamp(0.0, 1.0)
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
