/// Configuration for [`crate::FastScroller`].
///
/// All lengths are in the host's pixel units; durations and delays are in
/// milliseconds of the host-supplied clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastScrollerOptions {
    /// Thickness of the thumb/track band along the viewport edge.
    pub thumb_thickness: u32,
    /// Minimum viewport length on an axis for its scrollbar to be shown at
    /// all; shorter viewports never get a bar.
    pub minimum_range: u32,
    /// Inset applied to both ends of the track.
    pub margin: u32,
    /// Fade-in duration for [`crate::FastScroller::show`].
    pub show_duration_ms: u64,
    /// Fade-out duration used when an auto-hide timer fires.
    pub hide_duration_ms: u64,
    /// Auto-hide delay armed whenever the bar becomes (or stays) visible.
    pub hide_delay_after_visible_ms: u64,
    /// Auto-hide delay armed when a drag ends.
    pub hide_delay_after_dragging_ms: u64,
}

impl Default for FastScrollerOptions {
    fn default() -> Self {
        Self {
            thumb_thickness: 8,
            minimum_range: 50,
            margin: 0,
            show_duration_ms: 500,
            hide_duration_ms: 500,
            hide_delay_after_visible_ms: 1500,
            hide_delay_after_dragging_ms: 1200,
        }
    }
}

impl FastScrollerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thumb_thickness(mut self, thumb_thickness: u32) -> Self {
        self.thumb_thickness = thumb_thickness;
        self
    }

    pub fn with_minimum_range(mut self, minimum_range: u32) -> Self {
        self.minimum_range = minimum_range;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_show_duration_ms(mut self, show_duration_ms: u64) -> Self {
        self.show_duration_ms = show_duration_ms;
        self
    }

    pub fn with_hide_duration_ms(mut self, hide_duration_ms: u64) -> Self {
        self.hide_duration_ms = hide_duration_ms;
        self
    }

    pub fn with_hide_delay_after_visible_ms(mut self, delay_ms: u64) -> Self {
        self.hide_delay_after_visible_ms = delay_ms;
        self
    }

    pub fn with_hide_delay_after_dragging_ms(mut self, delay_ms: u64) -> Self {
        self.hide_delay_after_dragging_ms = delay_ms;
        self
    }
}
