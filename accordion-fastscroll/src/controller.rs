use accordion::SectionIndex;

use crate::fade::Fade;
use crate::options::FastScrollerOptions;

const FULL_OPAQUE: f32 = 255.0;

/// Thumb-center dead zone: drags that would move the thumb center by less
/// than this many pixels produce no scroll request.
const DRAG_DEAD_ZONE: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Interaction state of the scrollbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollerState {
    /// Thumb not showing.
    Hidden,
    /// Thumb visible and moving along with the scroll offset.
    Visible,
    /// Thumb being dragged by the user.
    Dragging,
}

/// Fade animation state, independent of the interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationState {
    Out,
    FadingIn,
    In,
    FadingOut,
}

/// A scroll request the host must apply to its viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollBy {
    pub axis: Axis,
    pub delta: i64,
}

/// Scroll facts delivered by the host on every scroll/content change.
///
/// Content lengths are in the same pixel units as the viewport; offsets are
/// the viewport's current scroll positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollUpdate {
    pub horizontal_offset: u64,
    pub vertical_offset: u64,
    pub horizontal_content: u64,
    pub vertical_content: u64,
}

/// Geometry of a thumb, exposed for external drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    /// Thumb center along the scroll axis.
    pub center: u32,
    /// Thumb length along the scroll axis.
    pub length: u32,
    /// Thumb thickness across the scroll axis.
    pub thickness: u32,
}

#[derive(Clone, Copy, Debug, Default)]
struct AxisFacts {
    content: u64,
    offset: u64,
    thumb_len: u32,
    thumb_center: u32,
    drag_pos: f32,
}

/// A framework-neutral fast-scroll controller for two independent axes.
///
/// See the crate docs for the host contract. All geometry is derived from
/// the most recent [`set_viewport`](Self::set_viewport) /
/// [`update_scroll_position`](Self::update_scroll_position) call; stale
/// geometry is simply overwritten, never applied.
#[derive(Clone, Debug)]
pub struct FastScroller {
    opts: FastScrollerOptions,
    viewport_width: u32,
    viewport_height: u32,
    rtl: bool,

    vertical: AxisFacts,
    horizontal: AxisFacts,
    need_vertical: bool,
    need_horizontal: bool,

    state: ScrollerState,
    drag_axis: Option<Axis>,

    animation_state: AnimationState,
    fade: Option<Fade>,
    fraction: f32,
    hide_deadline_ms: Option<u64>,

    section_label: Option<char>,
    needs_redraw: bool,
}

impl Default for FastScroller {
    fn default() -> Self {
        Self::new(FastScrollerOptions::default())
    }
}

impl FastScroller {
    pub fn new(opts: FastScrollerOptions) -> Self {
        Self {
            opts,
            viewport_width: 0,
            viewport_height: 0,
            rtl: false,
            vertical: AxisFacts::default(),
            horizontal: AxisFacts::default(),
            need_vertical: false,
            need_horizontal: false,
            state: ScrollerState::Hidden,
            drag_axis: None,
            animation_state: AnimationState::Out,
            fade: None,
            fraction: 0.0,
            hide_deadline_ms: None,
            section_label: None,
            needs_redraw: false,
        }
    }

    pub fn options(&self) -> &FastScrollerOptions {
        &self.opts
    }

    /// Mirrors the vertical bar to the left edge for right-to-left layouts.
    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    pub fn state(&self) -> ScrollerState {
        self.state
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation_state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == ScrollerState::Dragging
    }

    pub fn is_visible(&self) -> bool {
        self.state == ScrollerState::Visible
    }

    /// Alpha for thumb/track rendering, `0..=255` scaled by fade progress.
    pub fn thumb_alpha(&self) -> u8 {
        (FULL_OPAQUE * self.fraction) as u8
    }

    /// Current fade fraction in `0.0..=1.0`.
    pub fn fade_fraction(&self) -> f32 {
        self.fraction
    }

    /// Updates the viewport size. A size change hides the bar until the next
    /// [`update_scroll_position`](Self::update_scroll_position) recomputes
    /// geometry; event ordering around resizes is otherwise ambiguous.
    pub fn set_viewport(&mut self, width: u32, height: u32, now_ms: u64) {
        if self.viewport_width == width && self.viewport_height == height {
            return;
        }
        fsdebug!(width, height, "FastScroller::set_viewport");
        self.viewport_width = width;
        self.viewport_height = height;
        self.set_state(ScrollerState::Hidden, now_ms);
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Consumes scroll-range/offset facts and recomputes thumb geometry and
    /// visibility for both axes.
    pub fn update_scroll_position(&mut self, update: ScrollUpdate, now_ms: u64) {
        self.vertical.content = update.vertical_content;
        self.vertical.offset = update.vertical_offset;
        self.horizontal.content = update.horizontal_content;
        self.horizontal.offset = update.horizontal_offset;

        let view_h = self.viewport_height as u64;
        let view_w = self.viewport_width as u64;
        self.need_vertical = update.vertical_content > view_h
            && self.viewport_height >= self.opts.minimum_range;
        self.need_horizontal = update.horizontal_content > view_w
            && self.viewport_width >= self.opts.minimum_range;

        if !self.need_vertical && !self.need_horizontal {
            if self.state != ScrollerState::Hidden {
                self.set_state(ScrollerState::Hidden, now_ms);
            }
            return;
        }

        if self.need_vertical {
            // content > viewport here, so content is never zero.
            let middle = update.vertical_offset.saturating_add(view_h / 2);
            self.vertical.thumb_center = (view_h * middle / update.vertical_content) as u32;
            self.vertical.thumb_len =
                (view_h.min(view_h * view_h / update.vertical_content)) as u32;
        }
        if self.need_horizontal {
            let middle = update.horizontal_offset.saturating_add(view_w / 2);
            self.horizontal.thumb_center = (view_w * middle / update.horizontal_content) as u32;
            self.horizontal.thumb_len =
                (view_w.min(view_w * view_w / update.horizontal_content)) as u32;
        }

        if matches!(self.state, ScrollerState::Hidden | ScrollerState::Visible) {
            self.set_state(ScrollerState::Visible, now_ms);
        }
    }

    /// Refreshes the "nearest section" label from the row currently at the
    /// top of the viewport. The label is surfaced by
    /// [`drag_label`](Self::drag_label) only while dragging.
    pub fn update_section_label(&mut self, sections: &SectionIndex, top_position: usize) {
        self.section_label = sections
            .section_for_position(top_position)
            .and_then(|ordinal| sections.key_at(ordinal));
    }

    pub fn drag_label(&self) -> Option<char> {
        if self.is_dragging() {
            self.section_label
        } else {
            None
        }
    }

    /// Handles a pointer-down event. Returns `true` when the controller
    /// consumed it (a drag began, or one is already in progress).
    pub fn on_pointer_down(&mut self, x: f32, y: f32, now_ms: u64) -> bool {
        match self.state {
            ScrollerState::Visible => {
                let inside_vertical = self.is_point_inside_vertical_thumb(x, y);
                let inside_horizontal = self.is_point_inside_horizontal_thumb(x, y);
                if !(inside_vertical || inside_horizontal) {
                    return false;
                }
                if inside_horizontal {
                    self.drag_axis = Some(Axis::Horizontal);
                    self.horizontal.drag_pos = x;
                } else {
                    self.drag_axis = Some(Axis::Vertical);
                    self.vertical.drag_pos = y;
                }
                self.set_state(ScrollerState::Dragging, now_ms);
                true
            }
            ScrollerState::Dragging => true,
            ScrollerState::Hidden => false,
        }
    }

    /// Handles a pointer-move event while dragging, translating the movement
    /// into a scroll request the host must apply. `None` means the movement
    /// had no effect (dead zone, bounds, degenerate track, or no drag).
    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: u64) -> Option<ScrollBy> {
        if self.state != ScrollerState::Dragging {
            return None;
        }
        self.show(now_ms);
        match self.drag_axis {
            Some(Axis::Vertical) => self.vertical_scroll_to(y),
            Some(Axis::Horizontal) => self.horizontal_scroll_to(x),
            None => None,
        }
    }

    /// Handles a pointer-up event, ending any drag and arming the after-drag
    /// auto-hide delay.
    pub fn on_pointer_up(&mut self, now_ms: u64) {
        if self.state != ScrollerState::Dragging {
            return;
        }
        self.vertical.drag_pos = 0.0;
        self.horizontal.drag_pos = 0.0;
        self.drag_axis = None;
        self.set_state(ScrollerState::Visible, now_ms);
    }

    /// Starts (or resumes) the fade-in. No-op while already fading in or in.
    pub fn show(&mut self, now_ms: u64) {
        if let Some(fade) = self.fade {
            self.fraction = fade.sample(now_ms);
        }
        match self.animation_state {
            AnimationState::Out | AnimationState::FadingOut => {
                fstrace!(from = self.fraction, "FastScroller::show");
                self.animation_state = AnimationState::FadingIn;
                self.fade = Some(Fade::new(
                    self.fraction,
                    1.0,
                    now_ms,
                    self.opts.show_duration_ms,
                ));
                self.needs_redraw = true;
            }
            AnimationState::FadingIn | AnimationState::In => {}
        }
    }

    /// Starts the fade-out over `duration_ms`. Only acts from the
    /// fading-in/in states.
    pub fn hide(&mut self, duration_ms: u64, now_ms: u64) {
        if let Some(fade) = self.fade {
            self.fraction = fade.sample(now_ms);
        }
        match self.animation_state {
            AnimationState::FadingIn | AnimationState::In => {
                fstrace!(from = self.fraction, duration_ms, "FastScroller::hide");
                self.animation_state = AnimationState::FadingOut;
                self.fade = Some(Fade::new(self.fraction, 0.0, now_ms, duration_ms));
                self.needs_redraw = true;
            }
            AnimationState::Out | AnimationState::FadingOut => {}
        }
    }

    /// Advances the auto-hide timer and the fade animation to `now_ms`.
    /// Returns whether a redraw is wanted (equivalent to
    /// [`take_redraw`](Self::take_redraw)).
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let Some(deadline) = self.hide_deadline_ms {
            if now_ms >= deadline {
                self.hide_deadline_ms = None;
                self.hide(self.opts.hide_duration_ms, now_ms);
            }
        }

        if let Some(fade) = self.fade {
            self.fraction = fade.sample(now_ms);
            self.needs_redraw = true;
            if fade.is_done(now_ms) {
                self.fade = None;
                if fade.target() <= 0.0 {
                    self.animation_state = AnimationState::Out;
                    self.set_state(ScrollerState::Hidden, now_ms);
                } else {
                    self.animation_state = AnimationState::In;
                }
            }
        }

        self.take_redraw()
    }

    /// Takes the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Vertical thumb geometry, present whenever the bar should be drawn.
    pub fn vertical_thumb(&self) -> Option<ThumbGeometry> {
        (self.need_vertical && self.animation_state != AnimationState::Out).then(|| {
            ThumbGeometry {
                center: self.vertical.thumb_center,
                length: self.vertical.thumb_len,
                thickness: self.opts.thumb_thickness,
            }
        })
    }

    /// Horizontal thumb geometry, present whenever the bar should be drawn.
    pub fn horizontal_thumb(&self) -> Option<ThumbGeometry> {
        (self.need_horizontal && self.animation_state != AnimationState::Out).then(|| {
            ThumbGeometry {
                center: self.horizontal.thumb_center,
                length: self.horizontal.thumb_len,
                thickness: self.opts.thumb_thickness,
            }
        })
    }

    /// The (min, max) positions the vertical thumb can be dragged across.
    pub fn vertical_track_range(&self) -> (f32, f32) {
        let margin = self.opts.margin as f32;
        (margin, (self.viewport_height as f32 - margin).max(margin))
    }

    /// The (min, max) positions the horizontal thumb can be dragged across.
    pub fn horizontal_track_range(&self) -> (f32, f32) {
        let margin = self.opts.margin as f32;
        (margin, (self.viewport_width as f32 - margin).max(margin))
    }

    /// Hit test against the vertical thumb: a thickness band on the near
    /// edge (left edge when RTL), centered on the thumb vertically.
    pub fn is_point_inside_vertical_thumb(&self, x: f32, y: f32) -> bool {
        let thickness = self.opts.thumb_thickness as f32;
        let on_edge = if self.rtl {
            x <= thickness / 2.0
        } else {
            x >= self.viewport_width as f32 - thickness
        };
        let center = self.vertical.thumb_center as f32;
        let half = self.vertical.thumb_len as f32 / 2.0;
        on_edge && y >= center - half && y <= center + half
    }

    /// Hit test against the horizontal thumb: a thickness band on the bottom
    /// edge, centered on the thumb horizontally.
    pub fn is_point_inside_horizontal_thumb(&self, x: f32, y: f32) -> bool {
        let thickness = self.opts.thumb_thickness as f32;
        let center = self.horizontal.thumb_center as f32;
        let half = self.horizontal.thumb_len as f32 / 2.0;
        y >= self.viewport_height as f32 - thickness && x >= center - half && x <= center + half
    }

    fn set_state(&mut self, state: ScrollerState, now_ms: u64) {
        if state == ScrollerState::Dragging && self.state != ScrollerState::Dragging {
            self.hide_deadline_ms = None;
        }
        if state == ScrollerState::Hidden {
            // Hidden is immediate: the bar is not drawn at all, so any
            // running fade and pending deadline are dropped.
            self.fade = None;
            self.fraction = 0.0;
            self.animation_state = AnimationState::Out;
            self.hide_deadline_ms = None;
            self.needs_redraw = true;
        } else {
            self.show(now_ms);
        }
        if self.state == ScrollerState::Dragging && state == ScrollerState::Visible {
            self.rearm_hide(self.opts.hide_delay_after_dragging_ms, now_ms);
        } else if state == ScrollerState::Visible {
            self.rearm_hide(self.opts.hide_delay_after_visible_ms, now_ms);
        }
        fstrace!(from = ?self.state, to = ?state, "FastScroller::set_state");
        self.state = state;
    }

    /// Arming always replaces any pending deadline.
    fn rearm_hide(&mut self, delay_ms: u64, now_ms: u64) {
        self.hide_deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    fn vertical_scroll_to(&mut self, y: f32) -> Option<ScrollBy> {
        let (min, max) = self.vertical_track_range();
        let y = y.clamp(min, max);
        let moved = y - self.vertical.thumb_center as f32;
        if moved > -DRAG_DEAD_ZONE && moved < DRAG_DEAD_ZONE {
            return None;
        }
        let delta = drag_delta(
            self.vertical.drag_pos,
            y,
            max - min,
            self.vertical.content,
            self.viewport_height as u64,
            self.vertical.offset,
        );
        self.vertical.drag_pos = y;
        (delta != 0).then_some(ScrollBy {
            axis: Axis::Vertical,
            delta,
        })
    }

    fn horizontal_scroll_to(&mut self, x: f32) -> Option<ScrollBy> {
        let (min, max) = self.horizontal_track_range();
        let x = x.clamp(min, max);
        let moved = x - self.horizontal.thumb_center as f32;
        if moved > -DRAG_DEAD_ZONE && moved < DRAG_DEAD_ZONE {
            return None;
        }
        let delta = drag_delta(
            self.horizontal.drag_pos,
            x,
            max - min,
            self.horizontal.content,
            self.viewport_width as u64,
            self.horizontal.offset,
        );
        self.horizontal.drag_pos = x;
        (delta != 0).then_some(ScrollBy {
            axis: Axis::Horizontal,
            delta,
        })
    }
}

/// Maps a drag movement to a scroll-offset delta.
///
/// The movement's fraction of the track length is scaled to the scrollable
/// range; a delta whose resulting absolute offset would leave
/// `[0, content - viewport)` is discarded as a no-op. Degenerate tracks and
/// unscrollable content yield zero rather than faulting.
fn drag_delta(
    old_pos: f32,
    new_pos: f32,
    track_len: f32,
    content: u64,
    viewport: u64,
    offset: u64,
) -> i64 {
    if track_len <= 0.0 {
        return 0;
    }
    let total = content.saturating_sub(viewport);
    if total == 0 {
        return 0;
    }
    let fraction = (new_pos - old_pos) / track_len;
    let delta = (fraction * total as f32) as i64;
    let absolute = offset as i64 + delta;
    if absolute >= 0 && (absolute as u64) < total {
        delta
    } else {
        0
    }
}
