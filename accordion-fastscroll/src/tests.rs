use accordion::{Forest, Node, NodeId, RowKind, SectionIndex};

use crate::{
    AnimationState, Axis, FastScroller, FastScrollerOptions, ScrollBy, ScrollUpdate, ScrollerState,
};

fn vertical_update(offset: u64, content: u64) -> ScrollUpdate {
    ScrollUpdate {
        vertical_offset: offset,
        vertical_content: content,
        ..ScrollUpdate::default()
    }
}

fn horizontal_update(offset: u64, content: u64) -> ScrollUpdate {
    ScrollUpdate {
        horizontal_offset: offset,
        horizontal_content: content,
        ..ScrollUpdate::default()
    }
}

/// 100x100 viewport over 1000px of vertical content: thumb is 10px long with
/// its center at 5 when scrolled to the top.
fn shown_scroller() -> FastScroller {
    let mut scroller = FastScroller::default();
    scroller.set_viewport(100, 100, 0);
    scroller.update_scroll_position(vertical_update(0, 1000), 0);
    scroller
}

fn fruit_sections() -> SectionIndex {
    let forest: Forest = vec![
        Node::new(NodeId(1), "Apple").with_kind(RowKind::Header),
        Node::new(NodeId(2), "Banana").with_kind(RowKind::Header),
    ]
    .into();
    SectionIndex::build(&forest)
}

#[test]
fn unscrollable_content_keeps_the_bar_hidden() {
    let mut scroller = FastScroller::default();
    scroller.set_viewport(100, 100, 0);
    scroller.update_scroll_position(vertical_update(0, 100), 0);

    assert_eq!(scroller.state(), ScrollerState::Hidden);
    assert_eq!(scroller.animation_state(), AnimationState::Out);
    assert!(scroller.vertical_thumb().is_none());
    assert!(scroller.horizontal_thumb().is_none());
}

#[test]
fn short_viewports_never_get_a_bar() {
    let mut scroller = FastScroller::default();
    scroller.set_viewport(100, 40, 0);
    scroller.update_scroll_position(vertical_update(0, 1000), 0);

    assert_eq!(scroller.state(), ScrollerState::Hidden);
    assert!(scroller.vertical_thumb().is_none());
}

#[test]
fn thumb_geometry_tracks_the_offset() {
    let mut scroller = shown_scroller();

    let thumb = scroller.vertical_thumb().unwrap();
    assert_eq!(thumb.length, 10);
    assert_eq!(thumb.center, 5);
    assert_eq!(thumb.thickness, 8);

    scroller.update_scroll_position(vertical_update(450, 1000), 0);
    assert_eq!(scroller.vertical_thumb().unwrap().center, 50);

    scroller.update_scroll_position(vertical_update(900, 1000), 0);
    assert_eq!(scroller.vertical_thumb().unwrap().center, 95);
}

#[test]
fn showing_fades_in_to_full_opacity() {
    let mut scroller = shown_scroller();
    assert_eq!(scroller.state(), ScrollerState::Visible);
    assert_eq!(scroller.animation_state(), AnimationState::FadingIn);

    assert!(scroller.tick(250));
    assert_eq!(scroller.thumb_alpha(), 127);

    scroller.tick(500);
    assert_eq!(scroller.thumb_alpha(), 255);
    assert_eq!(scroller.animation_state(), AnimationState::In);
}

#[test]
fn bar_auto_hides_after_the_visible_delay() {
    let mut scroller = shown_scroller();
    scroller.tick(500);
    assert_eq!(scroller.animation_state(), AnimationState::In);

    // The hide deadline was armed when the bar became visible at t=0.
    scroller.tick(1500);
    assert_eq!(scroller.animation_state(), AnimationState::FadingOut);

    scroller.tick(1750);
    assert_eq!(scroller.thumb_alpha(), 127);

    scroller.tick(2000);
    assert_eq!(scroller.state(), ScrollerState::Hidden);
    assert_eq!(scroller.animation_state(), AnimationState::Out);
    assert_eq!(scroller.thumb_alpha(), 0);
    assert!(scroller.vertical_thumb().is_none());
}

#[test]
fn scroll_updates_rearm_the_hide_deadline() {
    let mut scroller = shown_scroller();
    scroller.update_scroll_position(vertical_update(100, 1000), 1000);

    scroller.tick(1600);
    assert_ne!(scroller.animation_state(), AnimationState::FadingOut);

    scroller.tick(2500);
    assert_eq!(scroller.animation_state(), AnimationState::FadingOut);
}

#[test]
fn pointer_down_on_the_thumb_starts_a_drag() {
    let mut scroller = shown_scroller();
    scroller.tick(500);

    assert!(scroller.on_pointer_down(96.0, 5.0, 600));
    assert_eq!(scroller.state(), ScrollerState::Dragging);

    // Dragging cancels the pending auto-hide.
    scroller.tick(5000);
    assert_eq!(scroller.state(), ScrollerState::Dragging);
    assert_eq!(scroller.animation_state(), AnimationState::In);
}

#[test]
fn pointer_down_away_from_the_thumb_is_not_consumed() {
    let mut scroller = shown_scroller();

    // Off the edge band.
    assert!(!scroller.on_pointer_down(50.0, 5.0, 0));
    // On the edge band but past the thumb.
    assert!(!scroller.on_pointer_down(96.0, 50.0, 0));
    assert_eq!(scroller.state(), ScrollerState::Visible);
}

#[test]
fn dragging_reports_proportional_scroll_deltas() {
    let mut scroller = shown_scroller();
    assert!(scroller.on_pointer_down(96.0, 5.0, 0));

    // 20px over a 100px track against 900px of scrollable range.
    let scroll = scroller.on_pointer_move(96.0, 25.0, 16);
    assert_eq!(
        scroll,
        Some(ScrollBy {
            axis: Axis::Vertical,
            delta: 180,
        })
    );

    // The host applies the delta and reports back before the next move.
    scroller.update_scroll_position(vertical_update(180, 1000), 16);
    let scroll = scroller.on_pointer_move(96.0, 45.0, 32);
    assert_eq!(
        scroll,
        Some(ScrollBy {
            axis: Axis::Vertical,
            delta: 180,
        })
    );
}

#[test]
fn small_thumb_movements_stay_in_the_dead_zone() {
    let mut scroller = shown_scroller();
    assert!(scroller.on_pointer_down(96.0, 5.0, 0));

    assert_eq!(scroller.on_pointer_move(96.0, 6.0, 16), None);

    // The dead-zone move did not advance the drag anchor, so the next real
    // move is measured from the original grab point.
    let scroll = scroller.on_pointer_move(96.0, 26.0, 32);
    assert_eq!(
        scroll,
        Some(ScrollBy {
            axis: Axis::Vertical,
            delta: 189,
        })
    );
}

#[test]
fn drags_past_the_bounds_produce_no_scroll() {
    let mut scroller = shown_scroller();
    assert!(scroller.on_pointer_down(96.0, 5.0, 0));
    // Pulled far above the track while already at offset 0.
    assert_eq!(scroller.on_pointer_move(96.0, -50.0, 16), None);

    let mut scroller = FastScroller::default();
    scroller.set_viewport(100, 100, 0);
    scroller.update_scroll_position(vertical_update(890, 1000), 0);
    assert_eq!(scroller.vertical_thumb().unwrap().center, 94);
    assert!(scroller.on_pointer_down(96.0, 94.0, 0));
    // A drag that would land past the end of the range is discarded.
    assert_eq!(scroller.on_pointer_move(96.0, 200.0, 16), None);
}

#[test]
fn releasing_the_thumb_arms_the_after_drag_delay() {
    let mut scroller = shown_scroller();
    scroller.tick(500);
    assert!(scroller.on_pointer_down(96.0, 5.0, 600));
    scroller.on_pointer_up(700);
    assert_eq!(scroller.state(), ScrollerState::Visible);

    scroller.tick(1800);
    assert_ne!(scroller.animation_state(), AnimationState::FadingOut);

    // 1200ms after the release.
    scroller.tick(1900);
    assert_eq!(scroller.animation_state(), AnimationState::FadingOut);
}

#[test]
fn horizontal_drags_run_along_the_bottom_edge() {
    let mut scroller = FastScroller::default();
    scroller.set_viewport(100, 100, 0);
    scroller.update_scroll_position(horizontal_update(0, 1000), 0);

    let thumb = scroller.horizontal_thumb().unwrap();
    assert_eq!(thumb.length, 10);
    assert_eq!(thumb.center, 5);

    assert!(scroller.on_pointer_down(5.0, 96.0, 0));
    let scroll = scroller.on_pointer_move(25.0, 96.0, 16);
    assert_eq!(
        scroll,
        Some(ScrollBy {
            axis: Axis::Horizontal,
            delta: 180,
        })
    );
}

#[test]
fn rtl_moves_the_vertical_thumb_to_the_left_edge() {
    let mut scroller = shown_scroller();
    scroller.set_rtl(true);

    assert!(scroller.on_pointer_down(2.0, 5.0, 0));
    assert_eq!(scroller.state(), ScrollerState::Dragging);

    let mut scroller = shown_scroller();
    scroller.set_rtl(true);
    assert!(!scroller.on_pointer_down(96.0, 5.0, 0));
}

#[test]
fn resizing_hides_the_bar_until_the_next_update() {
    let mut scroller = shown_scroller();
    scroller.tick(500);

    scroller.set_viewport(100, 200, 1000);
    assert_eq!(scroller.state(), ScrollerState::Hidden);
    assert_eq!(scroller.animation_state(), AnimationState::Out);
    assert!(scroller.vertical_thumb().is_none());

    scroller.update_scroll_position(vertical_update(0, 1000), 1100);
    assert_eq!(scroller.state(), ScrollerState::Visible);
    assert_eq!(scroller.animation_state(), AnimationState::FadingIn);
}

#[test]
fn drag_label_surfaces_the_top_section_only_while_dragging() {
    let sections = fruit_sections();
    let mut scroller = shown_scroller();

    scroller.update_section_label(&sections, 0);
    assert_eq!(scroller.drag_label(), None);

    assert!(scroller.on_pointer_down(96.0, 5.0, 0));
    assert_eq!(scroller.drag_label(), Some('A'));

    scroller.update_section_label(&sections, 1);
    assert_eq!(scroller.drag_label(), Some('B'));

    scroller.on_pointer_up(100);
    assert_eq!(scroller.drag_label(), None);
}

#[test]
fn zero_length_tracks_produce_no_scroll() {
    let mut scroller = FastScroller::new(FastScrollerOptions::new().with_margin(60));
    scroller.set_viewport(100, 100, 0);
    scroller.update_scroll_position(vertical_update(0, 1000), 0);

    assert!(scroller.on_pointer_down(96.0, 5.0, 0));
    assert_eq!(scroller.on_pointer_move(96.0, 80.0, 16), None);
}

#[test]
fn fades_resume_from_the_current_fraction() {
    let mut scroller = shown_scroller();
    scroller.tick(250);
    assert_eq!(scroller.thumb_alpha(), 127);

    scroller.hide(500, 250);
    assert_eq!(scroller.animation_state(), AnimationState::FadingOut);
    scroller.tick(500);
    assert_eq!(scroller.thumb_alpha(), 63);

    scroller.show(500);
    assert_eq!(scroller.animation_state(), AnimationState::FadingIn);
    scroller.tick(750);
    assert_eq!(scroller.thumb_alpha(), 159);
}

#[test]
fn take_redraw_is_consumed_once() {
    let mut scroller = shown_scroller();
    assert!(scroller.take_redraw());
    assert!(!scroller.take_redraw());

    assert!(scroller.tick(250));
    assert!(!scroller.take_redraw());
}
