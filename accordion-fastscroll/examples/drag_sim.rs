//! Drives the fast-scroll controller through a simulated drag session with a
//! hand-advanced millisecond clock.
//!
//! Run with: cargo run --example drag_sim

use accordion::{Forest, Node, NodeId, RowKind, SectionIndex};
use accordion_fastscroll::{FastScroller, ScrollUpdate};

fn report(scroller: &FastScroller, now_ms: u64) {
    let thumb = scroller
        .vertical_thumb()
        .map(|t| format!("center={} len={}", t.center, t.length))
        .unwrap_or_else(|| "none".into());
    println!(
        "t={now_ms:4}ms state={:?} anim={:?} alpha={:3} thumb={thumb}",
        scroller.state(),
        scroller.animation_state(),
        scroller.thumb_alpha(),
    );
}

fn main() {
    let forest: Forest = vec![
        Node::new(NodeId(1), "Apple").with_kind(RowKind::Header),
        Node::new(NodeId(2), "Mango").with_kind(RowKind::Header),
        Node::new(NodeId(3), "Zucchini").with_kind(RowKind::Header),
    ]
    .into();
    let sections = SectionIndex::build(&forest);

    let mut scroller = FastScroller::default();
    scroller.set_viewport(360, 640, 0);

    // 640px viewport over 6400px of content.
    let mut offset: u64 = 0;
    let content: u64 = 6400;
    let update = |offset| ScrollUpdate {
        vertical_offset: offset,
        vertical_content: content,
        ..ScrollUpdate::default()
    };

    scroller.update_scroll_position(update(offset), 0);
    scroller.update_section_label(&sections, 0);
    report(&scroller, 0);

    // Let the fade-in play out.
    for now in [100, 250, 500] {
        scroller.tick(now);
        report(&scroller, now);
    }

    // Grab the thumb on the right edge and drag it down the track.
    let grabbed = scroller.on_pointer_down(356.0, 32.0, 600);
    println!("pointer down consumed: {grabbed}");
    for (i, y) in [96.0_f32, 160.0, 224.0].into_iter().enumerate() {
        let now = 620 + i as u64 * 20;
        if let Some(scroll) = scroller.on_pointer_move(356.0, y, now) {
            offset = offset.saturating_add_signed(scroll.delta);
            scroller.update_scroll_position(update(offset), now);
            println!(
                "drag to y={y}: scroll by {} -> offset {offset} (label {:?})",
                scroll.delta,
                scroller.drag_label()
            );
        }
    }

    // Release and watch the after-drag auto-hide run down.
    scroller.on_pointer_up(700);
    for now in [1000, 1900, 2150, 2400] {
        scroller.tick(now);
        report(&scroller, now);
    }
}
