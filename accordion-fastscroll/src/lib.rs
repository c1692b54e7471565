//! Fast-scroll thumb controller for the `accordion` crate.
//!
//! The `accordion` crate is UI-agnostic and focuses on the flat projection of
//! a collapsible tree. This crate provides the companion scrollbar state
//! machine: thumb geometry, show/hide fading, auto-hide timing, and the
//! translation of pointer drags into scroll-offset deltas.
//!
//! It holds no UI objects and owns no clock. The host:
//! - reports viewport size and scroll facts ([`FastScroller::set_viewport`],
//!   [`FastScroller::update_scroll_position`])
//! - forwards raw pointer events ([`FastScroller::on_pointer_down`] /
//!   [`FastScroller::on_pointer_move`] / [`FastScroller::on_pointer_up`])
//! - advances time by calling [`FastScroller::tick`] with a monotonic
//!   millisecond clock, applying any returned [`ScrollBy`] to its viewport
//!
//! This keeps the controller a deterministic state machine that tests drive
//! with explicit time-advance calls.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod fade;
mod options;

#[cfg(test)]
mod tests;

pub use controller::{
    AnimationState, Axis, FastScroller, ScrollBy, ScrollUpdate, ScrollerState, ThumbGeometry,
};
pub use fade::Fade;
pub use options::FastScrollerOptions;
