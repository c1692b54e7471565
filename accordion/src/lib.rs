//! A headless engine for collapsible, tree-shaped lists.
//!
//! For the draggable fast-scroll thumb, see the `accordion-fastscroll` crate.
//!
//! This crate focuses on the core algorithms behind an accordion list: the
//! depth-first projection of a node forest onto a flat, virtual index space,
//! bidirectional position ↔ node mapping, and an alphabetic section index for
//! jump-scrolling.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to:
//! - own the [`Forest`] and replace it wholesale on content changes
//! - render rows by querying [`Forest::visible_len`] and [`Forest::node_at`]
//! - forward expand/collapse clicks via [`Forest::toggle_expanded`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod flatten;
mod model;
mod section;


pub use flatten::ToggleOutcome;
pub use model::{Forest, Node, NodeId, RowKind};
pub use section::SectionIndex;
