// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory List Window: viewport window tracking for virtualized lists.
//!
//! This crate answers one question for a scrollable list of uniform rows and
//! a set of columns: *which rows and columns should exist as nodes right now,
//! and how does that relate to what existed before?*
//!
//! - [`RowExtents`]: uniform row heights with offset → row lookups and
//!   index-aligned scrolling via [`ScrollAlign`].
//! - [`ViewWindow`]: the inclusive row range currently materialized, or empty.
//! - [`compute_window`]: rows for a scroll offset and viewport height.
//! - [`ColumnSpan`] and [`visible_columns`]: the column range to materialize.
//! - [`WindowTracker`]: remembers the last materialized window and describes
//!   the next one as a [`WindowTransition`] (scroll direction and how many
//!   rows can be shifted from one end of a node list to the other).
//!
//! This crate does not know about widgets or
//! scene nodes. Hosts own the nodes and use the transition to decide which to
//! keep, move, or discard.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_list_window::{ColumnSpan, ViewWindow, WindowTracker, compute_window};
//!
//! // 100 rows, each 20 logical pixels tall, seen through a 100px viewport.
//! let mut tracker = WindowTracker::new();
//! let first = compute_window(0.0, 100.0, 20.0, 100, 1);
//! assert_eq!(first, ViewWindow::new(0, 5));
//! tracker.commit(first, ColumnSpan::all(1));
//!
//! // Scrolling down by two rows: the two rows leaving at the top can be
//! // moved to the tail and reused for the two rows entering at the bottom.
//! let next = compute_window(40.0, 100.0, 20.0, 100, 1);
//! let transition = tracker.transition(next, ColumnSpan::all(1));
//! assert!(transition.forward);
//! assert_eq!(transition.shift_rows, 2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod columns;
mod extent;
mod scroll;
mod tracker;
mod window;

pub use columns::{ColumnSpan, visible_columns};
pub use extent::RowExtents;
pub use scroll::ScrollAlign;
pub use tracker::{WindowTracker, WindowTransition, compute_window};
pub use window::ViewWindow;
