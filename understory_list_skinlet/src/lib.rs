// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory List Skinlet: incremental scene nodes for a scrolling list view.
//!
//! A list view shows a grid of uniform-height rows and fixed-width columns,
//! usually far more rows than fit the viewport. This crate turns the view's
//! state, as exposed by a [`ListViewModel`], into nodes of an
//! [`understory_scene::Scene`] and keeps them up to date frame after frame
//! without rebuilding them.
//!
//! ## Pieces
//!
//! - [`ListViewSkinlet`] is the entry point. [`ListViewSkinlet::update_contents_node`]
//!   lays out a root transform that undoes the scroll offset, a background
//!   group with one box per visible row plus the selection box, and a
//!   foreground group with one wrapper per visible cell.
//! - [`CellRecycler`] owns the foreground cells. When the window moves it
//!   shifts rows that left the window to the end where rows enter, so a
//!   one-row scroll rewrites one row of cells and allocates nothing.
//! - [`CellNode`] tags each wrapper with the [`ContentKind`] of its content
//!   child; content of the same kind is updated in place, other kinds are
//!   swapped under the same wrapper.
//! - [`resolve_cell`] and [`resolve_style`] compute what a cell shows from the
//!   model value and the row's [`RowStyleKey`], without touching the model.
//!
//! Window computation and direction detection live in
//! [`understory_list_window`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_list_skinlet::{
//!     Aspect, CellValue, ListViewModel, ListViewSkinlet, StyleHints, StyleSource, StyleTable,
//! };
//! use understory_scene::Scene;
//!
//! struct Names {
//!     names: Vec<String>,
//!     scroll_y: f64,
//!     style: StyleTable,
//! }
//!
//! impl StyleSource for Names {
//!     fn style_hint(&self, aspect: Aspect) -> StyleHints {
//!         self.style.resolve(aspect)
//!     }
//! }
//!
//! impl ListViewModel for Names {
//!     fn row_count(&self) -> usize { self.names.len() }
//!     fn column_count(&self) -> usize { 1 }
//!     fn row_height(&self) -> f64 { 20.0 }
//!     fn column_width(&self, _col: usize) -> f64 { 200.0 }
//!     fn scroll_position(&self) -> Point { Point::new(0.0, self.scroll_y) }
//!     fn viewport_contents_rect(&self) -> Rect { Rect::new(0.0, 0.0, 200.0, 100.0) }
//!     fn value_at(&self, row: usize, _col: usize) -> CellValue {
//!         CellValue::Text(self.names[row].clone())
//!     }
//!     fn selected_row(&self) -> Option<usize> { None }
//! }
//!
//! let mut model = Names {
//!     names: (0..100).map(|i| format!("name {i}")).collect(),
//!     scroll_y: 0.0,
//!     style: StyleTable::new(),
//! };
//! let skinlet = ListViewSkinlet::new();
//! let mut scene = Scene::new();
//!
//! let node = skinlet.update_contents_node(&mut scene, &model, None);
//! assert_eq!(node.cells().len(), 6);
//!
//! // Scroll by two rows: the cells are shifted, not reallocated.
//! model.scroll_y = 40.0;
//! let node = skinlet.update_contents_node(&mut scene, &model, Some(node));
//! assert_eq!(node.window().rows(), 2..=7);
//! assert_eq!(node.last_stats().nodes_created, 0);
//! assert_eq!(node.last_stats().retained, 4);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` in `kurbo` and `understory_scene`.
//! - `libm`: `no_std` float math for `kurbo`.
//!
//! Unsupported cell values are reported through the [`log`] facade.

#![no_std]

extern crate alloc;

mod background;
mod cell;
mod content;
mod model;
mod recycler;
mod skinlet;
mod style;

#[cfg(test)]
mod testing;

pub use cell::CellNode;
pub use content::{
    CellContent, ContentKind, GraphicContent, ResolvedCell, RowStyles, TextContent, resolve_cell,
};
pub use model::{CellValue, ListViewModel};
pub use recycler::{CellGeometry, CellRecycler, ReconcileStats};
pub use skinlet::{ColumnPolicy, ListViewNode, ListViewSkinlet, SkinletConfig};
pub use style::{
    Aspect, Parity, RowStyleKey, SkinStates, StyleHints, StyleSource, StyleTable, Subcontrol,
    resolve_style,
};
