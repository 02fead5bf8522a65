// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Scene: a small retained-mode scene of typed render nodes.
//!
//! This crate is the render-tree end of the three-tree model: widget tree for
//! interaction, box tree for geometry, and a render tree that a renderer walks
//! to paint a frame. It is deliberately small and renderer-agnostic.
//!
//! - Nodes live in a generational arena and are addressed by [`NodeId`].
//! - Each node carries a [`NodeContent`] payload: a plain group, a transform
//!   group, a [`BoxNode`], a [`TextNode`], or a [`GraphicNode`].
//! - Children are kept in a doubly linked sibling list, so moving a node to
//!   either end of its parent's list is O(1). Skinlets that recycle nodes
//!   while scrolling rely on this.
//! - Each node has a local [`kurbo::Affine`]; [`Scene::world_transform`] and
//!   [`Scene::world_bounds`] compose it with its ancestors.
//! - [`Scene::stats`] exposes creation/destruction counters so hosts can
//!   measure how much a pass allocated.
//!
//! ## Not a renderer
//!
//! Nothing here rasterizes. Text is stored as a string plus layout options and
//! a graphic as a handle plus its target rectangle; the renderer that walks the
//! scene decides how to shape, elide, and paint them.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_scene::{BoxNode, Color, NodeContent, NodeKind, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(NodeContent::Group);
//! let row = scene.insert(NodeContent::Box(BoxNode {
//!     rect: Rect::new(0.0, 0.0, 200.0, 20.0),
//!     fill: Color::WHITE,
//!     ..BoxNode::default()
//! }));
//! scene.append_child(root, row);
//!
//! assert_eq!(scene.kind(row), Some(NodeKind::Box));
//! assert_eq!(scene.child_count(root), 1);
//!
//! scene.remove_all_children(root);
//! assert_eq!(scene.stats().alive(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod align;
mod paint;
mod scene;
mod stats;
mod types;
mod util;

pub use align::{Alignment, HAlign, VAlign};
pub use paint::{Color, ColorFilter};
pub use scene::{Children, Scene};
pub use stats::SceneStats;
pub use types::{
    BoxNode, Elide, Graphic, GraphicNode, NodeContent, NodeId, NodeKind, TextNode, TextOptions,
};
