// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, node kinds, and node payloads.

use alloc::string::String;
use kurbo::{Insets, Rect, Size};

use crate::align::Alignment;
use crate::paint::{Color, ColorFilter};

/// Identifier for a node in the scene (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a scene node, derived from its [`NodeContent`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// Plain grouping node without paint.
    Group,
    /// Grouping node whose transform is meaningful to its subtree.
    Transform,
    /// Filled and optionally bordered rectangle.
    Box,
    /// A run of text laid out inside a rectangle.
    Text,
    /// A vector graphic scaled into a rectangle.
    Graphic,
}

/// Payload of a scene node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeContent {
    /// See [`NodeKind::Group`].
    Group,
    /// See [`NodeKind::Transform`].
    Transform,
    /// See [`NodeKind::Box`].
    Box(BoxNode),
    /// See [`NodeKind::Text`].
    Text(TextNode),
    /// See [`NodeKind::Graphic`].
    Graphic(GraphicNode),
}

impl NodeContent {
    /// Returns the [`NodeKind`] of this payload.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Group => NodeKind::Group,
            Self::Transform => NodeKind::Transform,
            Self::Box(_) => NodeKind::Box,
            Self::Text(_) => NodeKind::Text,
            Self::Graphic(_) => NodeKind::Graphic,
        }
    }

    /// Local bounds of painted content, or `None` for grouping nodes.
    #[must_use]
    pub fn local_bounds(&self) -> Option<Rect> {
        match self {
            Self::Group | Self::Transform => None,
            Self::Box(b) => Some(b.rect),
            Self::Text(t) => Some(t.rect),
            Self::Graphic(g) => Some(g.rect),
        }
    }
}

/// A filled rectangle with per-edge border widths.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxNode {
    /// Outer rectangle in local coordinates.
    pub rect: Rect,
    /// Fill color.
    pub fill: Color,
    /// Border color, used for every edge with a non-zero width.
    pub border_color: Color,
    /// Border widths per edge.
    pub border: Insets,
}

impl Default for BoxNode {
    fn default() -> Self {
        Self {
            rect: Rect::ZERO,
            fill: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            border: Insets::ZERO,
        }
    }
}

/// How text that does not fit its rectangle is shortened.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Elide {
    /// Text is clipped, never shortened.
    None,
    /// Leading characters are replaced by an ellipsis.
    Left,
    /// Characters in the middle are replaced by an ellipsis.
    Middle,
    /// Trailing characters are replaced by an ellipsis.
    #[default]
    Right,
}

/// Text layout options applied by the renderer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TextOptions {
    /// Elision policy for text wider than its rectangle.
    pub elide: Elide,
    /// Whether text may wrap onto more lines. List cells default to no wrapping.
    pub wrap: bool,
}

/// Text laid out inside a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Layout rectangle in local coordinates.
    pub rect: Rect,
    /// The text itself.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Placement of the text inside `rect`.
    pub alignment: Alignment,
    /// Eliding and wrapping.
    pub options: TextOptions,
}

/// Handle to a vector graphic owned by the host.
///
/// The scene only needs the graphic's identity and its intrinsic size, which
/// is used to scale it into a cell while keeping its aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Graphic {
    /// Host-defined identity of the graphic.
    pub key: u64,
    /// Size the graphic was authored at.
    pub intrinsic_size: Size,
}

impl Graphic {
    /// Creates a graphic handle.
    #[must_use]
    pub const fn new(key: u64, intrinsic_size: Size) -> Self {
        Self {
            key,
            intrinsic_size,
        }
    }
}

/// A graphic placed into a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicNode {
    /// Target rectangle in local coordinates, already scaled and aligned.
    pub rect: Rect,
    /// The graphic to draw.
    pub graphic: Graphic,
    /// Color substitutions applied while rendering.
    pub filter: ColorFilter,
}
