// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Updating the scene nodes of a single cell.

use kurbo::{Point, Rect, Size};
use understory_scene::{GraphicNode, NodeContent, NodeId, NodeKind, Scene, TextNode};

use crate::content::{CellContent, ContentKind, GraphicContent, ResolvedCell, TextContent};

/// The nodes of one materialized cell.
///
/// A cell is a transform `wrapper` that positions it, with at most one
/// content child. The wrapper is kept for as long as the cell is recycled;
/// the content node is replaced only when the content kind changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellNode {
    wrapper: NodeId,
    content: Option<NodeId>,
    kind: ContentKind,
    slot: Option<(usize, usize)>,
}

impl CellNode {
    /// Creates the wrapper of an empty, unassigned cell. The wrapper is
    /// detached.
    pub fn new(scene: &mut Scene) -> Self {
        Self {
            wrapper: scene.insert(NodeContent::Transform),
            content: None,
            kind: ContentKind::Unset,
            slot: None,
        }
    }

    /// The positioning node. This is the node linked into the cell container.
    #[must_use]
    pub const fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    /// The content child of the wrapper, if any.
    #[must_use]
    pub const fn content(&self) -> Option<NodeId> {
        self.content
    }

    /// The kind of the content child.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        self.kind
    }

    /// The (row, column) the cell was last updated for.
    #[must_use]
    pub const fn slot(&self) -> Option<(usize, usize)> {
        self.slot
    }

    /// Brings the cell's nodes in line with `cell`, laid out in a box of `size`
    /// at the wrapper's origin.
    ///
    /// Content of the same kind is updated in place. A change of kind drops
    /// the old content node and creates one of the new kind under the same
    /// wrapper. Unsupported values leave the cell without content.
    pub fn update(&mut self, scene: &mut Scene, cell: &ResolvedCell, size: Size) {
        debug_assert_eq!(
            scene.kind(self.wrapper),
            Some(NodeKind::Transform),
            "cell wrapper must be a live transform node"
        );
        let rect = Rect::from_origin_size(Point::ZERO, size);
        match &cell.content {
            CellContent::Text(text) => {
                if !self.update_text_in_place(scene, text, rect) {
                    self.replace_content(scene, ContentKind::Text, text_payload(text, rect));
                }
            }
            CellContent::Graphic(graphic) => {
                let payload = graphic_payload(graphic, rect);
                match self.content_of_kind(ContentKind::Graphic) {
                    Some(id) => scene.set_content(id, payload),
                    None => self.replace_content(scene, ContentKind::Graphic, payload),
                }
            }
            CellContent::Unsupported(type_name) => {
                log::warn!(
                    "list view cell ({}, {}): unsupported value type `{}`, rendering empty",
                    cell.row,
                    cell.col,
                    type_name
                );
                self.clear_content(scene);
            }
        }
        self.slot = Some((cell.row, cell.col));
    }

    fn content_of_kind(&self, kind: ContentKind) -> Option<NodeId> {
        self.content.filter(|_| self.kind == kind)
    }

    /// Rewrites an existing text node without reallocating an unchanged string.
    fn update_text_in_place(&self, scene: &mut Scene, text: &TextContent, rect: Rect) -> bool {
        let Some(id) = self.content_of_kind(ContentKind::Text) else {
            return false;
        };
        let Some(NodeContent::Text(node)) = scene.content_mut(id) else {
            return false;
        };
        node.rect = rect;
        if node.text != text.text {
            node.text.clone_from(&text.text);
        }
        node.color = text.color;
        node.alignment = text.alignment;
        node.options = text.options;
        true
    }

    fn replace_content(&mut self, scene: &mut Scene, kind: ContentKind, payload: NodeContent) {
        self.clear_content(scene);
        let id = scene.insert(payload);
        scene.append_child(self.wrapper, id);
        self.content = Some(id);
        self.kind = kind;
    }

    fn clear_content(&mut self, scene: &mut Scene) {
        if let Some(id) = self.content.take() {
            scene.remove(id);
        }
        self.kind = ContentKind::Unset;
    }
}

fn text_payload(text: &TextContent, rect: Rect) -> NodeContent {
    NodeContent::Text(TextNode {
        rect,
        text: text.text.clone(),
        color: text.color,
        alignment: text.alignment,
        options: text.options,
    })
}

fn graphic_payload(graphic: &GraphicContent, rect: Rect) -> NodeContent {
    NodeContent::Graphic(GraphicNode {
        rect: graphic.alignment.fit(graphic.graphic.intrinsic_size, rect),
        graphic: graphic.graphic,
        filter: graphic.filter.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use understory_scene::{Alignment, Color, ColorFilter, Graphic, TextOptions};

    fn text_cell(row: usize, col: usize, text: &str) -> ResolvedCell {
        ResolvedCell {
            row,
            col,
            content: CellContent::Text(TextContent {
                text: String::from(text),
                color: Color::BLACK,
                alignment: Alignment::LEFT_CENTER,
                options: TextOptions::default(),
            }),
        }
    }

    fn graphic_cell(row: usize, col: usize) -> ResolvedCell {
        ResolvedCell {
            row,
            col,
            content: CellContent::Graphic(GraphicContent {
                graphic: Graphic::new(1, Size::new(10.0, 10.0)),
                filter: ColorFilter::new(),
                alignment: Alignment::CENTER,
            }),
        }
    }

    const SIZE: Size = Size::new(80.0, 20.0);

    #[test]
    fn same_kind_updates_in_place() {
        let mut scene = Scene::new();
        let mut cell = CellNode::new(&mut scene);
        cell.update(&mut scene, &text_cell(0, 0, "a"), SIZE);
        let content = cell.content();
        let before = scene.stats();

        cell.update(&mut scene, &text_cell(5, 0, "b"), SIZE);

        assert_eq!(cell.content(), content);
        assert_eq!(scene.stats().since(before).created, 0);
        assert_eq!(cell.slot(), Some((5, 0)));
        let Some(NodeContent::Text(node)) = cell.content().and_then(|id| scene.content(id)) else {
            panic!("expected a text node");
        };
        assert_eq!(node.text, "b");
        assert_eq!(node.rect, Rect::new(0.0, 0.0, 80.0, 20.0));
    }

    #[test]
    fn kind_change_replaces_content_but_keeps_wrapper() {
        let mut scene = Scene::new();
        let mut cell = CellNode::new(&mut scene);
        cell.update(&mut scene, &text_cell(0, 0, "a"), SIZE);
        let wrapper = cell.wrapper();
        let text_node = cell.content();

        cell.update(&mut scene, &graphic_cell(0, 0), SIZE);

        assert_eq!(cell.wrapper(), wrapper);
        assert_eq!(cell.kind(), ContentKind::Graphic);
        assert!(!scene.is_alive(text_node.unwrap()));
        let graphic = cell.content().unwrap();
        assert_eq!(scene.kind(graphic), Some(NodeKind::Graphic));
        assert_eq!(scene.parent_of(graphic), Some(wrapper));
        assert_eq!(scene.child_count(wrapper), 1);
        // 10x10 fitted into 80x20, centered.
        assert_eq!(
            scene.content(graphic).and_then(NodeContent::local_bounds),
            Some(Rect::new(30.0, 0.0, 50.0, 20.0))
        );
    }

    #[test]
    fn graphic_to_text_replaces_content_but_keeps_wrapper() {
        let mut scene = Scene::new();
        let mut cell = CellNode::new(&mut scene);
        cell.update(&mut scene, &graphic_cell(0, 0), SIZE);
        let wrapper = cell.wrapper();
        let graphic_node = cell.content().unwrap();

        cell.update(&mut scene, &text_cell(0, 0, "back to text"), SIZE);

        assert_eq!(cell.wrapper(), wrapper);
        assert_eq!(cell.kind(), ContentKind::Text);
        assert!(!scene.is_alive(graphic_node));
        assert_eq!(scene.child_count(wrapper), 1);
        let Some(NodeContent::Text(node)) = cell.content().and_then(|id| scene.content(id)) else {
            panic!("expected a text node");
        };
        assert_eq!(node.text, "back to text");
        assert_eq!(node.rect, Rect::new(0.0, 0.0, 80.0, 20.0));
    }

    #[test]
    fn unsupported_value_leaves_cell_empty() {
        let mut scene = Scene::new();
        let mut cell = CellNode::new(&mut scene);
        cell.update(&mut scene, &text_cell(0, 0, "a"), SIZE);

        let unsupported = ResolvedCell {
            row: 0,
            col: 0,
            content: CellContent::Unsupported("Uuid"),
        };
        cell.update(&mut scene, &unsupported, SIZE);

        assert_eq!(cell.content(), None);
        assert_eq!(cell.kind(), ContentKind::Unset);
        assert!(scene.is_alive(cell.wrapper()));
        assert_eq!(scene.child_count(cell.wrapper()), 0);
    }
}
