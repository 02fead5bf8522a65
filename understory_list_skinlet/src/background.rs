// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row background boxes and the selection overlay.

use kurbo::{Point, Rect};
use understory_list_window::ViewWindow;
use understory_scene::{BoxNode, NodeContent, NodeId, NodeKind, Scene};

use crate::model::ListViewModel;
use crate::style::{RowStyleKey, StyleHints, Subcontrol, resolve_style};

/// Horizontal band of one row in contents coordinates.
///
/// Rows span the full viewport width and do not scroll horizontally.
pub(crate) fn row_rect<M: ListViewModel + ?Sized>(model: &M, row: usize) -> Rect {
    let view = model.viewport_contents_rect();
    let scroll = model.scroll_position();
    let height = model.row_height();
    let top = view.y0 + row as f64 * height;
    Rect::from_origin_size(Point::new(view.x0 + scroll.x, top), (view.width(), height))
}

/// Rebuilds the children of `container`: one box per row of `window`, then
/// a selection box when the selected row lies in the window.
///
/// Existing box children are reused in order; children past the last one
/// used are destroyed. Returns the selection box.
pub(crate) fn update_background<M: ListViewModel + ?Sized>(
    scene: &mut Scene,
    container: NodeId,
    model: &M,
    window: ViewWindow,
    alternating: bool,
) -> Option<NodeId> {
    let base_states = model.skin_states();
    let mut cursor = scene.first_child(container);
    let mut last_used = None;

    for row in window.rows() {
        // Rows are painted unselected; the overlay marks the selection.
        let key = RowStyleKey::for_row(row, None, base_states);
        let hints = resolve_style(model, Subcontrol::Cell, key, alternating);
        let node = reuse_or_insert(scene, container, cursor, box_for(row_rect(model, row), &hints));
        cursor = scene.next_sibling(node);
        last_used = Some(node);
    }

    let selection = model
        .selected_row()
        .filter(|row| window.contains(*row))
        .map(|row| {
            let key = RowStyleKey::for_row(row, Some(row), base_states);
            let hints = resolve_style(model, Subcontrol::Cell, key, alternating);
            let node =
                reuse_or_insert(scene, container, cursor, box_for(row_rect(model, row), &hints));
            last_used = Some(node);
            node
        });

    scene.remove_children_after(container, last_used);
    selection
}

fn box_for(rect: Rect, hints: &StyleHints) -> NodeContent {
    NodeContent::Box(BoxNode {
        rect,
        fill: hints.color,
        border_color: hints.border_color,
        border: hints.border,
    })
}

/// Writes `content` into `cursor` when it is a box, or links a new box
/// before it (or at the end).
fn reuse_or_insert(
    scene: &mut Scene,
    container: NodeId,
    cursor: Option<NodeId>,
    content: NodeContent,
) -> NodeId {
    match cursor {
        Some(id) if scene.kind(id) == Some(NodeKind::Box) => {
            scene.set_content(id, content);
            id
        }
        Some(id) => {
            let node = scene.insert(content);
            scene.insert_before(node, id);
            node
        }
        None => {
            let node = scene.insert(content);
            scene.append_child(container, node);
            node
        }
    }
}
