// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental reconciliation of cell nodes against a view window.

use alloc::collections::VecDeque;
use kurbo::{Affine, Insets, Point, Size};
use understory_list_window::{ColumnSpan, ViewWindow, WindowTracker, WindowTransition};
use understory_scene::{NodeId, Scene};

use crate::cell::CellNode;
use crate::content::ResolvedCell;

/// Geometry shared by every cell of a pass.
#[derive(Clone, Copy, Debug)]
pub struct CellGeometry<'a> {
    /// Top-left corner of row 0, column 0.
    pub origin: Point,
    /// Uniform row height.
    pub row_height: f64,
    /// Width of every column of the model, not only the visible ones.
    pub column_widths: &'a [f64],
    /// Cell padding; content is laid out inside it.
    pub padding: Insets,
}

impl CellGeometry<'_> {
    /// Size of the content box of a cell in `col`.
    #[must_use]
    pub fn cell_size(&self, col: usize) -> Size {
        let width = self.column_widths.get(col).copied().unwrap_or(0.0);
        Size::new(
            (width - self.padding.x0 - self.padding.x1).max(0.0),
            (self.row_height - self.padding.y0 - self.padding.y1).max(0.0),
        )
    }

    fn column_offset(&self, col: usize) -> f64 {
        self.column_widths.iter().take(col).sum()
    }
}

/// What a reconciliation pass did.
///
/// The slot counters partition the windows: `retained + materialized`
/// equals the cell count of the new window and `retained + retired` that of
/// the previous one. The node counters are taken from the scene and cover
/// wrappers as well as content nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Cells that show the same (row, column) as before the pass.
    pub retained: usize,
    /// Cells that show a (row, column) they did not show before the pass.
    pub materialized: usize,
    /// Slots of the previous window that are not retained.
    pub retired: usize,
    /// Wrappers moved from one end of the sibling list to the other.
    pub shifted: usize,
    /// Scene nodes created.
    pub nodes_created: u64,
    /// Scene nodes destroyed.
    pub nodes_destroyed: u64,
}

/// Owns the cell nodes under one container node and keeps them in sync with
/// a moving window.
///
/// The recycler mirrors the container's children in a deque of
/// [`CellNode`]s, in row-major order of the committed window. A pass:
///
/// 1. moves whole rows that scrolled out on one side to the other end of the
///    list, so they can be reused for rows that scrolled in;
/// 2. destroys surplus cells at the end the pass walks away from;
/// 3. walks the window, forward from the head or backward from the tail,
///    updating existing cells and adding new ones at that end;
/// 4. positions every wrapper.
///
/// Only the cells of rows entering the window are rewritten with new
/// slots; rows that stay keep theirs.
#[derive(Debug)]
pub struct CellRecycler {
    container: NodeId,
    cells: VecDeque<CellNode>,
    tracker: WindowTracker,
}

impl CellRecycler {
    /// Creates a recycler managing the children of `container`.
    ///
    /// `container` is expected to have no children.
    #[must_use]
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            cells: VecDeque::new(),
            tracker: WindowTracker::new(),
        }
    }

    /// The node whose children are the cell wrappers.
    #[must_use]
    pub const fn container(&self) -> NodeId {
        self.container
    }

    /// The committed window.
    #[must_use]
    pub const fn window(&self) -> ViewWindow {
        self.tracker.window()
    }

    /// The committed column span.
    #[must_use]
    pub const fn columns(&self) -> ColumnSpan {
        self.tracker.columns()
    }

    /// Number of materialized cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates the cells in row-major window order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &CellNode> + '_ {
        self.cells.iter()
    }

    /// The cell showing (`row`, `col`), if it is materialized.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&CellNode> {
        let window = self.tracker.window();
        let columns = self.tracker.columns();
        let (row_min, col_min) = (window.row_min()?, columns.first()?);
        if !window.contains(row) || !columns.range().contains(&col) {
            return None;
        }
        self.cells.get((row - row_min) * columns.len() + (col - col_min))
    }

    /// Destroys every cell and forgets the committed window.
    pub fn clear(&mut self, scene: &mut Scene) {
        scene.remove_all_children(self.container);
        self.cells.clear();
        self.tracker.invalidate();
    }

    /// Reconciles the cells with `window` × `columns`.
    ///
    /// `resolve` is called once per cell of the window, row by row, in the
    /// order the pass walks. An empty window or column span clears all cells.
    pub fn reconcile<F>(
        &mut self,
        scene: &mut Scene,
        window: ViewWindow,
        columns: ColumnSpan,
        geometry: &CellGeometry<'_>,
        mut resolve: F,
    ) -> ReconcileStats
    where
        F: FnMut(usize, usize) -> ResolvedCell,
    {
        let before = scene.stats();
        let previous_count = self.cells.len();
        let previous_slots = self.tracker.node_count();

        let (Some(row_min), Some(row_max), Some(col_min), Some(col_max)) = (
            window.row_min(),
            window.row_max(),
            columns.first(),
            columns.last(),
        ) else {
            self.clear(scene);
            let delta = scene.stats().since(before);
            return ReconcileStats {
                retired: previous_count,
                nodes_destroyed: delta.destroyed,
                ..ReconcileStats::default()
            };
        };

        let transition = self.tracker.transition(window, columns);
        let shifted = self.shift(scene, &transition, columns.len());

        let target = window.cell_count(columns.len());
        let obsolete = self.cells.len().saturating_sub(target);
        for _ in 0..obsolete {
            let cell = if transition.forward {
                self.cells.pop_back()
            } else {
                self.cells.pop_front()
            };
            if let Some(cell) = cell {
                scene.remove(cell.wrapper());
            }
        }

        let mut retained = 0;
        let mut visit = |cell: &mut CellNode, scene: &mut Scene, row: usize, col: usize| {
            if cell.slot() == Some((row, col)) {
                retained += 1;
            }
            cell.update(scene, &resolve(row, col), geometry.cell_size(col));
        };

        let existing = self.cells.len();
        if transition.forward {
            let mut index = 0;
            for row in row_min..=row_max {
                for col in col_min..=col_max {
                    if let Some(cell) = self.cells.get_mut(index) {
                        visit(cell, scene, row, col);
                    } else {
                        let mut cell = CellNode::new(scene);
                        visit(&mut cell, scene, row, col);
                        scene.append_child(self.container, cell.wrapper());
                        self.cells.push_back(cell);
                    }
                    index += 1;
                }
            }
        } else {
            let mut remaining = existing;
            for row in (row_min..=row_max).rev() {
                for col in (col_min..=col_max).rev() {
                    if remaining > 0 {
                        remaining -= 1;
                        if let Some(cell) = self.cells.get_mut(remaining) {
                            visit(cell, scene, row, col);
                        }
                    } else {
                        let mut cell = CellNode::new(scene);
                        visit(&mut cell, scene, row, col);
                        scene.prepend_child(self.container, cell.wrapper());
                        self.cells.push_front(cell);
                    }
                }
            }
        }

        debug_assert_eq!(self.cells.len(), target, "one cell per window slot");
        self.position(scene, row_min, col_min, col_max, geometry);
        debug_assert!(self.mirrors_scene(scene), "cell list out of sync with scene");
        self.tracker.commit(window, columns);

        let delta = scene.stats().since(before);
        ReconcileStats {
            retained,
            materialized: target - retained,
            retired: previous_slots.saturating_sub(retained),
            shifted,
            nodes_created: delta.created,
            nodes_destroyed: delta.destroyed,
        }
    }

    /// Moves `shift_rows` whole rows between the ends of the list.
    fn shift(&mut self, scene: &mut Scene, transition: &WindowTransition, per_row: usize) -> usize {
        let moves = (transition.shift_rows * per_row).min(self.cells.len());
        for _ in 0..moves {
            if transition.forward {
                if let Some(cell) = self.cells.pop_front() {
                    scene.append_child(self.container, cell.wrapper());
                    self.cells.push_back(cell);
                }
            } else if let Some(cell) = self.cells.pop_back() {
                scene.prepend_child(self.container, cell.wrapper());
                self.cells.push_front(cell);
            }
        }
        moves
    }

    fn position(
        &self,
        scene: &mut Scene,
        row_min: usize,
        col_min: usize,
        col_max: usize,
        geometry: &CellGeometry<'_>,
    ) {
        let x_start = geometry.origin.x + geometry.column_offset(col_min);
        let mut y = geometry.origin.y + row_min as f64 * geometry.row_height;
        let mut cells = self.cells.iter();
        'rows: loop {
            let mut x = x_start;
            for col in col_min..=col_max {
                let Some(cell) = cells.next() else {
                    break 'rows;
                };
                scene.set_transform(
                    cell.wrapper(),
                    Affine::translate((x + geometry.padding.x0, y + geometry.padding.y0)),
                );
                x += geometry.column_widths.get(col).copied().unwrap_or(0.0);
            }
            y += geometry.row_height;
        }
    }

    fn mirrors_scene(&self, scene: &Scene) -> bool {
        scene.child_count(self.container) == self.cells.len()
            && scene
                .children(self.container)
                .zip(self.cells.iter())
                .all(|(child, cell)| child == cell.wrapper())
    }
}
