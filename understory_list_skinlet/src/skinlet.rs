// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list-view skinlet: root node layout and the per-frame update entry point.

use kurbo::{Affine, Point, Rect};
use smallvec::SmallVec;
use understory_list_window::{ColumnSpan, ViewWindow, compute_window, visible_columns};
use understory_scene::{Alignment, NodeContent, NodeId, Scene};

use crate::background::{row_rect, update_background};
use crate::content::{RowStyleCache, resolve_cell};
use crate::model::ListViewModel;
use crate::recycler::{CellGeometry, CellRecycler, ReconcileStats};
use crate::style::{Aspect, Subcontrol};

/// Which columns get cell nodes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColumnPolicy {
    /// Every column of the model.
    #[default]
    All,
    /// Only columns overlapping the viewport horizontally.
    Visible,
}

/// Runtime configuration of a [`ListViewSkinlet`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkinletConfig {
    /// Which columns are materialized.
    pub column_policy: ColumnPolicy,
    /// Alignment of cell content when the cell hints have none.
    pub default_alignment: Alignment,
    /// Whether odd rows resolve their hints with
    /// [`SkinStates::ALTERNATE`](crate::SkinStates::ALTERNATE).
    pub alternating_rows: bool,
}

impl Default for SkinletConfig {
    fn default() -> Self {
        Self {
            column_policy: ColumnPolicy::All,
            default_alignment: Alignment::LEFT_CENTER,
            alternating_rows: true,
        }
    }
}

/// The scene nodes of one list view, returned by
/// [`ListViewSkinlet::update_contents_node`] and handed back on the next
/// update.
///
/// ```text
/// root (transform: -scroll)
/// ├── background (group): row boxes…, selection box
/// └── foreground (group): cell wrappers… (row-major)
///     └── text | graphic
/// ```
#[derive(Debug)]
pub struct ListViewNode {
    root: NodeId,
    background: NodeId,
    recycler: CellRecycler,
    selection: Option<NodeId>,
    last_stats: ReconcileStats,
}

impl ListViewNode {
    fn new(scene: &mut Scene) -> Self {
        let root = scene.insert(NodeContent::Transform);
        let background = scene.insert(NodeContent::Group);
        let foreground = scene.insert(NodeContent::Group);
        scene.append_child(root, background);
        scene.append_child(root, foreground);
        Self {
            root,
            background,
            recycler: CellRecycler::new(foreground),
            selection: None,
            last_stats: ReconcileStats::default(),
        }
    }

    fn is_alive(&self, scene: &Scene) -> bool {
        scene.is_alive(self.root)
            && scene.parent_of(self.background) == Some(self.root)
            && scene.parent_of(self.recycler.container()) == Some(self.root)
    }

    /// The root transform node. Hosts attach it to their own tree.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Parent of the row background boxes and the selection box.
    #[must_use]
    pub const fn background(&self) -> NodeId {
        self.background
    }

    /// Parent of the cell wrappers.
    #[must_use]
    pub const fn foreground(&self) -> NodeId {
        self.recycler.container()
    }

    /// The selection box, present while the selected row is materialized.
    #[must_use]
    pub const fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// The materialized window.
    #[must_use]
    pub const fn window(&self) -> ViewWindow {
        self.recycler.window()
    }

    /// The materialized columns.
    #[must_use]
    pub const fn columns(&self) -> ColumnSpan {
        self.recycler.columns()
    }

    /// The cell recycler of the foreground.
    #[must_use]
    pub const fn cells(&self) -> &CellRecycler {
        &self.recycler
    }

    /// What the last update did to the foreground.
    #[must_use]
    pub const fn last_stats(&self) -> ReconcileStats {
        self.last_stats
    }

    /// Destroys every node of this list view.
    pub fn remove(self, scene: &mut Scene) {
        scene.remove(self.root);
    }
}

/// Translates a [`ListViewModel`] into scene nodes, incrementally.
///
/// The skinlet itself holds configuration only; all per-view state lives in
/// the [`ListViewNode`] it returns.
#[derive(Clone, Debug, Default)]
pub struct ListViewSkinlet {
    config: SkinletConfig,
}

impl ListViewSkinlet {
    /// Creates a skinlet with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a skinlet with `config`.
    #[must_use]
    pub const fn with_config(config: SkinletConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &SkinletConfig {
        &self.config
    }

    /// Brings the nodes of a list view up to date with `model`.
    ///
    /// Pass `None` on the first update, and the returned node on every later
    /// one. A node whose root was removed from `scene`, or whose background or
    /// foreground group was moved away, is destroyed and replaced by a fresh
    /// one.
    pub fn update_contents_node<M: ListViewModel + ?Sized>(
        &self,
        scene: &mut Scene,
        model: &M,
        previous: Option<ListViewNode>,
    ) -> ListViewNode {
        let mut node = match previous {
            Some(node) if node.is_alive(scene) => node,
            Some(node) => {
                log::debug!("list view root {:?} is broken, rebuilding", node.root);
                node.remove(scene);
                ListViewNode::new(scene)
            }
            None => ListViewNode::new(scene),
        };

        let scroll = model.scroll_position();
        scene.set_transform(node.root, Affine::translate((-scroll.x, -scroll.y)));

        let viewport = model.viewport_contents_rect();
        let window = compute_window(
            scroll.y,
            viewport.height(),
            model.row_height(),
            model.row_count(),
            model.column_count(),
        );
        node.selection = update_background(
            scene,
            node.background,
            model,
            window,
            self.config.alternating_rows,
        );
        node.last_stats = self.update_foreground(scene, model, &mut node.recycler, window);
        log::trace!("list view window {:?}: {:?}", window, node.last_stats);
        node
    }

    fn update_foreground<M: ListViewModel + ?Sized>(
        &self,
        scene: &mut Scene,
        model: &M,
        recycler: &mut CellRecycler,
        window: ViewWindow,
    ) -> ReconcileStats {
        let column_count = model.column_count();
        let column_widths: SmallVec<[f64; 8]> =
            (0..column_count).map(|col| model.column_width(col)).collect();

        let viewport = model.viewport_contents_rect();
        let scroll = model.scroll_position();
        let columns = if window.is_empty() {
            ColumnSpan::EMPTY
        } else {
            match self.config.column_policy {
                ColumnPolicy::All => ColumnSpan::all(column_count),
                ColumnPolicy::Visible => {
                    visible_columns(scroll.x, viewport.width(), &column_widths)
                }
            }
        };
        if columns.is_empty() && !recycler.is_empty() {
            log::debug!(
                "list view has {} rows and {} columns, clearing cells",
                model.row_count(),
                column_count
            );
        }

        let padding = model
            .style_hint(Aspect::new(Subcontrol::Cell, model.skin_states()))
            .padding;
        let geometry = CellGeometry {
            origin: Point::new(viewport.x0, viewport.y0),
            row_height: model.row_height(),
            column_widths: &column_widths,
            padding,
        };

        let row_count = model.row_count();
        let default_alignment = self.config.default_alignment;
        let mut styles = RowStyleCache::new(model.selected_row(), self.config.alternating_rows);
        recycler.reconcile(scene, window, columns, &geometry, |row, col| {
            debug_assert!(row < row_count, "row {row} outside the model");
            resolve_cell(model, row, col, styles.get(model, row), default_alignment)
        })
    }

    /// The rectangle of `row` in the root node's coordinates, as used for its
    /// background.
    #[must_use]
    pub fn sample_rect<M: ListViewModel + ?Sized>(&self, model: &M, row: usize) -> Rect {
        row_rect(model, row)
    }

    /// The width the list view would like to have, if it derives it from
    /// its columns: all column widths plus the scroll bar.
    #[must_use]
    pub fn preferred_width<M: ListViewModel + ?Sized>(&self, model: &M) -> Option<f64> {
        model.preferred_width_from_columns().then(|| {
            (0..model.column_count())
                .map(|col| model.column_width(col))
                .sum::<f64>()
                + model.scroll_bar_extent()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use crate::model::CellValue;
    use crate::style::SkinStates;
    use crate::testing::GridModel;
    use kurbo::{Insets, Size};
    use understory_scene::{BoxNode, Color, NodeKind};

    fn children(scene: &Scene, id: NodeId) -> alloc::vec::Vec<NodeId> {
        scene.children(id).collect()
    }

    #[test]
    fn root_holds_background_then_foreground() {
        let mut scene = Scene::new();
        let mut model = GridModel::new(100, 1);
        model.scroll = Point::new(3.0, 40.0);
        let node = ListViewSkinlet::new().update_contents_node(&mut scene, &model, None);

        assert_eq!(children(&scene, node.root()), [node.background(), node.foreground()]);
        assert_eq!(scene.kind(node.root()), Some(NodeKind::Transform));
        assert_eq!(
            scene.transform(node.root()),
            Some(Affine::translate((-3.0, -40.0)))
        );
    }

    #[test]
    fn scrolling_two_rows_retains_four_cells() {
        let skinlet = ListViewSkinlet::new();
        let mut scene = Scene::new();
        let mut model = GridModel::new(100, 1);

        let node = skinlet.update_contents_node(&mut scene, &model, None);
        assert_eq!(node.window(), ViewWindow::new(0, 5));
        assert_eq!(scene.child_count(node.foreground()), 6);

        model.scroll_to_row(2);
        let node = skinlet.update_contents_node(&mut scene, &model, Some(node));

        assert_eq!(node.window(), ViewWindow::new(2, 7));
        assert_eq!(scene.child_count(node.foreground()), 6);
        let stats = node.last_stats();
        assert_eq!(
            (stats.materialized, stats.retired, stats.retained),
            (2, 2, 4)
        );
        assert_eq!((stats.nodes_created, stats.nodes_destroyed), (0, 0));
    }

    #[test]
    fn selection_overlay_only_inside_window() {
        let skinlet = ListViewSkinlet::new();
        let mut scene = Scene::new();
        let mut model = GridModel::new(100, 1);
        model.viewport = Rect::new(0.0, 0.0, 100.0, 200.0);
        model.scroll_to_row(10);
        model.selected = Some(3);

        let node = skinlet.update_contents_node(&mut scene, &model, None);
        assert_eq!(node.window(), ViewWindow::new(10, 20));
        assert_eq!(node.selection(), None);
        assert_eq!(scene.child_count(node.background()), 11);

        model.selected = Some(15);
        let node = skinlet.update_contents_node(&mut scene, &model, Some(node));
        let selection = node.selection().unwrap();
        assert_eq!(scene.child_count(node.background()), 12);
        assert_eq!(scene.last_child(node.background()), Some(selection));
        let Some(NodeContent::Box(BoxNode { rect, .. })) = scene.content(selection) else {
            panic!("selection is a box");
        };
        assert_eq!(*rect, skinlet.sample_rect(&model, 15));
        assert_eq!(*rect, Rect::new(0.0, 300.0, 100.0, 320.0));
    }

    #[test]
    fn dropping_to_zero_rows_clears_and_recovers() {
        let skinlet = ListViewSkinlet::new();
        let mut scene = Scene::new();
        let mut model = GridModel::new(100, 2);
        let node = skinlet.update_contents_node(&mut scene, &model, None);
        let alive = scene.stats().alive();

        model.rows = 0;
        let node = skinlet.update_contents_node(&mut scene, &model, Some(node));
        assert_eq!(node.window().as_signed(), (-1, -1));
        assert!(node.cells().is_empty());
        assert_eq!(scene.child_count(node.foreground()), 0);
        assert_eq!(scene.child_count(node.background()), 0);
        assert_eq!(node.last_stats().retired, 12);
        // Only the three structural nodes remain.
        assert_eq!(scene.stats().alive(), 3);
        assert!(alive > 3);

        model.rows = 100;
        let node = skinlet.update_contents_node(&mut scene, &model, Some(node));
        assert_eq!(node.cells().len(), 12);
    }

    #[test]
    fn unsupported_cells_render_empty() {
        let skinlet = ListViewSkinlet::new();
        let mut scene = Scene::new();
        let mut model = GridModel::new(10, 2);
        model.set_value(1, 1, CellValue::Unsupported("Duration"));

        let node = skinlet.update_contents_node(&mut scene, &model, None);

        let cell = node.cells().cell_at(1, 1).unwrap();
        assert_eq!(cell.kind(), ContentKind::Unset);
        assert_eq!(scene.child_count(cell.wrapper()), 0);
        let neighbour = node.cells().cell_at(1, 0).unwrap();
        assert_eq!(neighbour.kind(), ContentKind::Text);
        assert_eq!(node.cells().len(), 12);
    }

    #[test]
    fn visible_column_policy_culls_columns() {
        let skinlet = ListViewSkinlet::with_config(SkinletConfig {
            column_policy: ColumnPolicy::Visible,
            ..SkinletConfig::default()
        });
        let mut scene = Scene::new();
        let mut model = GridModel::new(100, 5);
        model.viewport = Rect::new(0.0, 0.0, 250.0, 100.0);
        model.scroll = Point::new(120.0, 0.0);

        let node = skinlet.update_contents_node(&mut scene, &model, None);
        assert_eq!(node.columns(), ColumnSpan::new(1, 3));
        assert_eq!(node.cells().len(), 18);
        let first = node.cells().cell_at(0, 1).unwrap();
        assert_eq!(
            scene.transform(first.wrapper()),
            Some(Affine::translate((100.0, 0.0)))
        );

        let all = ListViewSkinlet::new().update_contents_node(&mut scene, &model, None);
        assert_eq!(all.columns(), ColumnSpan::all(5));
    }

    #[test]
    fn cell_padding_comes_from_cell_hints() {
        let mut scene = Scene::new();
        let mut model = GridModel::new(3, 1);
        model
            .style
            .update(Subcontrol::Cell, |h| h.padding = Insets::new(16.0, 2.0, 16.0, 2.0));

        let node = ListViewSkinlet::new().update_contents_node(&mut scene, &model, None);

        let cell = node.cells().cell_at(1, 0).unwrap();
        assert_eq!(
            scene.transform(cell.wrapper()),
            Some(Affine::translate((16.0, 22.0)))
        );
        let size = cell
            .content()
            .and_then(|id| scene.content(id))
            .and_then(NodeContent::local_bounds)
            .map(|r| r.size());
        assert_eq!(size, Some(Size::new(68.0, 16.0)));
    }

    #[test]
    fn alternating_rows_can_be_disabled() {
        let upper = Color::from_rgb(220, 220, 220);
        let mut model = GridModel::new(4, 1);
        model
            .style
            .update(Aspect::new(Subcontrol::Cell, SkinStates::ALTERNATE), |h| h.color = upper);
        let fills = |skinlet: &ListViewSkinlet| {
            let mut scene = Scene::new();
            let node = skinlet.update_contents_node(&mut scene, &model, None);
            scene
                .children(node.background())
                .filter(|id| {
                    matches!(scene.content(*id), Some(NodeContent::Box(b)) if b.fill == upper)
                })
                .count()
        };

        assert_eq!(fills(&ListViewSkinlet::new()), 2);
        let plain = ListViewSkinlet::with_config(SkinletConfig {
            alternating_rows: false,
            ..SkinletConfig::default()
        });
        assert_eq!(fills(&plain), 0);
    }

    #[test]
    fn removed_root_is_rebuilt() {
        let skinlet = ListViewSkinlet::new();
        let mut scene = Scene::new();
        let model = GridModel::new(10, 1);
        let node = skinlet.update_contents_node(&mut scene, &model, None);
        let old_root = node.root();
        scene.remove(old_root);

        let node = skinlet.update_contents_node(&mut scene, &model, Some(node));

        assert_ne!(node.root(), old_root);
        assert!(scene.is_alive(node.root()));
        assert_eq!(scene.child_count(node.foreground()), 6);
        assert_eq!(node.last_stats().materialized, 6);
    }

    #[test]
    fn detached_group_rebuilds_without_leaking() {
        let skinlet = ListViewSkinlet::new();
        let mut scene = Scene::new();
        let model = GridModel::new(10, 1);
        let node = skinlet.update_contents_node(&mut scene, &model, None);
        let alive = scene.stats().alive();
        let old_root = node.root();
        let old_foreground = node.foreground();
        scene.detach(old_foreground);

        let node = skinlet.update_contents_node(&mut scene, &model, Some(node));

        assert_ne!(node.root(), old_root);
        assert!(!scene.is_alive(old_root), "old root is destroyed");
        // The detached group is no longer part of the old subtree and
        // stays with whoever detached it.
        assert!(scene.is_alive(old_foreground));
        scene.remove(old_foreground);
        assert_eq!(scene.stats().alive(), alive);
    }

    #[test]
    fn preferred_width_sums_columns_and_scroll_bar() {
        let skinlet = ListViewSkinlet::new();
        let mut model = GridModel::new(10, 2);
        model.column_widths = alloc::vec![80.0, 120.0];
        assert_eq!(skinlet.preferred_width(&model), None);

        model.preferred_from_columns = true;
        model.scroll_bar = 12.0;
        assert_eq!(skinlet.preferred_width(&model), Some(212.0));
    }
}
