// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll a list view headlessly and log what each update pass did.
//!
//! This example shows how to combine:
//! - `understory_list_skinlet` to keep scene nodes for the visible cells,
//! - `understory_list_window` to scroll a row into view,
//! - `understory_scene` to hold the nodes and count allocations.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example list_view_scroll`
//!
//! Add `RUST_LOG=trace` to see the per-pass statistics logged by the skinlet.

use kurbo::{Insets, Point, Rect, Size};
use understory_list_skinlet::{
    Aspect, CellValue, ListViewModel, ListViewNode, ListViewSkinlet, SkinStates, StyleHints,
    StyleSource, StyleTable, Subcontrol,
};
use understory_list_window::{RowExtents, ScrollAlign};
use understory_scene::{Color, ColorFilter, Graphic, NodeContent, Scene};

const ROW_HEIGHT: f64 = 24.0;
const ICON: Graphic = Graphic::new(1, Size::new(16.0, 16.0));

/// A file listing: name, an icon for directories, and a size column.
struct Files {
    names: Vec<String>,
    viewport: Rect,
    scroll: Point,
    selected: Option<usize>,
    style: StyleTable,
}

impl Files {
    fn new(count: usize) -> Self {
        Self {
            names: (0..count).map(|i| format!("file_{i:04}.txt")).collect(),
            viewport: Rect::new(0.0, 0.0, 360.0, 240.0),
            scroll: Point::ZERO,
            selected: None,
            style: material_style(),
        }
    }

    fn extents(&self) -> RowExtents {
        RowExtents::new(self.names.len(), ROW_HEIGHT)
    }
}

impl StyleSource for Files {
    fn style_hint(&self, aspect: Aspect) -> StyleHints {
        self.style.resolve(aspect)
    }
}

impl ListViewModel for Files {
    fn row_count(&self) -> usize {
        self.names.len()
    }

    fn column_count(&self) -> usize {
        3
    }

    fn row_height(&self) -> f64 {
        ROW_HEIGHT
    }

    fn column_width(&self, col: usize) -> f64 {
        [32.0, 220.0, 108.0][col]
    }

    fn scroll_position(&self) -> Point {
        self.scroll
    }

    fn viewport_contents_rect(&self) -> Rect {
        self.viewport
    }

    fn value_at(&self, row: usize, col: usize) -> CellValue {
        match col {
            0 if row % 5 == 0 => CellValue::Graphic(ICON),
            0 => CellValue::Text(String::new()),
            1 => CellValue::Text(self.names[row].clone()),
            _ if row % 17 == 0 => CellValue::Unsupported("SystemTime"),
            _ => CellValue::Text(format!("{} KiB", (row * 37) % 900 + 1)),
        }
    }

    fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    fn skin_states(&self) -> SkinStates {
        SkinStates::FOCUSED
    }
}

/// A Material-like table: padded cells with a bottom divider, a tinted
/// selection, and muted text.
fn material_style() -> StyleTable {
    let surface = Color::from_rgb(0xfe, 0xf7, 0xff);
    let outline = Color::from_rgb(0xca, 0xc4, 0xd0);
    let primary = Color::from_rgb(0x65, 0x55, 0x8f);
    let on_surface_variant = Color::from_rgb(0x49, 0x45, 0x4f);

    let mut table = StyleTable::new();
    table.set(
        Subcontrol::Cell,
        StyleHints {
            padding: Insets::new(16.0, 2.0, 16.0, 2.0),
            color: surface,
            border_color: outline,
            border: Insets::new(0.0, 0.0, 0.0, 1.0),
            ..StyleHints::default()
        },
    );
    table.update(
        Aspect::new(Subcontrol::Cell, SkinStates::SELECTED),
        |hints| hints.color = primary.with_alpha(31),
    );
    table.set(
        Subcontrol::Text,
        StyleHints {
            color: on_surface_variant,
            ..StyleHints::default()
        },
    );
    table.set(
        Subcontrol::Graphic,
        StyleHints {
            color_filter: ColorFilter::new().with_substitution(Color::BLACK, primary),
            ..StyleHints::default()
        },
    );
    table
}

fn update(
    skinlet: &ListViewSkinlet,
    scene: &mut Scene,
    files: &Files,
    node: Option<ListViewNode>,
    label: &str,
) -> ListViewNode {
    let node = skinlet.update_contents_node(scene, files, node);
    let stats = node.last_stats();
    log::info!(
        "{label:>14}: rows {:?}, {} cells, {} retained, {} new, {} shifted, +{} -{} nodes (alive {})",
        node.window().rows(),
        node.cells().len(),
        stats.retained,
        stats.materialized,
        stats.shifted,
        stats.nodes_created,
        stats.nodes_destroyed,
        scene.stats().alive(),
    );
    node
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let skinlet = ListViewSkinlet::new();
    let mut scene = Scene::new();
    let mut files = Files::new(500);

    let mut node = update(&skinlet, &mut scene, &files, None, "initial");

    // Smooth scrolling, a few pixels at a time.
    for step in 1..=6 {
        files.scroll.y = f64::from(step) * 9.0;
        node = update(&skinlet, &mut scene, &files, Some(node), "scroll down");
    }
    for step in (0..6).rev() {
        files.scroll.y = f64::from(step) * 9.0;
        node = update(&skinlet, &mut scene, &files, Some(node), "scroll up");
    }

    // Select a row far away and bring it into view.
    files.selected = Some(321);
    files.scroll.y = files.extents().scroll_offset_for_row(
        321,
        files.viewport.height(),
        files.scroll.y,
        ScrollAlign::Center,
    );
    node = update(&skinlet, &mut scene, &files, Some(node), "jump to 321");
    if let Some(selection) = node.selection()
        && let Some(NodeContent::Box(b)) = scene.content(selection)
    {
        log::info!("selection box at {:?}", b.rect);
    }

    // Shrink the viewport: surplus rows are dropped from the tail.
    files.viewport = Rect::new(0.0, 0.0, 360.0, 120.0);
    node = update(&skinlet, &mut scene, &files, Some(node), "shrink");

    // Empty the list.
    files.names.clear();
    node = update(&skinlet, &mut scene, &files, Some(node), "clear");

    node.remove(&mut scene);
    log::info!("alive after removal: {}", scene.stats().alive());
}
