// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory grid used by the unit tests.

use alloc::{format, vec, vec::Vec};
use hashbrown::HashMap;
use kurbo::{Point, Rect};
use understory_scene::ColorFilter;

use crate::model::{CellValue, ListViewModel};
use crate::style::{Aspect, SkinStates, StyleHints, StyleSource, StyleTable};

/// Rows of height 20, columns of width 100, and a viewport at the origin
/// that is 100 tall and as wide as all columns together. Cells hold
/// `"row:col"` text unless overridden.
#[derive(Debug)]
pub(crate) struct GridModel {
    pub(crate) rows: usize,
    pub(crate) row_height: f64,
    pub(crate) column_widths: Vec<f64>,
    pub(crate) scroll: Point,
    pub(crate) viewport: Rect,
    pub(crate) selected: Option<usize>,
    pub(crate) states: SkinStates,
    pub(crate) style: StyleTable,
    pub(crate) values: HashMap<(usize, usize), CellValue>,
    pub(crate) filters: HashMap<(usize, usize), ColorFilter>,
    pub(crate) preferred_from_columns: bool,
    pub(crate) scroll_bar: f64,
}

impl GridModel {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        let width = 100.0 * columns as f64;
        Self {
            rows,
            row_height: 20.0,
            column_widths: vec![100.0; columns],
            scroll: Point::ZERO,
            viewport: Rect::new(0.0, 0.0, width, 100.0),
            selected: None,
            states: SkinStates::empty(),
            style: StyleTable::new(),
            values: HashMap::new(),
            filters: HashMap::new(),
            preferred_from_columns: false,
            scroll_bar: 0.0,
        }
    }

    pub(crate) fn set_value(&mut self, row: usize, col: usize, value: CellValue) {
        self.values.insert((row, col), value);
    }

    pub(crate) fn scroll_to_row(&mut self, row: usize) {
        let y = row as f64 * self.row_height;
        self.scroll.y = y;
    }
}

impl StyleSource for GridModel {
    fn style_hint(&self, aspect: Aspect) -> StyleHints {
        self.style.resolve(aspect)
    }
}

impl ListViewModel for GridModel {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    fn row_height(&self) -> f64 {
        self.row_height
    }

    fn column_width(&self, col: usize) -> f64 {
        self.column_widths[col]
    }

    fn scroll_position(&self) -> Point {
        self.scroll
    }

    fn viewport_contents_rect(&self) -> Rect {
        self.viewport
    }

    fn value_at(&self, row: usize, col: usize) -> CellValue {
        self.values
            .get(&(row, col))
            .cloned()
            .unwrap_or_else(|| CellValue::Text(format!("{row}:{col}")))
    }

    fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    fn skin_states(&self) -> SkinStates {
        self.states
    }

    fn graphic_filter_at(&self, row: usize, col: usize) -> Option<ColorFilter> {
        self.filters.get(&(row, col)).cloned()
    }

    fn preferred_width_from_columns(&self) -> bool {
        self.preferred_from_columns
    }

    fn scroll_bar_extent(&self) -> f64 {
        self.scroll_bar
    }
}
