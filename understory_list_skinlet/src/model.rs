// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view of a list control that the skinlet renders.

use alloc::string::String;
use kurbo::{Point, Rect};
use understory_scene::{ColorFilter, Graphic};

use crate::style::{SkinStates, StyleSource};

/// The value stored in one cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Text content.
    Text(String),
    /// A vector graphic.
    Graphic(Graphic),
    /// A value the skinlet cannot render, named by its type.
    ///
    /// Cells holding such values are rendered empty and a warning is logged.
    Unsupported(&'static str),
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<Graphic> for CellValue {
    fn from(graphic: Graphic) -> Self {
        Self::Graphic(graphic)
    }
}

/// A list control as seen by [`ListViewSkinlet`](crate::ListViewSkinlet).
///
/// All geometry is in the control's local coordinates. `viewport_contents_rect`
/// is the area cells are laid out in; `scroll_position` is the offset of the
/// visible area into the scrollable contents.
pub trait ListViewModel: StyleSource {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Uniform height of every row.
    fn row_height(&self) -> f64;

    /// Width of column `col`.
    fn column_width(&self, col: usize) -> f64;

    /// Current scroll offset of the contents.
    fn scroll_position(&self) -> Point;

    /// Area of the viewport that shows cells.
    fn viewport_contents_rect(&self) -> Rect;

    /// Value of a cell. Called only for rows and columns in range.
    fn value_at(&self, row: usize, col: usize) -> CellValue;

    /// The selected row, if any.
    fn selected_row(&self) -> Option<usize>;

    /// States of the control itself, such as focus or hover.
    fn skin_states(&self) -> SkinStates {
        SkinStates::empty()
    }

    /// A per-cell override of the graphic color filter.
    ///
    /// `None` uses the filter of the [`Subcontrol::Graphic`](crate::Subcontrol::Graphic)
    /// style hints.
    fn graphic_filter_at(&self, _row: usize, _col: usize) -> Option<ColorFilter> {
        None
    }

    /// Whether the preferred width is derived from the column widths.
    fn preferred_width_from_columns(&self) -> bool {
        false
    }

    /// Width reserved for a vertical scroll bar.
    fn scroll_bar_extent(&self) -> f64 {
        0.0
    }
}
