// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window computation and the tracker that remembers the previous window.

use crate::{ColumnSpan, RowExtents, ViewWindow};

/// Compute the rows to materialize for a vertical scroll position.
///
/// - `row_min = floor(scroll_y / row_height)`, clamped to `>= 0`.
/// - `row_max = ceil((scroll_y + viewport_height) / row_height)`, clamped to
///   `<= row_count - 1`.
///
/// The result is [`ViewWindow::EMPTY`] when there are no rows, no columns,
/// or rows have no height. For any other input it satisfies
/// `0 <= row_min <= row_max <= row_count - 1`.
#[must_use]
pub fn compute_window(
    scroll_y: f64,
    viewport_height: f64,
    row_height: f64,
    row_count: usize,
    column_count: usize,
) -> ViewWindow {
    let extents = RowExtents::new(row_count, row_height);
    if extents.is_degenerate() || column_count == 0 {
        return ViewWindow::EMPTY;
    }
    // An overscrolled (negative) offset shows fewer rows, not more.
    let bottom = scroll_y + viewport_height.max(0.0);

    let row_min = extents.row_at_offset(scroll_y.max(0.0));
    let row_max = extents.row_ending_at(bottom).max(row_min);
    ViewWindow::new(row_min, row_max)
}

/// How the next window relates to the previously materialized one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTransition {
    /// The window materialized by the previous pass.
    pub previous: ViewWindow,
    /// The window the next pass materializes.
    pub next: ViewWindow,
    /// Whether nodes of the previous window can be shift-reused: the windows
    /// intersect and the column span is unchanged.
    pub reusable: bool,
    /// Whether the next pass walks rows in ascending order.
    ///
    /// `next.row_min >= previous.row_min` when the windows can share nodes,
    /// `true` otherwise. Only decides which end of a node list to work from.
    pub forward: bool,
    /// Number of whole rows to move from one end of the node list to the
    /// other before assigning content: from head to tail when `forward`,
    /// from tail to head otherwise. Zero when nothing can be shifted.
    pub shift_rows: usize,
}

/// Remembers the window and column span of the last materialization.
///
/// The tracker is owned by whatever owns the materialized nodes. It is reset
/// with [`WindowTracker::invalidate`] whenever those nodes are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowTracker {
    window: ViewWindow,
    columns: ColumnSpan,
}

impl WindowTracker {
    /// Creates a tracker with nothing materialized.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window: ViewWindow::EMPTY,
            columns: ColumnSpan::EMPTY,
        }
    }

    /// The last committed window.
    #[must_use]
    pub const fn window(&self) -> ViewWindow {
        self.window
    }

    /// The last committed column span.
    #[must_use]
    pub const fn columns(&self) -> ColumnSpan {
        self.columns
    }

    /// Describes the move from the committed window to `next`.
    ///
    /// Shift-reuse is only possible when the windows intersect and the column
    /// span is unchanged; otherwise every row would need a different number
    /// of nodes and the pass starts over from the head of the list.
    #[must_use]
    pub fn transition(&self, next: ViewWindow, columns: ColumnSpan) -> WindowTransition {
        let previous = self.window;
        let reusable = previous.intersects(&next) && self.columns == columns;
        let (forward, shift_rows) = match (previous.row_min(), previous.row_max()) {
            (Some(prev_min), Some(prev_max)) if reusable => {
                let next_min = next.row_min().unwrap_or(prev_min);
                let next_max = next.row_max().unwrap_or(prev_max);
                if next_min >= prev_min {
                    (true, next_min - prev_min)
                } else {
                    (false, prev_max.saturating_sub(next_max))
                }
            }
            _ => (true, 0),
        };
        WindowTransition {
            previous,
            next,
            reusable,
            forward,
            shift_rows,
        }
    }

    /// Records `window` and `columns` as materialized.
    pub fn commit(&mut self, window: ViewWindow, columns: ColumnSpan) {
        if window.is_empty() || columns.is_empty() {
            self.invalidate();
        } else {
            self.window = window;
            self.columns = columns;
        }
    }

    /// Forgets the materialized window.
    pub fn invalidate(&mut self) {
        *self = Self::new();
    }

    /// Number of nodes the committed window holds.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.window.cell_count(self.columns.len())
    }
}
