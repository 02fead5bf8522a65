// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contiguous row range currently materialized as nodes.

use core::ops::RangeInclusive;

/// A contiguous, inclusive range of rows, or the empty window.
///
/// Hosts that keep the classic `(-1, -1)` sentinel for "nothing materialized"
/// can use [`ViewWindow::as_signed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewWindow {
    rows: Option<(usize, usize)>,
}

impl ViewWindow {
    /// The empty window.
    pub const EMPTY: Self = Self { rows: None };

    /// Creates the window `row_min..=row_max`.
    #[must_use]
    pub fn new(row_min: usize, row_max: usize) -> Self {
        debug_assert!(
            row_min <= row_max,
            "window rows out of order: {row_min} > {row_max}"
        );
        Self {
            rows: Some((row_min, row_max.max(row_min))),
        }
    }

    /// Returns `true` if no rows are materialized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_none()
    }

    /// First materialized row.
    #[must_use]
    pub fn row_min(&self) -> Option<usize> {
        self.rows.map(|(min, _)| min)
    }

    /// Last materialized row.
    #[must_use]
    pub fn row_max(&self) -> Option<usize> {
        self.rows.map(|(_, max)| max)
    }

    /// Number of materialized rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.map_or(0, |(min, max)| max - min + 1)
    }

    /// Number of cells when every row carries `columns` cells.
    #[must_use]
    pub fn cell_count(&self, columns: usize) -> usize {
        self.row_count() * columns
    }

    /// Returns `true` if `row` is materialized.
    #[must_use]
    pub fn contains(&self, row: usize) -> bool {
        self.rows.is_some_and(|(min, max)| min <= row && row <= max)
    }

    /// Returns `true` if the two windows share at least one row.
    ///
    /// The empty window intersects nothing.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        match (self.rows, other.rows) {
            (Some((min, max)), Some((other_min, other_max))) => {
                other_min <= max && other_max >= min
            }
            _ => false,
        }
    }

    /// Iterates the materialized rows in ascending order.
    pub fn rows(&self) -> RangeInclusive<usize> {
        match self.rows {
            Some((min, max)) => min..=max,
            // An exhausted range: `1..=0` yields nothing.
            None => 1..=0,
        }
    }

    /// `(row_min, row_max)` with `-1` for both bounds when empty.
    #[must_use]
    pub fn as_signed(&self) -> (isize, isize) {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Row indices stay far below isize::MAX."
        )]
        let signed = self.rows.map_or((-1, -1), |(min, max)| (min as isize, max as isize));
        signed
    }
}
