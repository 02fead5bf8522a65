// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column spans and horizontal visibility.

use core::ops::Range;

/// A contiguous range of columns, possibly empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnSpan {
    start: usize,
    len: usize,
}

impl ColumnSpan {
    /// The empty span.
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    /// Every column of a list with `column_count` columns.
    #[must_use]
    pub const fn all(column_count: usize) -> Self {
        Self {
            start: 0,
            len: column_count,
        }
    }

    /// The inclusive span `first..=last`.
    #[must_use]
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "column span out of order: {first} > {last}");
        Self {
            start: first,
            len: last.saturating_sub(first) + 1,
        }
    }

    /// Returns `true` if the span has no columns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of columns in the span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// First column, if any.
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.len == 0 { None } else { Some(self.start) }
    }

    /// Last column, if any.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.start + self.len - 1)
        }
    }

    /// The columns as a half-open range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Columns overlapping the horizontal range `[scroll_x, scroll_x + viewport_width]`.
///
/// `column_widths` holds the width of every column, in order. Columns of
/// zero width are never the first or last visible column unless every column
/// is zero-wide. A zero-width viewport still yields the column under
/// `scroll_x`, mirroring how a zero-height viewport yields one row.
#[must_use]
pub fn visible_columns(scroll_x: f64, viewport_width: f64, column_widths: &[f64]) -> ColumnSpan {
    if column_widths.is_empty() {
        return ColumnSpan::EMPTY;
    }
    let left = scroll_x.max(0.0);
    let right = left + viewport_width.max(0.0);

    let mut first = None;
    let mut last = 0;
    let mut x = 0.0;
    for (col, width) in column_widths.iter().copied().enumerate() {
        let width = width.max(0.0);
        let end = x + width;
        if first.is_none() && end > left {
            first = Some(col);
        }
        if first.is_some() && x <= right && width > 0.0 {
            last = col;
        }
        if x > right {
            break;
        }
        x = end;
    }

    match first {
        Some(first) => ColumnSpan::new(first, last.max(first)),
        // Scrolled past every column (or all are zero-wide): keep the last one.
        None => {
            let col = column_widths.len() - 1;
            ColumnSpan::new(col, col)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnSpan, visible_columns};

    #[test]
    fn all_columns() {
        let span = ColumnSpan::all(3);
        assert_eq!(span.first(), Some(0));
        assert_eq!(span.last(), Some(2));
        assert_eq!(span.range(), 0..3);
        assert!(ColumnSpan::all(0).is_empty());
        assert_eq!(ColumnSpan::EMPTY.last(), None);
    }

    #[test]
    fn visible_columns_track_horizontal_scroll() {
        let widths = [100.0, 50.0, 80.0, 120.0];
        // [0, 120] covers columns 0 and 1.
        assert_eq!(visible_columns(0.0, 120.0, &widths), ColumnSpan::new(0, 1));
        // [110, 240] starts inside column 1 and reaches into column 3.
        assert_eq!(visible_columns(110.0, 130.0, &widths), ColumnSpan::new(1, 3));
        // Scrolling beyond the content keeps the last column.
        assert_eq!(visible_columns(1000.0, 50.0, &widths), ColumnSpan::new(3, 3));
    }

    #[test]
    fn zero_width_viewport_keeps_one_column() {
        let widths = [100.0, 50.0];
        assert_eq!(visible_columns(120.0, 0.0, &widths), ColumnSpan::new(1, 1));
        assert!(visible_columns(0.0, 100.0, &[]).is_empty());
    }
}
