// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform row extents.

/// Rows of a list that all share the same height.
///
/// Offsets are measured from the top of the list contents, in the same
/// coordinate space as the scroll offset (typically logical pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowExtents {
    row_count: usize,
    row_height: f64,
}

impl RowExtents {
    /// Creates extents for `row_count` rows of uniform `row_height`.
    #[must_use]
    pub fn new(row_count: usize, row_height: f64) -> Self {
        Self {
            row_count,
            row_height: sanitize(row_height),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Height shared by all rows.
    #[must_use]
    pub const fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Returns `true` if there are no rows or rows have no height.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.row_count == 0 || self.row_height <= 0.0
    }

    /// Height of all rows together.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.row_height * usize_to_f64(self.row_count)
    }

    /// Offset of the top edge of `row`.
    #[must_use]
    pub fn offset_of(&self, row: usize) -> f64 {
        usize_to_f64(row) * self.row_height
    }

    /// The row containing `offset`: `floor(offset / row_height)`, clamped into
    /// `0..row_count`.
    #[must_use]
    pub fn row_at_offset(&self, offset: f64) -> usize {
        if self.is_degenerate() {
            return 0;
        }
        floor_to_usize(self.clamped_quotient(offset)).min(self.row_count - 1)
    }

    /// The last row touching an edge at `offset`: `ceil(offset / row_height)`,
    /// clamped into `0..row_count`.
    ///
    /// A row starting exactly at `offset` counts as touching it, so the window
    /// ending at a row boundary also materializes the row below.
    #[must_use]
    pub fn row_ending_at(&self, offset: f64) -> usize {
        if self.is_degenerate() {
            return 0;
        }
        ceil_to_usize(self.clamped_quotient(offset)).min(self.row_count - 1)
    }

    /// `offset / row_height`, capped at the last row so huge or infinite
    /// offsets stay in range of the integer conversions.
    fn clamped_quotient(&self, offset: f64) -> f64 {
        let last = usize_to_f64(self.row_count - 1);
        let quotient = offset / self.row_height;
        if quotient >= last { last } else { quotient }
    }
}

fn sanitize(extent: f64) -> f64 {
    // Clamp finite negative values to `0.0`. NaNs collapse to `0.0` as well.
    if extent > 0.0 { extent } else { 0.0 }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Row indices stay far below 2^52."
)]
pub(crate) fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// `floor` for non-negative values without `std` float intrinsics.
///
/// Negative inputs and NaN saturate to zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Truncation toward zero is floor for the non-negative inputs used here"
)]
pub(crate) fn floor_to_usize(value: f64) -> usize {
    value as usize
}

/// `ceil` for non-negative values without `std` float intrinsics.
///
/// Values beyond `usize::MAX` saturate.
pub(crate) fn ceil_to_usize(value: f64) -> usize {
    let floor = floor_to_usize(value);
    if usize_to_f64(floor) < value {
        floor.saturating_add(1)
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::{RowExtents, ceil_to_usize, floor_to_usize};

    #[test]
    fn offsets_and_rows() {
        let extents = RowExtents::new(100, 20.0);
        assert_eq!(extents.total_extent(), 2000.0);
        assert_eq!(extents.offset_of(3), 60.0);
        assert_eq!(extents.row_at_offset(0.0), 0);
        assert_eq!(extents.row_at_offset(39.9), 1);
        assert_eq!(extents.row_at_offset(40.0), 2);
        assert_eq!(extents.row_at_offset(1e9), 99);
        assert_eq!(extents.row_ending_at(100.0), 5);
        assert_eq!(extents.row_ending_at(101.0), 6);
        assert_eq!(extents.row_ending_at(1e9), 99);
    }

    #[test]
    fn negative_heights_are_degenerate() {
        let extents = RowExtents::new(3, -5.0);
        assert_eq!(extents.row_height(), 0.0);
        assert!(extents.is_degenerate());
        assert_eq!(extents.row_at_offset(10.0), 0);
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(floor_to_usize(2.7), 2);
        assert_eq!(floor_to_usize(-3.0), 0);
        assert_eq!(floor_to_usize(f64::NAN), 0);
        assert_eq!(ceil_to_usize(2.0), 2);
        assert_eq!(ceil_to_usize(2.01), 3);
        assert_eq!(ceil_to_usize(0.0), 0);
    }

    #[test]
    fn rounding_saturates_on_huge_values() {
        assert_eq!(floor_to_usize(f64::INFINITY), usize::MAX);
        assert_eq!(ceil_to_usize(f64::INFINITY), usize::MAX);
        assert_eq!(ceil_to_usize(1e30), usize::MAX);
    }

    #[test]
    fn huge_offsets_clamp_to_last_row() {
        let extents = RowExtents::new(10, 20.0);
        assert_eq!(extents.row_at_offset(1e30), 9);
        assert_eq!(extents.row_ending_at(1e30), 9);
        assert_eq!(extents.row_ending_at(f64::INFINITY), 9);
        assert_eq!(extents.row_at_offset(f64::NAN), 0);
    }
}
