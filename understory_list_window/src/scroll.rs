// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-aligned scrolling over uniform rows.

use crate::RowExtents;

/// Alignment mode when scrolling a specific row into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top edge of the row with the top of the viewport.
    Start,
    /// Center the row within the viewport.
    Center,
    /// Align the bottom edge of the row with the bottom of the viewport.
    End,
    /// Move just enough to make the row fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

impl RowExtents {
    /// Largest scroll offset that keeps the viewport within the content.
    #[must_use]
    pub fn max_scroll_offset(&self, viewport_extent: f64) -> f64 {
        (self.total_extent() - viewport_extent.max(0.0)).max(0.0)
    }

    /// Scroll offset that brings `row` into view with the given alignment.
    ///
    /// `current` is the current scroll offset, consulted by
    /// [`ScrollAlign::Nearest`]. The result is clamped to
    /// `0..=max_scroll_offset(viewport_extent)`; a list without rows scrolls
    /// to zero.
    #[must_use]
    pub fn scroll_offset_for_row(
        &self,
        row: usize,
        viewport_extent: f64,
        current: f64,
        align: ScrollAlign,
    ) -> f64 {
        if self.row_count() == 0 {
            return 0.0;
        }
        let row = row.min(self.row_count() - 1);
        let item_start = self.offset_of(row);
        let item_end = item_start + self.row_height();
        let viewport = viewport_extent.max(0.0);

        let offset = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => item_end - viewport,
            ScrollAlign::Center => (item_start + item_end) * 0.5 - viewport * 0.5,
            ScrollAlign::Nearest => {
                if item_start >= current && item_end <= current + viewport {
                    current
                } else if item_start < current {
                    item_start
                } else {
                    item_end - viewport
                }
            }
        };
        offset.clamp(0.0, self.max_scroll_offset(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollAlign;
    use crate::RowExtents;

    #[test]
    fn alignment_modes() {
        let extents = RowExtents::new(10, 10.0);

        assert_eq!(extents.scroll_offset_for_row(3, 30.0, 0.0, ScrollAlign::Start), 30.0);
        assert_eq!(extents.scroll_offset_for_row(3, 30.0, 0.0, ScrollAlign::End), 10.0);
        assert_eq!(extents.scroll_offset_for_row(3, 30.0, 0.0, ScrollAlign::Center), 20.0);

        // Already fully visible: no movement.
        assert_eq!(extents.scroll_offset_for_row(3, 30.0, 15.0, ScrollAlign::Nearest), 15.0);
        // Above the viewport: align the top.
        assert_eq!(extents.scroll_offset_for_row(1, 30.0, 40.0, ScrollAlign::Nearest), 10.0);
        // Below the viewport: align the bottom.
        assert_eq!(extents.scroll_offset_for_row(8, 30.0, 0.0, ScrollAlign::Nearest), 60.0);
    }

    #[test]
    fn offsets_are_clamped_to_content() {
        let extents = RowExtents::new(5, 10.0);
        assert_eq!(extents.max_scroll_offset(30.0), 20.0);
        assert_eq!(extents.scroll_offset_for_row(4, 30.0, 0.0, ScrollAlign::Start), 20.0);
        assert_eq!(extents.scroll_offset_for_row(0, 30.0, 0.0, ScrollAlign::End), 0.0);
        assert_eq!(RowExtents::new(0, 10.0).scroll_offset_for_row(3, 30.0, 5.0, ScrollAlign::Start), 0.0);
    }
}
