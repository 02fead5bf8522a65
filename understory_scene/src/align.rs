// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment of content inside a rectangle.

use kurbo::{Rect, Size};

/// Horizontal placement.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum HAlign {
    /// Flush with the leading edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush with the trailing edge.
    Right,
}

/// Vertical placement.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum VAlign {
    /// Flush with the top edge.
    Top,
    /// Centered.
    #[default]
    Center,
    /// Flush with the bottom edge.
    Bottom,
}

/// Two-axis alignment. The default is vertically centered, left aligned.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Alignment {
    /// Horizontal placement.
    pub horizontal: HAlign,
    /// Vertical placement.
    pub vertical: VAlign,
}

impl Alignment {
    /// Vertically centered, left aligned.
    pub const LEFT_CENTER: Self = Self::new(HAlign::Left, VAlign::Center);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HAlign::Center, VAlign::Center);

    /// Creates an alignment.
    #[must_use]
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Places a box of `size` inside `within`.
    ///
    /// `size` is not clamped; content larger than `within` overflows evenly
    /// according to the alignment.
    #[must_use]
    pub fn place(self, size: Size, within: Rect) -> Rect {
        let x = match self.horizontal {
            HAlign::Left => within.x0,
            HAlign::Center => within.x0 + (within.width() - size.width) * 0.5,
            HAlign::Right => within.x1 - size.width,
        };
        let y = match self.vertical {
            VAlign::Top => within.y0,
            VAlign::Center => within.y0 + (within.height() - size.height) * 0.5,
            VAlign::Bottom => within.y1 - size.height,
        };
        Rect::new(x, y, x + size.width, y + size.height)
    }

    /// Scales `intrinsic` to fit `within`, keeping its aspect ratio, then
    /// places it with [`Alignment::place`].
    ///
    /// An intrinsic size with a zero dimension yields an empty rectangle at
    /// the aligned position.
    #[must_use]
    pub fn fit(self, intrinsic: Size, within: Rect) -> Rect {
        if intrinsic.width <= 0.0 || intrinsic.height <= 0.0 {
            return self.place(Size::ZERO, within);
        }
        let scale = (within.width() / intrinsic.width)
            .min(within.height() / intrinsic.height)
            .max(0.0);
        self.place(
            Size::new(intrinsic.width * scale, intrinsic.height * scale),
            within,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Alignment, HAlign, VAlign};
    use kurbo::{Rect, Size};

    #[test]
    fn place_respects_both_axes() {
        let within = Rect::new(0.0, 0.0, 100.0, 40.0);
        let size = Size::new(20.0, 10.0);

        assert_eq!(
            Alignment::LEFT_CENTER.place(size, within),
            Rect::new(0.0, 15.0, 20.0, 25.0)
        );
        assert_eq!(
            Alignment::new(HAlign::Right, VAlign::Bottom).place(size, within),
            Rect::new(80.0, 30.0, 100.0, 40.0)
        );
    }

    #[test]
    fn fit_keeps_aspect_ratio() {
        // A square graphic in a wide cell is limited by the cell height.
        let within = Rect::new(10.0, 0.0, 110.0, 20.0);
        let fitted = Alignment::CENTER.fit(Size::new(64.0, 64.0), within);
        assert_eq!(fitted, Rect::new(50.0, 0.0, 70.0, 20.0));
    }

    #[test]
    fn fit_of_degenerate_graphic_is_empty() {
        let within = Rect::new(0.0, 0.0, 10.0, 10.0);
        let fitted = Alignment::default().fit(Size::new(0.0, 5.0), within);
        assert_eq!(fitted.area(), 0.0);
    }
}
