// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and color filters.

use smallvec::SmallVec;

/// An 8-bit sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self(255, 255, 255, 255);

    /// Creates an opaque color.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// Creates a color with the given alpha.
    #[must_use]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(r, g, b, a)
    }

    /// Returns this color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.0, self.1, self.2, a)
    }
}

/// A list of color substitutions applied to a graphic at render time.
///
/// Graphics are authored with placeholder colors; a filter maps each
/// placeholder to the color the current style wants. Colors without a
/// substitution pass through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorFilter {
    substitutions: SmallVec<[(Color, Color); 4]>,
}

impl ColorFilter {
    /// Creates a filter without substitutions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the substitution for `from`.
    pub fn add_substitution(&mut self, from: Color, to: Color) {
        if let Some(entry) = self.substitutions.iter_mut().find(|(f, _)| *f == from) {
            entry.1 = to;
        } else {
            self.substitutions.push((from, to));
        }
    }

    /// Builder form of [`ColorFilter::add_substitution`].
    #[must_use]
    pub fn with_substitution(mut self, from: Color, to: Color) -> Self {
        self.add_substitution(from, to);
        self
    }

    /// Returns `true` if the filter leaves every color unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.substitutions.iter().all(|(from, to)| from == to)
    }

    /// Maps a color through the filter.
    #[must_use]
    pub fn apply(&self, color: Color) -> Color {
        self.substitutions
            .iter()
            .find(|(from, _)| *from == color)
            .map_or(color, |(_, to)| *to)
    }

    /// Iterates the substitutions in insertion order.
    pub fn substitutions(&self) -> impl Iterator<Item = (Color, Color)> + '_ {
        self.substitutions.iter().copied()
    }
}
