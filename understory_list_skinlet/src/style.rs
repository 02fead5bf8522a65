// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspects, skin states, and style hint resolution.

use hashbrown::HashMap;
use kurbo::Insets;
use understory_scene::{Alignment, Color, ColorFilter, TextOptions};

/// The visual sub-elements of a list view that carry their own style.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Subcontrol {
    /// A row background and the cell padding. Also used for the selection overlay.
    Cell,
    /// Text content of a cell.
    Text,
    /// Graphic content of a cell.
    Graphic,
}

bitflags::bitflags! {
    /// State flags that select between style hints of the same subcontrol.
    ///
    /// Higher bits take precedence when a table falls back to a less specific
    /// entry (see [`StyleTable::resolve`]).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SkinStates: u16 {
        /// Odd rows of a list with alternating row styling.
        const ALTERNATE = 0b0000_0001;
        /// The control is hovered.
        const HOVERED   = 0b0000_0010;
        /// The control has keyboard focus.
        const FOCUSED   = 0b0000_0100;
        /// The control is pressed.
        const PRESSED   = 0b0000_1000;
        /// The row is the selected row.
        const SELECTED  = 0b0001_0000;
        /// The control is disabled.
        const DISABLED  = 0b0010_0000;
    }
}

/// A (subcontrol, state flags) key into a style table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Aspect {
    /// Which sub-element.
    pub subcontrol: Subcontrol,
    /// Which states.
    pub states: SkinStates,
}

impl Aspect {
    /// Creates an aspect.
    #[must_use]
    pub const fn new(subcontrol: Subcontrol, states: SkinStates) -> Self {
        Self { subcontrol, states }
    }
}

impl From<Subcontrol> for Aspect {
    fn from(subcontrol: Subcontrol) -> Self {
        Self::new(subcontrol, SkinStates::empty())
    }
}

/// Style hints for one aspect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleHints {
    /// Space between a cell's edges and its content.
    pub padding: Insets,
    /// Placement of content; `None` defers to the skinlet default.
    pub alignment: Option<Alignment>,
    /// Eliding and wrapping of text content.
    pub text_options: TextOptions,
    /// Fill color of boxes, or the color of text.
    pub color: Color,
    /// Border color of boxes.
    pub border_color: Color,
    /// Border widths of boxes.
    pub border: Insets,
    /// Color substitutions for graphics.
    pub color_filter: ColorFilter,
}

/// Anything that can answer style hint queries.
pub trait StyleSource {
    /// Returns the hints for `aspect`.
    fn style_hint(&self, aspect: Aspect) -> StyleHints;
}

/// Row parity, used for alternating row styling.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Parity {
    /// Rows 0, 2, 4, …
    Even,
    /// Rows 1, 3, 5, …
    Odd,
}

impl Parity {
    /// Parity of `row`.
    #[must_use]
    pub const fn of(row: usize) -> Self {
        if row % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

/// Per-row style key, derived fresh for every row of every pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RowStyleKey {
    /// The row is the selected row.
    pub is_selected: bool,
    /// Parity of the row index.
    pub parity: Parity,
    /// States of the control itself.
    pub skin_states: SkinStates,
}

impl RowStyleKey {
    /// Key for `row` given the current selection and control states.
    #[must_use]
    pub fn for_row(row: usize, selected_row: Option<usize>, skin_states: SkinStates) -> Self {
        Self {
            is_selected: selected_row == Some(row),
            parity: Parity::of(row),
            skin_states,
        }
    }

    /// The effective states for a style lookup.
    ///
    /// `alternating` enables [`SkinStates::ALTERNATE`] for odd rows.
    #[must_use]
    pub fn states(&self, alternating: bool) -> SkinStates {
        let mut states = self.skin_states;
        states.set(SkinStates::SELECTED, self.is_selected);
        states.set(
            SkinStates::ALTERNATE,
            alternating && self.parity == Parity::Odd,
        );
        states
    }
}

/// Resolve hints for `subcontrol` in a given row without touching control state.
///
/// The row's selection and parity are folded into the lookup states here;
/// the control's own states are only read.
pub fn resolve_style<S: StyleSource + ?Sized>(
    source: &S,
    subcontrol: Subcontrol,
    key: RowStyleKey,
    alternating: bool,
) -> StyleHints {
    source.style_hint(Aspect::new(subcontrol, key.states(alternating)))
}

/// A table of style hints with state fallback.
///
/// ```rust
/// use understory_list_skinlet::{Aspect, SkinStates, StyleHints, StyleTable, Subcontrol};
/// use understory_scene::Color;
///
/// let mut table = StyleTable::new();
/// table.set(Subcontrol::Cell, StyleHints { color: Color::WHITE, ..StyleHints::default() });
///
/// // No entry for the alternate state: falls back to the plain cell.
/// let hints = table.resolve(Aspect::new(Subcontrol::Cell, SkinStates::ALTERNATE));
/// assert_eq!(hints.color, Color::WHITE);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleTable {
    hints: HashMap<Aspect, StyleHints>,
}

impl StyleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hints for an aspect, replacing any previous entry.
    pub fn set(&mut self, aspect: impl Into<Aspect>, hints: StyleHints) {
        self.hints.insert(aspect.into(), hints);
    }

    /// Updates the hints of an aspect in place, starting from its resolved value.
    pub fn update(&mut self, aspect: impl Into<Aspect>, f: impl FnOnce(&mut StyleHints)) {
        let aspect = aspect.into();
        let mut hints = self.resolve(aspect);
        f(&mut hints);
        self.hints.insert(aspect, hints);
    }

    /// Returns the exact entry for an aspect, without fallback.
    #[must_use]
    pub fn get(&self, aspect: Aspect) -> Option<&StyleHints> {
        self.hints.get(&aspect)
    }

    /// Resolves hints for an aspect.
    ///
    /// Tries the exact states first, then repeatedly drops the highest set
    /// state bit, ending at the state-less entry. Returns default hints when
    /// nothing matches.
    #[must_use]
    pub fn resolve(&self, aspect: Aspect) -> StyleHints {
        let mut states = aspect.states;
        loop {
            if let Some(hints) = self.hints.get(&Aspect::new(aspect.subcontrol, states)) {
                return hints.clone();
            }
            if states.is_empty() {
                return StyleHints::default();
            }
            states = drop_highest(states);
        }
    }
}

impl StyleSource for StyleTable {
    fn style_hint(&self, aspect: Aspect) -> StyleHints {
        self.resolve(aspect)
    }
}

fn drop_highest(states: SkinStates) -> SkinStates {
    let bits = states.bits();
    let highest = 1_u16 << (15 - bits.leading_zeros());
    SkinStates::from_bits_retain(bits & !highest)
}
