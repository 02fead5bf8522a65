// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of a cell value and its row style into renderable content.

use alloc::string::String;
use understory_scene::{Alignment, Color, ColorFilter, Graphic, TextOptions};

use crate::model::{CellValue, ListViewModel};
use crate::style::{RowStyleKey, StyleHints, Subcontrol, resolve_style};

/// The kind of content node a cell currently holds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ContentKind {
    /// No content node.
    #[default]
    Unset,
    /// A text node.
    Text,
    /// A graphic node.
    Graphic,
}

/// Text ready to be written into a text node.
#[derive(Clone, Debug, PartialEq)]
pub struct TextContent {
    /// The text.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Placement within the cell.
    pub alignment: Alignment,
    /// Eliding and wrapping.
    pub options: TextOptions,
}

/// A graphic ready to be written into a graphic node.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicContent {
    /// The graphic.
    pub graphic: Graphic,
    /// Color substitutions.
    pub filter: ColorFilter,
    /// Placement within the cell.
    pub alignment: Alignment,
}

/// Renderable content of one cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellContent {
    /// See [`TextContent`].
    Text(TextContent),
    /// See [`GraphicContent`].
    Graphic(GraphicContent),
    /// The value could not be rendered; carries its type name.
    Unsupported(&'static str),
}

impl CellContent {
    /// The content node kind this content needs.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Graphic(_) => ContentKind::Graphic,
            Self::Unsupported(_) => ContentKind::Unset,
        }
    }
}

/// A cell with its position and resolved content.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// What to render.
    pub content: CellContent,
}

/// Style hints of one row, resolved once and shared by its cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowStyles {
    /// The row's cell hints, for alignment.
    pub cell: StyleHints,
    /// Hints for text content.
    pub text: StyleHints,
    /// Hints for graphic content.
    pub graphic: StyleHints,
}

impl RowStyles {
    /// Resolves the styles of a row.
    pub fn resolve<M: ListViewModel + ?Sized>(
        model: &M,
        key: RowStyleKey,
        alternating: bool,
    ) -> Self {
        Self {
            cell: resolve_style(model, Subcontrol::Cell, key, alternating),
            text: resolve_style(model, Subcontrol::Text, key, alternating),
            graphic: resolve_style(model, Subcontrol::Graphic, key, alternating),
        }
    }
}

/// Resolves the content of cell (`row`, `col`).
///
/// Alignment comes from the cell hints, falling back to `default_alignment`.
/// Graphics use the model's per-cell filter when it has one and the graphic
/// hints' filter otherwise.
pub fn resolve_cell<M: ListViewModel + ?Sized>(
    model: &M,
    row: usize,
    col: usize,
    styles: &RowStyles,
    default_alignment: Alignment,
) -> ResolvedCell {
    let alignment = styles.cell.alignment.unwrap_or(default_alignment);
    let content = match model.value_at(row, col) {
        CellValue::Text(text) => CellContent::Text(TextContent {
            text,
            color: styles.text.color,
            alignment,
            options: styles.text.text_options,
        }),
        CellValue::Graphic(graphic) => CellContent::Graphic(GraphicContent {
            graphic,
            filter: model
                .graphic_filter_at(row, col)
                .unwrap_or_else(|| styles.graphic.color_filter.clone()),
            alignment,
        }),
        CellValue::Unsupported(type_name) => CellContent::Unsupported(type_name),
    };
    ResolvedCell { row, col, content }
}

/// A small cache holding the styles of the most recently resolved row.
///
/// Cells are visited row by row, so one entry is enough. The cache lives for
/// a single pass.
#[derive(Debug)]
pub(crate) struct RowStyleCache {
    selected_row: Option<usize>,
    alternating: bool,
    row: Option<usize>,
    styles: RowStyles,
}

impl RowStyleCache {
    pub(crate) fn new(selected_row: Option<usize>, alternating: bool) -> Self {
        Self {
            selected_row,
            alternating,
            row: None,
            styles: RowStyles::default(),
        }
    }

    pub(crate) fn get<M: ListViewModel + ?Sized>(&mut self, model: &M, row: usize) -> &RowStyles {
        if self.row != Some(row) {
            let key = RowStyleKey::for_row(row, self.selected_row, model.skin_states());
            self.styles = RowStyles::resolve(model, key, self.alternating);
            self.row = Some(row);
        }
        &self.styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Aspect, SkinStates};
    use crate::testing::GridModel;
    use kurbo::Size;
    use understory_scene::{HAlign, VAlign};

    #[test]
    fn text_takes_color_and_options_from_row_state() {
        let mut model = GridModel::new(10, 2);
        model.selected = Some(1);
        model.style.update(Subcontrol::Text, |h| h.color = Color::BLACK);
        model.style.update(
            Aspect::new(Subcontrol::Text, SkinStates::SELECTED),
            |h| h.color = Color::WHITE,
        );

        let mut cache = RowStyleCache::new(model.selected, false);
        let plain = resolve_cell(&model, 0, 1, cache.get(&model, 0), Alignment::LEFT_CENTER);
        let selected = resolve_cell(&model, 1, 1, cache.get(&model, 1), Alignment::LEFT_CENTER);

        let CellContent::Text(plain) = plain.content else {
            panic!("expected text");
        };
        let CellContent::Text(selected) = selected.content else {
            panic!("expected text");
        };
        assert_eq!(plain.text, "0:1");
        assert_eq!(plain.color, Color::BLACK);
        assert_eq!(selected.color, Color::WHITE);
        assert_eq!(plain.alignment, Alignment::LEFT_CENTER);
    }

    #[test]
    fn cell_alignment_overrides_default() {
        let mut model = GridModel::new(1, 1);
        let right = Alignment::new(HAlign::Right, VAlign::Top);
        model.style.update(Subcontrol::Cell, |h| h.alignment = Some(right));
        let key = RowStyleKey::for_row(0, None, SkinStates::empty());
        let styles = RowStyles::resolve(&model, key, false);
        let cell = resolve_cell(&model, 0, 0, &styles, Alignment::CENTER);
        let CellContent::Text(text) = cell.content else {
            panic!("expected text");
        };
        assert_eq!(text.alignment, right);
    }

    #[test]
    fn per_cell_filter_wins_over_style_filter() {
        let red = Color::from_rgb(255, 0, 0);
        let blue = Color::from_rgb(0, 0, 255);
        let mut model = GridModel::new(2, 1);
        let icon = Graphic::new(7, Size::new(16.0, 16.0));
        model.set_value(0, 0, CellValue::Graphic(icon));
        model.set_value(1, 0, CellValue::Graphic(icon));
        model.style.update(Subcontrol::Graphic, |h| {
            h.color_filter = ColorFilter::new().with_substitution(Color::BLACK, blue);
        });
        model
            .filters
            .insert((1, 0), ColorFilter::new().with_substitution(Color::BLACK, red));

        let mut cache = RowStyleCache::new(None, false);
        let styled = resolve_cell(&model, 0, 0, cache.get(&model, 0), Alignment::CENTER);
        let overridden = resolve_cell(&model, 1, 0, cache.get(&model, 1), Alignment::CENTER);
        let (CellContent::Graphic(styled), CellContent::Graphic(overridden)) =
            (styled.content, overridden.content)
        else {
            panic!("expected graphics");
        };
        assert_eq!(styled.filter.apply(Color::BLACK), blue);
        assert_eq!(overridden.filter.apply(Color::BLACK), red);
    }

    #[test]
    fn unsupported_values_resolve_to_unset_kind() {
        let mut model = GridModel::new(1, 1);
        model.set_value(0, 0, CellValue::Unsupported("DateTime"));
        let styles = RowStyles::default();
        let cell = resolve_cell(&model, 0, 0, &styles, Alignment::CENTER);
        assert_eq!(cell.content, CellContent::Unsupported("DateTime"));
        assert_eq!(cell.content.kind(), ContentKind::Unset);
    }
}
