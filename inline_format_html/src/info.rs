// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use inline_format::formatter::{
    get_color, get_font_weight, get_letter_spacing, is_bold, is_italic, is_underline,
    is_uppercase,
};
use inline_format::{font_variants, FontVariant, FontWeight, Rgba, SelectionValue};
use styled_content::EditorState;

use crate::import_html;

/// The formatting of a whole HTML fragment, as a toolbar shows it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HtmlInfo {
    /// The font weight, or [`SelectionValue::Multiple`] if the text mixes weights.
    pub font_weight: SelectionValue<FontWeight>,
    /// Whether all text is bold.
    pub is_bold: bool,
    /// Whether all text is italic.
    pub is_italic: bool,
    /// Whether all text is underlined.
    pub is_underline: bool,
    /// Whether all text is uppercase.
    pub is_uppercase: bool,
    /// The letter spacing in hundredths of an em.
    pub letter_spacing: SelectionValue<i16>,
    /// The text color.
    pub color: SelectionValue<Rgba>,
}

impl HtmlInfo {
    /// The formatting of everything in `state`.
    pub fn of_state(state: &EditorState) -> Self {
        let state = state.select_all();
        Self {
            font_weight: get_font_weight(&state),
            is_bold: is_bold(&state),
            is_italic: is_italic(&state),
            is_underline: is_underline(&state),
            is_uppercase: is_uppercase(&state),
            letter_spacing: get_letter_spacing(&state),
            color: get_color(&state),
        }
    }

    /// Combines the formatting of two fragments, as when several text elements are selected.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        fn same<T: PartialEq>(a: SelectionValue<T>, b: SelectionValue<T>) -> SelectionValue<T> {
            if a == b {
                a
            } else {
                SelectionValue::Multiple
            }
        }
        Self {
            font_weight: same(self.font_weight, other.font_weight),
            is_bold: self.is_bold && other.is_bold,
            is_italic: self.is_italic && other.is_italic,
            is_underline: self.is_underline && other.is_underline,
            is_uppercase: self.is_uppercase && other.is_uppercase,
            letter_spacing: same(self.letter_spacing, other.letter_spacing),
            color: same(self.color, other.color),
        }
    }
}

/// Reads the formatting of a whole HTML fragment.
pub fn get_html_info(html: &str) -> HtmlInfo {
    HtmlInfo::of_state(&EditorState::new(import_html(html)))
}

/// Returns the distinct italic/weight combinations an HTML fragment uses.
///
/// An empty fragment reports the default upright, normal weight face. The order is unspecified.
pub fn get_font_variants(html: &str) -> Vec<FontVariant> {
    font_variants(&EditorState::new(import_html(html)))
}
