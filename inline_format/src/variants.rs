// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The distinct font faces a piece of content needs.

use hashbrown::HashSet;
use styled_content::{EditorState, StyleSet};

use crate::formatter::decode_in;
use crate::reader::get_all_style_sets_in_selection;
use crate::{FontWeight, Prefix, StyleToken};

/// One font face: italic or upright, at a weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontVariant {
    /// Whether the face is italic.
    pub italic: bool,
    /// The weight of the face.
    pub weight: FontWeight,
}

impl FontVariant {
    /// The variant of text carrying `styles`. Anything but italic and weight is ignored.
    pub fn of_styles(styles: &StyleSet) -> Self {
        let italic = matches!(decode_in(styles, Prefix::Italic), Some(StyleToken::Italic));
        let weight = match decode_in(styles, Prefix::Weight) {
            Some(StyleToken::Weight(weight)) => weight,
            _ => FontWeight::NORMAL,
        };
        Self { italic, weight }
    }

    /// The variant as an `(italic, weight)` pair, italic being `0` or `1`.
    pub fn as_pair(self) -> (u8, u16) {
        (u8::from(self.italic), self.weight.value())
    }
}

/// Returns every distinct [`FontVariant`] in the content of `state`, in order of first
/// appearance.
///
/// Content without characters reports the variant of the style the next typed character would
/// get, so an empty element still asks for one face.
pub fn font_variants(state: &EditorState) -> Vec<FontVariant> {
    let everything = state.select_all().selection_range();
    let sets = get_all_style_sets_in_selection(state.content(), everything);
    if sets.is_empty() {
        return vec![FontVariant::of_styles(&state.current_inline_style())];
    }

    let mut seen = HashSet::new();
    sets.into_iter()
        .map(FontVariant::of_styles)
        .filter(|variant| seen.insert(*variant))
        .collect()
}
