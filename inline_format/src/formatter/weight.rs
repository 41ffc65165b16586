// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_content::{EditorState, StyleSet};

use super::{
    decode_in, decode_match, flag_argument, selection_value, FormatValue, Formatter, Getter,
    SelectionValue, Setter,
};
use crate::css::{parse_font_weight, CssDeclaration, InlineElement};
use crate::mutator::toggle_prefix_style;
use crate::reader::{get_prefix_styles_in_selection, PrefixMatch};
use crate::{Error, FontWeight, Prefix, StyleToken};

/// Font weight, written as `font-weight`.
#[derive(Copy, Clone, Debug, Default)]
pub struct WeightFormatter;

impl Formatter for WeightFormatter {
    fn name(&self) -> &'static str {
        "weight"
    }

    fn prefix(&self) -> Prefix {
        Prefix::Weight
    }

    fn auto_focus(&self) -> bool {
        true
    }

    fn element_to_style(&self, element: &InlineElement<'_>) -> Option<StyleToken> {
        let weight = parse_font_weight(element.style("font-weight")?)?;
        (weight != FontWeight::NORMAL).then_some(StyleToken::Weight(weight))
    }

    fn styles_to_css(&self, styles: &StyleSet) -> Option<CssDeclaration> {
        match decode_in(styles, Prefix::Weight)? {
            StyleToken::Weight(weight) if weight != FontWeight::NORMAL => Some(
                CssDeclaration::new("font-weight", weight.value().to_string()),
            ),
            _ => None,
        }
    }

    fn getters(&self) -> &'static [Getter] {
        &GETTERS
    }

    fn setters(&self) -> &'static [Setter] {
        &SETTERS
    }
}

static GETTERS: [Getter; 2] = [
    Getter {
        name: "fontWeight",
        get: font_weight_value,
    },
    Getter {
        name: "isBold",
        get: is_bold_value,
    },
];

static SETTERS: [Setter; 2] = [
    Setter {
        name: "toggleBold",
        set: toggle_bold_value,
    },
    Setter {
        name: "setFontWeight",
        set: set_font_weight_value,
    },
];

fn font_weight_value(state: &EditorState) -> FormatValue {
    get_font_weight(state).into()
}

fn is_bold_value(state: &EditorState) -> FormatValue {
    is_bold(state).into()
}

fn toggle_bold_value(
    state: &EditorState,
    value: Option<FormatValue>,
) -> Result<EditorState, Error> {
    Ok(toggle_bold(state, flag_argument("toggleBold", value)?))
}

fn set_font_weight_value(
    state: &EditorState,
    value: Option<FormatValue>,
) -> Result<EditorState, Error> {
    match value {
        Some(FormatValue::Weight(weight)) => Ok(set_font_weight(state, weight)),
        _ => Err(Error::mismatched_value("setFontWeight", "a font weight")),
    }
}

fn weight_of(found: &PrefixMatch) -> FontWeight {
    match decode_match(found) {
        Some(StyleToken::Weight(weight)) => weight,
        _ => FontWeight::NORMAL,
    }
}

/// The font weight of the selection. Text without a weight reads as [`FontWeight::NORMAL`].
pub fn get_font_weight(state: &EditorState) -> SelectionValue<FontWeight> {
    selection_value(&get_prefix_styles_in_selection(state, Prefix::Weight), weight_of)
}

/// Returns `true` if every weight in the selection is bold.
pub fn is_bold(state: &EditorState) -> bool {
    get_prefix_styles_in_selection(state, Prefix::Weight)
        .iter()
        .all(|found| weight_of(found).is_bold())
}

/// Toggles bold.
///
/// Without `flag`, bold turns on when any weight in the selection is below bold and off
/// otherwise. Turning bold on keeps the heaviest weight present if that is already bold, and
/// uses [`FontWeight::BOLD`] if not. Turning it off strips the weight.
pub fn toggle_bold(state: &EditorState, flag: Option<bool>) -> EditorState {
    let should_set = |found: &[PrefixMatch]| {
        flag.unwrap_or_else(|| found.iter().any(|m| !weight_of(m).is_bold()))
    };
    let style_to_set = |found: &[PrefixMatch]| {
        let heaviest = found.iter().map(weight_of).max().unwrap_or_default();
        StyleToken::Weight(if heaviest.is_bold() {
            heaviest
        } else {
            FontWeight::BOLD
        })
    };
    toggle_prefix_style(state, Prefix::Weight, Some(&should_set), Some(&style_to_set))
}

/// Sets `weight` on the whole selection. [`FontWeight::NORMAL`] strips the weight instead.
///
/// Weights outside 100 to 900 are clamped into that range.
pub fn set_font_weight(state: &EditorState, weight: FontWeight) -> EditorState {
    let weight = weight.clamped();
    let should_set = |_: &[PrefixMatch]| weight != FontWeight::NORMAL;
    let style_to_set = |_: &[PrefixMatch]| StyleToken::Weight(weight);
    toggle_prefix_style(state, Prefix::Weight, Some(&should_set), Some(&style_to_set))
}
