// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_content::{EditorState, StyleSet};

use super::{
    decode_in, decode_match, selection_value, FormatValue, Formatter, Getter, SelectionValue,
    Setter,
};
use crate::css::{parse_em_length, CssDeclaration, InlineElement};
use crate::mutator::toggle_prefix_style;
use crate::reader::{get_prefix_styles_in_selection, PrefixMatch};
use crate::{Error, Prefix, StyleToken};

/// Letter spacing in hundredths of an em, written as `letter-spacing: <n>em`.
///
/// Lengths in units other than `em` are not imported.
#[derive(Copy, Clone, Debug, Default)]
pub struct LetterSpacingFormatter;

impl Formatter for LetterSpacingFormatter {
    fn name(&self) -> &'static str {
        "letterSpacing"
    }

    fn prefix(&self) -> Prefix {
        Prefix::LetterSpacing
    }

    fn auto_focus(&self) -> bool {
        false
    }

    fn element_to_style(&self, element: &InlineElement<'_>) -> Option<StyleToken> {
        let em = parse_em_length(element.style("letter-spacing")?)?;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The value is clamped to the i16 range before the cast."
        )]
        let spacing = (em * 100.0)
            .round()
            .clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16;
        (spacing != 0).then_some(StyleToken::LetterSpacing(spacing))
    }

    fn styles_to_css(&self, styles: &StyleSet) -> Option<CssDeclaration> {
        match decode_in(styles, Prefix::LetterSpacing)? {
            StyleToken::LetterSpacing(spacing) if spacing != 0 => Some(CssDeclaration::new(
                "letter-spacing",
                format!("{}em", f32::from(spacing) / 100.0),
            )),
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

static GETTERS: [Getter; 1] = [Getter {
    name: "letterSpacing",
    get: |state| get_letter_spacing(state).into(),
}];

static SETTERS: [Setter; 1] = [Setter {
    name: "setLetterSpacing",
    set: |state, value| match value {
        Some(FormatValue::LetterSpacing(spacing)) => Ok(set_letter_spacing(state, spacing)),
        _ => Err(Error::mismatched_value(
            "setLetterSpacing",
            "a letter spacing",
        )),
    },
}];

fn spacing_of(found: &PrefixMatch) -> i16 {
    match decode_match(found) {
        Some(StyleToken::LetterSpacing(spacing)) => spacing,
        _ => 0,
    }
}

/// The letter spacing of the selection, in hundredths of an em.
pub fn get_letter_spacing(state: &EditorState) -> SelectionValue<i16> {
    selection_value(
        &get_prefix_styles_in_selection(state, Prefix::LetterSpacing),
        spacing_of,
    )
}

/// Sets the letter spacing of the whole selection. `0` strips it instead.
pub fn set_letter_spacing(state: &EditorState, spacing: i16) -> EditorState {
    let should_set = |_: &[PrefixMatch]| spacing != 0;
    let style_to_set = |_: &[PrefixMatch]| StyleToken::LetterSpacing(spacing);
    toggle_prefix_style(
        state,
        Prefix::LetterSpacing,
        Some(&should_set),
        Some(&style_to_set),
    )
}
