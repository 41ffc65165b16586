// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_content::{EditorState, StyleSet};

use super::{
    decode_in, decode_match, selection_value, FormatValue, Formatter, Getter, SelectionValue,
    Setter,
};
use crate::css::{format_css_color, parse_css_color, CssDeclaration, InlineElement};
use crate::mutator::toggle_prefix_style;
use crate::reader::{get_prefix_styles_in_selection, PrefixMatch};
use crate::{Error, Prefix, Rgba, StyleToken};

/// Text color, written as `color`. Opaque black is the default and is never stored.
#[derive(Copy, Clone, Debug, Default)]
pub struct ColorFormatter;

impl Formatter for ColorFormatter {
    fn name(&self) -> &'static str {
        "color"
    }

    fn prefix(&self) -> Prefix {
        Prefix::Color
    }

    fn auto_focus(&self) -> bool {
        false
    }

    fn element_to_style(&self, element: &InlineElement<'_>) -> Option<StyleToken> {
        let color = parse_css_color(element.style("color")?)?;
        (!is_default(color)).then_some(StyleToken::Color(color))
    }

    fn styles_to_css(&self, styles: &StyleSet) -> Option<CssDeclaration> {
        match decode_in(styles, Prefix::Color)? {
            StyleToken::Color(color) if !is_default(color) => {
                Some(CssDeclaration::new("color", format_css_color(color)))
            }
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
    name: "color",
    get: |state| get_color(state).into(),
}];

static SETTERS: [Setter; 1] = [Setter {
    name: "setColor",
    set: |state, value| match value {
        Some(FormatValue::Color(color)) => Ok(set_color(state, color)),
        _ => Err(Error::mismatched_value("setColor", "a color")),
    },
}];

/// Opaque black, at the precision colors are stored with.
fn is_default(color: Rgba) -> bool {
    (color.r, color.g, color.b) == (0, 0, 0) && color.alpha_percent() == 100
}

fn color_of(found: &PrefixMatch) -> Rgba {
    match decode_match(found) {
        Some(StyleToken::Color(color)) => color,
        _ => Rgba::BLACK,
    }
}

/// The text color of the selection. Text without a color reads as [`Rgba::BLACK`].
pub fn get_color(state: &EditorState) -> SelectionValue<Rgba> {
    selection_value(&get_prefix_styles_in_selection(state, Prefix::Color), color_of)
}

/// Sets the color of the whole selection. Opaque black strips the color instead.
pub fn set_color(state: &EditorState, color: Rgba) -> EditorState {
    let should_set = |_: &[PrefixMatch]| !is_default(color);
    let style_to_set = |_: &[PrefixMatch]| StyleToken::Color(color);
    toggle_prefix_style(state, Prefix::Color, Some(&should_set), Some(&style_to_set))
}
