// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_content::{EditorState, StyleSet};

use super::{decode_in, flag_argument, has_flag, toggle_flag, Formatter, Getter, Setter};
use crate::css::{CssDeclaration, InlineElement};
use crate::{Prefix, StyleToken};

/// Underlined text, written as `text-decoration: underline`.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnderlineFormatter;

impl Formatter for UnderlineFormatter {
    fn name(&self) -> &'static str {
        "underline"
    }

    fn prefix(&self) -> Prefix {
        Prefix::Underline
    }

    fn auto_focus(&self) -> bool {
        true
    }

    fn element_to_style(&self, element: &InlineElement<'_>) -> Option<StyleToken> {
        element
            .style("text-decoration")?
            .split_ascii_whitespace()
            .any(|line| line.eq_ignore_ascii_case("underline"))
            .then_some(StyleToken::Underline)
    }

    fn styles_to_css(&self, styles: &StyleSet) -> Option<CssDeclaration> {
        matches!(decode_in(styles, Prefix::Underline)?, StyleToken::Underline)
            .then(|| CssDeclaration::new("text-decoration", "underline"))
    }

    fn getters(&self) -> &'static [Getter] {
        &GETTERS
    }

    fn setters(&self) -> &'static [Setter] {
        &SETTERS
    }
}

static GETTERS: [Getter; 1] = [Getter {
    name: "isUnderline",
    get: |state| is_underline(state).into(),
}];

static SETTERS: [Setter; 1] = [Setter {
    name: "toggleUnderline",
    set: |state, value| Ok(toggle_underline(state, flag_argument("toggleUnderline", value)?)),
}];

/// Returns `true` if the whole selection is underlined.
pub fn is_underline(state: &EditorState) -> bool {
    has_flag(state, Prefix::Underline)
}

/// Toggles underline.
pub fn toggle_underline(state: &EditorState, flag: Option<bool>) -> EditorState {
    toggle_flag(state, Prefix::Underline, flag)
}
