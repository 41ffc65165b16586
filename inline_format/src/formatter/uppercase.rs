// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_content::{EditorState, StyleSet};

use super::{decode_in, flag_argument, has_flag, toggle_flag, Formatter, Getter, Setter};
use crate::css::{CssDeclaration, InlineElement};
use crate::{Prefix, StyleToken};

/// Text shown in capitals, written as `text-transform: uppercase`.
#[derive(Copy, Clone, Debug, Default)]
pub struct UppercaseFormatter;

impl Formatter for UppercaseFormatter {
    fn name(&self) -> &'static str {
        "uppercase"
    }

    fn prefix(&self) -> Prefix {
        Prefix::Uppercase
    }

    fn auto_focus(&self) -> bool {
        true
    }

    fn element_to_style(&self, element: &InlineElement<'_>) -> Option<StyleToken> {
        element
            .style("text-transform")?
            .eq_ignore_ascii_case("uppercase")
            .then_some(StyleToken::Uppercase)
    }

    fn styles_to_css(&self, styles: &StyleSet) -> Option<CssDeclaration> {
        matches!(decode_in(styles, Prefix::Uppercase)?, StyleToken::Uppercase)
            .then(|| CssDeclaration::new("text-transform", "uppercase"))
    }

    fn getters(&self) -> &'static [Getter] {
        &GETTERS
    }

    fn setters(&self) -> &'static [Setter] {
        &SETTERS
    }
}

static GETTERS: [Getter; 1] = [Getter {
    name: "isUppercase",
    get: |state| is_uppercase(state).into(),
}];

static SETTERS: [Setter; 1] = [Setter {
    name: "toggleUppercase",
    set: |state, value| Ok(toggle_uppercase(state, flag_argument("toggleUppercase", value)?)),
}];

/// Returns `true` if the whole selection is uppercase.
pub fn is_uppercase(state: &EditorState) -> bool {
    has_flag(state, Prefix::Uppercase)
}

/// Toggles uppercase.
pub fn toggle_uppercase(state: &EditorState, flag: Option<bool>) -> EditorState {
    toggle_flag(state, Prefix::Uppercase, flag)
}
