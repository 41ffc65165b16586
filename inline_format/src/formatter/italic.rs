// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_content::{EditorState, StyleSet};

use super::{decode_in, flag_argument, has_flag, toggle_flag, Formatter, Getter, Setter};
use crate::css::{CssDeclaration, InlineElement};
use crate::{Prefix, StyleToken};

/// Italic text, written as `font-style: italic`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ItalicFormatter;

impl Formatter for ItalicFormatter {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn prefix(&self) -> Prefix {
        Prefix::Italic
    }

    fn auto_focus(&self) -> bool {
        true
    }

    fn element_to_style(&self, element: &InlineElement<'_>) -> Option<StyleToken> {
        let style = element.style("font-style")?;
        (style.eq_ignore_ascii_case("italic") || style.eq_ignore_ascii_case("oblique"))
            .then_some(StyleToken::Italic)
    }

    fn styles_to_css(&self, styles: &StyleSet) -> Option<CssDeclaration> {
        matches!(decode_in(styles, Prefix::Italic)?, StyleToken::Italic)
            .then(|| CssDeclaration::new("font-style", "italic"))
    }

    fn getters(&self) -> &'static [Getter] {
        &GETTERS
    }

    fn setters(&self) -> &'static [Setter] {
        &SETTERS
    }
}

static GETTERS: [Getter; 1] = [Getter {
    name: "isItalic",
    get: |state| is_italic(state).into(),
}];

static SETTERS: [Setter; 1] = [Setter {
    name: "toggleItalic",
    set: |state, value| Ok(toggle_italic(state, flag_argument("toggleItalic", value)?)),
}];

/// Returns `true` if the whole selection is italic.
pub fn is_italic(state: &EditorState) -> bool {
    has_flag(state, Prefix::Italic)
}

/// Toggles italic. `flag` forces the direction; without it a mixed selection turns italic.
pub fn toggle_italic(state: &EditorState, flag: Option<bool>) -> EditorState {
    toggle_flag(state, Prefix::Italic, flag)
}
