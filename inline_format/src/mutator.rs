// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The toggle/set algorithm shared by every formatter.

use styled_content::{ChangeType, EditorState, StyleName};

use crate::reader::{get_prefix_style_for_character, get_prefix_styles_in_selection, PrefixMatch};
use crate::{Prefix, StyleToken};

/// Decides whether a style should be present after the toggle, given the styles found.
pub type ShouldSetStyle<'a> = &'a dyn Fn(&[PrefixMatch]) -> bool;

/// Picks the style to set, given the styles found.
pub type GetStyleToSet<'a> = &'a dyn Fn(&[PrefixMatch]) -> StyleToken;

/// Toggles or replaces the style of `prefix` on the current selection.
///
/// The two callbacks customize the decision and the value; without them the toggle behaves
/// like a flag and sets the bare prefix as the style name.
///
/// For a cursor only the pending inline style changes, so the result shows up on the next typed
/// character. The default there is a plain flip: on if the pending style lacks `prefix`, off
/// otherwise.
///
/// For a range every style of `prefix` is stripped from every selected character, and then, if
/// the style should be set, one style is applied to the whole range. The default there turns
/// the style on when any selected character lacks it, so a mixed range becomes uniformly styled
/// and toggling again clears it. The whole range edit is recorded as a single
/// [`ChangeType::ChangeInlineStyle`] undo step.
pub fn toggle_prefix_style(
    state: &EditorState,
    prefix: Prefix,
    should_set_style: Option<ShouldSetStyle<'_>>,
    get_style_to_set: Option<GetStyleToSet<'_>>,
) -> EditorState {
    let style_to_set = |found: &[PrefixMatch]| -> StyleName {
        match get_style_to_set {
            Some(get) => get(found).to_style_name(),
            None => prefix.flag_style(),
        }
    };

    if state.selection().is_collapsed() {
        let mut pending = state.current_inline_style();
        let found = get_prefix_style_for_character(&pending, prefix);
        if let Some(name) = &found {
            pending.remove(name.as_str());
        }
        let found = [found];
        let will_add = match should_set_style {
            Some(should) => should(&found),
            None => found[0].is_none(),
        };
        if will_add {
            pending.insert(style_to_set(&found));
        }
        log::trace!("{prefix} on cursor: pending style set to {pending:?}");
        return state.set_inline_style_override(pending);
    }

    let range = state.selection_range();
    let found = get_prefix_styles_in_selection(state, prefix);
    let mut content = state.content().clone();
    for name in found.iter().flatten() {
        content = content.remove_inline_style(range, name.as_str());
    }

    let will_set = match should_set_style {
        Some(should) => should(&found),
        None => found.contains(&None),
    };
    if will_set {
        let name = style_to_set(&found);
        log::trace!("{prefix} on range: setting {name}");
        content = content.apply_inline_style(range, &name);
    } else {
        log::trace!("{prefix} on range: cleared");
    }
    state.push(content, ChangeType::ChangeInlineStyle)
}
