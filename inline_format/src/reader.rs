// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Queries over the styles of a selection.
//!
//! A query result of `None` is the "no style of this prefix" sentinel. It only ever appears in
//! query results; it is never stored on a character.

use smallvec::SmallVec;
use styled_content::{Content, ContentRange, EditorState, StyleName, StyleSet};

use crate::Prefix;

/// The style of one prefix found on a character, or `None` if the character has none.
pub type PrefixMatch = Option<StyleName>;

/// The distinct [`PrefixMatch`]es of a selection, in order of first appearance.
pub type PrefixMatches = SmallVec<[PrefixMatch; 4]>;

/// Returns the style name of `prefix` carried by `styles`, if any.
///
/// Style names of different prefixes never share a prefix, so the first match is the only one.
pub fn get_prefix_style_for_character(styles: &StyleSet, prefix: Prefix) -> PrefixMatch {
    styles.iter().find(|name| prefix.matches(name.as_str())).cloned()
}

/// Returns the style set of every character touched by `range`, in document order.
///
/// The first block is read from the start offset, the last block up to the end offset, and
/// interior blocks in full.
pub fn get_all_style_sets_in_selection(content: &Content, range: ContentRange) -> Vec<&StyleSet> {
    content
        .block_ranges(range)
        .flat_map(|(block, chars)| &block.styles()[chars])
        .collect()
}

/// Returns the distinct styles of `prefix` across the current selection.
///
/// For a cursor, or a range that touches no characters, the result has exactly one element,
/// taken from the style the next typed character would receive. Otherwise it holds one entry
/// per distinct style found, including `None` when some character has no style of `prefix`.
pub fn get_prefix_styles_in_selection(state: &EditorState, prefix: Prefix) -> PrefixMatches {
    let range = state.selection_range();
    let styles = get_all_style_sets_in_selection(state.content(), range);
    if range.is_collapsed() || styles.is_empty() {
        let pending = state.current_inline_style();
        return smallvec::smallvec![get_prefix_style_for_character(&pending, prefix)];
    }

    let mut matches = PrefixMatches::new();
    for set in styles {
        let found = get_prefix_style_for_character(set, prefix);
        if !matches.contains(&found) {
            matches.push(found);
        }
    }
    matches
}
