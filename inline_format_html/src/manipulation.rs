// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatting edits applied to the whole of an HTML fragment.
//!
//! Each helper imports the fragment, selects everything, applies one setter and exports the
//! result with the default formatters.

use inline_format::formatter::{
    set_color, set_font_weight, set_letter_spacing, toggle_bold, toggle_italic, toggle_underline,
    toggle_uppercase,
};
use inline_format::{Error, FontWeight, FormatValue, FormatterRegistry, Rgba};
use styled_content::EditorState;

use crate::{
    export_html, export_html_with, import_html, import_html_with, ExportOptions, ImportOptions,
};

/// Imports `html`, applies `edit` to all of it and exports the result.
pub fn apply_to_html(html: &str, edit: impl FnOnce(&EditorState) -> EditorState) -> String {
    let state = EditorState::with_all_selected(import_html(html));
    export_html(edit(&state).content())
}

/// Runs a setter looked up by name in `registry` over all of `html`.
pub fn set_value_in_html(
    html: &str,
    registry: &FormatterRegistry,
    formatter: &str,
    setter: &str,
    value: Option<FormatValue>,
) -> Result<String, Error> {
    let content = import_html_with(html, registry, &ImportOptions::default());
    let state = EditorState::with_all_selected(content);
    let edited = registry.set_value(&state, formatter, setter, value)?;
    Ok(export_html_with(
        edited.content(),
        registry,
        &ExportOptions::default(),
    ))
}

/// Toggles bold over all of `html`.
pub fn toggle_bold_in_html(html: &str, flag: Option<bool>) -> String {
    apply_to_html(html, |state| toggle_bold(state, flag))
}

/// Sets the font weight of all of `html`.
pub fn set_font_weight_in_html(html: &str, weight: FontWeight) -> String {
    apply_to_html(html, |state| set_font_weight(state, weight))
}

/// Toggles italic over all of `html`.
pub fn toggle_italic_in_html(html: &str, flag: Option<bool>) -> String {
    apply_to_html(html, |state| toggle_italic(state, flag))
}

/// Toggles underline over all of `html`.
pub fn toggle_underline_in_html(html: &str, flag: Option<bool>) -> String {
    apply_to_html(html, |state| toggle_underline(state, flag))
}

/// Toggles uppercase over all of `html`.
pub fn toggle_uppercase_in_html(html: &str, flag: Option<bool>) -> String {
    apply_to_html(html, |state| toggle_uppercase(state, flag))
}

/// Sets the letter spacing of all of `html`, in hundredths of an em.
pub fn set_letter_spacing_in_html(html: &str, spacing: i16) -> String {
    apply_to_html(html, |state| set_letter_spacing(state, spacing))
}

/// Sets the color of all of `html`.
pub fn set_color_in_html(html: &str, color: Rgba) -> String {
    apply_to_html(html, |state| set_color(state, color))
}
