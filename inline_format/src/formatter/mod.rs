// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatters: one per inline property, each bundling the HTML mapping and the getters and
//! setters a toolbar drives.

mod color;
mod italic;
mod letter_spacing;
mod underline;
mod uppercase;
mod weight;

pub use color::{get_color, set_color, ColorFormatter};
pub use italic::{is_italic, toggle_italic, ItalicFormatter};
pub use letter_spacing::{get_letter_spacing, set_letter_spacing, LetterSpacingFormatter};
pub use underline::{is_underline, toggle_underline, UnderlineFormatter};
pub use uppercase::{is_uppercase, toggle_uppercase, UppercaseFormatter};
pub use weight::{get_font_weight, is_bold, set_font_weight, toggle_bold, WeightFormatter};

use std::collections::BTreeMap;
use std::fmt;

use styled_content::{EditorState, StyleSet};

use crate::css::{CssDeclaration, InlineElement};
use crate::mutator::toggle_prefix_style;
use crate::reader::{get_prefix_style_for_character, get_prefix_styles_in_selection, PrefixMatch};
use crate::{Error, FontWeight, Prefix, Rgba, StyleToken};

/// One inline property: how it is read from and written to HTML, and how it is queried and
/// changed on an [`EditorState`].
pub trait Formatter: Send + Sync {
    /// The name this formatter is registered under.
    fn name(&self) -> &'static str;

    /// The prefix of the style names this formatter owns.
    fn prefix(&self) -> Prefix;

    /// Whether the editor should regain focus after one of the setters is used.
    fn auto_focus(&self) -> bool;

    /// Reads the style of this property from an inline element, if it carries one.
    fn element_to_style(&self, element: &InlineElement<'_>) -> Option<StyleToken>;

    /// Converts the style of this property in `styles` to CSS, or `None` if there is nothing to
    /// write.
    fn styles_to_css(&self, styles: &StyleSet) -> Option<CssDeclaration>;

    /// The named getters.
    fn getters(&self) -> &'static [Getter];

    /// The named setters.
    fn setters(&self) -> &'static [Setter];
}

/// A named query over the selection.
#[derive(Clone, Copy)]
pub struct Getter {
    /// The accessor name, such as `isBold`.
    pub name: &'static str,
    /// The query.
    pub get: fn(&EditorState) -> FormatValue,
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Getter").field(&self.name).finish()
    }
}

/// A named edit of the selection.
#[derive(Clone, Copy)]
pub struct Setter {
    /// The accessor name, such as `toggleBold`.
    pub name: &'static str,
    /// The edit. Flag toggles take an optional [`FormatValue::Flag`]; valued setters require a
    /// value of their kind.
    pub set: fn(&EditorState, Option<FormatValue>) -> Result<EditorState, Error>,
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Setter").field(&self.name).finish()
    }
}

/// The value of a property across a selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionValue<T> {
    /// Every touched character resolves to this value.
    Uniform(T),
    /// The selection holds more than one distinct style of the property.
    Multiple,
}

impl<T> SelectionValue<T> {
    /// The value, unless the selection is mixed.
    pub fn uniform(self) -> Option<T> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::Multiple => None,
        }
    }

    /// Returns `true` if the selection is mixed.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple)
    }
}

/// A getter result or setter argument in dynamically dispatched form.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FormatValue {
    /// A flag property, or the explicit direction of a toggle.
    Flag(bool),
    /// A font weight.
    Weight(FontWeight),
    /// Letter spacing in hundredths of an em.
    LetterSpacing(i16),
    /// A color.
    Color(Rgba),
    /// The selection holds more than one distinct value.
    Multiple,
}

impl From<bool> for FormatValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<FontWeight> for FormatValue {
    fn from(value: FontWeight) -> Self {
        Self::Weight(value)
    }
}

impl From<i16> for FormatValue {
    fn from(value: i16) -> Self {
        Self::LetterSpacing(value)
    }
}

impl From<Rgba> for FormatValue {
    fn from(value: Rgba) -> Self {
        Self::Color(value)
    }
}

impl<T: Into<Self>> From<SelectionValue<T>> for FormatValue {
    fn from(value: SelectionValue<T>) -> Self {
        match value {
            SelectionValue::Uniform(value) => value.into(),
            SelectionValue::Multiple => Self::Multiple,
        }
    }
}

/// The set of formatters in use, keyed by name.
///
/// [`Default`] holds the six built-in formatters. Iteration is in name order, which also fixes
/// the order of exported CSS declarations.
pub struct FormatterRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.formatters.keys()).finish()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(WeightFormatter);
        registry.register(ItalicFormatter);
        registry.register(UnderlineFormatter);
        registry.register(LetterSpacingFormatter);
        registry.register(ColorFormatter);
        registry.register(UppercaseFormatter);
        registry
    }
}

impl FormatterRegistry {
    /// A registry with no formatters.
    pub fn empty() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// Adds `formatter`, returning the one it replaces under the same name.
    pub fn register(&mut self, formatter: impl Formatter + 'static) -> Option<Box<dyn Formatter>> {
        self.formatters.insert(formatter.name(), Box::new(formatter))
    }

    /// Removes the formatter registered under `name`.
    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn Formatter>> {
        self.formatters.remove(name)
    }

    /// The formatter registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| &**f)
    }

    /// Every formatter, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Formatter> + '_ {
        self.formatters.values().map(|f| &**f)
    }

    /// Collects the styles every formatter reads from `element`.
    pub fn element_to_styles(&self, element: &InlineElement<'_>) -> Vec<StyleToken> {
        self.iter()
            .filter_map(|f| f.element_to_style(element))
            .collect()
    }

    /// Collects the CSS every formatter writes for `styles`.
    pub fn styles_to_css(&self, styles: &StyleSet) -> Vec<CssDeclaration> {
        self.iter().filter_map(|f| f.styles_to_css(styles)).collect()
    }

    /// Runs the getter `getter` of the formatter `formatter`.
    pub fn get_value(
        &self,
        state: &EditorState,
        formatter: &str,
        getter: &str,
    ) -> Result<FormatValue, Error> {
        let formatter = self
            .get(formatter)
            .ok_or_else(|| Error::unknown_formatter(formatter))?;
        let getter = formatter
            .getters()
            .iter()
            .find(|g| g.name == getter)
            .ok_or_else(|| Error::unknown_accessor(getter))?;
        Ok((getter.get)(state))
    }

    /// Runs the setter `setter` of the formatter `formatter` with `value`.
    pub fn set_value(
        &self,
        state: &EditorState,
        formatter: &str,
        setter: &str,
        value: Option<FormatValue>,
    ) -> Result<EditorState, Error> {
        let formatter = self
            .get(formatter)
            .ok_or_else(|| Error::unknown_formatter(formatter))?;
        let setter = formatter
            .setters()
            .iter()
            .find(|s| s.name == setter)
            .ok_or_else(|| Error::unknown_accessor(setter))?;
        let result = (setter.set)(state, value);
        if let Err(err) = &result {
            log::debug!("{}.{}: {err}", formatter.name(), setter.name);
        }
        result
    }
}

/// Decodes a query match, treating undecodable names like a missing style.
pub(crate) fn decode_match(found: &PrefixMatch) -> Option<StyleToken> {
    let name = found.as_ref()?;
    let token = StyleToken::from_style_name(name.as_str());
    if token.is_none() {
        log::debug!("ignoring undecodable style {name}");
    }
    token
}

/// Decodes the style of `prefix` carried by one character.
pub(crate) fn decode_in(styles: &StyleSet, prefix: Prefix) -> Option<StyleToken> {
    decode_match(&get_prefix_style_for_character(styles, prefix))
}

/// Collapses the matches of a query into one value.
pub(crate) fn selection_value<T>(
    found: &[PrefixMatch],
    resolve: impl Fn(&PrefixMatch) -> T,
) -> SelectionValue<T> {
    match found {
        [] => SelectionValue::Uniform(resolve(&None)),
        [only] => SelectionValue::Uniform(resolve(only)),
        _ => SelectionValue::Multiple,
    }
}

/// Returns `true` if no touched character lacks the flag.
pub(crate) fn has_flag(state: &EditorState, prefix: Prefix) -> bool {
    !get_prefix_styles_in_selection(state, prefix).contains(&None)
}

/// Toggles a flag, forcing the direction when `flag` is given.
pub(crate) fn toggle_flag(state: &EditorState, prefix: Prefix, flag: Option<bool>) -> EditorState {
    match flag {
        Some(flag) => {
            let should_set = |_: &[PrefixMatch]| flag;
            toggle_prefix_style(state, prefix, Some(&should_set), None)
        }
        None => toggle_prefix_style(state, prefix, None, None),
    }
}

/// Unpacks the argument of a flag toggle.
pub(crate) fn flag_argument(
    accessor: &'static str,
    value: Option<FormatValue>,
) -> Result<Option<bool>, Error> {
    match value {
        None => Ok(None),
        Some(FormatValue::Flag(flag)) => Ok(Some(flag)),
        Some(_) => Err(Error::mismatched_value(accessor, "an optional flag")),
    }
}
