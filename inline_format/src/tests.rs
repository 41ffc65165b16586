// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_content::{
    ChangeType, Content, ContentBuilder, EditorState, Selection, SelectionPoint, StyleName,
    StyleSet,
};

use crate::css::{parse_style_attribute, CssDeclaration, InlineElement};
use crate::formatter::{
    get_color, get_font_weight, get_letter_spacing, is_bold, is_italic, is_underline,
    set_color, set_font_weight, set_letter_spacing, toggle_bold, toggle_italic, toggle_underline,
    WeightFormatter,
};
use crate::mutator::toggle_prefix_style;
use crate::reader::{get_prefix_styles_in_selection, PrefixMatch};
use crate::{
    font_variants, ErrorKind, FontVariant, FontWeight, FormatValue, FormatterRegistry, Prefix,
    Rgba, SelectionValue, StyleToken,
};

fn styles(names: &[&str]) -> StyleSet {
    names.iter().copied().collect()
}

fn matches(names: &[Option<&str>]) -> Vec<PrefixMatch> {
    names.iter().map(|n| n.map(StyleName::new)).collect()
}

/// "Hello world" with "wo" at weight 700 and "rld" at weight 900.
fn hello_world() -> Content {
    let mut builder = ContentBuilder::new();
    builder
        .push_text("Hello ", &StyleSet::new())
        .push_text("wo", &styles(&["WEIGHT-700"]))
        .push_text("rld", &styles(&["WEIGHT-900"]));
    builder.build()
}

fn select(content: &Content, start: usize, end: usize) -> EditorState {
    let key = content.block(0).unwrap().key();
    EditorState::new(content.clone())
        .with_selection(Selection::new(
            SelectionPoint::new(key, start),
            SelectionPoint::new(key, end),
        ))
        .unwrap()
}

fn weight_at(state: &EditorState, index: usize) -> Option<&str> {
    state
        .content()
        .block(0)
        .unwrap()
        .style_at(index)
        .unwrap()
        .iter()
        .find(|name| Prefix::Weight.matches(name.as_str()))
        .map(StyleName::as_str)
}

#[test]
fn weights_in_the_second_word() {
    let state = select(&hello_world(), 6, 11);
    let found = get_prefix_styles_in_selection(&state, Prefix::Weight);
    assert_eq!(
        found.as_slice(),
        matches(&[Some("WEIGHT-700"), Some("WEIGHT-900")])
    );
    assert_eq!(get_font_weight(&state), SelectionValue::Multiple);
    assert!(is_bold(&state));
}

#[test]
fn weights_in_the_whole_string_include_none() {
    let state = select(&hello_world(), 0, 11);
    let found = get_prefix_styles_in_selection(&state, Prefix::Weight);
    assert_eq!(
        found.as_slice(),
        matches(&[None, Some("WEIGHT-700"), Some("WEIGHT-900")])
    );
    assert!(!is_bold(&state));
}

#[test]
fn cursor_reads_the_previous_character() {
    let state = select(&hello_world(), 7, 7);
    let found = get_prefix_styles_in_selection(&state, Prefix::Weight);
    assert_eq!(found.as_slice(), matches(&[Some("WEIGHT-700")]));
    assert_eq!(get_font_weight(&state), SelectionValue::Uniform(FontWeight::BOLD));
}

#[test]
fn uniform_range_never_reports_none() {
    let state = select(&hello_world(), 8, 11);
    let found = get_prefix_styles_in_selection(&state, Prefix::Weight);
    assert_eq!(found.as_slice(), matches(&[Some("WEIGHT-900")]));
}

#[test]
fn setting_a_weight_over_a_mixed_range_is_uniform() {
    let state = select(&hello_world(), 0, 11);
    let light = set_font_weight(&state, FontWeight(300));
    for index in 0..11 {
        assert_eq!(weight_at(&light, index), Some("WEIGHT-300"), "index {index}");
    }
    assert_eq!(get_font_weight(&light), SelectionValue::Uniform(FontWeight(300)));
    assert_eq!(light.last_change_type(), Some(ChangeType::ChangeInlineStyle));
    assert_eq!(light.undo_depth(), 1);
    assert_eq!(light.undo().content(), state.content());
}

#[test]
fn normal_weight_strips_the_style() {
    let state = select(&hello_world(), 0, 11);
    let normal = set_font_weight(&state, FontWeight::NORMAL);
    assert!((0..11).all(|index| weight_at(&normal, index).is_none()));
    assert_eq!(get_font_weight(&normal), SelectionValue::Uniform(FontWeight::NORMAL));
}

#[test]
fn default_toggle_alternates_on_a_range() {
    let content = Content::from_text("Hello world");
    let state = select(&content, 0, 11);
    let partial = toggle_prefix_style(&select(&content, 3, 6), Prefix::Italic, None, None);
    let mixed = partial.with_selection(state.selection()).unwrap();
    assert_eq!(
        get_prefix_styles_in_selection(&mixed, Prefix::Italic).as_slice(),
        matches(&[None, Some("ITALIC")])
    );

    let on = toggle_prefix_style(&mixed, Prefix::Italic, None, None);
    assert_eq!(
        get_prefix_styles_in_selection(&on, Prefix::Italic).as_slice(),
        matches(&[Some("ITALIC")])
    );
    let off = toggle_prefix_style(&on, Prefix::Italic, None, None);
    assert_eq!(
        get_prefix_styles_in_selection(&off, Prefix::Italic).as_slice(),
        matches(&[None])
    );
    let again = toggle_prefix_style(&off, Prefix::Italic, None, None);
    assert_eq!(again.content(), on.content());
}

#[test]
fn cursor_toggle_only_flips_the_pending_style() {
    let state = EditorState::new(Content::from_text("ab"));
    let on = toggle_italic(&state, None);
    assert!(is_italic(&on));
    assert_eq!(on.inline_style_override(), Some(&styles(&["ITALIC"])));
    assert_eq!(on.content(), state.content());
    assert_eq!(on.undo_depth(), 0);

    let off = toggle_italic(&on, None);
    assert!(!is_italic(&off));
    assert_eq!(off.inline_style_override(), Some(&StyleSet::new()));
}

#[test]
fn cursor_toggle_keeps_other_pending_styles() {
    let state = EditorState::new(Content::from_text("ab"))
        .set_inline_style_override(styles(&["ITALIC", "WEIGHT-900"]));
    let underlined = toggle_underline(&state, None);
    assert_eq!(
        underlined.inline_style_override(),
        Some(&styles(&["ITALIC", "UNDERLINE", "WEIGHT-900"]))
    );
    assert!(is_underline(&underlined));
    let typed = underlined.insert_text("x");
    assert_eq!(
        typed.content().block(0).unwrap().style_at(0),
        Some(&styles(&["ITALIC", "UNDERLINE", "WEIGHT-900"]))
    );
}

#[test]
fn explicit_flag_forces_the_direction() {
    let state = select(&Content::from_text("abc"), 0, 3);
    let on = toggle_italic(&state, Some(true));
    assert!(is_italic(&on));
    assert!(is_italic(&toggle_italic(&on, Some(true))));
    assert!(!is_italic(&toggle_italic(&state, Some(false))));
}

#[test]
fn toggle_bold_keeps_the_heaviest_bold_weight() {
    let mixed = select(&hello_world(), 4, 11);
    let bold = toggle_bold(&mixed, None);
    assert_eq!(get_font_weight(&bold), SelectionValue::Uniform(FontWeight::BLACK));

    let light = set_font_weight(&select(&hello_world(), 0, 11), FontWeight(300));
    let bold = toggle_bold(&light, None);
    assert_eq!(get_font_weight(&bold), SelectionValue::Uniform(FontWeight::BOLD));

    let off = toggle_bold(&bold, None);
    assert_eq!(get_font_weight(&off), SelectionValue::Uniform(FontWeight::NORMAL));
}

#[test]
fn out_of_range_weights_are_clamped() {
    let state = select(&hello_world(), 0, 5);
    let light = set_font_weight(&state, FontWeight(0));
    assert_eq!(get_font_weight(&light), SelectionValue::Uniform(FontWeight::THIN));
    let set = light.content().block(0).unwrap().style_at(0).unwrap();
    assert!(set.contains("WEIGHT-100"));

    let heavy = set_font_weight(&state, FontWeight(1000));
    assert_eq!(get_font_weight(&heavy), SelectionValue::Uniform(FontWeight::BLACK));
}

#[test]
fn range_edit_spanning_blocks_is_one_undo_step() {
    let state = EditorState::with_all_selected(Content::from_text("one\n\nthree"));
    let spaced = set_letter_spacing(&state, -150);
    assert_eq!(get_letter_spacing(&spaced), SelectionValue::Uniform(-150));
    let last = spaced.content().block(2).unwrap();
    assert!(last.style_at(4).unwrap().contains("LETTERSPACING-N150"));
    assert_eq!(spaced.undo_depth(), 1);
    assert_eq!(spaced.undo().content(), state.content());
    assert_eq!(spaced.undo().redo().content(), spaced.content());

    let cleared = set_letter_spacing(&spaced, 0);
    assert_eq!(cleared.content(), state.content());
}

#[test]
fn colors_are_set_and_opaque_black_strips() {
    let state = select(&Content::from_text("abc"), 0, 2);
    let red = Rgba::opaque(255, 0, 0);
    let colored = set_color(&state, red);
    assert_eq!(get_color(&colored), SelectionValue::Uniform(red));
    assert!(colored
        .content()
        .block(0)
        .unwrap()
        .style_at(1)
        .unwrap()
        .contains("COLOR-ff000064"));

    let black = set_color(&colored, Rgba::BLACK);
    assert_eq!(black.content(), state.content());
    assert_eq!(get_color(&black), SelectionValue::Uniform(Rgba::BLACK));
}

#[test]
fn undecodable_styles_read_as_defaults() {
    let mut builder = ContentBuilder::new();
    builder.push_text("ab", &styles(&["WEIGHT-bold", "COLOR-zz", "ITALICS"]));
    let state = EditorState::with_all_selected(builder.build());
    assert_eq!(get_font_weight(&state), SelectionValue::Uniform(FontWeight::NORMAL));
    assert_eq!(get_color(&state), SelectionValue::Uniform(Rgba::BLACK));
    assert!(FormatterRegistry::default()
        .styles_to_css(state.content().block(0).unwrap().style_at(0).unwrap())
        .is_empty());

    // Replacing the weight removes the corrupt name too.
    let bold = set_font_weight(&state, FontWeight::BOLD);
    let set = bold.content().block(0).unwrap().style_at(0).unwrap();
    assert!(set.contains("WEIGHT-700"));
    assert!(!set.contains("WEIGHT-bold"));
}

#[test]
fn registry_dispatches_by_name() {
    let registry = FormatterRegistry::default();
    let names: Vec<_> = registry.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        ["color", "italic", "letterSpacing", "underline", "uppercase", "weight"]
    );
    let auto_focus: Vec<_> = registry.iter().map(|f| f.auto_focus()).collect();
    assert_eq!(auto_focus, [false, true, false, true, true, true]);

    let state = select(&hello_world(), 6, 11);
    assert_eq!(
        registry.get_value(&state, "weight", "fontWeight"),
        Ok(FormatValue::Multiple)
    );
    assert_eq!(
        registry.get_value(&state, "weight", "isBold"),
        Ok(FormatValue::Flag(true))
    );

    let toggled = registry
        .set_value(&state, "uppercase", "toggleUppercase", None)
        .unwrap();
    assert_eq!(
        registry.get_value(&toggled, "uppercase", "isUppercase"),
        Ok(FormatValue::Flag(true))
    );
    let spaced = registry
        .set_value(
            &state,
            "letterSpacing",
            "setLetterSpacing",
            Some(FormatValue::LetterSpacing(20)),
        )
        .unwrap();
    assert_eq!(
        registry.get_value(&spaced, "letterSpacing", "letterSpacing"),
        Ok(FormatValue::LetterSpacing(20))
    );
}

#[test]
fn registry_reports_bad_requests() {
    let registry = FormatterRegistry::default();
    let state = select(&hello_world(), 0, 3);

    let err = registry.get_value(&state, "strike", "isStrike").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownFormatter);
    assert_eq!(err.name(), "strike");

    let err = registry.get_value(&state, "weight", "isItalic").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownAccessor);

    let err = registry
        .set_value(&state, "weight", "setFontWeight", Some(FormatValue::Flag(true)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchedValue);
    assert_eq!(err.to_string(), "setFontWeight expects a font weight");

    let err = registry
        .set_value(&state, "color", "setColor", None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchedValue);

    let err = registry
        .set_value(
            &state,
            "italic",
            "toggleItalic",
            Some(FormatValue::Weight(FontWeight::BOLD)),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchedValue);
}

#[test]
fn registry_can_be_customized() {
    let mut registry = FormatterRegistry::empty();
    assert!(registry.register(WeightFormatter).is_none());
    assert!(registry.register(WeightFormatter).is_some());
    assert_eq!(registry.iter().count(), 1);
    assert!(registry.unregister("weight").is_some());
    assert!(registry.get("weight").is_none());
}

#[test]
fn elements_map_to_tokens() {
    let declarations = parse_style_attribute(
        "font-weight: bold; font-style: italic; text-decoration: underline overline; \
         letter-spacing: -0.5em; color: rgba(255, 0, 0, 0.5); text-transform: uppercase",
    );
    let element = InlineElement::new("span", &declarations);
    assert_eq!(
        FormatterRegistry::default().element_to_styles(&element),
        [
            StyleToken::Color(Rgba::new(255, 0, 0, 0.5)),
            StyleToken::Italic,
            StyleToken::LetterSpacing(-50),
            StyleToken::Underline,
            StyleToken::Uppercase,
            StyleToken::Weight(FontWeight::BOLD),
        ]
    );
}

#[test]
fn defaults_are_not_imported() {
    let declarations = parse_style_attribute(
        "font-weight: 400; letter-spacing: 0; color: #000; letter-spacing: 2px",
    );
    let element = InlineElement::new("span", &declarations);
    assert!(FormatterRegistry::default()
        .element_to_styles(&element)
        .is_empty());
}

#[test]
fn styles_map_to_css() {
    let set = styles(&["WEIGHT-700", "ITALIC", "COLOR-ff000032", "LETTERSPACING-N25"]);
    assert_eq!(
        FormatterRegistry::default().styles_to_css(&set),
        [
            CssDeclaration::new("color", "rgba(255, 0, 0, 0.5)"),
            CssDeclaration::new("font-style", "italic"),
            CssDeclaration::new("letter-spacing", "-0.25em"),
            CssDeclaration::new("font-weight", "700"),
        ]
    );
}

#[test]
fn variants_of_the_whole_content() {
    let state = EditorState::new(hello_world());
    let mut pairs: Vec<_> = font_variants(&state)
        .into_iter()
        .map(FontVariant::as_pair)
        .collect();
    pairs.sort_unstable();
    assert_eq!(pairs, [(0, 400), (0, 700), (0, 900)]);

    let italic = toggle_italic(&select(&hello_world(), 0, 2), None);
    let mut pairs: Vec<_> = font_variants(&italic)
        .into_iter()
        .map(FontVariant::as_pair)
        .collect();
    pairs.sort_unstable();
    assert_eq!(pairs, [(0, 400), (0, 700), (0, 900), (1, 400)]);
}

#[test]
fn empty_content_reports_the_pending_variant() {
    let empty = EditorState::new(Content::default());
    assert_eq!(font_variants(&empty), [FontVariant::default()]);

    let pending = empty.set_inline_style_override(styles(&["ITALIC", "WEIGHT-700"]));
    assert_eq!(
        font_variants(&pending),
        [FontVariant {
            italic: true,
            weight: FontWeight::BOLD,
        }]
    );
}
