// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use inline_format::{ErrorKind, FontWeight, FormatValue, FormatterRegistry, Rgba, SelectionValue};
use styled_content::{Content, StyleSet};

use crate::{
    export_html, export_html_with, get_font_variants, get_html_info, import_html,
    import_html_with, set_color_in_html, set_font_weight_in_html, set_letter_spacing_in_html,
    set_value_in_html, toggle_bold_in_html, toggle_italic_in_html, toggle_underline_in_html,
    toggle_uppercase_in_html, ExportOptions, ImportOptions,
};

fn styles(names: &[&str]) -> StyleSet {
    names.iter().copied().collect()
}

fn texts(content: &Content) -> Vec<&str> {
    content.blocks().map(|b| b.text()).collect()
}

fn style_at(content: &Content, block: usize, offset: usize) -> &StyleSet {
    content.block(block).unwrap().style_at(offset).unwrap()
}

const RICH: &str = concat!(
    r#"<p>Plain &amp; <span style="font-style: italic; color: #ff0000">red "#,
    r#"<span style="font-weight: 900">heavy</span></span></p>"#,
    r#"<p></p>"#,
    r#"<div><span style="letter-spacing: -0.5em; color: rgba(0, 0, 255, 0.25)">two</span> "#,
    r#"<u style="text-decoration: underline; text-transform: uppercase">three</u></div>"#,
);

#[test]
fn variants_of_a_partly_bold_fragment() {
    let html = r#"<span style="font-weight:700">F</span>ill in some text"#;
    let mut pairs: Vec<_> = get_font_variants(html)
        .into_iter()
        .map(|v| v.as_pair())
        .collect();
    pairs.sort_unstable();
    assert_eq!(pairs, [(0, 400), (0, 700)]);
}

#[test]
fn empty_fragment_has_one_default_variant() {
    let pairs: Vec<_> = get_font_variants("").into_iter().map(|v| v.as_pair()).collect();
    assert_eq!(pairs, [(0, 400)]);
}

#[test]
fn import_reads_blocks_and_styles() {
    let content = import_html(RICH);
    assert_eq!(texts(&content), ["Plain & red heavy", "", "two three"]);

    assert!(style_at(&content, 0, 0).is_empty());
    assert_eq!(style_at(&content, 0, 8), &styles(&["COLOR-ff000064", "ITALIC"]));
    assert_eq!(
        style_at(&content, 0, 12),
        &styles(&["COLOR-ff000064", "ITALIC", "WEIGHT-900"])
    );
    assert_eq!(
        style_at(&content, 2, 0),
        &styles(&["COLOR-0000ff19", "LETTERSPACING-N50"])
    );
    assert!(style_at(&content, 2, 3).is_empty());
    assert_eq!(style_at(&content, 2, 4), &styles(&["UNDERLINE", "UPPERCASE"]));
}

#[test]
fn export_groups_runs_into_spans() {
    let html = export_html(&import_html(RICH));
    assert_eq!(
        html,
        concat!(
            r#"<p>Plain &amp; <span style="color: #ff0000; font-style: italic">red </span>"#,
            r#"<span style="color: #ff0000; font-style: italic; font-weight: 900">heavy</span></p>"#,
            r#"<p></p>"#,
            r#"<p><span style="color: rgba(0, 0, 255, 0.25); letter-spacing: -0.5em">two</span> "#,
            r#"<span style="text-decoration: underline; text-transform: uppercase">three</span></p>"#,
        )
    );
}

#[test]
fn reimporting_exported_markup_keeps_every_style() {
    let once = import_html(RICH);
    let twice = import_html(&export_html(&once));
    assert_eq!(twice, once);
    assert_eq!(import_html(&export_html(&twice)), once);
}

#[test]
fn newlines_become_blocks() {
    let content = import_html("a\n\nb");
    assert_eq!(texts(&content), ["a", "", "b"]);
    assert_eq!(export_html(&content), "<p>a</p><p></p><p>b</p>");

    let options = ImportOptions {
        promote_newlines: false,
    };
    let content = import_html_with("a\nb", &FormatterRegistry::default(), &options);
    assert_eq!(texts(&content), ["a b"]);
}

#[test]
fn newlines_inside_tags_are_not_line_breaks() {
    let content = import_html("<span\nstyle=\"font-weight:\n700\">x</span>\ny");
    assert_eq!(texts(&content), ["x", "y"]);
    assert_eq!(style_at(&content, 0, 0), &styles(&["WEIGHT-700"]));
}

#[test]
fn line_breaks_split_blocks() {
    assert_eq!(texts(&import_html("one<br>two")), ["one", "two"]);
    assert_eq!(texts(&import_html("one<br><br>two")), ["one", "", "two"]);
    assert_eq!(texts(&import_html("<p>a<br></p><p><br></p>")), ["a", ""]);
    assert_eq!(texts(&import_html("<p>a</p>  <p>b</p>")), ["a", "b"]);
}

#[test]
fn inner_elements_override_per_property() {
    let content = import_html(concat!(
        r#"<span style="font-weight: 900; font-style: italic">a"#,
        r#"<span style="font-weight: 300">b</span></span>"#,
    ));
    assert_eq!(style_at(&content, 0, 0), &styles(&["ITALIC", "WEIGHT-900"]));
    assert_eq!(style_at(&content, 0, 1), &styles(&["ITALIC", "WEIGHT-300"]));
}

#[test]
fn named_and_hsl_colors_are_imported() {
    let content = import_html(concat!(
        r#"<span style="color: red">x</span>"#,
        r#"<span style="color: hsl(240, 100%, 50%)">y</span>"#,
    ));
    assert_eq!(style_at(&content, 0, 0), &styles(&["COLOR-ff000064"]));
    assert_eq!(style_at(&content, 0, 1), &styles(&["COLOR-0000ff64"]));
}

#[test]
fn unknown_markup_is_ignored() {
    let content = import_html(concat!(
        r#"<b class="fancy" data-version="9">"#,
        r#"<span style="float: left; font-weight: bold; font-size: 2em">x</span></b>"#,
        r#"<style>p { color: red }</style><em>y</em>"#,
    ));
    assert_eq!(texts(&content), ["xy"]);
    assert_eq!(style_at(&content, 0, 0), &styles(&["WEIGHT-700"]));
    assert!(style_at(&content, 0, 1).is_empty());
}

#[test]
fn empty_fragment_is_one_empty_block() {
    let content = import_html("");
    assert_eq!(content.block_count(), 1);
    assert!(content.has_no_text());
    assert_eq!(export_html(&content), "<p></p>");
}

#[test]
fn text_is_escaped_on_export() {
    let content = Content::from_text("a<b>&c");
    let html = export_html(&content);
    assert_eq!(html, "<p>a&lt;b&gt;&amp;c</p>");
    assert_eq!(import_html(&html).plain_text(), "a<b>&c");
}

#[test]
fn block_tag_is_configurable() {
    let options = ExportOptions {
        block_tag: "div".into(),
    };
    let html = export_html_with(
        &Content::from_text("x\ny"),
        &FormatterRegistry::default(),
        &options,
    );
    assert_eq!(html, "<div>x</div><div>y</div>");
}

#[test]
fn info_summarizes_a_fragment() {
    let info = get_html_info(concat!(
        r#"<span style="font-weight: 700; font-style: italic">a</span>"#,
        r#"<span style="font-style: italic">b</span>"#,
    ));
    assert_eq!(info.font_weight, SelectionValue::Multiple);
    assert!(!info.is_bold);
    assert!(info.is_italic);
    assert!(!info.is_underline);
    assert!(!info.is_uppercase);
    assert_eq!(info.letter_spacing, SelectionValue::Uniform(0));
    assert_eq!(info.color, SelectionValue::Uniform(Rgba::BLACK));

    let other = get_html_info(r#"<span style="font-style: italic; color: #00ff00">c</span>"#);
    let merged = info.merge(other);
    assert_eq!(merged.font_weight, SelectionValue::Multiple);
    assert!(merged.is_italic);
    assert_eq!(merged.color, SelectionValue::Multiple);
    assert!(!merged.merge(get_html_info("d")).is_italic);
}

#[test]
fn whole_fragment_edits() {
    let html = r#"<span style="font-weight:700">F</span>ill"#;
    assert_eq!(set_font_weight_in_html(html, FontWeight::NORMAL), "<p>Fill</p>");
    assert_eq!(
        set_color_in_html("x", Rgba::opaque(255, 0, 0)),
        r#"<p><span style="color: #ff0000">x</span></p>"#
    );
    assert_eq!(
        set_letter_spacing_in_html("x", 25),
        r#"<p><span style="letter-spacing: 0.25em">x</span></p>"#
    );
    assert_eq!(
        toggle_underline_in_html("x", None),
        r#"<p><span style="text-decoration: underline">x</span></p>"#
    );
    assert_eq!(
        toggle_uppercase_in_html("x", None),
        r#"<p><span style="text-transform: uppercase">x</span></p>"#
    );
    let italic = toggle_italic_in_html("x", None);
    assert_eq!(italic, r#"<p><span style="font-style: italic">x</span></p>"#);
    assert_eq!(toggle_italic_in_html(&italic, Some(false)), "<p>x</p>");
    assert_eq!(toggle_bold_in_html(&italic, Some(false)), italic);
}

#[test]
fn edits_by_name() {
    let registry = FormatterRegistry::default();
    let html = set_value_in_html(
        "x",
        &registry,
        "weight",
        "setFontWeight",
        Some(FormatValue::Weight(FontWeight(300))),
    )
    .unwrap();
    assert_eq!(html, r#"<p><span style="font-weight: 300">x</span></p>"#);

    let err = set_value_in_html("x", &registry, "shadow", "setShadow", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownFormatter);
}
