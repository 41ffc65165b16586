// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use inline_format::css::{parse_style_attribute, InlineElement};
use inline_format::{FormatterRegistry, StyleToken};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use smallvec::SmallVec;
use styled_content::{Content, ContentBuilder, StyleSet};

/// Options for [`import_html_with`].
#[derive(Clone, Debug)]
pub struct ImportOptions {
    /// Treat newlines in text as `<br>`, so blank lines survive as empty blocks.
    ///
    /// Only newlines in text count; those inside tags and attribute values are left to the
    /// parser. When off, newlines in text are treated as spaces. On by default.
    pub promote_newlines: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            promote_newlines: true,
        }
    }
}

/// Elements that delimit blocks. Everything else is inline.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "td",
    "th",
    "tr",
    "ul",
];

/// Elements whose contents are never text.
const SKIPPED_TAGS: &[&str] = &["head", "noscript", "script", "style", "template", "title"];

type Tokens = SmallVec<[StyleToken; 4]>;

fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// Parses an HTML fragment with the default formatters and options.
pub fn import_html(html: &str) -> Content {
    import_html_with(html, &FormatterRegistry::default(), &ImportOptions::default())
}

/// Parses an HTML fragment into content.
///
/// Block elements, `<br>` and (with [`ImportOptions::promote_newlines`]) newlines in text
/// delimit blocks. Every other element is inline: each formatter in `registry` reads its
/// `style` attribute, and the styles found override the same properties inherited from
/// enclosing elements. Unknown elements, attributes and properties are ignored.
/// The result always has at least one block.
pub fn import_html_with(
    html: &str,
    registry: &FormatterRegistry,
    options: &ImportOptions,
) -> Content {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let mut importer = Importer {
        registry,
        promote_newlines: options.promote_newlines,
        builder: ContentBuilder::new(),
        open: false,
    };
    match find_body(&dom.document) {
        Some(body) => importer.children(&body, &Tokens::new()),
        None => log::debug!("parsed document has no body"),
    }
    importer.builder.build()
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == "body" {
            return Some(handle.clone());
        }
    }
    handle.children.borrow().iter().find_map(find_body)
}

struct Importer<'a> {
    registry: &'a FormatterRegistry,
    promote_newlines: bool,
    builder: ContentBuilder,
    /// Whether the last block of `builder` still takes text.
    open: bool,
}

impl Importer<'_> {
    fn children(&mut self, parent: &Handle, tokens: &Tokens) {
        let children = parent.children.borrow();
        let has_block_child = children.iter().any(|child| {
            matches!(&child.data, NodeData::Element { name, .. } if is_block(&name.local))
        });
        for child in children.iter() {
            self.node(child, tokens, has_block_child);
        }
    }

    fn node(&mut self, handle: &Handle, tokens: &Tokens, between_blocks: bool) {
        match &handle.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                let text: &str = &contents;
                if !self.promote_newlines {
                    self.text_run(text, tokens, between_blocks);
                    return;
                }
                for (i, line) in text.split('\n').enumerate() {
                    if i > 0 {
                        self.line_break();
                    }
                    self.text_run(line.strip_suffix('\r').unwrap_or(line), tokens, between_blocks);
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let tag: &str = &name.local;
                if SKIPPED_TAGS.contains(&tag) {
                    return;
                }
                if tag == "br" {
                    self.line_break();
                    return;
                }
                if is_block(tag) {
                    self.close();
                    let before = self.builder.block_count();
                    self.children(handle, tokens);
                    self.close();
                    if self.builder.block_count() == before {
                        self.builder.push_block();
                    }
                    return;
                }

                let attrs = attrs.borrow();
                let style = attrs
                    .iter()
                    .find(|attr| &*attr.name.local == "style")
                    .map(|attr| parse_style_attribute(&attr.value));
                match style {
                    Some(declarations) if !declarations.is_empty() => {
                        let element = InlineElement::new(tag, &declarations);
                        let inner = merge(tokens, self.registry.element_to_styles(&element));
                        self.children(handle, &inner);
                    }
                    _ => self.children(handle, tokens),
                }
            }
            _ => {}
        }
    }

    fn text_run(&mut self, text: &str, tokens: &Tokens, between_blocks: bool) {
        if between_blocks && !self.open && text.trim().is_empty() {
            return;
        }
        self.text(text, tokens);
    }

    fn text(&mut self, text: &str, tokens: &Tokens) {
        if text.is_empty() {
            return;
        }
        if !self.open {
            self.builder.push_block();
            self.open = true;
        }
        let styles: StyleSet = tokens.iter().map(StyleToken::to_style_name).collect();
        if text.contains('\n') {
            self.builder.push_text(&text.replace('\n', " "), &styles);
        } else {
            self.builder.push_text(text, &styles);
        }
    }

    /// Ends the current line, producing an empty block if it had no text.
    fn line_break(&mut self) {
        if !self.open {
            self.builder.push_block();
        }
        self.open = false;
    }

    /// Ends the current block, if one is open.
    fn close(&mut self) {
        self.open = false;
    }
}

/// Overrides the inherited tokens with those of an inner element, per prefix.
fn merge(inherited: &Tokens, inner: Vec<StyleToken>) -> Tokens {
    let mut merged: Tokens = inherited
        .iter()
        .filter(|token| inner.iter().all(|t| t.prefix() != token.prefix()))
        .copied()
        .collect();
    merged.extend(inner);
    merged
}
