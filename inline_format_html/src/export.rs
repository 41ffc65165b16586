// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::fmt::Write as _;

use inline_format::FormatterRegistry;
use styled_content::{Block, Content};

use crate::escape::{escape_attribute, escape_text};

/// Options for [`export_html_with`].
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// The element each block is wrapped in. `p` by default.
    pub block_tag: Cow<'static, str>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            block_tag: Cow::Borrowed("p"),
        }
    }
}

/// Writes content as HTML with the default formatters and options.
pub fn export_html(content: &Content) -> String {
    export_html_with(content, &FormatterRegistry::default(), &ExportOptions::default())
}

/// Writes content as HTML.
///
/// Every block becomes one block element. Within a block, each maximal run of characters with
/// the same style set becomes a `<span>` carrying the CSS the formatters produce for that set;
/// runs without CSS are written as bare text.
pub fn export_html_with(
    content: &Content,
    registry: &FormatterRegistry,
    options: &ExportOptions,
) -> String {
    let tag = &options.block_tag;
    let mut out = String::new();
    for block in content.blocks() {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        write_runs(&mut out, block, registry);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out
}

fn write_runs(out: &mut String, block: &Block, registry: &FormatterRegistry) {
    let styles = block.styles();
    let mut start = 0;
    while start < styles.len() {
        let end = styles[start..]
            .iter()
            .position(|set| set != &styles[start])
            .map_or(styles.len(), |len| start + len);
        let text = escape_text(block.text_slice(start..end));
        let css = registry.styles_to_css(&styles[start]);
        if css.is_empty() {
            out.push_str(&text);
        } else {
            let mut style = String::new();
            for (i, declaration) in css.iter().enumerate() {
                if i > 0 {
                    style.push_str("; ");
                }
                let _ = write!(style, "{declaration}");
            }
            let _ = write!(
                out,
                "<span style=\"{}\">{text}</span>",
                escape_attribute(&style)
            );
        }
        start = end;
    }
}
