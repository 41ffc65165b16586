// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML for [`inline_format`] content.
//!
//! Rich text is interchanged as a fragment of HTML with inline CSS: one block element per block,
//! and `<span style="…">` around runs of formatted characters. This crate reads such fragments
//! into [`styled_content::Content`] and writes content back out, driven by the
//! [`FormatterRegistry`](inline_format::FormatterRegistry).
//!
//! Reading and writing are lossless for the styles the formatters know:
//! importing exported markup yields the same styles as the content it came from.
//!
//! ## Example
//!
//! ```
//! use inline_format_html::{export_html, get_font_variants, import_html, toggle_bold_in_html};
//!
//! let html = r#"<span style="font-weight: 700">F</span>ill in some text"#;
//! let content = import_html(html);
//! assert_eq!(content.plain_text(), "Fill in some text");
//! assert_eq!(
//!     export_html(&content),
//!     r#"<p><span style="font-weight: 700">F</span>ill in some text</p>"#
//! );
//!
//! let mut pairs: Vec<_> = get_font_variants(html).into_iter().map(|v| v.as_pair()).collect();
//! pairs.sort_unstable();
//! assert_eq!(pairs, [(0, 400), (0, 700)]);
//!
//! assert_eq!(
//!     toggle_bold_in_html(html, None),
//!     r#"<p><span style="font-weight: 700">Fill in some text</span></p>"#
//! );
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod escape;
mod export;
mod import;
mod info;
mod manipulation;

#[cfg(test)]
mod tests;

pub use escape::{escape_attribute, escape_text};
pub use export::{export_html, export_html_with, ExportOptions};
pub use import::{import_html, import_html_with, ImportOptions};
pub use info::{get_font_variants, get_html_info, HtmlInfo};
pub use manipulation::{
    apply_to_html, set_color_in_html, set_font_weight_in_html, set_letter_spacing_in_html,
    set_value_in_html, toggle_bold_in_html, toggle_italic_in_html, toggle_underline_in_html,
    toggle_uppercase_in_html,
};
