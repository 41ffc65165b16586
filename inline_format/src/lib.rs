// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed inline formatting on top of [`styled_content`].
//!
//! The host content only stores opaque style names. This crate gives them meaning:
//!
//! - [`token`]: the typed [`StyleToken`] and its `PREFIX-value` string encoding.
//! - [`reader`]: which styles of a [`Prefix`] a selection touches.
//! - [`mutator`]: the one toggle/set algorithm every property is edited with.
//! - [`formatter`]: one [`Formatter`] per property, with its getters, setters and CSS mapping,
//!   collected in a [`FormatterRegistry`].
//! - [`variants`]: the distinct italic/weight combinations in use.
//!
//! ## Cursor versus range
//!
//! With a collapsed selection nothing in the content changes; setters edit the pending style
//! that the next typed character receives. With a range, setters replace the property on every
//! selected character and record a single undo step.
//!
//! ## Example
//!
//! ```
//! use inline_format::formatter::{get_font_weight, is_bold, toggle_bold, SelectionValue};
//! use inline_format::FontWeight;
//! use styled_content::{Content, EditorState};
//!
//! let state = EditorState::new(Content::from_text("Hello world")).select_all();
//! assert!(!is_bold(&state));
//!
//! let bold = toggle_bold(&state, None);
//! assert!(is_bold(&bold));
//! assert_eq!(get_font_weight(&bold), SelectionValue::Uniform(FontWeight::BOLD));
//!
//! assert!(!is_bold(&toggle_bold(&bold, None)));
//! assert!(!is_bold(&bold.undo()));
//! ```
//!
//! ## Dynamic dispatch
//!
//! Toolbars that are driven by name go through the registry:
//!
//! ```
//! use inline_format::formatter::{FormatValue, FormatterRegistry};
//! use inline_format::Rgba;
//! use styled_content::{Content, EditorState};
//!
//! let registry = FormatterRegistry::default();
//! let state = EditorState::new(Content::from_text("Hi")).select_all();
//! let red = Rgba::opaque(255, 0, 0);
//! let state = registry
//!     .set_value(&state, "color", "setColor", Some(FormatValue::Color(red)))
//!     .unwrap();
//! assert_eq!(
//!     registry.get_value(&state, "color", "color").unwrap(),
//!     FormatValue::Color(red)
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

pub mod css;
mod error;
pub mod formatter;
pub mod mutator;
pub mod reader;
pub mod token;
pub mod variants;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};
pub use formatter::{FormatValue, Formatter, FormatterRegistry, SelectionValue};
pub use token::{FontWeight, Prefix, Rgba, StyleToken};
pub use variants::{font_variants, FontVariant};
