// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block-structured text where every character carries a set of opaque style names.
//!
//! This is the storage layer underneath `inline_format`: it knows nothing about what a style
//! name means, only how to keep them on characters, how to address characters with a
//! [`Selection`], and how to record edits so they can be undone.
//!
//! - [`Content`]: an immutable snapshot, a non-empty sequence of [`Block`]s.
//! - [`StyleSet`]/[`StyleName`]: the per-character style storage.
//! - [`Selection`]: anchor and focus points, validated into a [`ContentRange`].
//! - [`EditorState`]: content plus selection, pending inline style override and undo history.
//!
//! ## Indices
//!
//! All offsets count Unicode scalar values within a block, not bytes.
//!
//! ## Example
//!
//! ```
//! use styled_content::{ChangeType, Content, EditorState, StyleName};
//!
//! let state = EditorState::new(Content::from_text("Hello world")).select_all();
//! let bold = state
//!     .content()
//!     .apply_inline_style(state.selection_range(), &StyleName::new("BOLD"));
//! let state = state.push(bold, ChangeType::ChangeInlineStyle);
//!
//! assert!(state.content().blocks().all(|b| b.styles().iter().all(|s| s.contains("BOLD"))));
//! assert!(state.undo().content().blocks().all(|b| b.styles().iter().all(|s| s.is_empty())));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod block;
mod content;
mod editor_state;
mod error;
mod selection;
mod style_set;


pub use crate::block::{Block, BlockKey};
pub use crate::content::{Content, ContentBuilder};
pub use crate::editor_state::{ChangeType, EditorState};
pub use crate::error::{Error, ErrorKind};
pub use crate::selection::{ContentRange, Selection, SelectionPoint};
pub use crate::style_set::{StyleName, StyleSet};
