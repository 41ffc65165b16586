// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::BlockKey;

/// A position between two characters of a block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionPoint {
    /// The block the point lies in.
    pub key: BlockKey,
    /// Character offset within the block, `0..=block.len()`.
    pub offset: usize,
}

impl SelectionPoint {
    /// Create a point at `offset` within the block `key`.
    #[inline]
    pub const fn new(key: BlockKey, offset: usize) -> Self {
        Self { key, offset }
    }
}

/// A selection from an anchor to a focus point.
///
/// Selections are plain data; they are checked against a particular [`Content`] with
/// [`Content::range`] or [`EditorState::with_selection`]. The anchor must not come after the
/// focus in document order.
///
/// [`Content`]: crate::Content
/// [`Content::range`]: crate::Content::range
/// [`EditorState::with_selection`]: crate::EditorState::with_selection
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection starts.
    pub anchor: SelectionPoint,
    /// Where the selection ends.
    pub focus: SelectionPoint,
}

impl Selection {
    /// Create a selection spanning `anchor` to `focus`.
    #[inline]
    pub const fn new(anchor: SelectionPoint, focus: SelectionPoint) -> Self {
        Self { anchor, focus }
    }

    /// Create a collapsed selection (a cursor) at `point`.
    #[inline]
    pub const fn collapsed(point: SelectionPoint) -> Self {
        Self {
            anchor: point,
            focus: point,
        }
    }

    /// Returns `true` if anchor and focus coincide.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

/// A selection that has been validated against a [`Content`](crate::Content).
///
/// Holds block indices rather than keys, so walking the selected characters needs no lookups.
///
/// ## Important
///
/// `ContentRange` does not record which content it was validated against. It stays valid across
/// style-only edits (which never move characters), but it is the caller's responsibility not to
/// reuse it after the text itself changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentRange {
    pub(crate) start_block: usize,
    pub(crate) start_offset: usize,
    pub(crate) end_block: usize,
    pub(crate) end_offset: usize,
}

impl ContentRange {
    /// Returns `true` if the range covers no position at all.
    #[inline]
    pub fn is_collapsed(self) -> bool {
        self.start_block == self.end_block && self.start_offset == self.end_offset
    }

    /// Index of the first block touched by the range.
    #[inline]
    pub fn start_block(self) -> usize {
        self.start_block
    }

    /// Character offset of the range start within its block.
    #[inline]
    pub fn start_offset(self) -> usize {
        self.start_offset
    }

    /// Index of the last block touched by the range.
    #[inline]
    pub fn end_block(self) -> usize {
        self.end_block
    }

    /// Character offset of the range end within its block.
    #[inline]
    pub fn end_offset(self) -> usize {
        self.end_offset
    }
}
