// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::StyleSet;

/// Identifies a [`Block`] within a [`Content`](crate::Content).
///
/// Keys are assigned when content is built and survive style edits, so a selection taken before
/// an edit still names the same blocks afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockKey(pub(crate) u32);

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// One block (paragraph) of content: a run of characters, each with its own [`StyleSet`].
///
/// Offsets into a block count Unicode scalar values, not bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    key: BlockKey,
    text: String,
    styles: Vec<StyleSet>,
}

impl Block {
    pub(crate) fn new(key: BlockKey) -> Self {
        Self {
            key,
            text: String::new(),
            styles: Vec::new(),
        }
    }

    /// The key identifying this block.
    #[inline]
    pub fn key(&self) -> BlockKey {
        self.key
    }

    /// The block's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if the block has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The style set of every character, in order.
    #[inline]
    pub fn styles(&self) -> &[StyleSet] {
        &self.styles
    }

    /// The style set of the character at `offset`.
    #[inline]
    pub fn style_at(&self, offset: usize) -> Option<&StyleSet> {
        self.styles.get(offset)
    }

    /// Iterate over characters together with their style sets.
    pub fn chars(&self) -> impl Iterator<Item = (char, &StyleSet)> + '_ {
        self.text.chars().zip(self.styles.iter())
    }

    /// Returns the text of the characters in `range`.
    ///
    /// The range is clamped to the block.
    pub fn text_slice(&self, range: Range<usize>) -> &str {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end.max(range.start));
        &self.text[start..end]
    }

    pub(crate) fn push_str(&mut self, text: &str, styles: &StyleSet) {
        self.text.push_str(text);
        self.styles
            .extend(core::iter::repeat_n(styles, text.chars().count()).cloned());
    }

    /// Returns a copy of this block where every character in `range` has had its style set
    /// passed through `f`.
    pub(crate) fn map_styles(
        &self,
        range: Range<usize>,
        mut f: impl FnMut(&StyleSet) -> StyleSet,
    ) -> Self {
        let mut out = self.clone();
        let end = range.end.min(out.styles.len());
        for styles in &mut out.styles[range.start.min(end)..end] {
            *styles = f(styles);
        }
        out
    }

    /// Inserts `text` at `offset`, giving every new character `styles`.
    pub(crate) fn insert(&self, offset: usize, text: &str, styles: &StyleSet) -> Self {
        let mut out = self.clone();
        let offset = offset.min(out.styles.len());
        let byte = out.byte_offset(offset);
        out.text.insert_str(byte, text);
        let count = text.chars().count();
        out.styles.splice(
            offset..offset,
            core::iter::repeat_n(styles, count).cloned(),
        );
        out
    }

    /// Keeps the characters before `start` of this block and the characters from `tail_start`
    /// of `tail` onward, under this block's key.
    pub(crate) fn join(&self, start: usize, tail: &Self, tail_start: usize) -> Self {
        let start = start.min(self.styles.len());
        let tail_start = tail_start.min(tail.styles.len());
        let mut text = String::from(&self.text[..self.byte_offset(start)]);
        text.push_str(&tail.text[tail.byte_offset(tail_start)..]);
        let mut styles = self.styles[..start].to_vec();
        styles.extend_from_slice(&tail.styles[tail_start..]);
        Self {
            key: self.key,
            text,
            styles,
        }
    }

    fn byte_offset(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(byte, _)| byte)
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockKey};
    use crate::StyleSet;

    fn block(text: &str) -> Block {
        let mut block = Block::new(BlockKey(0));
        block.push_str(text, &StyleSet::new());
        block
    }

    #[test]
    fn offsets_count_characters() {
        let b = block("éclair");
        assert_eq!(b.len(), 6);
        assert_eq!(b.text_slice(0..2), "éc");
        assert_eq!(b.text_slice(4..99), "ir");
    }

    #[test]
    fn insert_styles_only_new_characters() {
        let italic: StyleSet = ["ITALIC"].into_iter().collect();
        let b = block("ac").insert(1, "b", &italic);
        assert_eq!(b.text(), "abc");
        assert!(b.style_at(0).unwrap().is_empty());
        assert!(b.style_at(1).unwrap().contains("ITALIC"));
        assert!(b.style_at(2).unwrap().is_empty());
    }

    #[test]
    fn join_keeps_head_key() {
        let head = block("Hello");
        let mut tail = Block::new(BlockKey(9));
        tail.push_str("big world", &StyleSet::new());
        let joined = head.join(2, &tail, 3);
        assert_eq!(joined.key(), BlockKey(0));
        assert_eq!(joined.text(), "He world");
        assert_eq!(joined.len(), 8);
    }
}
