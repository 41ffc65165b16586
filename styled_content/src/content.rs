// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{
    Block, BlockKey, ContentRange, Error, Selection, SelectionPoint, StyleName, StyleSet,
};

/// An immutable snapshot of block-structured text.
///
/// Content always holds at least one block. Every editing operation returns a new snapshot;
/// blocks that an edit does not touch are shared between the old and the new snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    blocks: Vec<Arc<Block>>,
}

impl Default for Content {
    fn default() -> Self {
        ContentBuilder::new().build()
    }
}

impl Content {
    /// Creates unstyled content, one block per line of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut builder = ContentBuilder::new();
        let unstyled = StyleSet::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                builder.push_block();
            }
            builder.push_text(line, &unstyled);
        }
        builder.build()
    }

    /// Iterate over the blocks in document order.
    #[inline]
    pub fn blocks(
        &self,
    ) -> impl ExactSizeIterator<Item = &Block> + DoubleEndedIterator + Clone + '_ {
        self.blocks.iter().map(|b| &**b)
    }

    /// Returns the number of blocks (always at least one).
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// The block at `index` in document order.
    #[inline]
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index).map(|b| &**b)
    }

    /// The block with the given key.
    pub fn block_for_key(&self, key: BlockKey) -> Option<&Block> {
        self.block_index(key).map(|ix| &*self.blocks[ix])
    }

    /// The document-order index of the block with the given key.
    pub fn block_index(&self, key: BlockKey) -> Option<usize> {
        self.blocks.iter().position(|b| b.key() == key)
    }

    /// The key of the block following `key`, if any.
    pub fn key_after(&self, key: BlockKey) -> Option<BlockKey> {
        let ix = self.block_index(key)?;
        self.blocks.get(ix + 1).map(|b| b.key())
    }

    /// The key of the block preceding `key`, if any.
    pub fn key_before(&self, key: BlockKey) -> Option<BlockKey> {
        let ix = self.block_index(key)?;
        ix.checked_sub(1).map(|prev| self.blocks[prev].key())
    }

    /// Returns `true` if no block has any characters.
    pub fn has_no_text(&self) -> bool {
        self.blocks.iter().all(|b| b.is_empty())
    }

    /// The text of all blocks joined by newlines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(block.text());
        }
        out
    }

    /// A selection from the start of the first block to the end of the last block.
    pub fn select_all(&self) -> Selection {
        let first = &self.blocks[0];
        let last = &self.blocks[self.blocks.len() - 1];
        Selection::new(
            SelectionPoint::new(first.key(), 0),
            SelectionPoint::new(last.key(), last.len()),
        )
    }

    /// Validates `selection` against this content.
    ///
    /// Both points must name blocks of this content, their offsets must lie within those blocks,
    /// and the anchor must not come after the focus.
    pub fn range(&self, selection: &Selection) -> Result<ContentRange, Error> {
        let (start_block, start_offset) = self.locate(selection.anchor)?;
        let (end_block, end_offset) = self.locate(selection.focus)?;
        if (start_block, start_offset) > (end_block, end_offset) {
            return Err(Error::backward_selection(selection.focus));
        }
        Ok(ContentRange {
            start_block,
            start_offset,
            end_block,
            end_offset,
        })
    }

    fn locate(&self, point: SelectionPoint) -> Result<(usize, usize), Error> {
        let ix = self
            .block_index(point.key)
            .ok_or(Error::unknown_block(point))?;
        let len = self.blocks[ix].len();
        if point.offset > len {
            return Err(Error::offset_out_of_bounds(point, len));
        }
        Ok((ix, point.offset))
    }

    /// Iterate over every block touched by `range` together with the touched character range.
    ///
    /// Interior blocks are covered in full. Blocks are yielded even when the touched range is
    /// empty; block boundaries themselves carry no characters.
    pub fn block_ranges(
        &self,
        range: ContentRange,
    ) -> impl Iterator<Item = (&Block, Range<usize>)> + '_ {
        let last = range.end_block.min(self.blocks.len().saturating_sub(1));
        self.blocks[range.start_block.min(last)..=last]
            .iter()
            .enumerate()
            .map(move |(i, block)| {
                let ix = range.start_block + i;
                let start = if ix == range.start_block {
                    range.start_offset
                } else {
                    0
                };
                let end = if ix == range.end_block {
                    range.end_offset
                } else {
                    block.len()
                };
                (&**block, start.min(block.len())..end.min(block.len()))
            })
    }

    /// Returns new content with every character in `range` passed through `f`.
    ///
    /// Blocks outside the range are shared with `self`.
    #[must_use]
    pub fn map_styles(
        &self,
        range: ContentRange,
        mut f: impl FnMut(&StyleSet) -> StyleSet,
    ) -> Self {
        let mut blocks = self.blocks.clone();
        let spans: Vec<(usize, Range<usize>)> = self
            .block_ranges(range)
            .enumerate()
            .map(|(i, (_, chars))| (range.start_block + i, chars))
            .collect();
        for (ix, chars) in spans {
            if chars.is_empty() {
                continue;
            }
            blocks[ix] = Arc::new(blocks[ix].map_styles(chars, &mut f));
        }
        Self { blocks }
    }

    /// Adds `name` to every character in `range`.
    #[must_use]
    pub fn apply_inline_style(&self, range: ContentRange, name: &StyleName) -> Self {
        self.map_styles(range, |styles| styles.with(name.clone()))
    }

    /// Removes `name` from every character in `range`.
    #[must_use]
    pub fn remove_inline_style(&self, range: ContentRange, name: &str) -> Self {
        self.map_styles(range, |styles| styles.without(name))
    }

    /// Removes the characters in `range`, joining its first and last block.
    #[must_use]
    pub fn remove_range(&self, range: ContentRange) -> Self {
        if range.is_collapsed() {
            return self.clone();
        }
        let head = &self.blocks[range.start_block];
        let tail = &self.blocks[range.end_block];
        let joined = head.join(range.start_offset, tail, range.end_offset);
        let mut blocks = Vec::with_capacity(self.blocks.len());
        blocks.extend_from_slice(&self.blocks[..range.start_block]);
        blocks.push(Arc::new(joined));
        blocks.extend_from_slice(&self.blocks[range.end_block + 1..]);
        Self { blocks }
    }

    /// Inserts `text` at `point`, giving every new character `styles`.
    ///
    /// `text` is inserted verbatim; newlines do not split the block.
    pub fn insert_text(
        &self,
        point: SelectionPoint,
        text: &str,
        styles: &StyleSet,
    ) -> Result<Self, Error> {
        let (ix, offset) = self.locate(point)?;
        let mut blocks = self.blocks.clone();
        blocks[ix] = Arc::new(blocks[ix].insert(offset, text, styles));
        Ok(Self { blocks })
    }
}

/// Builds [`Content`] block by block.
///
/// ## Example
///
/// ```
/// use styled_content::{ContentBuilder, StyleSet};
///
/// let italic: StyleSet = ["ITALIC"].into_iter().collect();
/// let mut builder = ContentBuilder::new();
/// builder
///     .push_text("Hello ", &StyleSet::new())
///     .push_text("world", &italic);
/// builder.push_block().push_text("Second line", &StyleSet::new());
/// let content = builder.build();
///
/// assert_eq!(content.block_count(), 2);
/// assert_eq!(content.plain_text(), "Hello world\nSecond line");
/// ```
#[derive(Debug, Default)]
pub struct ContentBuilder {
    blocks: Vec<Block>,
}

impl ContentBuilder {
    /// Creates a builder with no blocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new, empty block.
    pub fn push_block(&mut self) -> &mut Self {
        let key = BlockKey(u32::try_from(self.blocks.len()).unwrap_or(u32::MAX));
        self.blocks.push(Block::new(key));
        self
    }

    /// Appends `text` to the current block with the given style set.
    ///
    /// Starts a block first if none has been started.
    pub fn push_text(&mut self, text: &str, styles: &StyleSet) -> &mut Self {
        if self.blocks.is_empty() {
            self.push_block();
        }
        if let Some(block) = self.blocks.last_mut() {
            block.push_str(text, styles);
        }
        self
    }

    /// Returns the number of blocks started so far.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Finishes the content; an empty builder yields a single empty block.
    pub fn build(mut self) -> Content {
        if self.blocks.is_empty() {
            self.push_block();
        }
        Content {
            blocks: self.blocks.into_iter().map(Arc::new).collect(),
        }
    }
}
