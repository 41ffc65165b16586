// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{Content, ContentRange, Error, Selection, SelectionPoint, StyleSet};

/// The kind of edit recorded on the undo stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChangeType {
    /// Inline style names were added to or removed from characters.
    ChangeInlineStyle,
    /// Characters were typed or pasted.
    InsertCharacters,
    /// A selected range was deleted.
    RemoveRange,
    /// The whole content was replaced.
    ReplaceContent,
}

/// An immutable editor snapshot: content, a validated selection, the pending inline style
/// override and the undo history.
///
/// Every operation returns a new `EditorState`; snapshots can be kept and compared freely.
#[derive(Clone, Debug)]
pub struct EditorState {
    content: Content,
    selection: Selection,
    range: ContentRange,
    inline_style_override: Option<StyleSet>,
    undo_stack: Vec<Content>,
    redo_stack: Vec<Content>,
    last_change_type: Option<ChangeType>,
}

impl EditorState {
    /// Creates a state for `content` with a cursor at the start of the first block.
    pub fn new(content: Content) -> Self {
        let selection = Selection::collapsed(content.select_all().anchor);
        let range = ContentRange {
            start_block: 0,
            start_offset: 0,
            end_block: 0,
            end_offset: 0,
        };
        Self {
            content,
            selection,
            range,
            inline_style_override: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            last_change_type: None,
        }
    }

    /// Creates a state for `content` with everything selected.
    pub fn with_all_selected(content: Content) -> Self {
        Self::new(content).select_all()
    }

    /// The current content snapshot.
    #[inline]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The current selection.
    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The current selection, resolved against the current content.
    #[inline]
    pub fn selection_range(&self) -> ContentRange {
        self.range
    }

    /// Returns a state with `selection` as the current selection.
    ///
    /// This validates the selection against the current content; a selection naming unknown
    /// blocks, running past the end of a block, or with its anchor after its focus is rejected.
    /// Moving the selection discards any pending inline style override.
    pub fn with_selection(&self, selection: Selection) -> Result<Self, Error> {
        let range = self.content.range(&selection)?;
        Ok(Self {
            selection,
            range,
            inline_style_override: None,
            ..self.clone()
        })
    }

    /// Returns a state with the whole content selected.
    #[must_use]
    pub fn select_all(&self) -> Self {
        let selection = self.content.select_all();
        let last = self.content.block_count() - 1;
        let range = ContentRange {
            start_block: 0,
            start_offset: 0,
            end_block: last,
            end_offset: selection.focus.offset,
        };
        Self {
            selection,
            range,
            inline_style_override: None,
            ..self.clone()
        }
    }

    /// The explicitly set pending inline style, if any.
    #[inline]
    pub fn inline_style_override(&self) -> Option<&StyleSet> {
        self.inline_style_override.as_ref()
    }

    /// Returns a state whose next typed characters will carry `styles`.
    #[must_use]
    pub fn set_inline_style_override(&self, styles: StyleSet) -> Self {
        Self {
            inline_style_override: Some(styles),
            ..self.clone()
        }
    }

    /// The style set the next typed character would receive.
    ///
    /// This is the explicit override when one is set. Otherwise it is derived from the content:
    /// for a cursor, the character before it (or the first character when the cursor starts a
    /// non-empty block, or the last character of the closest preceding non-empty block when the
    /// cursor's block is empty); for a range, the first selected character, or the character
    /// before the range when it starts at the end of a block.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(styles) = &self.inline_style_override {
            return styles.clone();
        }
        let Some(block) = self.content.block(self.range.start_block) else {
            return StyleSet::new();
        };
        let offset = self.range.start_offset;
        if self.range.is_collapsed() {
            if offset > 0 {
                return block.style_at(offset - 1).cloned().unwrap_or_default();
            }
            if !block.is_empty() {
                return block.style_at(0).cloned().unwrap_or_default();
            }
        } else if offset < block.len() {
            return block.style_at(offset).cloned().unwrap_or_default();
        } else if offset > 0 {
            // The range starts at the end of a block and touches no characters.
            return block.style_at(offset - 1).cloned().unwrap_or_default();
        }
        self.content
            .blocks()
            .take(self.range.start_block)
            .rev()
            .find_map(|b| b.styles().last())
            .cloned()
            .unwrap_or_default()
    }

    /// Records `content` as the result of one undoable edit of kind `change_type`.
    ///
    /// The selection is kept if it still fits `content`; otherwise the cursor moves to the
    /// start. The pending inline style override survives only [`ChangeType::InsertCharacters`]
    /// edits.
    #[must_use]
    pub fn push(&self, content: Content, change_type: ChangeType) -> Self {
        let mut undo_stack = self.undo_stack.clone();
        undo_stack.push(self.content.clone());
        let inline_style_override = if change_type == ChangeType::InsertCharacters {
            self.inline_style_override.clone()
        } else {
            None
        };
        let (selection, range) = self.fit_selection(&content);
        Self {
            content,
            selection,
            range,
            inline_style_override,
            undo_stack,
            redo_stack: Vec::new(),
            last_change_type: Some(change_type),
        }
    }

    /// The kind of the most recent edit, if any.
    #[inline]
    pub fn last_change_type(&self) -> Option<ChangeType> {
        self.last_change_type
    }

    /// Returns `true` if there is an edit to undo.
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns `true` if there is an undone edit to redo.
    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The number of edits on the undo stack.
    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Reverts the most recent edit. Returns an unchanged state when there is nothing to undo.
    #[must_use]
    pub fn undo(&self) -> Self {
        let mut undo_stack = self.undo_stack.clone();
        let Some(previous) = undo_stack.pop() else {
            return self.clone();
        };
        let mut redo_stack = self.redo_stack.clone();
        redo_stack.push(self.content.clone());
        self.restore(previous, undo_stack, redo_stack)
    }

    /// Re-applies the most recently undone edit. Returns an unchanged state when there is
    /// nothing to redo.
    #[must_use]
    pub fn redo(&self) -> Self {
        let mut redo_stack = self.redo_stack.clone();
        let Some(next) = redo_stack.pop() else {
            return self.clone();
        };
        let mut undo_stack = self.undo_stack.clone();
        undo_stack.push(self.content.clone());
        self.restore(next, undo_stack, redo_stack)
    }

    fn restore(
        &self,
        content: Content,
        undo_stack: Vec<Content>,
        redo_stack: Vec<Content>,
    ) -> Self {
        let (selection, range) = self.fit_selection(&content);
        Self {
            content,
            selection,
            range,
            inline_style_override: None,
            undo_stack,
            redo_stack,
            last_change_type: self.last_change_type,
        }
    }

    /// The current selection if it is valid in `content`, otherwise a cursor at its start.
    fn fit_selection(&self, content: &Content) -> (Selection, ContentRange) {
        match content.range(&self.selection) {
            Ok(range) => (self.selection, range),
            Err(_) => {
                let start = Self::new(content.clone());
                (start.selection, start.range)
            }
        }
    }

    /// Types `text` at the selection.
    ///
    /// A ranged selection is deleted first. The new characters receive
    /// [`current_inline_style`](Self::current_inline_style) as computed before the edit, and the
    /// cursor ends up after them.
    #[must_use]
    pub fn insert_text(&self, text: &str) -> Self {
        let styles = self.current_inline_style();
        let removed = self.content.remove_range(self.range);
        let Some(block) = removed.block(self.range.start_block) else {
            return self.clone();
        };
        let at = SelectionPoint::new(block.key(), self.range.start_offset);
        let Ok(inserted) = removed.insert_text(at, text, &styles) else {
            return self.clone();
        };
        let offset = self.range.start_offset + text.chars().count();
        let range = ContentRange {
            start_block: self.range.start_block,
            start_offset: offset,
            end_block: self.range.start_block,
            end_offset: offset,
        };
        let mut next = self.push(inserted, ChangeType::InsertCharacters);
        next.selection = Selection::collapsed(SelectionPoint::new(at.key, offset));
        next.range = range;
        next
    }
}
