// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{BlockKey, SelectionPoint};

/// Rich error type for selection validation.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending selection point and, when relevant,
/// the length of the block it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The selection point that failed validation.
    point: SelectionPoint,

    /// The length in characters of the referenced block, if the block exists.
    block_len: Option<usize>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The selection point that failed validation.
    pub fn point(&self) -> SelectionPoint {
        self.point
    }

    /// The length in characters of the block the point refers to, if that block exists.
    pub fn block_len(&self) -> Option<usize> {
        self.block_len
    }

    pub(crate) fn unknown_block(point: SelectionPoint) -> Self {
        Self {
            kind: ErrorKind::UnknownBlock,
            point,
            block_len: None,
        }
    }

    pub(crate) fn offset_out_of_bounds(point: SelectionPoint, block_len: usize) -> Self {
        Self {
            kind: ErrorKind::OffsetOutOfBounds,
            point,
            block_len: Some(block_len),
        }
    }

    pub(crate) fn backward_selection(focus: SelectionPoint) -> Self {
        Self {
            kind: ErrorKind::BackwardSelection,
            point: focus,
            block_len: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let BlockKey(key) = self.point.key;
        match self.kind {
            ErrorKind::UnknownBlock => write!(f, "no block with key {key} in content"),
            ErrorKind::OffsetOutOfBounds => write!(
                f,
                "offset {} out of bounds for block {key} of len {}",
                self.point.offset,
                self.block_len.unwrap_or_default()
            ),
            ErrorKind::BackwardSelection => write!(
                f,
                "focus {key}:{} lies before the anchor",
                self.point.offset
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A selection point names a block key that is not part of the content.
    UnknownBlock,

    /// A selection point's offset is past the end of its block.
    OffsetOutOfBounds,

    /// The anchor of a selection lies after its focus in document order.
    BackwardSelection,
}
