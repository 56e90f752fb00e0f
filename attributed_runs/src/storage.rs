// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// A text buffer that a [`RunBuffer`] addresses by byte offset.
///
/// The run machinery never inspects the text content itself; it only needs
/// the length and character-boundary information to validate ranges.
///
/// [`RunBuffer`]: crate::RunBuffer
pub trait TextStorage {
    /// The length of the text, in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `index` lies on a UTF-8 character boundary.
    ///
    /// Implementors may compute this however fits the underlying
    /// representation, e.g. [`str::is_char_boundary`] for contiguous strings
    /// or chunk inspection for ropes.
    fn is_char_boundary(&self, index: usize) -> bool;
}

impl TextStorage for str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for String {
    fn len(&self) -> usize {
        self.as_str().len()
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

impl TextStorage for Arc<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}
