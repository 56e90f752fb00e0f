// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;

use smallvec::SmallVec;

use crate::{AttributeDictionary, AttributeKey, SpanRange, TextStorage};

/// Opaque representation of a generation.
///
/// Obtained from [`RunBuffer::generation`]. A consumer that remembers the
/// last generation it observed can compare it against the current one to
/// detect attribute changes it has not yet processed.
// Overflow handling: generations are only compared, so wrapping is fine. This
// could only fail if exactly `u32::MAX` generations happen between two
// observations, which is implausible.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct Generation(u32);

impl Generation {
    /// Make it not what it currently is.
    pub fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// One attribute run: a byte range and the attributes every offset in it
/// carries.
#[derive(Clone, Debug)]
pub(crate) struct Run {
    pub(crate) range: SpanRange,
    pub(crate) attributes: AttributeDictionary,
}

/// A text buffer paired with attribute runs, typing attributes, and a live
/// selection.
///
/// The run list is kept contiguous, non-overlapping, and covering the full
/// text; adjacent runs always differ in at least one attribute. The *typing
/// attributes* are a single [`AttributeDictionary`] held outside the run
/// list: the pending attributes for text inserted while the selection is a
/// caret.
///
/// A `RunBuffer` is owned by exactly one editing session and must only be
/// mutated from that session's event-processing thread. Reads and writes are
/// synchronous; every write advances the buffer's [`Generation`] so that
/// downstream readers (highlighters, a context layer) know to refresh.
#[derive(Clone, Debug)]
pub struct RunBuffer<T: Debug + TextStorage> {
    text: T,
    runs: Vec<Run>,
    typing_attributes: AttributeDictionary,
    selection: SpanRange,
    generation: Generation,
    unsupported_keys: SmallVec<[AttributeKey; 4]>,
    warned_keys: SmallVec<[AttributeKey; 4]>,
}

impl<T: Debug + TextStorage> RunBuffer<T> {
    /// Creates a buffer over `text` with no attributes set.
    ///
    /// The selection starts as a caret at offset 0.
    pub fn new(text: T) -> Self {
        let mut this = Self {
            text,
            runs: Vec::new(),
            typing_attributes: AttributeDictionary::new(),
            selection: SpanRange::caret(0),
            generation: Generation(1),
            unsupported_keys: SmallVec::new(),
            warned_keys: SmallVec::new(),
        };
        this.reset_runs();
        this
    }

    /// Borrows the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrows the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Iterates over the attribute runs in text order.
    ///
    /// The yielded ranges are contiguous, non-overlapping, and collectively
    /// cover the text. An empty text has no runs.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = (SpanRange, &AttributeDictionary)> {
        self.runs.iter().map(|run| (run.range, &run.attributes))
    }

    /// Returns the pending attributes for text inserted at a caret.
    pub fn typing_attributes(&self) -> &AttributeDictionary {
        &self.typing_attributes
    }

    /// Returns the live selection.
    pub fn selection(&self) -> SpanRange {
        self.selection
    }

    /// Sets the live selection.
    ///
    /// An out-of-bounds or off-boundary range is a caller error; debug builds
    /// assert, release builds clamp the range to the nearest valid one.
    pub fn set_selection(&mut self, range: SpanRange) {
        let clamped = self.clamp_range(range);
        debug_assert!(
            clamped == range,
            "selection {range:?} out of bounds for text len {}",
            self.text.len()
        );
        self.selection = clamped;
    }

    /// Returns the current generation, advanced by every attribute write.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Marks `keys` as having no mapping in the embedding platform's text
    /// representation.
    ///
    /// Reads of these keys return `None` and writes are no-ops (reported once
    /// per key as a log warning).
    pub fn set_unsupported_keys(&mut self, keys: impl IntoIterator<Item = AttributeKey>) {
        self.unsupported_keys = keys.into_iter().collect();
        self.warned_keys.clear();
    }

    /// Returns whether `key` has a platform mapping.
    pub fn supports(&self, key: AttributeKey) -> bool {
        !self.unsupported_keys.contains(&key)
    }

    /// Replaces the underlying text, resetting runs and the selection.
    ///
    /// All attribute runs are dropped, the selection collapses to a caret at
    /// offset 0, and the typing attributes are cleared (retaining their
    /// allocated storage). The generation is advanced.
    pub fn set_text(&mut self, text: T) {
        self.text = text;
        self.reset_runs();
        self.selection = SpanRange::caret(0);
        self.typing_attributes.clear();
        self.generation.nudge();
    }

    pub(crate) fn nudge_generation(&mut self) {
        self.generation.nudge();
    }

    pub(crate) fn typing_attributes_mut(&mut self) -> &mut AttributeDictionary {
        &mut self.typing_attributes
    }

    pub(crate) fn runs_mut(&mut self) -> &mut Vec<Run> {
        &mut self.runs
    }

    pub(crate) fn runs_slice(&self) -> &[Run] {
        &self.runs
    }

    /// Emits the unsupported-key diagnostic once per key.
    pub(crate) fn warn_unsupported(&mut self, key: AttributeKey) {
        if self.warned_keys.contains(&key) {
            return;
        }
        self.warned_keys.push(key);
        log::warn!("attribute key {key:?} has no platform mapping; write ignored");
    }

    /// Index of the run containing `offset`.
    ///
    /// Callers must ensure `offset < len` (so a containing run exists).
    pub(crate) fn run_index_at(&self, offset: usize) -> usize {
        self.runs
            .partition_point(|run| run.range.end() <= offset)
    }

    fn reset_runs(&mut self) {
        self.runs.clear();
        let len = self.text.len();
        if len > 0 {
            self.runs.push(Run {
                range: SpanRange::new_unchecked(0, len),
                attributes: AttributeDictionary::new(),
            });
        }
    }

    /// Guards a caller-supplied range: debug builds assert it still fits the
    /// text, release builds clamp it.
    pub(crate) fn checked_range(&self, range: SpanRange) -> SpanRange {
        debug_assert!(
            range.end() <= self.text.len(),
            "range {range:?} out of bounds for text len {}",
            self.text.len()
        );
        self.clamp_range(range)
    }

    pub(crate) fn text_mut(&mut self) -> &mut T {
        &mut self.text
    }

    fn clamp_range(&self, range: SpanRange) -> SpanRange {
        let len = self.text.len();
        let mut location = range.location().min(len);
        while !self.text.is_char_boundary(location) {
            location -= 1;
        }
        let mut end = range.end().min(len);
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        let end = end.max(location);
        SpanRange::new_unchecked(location, end - location)
    }

    /// Checks the run invariant: contiguous, non-overlapping, covering, and
    /// no adjacent runs with equal attributes.
    pub(crate) fn runs_are_valid(&self) -> bool {
        let len = self.text.len();
        if len == 0 {
            return self.runs.is_empty();
        }
        let mut cursor = 0;
        for (i, run) in self.runs.iter().enumerate() {
            if run.range.location() != cursor || run.range.is_caret() {
                return false;
            }
            if i > 0 && self.runs[i - 1].attributes == run.attributes {
                return false;
            }
            cursor = run.range.end();
        }
        cursor == len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;

    #[test]
    fn new_buffer_has_one_empty_run() {
        let buffer = RunBuffer::new("hello");
        assert_eq!(buffer.runs().len(), 1);
        let (range, attrs) = buffer.runs().next().unwrap();
        assert_eq!(range, SpanRange::new_unchecked(0, 5));
        assert!(attrs.is_empty());
        assert!(buffer.runs_are_valid());
    }

    #[test]
    fn empty_buffer_has_no_runs() {
        let buffer = RunBuffer::new("");
        assert_eq!(buffer.runs().len(), 0);
        assert!(buffer.runs_are_valid());
    }

    #[test]
    fn selection_is_clamped_in_release() {
        let mut buffer = RunBuffer::new("hello");
        buffer.set_selection(SpanRange::new_unchecked(0, 5));
        assert_eq!(buffer.selection(), SpanRange::new_unchecked(0, 5));
    }

    #[test]
    fn set_text_resets_state() {
        let mut buffer = RunBuffer::new("hello");
        buffer.set_selection(SpanRange::new_unchecked(1, 3));
        buffer
            .typing_attributes_mut()
            .insert(Attribute::Underline(true));
        let before = buffer.generation();

        buffer.set_text("goodbye");
        assert_eq!(buffer.selection(), SpanRange::caret(0));
        assert!(buffer.typing_attributes().is_empty());
        assert_eq!(buffer.runs().len(), 1);
        assert_ne!(buffer.generation(), before);
    }

    #[test]
    fn run_index_lookup() {
        let buffer = RunBuffer::new("hello");
        assert_eq!(buffer.run_index_at(0), 0);
        assert_eq!(buffer.run_index_at(4), 0);
    }

    #[test]
    fn unsupported_keys_are_tracked() {
        let mut buffer = RunBuffer::new("hello");
        assert!(buffer.supports(AttributeKey::StrokeColor));
        buffer.set_unsupported_keys([AttributeKey::StrokeColor]);
        assert!(!buffer.supports(AttributeKey::StrokeColor));
        assert!(buffer.supports(AttributeKey::Font));
    }
}
