// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutating attribute operations.
//!
//! Every write re-applies the run list so that the run invariant (contiguous,
//! non-overlapping, full coverage) holds afterwards, and advances the
//! buffer's generation — deliberately even when the applied value equals the
//! old one. Callers relying on change-coalescing must de-duplicate
//! themselves.

use alloc::string::String;
use core::fmt::Debug;

use crate::buffer::Run;
use crate::{
    targets_typing_attributes, Attribute, AttributeDictionary, AttributeKey, RunBuffer, SpanRange,
    TextStorage,
};

impl<T: Debug + TextStorage> RunBuffer<T> {
    /// Applies `attribute` over `range`.
    ///
    /// A caret range replaces the value in the typing attributes. A non-empty
    /// range rewrites the run list so every offset in `range` carries the
    /// value, splitting runs at the range endpoints and merging adjacent runs
    /// whose attributes become equal.
    ///
    /// Writing to an unsupported key is a no-op, reported once per key as a
    /// log warning.
    pub fn apply_attribute(&mut self, attribute: Attribute, range: SpanRange) {
        let key = attribute.key();
        if !self.supports(key) {
            self.warn_unsupported(key);
            return;
        }
        if targets_typing_attributes(range) {
            self.typing_attributes_mut().insert(attribute);
        } else {
            let range = self.checked_range(range);
            if targets_typing_attributes(range) {
                self.typing_attributes_mut().insert(attribute);
            } else {
                self.edit_runs(range, |attrs| {
                    attrs.insert(attribute.clone());
                });
            }
        }
        self.nudge_generation();
    }

    /// Removes the value for `key` over `range`.
    ///
    /// The key reads as unset afterwards; removal never stores a null or a
    /// default. A caret range edits the typing attributes.
    pub fn remove_attribute(&mut self, key: AttributeKey, range: SpanRange) {
        if !self.supports(key) {
            self.warn_unsupported(key);
            return;
        }
        if targets_typing_attributes(range) {
            self.typing_attributes_mut().remove(key);
        } else {
            let range = self.checked_range(range);
            if targets_typing_attributes(range) {
                self.typing_attributes_mut().remove(key);
            } else {
                self.edit_runs(range, |attrs| {
                    attrs.remove(key);
                });
            }
        }
        self.nudge_generation();
    }

    /// Applies every attribute in `attributes` over `range`.
    ///
    /// Each key is applied independently via the single-key rule; the
    /// operation is not atomic across keys.
    pub fn apply_attributes(&mut self, attributes: &AttributeDictionary, range: SpanRange) {
        for attribute in attributes.iter() {
            self.apply_attribute(attribute.clone(), range);
        }
    }

    /// Splits the run containing `offset` so that a run boundary exists
    /// there. No-op at the text edges or on an existing boundary.
    fn split_run_at(&mut self, offset: usize) {
        if offset == 0 || offset >= self.len() {
            return;
        }
        let index = self.run_index_at(offset);
        let run = &self.runs_slice()[index];
        if run.range.location() == offset {
            return;
        }
        let head = SpanRange::new_unchecked(run.range.location(), offset - run.range.location());
        let tail = SpanRange::new_unchecked(offset, run.range.end() - offset);
        let attributes = run.attributes.clone();
        let runs = self.runs_mut();
        runs[index].range = head;
        runs.insert(index + 1, Run {
            range: tail,
            attributes,
        });
    }

    /// Coalesces adjacent runs whose attributes are equal.
    fn merge_adjacent_runs(&mut self) {
        let runs = self.runs_mut();
        let mut i = 1;
        while i < runs.len() {
            if runs[i - 1].attributes == runs[i].attributes {
                runs[i - 1].range = SpanRange::new_unchecked(
                    runs[i - 1].range.location(),
                    runs[i - 1].range.length() + runs[i].range.length(),
                );
                runs.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn edit_runs(&mut self, range: SpanRange, mut edit: impl FnMut(&mut AttributeDictionary)) {
        self.split_run_at(range.location());
        self.split_run_at(range.end());
        for run in self.runs_mut().iter_mut() {
            if run.range.end() <= range.location() {
                continue;
            }
            if run.range.location() >= range.end() {
                break;
            }
            edit(&mut run.attributes);
        }
        self.merge_adjacent_runs();
        debug_assert!(self.runs_are_valid(), "run invariant violated after write");
    }
}

impl RunBuffer<String> {
    /// Inserts `s` at the caret, or replaces the selected text with `s`.
    ///
    /// Text inserted at a caret carries the typing attributes — this is the
    /// moment they become a real run. Text replacing a selection inherits the
    /// attributes at the start of the replaced range. The selection collapses
    /// to a caret after the inserted text.
    pub fn replace_selection(&mut self, s: &str) {
        let range = self.checked_range(self.selection());
        let start = range.location();
        let removed = range.length();
        let inserted = s.len();

        let attributes = if range.is_caret() {
            self.typing_attributes().clone()
        } else {
            let index = self.run_index_at(start);
            self.runs_slice()[index].attributes.clone()
        };

        // Run surgery first, in the old text's coordinates.
        self.split_run_at(start);
        self.split_run_at(start + removed);
        self.runs_mut()
            .retain(|run| run.range.end() <= start || run.range.location() >= start + removed);

        self.text_mut().replace_range(start..start + removed, s);

        let insert_index = self
            .runs_slice()
            .partition_point(|run| run.range.end() <= start);
        if inserted > 0 {
            self.runs_mut().insert(insert_index, Run {
                range: SpanRange::new_unchecked(start, inserted),
                attributes,
            });
        }
        // Shift everything after the edit into the new coordinates.
        let shift_from = insert_index + usize::from(inserted > 0);
        for run in self.runs_mut()[shift_from..].iter_mut() {
            run.range = SpanRange::new_unchecked(
                run.range.location() - removed + inserted,
                run.range.length(),
            );
        }
        self.merge_adjacent_runs();
        debug_assert!(self.runs_are_valid(), "run invariant violated after edit");

        self.set_selection(SpanRange::caret(start + inserted));
        self.nudge_generation();
    }
}
