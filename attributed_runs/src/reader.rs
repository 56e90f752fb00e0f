// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only attribute queries.
//!
//! Reads never mutate and never fail: an absent or mixed value is reported as
//! `None`, not as an error.

use core::fmt::Debug;

use peniko::Color;

use crate::{
    targets_typing_attributes, Attribute, AttributeDictionary, AttributeKey, RunBuffer, SpanRange,
    TextStorage,
};

impl<T: Debug + TextStorage> RunBuffer<T> {
    /// Returns the value for `key` over `range`, if it is uniform.
    ///
    /// A caret range reads the typing attributes. A non-empty range returns
    /// the value at `range.location()` if and only if every offset in the
    /// range carries an equal value for `key`; a mixed range reads as `None`.
    /// An unsupported key always reads as `None`.
    ///
    /// A stale range that no longer fits the text is a caller error; debug
    /// builds assert, release builds clamp it to the text bounds.
    pub fn attribute(&self, key: AttributeKey, range: SpanRange) -> Option<&Attribute> {
        if !self.supports(key) {
            return None;
        }
        if targets_typing_attributes(range) {
            return self.typing_attributes().get(key);
        }
        let range = self.checked_range(range);
        if targets_typing_attributes(range) {
            return self.typing_attributes().get(key);
        }

        let runs = self.runs_slice();
        let first = self.run_index_at(range.location());
        let candidate = runs[first].attributes.get(key)?;
        for run in &runs[first + 1..] {
            if run.range.location() >= range.end() {
                break;
            }
            if run.attributes.get(key) != Some(candidate) {
                return None;
            }
        }
        Some(candidate)
    }

    /// Returns every attribute that is uniform over `range`.
    ///
    /// Keys with mixed values are omitted, never substituted with defaults.
    /// A caret range returns a copy of the typing attributes.
    pub fn attributes(&self, range: SpanRange) -> AttributeDictionary {
        if targets_typing_attributes(range) {
            return self.supported_typing_attributes();
        }
        let range = self.checked_range(range);
        if targets_typing_attributes(range) {
            return self.supported_typing_attributes();
        }

        let runs = self.runs_slice();
        let first = self.run_index_at(range.location());
        let mut uniform = runs[first].attributes.clone();
        uniform.retain(|attr| self.supports(attr.key()));
        for run in &runs[first + 1..] {
            if run.range.location() >= range.end() {
                break;
            }
            uniform.retain(|attr| run.attributes.get(attr.key()) == Some(attr));
            if uniform.is_empty() {
                break;
            }
        }
        uniform
    }

    /// Returns the value for `key` at the buffer's live selection.
    ///
    /// Equivalent to [`attribute`](Self::attribute) with the current
    /// selection; a collapsed selection reads the typing attributes.
    pub fn current_attribute(&self, key: AttributeKey) -> Option<&Attribute> {
        self.attribute(key, self.selection())
    }

    /// Returns every attribute that is uniform at the buffer's live
    /// selection.
    pub fn current_attributes(&self) -> AttributeDictionary {
        self.attributes(self.selection())
    }

    fn supported_typing_attributes(&self) -> AttributeDictionary {
        let mut attrs = self.typing_attributes().clone();
        attrs.retain(|attr| self.supports(attr.key()));
        attrs
    }
}

/// Per-color convenience accessors kept for source compatibility with ported
/// code. Each is a pure alias for [`RunBuffer::attribute`].
impl<T: Debug + TextStorage> RunBuffer<T> {
    /// Returns the uniform foreground color over `range`, if any.
    #[deprecated(
        since = "0.1.0",
        note = "use `attribute(AttributeKey::ForegroundColor, range)`"
    )]
    pub fn foreground_color(&self, range: SpanRange) -> Option<Color> {
        match self.attribute(AttributeKey::ForegroundColor, range) {
            Some(Attribute::ForegroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// Returns the uniform background color over `range`, if any.
    #[deprecated(
        since = "0.1.0",
        note = "use `attribute(AttributeKey::BackgroundColor, range)`"
    )]
    pub fn background_color(&self, range: SpanRange) -> Option<Color> {
        match self.attribute(AttributeKey::BackgroundColor, range) {
            Some(Attribute::BackgroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// Returns the uniform underline color over `range`, if any.
    #[deprecated(
        since = "0.1.0",
        note = "use `attribute(AttributeKey::UnderlineColor, range)`"
    )]
    pub fn underline_color(&self, range: SpanRange) -> Option<Color> {
        match self.attribute(AttributeKey::UnderlineColor, range) {
            Some(Attribute::UnderlineColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// Returns the uniform strikethrough color over `range`, if any.
    #[deprecated(
        since = "0.1.0",
        note = "use `attribute(AttributeKey::StrikethroughColor, range)`"
    )]
    pub fn strikethrough_color(&self, range: SpanRange) -> Option<Color> {
        match self.attribute(AttributeKey::StrikethroughColor, range) {
            Some(Attribute::StrikethroughColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// Returns the uniform stroke color over `range`, if any.
    #[deprecated(
        since = "0.1.0",
        note = "use `attribute(AttributeKey::StrokeColor, range)`"
    )]
    pub fn stroke_color(&self, range: SpanRange) -> Option<Color> {
        match self.attribute(AttributeKey::StrokeColor, range) {
            Some(Attribute::StrokeColor(color)) => Some(*color),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::FontDescriptor;

    fn font(size: f32) -> Attribute {
        Attribute::Font(FontDescriptor::new("serif", size))
    }

    #[test]
    fn uniform_value_is_returned() {
        let mut buffer = RunBuffer::new("foo bar baz");
        let all = SpanRange::new_unchecked(0, 11);
        buffer.apply_attribute(font(12.0), all);
        assert_eq!(buffer.attribute(AttributeKey::Font, all), Some(&font(12.0)));
        assert_eq!(
            buffer.attribute(AttributeKey::Font, SpanRange::new_unchecked(4, 3)),
            Some(&font(12.0)),
        );
    }

    #[test]
    fn mixed_value_reads_as_none() {
        let mut buffer = RunBuffer::new("foo bar baz");
        buffer.apply_attribute(font(12.0), SpanRange::new_unchecked(0, 4));
        buffer.apply_attribute(font(24.0), SpanRange::new_unchecked(4, 7));
        assert_eq!(
            buffer.attribute(AttributeKey::Font, SpanRange::new_unchecked(0, 11)),
            None,
        );
        // Each half is still uniform on its own.
        assert_eq!(
            buffer.attribute(AttributeKey::Font, SpanRange::new_unchecked(0, 4)),
            Some(&font(12.0)),
        );
        assert_eq!(
            buffer.attribute(AttributeKey::Font, SpanRange::new_unchecked(4, 7)),
            Some(&font(24.0)),
        );
    }

    #[test]
    fn unset_key_reads_as_none() {
        let buffer = RunBuffer::new("foo bar baz");
        assert_eq!(
            buffer.attribute(AttributeKey::Underline, SpanRange::new_unchecked(0, 3)),
            None,
        );
    }

    #[test]
    fn caret_reads_typing_attributes_regardless_of_runs() {
        let mut buffer = RunBuffer::new("foo bar baz");
        buffer.apply_attribute(font(12.0), SpanRange::new_unchecked(0, 11));
        // The caret ignores the surrounding run content.
        assert_eq!(buffer.attribute(AttributeKey::Font, SpanRange::caret(5)), None);

        buffer.apply_attribute(Attribute::Underline(true), SpanRange::caret(5));
        assert_eq!(
            buffer.attribute(AttributeKey::Underline, SpanRange::caret(0)),
            Some(&Attribute::Underline(true)),
        );
    }

    #[test]
    fn empty_document_caret_reads_typing_attributes() {
        let mut buffer = RunBuffer::new("");
        assert_eq!(buffer.attribute(AttributeKey::Underline, SpanRange::caret(0)), None);
        buffer.apply_attribute(Attribute::Underline(true), SpanRange::caret(0));
        assert_eq!(
            buffer.attribute(AttributeKey::Underline, SpanRange::caret(0)),
            Some(&Attribute::Underline(true)),
        );
    }

    #[test]
    fn attributes_omits_mixed_keys() {
        let mut buffer = RunBuffer::new("foo bar baz");
        let all = SpanRange::new_unchecked(0, 11);
        buffer.apply_attribute(Attribute::Underline(true), all);
        buffer.apply_attribute(font(12.0), SpanRange::new_unchecked(0, 4));

        let uniform = buffer.attributes(all);
        assert_eq!(uniform.len(), 1);
        assert_eq!(
            uniform.get(AttributeKey::Underline),
            Some(&Attribute::Underline(true)),
        );
        assert_eq!(uniform.get(AttributeKey::Font), None);
    }

    #[test]
    fn current_queries_track_the_live_selection() {
        let mut buffer = RunBuffer::new("foo bar baz");
        buffer.apply_attribute(font(12.0), SpanRange::new_unchecked(4, 3));

        buffer.set_selection(SpanRange::new_unchecked(4, 3));
        assert_eq!(buffer.current_attribute(AttributeKey::Font), Some(&font(12.0)));

        buffer.set_selection(SpanRange::caret(0));
        assert_eq!(buffer.current_attribute(AttributeKey::Font), None);
    }

    #[test]
    fn unsupported_key_reads_as_none() {
        let mut buffer = RunBuffer::new("foo bar baz");
        let all = SpanRange::new_unchecked(0, 11);
        buffer.apply_attribute(Attribute::StrokeColor(Color::BLACK), all);
        buffer.set_unsupported_keys([AttributeKey::StrokeColor]);
        assert_eq!(buffer.attribute(AttributeKey::StrokeColor, all), None);
        assert_eq!(buffer.attributes(all).get(AttributeKey::StrokeColor), None);
    }

    #[test]
    fn unsupported_key_reads_as_none_at_the_caret() {
        let mut buffer = RunBuffer::new("foo bar baz");
        let caret = SpanRange::caret(0);
        // A value stored in the typing attributes before the key was marked
        // unsupported must stop reading back, same as on the run path.
        buffer.apply_attribute(Attribute::StrokeColor(Color::BLACK), caret);
        buffer.set_unsupported_keys([AttributeKey::StrokeColor]);
        assert_eq!(buffer.attribute(AttributeKey::StrokeColor, caret), None);
        assert_eq!(buffer.attributes(caret).get(AttributeKey::StrokeColor), None);
    }

    #[test]
    #[allow(deprecated, reason = "exercises the deprecated aliases")]
    fn deprecated_color_accessors_forward() {
        let mut buffer = RunBuffer::new("foo bar baz");
        let bar = SpanRange::new_unchecked(4, 3);
        buffer.apply_attribute(Attribute::StrikethroughColor(Color::BLACK), bar);
        assert_eq!(buffer.strikethrough_color(bar), Some(Color::BLACK));
        assert_eq!(buffer.foreground_color(bar), None);
    }
}
