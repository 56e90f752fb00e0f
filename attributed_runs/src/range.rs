// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, TextStorage};

/// A validated `(location, length)` byte range into a UTF-8 text buffer.
///
/// Invariants carried by a `SpanRange`:
///
/// - `location + length` does not exceed the text length it was validated
///   against
/// - both endpoints lie on UTF-8 character boundaries
///
/// A zero-length range is a **caret**: an insertion point rather than a
/// selected span. Caret ranges address the typing attributes instead of the
/// run list (see [`targets_typing_attributes`]).
///
/// Validation happens once, in [`SpanRange::new`], so downstream query and
/// mutation APIs can be infallible with respect to range correctness. A
/// `SpanRange` does not record which text it was validated against; reusing
/// it after the text changes is the caller's responsibility.
///
/// ## Example
///
/// ```
/// use attributed_runs::SpanRange;
///
/// let text = "foo bar baz";
/// let bar = SpanRange::new(&text, 4, 3).unwrap();
/// assert_eq!(bar.end(), 7);
/// assert!(!bar.is_caret());
/// assert!(SpanRange::caret(4).is_caret());
/// ```
///
/// [`targets_typing_attributes`]: crate::targets_typing_attributes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpanRange {
    location: usize,
    length: usize,
}

impl SpanRange {
    /// Returns a validated `SpanRange` for the provided text.
    #[inline]
    pub fn new<T: TextStorage + ?Sized>(
        text: &T,
        location: usize,
        length: usize,
    ) -> Result<Self, Error> {
        let text_len = text.len();
        let end = location
            .checked_add(length)
            .ok_or_else(|| Error::invalid_range(location, length, text_len))?;
        if end > text_len {
            return Err(Error::invalid_range(location, length, text_len));
        }
        if !text.is_char_boundary(location) {
            return Err(Error::not_on_char_boundary(
                text,
                location,
                length,
                text_len,
                Endpoint::Start,
                location,
            ));
        }
        if !text.is_char_boundary(end) {
            return Err(Error::not_on_char_boundary(
                text,
                location,
                length,
                text_len,
                Endpoint::End,
                end,
            ));
        }
        Ok(Self { location, length })
    }

    /// Creates a caret (zero-length range) at `location`.
    ///
    /// The location is not validated here; a caret used against a buffer must
    /// still lie on a character boundary within the text.
    #[must_use]
    #[inline]
    pub const fn caret(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// Creates a `SpanRange` without validation.
    ///
    /// This is intended for callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn location(self) -> usize {
        self.location
    }

    /// The length in bytes.
    #[must_use]
    #[inline]
    pub const fn length(self) -> usize {
        self.length
    }

    /// The end byte offset (exclusive), i.e. location plus length.
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.location + self.length
    }

    /// Returns `true` if this range is a caret (zero length).
    #[must_use]
    #[inline]
    pub const fn is_caret(self) -> bool {
        self.length == 0
    }

    /// Returns `true` if `index` lies within this range.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index >= self.location && index < self.end()
    }

    /// Returns `true` if this range and `other` share at least one offset.
    ///
    /// A caret has no offsets, so it never intersects anything.
    #[must_use]
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.length != 0
            && other.length != 0
            && self.location < other.end()
            && other.location < self.end()
    }

    /// Returns this range as a `Range<usize>` of byte offsets.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.location..self.end()
    }
}

impl From<SpanRange> for Range<usize> {
    #[inline]
    fn from(value: SpanRange) -> Self {
        value.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::SpanRange;
    use crate::ErrorKind;

    #[test]
    fn validates_ok_ranges() {
        let t = "Hello!";
        assert!(SpanRange::new(&t, 0, 0).is_ok());
        assert!(SpanRange::new(&t, 0, 6).is_ok());
        assert!(SpanRange::new(&t, 6, 0).is_ok());
        assert!(SpanRange::new(&t, 1, 2).is_ok());
    }

    #[test]
    fn rejects_out_of_bounds() {
        let t = "Hello!";
        let err = SpanRange::new(&t, 0, 7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        let err = SpanRange::new(&t, 7, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn rejects_overflowing_length() {
        let t = "Hello!";
        let err = SpanRange::new(&t, 1, usize::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn rejects_non_boundary_endpoints() {
        let t = "éclair";
        assert_eq!(
            SpanRange::new(&t, 1, 2).unwrap_err().kind(),
            ErrorKind::NotOnCharBoundary
        );
        assert_eq!(
            SpanRange::new(&t, 0, 1).unwrap_err().kind(),
            ErrorKind::NotOnCharBoundary
        );
    }

    #[test]
    fn intersection_and_containment() {
        let a = SpanRange::new_unchecked(4, 3);
        assert!(a.contains(4));
        assert!(a.contains(6));
        assert!(!a.contains(7));
        assert!(a.intersects(SpanRange::new_unchecked(6, 5)));
        assert!(!a.intersects(SpanRange::new_unchecked(7, 2)));
        // A caret has no offsets to share.
        assert!(!a.intersects(SpanRange::caret(5)));
    }
}
