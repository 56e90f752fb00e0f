// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::TextStorage;

/// Rich error type for range validation.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted location/length
/// pair and, for boundary failures, the enclosing UTF-8 character span at the
/// offending index.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start byte offset of the caller-provided range.
    location: usize,

    /// The length in bytes of the caller-provided range.
    length: usize,

    /// The length in bytes of the underlying text at the time of failure.
    text_len: usize,

    /// Extra detail for boundary-related errors, when available.
    boundary: Option<BoundaryInfo>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte offset of the range provided by the caller.
    pub fn location(&self) -> usize {
        self.location
    }

    /// The length in bytes of the range provided by the caller.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The length in bytes of the underlying text at the time of the error.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn invalid_range(location: usize, length: usize, text_len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            location,
            length,
            text_len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage + ?Sized>(
        text: &T,
        location: usize,
        length: usize,
        text_len: usize,
        which: Endpoint,
        index: usize,
    ) -> Self {
        let (cs, ce) = enclosing_char_span(text, index).unwrap_or((index, index));
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            location,
            length,
            text_len,
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start: cs,
                char_end: ce,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => write!(
                f,
                "range ({}, {}) out of bounds for text len {}",
                self.location, self.length, self.text_len
            ),
            ErrorKind::NotOnCharBoundary => {
                if let Some(b) = self.boundary {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range ({}, {}): {} index {} not on UTF-8 boundary (char {}..{})",
                        self.location, self.length, which, b.index, b.char_start, b.char_end
                    )
                } else {
                    write!(
                        f,
                        "range ({}, {}) not on UTF-8 boundary",
                        self.location, self.length
                    )
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided location/length pair violated the document-bounds
    /// invariant `location + length <= text_len`.
    InvalidRange,

    /// One of the range endpoints was not aligned to a UTF-8 character
    /// boundary.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
///
/// Surfaced via [`BoundaryInfo`], which is attached to [`Error`] for
/// boundary-related failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The start of the range, i.e. its location.
    Start,

    /// The end of the range, i.e. location plus length.
    End,
}

/// Details about an offending index that was not on a UTF-8 character
/// boundary.
///
/// Returned by [`Error::boundary`] when the error kind is
/// [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (start or end) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

fn enclosing_char_span<T: TextStorage + ?Sized>(text: &T, index: usize) -> Option<(usize, usize)> {
    let len = text.len();
    if index > len {
        return None;
    }
    if text.is_char_boundary(index) {
        return Some((index, index));
    }

    // Previous boundary is at most 3 bytes back; index 0 is always a boundary
    // so the subtraction cannot wrap.
    let mut s = index;
    while s > 0 {
        s -= 1;
        if text.is_char_boundary(s) {
            break;
        }
    }

    // Next boundary is at most 3 bytes forward.
    let mut e = index;
    while e < len {
        e += 1;
        if text.is_char_boundary(e) {
            break;
        }
    }

    Some((s, e))
}
