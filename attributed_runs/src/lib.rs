// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Runs stores rich text styling attributes on byte ranges of a
//! UTF-8 text buffer.
//!
//! - [`RunBuffer`] pairs a text buffer with a run list: contiguous,
//!   non-overlapping attribute ranges that collectively cover the text.
//! - Reads resolve a single representative value for a range, reporting mixed
//!   values as absent rather than guessing.
//! - Writes re-apply the run list, splitting at the edit boundaries and
//!   merging adjacent runs that end up with equal attributes.
//! - A zero-length selection (a caret) reads and writes the buffer's *typing
//!   attributes* instead of the run list: the pending attribute set for text
//!   inserted at the caret.
//!
//! ## Indices
//!
//! All ranges are expressed as **byte offsets** into UTF-8 text and must lie
//! on UTF-8 character boundaries. [`SpanRange`] validates this once, so the
//! query and mutation APIs can be infallible with respect to range
//! correctness.
//!
//! ## Example
//!
//! ```
//! use attributed_runs::{Attribute, AttributeKey, RunBuffer, SpanRange};
//! use attributed_runs::values::FontDescriptor;
//!
//! let mut buffer = RunBuffer::new("foo bar baz");
//! let bar = SpanRange::new(buffer.text(), 4, 3).unwrap();
//! let font = FontDescriptor::new("serif", 24.0);
//!
//! buffer.apply_attribute(Attribute::Font(font.clone()), bar);
//! assert_eq!(
//!     buffer.attribute(AttributeKey::Font, bar),
//!     Some(&Attribute::Font(font)),
//! );
//!
//! // The caret before "foo" is unaffected: it reads the typing attributes.
//! let caret = SpanRange::caret(0);
//! assert_eq!(buffer.attribute(AttributeKey::Font, caret), None);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod values;

mod attribute;
mod buffer;
mod dictionary;
mod error;
mod range;
mod reader;
mod selection;
mod storage;
mod writer;

#[cfg(test)]
mod tests;

pub use crate::attribute::{Attribute, AttributeKey};
pub use crate::buffer::{Generation, RunBuffer};
pub use crate::dictionary::AttributeDictionary;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::range::SpanRange;
pub use crate::selection::targets_typing_attributes;
pub use crate::storage::TextStorage;

/// The canonical color value for color-bearing attribute keys.
///
/// Platform color representations are expected to be converted to this type
/// at the boundary by the embedding layer.
pub use peniko::Color;
