// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable editor state over [`attributed_runs`].
//!
//! - [`RichTextConfiguration`] supplies baseline appearance (default colors
//!   and font) and a [`LinkConfiguration`] deciding how links are styled.
//! - [`RichTextContext`] holds the configuration plus a published
//!   [`ContextSnapshot`] of the selection's attributes, and notifies
//!   subscribed listeners whenever the snapshot is republished.
//! - [`ContextDriver`] borrows a context and a
//!   [`RunBuffer`](attributed_runs::RunBuffer) together for one batch of
//!   edits; every operation writes through to the buffer and re-reads it, so
//!   the snapshot reflects stored values, never requested ones.
//!
//! ## Example
//!
//! ```
//! use attributed_runs::{AttributeKey, RunBuffer, SpanRange};
//! use attributed_runs::values::FontDescriptor;
//! use rich_text_context::{ContextDriver, RichTextContext};
//!
//! let mut context = RichTextContext::new();
//! let mut buffer = RunBuffer::new("foo bar baz");
//!
//! let mut driver = ContextDriver { context: &mut context, buffer: &mut buffer };
//! driver.select(SpanRange::new("foo bar baz", 4, 3).unwrap());
//! driver.set_font(FontDescriptor::new("serif", 24.0));
//! drop(driver);
//!
//! assert_eq!(context.snapshot().font().map(|f| f.size), Some(24.0));
//! assert!(buffer.attribute(AttributeKey::Font, SpanRange::caret(0)).is_none());
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

mod config;
mod context;
mod driver;


pub use crate::config::{LinkConfiguration, RichTextConfiguration};
pub use crate::context::{ContextSnapshot, RichTextContext};
pub use crate::driver::ContextDriver;
