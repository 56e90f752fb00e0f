// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-module scenarios exercising the buffer as an editor would.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::values::{Alignment, FontDescriptor, FontWeight, ParagraphStyle};
use crate::{Attribute, AttributeDictionary, AttributeKey, Color, RunBuffer, SpanRange};

fn serif(size: f32) -> Attribute {
    Attribute::Font(FontDescriptor::new("serif", size))
}

#[test]
fn styling_session() {
    // Select "bar", bold it, then extend the styling over "bar baz".
    let mut buffer = RunBuffer::new("foo bar baz".to_string());
    let bar = SpanRange::new("foo bar baz", 4, 3).unwrap();
    buffer.set_selection(bar);
    buffer.apply_attribute(
        Attribute::Font(FontDescriptor::new("serif", 14.0).with_weight(FontWeight::BOLD)),
        buffer.selection(),
    );
    let bold = buffer.current_attribute(AttributeKey::Font).cloned();
    assert!(bold.is_some());

    let tail = SpanRange::new(buffer.text(), 4, 7).unwrap();
    buffer.apply_attribute(bold.unwrap(), tail);
    assert_eq!(
        buffer.attributes(tail).len(),
        1,
        "the extended range reads uniformly",
    );
}

#[test]
fn typed_text_carries_typing_attributes_across_edits() {
    let mut buffer = RunBuffer::new(String::new());
    buffer.apply_attribute(Attribute::ForegroundColor(Color::WHITE), SpanRange::caret(0));
    buffer.replace_selection("foo");
    buffer.replace_selection(" bar");
    assert_eq!(buffer.as_str(), "foo bar");
    assert_eq!(
        buffer.attribute(AttributeKey::ForegroundColor, SpanRange::new_unchecked(0, 7)),
        Some(&Attribute::ForegroundColor(Color::WHITE)),
    );
    // Both insertions carried the same attributes, so they merged.
    assert_eq!(buffer.runs().len(), 1);
}

#[test]
fn multibyte_text_round_trips() {
    let text = "héllo wörld".to_string();
    let mut buffer = RunBuffer::new(text.clone());
    // "wörld" starts after "héllo " (7 bytes: the é is two).
    let word = SpanRange::new(&text, 7, 6).unwrap();
    buffer.apply_attribute(Attribute::Strikethrough(true), word);
    assert_eq!(
        buffer.attribute(AttributeKey::Strikethrough, word),
        Some(&Attribute::Strikethrough(true)),
    );
    assert_eq!(
        buffer.attribute(AttributeKey::Strikethrough, SpanRange::new_unchecked(0, 7)),
        None,
    );
}

#[test]
fn off_boundary_range_is_rejected_up_front() {
    let text = "héllo";
    // Offset 2 falls inside the é.
    assert!(SpanRange::new(text, 2, 1).is_err());
    assert!(SpanRange::new(text, 0, 2).is_err());
    assert!(SpanRange::new(text, 0, 3).is_ok());
}

#[test]
fn paragraph_style_applies_like_any_other_key() {
    let mut buffer = RunBuffer::new("foo bar baz");
    let all = SpanRange::new_unchecked(0, 11);
    let style = ParagraphStyle::default()
        .with_alignment(Alignment::Center)
        .with_indent(12.0);
    buffer.apply_attribute(Attribute::ParagraphStyle(style), all);
    assert_eq!(
        buffer.attribute(AttributeKey::ParagraphStyle, all),
        Some(&Attribute::ParagraphStyle(style)),
    );
}

#[test]
fn set_text_drops_all_styling_state() {
    let mut buffer = RunBuffer::new("foo bar baz");
    buffer.apply_attribute(serif(12.0), SpanRange::new_unchecked(4, 3));
    buffer.apply_attribute(serif(24.0), SpanRange::caret(0));
    buffer.set_selection(SpanRange::new_unchecked(4, 3));
    let before = buffer.generation();

    buffer.set_text("other");
    assert_ne!(buffer.generation(), before);
    assert_eq!(buffer.selection(), SpanRange::caret(0));
    assert!(buffer.typing_attributes().is_empty());
    assert_eq!(
        buffer.attribute(AttributeKey::Font, SpanRange::new_unchecked(0, 5)),
        None,
    );
}

#[test]
fn dictionary_write_and_mixed_read() {
    let mut buffer = RunBuffer::new("foo bar baz");
    let dict = AttributeDictionary::from_attributes([
        serif(12.0),
        Attribute::Underline(true),
        Attribute::ForegroundColor(Color::BLACK),
    ]);
    buffer.apply_attributes(&dict, SpanRange::new_unchecked(0, 7));
    buffer.apply_attribute(Attribute::Underline(false), SpanRange::new_unchecked(4, 7));

    // Underline is mixed over the whole text, the font is mixed too, and
    // only the unstyled tail drops the color.
    let all = SpanRange::new_unchecked(0, 11);
    assert_eq!(buffer.attribute(AttributeKey::Underline, all), None);
    let common = buffer.attributes(SpanRange::new_unchecked(0, 7));
    assert_eq!(common.len(), 2);
    assert!(common.contains(AttributeKey::Font));
    assert!(common.contains(AttributeKey::ForegroundColor));
}

#[test]
fn runs_report_their_attribute_boundaries() {
    let mut buffer = RunBuffer::new("foo bar baz");
    buffer.apply_attribute(serif(12.0), SpanRange::new_unchecked(4, 3));
    let boundaries: Vec<usize> = buffer.runs().map(|(range, _)| range.location()).collect();
    assert_eq!(boundaries, &[0, 4, 7]);
}
