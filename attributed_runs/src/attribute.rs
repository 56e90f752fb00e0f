// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::Color;

use crate::values::{FontDescriptor, ParagraphStyle};

/// A single styling attribute: a key together with its typed value.
///
/// The key is the enum discriminant, so a value cannot be stored under the
/// wrong key. Use [`Attribute::key`] to get the corresponding
/// [`AttributeKey`].
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// The font used to render the text.
    Font(FontDescriptor),
    /// The text color.
    ForegroundColor(Color),
    /// The color drawn behind the text.
    BackgroundColor(Color),
    /// The color of the underline decoration.
    UnderlineColor(Color),
    /// The color of the strikethrough decoration.
    StrikethroughColor(Color),
    /// The color of the text outline stroke.
    StrokeColor(Color),
    /// Underline decoration.
    Underline(bool),
    /// Strikethrough decoration.
    Strikethrough(bool),
    /// Paragraph-level styling.
    ParagraphStyle(ParagraphStyle),
    /// A link target.
    Link(Arc<str>),
}

impl Attribute {
    /// Returns the key this value is stored under.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::StrikethroughColor(_) => AttributeKey::StrikethroughColor,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::Underline(_) => AttributeKey::Underline,
            Self::Strikethrough(_) => AttributeKey::Strikethrough,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Self::Link(_) => AttributeKey::Link,
        }
    }
}

/// The key identifying an attribute, without its value.
///
/// An absent key means "unset", which is distinct from "set to a default".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// See [`Attribute::Font`].
    Font,
    /// See [`Attribute::ForegroundColor`].
    ForegroundColor,
    /// See [`Attribute::BackgroundColor`].
    BackgroundColor,
    /// See [`Attribute::UnderlineColor`].
    UnderlineColor,
    /// See [`Attribute::StrikethroughColor`].
    StrikethroughColor,
    /// See [`Attribute::StrokeColor`].
    StrokeColor,
    /// See [`Attribute::Underline`].
    Underline,
    /// See [`Attribute::Strikethrough`].
    Strikethrough,
    /// See [`Attribute::ParagraphStyle`].
    ParagraphStyle,
    /// See [`Attribute::Link`].
    Link,
}
