// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical value types carried by attribute keys.
//!
//! Platform font and color representations are expected to be converted to
//! these types at the boundary by the embedding layer; nothing in this module
//! talks to a platform text system.

use alloc::sync::Arc;
use core::fmt;

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
///
/// This uses an `f32` so that it can represent the full range of values
/// possible with variable fonts.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual style or "slant" of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// An upright font.
    #[default]
    Normal,
    /// A cursive-style slanted font.
    Italic,
    /// A sheared upright font.
    Oblique,
}

/// A resolved description of a font: family, size, weight, and style.
///
/// This is the single canonical value for the font attribute key. Requested
/// sizes are clamped to a minimum of 1 point, so the stored descriptor may
/// differ from what a caller asked for; readers that need the effective value
/// must re-read after writing.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// The font family name.
    pub family: Arc<str>,
    /// The point size.
    pub size: f32,
    /// The weight class.
    pub weight: FontWeight,
    /// The style (upright, italic, oblique).
    pub style: FontStyle,
}

impl FontDescriptor {
    /// Creates a descriptor for `family` at `size` points, with normal weight
    /// and style.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size: size.max(1.0),
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Returns this descriptor with the point size replaced (clamped to a
    /// minimum of 1 point).
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(1.0);
        self
    }

    /// Returns this descriptor with the weight replaced.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this descriptor with the style replaced.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Aligned to the leading edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Aligned to the trailing edge.
    End,
    /// Justified to both edges.
    Justified,
}

/// Paragraph-level styling carried by the paragraph style attribute key.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Leading indent, in points.
    pub indent: f32,
}

impl ParagraphStyle {
    /// Creates a paragraph style with default alignment and no indent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this style with the alignment replaced.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns this style with the indent replaced (clamped to non-negative).
    #[must_use]
    pub fn with_indent(mut self, indent: f32) -> Self {
        self.indent = indent.max(0.0);
        self
    }
}
