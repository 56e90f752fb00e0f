// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt::Debug;

use attributed_runs::values::{Alignment, FontDescriptor, ParagraphStyle};
use attributed_runs::{
    Attribute, AttributeDictionary, AttributeKey, RunBuffer, SpanRange, TextStorage,
};

use crate::context::ContextSnapshot;
use crate::RichTextContext;

/// A short-lived borrow pairing a [`RichTextContext`] with the buffer it
/// edits.
///
/// A driver is constructed for one batch of operations and dropped; the
/// context and buffer stay independently owned in between. Every operation
/// writes through to the buffer, re-reads the selection's attributes, and
/// republishes the context snapshot, so listeners always observe stored
/// values rather than requested ones.
#[derive(Debug)]
pub struct ContextDriver<'a, T: Debug + TextStorage> {
    /// The context to publish through.
    pub context: &'a mut RichTextContext,
    /// The buffer under edit.
    pub buffer: &'a mut RunBuffer<T>,
}

impl<T: Debug + TextStorage> ContextDriver<'_, T> {
    /// Moves the selection and republishes the snapshot for it.
    pub fn select(&mut self, range: SpanRange) {
        self.buffer.set_selection(range);
        self.refresh();
    }

    /// Re-reads the selection's attributes and republishes the snapshot.
    ///
    /// Call this after mutating the buffer outside the driver.
    pub fn refresh(&mut self) {
        let snapshot = ContextSnapshot {
            selection: self.buffer.selection(),
            attributes: self.buffer.current_attributes(),
        };
        self.context.publish(snapshot);
    }

    /// Applies `attribute` over the selection.
    ///
    /// At a caret this updates the typing attributes; over a selection it
    /// rewrites the run list.
    pub fn set_attribute(&mut self, attribute: Attribute) {
        let selection = self.buffer.selection();
        self.buffer.apply_attribute(attribute, selection);
        self.refresh();
    }

    /// Removes the value for `key` over the selection.
    pub fn remove_attribute(&mut self, key: AttributeKey) {
        let selection = self.buffer.selection();
        self.buffer.remove_attribute(key, selection);
        self.refresh();
    }

    /// Applies every attribute in `attributes` over the selection.
    pub fn set_attributes(&mut self, attributes: &AttributeDictionary) {
        let selection = self.buffer.selection();
        self.buffer.apply_attributes(attributes, selection);
        self.refresh();
    }

    /// Sets or clears the link over the selection, applying the styling the
    /// context's link configuration prescribes.
    ///
    /// Clearing removes the link attribute *and* the styling keys the link
    /// configuration owns, returning the range to its unlinked appearance.
    /// Styling for keys the configuration does not own is left alone.
    pub fn set_link(&mut self, url: Option<&str>) {
        let selection = self.buffer.selection();
        let styling = self.context.configuration().link_configuration.link_attributes();
        match url {
            Some(url) => {
                self.buffer
                    .apply_attribute(Attribute::Link(Arc::from(url)), selection);
                self.buffer.apply_attributes(&styling, selection);
            }
            None => {
                self.buffer.remove_attribute(AttributeKey::Link, selection);
                for key in styling.keys() {
                    self.buffer.remove_attribute(key, selection);
                }
            }
        }
        self.refresh();
    }

    /// Sets the font over the selection.
    pub fn set_font(&mut self, font: FontDescriptor) {
        self.set_attribute(Attribute::Font(font));
    }

    /// Sets the font size over the selection, preserving the rest of the
    /// current font (or starting from the configuration's default font when
    /// none is set).
    pub fn set_font_size(&mut self, size: f32) {
        let font = match self.buffer.current_attribute(AttributeKey::Font) {
            Some(Attribute::Font(font)) => font.clone(),
            _ => self.context.configuration().default_font.clone(),
        };
        self.set_attribute(Attribute::Font(font.with_size(size)));
    }

    /// Sets the paragraph alignment over the selection, preserving the rest
    /// of the current paragraph style.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        let style = match self.buffer.current_attribute(AttributeKey::ParagraphStyle) {
            Some(Attribute::ParagraphStyle(style)) => *style,
            _ => ParagraphStyle::new(),
        };
        self.set_attribute(Attribute::ParagraphStyle(style.with_alignment(alignment)));
    }

    /// Toggles underline over the selection.
    pub fn toggle_underline(&mut self) {
        let on = matches!(
            self.buffer.current_attribute(AttributeKey::Underline),
            Some(Attribute::Underline(true))
        );
        self.set_attribute(Attribute::Underline(!on));
    }

    /// Toggles strikethrough over the selection.
    pub fn toggle_strikethrough(&mut self) {
        let on = matches!(
            self.buffer.current_attribute(AttributeKey::Strikethrough),
            Some(Attribute::Strikethrough(true))
        );
        self.set_attribute(Attribute::Strikethrough(!on));
    }
}

impl ContextDriver<'_, alloc::string::String> {
    /// Replaces the selected text (or inserts at the caret) and republishes.
    pub fn replace_selection(&mut self, s: &str) {
        self.buffer.replace_selection(s);
        self.refresh();
    }
}
