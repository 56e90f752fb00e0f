// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use attributed_runs::values::{Alignment, FontDescriptor};
use attributed_runs::{Attribute, AttributeDictionary, AttributeKey, Generation, SpanRange};
use peniko::Color;

use crate::RichTextConfiguration;

/// A point-in-time view of the editor state a UI binds to.
///
/// Snapshots are re-derived from the buffer after every driver operation, so
/// their attribute values are always what a read of the live selection would
/// return: set-and-uniform values are present, mixed or unset keys absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextSnapshot {
    /// The selection the attributes were resolved against.
    pub selection: SpanRange,
    /// The attributes uniform over that selection.
    pub attributes: AttributeDictionary,
}

impl ContextSnapshot {
    /// Returns `true` if the selection covers at least one character.
    pub fn has_selection(&self) -> bool {
        !self.selection.is_caret()
    }

    /// The uniform font over the selection, if any.
    pub fn font(&self) -> Option<&FontDescriptor> {
        match self.attributes.get(AttributeKey::Font) {
            Some(Attribute::Font(font)) => Some(font),
            _ => None,
        }
    }

    /// The uniform foreground color over the selection, if any.
    pub fn foreground_color(&self) -> Option<Color> {
        match self.attributes.get(AttributeKey::ForegroundColor) {
            Some(Attribute::ForegroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// The uniform background color over the selection, if any.
    pub fn background_color(&self) -> Option<Color> {
        match self.attributes.get(AttributeKey::BackgroundColor) {
            Some(Attribute::BackgroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// The uniform link target over the selection, if any.
    pub fn link(&self) -> Option<&str> {
        match self.attributes.get(AttributeKey::Link) {
            Some(Attribute::Link(url)) => Some(url),
            _ => None,
        }
    }

    /// The uniform paragraph alignment over the selection, if any.
    pub fn alignment(&self) -> Option<Alignment> {
        match self.attributes.get(AttributeKey::ParagraphStyle) {
            Some(Attribute::ParagraphStyle(style)) => Some(style.alignment),
            _ => None,
        }
    }

    /// Returns `true` if the whole selection is underlined.
    pub fn is_underlined(&self) -> bool {
        matches!(
            self.attributes.get(AttributeKey::Underline),
            Some(Attribute::Underline(true))
        )
    }

    /// Returns `true` if the whole selection is struck through.
    pub fn is_struck_through(&self) -> bool {
        matches!(
            self.attributes.get(AttributeKey::Strikethrough),
            Some(Attribute::Strikethrough(true))
        )
    }
}

/// Observable editor state: the current configuration, a [`ContextSnapshot`]
/// of the selection's attributes, and the listeners notified when it changes.
///
/// The context does not own a buffer. Mutations go through a
/// [`ContextDriver`](crate::ContextDriver), which borrows a context and a
/// buffer for the duration of one operation and republishes the snapshot
/// afterwards.
#[derive(Default)]
pub struct RichTextContext {
    configuration: RichTextConfiguration,
    snapshot: ContextSnapshot,
    generation: Generation,
    listeners: Vec<Listener>,
}

type Listener = Box<dyn FnMut(&ContextSnapshot)>;

impl RichTextContext {
    /// Creates a context with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with `configuration`.
    pub fn with_configuration(configuration: RichTextConfiguration) -> Self {
        Self {
            configuration,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn configuration(&self) -> &RichTextConfiguration {
        &self.configuration
    }

    /// Replaces the active configuration.
    ///
    /// Attributes already stored in a buffer are unaffected.
    pub fn set_configuration(&mut self, configuration: RichTextConfiguration) {
        self.configuration = configuration;
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> &ContextSnapshot {
        &self.snapshot
    }

    /// A generation advanced on every published snapshot, including snapshots
    /// equal to the previous one.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Registers `listener` to be called with every published snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&ContextSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Stores and publishes `snapshot`, notifying every listener.
    ///
    /// Publishing is unconditional; coalescing equal snapshots is the
    /// listener's business.
    pub(crate) fn publish(&mut self, snapshot: ContextSnapshot) {
        self.snapshot = snapshot;
        self.generation.nudge();
        for listener in &mut self.listeners {
            listener(&self.snapshot);
        }
    }
}

impl fmt::Debug for RichTextContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichTextContext")
            .field("configuration", &self.configuration)
            .field("snapshot", &self.snapshot)
            .field("generation", &self.generation)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
