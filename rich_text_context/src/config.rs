// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_runs::values::FontDescriptor;
use attributed_runs::{Attribute, AttributeDictionary, AttributeKey};
use peniko::Color;

/// Baseline appearance for a rich text editor.
///
/// The configuration supplies defaults that apply where no explicit attribute
/// is set, and decides how links are styled via [`LinkConfiguration`]. It is
/// plain data: changing a configuration does not rewrite attributes already
/// stored in a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct RichTextConfiguration {
    /// The text color used where no foreground color attribute is set.
    pub foreground_color: Color,
    /// The background fill used where no background color attribute is set.
    pub background_color: Color,
    /// The font used where no font attribute is set.
    pub default_font: FontDescriptor,
    /// How link attributes are materialized.
    pub link_configuration: LinkConfiguration,
}

impl Default for RichTextConfiguration {
    fn default() -> Self {
        Self {
            foreground_color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            default_font: FontDescriptor::new("system-ui", 16.0),
            link_configuration: LinkConfiguration::None,
        }
    }
}

/// How a [`RichTextConfiguration`] styles linked ranges.
///
/// Platform text systems usually apply their own link styling (color,
/// underline) on top of the stored attributes. When that styling is
/// unwanted, the configuration can either supply a full replacement
/// dictionary or a single color override.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LinkConfiguration {
    /// Store only the link itself and let the platform style it.
    #[default]
    None,
    /// Apply this dictionary alongside the link attribute.
    ///
    /// Any `Link` entry in the dictionary is ignored; the link payload always
    /// comes from the caller.
    CustomLinkAttributes(AttributeDictionary),
    /// Apply only a foreground color alongside the link attribute.
    CustomColor(Color),
}

impl LinkConfiguration {
    /// The styling attributes this configuration applies alongside a link.
    ///
    /// Empty for [`LinkConfiguration::None`].
    pub fn link_attributes(&self) -> AttributeDictionary {
        match self {
            Self::None => AttributeDictionary::new(),
            Self::CustomLinkAttributes(attributes) => {
                let mut attributes = attributes.clone();
                attributes.remove(AttributeKey::Link);
                attributes
            }
            Self::CustomColor(color) => {
                AttributeDictionary::from_attributes([Attribute::ForegroundColor(*color)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;

    #[test]
    fn default_configuration() {
        let config = RichTextConfiguration::default();
        assert_eq!(config.foreground_color, Color::BLACK);
        assert_eq!(config.background_color, Color::TRANSPARENT);
        assert_eq!(config.link_configuration, LinkConfiguration::None);
        assert_eq!(&*config.default_font.family, "system-ui");
    }

    #[test]
    fn none_contributes_no_styling() {
        assert!(LinkConfiguration::None.link_attributes().is_empty());
    }

    #[test]
    fn custom_color_contributes_only_the_foreground() {
        let attrs = LinkConfiguration::CustomColor(Color::WHITE).link_attributes();
        assert_eq!(attrs.len(), 1);
        assert_eq!(
            attrs.get(AttributeKey::ForegroundColor),
            Some(&Attribute::ForegroundColor(Color::WHITE)),
        );
    }

    #[test]
    fn custom_attributes_drop_any_link_entry() {
        let dict = AttributeDictionary::from_attributes([
            Attribute::Underline(true),
            Attribute::Link(Arc::from("https://example.com")),
        ]);
        let attrs = LinkConfiguration::CustomLinkAttributes(dict).link_attributes();
        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains(AttributeKey::Underline));
        assert!(!attrs.contains(AttributeKey::Link));
    }
}
