// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::{Attribute, AttributeKey};

/// A collection of [`Attribute`]s containing at most one value per key.
///
/// This is the unit of styling at a text offset: each run in a
/// [`RunBuffer`](crate::RunBuffer) carries one dictionary, and the typing
/// attributes are one dictionary held outside the run list.
///
/// An absent key means "unset"; the dictionary never substitutes defaults.
///
/// ## Example
///
/// ```
/// use attributed_runs::{Attribute, AttributeDictionary, AttributeKey};
///
/// let mut attrs = AttributeDictionary::new();
/// attrs.insert(Attribute::Underline(true));
/// assert_eq!(attrs.get(AttributeKey::Underline), Some(&Attribute::Underline(true)));
/// assert_eq!(attrs.get(AttributeKey::Strikethrough), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeDictionary(HashMap<AttributeKey, Attribute>);

impl AttributeDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dictionary from an iterator of attributes.
    ///
    /// Later attributes with the same key overwrite earlier ones.
    pub fn from_attributes<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = Attribute>,
    {
        let mut this = Self::new();
        for attribute in attributes {
            this.insert(attribute);
        }
        this
    }

    /// Adds `attribute` under its own key, returning any overwritten value.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.0.insert(attribute.key(), attribute)
    }

    /// Removes the value stored under `key`, returning it if present.
    ///
    /// A removed key reads as unset afterwards, not as a default value.
    pub fn remove(&mut self, key: AttributeKey) -> Option<Attribute> {
        self.0.remove(&key)
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.0.get(&key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Iterates over the stored values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.values()
    }

    /// Iterates over the stored keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.0.keys().copied()
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies every value from `other` into this dictionary, overwriting
    /// values stored under the same keys.
    pub fn merge(&mut self, other: &Self) {
        for attribute in other.iter() {
            self.insert(attribute.clone());
        }
    }

    /// Retains only the values for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(&Attribute) -> bool) {
        self.0.retain(|_, v| f(v));
    }

    /// Removes all values, retaining the allocated storage.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<Attribute> for AttributeDictionary {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self::from_attributes(iter)
    }
}
