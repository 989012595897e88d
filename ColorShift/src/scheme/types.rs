//! The `Scheme` mapping: slot name -> hex color

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::registry::BASE16_SLOTS;
use crate::convert::hex_to_rgb;
use crate::error::{Error, Result};

/// A named palette mapping slot keys (e.g. "base08") to hex colors.
///
/// Colors are stored exactly as supplied and keep insertion order. The
/// transform functions only ever read from a scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    /// Display name (e.g. "Catppuccin Mocha")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    colors: IndexMap<String, String>,
}

impl Scheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            colors: IndexMap::new(),
        }
    }

    /// Build a scheme from `(slot, hex)` pairs. Later duplicates win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, slot: impl Into<String>, hex: impl Into<String>) -> Self {
        self.insert(slot, hex);
        self
    }

    /// Insert or replace a slot, returning the previous color if any.
    pub fn insert(&mut self, slot: impl Into<String>, hex: impl Into<String>) -> Option<String> {
        self.colors.insert(slot.into(), hex.into())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.colors.get(slot).map(String::as_str)
    }

    /// Like `get`, but a missing slot is an error.
    pub fn color(&self, slot: &str) -> Result<&str> {
        self.get(slot).ok_or_else(|| {
            tracing::debug!("Slot {} not found in scheme {:?}", slot, self.name);
            Error::UnknownSlot(slot.to_string())
        })
    }

    #[must_use]
    pub fn contains(&self, slot: &str) -> bool {
        self.colors.contains_key(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate `(slot, hex)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Check that every color parses as a 6-digit hex color.
    pub fn validate(&self) -> Result<()> {
        for hex in self.colors.values() {
            hex_to_rgb(hex)?;
        }
        Ok(())
    }

    /// Whether all 16 base16 slots are present.
    #[must_use]
    pub fn is_complete_base16(&self) -> bool {
        BASE16_SLOTS.iter().all(|def| self.contains(def.name))
    }

    /// Return a new scheme with `f` applied to every color.
    ///
    /// The first error aborts the whole mapping.
    pub fn map_colors<F>(&self, mut f: F) -> Result<Scheme>
    where
        F: FnMut(&str) -> Result<String>,
    {
        let colors = self
            .colors
            .iter()
            .map(|(slot, hex)| Ok((slot.clone(), f(hex)?)))
            .collect::<Result<IndexMap<_, _>>>()?;

        Ok(Scheme {
            name: self.name.clone(),
            colors,
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Scheme
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            name: None,
            colors: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
