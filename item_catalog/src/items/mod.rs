//! Item definitions for the catalog.

mod dimension;
mod tags;

pub use dimension::*;
pub use tags::*;

use serde::{Deserialize, Serialize};

/// Unique identifier for items in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create an item ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single illustrated item with its tags.
///
/// The serialized shape matches the source records:
/// `{ "id", "title", "img", "description", "tags": [sphere, person, period, theme] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,

    /// Image reference (URL or path).
    pub img: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: TagSlots,
}

impl Item {
    /// Create a new item with no description and no tags.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            img: String::new(),
            description: String::new(),
            tags: TagSlots::default(),
        }
    }

    /// Set the image reference.
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set all tag slots at once.
    pub fn with_tags(mut self, tags: TagSlots) -> Self {
        self.tags = tags;
        self
    }

    /// Check if any tag slot holds the given value.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Non-empty tags in slot order with repeats removed.
    ///
    /// These are the tags offered as filter buttons when the item is inspected.
    pub fn detail_tags(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(4);
        for value in self.tags.values() {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }
}
