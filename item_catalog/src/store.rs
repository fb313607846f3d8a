//! The Item Store - the ordered, read-only collection every graph is derived from.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult, DataIntegrityError};
use crate::items::{Dimension, Item, ItemId};

/// Id prefix reserved for aggregate (cluster) nodes derived from the store.
pub const RESERVED_ID_PREFIX: &str = "cluster_";

/// The immutable collection of items, loaded once at startup.
///
/// Insertion order is preserved and drives the order of every derived graph.
/// Item ids are guaranteed non-empty, unique, and outside the reserved
/// cluster namespace, so item ids and cluster ids can never collide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct ItemStore {
    items: Vec<Item>,

    /// Index: item id -> position in `items`.
    index: HashMap<ItemId, usize>,
}

impl ItemStore {
    /// Build a store from items, rejecting empty or duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, DataIntegrityError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.id.as_str().trim().is_empty() {
                warn!(position, "Rejecting item store: item without id");
                return Err(DataIntegrityError::MissingId { index: position });
            }
            if item.id.as_str().starts_with(RESERVED_ID_PREFIX) {
                warn!(id = %item.id, "Rejecting item store: reserved id prefix");
                return Err(DataIntegrityError::ReservedId {
                    id: item.id.0.clone(),
                    prefix: RESERVED_ID_PREFIX,
                });
            }
            if let Some(&first) = index.get(&item.id) {
                warn!(id = %item.id, first, second = position, "Rejecting item store: duplicate id");
                return Err(DataIntegrityError::DuplicateId {
                    id: item.id.0.clone(),
                    first,
                    second: position,
                });
            }
            index.insert(item.id.clone(), position);
        }

        debug!(items = items.len(), "Built item store");
        Ok(Self { items, index })
    }

    /// Parse a JSON array of item records.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        let store = Self::new(items)?;
        info!(items = store.len(), "Loaded item store");
        Ok(store)
    }

    /// Read and parse a JSON file of item records.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.display(), "Item store read from file");
        Ok(store)
    }

    /// Get item by ID.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Check if an item with this ID exists.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// All items in store order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose tags contain `tag`, in store order.
    ///
    /// An empty tag is "no filter" and yields every item.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Item> {
        if tag.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| item.has_tag(tag)).collect()
    }

    /// Distinct non-empty values of one slot, in order of first appearance.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter_map(|item| item.tags.get(dimension))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    /// Distinct non-empty tags across all slots, in order of first appearance.
    pub fn all_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .flat_map(|item| item.tags.values())
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }
}

impl TryFrom<Vec<Item>> for ItemStore {
    type Error = DataIntegrityError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<ItemStore> for Vec<Item> {
    fn from(store: ItemStore) -> Self {
        store.items
    }
}
