//! Detail view model for an inspected item.

use item_catalog::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// Everything the detail collaborator displays for a selected item.
///
/// Each entry of `tags` becomes a button raising [`Action::TagClicked`](super::Action::TagClicked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    pub item_id: ItemId,
    pub title: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl DetailView {
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_id: item.id.clone(),
            title: item.title.clone(),
            image: item.img.clone(),
            description: item.description.clone(),
            tags: item.detail_tags().into_iter().map(str::to_string).collect(),
        }
    }
}
