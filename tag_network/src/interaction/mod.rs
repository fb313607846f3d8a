//! Interaction resolver - maps user actions onto the next view state.
//!
//! The view state is the sole input, together with the item store, that
//! drives re-derivation of the graph. Grouping and filtering are mutually
//! exclusive: a filtered view is never clustered.

mod detail;

pub use detail::*;

use item_catalog::{Dimension, ItemId, ItemStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cluster::{is_cluster_id, ClusterKey};
use crate::graph::NodeId;

/// The `(groupType, filterTag)` pair, with the "both set" case unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Every item, no clusters.
    #[default]
    Ungrouped,
    /// Every item, clustered by one dimension.
    Grouped(Dimension),
    /// Only items carrying the tag, never clustered.
    Filtered(String),
}

impl ViewState {
    /// Grouped by `dimension`, or ungrouped for `None`.
    pub fn grouped(dimension: Option<Dimension>) -> Self {
        match dimension {
            Some(dimension) => ViewState::Grouped(dimension),
            None => ViewState::Ungrouped,
        }
    }

    /// Filtered by `tag`. An empty tag means no filter.
    pub fn filtered(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.is_empty() {
            ViewState::Ungrouped
        } else {
            ViewState::Filtered(tag)
        }
    }

    /// The dimension the graph is clustered by, if any.
    pub fn group_type(&self) -> Option<Dimension> {
        match self {
            ViewState::Grouped(dimension) => Some(*dimension),
            ViewState::Ungrouped | ViewState::Filtered(_) => None,
        }
    }

    /// The active tag filter, if any.
    pub fn filter_tag(&self) -> Option<&str> {
        match self {
            ViewState::Filtered(tag) => Some(tag),
            ViewState::Ungrouped | ViewState::Grouped(_) => None,
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, ViewState::Filtered(_))
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::Ungrouped => write!(f, "ungrouped"),
            ViewState::Grouped(dimension) => write!(f, "grouped by {}", dimension),
            ViewState::Filtered(tag) => write!(f, "filtered by {:?}", tag),
        }
    }
}

/// A user action raised by one of the collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The dimension selector chose a grouping, or "no grouping".
    ChooseGrouping(Option<Dimension>),
    /// The renderer reported a selected node.
    SelectNode(NodeId),
    /// A tag button was clicked in the detail view.
    TagClicked(String),
    /// The detail view was dismissed.
    CloseDetail,
    /// The "show all" control was used.
    ClearFilter,
}

/// What an action requires of the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The view state was replaced; the graph must be re-derived.
    Rebuild,
    /// Nothing changed except that this item should be shown in detail.
    ShowDetail(ItemId),
    /// The open detail view was dismissed.
    DetailClosed,
    /// The action had no effect.
    Unchanged,
}

/// The state machine owning the view state and the selected item.
#[derive(Debug, Clone, Default)]
pub struct InteractionResolver {
    state: ViewState,
    selected: Option<ItemId>,
}

impl InteractionResolver {
    /// Create a resolver in the initial state: ungrouped, unfiltered, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The item whose detail view is open.
    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// The grouping control is only offered while no filter is active.
    pub fn grouping_control_visible(&self) -> bool {
        !self.state.is_filtered()
    }

    /// Apply an action. Node ids are resolved against `store`.
    pub fn apply(&mut self, action: Action, store: &ItemStore) -> Transition {
        let transition = match action {
            Action::ChooseGrouping(dimension) => {
                self.state = ViewState::grouped(dimension);
                Transition::Rebuild
            }
            Action::SelectNode(id) => self.select_node(&id, store),
            Action::TagClicked(tag) => {
                self.selected = None;
                self.state = ViewState::filtered(tag);
                Transition::Rebuild
            }
            Action::CloseDetail => match self.selected.take() {
                Some(_) => Transition::DetailClosed,
                None => Transition::Unchanged,
            },
            Action::ClearFilter => {
                self.state = ViewState::Ungrouped;
                Transition::Rebuild
            }
        };

        debug!(state = %self.state, ?transition, "Resolved interaction");
        transition
    }

    fn select_node(&mut self, id: &NodeId, store: &ItemStore) -> Transition {
        if is_cluster_id(id.as_str()) {
            return match ClusterKey::parse(id.as_str()) {
                Some(key) => {
                    self.state = ViewState::filtered(key.value);
                    Transition::Rebuild
                }
                None => {
                    warn!(node = %id, "Ignoring selection of undecodable cluster node");
                    Transition::Unchanged
                }
            };
        }

        let item_id = ItemId::new(id.as_str());
        if store.contains(&item_id) {
            self.selected = Some(item_id.clone());
            Transition::ShowDetail(item_id)
        } else {
            warn!(node = %id, "Ignoring selection of unknown node");
            Transition::Unchanged
        }
    }
}
