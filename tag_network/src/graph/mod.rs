//! Graph snapshot types and the similarity graph builder.
//!
//! A snapshot is a complete node and edge set handed to the renderer. It has
//! no identity across rebuilds beyond its derived node ids.

mod builder;

pub use builder::*;

use item_catalog::{Item, ItemId, TagSlots};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cluster::ClusterNode;

/// Identifier of a node within one snapshot: an item id or a cluster id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ItemId> for NodeId {
    fn from(id: &ItemId) -> Self {
        Self(id.0.clone())
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// One visible item.
    Item(ItemNode),
    /// An aggregate standing in for every item sharing one tag value.
    Cluster(ClusterNode),
}

impl Node {
    pub fn id(&self) -> &NodeId {
        match self {
            Node::Item(node) => &node.id,
            Node::Cluster(node) => &node.id,
        }
    }

    /// Display label: the item title or the cluster's tag value.
    pub fn label(&self) -> &str {
        match self {
            Node::Item(node) => &node.label,
            Node::Cluster(node) => &node.label,
        }
    }

    pub fn is_cluster(&self) -> bool {
        matches!(self, Node::Cluster(_))
    }

    pub fn as_item(&self) -> Option<&ItemNode> {
        match self {
            Node::Item(node) => Some(node),
            Node::Cluster(_) => None,
        }
    }

    pub fn as_cluster(&self) -> Option<&ClusterNode> {
        match self {
            Node::Cluster(node) => Some(node),
            Node::Item(_) => None,
        }
    }
}

/// A node backed by a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemNode {
    pub id: NodeId,
    pub item_id: ItemId,
    pub label: String,
    /// Image reference drawn as the node.
    pub image: String,
    pub tags: TagSlots,
}

impl ItemNode {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: NodeId::from(&item.id),
            item_id: item.id.clone(),
            label: item.title.clone(),
            image: item.img.clone(),
            tags: item.tags.clone(),
        }
    }
}

/// An undirected connection between two nodes.
///
/// `from`/`to` record the order the edge was discovered in; equality of
/// connections is decided by [`Edge::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// Orientation-independent identity of this edge.
    pub fn key(&self) -> (&NodeId, &NodeId) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }

    /// Check if this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from.as_str() == a && self.to.as_str() == b)
            || (self.from.as_str() == b && self.to.as_str() == a)
    }

    /// Check if `id` is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.from.as_str() == id || self.to.as_str() == id
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// A complete, internally consistent node and edge set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get node by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id().as_str() == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Check if an edge joins `a` and `b`, in either direction.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Number of edges touching a node.
    pub fn degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    pub fn item_nodes(&self) -> impl Iterator<Item = &ItemNode> {
        self.nodes.iter().filter_map(Node::as_item)
    }

    pub fn cluster_nodes(&self) -> impl Iterator<Item = &ClusterNode> {
        self.nodes.iter().filter_map(Node::as_cluster)
    }

    /// Node ids in snapshot order.
    pub fn node_ids(&self) -> Vec<&NodeId> {
        self.nodes.iter().map(Node::id).collect()
    }

    /// Edge identities as a set, for order-insensitive comparison.
    pub fn edge_keys(&self) -> HashSet<(&NodeId, &NodeId)> {
        self.edges.iter().map(Edge::key).collect()
    }

    /// Serialize for a renderer that consumes JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
