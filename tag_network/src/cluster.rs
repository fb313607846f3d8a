//! Cluster composer - condenses item nodes into one node per tag value.
//!
//! Clustering is a node merge applied after edges are computed: each absorbed
//! node's edges are re-routed to its cluster, edges falling inside a cluster
//! disappear, and parallel edges collapse into one.

use item_catalog::{Dimension, ItemId, ItemStore, RESERVED_ID_PREFIX};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::config::{ExplorerConfig, Palette};
use crate::graph::{Edge, GraphSnapshot, Node, NodeId};

/// Prefix shared by every cluster node id.
pub const CLUSTER_PREFIX: &str = RESERVED_ID_PREFIX;

/// The `(dimension, value)` pair a cluster node stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterKey {
    pub dimension: Dimension,
    pub value: String,
}

impl ClusterKey {
    pub fn new(dimension: Dimension, value: impl Into<String>) -> Self {
        Self {
            dimension,
            value: value.into(),
        }
    }

    /// Encode as `cluster_<Dimension>_<value>`.
    pub fn node_id(&self) -> NodeId {
        NodeId(format!("{}{}_{}", CLUSTER_PREFIX, self.dimension, self.value))
    }

    /// Decode a cluster node id.
    ///
    /// The value is everything after the dimension segment, so values may
    /// contain underscores. Returns `None` for non-cluster ids, unknown
    /// dimensions, and empty values.
    pub fn parse(id: &str) -> Option<Self> {
        let rest = id.strip_prefix(CLUSTER_PREFIX)?;
        let (dimension, value) = rest.split_once('_')?;
        let dimension = Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == dimension)?;

        if value.is_empty() {
            return None;
        }
        Some(Self::new(dimension, value))
    }
}

impl std::fmt::Display for ClusterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node_id())
    }
}

/// Check if a node id lies in the cluster namespace, decodable or not.
pub fn is_cluster_id(id: &str) -> bool {
    id.starts_with(CLUSTER_PREFIX)
}

/// Visual attributes of a cluster node. No effect on topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterStyle {
    pub background: String,
    pub border: String,
    pub font_color: String,
}

/// An aggregate node replacing every item node it absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterNode {
    pub id: NodeId,
    pub key: ClusterKey,
    /// The tag value.
    pub label: String,
    /// Absorbed items, in graph order.
    pub members: Vec<ItemId>,
    pub style: ClusterStyle,
}

impl ClusterNode {
    pub fn contains(&self, id: &ItemId) -> bool {
        self.members.contains(id)
    }
}

/// The ordered values to cluster by for a dimension.
///
/// Sphere uses the fixed configured list; the other dimensions use the
/// distinct values of their slot across the whole, unfiltered store.
pub fn cluster_values(
    dimension: Dimension,
    store: &ItemStore,
    config: &ExplorerConfig,
) -> Vec<String> {
    match dimension {
        Dimension::Sphere => config.sphere_values.clone(),
        Dimension::Person | Dimension::Period | Dimension::Theme => {
            store.distinct_values(dimension)
        }
    }
}

/// Merge item nodes of `graph` into one cluster node per value.
///
/// Values are processed in order; a node whose tags contain the value (in any
/// slot) joins that value's cluster unless an earlier value already claimed
/// it. A value that claims no node produces no cluster. Unclaimed item nodes
/// and any existing cluster nodes pass through unchanged.
///
/// Output order: surviving nodes in input order, then new clusters in value order.
pub fn compose_clusters(
    graph: GraphSnapshot,
    dimension: Dimension,
    values: &[String],
    palette: &Palette,
) -> GraphSnapshot {
    let GraphSnapshot { nodes, edges } = graph;

    // Absorbed node -> cluster node
    let mut owner: HashMap<NodeId, NodeId> = HashMap::new();
    let mut clusters = Vec::new();

    for value in values.iter().filter(|v| !v.is_empty()) {
        let members: Vec<ItemId> = nodes
            .iter()
            .filter_map(Node::as_item)
            .filter(|node| !owner.contains_key(&node.id) && node.tags.contains(value))
            .map(|node| node.item_id.clone())
            .collect();

        if members.is_empty() {
            continue;
        }

        let key = ClusterKey::new(dimension, value.as_str());
        let id = key.node_id();
        for member in &members {
            owner.insert(NodeId::from(member), id.clone());
        }

        clusters.push(ClusterNode {
            id,
            label: value.clone(),
            key,
            members,
            style: palette.style(dimension),
        });
    }

    let reroute = |id: NodeId| owner.get(&id).cloned().unwrap_or(id);

    let mut seen = HashSet::new();
    let mut merged_edges = Vec::with_capacity(edges.len());
    for edge in edges {
        let edge = Edge::new(reroute(edge.from), reroute(edge.to));
        if edge.is_self_loop() {
            continue;
        }
        let (a, b) = edge.key();
        if seen.insert((a.clone(), b.clone())) {
            merged_edges.push(edge);
        }
    }

    let merged_nodes: Vec<Node> = nodes
        .into_iter()
        .filter(|node| !owner.contains_key(node.id()))
        .chain(clusters.into_iter().map(Node::Cluster))
        .collect();

    debug!(
        dimension = %dimension,
        clusters = merged_nodes.iter().filter(|n| n.is_cluster()).count(),
        absorbed = owner.len(),
        edges = merged_edges.len(),
        "Composed clusters"
    );

    GraphSnapshot {
        nodes: merged_nodes,
        edges: merged_edges,
    }
}
