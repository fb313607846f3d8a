//! Similarity graph builder - links every pair of items sharing a tag.

use item_catalog::Item;
use tracing::debug;

use super::{Edge, GraphSnapshot, ItemNode, Node, NodeId};

/// Build the similarity graph over `items`.
///
/// One node per item, in input order. For every pair `(i, j)` with `i < j`
/// an edge `i -> j` is added iff the two tag collections share at least one
/// non-empty value, in any slots. Edges carry no weight; there are no
/// self-loops and no parallel edges.
///
/// Quadratic in the number of items, which is fine for collections of tens
/// to low hundreds.
pub fn build_similarity_graph(items: &[&Item]) -> GraphSnapshot {
    let nodes: Vec<Node> = items
        .iter()
        .map(|item| Node::Item(ItemNode::from_item(item)))
        .collect();

    let mut edges = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let (a, b) = (items[i], items[j]);
            if a.tags.shares_any(&b.tags) {
                edges.push(Edge::new(NodeId::from(&a.id), NodeId::from(&b.id)));
            }
        }
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "Built similarity graph");
    GraphSnapshot { nodes, edges }
}
