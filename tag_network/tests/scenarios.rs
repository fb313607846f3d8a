//! End-to-end behavior of the tag network: scenarios and graph properties.

use std::collections::HashSet;

use item_catalog::{Dimension, Item, ItemId, ItemStore, TagSlots};
use tag_network::{
    derive_graph, Action, Explorer, ExplorerConfig, GraphSnapshot, NodeId, Transition, ViewState,
};

// ============================================================================
// Fixtures
// ============================================================================

fn item(id: &str, tags: TagSlots) -> Item {
    Item::new(id, format!("Item {id}"))
        .with_img(format!("/img/{id}.jpg"))
        .with_tags(tags)
}

/// A, B share War; C is Culture.
fn three_item_store() -> ItemStore {
    ItemStore::new(vec![
        item("A", TagSlots::new("War", "", "", "")),
        item("B", TagSlots::new("War", "", "", "")),
        item("C", TagSlots::new("Culture", "", "", "")),
    ])
    .unwrap()
}

/// A richer collection exercising every slot, overlaps, and an untagged item.
fn gallery_store() -> ItemStore {
    ItemStore::new(vec![
        item("1", TagSlots::new("War", "Kitchener", "1914", "Recruitment")),
        item("2", TagSlots::new("War", "", "1915", "Trenches")),
        item("3", TagSlots::new("Everyday-life", "", "1915", "Hunger")),
        item("4", TagSlots::new("Culture", "Chaplin", "1916", "Cinema")),
        item("5", TagSlots::new("Culture", "Chaplin", "", "Recruitment")),
        item("6", TagSlots::new("Everyday-life", "Kitchener", "1914", "")),
        item("blank", TagSlots::default()),
    ])
    .unwrap()
}

fn ids(graph: &GraphSnapshot) -> Vec<&str> {
    graph.node_ids().into_iter().map(NodeId::as_str).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_plain_build() {
    let graph = derive_graph(&three_item_store(), &ViewState::Ungrouped, &ExplorerConfig::default());

    assert_eq!(ids(&graph), vec!["A", "B", "C"]);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge("A", "B"));
    assert_eq!(graph.degree("C"), 0);
}

#[test]
fn scenario_group_by_sphere() {
    let graph = derive_graph(
        &three_item_store(),
        &ViewState::Grouped(Dimension::Sphere),
        &ExplorerConfig::default(),
    );

    assert_eq!(ids(&graph), vec!["cluster_Sphere_War", "cluster_Sphere_Culture"]);
    assert_eq!(graph.item_nodes().count(), 0);
    assert_eq!(graph.edge_count(), 0);

    let culture = graph.node("cluster_Sphere_Culture").unwrap().as_cluster().unwrap();
    assert_eq!(culture.members, vec![ItemId::from("C")]);
}

#[test]
fn scenario_click_cluster_then_rebuild() {
    let mut explorer = Explorer::with_defaults(three_item_store());
    explorer.dispatch(Action::ChooseGrouping(Some(Dimension::Sphere)));

    let t = explorer.dispatch(Action::SelectNode(NodeId::from("cluster_Sphere_War")));
    assert_eq!(t, Transition::Rebuild);
    assert_eq!(explorer.state(), &ViewState::Filtered("War".to_string()));

    let graph = explorer.graph();
    assert_eq!(ids(&graph), vec!["A", "B"]);
    assert!(graph.has_edge("A", "B"));
    assert_eq!(graph.cluster_nodes().count(), 0);
}

#[test]
fn scenario_filter_to_lonely_tag() {
    let graph = derive_graph(
        &three_item_store(),
        &ViewState::filtered("Culture"),
        &ExplorerConfig::default(),
    );

    assert_eq!(ids(&graph), vec!["C"]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn scenario_untagged_item_never_clusters() {
    let store = gallery_store();
    let config = ExplorerConfig::default();

    let plain = derive_graph(&store, &ViewState::Ungrouped, &config);
    assert!(plain.contains_node("blank"));
    assert_eq!(plain.degree("blank"), 0);

    for dimension in Dimension::ALL {
        let grouped = derive_graph(&store, &ViewState::Grouped(dimension), &config);
        assert!(grouped.contains_node("blank"), "blank absorbed under {dimension}");
        assert!(grouped.cluster_nodes().all(|c| !c.contains(&ItemId::from("blank"))));
    }
}

#[test]
fn scenario_filter_with_no_matches_is_empty() {
    let graph = derive_graph(
        &three_item_store(),
        &ViewState::filtered("Nonexistent"),
        &ExplorerConfig::default(),
    );

    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn property_no_self_loops() {
    let store = gallery_store();
    let config = ExplorerConfig::default();

    let mut states = vec![ViewState::Ungrouped];
    states.extend(Dimension::ALL.into_iter().map(ViewState::Grouped));
    states.extend(store.all_tags().into_iter().map(ViewState::Filtered));

    for state in &states {
        let graph = derive_graph(&store, state, &config);
        assert!(graph.edges.iter().all(|e| !e.is_self_loop()), "self loop in {state}");
    }
}

#[test]
fn property_unique_edges_and_node_ids() {
    let store = gallery_store();
    let config = ExplorerConfig::default();

    for state in Dimension::ALL.into_iter().map(ViewState::Grouped).chain([ViewState::Ungrouped]) {
        let graph = derive_graph(&store, &state, &config);

        assert_eq!(graph.edge_keys().len(), graph.edge_count(), "parallel edge in {state}");
        let unique: HashSet<_> = graph.node_ids().into_iter().collect();
        assert_eq!(unique.len(), graph.node_count(), "duplicate node id in {state}");
    }
}

#[test]
fn property_rebuild_is_deterministic() {
    let config = ExplorerConfig::default();

    for state in [
        ViewState::Ungrouped,
        ViewState::Grouped(Dimension::Person),
        ViewState::Grouped(Dimension::Theme),
        ViewState::filtered("1915"),
    ] {
        let first = derive_graph(&gallery_store(), &state, &config);
        let second = derive_graph(&gallery_store(), &state, &config);

        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}

#[test]
fn property_filter_is_induced_subgraph() {
    let store = gallery_store();
    let config = ExplorerConfig::default();
    let full = derive_graph(&store, &ViewState::Ungrouped, &config);

    for tag in store.all_tags() {
        let filtered = derive_graph(&store, &ViewState::filtered(tag.as_str()), &config);

        let expected: Vec<&str> = store
            .iter()
            .filter(|i| i.has_tag(&tag))
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids(&filtered), expected, "nodes for {tag}");

        let kept: HashSet<&str> = expected.iter().copied().collect();
        let induced: HashSet<_> = full
            .edges
            .iter()
            .filter(|e| kept.contains(e.from.as_str()) && kept.contains(e.to.as_str()))
            .map(|e| e.key())
            .collect();
        assert_eq!(filtered.edge_keys(), induced, "edges for {tag}");
    }
}

#[test]
fn property_clustering_covers_each_match_exactly_once() {
    let store = gallery_store();
    let config = ExplorerConfig::default();

    for dimension in Dimension::ALL {
        let values = tag_network::cluster_values(dimension, &store, &config);
        let graph = derive_graph(&store, &ViewState::Grouped(dimension), &config);

        for stored in store.iter() {
            let claims: Vec<_> = graph
                .cluster_nodes()
                .filter(|c| c.contains(&stored.id))
                .collect();
            let first_match = values.iter().find(|v| stored.has_tag(v));

            match first_match {
                Some(value) => {
                    assert_eq!(claims.len(), 1, "{} under {dimension}", stored.id);
                    assert_eq!(&claims[0].key.value, value, "{} under {dimension}", stored.id);
                    assert!(!graph.contains_node(stored.id.as_str()));
                }
                None => {
                    assert!(claims.is_empty());
                    assert!(graph.contains_node(stored.id.as_str()));
                }
            }
        }
    }
}

#[test]
fn property_filter_suppresses_clustering() {
    let store = gallery_store();
    let mut explorer = Explorer::with_defaults(store);

    explorer.dispatch(Action::ChooseGrouping(Some(Dimension::Period)));
    assert!(explorer.graph().cluster_nodes().count() > 0);

    // Open an item that survived clustering, then filter by one of its tags.
    explorer.dispatch(Action::SelectNode(NodeId::from("5")));
    explorer.dispatch(Action::TagClicked("Chaplin".into()));

    let graph = explorer.graph();
    assert_eq!(graph.cluster_nodes().count(), 0);
    assert_eq!(ids(&graph), vec!["4", "5"]);
    assert!(explorer.selected_item().is_none());
}

#[test]
fn person_grouping_uses_data_values() {
    let graph = derive_graph(
        &gallery_store(),
        &ViewState::Grouped(Dimension::Person),
        &ExplorerConfig::default(),
    );

    let clusters: Vec<&str> = graph.cluster_nodes().map(|c| c.label.as_str()).collect();
    assert_eq!(clusters, vec!["Kitchener", "Chaplin"]);
    assert!(graph.has_edge("cluster_Person_Kitchener", "cluster_Person_Chaplin"));
}

#[test]
fn configured_sphere_values_replace_defaults() {
    let store = ItemStore::new(vec![
        item("1", TagSlots::new("Война", "", "", "")),
        item("2", TagSlots::new("Быт", "", "", "")),
    ])
    .unwrap();
    let config = ExplorerConfig::from_toml_str(r#"sphere_values = ["Война", "Быт", "Культура"]"#).unwrap();

    let graph = derive_graph(&store, &ViewState::Grouped(Dimension::Sphere), &config);

    assert_eq!(ids(&graph), vec!["cluster_Sphere_Война", "cluster_Sphere_Быт"]);
}

#[test]
fn loads_source_records_end_to_end() {
    let json = r#"[
        {"id": "101", "title": "Poster", "img": "/img/101.jpg", "description": "d", "tags": ["War", "Kitchener", "", ""]},
        {"id": "102", "title": "Queue", "img": "/img/102.jpg", "description": "d", "tags": ["Everyday-life", "", "", "Hunger"]},
        {"id": "103", "title": "Menu", "img": "/img/103.jpg", "description": "d", "tags": ["Everyday-life", "", "", "Hunger"]}
    ]"#;
    let mut explorer = Explorer::with_defaults(ItemStore::from_json_str(json).unwrap());

    explorer.dispatch(Action::ChooseGrouping(Some(Dimension::Theme)));
    let graph = explorer.graph();
    assert_eq!(ids(&graph), vec!["101", "cluster_Theme_Hunger"]);

    explorer.dispatch(Action::ClearFilter);
    assert_eq!(explorer.state(), &ViewState::Ungrouped);
    assert!(explorer.grouping_control_visible());
    assert_eq!(explorer.graph().edge_count(), 1);
}
