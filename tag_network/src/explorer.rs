//! Explorer - runs the rebuild pipeline and talks to the collaborators.
//!
//! The pipeline is: item store filtered by the view's tag, similarity graph
//! over the survivors, then clustering when the view is grouped. It runs in
//! full on every state change; nothing is patched incrementally.

use item_catalog::{Item, ItemStore};
use tracing::debug;

use crate::cluster::{cluster_values, compose_clusters};
use crate::config::{ExplorerConfig, RenderOptions};
use crate::graph::{build_similarity_graph, GraphSnapshot};
use crate::interaction::{Action, DetailView, InteractionResolver, Transition, ViewState};

/// The rendering and detail-view collaborator.
///
/// Layout, physics, zoom, and image loading all live behind this trait; the
/// explorer only hands over complete graphs and detail changes.
pub trait Renderer {
    /// Replace whatever is on screen with `graph`.
    fn draw(&mut self, graph: &GraphSnapshot, options: &RenderOptions);

    /// Open the detail view for an item, or close it with `None`.
    fn show_detail(&mut self, detail: Option<&DetailView>);
}

/// Derive the graph for a view state.
///
/// Deterministic: equal inputs give equal snapshots, node order and cluster
/// membership included.
pub fn derive_graph(store: &ItemStore, state: &ViewState, config: &ExplorerConfig) -> GraphSnapshot {
    let items = store.filter_by_tag(state.filter_tag().unwrap_or_default());
    let graph = build_similarity_graph(&items);

    match state.group_type() {
        Some(dimension) => {
            let values = cluster_values(dimension, store, config);
            compose_clusters(graph, dimension, &values, &config.palette)
        }
        None => graph,
    }
}

/// An item network under exploration: the store, its configuration, and the
/// current interaction state.
#[derive(Debug, Clone)]
pub struct Explorer {
    store: ItemStore,
    config: ExplorerConfig,
    resolver: InteractionResolver,
}

impl Explorer {
    /// Create an explorer in the initial, ungrouped and unfiltered state.
    pub fn new(store: ItemStore, config: ExplorerConfig) -> Self {
        Self {
            store,
            config,
            resolver: InteractionResolver::new(),
        }
    }

    /// Create an explorer with default configuration.
    pub fn with_defaults(store: ItemStore) -> Self {
        Self::new(store, ExplorerConfig::default())
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        self.resolver.state()
    }

    /// The item whose detail view is open.
    pub fn selected_item(&self) -> Option<&Item> {
        self.resolver.selected().and_then(|id| self.store.get(id))
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        self.selected_item().map(DetailView::from_item)
    }

    pub fn grouping_control_visible(&self) -> bool {
        self.resolver.grouping_control_visible()
    }

    /// Apply an action to the interaction state.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        self.resolver.apply(action, &self.store)
    }

    /// Rebuild the graph for the current state from scratch.
    pub fn graph(&self) -> GraphSnapshot {
        let graph = derive_graph(&self.store, self.resolver.state(), &self.config);
        debug!(
            state = %self.resolver.state(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Rebuilt graph"
        );
        graph
    }

    /// Draw the current graph, e.g. once at startup.
    pub fn redraw<R: Renderer>(&self, renderer: &mut R) {
        renderer.draw(&self.graph(), &self.config.render);
    }

    /// Apply an action and push every resulting change to the renderer.
    ///
    /// The graph is fully rebuilt before this returns whenever the state changed.
    pub fn present<R: Renderer>(&mut self, action: Action, renderer: &mut R) -> Transition {
        let had_detail = self.resolver.selected().is_some();
        let transition = self.dispatch(action);

        match &transition {
            Transition::Rebuild => self.redraw(renderer),
            Transition::ShowDetail(_) => renderer.show_detail(self.detail_view().as_ref()),
            Transition::DetailClosed | Transition::Unchanged => {}
        }

        if had_detail && self.resolver.selected().is_none() {
            renderer.show_detail(None);
        }

        transition
    }
}
