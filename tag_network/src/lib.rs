//! # Tag Network
//!
//! Turns a flat collection of tagged items into a similarity graph, condenses
//! it into named clusters on demand, and resolves user interactions into new
//! graph states. Layout and drawing belong to an external renderer.
//!
//! ## Core Components
//!
//! - **graph**: Similarity graph builder - one node per item, one edge per pair sharing a tag
//! - **cluster**: Cluster composer - merges item nodes into one aggregate node per tag value
//! - **interaction**: Interaction resolver - the `(grouping, filter)` state machine
//! - **explorer**: The rebuild pipeline and the collaborator seams
//! - **config**: Presentation settings handed to the renderer
//!
//! ## Design Philosophy
//!
//! - **Derived**: Every graph is rebuilt from scratch out of the item store and the view state
//! - **Deterministic**: The same store and view state always produce the same graph
//! - **Forgiving**: Bad clicks are no-ops; only bad data at load time is an error

pub mod cluster;
pub mod config;
pub mod error;
pub mod explorer;
pub mod graph;
pub mod interaction;

pub use cluster::*;
pub use config::*;
pub use error::*;
pub use explorer::*;
pub use graph::*;
pub use interaction::*;
