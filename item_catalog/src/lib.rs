//! # Item Catalog
//!
//! The Item Store crate - the immutable, ordered collection of tagged items
//! that the tag network is derived from. This crate holds no graph logic.
//!
//! ## Core Components
//!
//! - **items**: Items, their four named tag slots, and the grouping dimensions
//! - **store**: Loading, integrity validation, lookup, and tag enumeration
//! - **error**: Data integrity and loading errors

pub mod error;
pub mod items;
pub mod store;

pub use error::*;
pub use items::*;
pub use store::*;
