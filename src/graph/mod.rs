//! Attributed graph storage
//!
//! This module implements the storage engine:
//! - A fixed-capacity vertex arena whose vertices never move
//! - Directed edges owned by their source vertex, in insertion order
//! - Attribute mixins composed into vertex and edge attribute sets
//! - A compile-time registry of associated types for generic code

pub mod attr;
pub mod config;
pub mod edge;
pub mod store;
pub mod traits;
pub mod types;
pub mod units;
pub mod vertex;

// Re-export main types
pub use attr::{
    attr, attr_mut, AttrSet, HasName, HasResources, HasWeight, Holds, Mixin, Name, NameKind,
    Resources, ResourcesKind, Weight, WeightKind,
};
pub use config::GraphConfig;
pub use edge::{Edge, EdgeMut};
pub use store::{create_graph, Graph, GraphError, GraphResult};
pub use traits::{
    EdgeOf, EdgeTraits, IndexOf, IndexTraits, Layout, NameOf, ResourcesOf, Schema, VertexOf,
    VertexTraits, WeightOf,
};
pub use types::{EdgeId, VertexId};
pub use units::{Unit, UnitSet};
pub use vertex::{Vertex, VertexMut};
