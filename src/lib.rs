//! attrgraph
//!
//! In-memory storage for directed graphs whose vertices and edges carry a
//! statically chosen set of attributes.
//!
//! # Architecture
//!
//! - Vertices live in an arena sized once, at construction. The arena never
//!   reallocates, so a vertex keeps its slot (and its [`VertexId`]) for the
//!   lifetime of the graph.
//! - Each vertex owns its outgoing edges in insertion order. Edges refer to
//!   their endpoints by [`VertexId`], so vertex and edge types never name
//!   each other; both are functions of a [`Schema`].
//! - Vertices and edges are lent out by shared reference only. Writes go
//!   through [`VertexMut`] and [`EdgeMut`], which reach the attributes and
//!   nothing else, so indices and endpoints stay as they were appended.
//! - Attributes are mixins ([`Name`], [`Weight`], [`Resources`], or your own
//!   [`Mixin`]) composed with [`compose!`]. Accessors such as
//!   [`HasWeight::weight`] resolve at compile time; asking for an attribute a
//!   type does not carry does not build.
//! - Associated-type registry ([`VertexOf`], [`EdgeOf`], [`WeightOf`], ...)
//!   lets generic code recover element types from a container type.
//!
//! ## Example Usage
//!
//! ```rust
//! use attrgraph::{
//!     compose, Graph, HasName, HasWeight, Layout, Name, Resources, ResourcesKind, UnitSet, Weight,
//!     WeightKind,
//! };
//!
//! compose! {
//!     #[derive(Debug, Clone)]
//!     pub struct Link {
//!         weight: Weight<u32> => WeightKind,
//!         units: Resources<UnitSet> => ResourcesKind,
//!     }
//! }
//!
//! // Room for exactly four vertices
//! let mut g: Graph<Layout<Name, Link>> = Graph::with_capacity(4);
//!
//! let v0 = g.append_vertex(Name::new("v0"));
//! let v1 = g.append_vertex(Name::new("v1"));
//! let v2 = g.append_vertex(Name::new("v2"));
//! let v3 = g.append_vertex(Name::new("v3"));
//!
//! let link = || Link::new(Weight(2), Resources(UnitSet::from_range(1..5)));
//! g.append_edge(v0, v1, link());
//! g.append_edge(v0, v2, link());
//! g.append_edge(v1, v2, link());
//! g.append_edge(v2, v3, link());
//!
//! let targets: Vec<&str> = g[v0].edges().map(|e| g[e.target()].name().as_str()).collect();
//! assert_eq!(targets, ["v1", "v2"]);
//! assert!(g[v0].edges().all(|e| *e.weight() == 2));
//! assert_eq!(g[v3].edges().count(), 0);
//! assert_eq!(g[v2].index().as_usize(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    attr, attr_mut, create_graph, AttrSet, Edge, EdgeId, EdgeMut, EdgeOf, EdgeTraits, Graph,
    GraphConfig, GraphError, GraphResult, HasName, HasResources, HasWeight, Holds, IndexOf,
    IndexTraits, Layout, Mixin, Name, NameKind, NameOf, Resources, ResourcesKind, ResourcesOf,
    Schema, Unit, UnitSet, Vertex, VertexId, VertexMut, VertexOf, VertexTraits, Weight, WeightKind,
    WeightOf,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
