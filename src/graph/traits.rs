//! Compile-time registry of associated types
//!
//! Generic code recovers "the vertex type of this graph" or "the weight type
//! of this edge" from a type alone, through the associated types below. The
//! entries are implemented next to the types they describe (`Graph`,
//! `Vertex`, `Edge`); asking for an entry that was never declared is a build
//! error.
//!
//! ```
//! use attrgraph::{EdgeOf, Graph, HasWeight, Layout, Name, VertexOf, Weight, WeightOf};
//!
//! type Roads = Graph<Layout<Name, Weight<u64>>>;
//!
//! fn heaviest(vertex: &VertexOf<Roads>) -> Option<WeightOf<EdgeOf<Roads>>> {
//!     vertex.edges().map(|e| *e.weight()).max()
//! }
//!
//! let mut g = Roads::with_capacity(2);
//! let a = g.append_vertex(Name::new("a"));
//! let b = g.append_vertex(Name::new("b"));
//! g.append_edge(a, b, Weight(3));
//! g.append_edge(a, b, Weight(8));
//! assert_eq!(heaviest(&g[a]), Some(8));
//! assert_eq!(heaviest(&g[b]), None);
//! ```

use super::attr::{HasName, HasResources, HasWeight};
use std::marker::PhantomData;

/// Type-level declaration of the attribute sets of one graph family
///
/// `Vertex<S>` and `Edge<S>` are both parameterized over the schema rather
/// than over each other, so neither has to be defined first.
pub trait Schema {
    /// Attributes carried by every vertex
    type Vertex;

    /// Attributes carried by every edge
    type Edge;
}

/// Generic schema: vertices carry `V`, edges carry `E`
pub struct Layout<V, E = ()>(PhantomData<fn() -> (V, E)>);

impl<V, E> Schema for Layout<V, E> {
    type Vertex = V;
    type Edge = E;
}

/// Graph → vertex type, edge → vertex type
pub trait VertexTraits {
    type Vertex;
}

/// Graph → edge type, vertex → edge type
pub trait EdgeTraits {
    type Edge;
}

/// Vertex → vertex index type, edge → edge index type
pub trait IndexTraits {
    type Index;
}

pub type VertexOf<T> = <T as VertexTraits>::Vertex;

pub type EdgeOf<T> = <T as EdgeTraits>::Edge;

pub type IndexOf<T> = <T as IndexTraits>::Index;

pub type NameOf<T> = <T as HasName>::Name;

pub type WeightOf<T> = <T as HasWeight>::Weight;

pub type ResourcesOf<T> = <T as HasResources>::Resources;
