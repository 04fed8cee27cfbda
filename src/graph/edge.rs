//! Edge record
//!
//! An edge is a directed link with immutable endpoints and a composed set of
//! attributes. Edges live in their source vertex's edge list and are reached
//! by iteration; the list may reallocate as it grows, so nothing keeps a
//! standing reference to an edge slot.

use super::attr::{AttrSet, Holds};
use super::traits::{IndexTraits, Schema, VertexTraits};
use super::types::{EdgeId, VertexId};
use super::vertex::Vertex;
use std::fmt;
use std::ops::Deref;

/// A directed edge of a [`Graph`](crate::Graph)
///
/// Source and target are fixed at construction; there is no way to rebind
/// them. The graph only lends edges out by shared reference; attribute
/// values are changed through an [`EdgeMut`].
pub struct Edge<S: Schema> {
    /// Identity, including the source vertex
    id: EdgeId,

    /// Target vertex (edge goes TO this vertex)
    target: VertexId,

    attrs: S::Edge,
}

impl<S: Schema> Edge<S> {
    pub(crate) fn new(id: EdgeId, target: VertexId, attrs: S::Edge) -> Self {
        Edge { id, target, attrs }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source vertex (edge goes FROM this vertex)
    pub fn source(&self) -> VertexId {
        self.id.source()
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn attrs(&self) -> &S::Edge {
        &self.attrs
    }

    /// Check if this edge connects two vertices (in either direction)
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source() == a && self.target == b) || (self.source() == b && self.target == a)
    }

    pub fn starts_from(&self, vertex: VertexId) -> bool {
        self.source() == vertex
    }

    pub fn ends_at(&self, vertex: VertexId) -> bool {
        self.target == vertex
    }

    pub fn is_loop(&self) -> bool {
        self.source() == self.target
    }
}

impl<S: Schema, K> Holds<K> for Edge<S>
where
    S::Edge: Holds<K>,
{
    type Mixin = <S::Edge as Holds<K>>::Mixin;

    fn mixin(&self) -> &Self::Mixin {
        <S::Edge as Holds<K>>::mixin(&self.attrs)
    }

    fn mixin_mut(&mut self) -> &mut Self::Mixin {
        <S::Edge as Holds<K>>::mixin_mut(&mut self.attrs)
    }
}

impl<S: Schema> VertexTraits for Edge<S> {
    type Vertex = Vertex<S>;
}

impl<S: Schema> IndexTraits for Edge<S> {
    type Index = EdgeId;
}

// Identity, not structure: two edges with equal endpoints and attributes are
// still different edges.
impl<S: Schema> PartialEq for Edge<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: Schema> Eq for Edge<S> {}

impl<S: Schema> std::hash::Hash for Edge<S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S: Schema> fmt::Debug for Edge<S>
where
    S::Edge: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.id)
            .field("source", &self.source())
            .field("target", &self.target)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<S: Schema> fmt::Display for Edge<S>
where
    S::Edge: AttrSet,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("edge(")?;
        self.attrs.write_attrs(f)?;
        f.write_str(")")
    }
}

/// Write access to the attributes of one edge
///
/// Reads go through [`Deref`] to the [`Edge`]. There is no `DerefMut`, so the
/// id and the endpoints cannot be overwritten:
///
/// ```compile_fail
/// use attrgraph::{Graph, Layout, Weight};
///
/// let mut g: Graph<Layout<(), Weight<u32>>> = Graph::with_capacity(2);
/// let a = g.append_vertex(());
/// let b = g.append_vertex(());
/// let ab = g.append_edge(a, b, Weight(1));
/// let ba = g.append_edge(b, a, Weight(2));
///
/// let mut views: Vec<_> = g.vertices_mut().collect();
/// let (left, right) = views.split_at_mut(1);
/// let mut first = left[0].edge_mut(ab.slot()).unwrap();
/// let mut second = right[0].edge_mut(ba.slot()).unwrap();
/// std::mem::swap(&mut *first, &mut *second);
/// ```
pub struct EdgeMut<'a, S: Schema> {
    edge: &'a mut Edge<S>,
}

impl<'a, S: Schema> EdgeMut<'a, S> {
    pub(crate) fn new(edge: &'a mut Edge<S>) -> Self {
        EdgeMut { edge }
    }

    pub fn attrs_mut(&mut self) -> &mut S::Edge {
        &mut self.edge.attrs
    }

    /// Give up the view, keeping the attribute borrow
    pub fn into_attrs_mut(self) -> &'a mut S::Edge {
        let edge = self.edge;
        &mut edge.attrs
    }
}

impl<S: Schema> Deref for EdgeMut<'_, S> {
    type Target = Edge<S>;

    fn deref(&self) -> &Edge<S> {
        &*self.edge
    }
}

impl<S: Schema, K> Holds<K> for EdgeMut<'_, S>
where
    S::Edge: Holds<K>,
{
    type Mixin = <S::Edge as Holds<K>>::Mixin;

    fn mixin(&self) -> &Self::Mixin {
        <S::Edge as Holds<K>>::mixin(&self.edge.attrs)
    }

    fn mixin_mut(&mut self) -> &mut Self::Mixin {
        <S::Edge as Holds<K>>::mixin_mut(&mut self.edge.attrs)
    }
}

impl<S: Schema> fmt::Debug for EdgeMut<'_, S>
where
    S::Edge: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.edge, f)
    }
}
