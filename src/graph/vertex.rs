//! Vertex record
//!
//! A vertex owns its outgoing edges in an append-only list. The list is free
//! to reallocate as it grows; the vertex itself never moves once placed in
//! the graph's arena.

use super::attr::{AttrSet, Holds};
use super::edge::{Edge, EdgeMut};
use super::traits::{EdgeTraits, IndexTraits, Schema};
use super::types::{EdgeId, VertexId};
use std::fmt;
use std::ops::Deref;
use std::slice;

/// A vertex of a [`Graph`](crate::Graph)
///
/// Vertices have:
/// - An immutable index equal to their insertion order
/// - A composed set of attributes (`S::Vertex`)
/// - Outgoing edges, in the order they were appended
///
/// The graph only lends vertices out by shared reference; attributes are
/// changed through a [`VertexMut`].
pub struct Vertex<S: Schema> {
    id: VertexId,

    attrs: S::Vertex,

    edges: Vec<Edge<S>>,
}

impl<S: Schema> Vertex<S> {
    pub(crate) fn new(id: VertexId, attrs: S::Vertex, edge_capacity_hint: usize) -> Self {
        Vertex {
            id,
            attrs,
            edges: Vec::with_capacity(edge_capacity_hint),
        }
    }

    /// Position in the graph, equal to insertion order
    pub fn index(&self) -> VertexId {
        self.id
    }

    pub fn attrs(&self) -> &S::Vertex {
        &self.attrs
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> slice::Iter<'_, Edge<S>> {
        self.edges.iter()
    }

    /// Edge at `slot` of this vertex's edge list
    pub fn edge(&self, slot: usize) -> Option<&Edge<S>> {
        self.edges.get(slot)
    }

    /// First edge leading to `target`, if any
    pub fn edge_to(&self, target: VertexId) -> Option<&Edge<S>> {
        self.edges.iter().find(|e| e.target() == target)
    }

    /// Targets of the outgoing edges, in edge order (with repeats)
    pub fn successors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().map(Edge::target)
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Construct an edge in place at the end of the edge list
    ///
    /// The caller guarantees `target` is a vertex of the same graph.
    pub(crate) fn push_edge(&mut self, target: VertexId, attrs: S::Edge) -> EdgeId {
        let id = EdgeId::new(self.id, self.edges.len());
        self.edges.push(Edge::new(id, target, attrs));
        id
    }
}

impl<S: Schema, K> Holds<K> for Vertex<S>
where
    S::Vertex: Holds<K>,
{
    type Mixin = <S::Vertex as Holds<K>>::Mixin;

    fn mixin(&self) -> &Self::Mixin {
        <S::Vertex as Holds<K>>::mixin(&self.attrs)
    }

    fn mixin_mut(&mut self) -> &mut Self::Mixin {
        <S::Vertex as Holds<K>>::mixin_mut(&mut self.attrs)
    }
}

impl<S: Schema> EdgeTraits for Vertex<S> {
    type Edge = Edge<S>;
}

impl<S: Schema> IndexTraits for Vertex<S> {
    type Index = VertexId;
}

impl<'a, S: Schema> IntoIterator for &'a Vertex<S> {
    type Item = &'a Edge<S>;
    type IntoIter = slice::Iter<'a, Edge<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

// Vertices are the same only when they occupy the same arena slot.
impl<S: Schema> PartialEq for Vertex<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: Schema> Eq for Vertex<S> {}

impl<S: Schema> std::hash::Hash for Vertex<S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S: Schema> fmt::Debug for Vertex<S>
where
    S::Vertex: fmt::Debug,
    S::Edge: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id)
            .field("attrs", &self.attrs)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<S: Schema> fmt::Display for Vertex<S>
where
    S::Vertex: AttrSet,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex(index = {}", self.id.as_usize())?;
        if !<S::Vertex as AttrSet>::LABELS.is_empty() {
            f.write_str(", ")?;
            self.attrs.write_attrs(f)?;
        }
        f.write_str(")")
    }
}

/// Write access to the attributes of one vertex and of its outgoing edges
///
/// Reads go through [`Deref`] to the [`Vertex`]. There is no `DerefMut`, so
/// neither the index nor the edge list can be overwritten:
///
/// ```compile_fail
/// use attrgraph::{Graph, Layout, Name};
///
/// let mut g: Graph<Layout<Name>> = Graph::with_capacity(2);
/// g.append_vertex(Name::new("a"));
/// g.append_vertex(Name::new("b"));
///
/// let mut views: Vec<_> = g.vertices_mut().collect();
/// let (left, right) = views.split_at_mut(1);
/// std::mem::swap(&mut *left[0], &mut *right[0]);
/// ```
///
/// Indexing a graph is read-only for the same reason:
///
/// ```compile_fail
/// use attrgraph::{Graph, Layout, Name};
///
/// let mut g: Graph<Layout<Name>> = Graph::with_capacity(2);
/// let a = g.append_vertex(Name::new("a"));
/// let first: &mut attrgraph::Vertex<Layout<Name>> = &mut g[a];
/// ```
pub struct VertexMut<'a, S: Schema> {
    vertex: &'a mut Vertex<S>,
}

impl<'a, S: Schema> VertexMut<'a, S> {
    pub(crate) fn new(vertex: &'a mut Vertex<S>) -> Self {
        VertexMut { vertex }
    }

    pub fn attrs_mut(&mut self) -> &mut S::Vertex {
        &mut self.vertex.attrs
    }

    /// Outgoing edges in insertion order, with write access to their
    /// attributes
    pub fn edges_mut(&mut self) -> impl Iterator<Item = EdgeMut<'_, S>> + '_ {
        self.vertex.edges.iter_mut().map(EdgeMut::new)
    }

    pub fn edge_mut(&mut self, slot: usize) -> Option<EdgeMut<'_, S>> {
        self.vertex.edges.get_mut(slot).map(EdgeMut::new)
    }

    /// Give up the view, keeping a borrow of the edge at `slot`
    pub fn into_edge_mut(self, slot: usize) -> Option<EdgeMut<'a, S>> {
        let vertex = self.vertex;
        vertex.edges.get_mut(slot).map(EdgeMut::new)
    }
}

impl<S: Schema> Deref for VertexMut<'_, S> {
    type Target = Vertex<S>;

    fn deref(&self) -> &Vertex<S> {
        &*self.vertex
    }
}

impl<S: Schema, K> Holds<K> for VertexMut<'_, S>
where
    S::Vertex: Holds<K>,
{
    type Mixin = <S::Vertex as Holds<K>>::Mixin;

    fn mixin(&self) -> &Self::Mixin {
        <S::Vertex as Holds<K>>::mixin(&self.vertex.attrs)
    }

    fn mixin_mut(&mut self) -> &mut Self::Mixin {
        <S::Vertex as Holds<K>>::mixin_mut(&mut self.vertex.attrs)
    }
}

impl<S: Schema> fmt::Debug for VertexMut<'_, S>
where
    S::Vertex: fmt::Debug,
    S::Edge: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.vertex, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{HasName, HasWeight, Layout, Name, Weight};

    type S = Layout<Name, Weight<u32>>;

    fn vertex(index: usize, name: &str) -> Vertex<S> {
        Vertex::new(VertexId::new(index), Name::new(name), 0)
    }

    #[test]
    fn test_create_vertex() {
        let v = vertex(3, "v3");

        assert_eq!(v.index(), VertexId::new(3));
        assert_eq!(v.name(), "v3");
        assert_eq!(v.out_degree(), 0);
        assert!(!v.has_edges());
        assert_eq!(v.edges().count(), 0);
    }

    #[test]
    fn test_push_edges_in_order() {
        let mut v = vertex(0, "v0");

        let first = v.push_edge(VertexId::new(1), Weight(2));
        let second = v.push_edge(VertexId::new(2), Weight(3));

        assert_eq!(first, EdgeId::new(VertexId::new(0), 0));
        assert_eq!(second, EdgeId::new(VertexId::new(0), 1));

        let targets: Vec<_> = v.successors().collect();
        assert_eq!(targets, vec![VertexId::new(1), VertexId::new(2)]);

        let weights: Vec<u32> = v.edges().map(|e| *e.weight()).collect();
        assert_eq!(weights, vec![2, 3]);

        // Every edge starts from its owner
        assert!(v.edges().all(|e| e.source() == v.index()));
    }

    #[test]
    fn test_edges_are_restartable() {
        let mut v = vertex(0, "v0");
        v.push_edge(VertexId::new(1), Weight(1));
        v.push_edge(VertexId::new(1), Weight(1));

        assert_eq!(v.edges().count(), 2);
        assert_eq!(v.edges().count(), 2);
        assert_eq!((&v).into_iter().count(), 2);
    }

    #[test]
    fn test_edge_lookup() {
        let mut v = vertex(0, "v0");
        v.push_edge(VertexId::new(4), Weight(7));
        v.push_edge(VertexId::new(5), Weight(8));
        v.push_edge(VertexId::new(5), Weight(9));

        assert_eq!(v.edge(1).map(|e| *e.weight()), Some(8));
        assert!(v.edge(3).is_none());
        assert_eq!(v.edge_to(VertexId::new(5)).map(|e| *e.weight()), Some(8));
        assert!(v.edge_to(VertexId::new(6)).is_none());
    }

    #[test]
    fn test_mutate_attributes() {
        let mut owned = vertex(0, "v0");
        owned.push_edge(VertexId::new(1), Weight(1));

        let mut v = VertexMut::new(&mut owned);
        v.set_name("start".to_string());
        for mut e in v.edges_mut() {
            *e.weight_mut() *= 10;
        }
        if let Some(mut e) = v.edge_mut(0) {
            *e.weight_mut() += 1;
        }
        assert!(v.edge_mut(1).is_none());

        assert_eq!(owned.name(), "start");
        assert_eq!(owned.edge(0).map(|e| *e.weight()), Some(11));
        assert_eq!(owned.index(), VertexId::new(0));
        assert_eq!(owned.edge(0).map(|e| e.source()), Some(VertexId::new(0)));
    }

    #[test]
    fn test_vertex_view_reads_through() {
        let mut owned = vertex(5, "v5");
        owned.push_edge(VertexId::new(6), Weight(4));

        let mut view = VertexMut::new(&mut owned);
        assert_eq!(view.index(), VertexId::new(5));
        assert_eq!(view.out_degree(), 1);
        assert_eq!(view.name(), "v5");
        view.attrs_mut().0.push('!');

        let mut edge = view.into_edge_mut(0).unwrap();
        *edge.weight_mut() = 40;

        assert_eq!(owned.name(), "v5!");
        assert_eq!(owned.edge(0).map(|e| *e.weight()), Some(40));
    }

    #[test]
    fn test_vertex_equality() {
        let a = vertex(7, "same");
        let b = vertex(7, "other");
        let c = vertex(8, "same");

        assert_eq!(a, b); // Same slot
        assert_ne!(a, c); // Same name, different slot
    }

    #[test]
    fn test_display() {
        assert_eq!(vertex(0, "v0").to_string(), "vertex(index = 0, name = v0)");

        let bare: Vertex<Layout<()>> = Vertex::new(VertexId::new(2), (), 0);
        assert_eq!(bare.to_string(), "vertex(index = 2)");
    }
}
