//! Fixed-capacity vertex arena
//!
//! The graph reserves room for all of its vertices up front and never
//! reallocates the arena afterwards, so a vertex stays in the slot it was
//! appended to for the lifetime of the graph. Edges refer to vertices by that
//! slot.

use super::config::GraphConfig;
use super::edge::{Edge, EdgeMut};
use super::traits::{EdgeTraits, Schema, VertexTraits};
use super::types::{EdgeId, VertexId};
use super::vertex::{Vertex, VertexMut};
use std::fmt;
use std::ops::Index;
use std::slice;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors that can occur during graph construction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex arena is full: capacity {capacity} reached")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid edge: source vertex {0} does not exist")]
    InvalidEdgeSource(VertexId),

    #[error("Invalid edge: target vertex {0} does not exist")]
    InvalidEdgeTarget(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Create a graph with room for exactly `capacity` vertices
pub fn create_graph<S: Schema>(capacity: usize) -> Graph<S> {
    Graph::with_capacity(capacity)
}

/// Directed graph over a fixed-capacity vertex arena
///
/// The number of vertices must be known before construction. Appending past
/// the capacity is a caller bug: [`Graph::append_vertex`] panics and
/// [`Graph::try_append_vertex`] reports [`GraphError::CapacityExceeded`].
/// The arena is never grown or truncated.
///
/// `Graph` is deliberately not `Clone`.
pub struct Graph<S: Schema> {
    /// Vertex arena, allocated once for `capacity` vertices
    vertices: Vec<Vertex<S>>,

    /// Declared capacity (the allocation may be larger)
    capacity: usize,

    /// Edges reserved per new vertex
    edge_capacity_hint: usize,

    /// Total number of edges across all vertices
    edge_count: usize,
}

impl<S: Schema> Graph<S> {
    /// Create an empty graph with room for exactly `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::new(capacity))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        debug!(
            capacity = config.vertex_capacity,
            edge_hint = config.edge_capacity_hint,
            "Creating graph"
        );
        Graph {
            vertices: Vec::with_capacity(config.vertex_capacity),
            capacity: config.vertex_capacity,
            edge_capacity_hint: config.edge_capacity_hint,
            edge_count: 0,
        }
    }

    /// Append a vertex and return its handle
    ///
    /// The handle's index equals the number of vertices appended before it.
    ///
    /// # Panics
    ///
    /// Panics if the graph already holds `capacity()` vertices.
    pub fn append_vertex(&mut self, attrs: S::Vertex) -> VertexId {
        assert!(
            !self.is_full(),
            "Vertex arena is full: capacity {} reached",
            self.capacity
        );
        self.push_vertex(attrs)
    }

    /// Append a vertex, reporting a full arena as an error
    pub fn try_append_vertex(&mut self, attrs: S::Vertex) -> GraphResult<VertexId> {
        if self.is_full() {
            warn!(capacity = self.capacity, "Rejected vertex append on full graph");
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(self.push_vertex(attrs))
    }

    fn push_vertex(&mut self, attrs: S::Vertex) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        let base = self.vertices.as_ptr();
        self.vertices
            .push(Vertex::new(id, attrs, self.edge_capacity_hint));
        // The arena must never move a vertex
        debug_assert!(id.as_usize() == 0 || base == self.vertices.as_ptr());
        trace!(vertex = %id, "Appended vertex");
        id
    }

    /// Append an edge `source -> target` to `source`'s edge list
    ///
    /// Edges of one vertex keep the order in which they were appended. The
    /// returned id stays valid for the graph's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is not part of this graph.
    pub fn append_edge(&mut self, source: VertexId, target: VertexId, attrs: S::Edge) -> EdgeId {
        match self.try_append_edge(source, target, attrs) {
            Ok(id) => id,
            Err(e) => panic!("{}", e),
        }
    }

    /// Append an edge, reporting unknown endpoints as an error
    pub fn try_append_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        attrs: S::Edge,
    ) -> GraphResult<EdgeId> {
        if !self.contains(target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }
        let vertex = self
            .vertices
            .get_mut(source.as_usize())
            .ok_or(GraphError::InvalidEdgeSource(source))?;

        let id = vertex.push_edge(target, attrs);
        self.edge_count += 1;
        trace!(edge = %id, target = %target, "Appended edge");
        Ok(id)
    }

    /// Append `v1 -> v2` and `v2 -> v1`, each with its own copy of `attrs`
    pub fn add_edge_pair(&mut self, v1: VertexId, v2: VertexId, attrs: S::Edge) -> (EdgeId, EdgeId)
    where
        S::Edge: Clone,
    {
        let forward = self.append_edge(v1, v2, attrs.clone());
        let backward = self.append_edge(v2, v1, attrs);
        (forward, backward)
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> slice::Iter<'_, Vertex<S>> {
        self.vertices.iter()
    }

    /// Vertices in insertion order, with write access to their attributes
    pub fn vertices_mut(&mut self) -> impl ExactSizeIterator<Item = VertexMut<'_, S>> + '_ {
        self.vertices.iter_mut().map(VertexMut::new)
    }

    /// Handles of all vertices in insertion order
    pub fn ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Every edge, grouped by source vertex in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<S>> + '_ {
        self.vertices.iter().flat_map(|v| v.edges())
    }

    /// Edges pointing at `target`
    pub fn incoming(&self, target: VertexId) -> impl Iterator<Item = &Edge<S>> + '_ {
        self.edges().filter(move |e| e.target() == target)
    }

    /// # Panics
    ///
    /// Panics if `id` is not part of this graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex<S> {
        match self.vertices.get(id.as_usize()) {
            Some(vertex) => vertex,
            None => panic!("Vertex {} not found", id),
        }
    }

    /// # Panics
    ///
    /// Panics if `id` is not part of this graph.
    pub fn vertex_mut(&mut self, id: VertexId) -> VertexMut<'_, S> {
        match self.vertices.get_mut(id.as_usize()) {
            Some(vertex) => VertexMut::new(vertex),
            None => panic!("Vertex {} not found", id),
        }
    }

    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex<S>> {
        self.vertices.get(id.as_usize())
    }

    pub fn get_vertex_mut(&mut self, id: VertexId) -> Option<VertexMut<'_, S>> {
        self.vertices.get_mut(id.as_usize()).map(VertexMut::new)
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge<S>> {
        self.get_vertex(id.source())?.edge(id.slot())
    }

    pub fn get_edge_mut(&mut self, id: EdgeId) -> Option<EdgeMut<'_, S>> {
        self.get_vertex_mut(id.source())?.into_edge_mut(id.slot())
    }

    /// The vertex an edge leaves from
    pub fn source_of(&self, edge: &Edge<S>) -> &Vertex<S> {
        self.vertex(edge.source())
    }

    /// The vertex an edge leads to
    pub fn target_of(&self, edge: &Edge<S>) -> &Vertex<S> {
        self.vertex(edge.target())
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.as_usize() < self.vertices.len()
    }

    /// Number of vertices appended so far
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Maximum number of vertices, fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Vertices that can still be appended
    pub fn remaining(&self) -> usize {
        self.capacity - self.vertices.len()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<S: Schema> Index<VertexId> for Graph<S> {
    type Output = Vertex<S>;

    fn index(&self, id: VertexId) -> &Vertex<S> {
        self.vertex(id)
    }
}

impl<'a, S: Schema> IntoIterator for &'a Graph<S> {
    type Item = &'a Vertex<S>;
    type IntoIter = slice::Iter<'a, Vertex<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl<S: Schema> VertexTraits for Graph<S> {
    type Vertex = Vertex<S>;
}

impl<S: Schema> EdgeTraits for Graph<S> {
    type Edge = Edge<S>;
}

impl<S: Schema> fmt::Debug for Graph<S>
where
    S::Vertex: fmt::Debug,
    S::Edge: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("capacity", &self.capacity)
            .field("edge_count", &self.edge_count)
            .field("vertices", &self.vertices)
            .finish()
    }
}
