//! Identifier types for vertices and edges
//!
//! Both identifiers are plain arena positions. They double as the handles the
//! rest of the crate hands out, and as the basis of identity equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a vertex in its graph's arena
///
/// Equal to the vertex's 0-based insertion order. Never reused. Only a
/// [`Graph`](crate::Graph) hands out new ids:
///
/// ```compile_fail
/// let forged = attrgraph::VertexId(3);
/// ```
///
/// ```compile_fail
/// let forged = attrgraph::VertexId::new(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

/// Identity of an edge: its source vertex and its slot in that vertex's
/// outgoing edge list
///
/// Edge lists are append-only, so the slot of an edge never changes even when
/// the list's backing storage is reallocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId {
    source: VertexId,
    slot: usize,
}

impl EdgeId {
    pub(crate) fn new(source: VertexId, slot: usize) -> Self {
        EdgeId { source, slot }
    }

    /// The vertex owning this edge
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Position within the source vertex's edge list
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}:{})", self.source.0, self.slot)
    }
}
