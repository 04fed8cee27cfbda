//! Graph construction settings

use serde::{Deserialize, Serialize};

/// Sizing of a [`Graph`](crate::Graph)
///
/// `vertex_capacity` is a hard limit: the vertex arena is allocated once for
/// exactly that many vertices and never grows. `edge_capacity_hint` only
/// pre-reserves each vertex's edge list, which keeps growing as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum number of vertices
    pub vertex_capacity: usize,
    /// Edges reserved per vertex up front
    pub edge_capacity_hint: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 1024,
            edge_capacity_hint: 0,
        }
    }
}

impl GraphConfig {
    pub fn new(vertex_capacity: usize) -> Self {
        Self {
            vertex_capacity,
            ..Self::default()
        }
    }

    pub fn with_edge_capacity_hint(mut self, hint: usize) -> Self {
        self.edge_capacity_hint = hint;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.vertex_capacity, 1024);
        assert_eq!(config.edge_capacity_hint, 0);
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::new(16).with_edge_capacity_hint(4);
        assert_eq!(config.vertex_capacity, 16);
        assert_eq!(config.edge_capacity_hint, 4);
    }

    #[test]
    fn test_partial_json() {
        // Missing fields fall back to defaults
        let config: GraphConfig = serde_json::from_str(r#"{"vertex_capacity": 8}"#).unwrap();
        assert_eq!(config, GraphConfig::new(8));
    }
}
