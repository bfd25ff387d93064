//! Graph outline accumulator.
//!
//! Traversal produces a [`GraphOutline`] — an explicit value holding the
//! classified nodes and the edges between them — which presentation then
//! renders. Nodes keep insertion order and the first classification given
//! for a name wins; edges keep insertion order and duplicates are allowed,
//! mirroring repeated dependency declarations.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::graph::Role;

/// A classified node in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Module name.
    pub name: String,
    /// Role the node was classified with when first added.
    pub role: Role,
}

/// An ordered node/edge accumulation ready for rendering.
///
/// # Example
///
/// ```rust
/// use modscope::graph::{GraphOutline, Role};
///
/// let mut outline = GraphOutline::new();
/// outline.add_node("Top", Role::Normal);
/// outline.add_node("Mid", Role::Root);
/// outline.add_edge("Top", "Mid");
///
/// assert_eq!(outline.node_count(), 2);
/// assert_eq!(outline.edge_count(), 1);
/// assert_eq!(outline.role_of("Mid"), Some(Role::Root));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphOutline {
    graph: DiGraph<OutlineNode, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl GraphOutline {
    /// Creates an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node unless a node with the same name already exists.
    ///
    /// Returns the index of the added or existing node; an existing node
    /// keeps its original role.
    pub fn add_node(&mut self, name: &str, role: Role) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(OutlineNode {
            name: name.to_string(),
            role,
        });
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Adds an edge between two named nodes.
    ///
    /// Both nodes must already exist; returns `false` without recording
    /// anything if either is missing. Parallel edges are kept.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let from_idx = match self.node_indices.get(from) {
            Some(&idx) => idx,
            None => return false,
        };
        let to_idx = match self.node_indices.get(to) {
            Some(&idx) => idx,
            None => return false,
        };

        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    /// Returns true if a node with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Returns the role a named node was classified with, if present.
    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.node_indices
            .get(name)
            .and_then(|&idx| self.graph.node_weight(idx))
            .map(|node| node.role)
    }

    /// Iterates over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &OutlineNode> {
        self.graph.node_weights()
    }

    /// Iterates over edges as `(from, to)` name pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            let from = &self.graph[edge.source()];
            let to = &self.graph[edge.target()];
            (from.name.as_str(), to.name.as_str())
        })
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the outline has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_outline() {
        let outline = GraphOutline::new();
        assert_eq!(outline.node_count(), 0);
        assert_eq!(outline.edge_count(), 0);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_first_classification_wins() {
        let mut outline = GraphOutline::new();
        let first = outline.add_node("A", Role::Root);
        let second = outline.add_node("A", Role::Normal);

        assert_eq!(first, second);
        assert_eq!(outline.node_count(), 1);
        assert_eq!(outline.role_of("A"), Some(Role::Root));
    }

    #[test]
    fn test_add_edge_requires_both_nodes() {
        let mut outline = GraphOutline::new();
        outline.add_node("A", Role::Normal);

        assert!(!outline.add_edge("A", "missing"));
        assert!(!outline.add_edge("missing", "A"));
        assert_eq!(outline.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut outline = GraphOutline::new();
        outline.add_node("A", Role::Normal);
        outline.add_node("B", Role::Root);
        outline.add_edge("A", "B");
        outline.add_edge("A", "B");

        assert_eq!(outline.edge_count(), 2);
    }

    #[test]
    fn test_nodes_iterate_in_insertion_order() {
        let mut outline = GraphOutline::new();
        outline.add_node("C", Role::Normal);
        outline.add_node("A", Role::Normal);
        outline.add_node("B", Role::Normal);

        let names: Vec<&str> = outline.nodes().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_edges_iterate_in_insertion_order() {
        let mut outline = GraphOutline::new();
        outline.add_node("A", Role::Normal);
        outline.add_node("B", Role::Normal);
        outline.add_node("C", Role::Root);
        outline.add_edge("A", "B");
        outline.add_edge("B", "C");

        let edges: Vec<(&str, &str)> = outline.edges().collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "C")]);
    }
}
