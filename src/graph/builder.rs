//! Incremental edge-list accumulation
//!
//! The builder collects per-node neighbor sets and degree counters from an
//! edge list before freezing into [`CsrGraph`](super::csr::CsrGraph). It uses
//! FxHashSet for O(1) duplicate-edge collapsing during construction.

use rustc_hash::FxHashSet;

use super::{Edge, GraphMode};

/// A node under construction.
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Deduplicated neighbor set — the 0/1 adjacency relation.
    pub neighbors: FxHashSet<u32>,
    /// Raw incident-edge count. Parallel edges accumulate here even though
    /// they collapse in `neighbors`.
    pub degree: u32,
}

/// A mutable graph builder optimized for incremental construction.
///
/// Node ids are dense and 0-based: adding an edge that mentions id `k` grows
/// the node table to `k + 1`, so ids skipped by the edge list become isolated
/// nodes rather than errors.
#[derive(Debug)]
pub struct GraphBuilder {
    mode: GraphMode,
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder.
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated node capacity.
    pub fn with_capacity(mode: GraphMode, node_capacity: usize) -> Self {
        Self {
            mode,
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Accumulate a whole edge list.
    pub fn from_edges(edges: &[Edge], mode: GraphMode) -> Self {
        let mut builder = Self::new(mode);
        for &(from, to) in edges {
            builder.add_edge(from, to);
        }
        builder
    }

    /// Record one edge occurrence.
    ///
    /// The adjacency relation absorbs duplicates, but every occurrence moves
    /// the degree counters: once for the source in directed mode, once per
    /// endpoint in undirected mode (twice for `i == i`).
    pub fn add_edge(&mut self, from: u32, to: u32) {
        self.ensure_node(from.max(to));
        match self.mode {
            GraphMode::Directed => {
                self.nodes[from as usize].neighbors.insert(to);
                self.nodes[from as usize].degree += 1;
            }
            GraphMode::Undirected => {
                self.nodes[from as usize].neighbors.insert(to);
                self.nodes[to as usize].neighbors.insert(from);
                self.nodes[from as usize].degree += 1;
                self.nodes[to as usize].degree += 1;
            }
        }
    }

    fn ensure_node(&mut self, id: u32) {
        let needed = id as usize + 1;
        if self.nodes.len() < needed {
            self.nodes.resize_with(needed, BuilderNode::default);
        }
    }

    /// One past the highest node id seen so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The edge interpretation this builder was created with.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Get a node by id.
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if no edges have been added yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_is_one_past_max_id() {
        let builder = GraphBuilder::from_edges(&[(0, 1), (1, 2)], GraphMode::Undirected);
        assert_eq!(builder.node_count(), 3);
    }

    #[test]
    fn test_id_gaps_become_isolated_nodes() {
        let builder = GraphBuilder::from_edges(&[(0, 4)], GraphMode::Undirected);

        assert_eq!(builder.node_count(), 5);
        // Nodes 1..=3 were never mentioned: present, degree 0, no neighbors.
        for id in 1..4 {
            let node = builder.get_node(id).unwrap();
            assert_eq!(node.degree, 0);
            assert!(node.neighbors.is_empty());
        }
    }

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let builder = GraphBuilder::from_edges(&[(0, 1)], GraphMode::Undirected);

        assert!(builder.get_node(0).unwrap().neighbors.contains(&1));
        assert!(builder.get_node(1).unwrap().neighbors.contains(&0));
        assert_eq!(builder.get_node(0).unwrap().degree, 1);
        assert_eq!(builder.get_node(1).unwrap().degree, 1);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let builder = GraphBuilder::from_edges(&[(0, 1)], GraphMode::Directed);

        assert!(builder.get_node(0).unwrap().neighbors.contains(&1));
        assert!(builder.get_node(1).unwrap().neighbors.is_empty());
        assert_eq!(builder.get_node(0).unwrap().degree, 1);
        assert_eq!(builder.get_node(1).unwrap().degree, 0);
    }

    #[test]
    fn test_parallel_edges_collapse_in_adjacency_but_not_degree() {
        let builder = GraphBuilder::from_edges(&[(0, 1), (0, 1), (1, 0)], GraphMode::Undirected);

        assert_eq!(builder.get_node(0).unwrap().neighbors.len(), 1);
        assert_eq!(builder.get_node(0).unwrap().degree, 3);
        assert_eq!(builder.get_node(1).unwrap().degree, 3);
    }

    #[test]
    fn test_undirected_self_loop_counts_both_sides() {
        let builder = GraphBuilder::from_edges(&[(2, 2)], GraphMode::Undirected);

        let node = builder.get_node(2).unwrap();
        assert!(node.neighbors.contains(&2));
        assert_eq!(node.degree, 2);
    }

    #[test]
    fn test_directed_self_loop_counts_once() {
        let builder = GraphBuilder::from_edges(&[(2, 2)], GraphMode::Directed);
        assert_eq!(builder.get_node(2).unwrap().degree, 1);
    }

    #[test]
    fn test_empty_builder() {
        let builder = GraphBuilder::new(GraphMode::Undirected);
        assert!(builder.is_empty());
        assert_eq!(builder.node_count(), 0);
    }
}
