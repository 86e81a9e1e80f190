//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores each node's neighbors contiguously, which is exactly the
//! access pattern of the push operator: one slice scan per push. The degree
//! vector is kept separately from the adjacency because the two deliberately
//! disagree in the presence of parallel edges — adjacency is a 0/1 relation,
//! degree counts raw edge occurrences.

use log::debug;

use crate::error::{RankError, Result};

use super::builder::GraphBuilder;
use super::{Edge, GraphMode};

/// A frozen graph in Compressed Sparse Row format.
///
/// Built once from an edge list; the node count is fixed afterwards and no
/// edges can be added or removed.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (one past the highest id in the edge list).
    pub num_nodes: usize,
    /// Row pointers: node `i`'s neighbors are at `col_idx[row_ptr[i]..row_ptr[i + 1]]`.
    pub row_ptr: Vec<usize>,
    /// Column indices (neighbor ids), sorted and deduplicated per node.
    pub col_idx: Vec<u32>,
    /// Raw incident-edge counts: out-degree in directed mode, total incident
    /// count otherwise.
    pub degree: Vec<u32>,
    mode: GraphMode,
}

impl CsrGraph {
    /// Build directly from an edge list.
    ///
    /// Fails with [`RankError::EmptyGraph`] when the list is empty — there is
    /// no maximum id to derive a node count from.
    pub fn from_edges(edges: &[Edge], mode: GraphMode) -> Result<Self> {
        Self::from_builder(&GraphBuilder::from_edges(edges, mode))
    }

    /// Convert a [`GraphBuilder`] into CSR format.
    pub fn from_builder(builder: &GraphBuilder) -> Result<Self> {
        if builder.is_empty() {
            return Err(RankError::EmptyGraph);
        }

        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut degree = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            // Sort for deterministic iteration and binary-searchable lookups.
            let mut targets: Vec<u32> = node.neighbors.iter().copied().collect();
            targets.sort_unstable();

            degree.push(node.degree);
            col_idx.extend(targets);
            row_ptr.push(col_idx.len());
        }

        debug!(
            "froze {:?} graph: {} nodes, {} adjacency entries",
            builder.mode(),
            num_nodes,
            col_idx.len()
        );

        Ok(Self {
            num_nodes,
            row_ptr,
            col_idx,
            degree,
            mode: builder.mode(),
        })
    }

    /// The neighbors of a node, sorted ascending.
    pub fn neighbors(&self, node: u32) -> &[u32] {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        &self.col_idx[start..end]
    }

    /// The raw degree of a node (see the field docs for the exact meaning).
    pub fn degree(&self, node: u32) -> u32 {
        self.degree[node as usize]
    }

    /// Whether the 0/1 adjacency relation holds between `from` and `to`.
    pub fn has_edge(&self, from: u32, to: u32) -> bool {
        self.neighbors(from).binary_search(&to).is_ok()
    }

    /// Total number of adjacency entries (each undirected edge counts twice).
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes with no outgoing mass: degree zero.
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree[n as usize] == 0)
            .collect()
    }

    /// The edge interpretation this graph was frozen with.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> CsrGraph {
        CsrGraph::from_edges(&[(0, 1), (1, 2), (2, 3), (0, 2)], GraphMode::Undirected).unwrap()
    }

    #[test]
    fn test_adjacency_matches_reference_matrix() {
        let csr = diamond();

        assert_eq!(csr.num_nodes, 4);
        assert_eq!(csr.neighbors(0), &[1, 2]);
        assert_eq!(csr.neighbors(1), &[0, 2]);
        assert_eq!(csr.neighbors(2), &[0, 1, 3]);
        assert_eq!(csr.neighbors(3), &[2]);
    }

    #[test]
    fn test_degree_vector_matches_reference() {
        let csr = diamond();
        assert_eq!(csr.degree, vec![2, 2, 3, 1]);
    }

    #[test]
    fn test_directed_keeps_exactly_the_edge_set() {
        let csr = CsrGraph::from_edges(&[(0, 1), (1, 2)], GraphMode::Directed).unwrap();

        assert_eq!(csr.neighbors(0), &[1]);
        assert_eq!(csr.neighbors(1), &[2]);
        assert!(csr.neighbors(2).is_empty());
        assert_eq!(csr.degree, vec![1, 1, 0]);
    }

    #[test]
    fn test_has_edge() {
        let csr = diamond();

        assert!(csr.has_edge(0, 2));
        assert!(csr.has_edge(2, 0));
        assert!(!csr.has_edge(0, 3));
    }

    #[test]
    fn test_parallel_edges_inflate_degree_only() {
        let csr = CsrGraph::from_edges(&[(0, 1), (0, 1)], GraphMode::Undirected).unwrap();

        assert_eq!(csr.neighbors(0), &[1]);
        assert_eq!(csr.degree(0), 2);
        assert_eq!(csr.degree(1), 2);
    }

    #[test]
    fn test_empty_edge_list_is_an_error() {
        let err = CsrGraph::from_edges(&[], GraphMode::Undirected).unwrap_err();
        assert!(matches!(err, RankError::EmptyGraph));
    }

    #[test]
    fn test_dangling_nodes_from_id_gap() {
        let csr = CsrGraph::from_edges(&[(0, 1), (1, 2), (2, 4), (0, 2)], GraphMode::Undirected)
            .unwrap();

        assert_eq!(csr.num_nodes, 5);
        assert_eq!(csr.dangling_nodes(), vec![3]);
    }

    #[test]
    fn test_directed_sink_is_dangling() {
        let csr = CsrGraph::from_edges(&[(0, 1), (1, 2)], GraphMode::Directed).unwrap();
        assert_eq!(csr.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_num_edges_counts_adjacency_entries() {
        let csr = diamond();
        // 4 undirected edges, each stored in both directions.
        assert_eq!(csr.num_edges(), 8);
    }
}
