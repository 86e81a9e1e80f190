//! Random connected graph generation
//!
//! Produces undirected edge lists over dense 0-based ids, suitable as ranking
//! input. Candidate pairs are drawn in a seeded shuffled order and added
//! until a union-find reports a single component, so output is deterministic
//! for a fixed seed.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::{RankError, Result};

use super::Edge;

/// Union-find over `0..n` with path compression and a live group counter.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    group_count: usize,
}

impl DisjointSet {
    /// Create `elements` singleton groups.
    pub fn new(elements: usize) -> Self {
        Self {
            parent: (0..elements).collect(),
            group_count: elements,
        }
    }

    /// The representative of `u`'s group.
    pub fn find(&mut self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point the whole chain at the root.
        let mut cursor = u;
        while self.parent[cursor] != root {
            let next = self.parent[cursor];
            self.parent[cursor] = root;
            cursor = next;
        }
        root
    }

    /// Merge the groups of `u` and `v`. Returns `true` if they were distinct.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            return false;
        }
        self.parent[root_u] = root_v;
        self.group_count -= 1;
        true
    }

    /// Number of groups still separate.
    pub fn group_count(&self) -> usize {
        self.group_count
    }
}

/// Draw a random connected undirected graph over `nodes` dense ids.
///
/// All `i < j` candidate pairs are shuffled with a ChaCha8 RNG seeded from
/// `seed`, then added one by one until the graph is connected. At least two
/// nodes are required; fewer cannot yield a non-empty edge list.
pub fn random_connected_graph(nodes: usize, seed: u64) -> Result<Vec<Edge>> {
    if nodes < 2 {
        return Err(RankError::InvalidParameter(format!(
            "a connected graph needs at least 2 nodes, got {nodes}"
        )));
    }

    let mut queue: Vec<Edge> = Vec::with_capacity(nodes * (nodes - 1) / 2);
    for i in 0..nodes as u32 {
        for j in (i + 1)..nodes as u32 {
            queue.push((i, j));
        }
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    queue.shuffle(&mut rng);

    let mut groups = DisjointSet::new(nodes);
    let mut edges = Vec::new();
    while groups.group_count() > 1 {
        match queue.pop() {
            Some((i, j)) => {
                groups.union(i as usize, j as usize);
                edges.push((i, j));
            }
            // The complete graph is connected, so the queue cannot run dry
            // before the group count reaches 1.
            None => break,
        }
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set_union_merges_groups() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.group_count(), 5);

        assert!(ds.union(0, 1));
        assert!(ds.union(3, 4));
        assert_eq!(ds.group_count(), 3);

        // Already merged.
        assert!(!ds.union(1, 0));
        assert_eq!(ds.group_count(), 3);

        assert_eq!(ds.find(0), ds.find(1));
        assert_ne!(ds.find(0), ds.find(2));
    }

    #[test]
    fn test_disjoint_set_transitive_merge() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1);
        ds.union(1, 2);
        ds.union(2, 3);
        assert_eq!(ds.group_count(), 1);
        assert_eq!(ds.find(0), ds.find(3));
    }

    #[test]
    fn test_two_nodes_yield_the_single_possible_edge() {
        let edges = random_connected_graph(2, 0).unwrap();
        assert_eq!(edges, vec![(0, 1)]);
    }

    #[test]
    fn test_generated_graph_is_connected() {
        let nodes = 10;
        let edges = random_connected_graph(nodes, 99).unwrap();

        let mut ds = DisjointSet::new(nodes);
        for &(i, j) in &edges {
            ds.union(i as usize, j as usize);
        }
        assert_eq!(ds.group_count(), 1);
    }

    #[test]
    fn test_ids_are_dense_and_in_range() {
        let nodes = 8;
        let edges = random_connected_graph(nodes, 7).unwrap();

        for &(i, j) in &edges {
            assert!(i < j, "pairs are emitted with i < j");
            assert!((j as usize) < nodes);
        }
    }

    #[test]
    fn test_reproducible_given_seed() {
        let a = random_connected_graph(9, 1234).unwrap();
        let b = random_connected_graph(9, 1234).unwrap();
        assert_eq!(a, b);

        let c = random_connected_graph(9, 4321).unwrap();
        // Different seeds almost surely disagree on 36 shuffled pairs.
        assert_ne!(a, c);
    }

    #[test]
    fn test_too_few_nodes_rejected() {
        assert!(matches!(
            random_connected_graph(0, 1),
            Err(RankError::InvalidParameter(_))
        ));
        assert!(matches!(
            random_connected_graph(1, 1),
            Err(RankError::InvalidParameter(_))
        ));
    }
}
