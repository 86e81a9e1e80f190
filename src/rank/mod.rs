//! Approximate PageRank via local residue pushing
//!
//! This module provides the push engine and its configuration and result
//! types. See [`push::PushRank`] for the algorithm itself.

pub mod push;

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::graph::csr::CsrGraph;
use crate::graph::{Edge, GraphMode};

pub use push::PushRank;

/// Parameters for the push engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Teleport probability: the fraction of a node's residue folded into its
    /// permanent score on each push. Must be in `(0, 1]`.
    pub alpha: f64,
    /// Convergence threshold, scaled per node by its degree. Must be `> 0`.
    pub epsilon: f64,
    /// Optional hard bound on total pushes. `None` runs to convergence; note
    /// that an epsilon near float precision can make that effectively forever.
    #[serde(default)]
    pub max_pushes: Option<u64>,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            epsilon: 1e-4,
            max_pushes: None,
        }
    }
}

impl PushConfig {
    /// Create a new PushConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the teleport probability.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the push cap.
    pub fn with_max_pushes(mut self, max_pushes: u64) -> Self {
        self.max_pushes = Some(max_pushes);
        self
    }

    /// Check the parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(RankError::InvalidParameter(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if !(self.epsilon > 0.0) || !self.epsilon.is_finite() {
            return Err(RankError::InvalidParameter(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Snapshot of a finished computation.
#[derive(Debug, Clone, Serialize)]
pub struct RankSummary {
    /// Scores for each node (indexed by node id).
    pub scores: Vec<f64>,
    /// Number of pushes performed.
    pub pushes: u64,
    /// Residue mass still unresolved.
    pub residual: f64,
    /// Whether every node settled under the threshold.
    pub converged: bool,
}

impl RankSummary {
    /// Get top N nodes by score.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node.
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// One-call pipeline: edge list → CSR graph → converged score vector.
pub fn approximate_pagerank(
    edges: &[Edge],
    mode: GraphMode,
    config: &PushConfig,
) -> Result<Vec<f64>> {
    let graph = CsrGraph::from_edges(edges, mode)?;
    let mut ranker = PushRank::new(&graph, config)?;
    ranker.calculate()?;
    Ok(ranker.into_scores())
}
