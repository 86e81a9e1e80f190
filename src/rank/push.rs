//! The local push operator and its convergence drivers
//!
//! Each push folds `alpha * residue[u]` into `pagerank[u]`, keeps half of the
//! remainder at `u`, and spreads the other half across `u`'s neighbors. A
//! node is settled once `residue[u] < epsilon * degree[u]`; the computation
//! ends when every node is settled. Total probability mass is conserved
//! across pushes, except at zero-degree nodes, where the outbound half has
//! nowhere to go and is discarded.

use std::collections::VecDeque;

use log::debug;

use crate::error::{RankError, Result};
use crate::graph::csr::CsrGraph;

use super::PushConfig;
use super::RankSummary;

/// Push-based approximate PageRank state over a frozen [`CsrGraph`].
///
/// Owns the per-node `pagerank` and `residue` vectors exclusively. Instances
/// are single-use: once [`calculate`](Self::calculate) converges there is
/// nothing left to push, and re-invoking it is a no-op. There is no reset.
///
/// # Examples
///
/// ```
/// use pushrank::{CsrGraph, GraphMode, PushConfig, PushRank};
///
/// let graph = CsrGraph::from_edges(
///     &[(0, 1), (1, 2), (2, 3), (0, 2)],
///     GraphMode::Undirected,
/// )?;
/// let config = PushConfig::new().with_alpha(0.1).with_epsilon(0.001);
/// let mut ranker = PushRank::new(&graph, &config)?;
///
/// assert!(ranker.pagerank().iter().all(|&p| p == 0.0));
///
/// ranker.push(0);
/// assert_eq!(ranker.pagerank()[0], 0.025);
///
/// ranker.push(0);
/// assert!((ranker.pagerank()[0] - 0.03625).abs() < 1e-12);
///
/// let scores = ranker.calculate()?;
/// assert!((scores[2] - 0.3623).abs() < 1e-3);
/// # Ok::<(), pushrank::RankError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PushRank<'g> {
    graph: &'g CsrGraph,
    alpha: f64,
    epsilon: f64,
    max_pushes: Option<u64>,
    pagerank: Vec<f64>,
    residue: Vec<f64>,
    pushes: u64,
    converged: bool,
}

impl<'g> PushRank<'g> {
    /// Set up the engine: pagerank all zeros, residue uniform at `1 / N`.
    pub fn new(graph: &'g CsrGraph, config: &PushConfig) -> Result<Self> {
        config.validate()?;
        let n = graph.num_nodes;
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }

        Ok(Self {
            graph,
            alpha: config.alpha,
            epsilon: config.epsilon,
            max_pushes: config.max_pushes,
            pagerank: vec![0.0; n],
            residue: vec![1.0 / n as f64; n],
            pushes: 0,
            converged: false,
        })
    }

    /// Apply one push at `u`.
    ///
    /// `alpha * residue[u]` is permanently credited to `pagerank[u]`. Half of
    /// the remainder stays at `u`; the other half is split evenly across the
    /// adjacency relation, each neighbor receiving `(remains / 2) /
    /// degree[u]`. Returns `false` when `u` has degree zero: the outbound
    /// half is discarded, and callers must not treat the call as
    /// redistribution.
    ///
    /// `u` must be a valid node id for the underlying graph.
    pub fn push(&mut self, u: u32) -> bool {
        let graph = self.graph;
        let ui = u as usize;

        let taken = self.alpha * self.residue[ui];
        let remains = self.residue[ui] - taken;
        self.pagerank[ui] += taken;

        let degree = graph.degree(u);
        let propagated = degree > 0;
        if propagated {
            let share = (remains / 2.0) / f64::from(degree);
            for &v in graph.neighbors(u) {
                self.residue[v as usize] += share;
            }
        }
        // Assigned after the neighbor loop: a self-loop's own share is
        // overwritten, not accumulated.
        self.residue[ui] = remains / 2.0;

        self.pushes += 1;
        propagated
    }

    /// Whether `u` is below its residue threshold.
    ///
    /// Zero-degree nodes are held to a unit-degree threshold: with the
    /// literal `epsilon * 0` scaling they would stay violators forever while
    /// their residue halves toward zero.
    fn settled(&self, u: usize) -> bool {
        let degree = self.graph.degree[u].max(1);
        self.residue[u] < self.epsilon * f64::from(degree)
    }

    fn check_push_cap(&self) -> Result<()> {
        match self.max_pushes {
            Some(cap) if self.pushes >= cap => Err(RankError::NonConvergence {
                pushes: self.pushes,
            }),
            _ => Ok(()),
        }
    }

    /// Drive pushes until every node settles, lowest-index violator first.
    ///
    /// The scan restarts from node 0 after every push, which keeps the push
    /// order — and therefore the exact converged values — deterministic.
    /// Fails with [`RankError::NonConvergence`] if a configured push cap runs
    /// out first; no partial vector is returned through the error path.
    pub fn calculate(&mut self) -> Result<&[f64]> {
        while let Some(u) = (0..self.graph.num_nodes).find(|&u| !self.settled(u)) {
            self.check_push_cap()?;
            self.push(u as u32);
        }
        self.converged = true;
        debug!(
            "settled after {} pushes, residual mass {:.3e}",
            self.pushes,
            self.residual()
        );
        Ok(&self.pagerank)
    }

    /// Worklist variant of [`calculate`](Self::calculate).
    ///
    /// Keeps a FIFO queue of violating nodes instead of rescanning from
    /// zero, so the work per push is proportional to the degree of the
    /// pushed node. The convergence criterion is identical; the push order
    /// is not, so converged scores match the scanning driver only within the
    /// epsilon-approximation bound.
    pub fn calculate_queued(&mut self) -> Result<&[f64]> {
        let n = self.graph.num_nodes;
        let mut enqueued = vec![false; n];
        let mut queue = VecDeque::new();
        for u in 0..n {
            if !self.settled(u) {
                enqueued[u] = true;
                queue.push_back(u as u32);
            }
        }

        while let Some(u) = queue.pop_front() {
            enqueued[u as usize] = false;
            if self.settled(u as usize) {
                continue;
            }
            self.check_push_cap()?;
            self.push(u);

            if !self.settled(u as usize) && !enqueued[u as usize] {
                enqueued[u as usize] = true;
                queue.push_back(u);
            }
            for &v in self.graph.neighbors(u) {
                if !enqueued[v as usize] && !self.settled(v as usize) {
                    enqueued[v as usize] = true;
                    queue.push_back(v);
                }
            }
        }
        self.converged = true;
        debug!(
            "settled after {} pushes (queued), residual mass {:.3e}",
            self.pushes,
            self.residual()
        );
        Ok(&self.pagerank)
    }

    /// The permanent scores accumulated so far.
    pub fn pagerank(&self) -> &[f64] {
        &self.pagerank
    }

    /// The unresolved mass per node.
    pub fn residue(&self) -> &[f64] {
        &self.residue
    }

    /// Pushes applied so far, manual and driven alike.
    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    /// Total unresolved mass.
    pub fn residual(&self) -> f64 {
        self.residue.iter().sum()
    }

    /// Snapshot scores, counters, and convergence state.
    pub fn summary(&self) -> RankSummary {
        RankSummary {
            scores: self.pagerank.clone(),
            pushes: self.pushes,
            residual: self.residual(),
            converged: self.converged,
        }
    }

    /// Consume the engine, keeping only the score vector.
    pub fn into_scores(self) -> Vec<f64> {
        self.pagerank
    }
}
