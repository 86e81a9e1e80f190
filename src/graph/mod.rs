//! Graph construction and representation
//!
//! This module turns edge lists over dense 0-based node ids into the
//! compressed sparse row layout the push engine iterates over.

pub mod builder;
pub mod csr;
pub mod generate;

use serde::{Deserialize, Serialize};

/// An edge between two 0-based node ids.
pub type Edge = (u32, u32);

/// Whether an edge list is read one-way or symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    /// Every edge `(i, j)` also connects `j` back to `i`.
    #[default]
    Undirected,
    /// Edges connect source to target only; degree means out-degree.
    Directed,
}
