//! Approximate PageRank over edge lists via local residue pushing.
//!
//! Instead of repeated full matrix products, the engine keeps a per-node
//! residue of unresolved probability mass and applies a local push operator
//! until every residue falls under a degree-scaled epsilon. Edge lists are
//! frozen into a compressed sparse row layout before ranking.
//!
//! ```
//! use pushrank::{approximate_pagerank, GraphMode, PushConfig};
//!
//! let edges = [(0, 1), (1, 2), (2, 3), (0, 2)];
//! let config = PushConfig::new().with_alpha(0.1).with_epsilon(0.001);
//! let scores = approximate_pagerank(&edges, GraphMode::Undirected, &config)?;
//!
//! assert_eq!(scores.len(), 4);
//! assert!(scores.iter().sum::<f64>() <= 1.0);
//! # Ok::<(), pushrank::RankError>(())
//! ```
//!
//! For step-wise use, [`PushRank`] exposes the push operator directly; see
//! its docs for the worked example.

pub mod error;
pub mod graph;
pub mod io;
pub mod rank;

pub use error::{RankError, Result};
pub use graph::builder::GraphBuilder;
pub use graph::csr::CsrGraph;
pub use graph::generate::{random_connected_graph, DisjointSet};
pub use graph::{Edge, GraphMode};
pub use io::{parse_graph, GraphFile, ParseError, RunOptions};
pub use rank::{approximate_pagerank, PushConfig, PushRank, RankSummary};
