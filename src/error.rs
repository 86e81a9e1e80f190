//! Error taxonomy for graph construction and ranking.

use thiserror::Error;

/// Errors surfaced by graph construction and the push engine.
///
/// All variants are detected at construction or at the first violating
/// operation; no partial score vector is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum RankError {
    /// The edge list was empty, so there is no node count to derive.
    #[error("graph has no edges")]
    EmptyGraph,

    /// A configuration value was outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The opt-in push cap ran out before every residue settled.
    #[error("no convergence after {pushes} pushes")]
    NonConvergence { pushes: u64 },
}

pub type Result<T> = std::result::Result<T, RankError>;
