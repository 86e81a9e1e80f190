//! Graph file parsing
//!
//! A graph file is an optional header of `key value` option lines, a literal
//! `---` separator, then one whitespace-separated integer edge pair per line:
//!
//! ```text
//! alpha 0.1
//! epsilon 0.001
//! directed false
//! ---
//! 0 1
//! 1 2
//! 2 3
//! 0 2
//! ```
//!
//! Files without a separator are plain edge lists ranked with default
//! options. Blank lines and `#` comments are skipped everywhere. The parser
//! only produces the already-parsed edge list and options; graph and
//! parameter validation stay with the core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Edge, GraphMode};

/// Per-run options carried in a graph file's header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Teleport probability.
    pub alpha: f64,
    /// Convergence threshold.
    pub epsilon: f64,
    /// Whether edge pairs are one-way.
    pub directed: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            epsilon: 1e-4,
            directed: false,
        }
    }
}

impl RunOptions {
    /// The edge interpretation these options select.
    pub fn mode(&self) -> GraphMode {
        if self.directed {
            GraphMode::Directed
        } else {
            GraphMode::Undirected
        }
    }
}

/// A parsed graph file: header options plus the edge list.
#[derive(Debug, Clone, Default)]
pub struct GraphFile {
    pub options: RunOptions,
    pub edges: Vec<Edge>,
}

/// Line-addressed parse failures.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: option line must be `key value`, got {text:?}")]
    MalformedOption { line: usize, text: String },

    #[error("line {line}: unknown option {key:?}")]
    UnknownOption { line: usize, key: String },

    #[error("line {line}: invalid value {value:?} for {key}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("line {line}: expected an integer edge pair, got {text:?}")]
    MalformedEdge { line: usize, text: String },
}

/// Parse a graph file.
pub fn parse_graph(input: &str) -> Result<GraphFile, ParseError> {
    let has_separator = input.lines().any(|l| l.trim() == "---");

    let mut options = RunOptions::default();
    let mut edges = Vec::new();
    let mut in_header = has_separator;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        if text == "---" {
            in_header = false;
            continue;
        }
        if in_header {
            parse_option(line, text, &mut options)?;
        } else {
            edges.push(parse_edge(line, text)?);
        }
    }

    Ok(GraphFile { options, edges })
}

fn parse_option(line: usize, text: &str, options: &mut RunOptions) -> Result<(), ParseError> {
    let mut parts = text.split_whitespace();
    let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::MalformedOption {
            line,
            text: text.to_string(),
        });
    };

    let invalid = || ParseError::InvalidValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
    };

    match key {
        "alpha" => options.alpha = value.parse::<f64>().map_err(|_| invalid())?,
        "epsilon" => options.epsilon = value.parse::<f64>().map_err(|_| invalid())?,
        "directed" => options.directed = value.parse::<bool>().map_err(|_| invalid())?,
        _ => {
            return Err(ParseError::UnknownOption {
                line,
                key: key.to_string(),
            })
        }
    }
    Ok(())
}

fn parse_edge(line: usize, text: &str) -> Result<Edge, ParseError> {
    let malformed = || ParseError::MalformedEdge {
        line,
        text: text.to_string(),
    };

    let mut parts = text.split_whitespace();
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let from = from.parse::<u32>().map_err(|_| malformed())?;
    let to = to.parse::<u32>().map_err(|_| malformed())?;
    Ok((from, to))
}
