//! Input handling for the textual graph format.

pub mod parse;

pub use parse::{parse_graph, GraphFile, ParseError, RunOptions};
