use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// A line is neither a node declaration nor an edge.
    #[error("line {line}: expected `node <id> [<x> <y>]` or `<u> <v>`, found `{content}`")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line with comments stripped.
        content: String,
    },
    /// A node coordinate is not a finite number.
    #[error("line {line}: coordinate `{value}` is not a finite number")]
    InvalidCoordinate {
        /// One-based line number.
        line: usize,
        /// The rejected token.
        value: String,
    },
    /// An edge joins a node to itself.
    #[error("line {line}: self-loop on node `{node}`")]
    SelfLoop {
        /// One-based line number.
        line: usize,
        /// The repeated endpoint.
        node: String,
    },
    /// The input declares no nodes.
    #[error("edge list declares no nodes")]
    EmptyInput,
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
