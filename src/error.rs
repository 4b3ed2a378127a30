use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("invalid dimension: expected {expected:?}, found {found:?}")]
    InvalidDimension { expected: (usize, usize), found: (usize, usize) },

    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    OutOfBoundsAccess { row: usize, col: usize, rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("node {node} is not in a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("capacity matrix must be square, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}
