pub mod bfs;
pub mod bipartite;
pub mod edmonds_karp;
pub mod status;

use crate::error::{ArgumentError, Result};
use crate::matrix::Matrix;

// returns the number of nodes
pub(crate) fn validate<Flow>(capacities: &Matrix<Flow>, source: usize, sink: usize) -> Result<usize>
where
    Flow: Copy,
{
    let (rows, cols) = capacities.size();
    if rows != cols {
        return Err(ArgumentError::NotSquare { rows, cols }.into());
    }
    for node in [source, sink] {
        if node >= rows {
            return Err(ArgumentError::NodeOutOfRange { node, num_nodes: rows }.into());
        }
    }
    Ok(rows)
}
