use crate::error::Result;
use crate::matrix::Matrix;
use crate::maximum_flow::validate;
use crate::queue::Fifo;
use num_traits::Zero;
use std::collections::VecDeque;

/// Finds a path with the fewest edges from `source` to `sink`.
///
/// There is an edge `u -> v` iff `matrix[(u, v)] > 0`; zero, negative and NaN
/// entries are not edges. Neighbours are scanned in ascending index order, so
/// the returned path is deterministic. The search stops as soon as the sink is
/// discovered.
///
/// Returns `Ok(None)` if the sink is unreachable and `Ok(Some(vec![source]))`
/// if `source == sink`.
pub fn bfs_shortest_path<Flow>(matrix: &Matrix<Flow>, source: usize, sink: usize) -> Result<Option<Vec<usize>>>
where
    Flow: Zero + PartialOrd + Copy,
{
    let num_nodes = validate(matrix, source, sink)?;
    Ok(shortest_path(matrix, num_nodes, source, sink))
}

// callers must have validated the input
pub(crate) fn shortest_path<Flow>(matrix: &Matrix<Flow>, num_nodes: usize, source: usize, sink: usize) -> Option<Vec<usize>>
where
    Flow: Zero + PartialOrd + Copy,
{
    if source == sink {
        return Some(vec![source]);
    }

    let mut prev = vec![usize::MAX; num_nodes];
    let mut visited = vec![false; num_nodes];
    let mut que: VecDeque<usize> = VecDeque::new();

    visited[source] = true;
    que.enqueue(source);
    while let Some(u) = que.dequeue() {
        for v in 0..num_nodes {
            if visited[v] || !(matrix[(u, v)] > Flow::zero()) {
                continue;
            }

            prev[v] = u;
            if v == sink {
                return Some(trace_back(&prev, source, sink));
            }
            visited[v] = true;
            que.enqueue(v);
        }
    }

    None
}

/// Marks every node reachable from `source` through positive entries.
pub(crate) fn reachable<Flow>(matrix: &Matrix<Flow>, source: usize) -> Vec<bool>
where
    Flow: Zero + PartialOrd + Copy,
{
    let num_nodes = matrix.rows();
    let mut visited = vec![false; num_nodes];
    let mut que: VecDeque<usize> = VecDeque::new();

    visited[source] = true;
    que.enqueue(source);
    while let Some(u) = que.dequeue() {
        for v in 0..num_nodes {
            if !visited[v] && matrix[(u, v)] > Flow::zero() {
                visited[v] = true;
                que.enqueue(v);
            }
        }
    }

    visited
}

fn trace_back(prev: &[usize], source: usize, sink: usize) -> Vec<usize> {
    let mut path = vec![sink];
    let mut v = sink;
    while v != source {
        v = prev[v];
        path.push(v);
    }
    path.reverse();
    path
}
