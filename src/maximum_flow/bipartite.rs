use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use num_traits::NumAssign;

/// Maximum flow of a two-sided assignment problem.
///
/// `left[i]` bounds the flow leaving left node `i`, `right[j]` bounds the flow
/// entering right node `j`, and `middle[(i, j)]` bounds the flow from left node
/// `i` to right node `j`. Returns the total flow and the `m x n` matrix of net
/// left-to-right flows.
pub fn max_flow_bipartite<Flow>(left: &[Flow], middle: &Matrix<Flow>, right: &[Flow]) -> Result<(Flow, Matrix<Flow>)>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    let (m, n) = (left.len(), right.len());
    if middle.size() != (m, n) {
        return Err(Error::InvalidDimension { expected: (m, n), found: middle.size() });
    }

    let network = build_network(left, middle, right);
    let source = 0;
    let sink = m + n + 1;
    let (flow, flows) = EdmondsKarp::default().solve(&network, source, sink)?;

    // left i is node 1 + i, right j is node 1 + m + j
    let mut assignment = Matrix::zeros(m, n);
    for i in 0..m {
        for j in 0..n {
            let (u, v) = (1 + i, 1 + m + j);
            assignment[(i, j)] = flows[(u, v)] - flows[(v, u)];
        }
    }

    Ok((flow, assignment))
}

// node 0 is the super source, node m + n + 1 the super sink
fn build_network<Flow>(left: &[Flow], middle: &Matrix<Flow>, right: &[Flow]) -> Matrix<Flow>
where
    Flow: NumAssign + Copy,
{
    let (m, n) = (left.len(), right.len());
    let sink = m + n + 1;
    let mut network = Matrix::zeros(m + n + 2, m + n + 2);

    for (i, &capacity) in left.iter().enumerate() {
        network[(0, 1 + i)] = capacity;
    }
    for (j, &capacity) in right.iter().enumerate() {
        network[(1 + m + j, sink)] = capacity;
    }
    for (i, row) in middle.iter_rows().enumerate() {
        for (j, &capacity) in row.iter().enumerate() {
            network[(1 + i, 1 + m + j)] = capacity;
        }
    }

    network
}
