use crate::error::Result;
use crate::matrix::Matrix;
use crate::maximum_flow::bfs::{reachable, shortest_path};
use crate::maximum_flow::status::Status;
use crate::maximum_flow::validate;
use num_traits::NumAssign;

/// Augmenting-path maximum flow on a capacity matrix, using the shortest
/// (fewest edges) path in the residual network each round.
///
/// The solver keeps the residual matrix of its last run, which is what
/// [`EdmondsKarp::minimum_cut`] reads.
///
/// For floating point capacities the result is approximate and termination is
/// only guaranteed when every augmentation makes progress in the type's
/// precision; use [`EdmondsKarp::solve_with_limit`] to bound the work.
///
/// For integer capacities the residual entry of an edge `u -> v` can reach
/// `capacity(u, v) + capacity(v, u)`, so that sum must fit in `Flow` even when
/// the maximum flow itself does. Pick a wider type otherwise.
pub struct EdmondsKarp<Flow> {
    residual: Matrix<Flow>,
    num_augmentations: usize,
    status: Status,
}

impl<Flow> Default for EdmondsKarp<Flow> {
    fn default() -> Self {
        EdmondsKarp { residual: Matrix::default(), num_augmentations: 0, status: Status::NotSolved }
    }
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    /// Returns the maximum flow value and the flow pushed along each ordered
    /// node pair.
    ///
    /// The flow matrix records every augmentation as pushed, so an entry may be
    /// nonzero for a pair with zero capacity: flow that travelled over a
    /// residual back edge. The net flow between `u` and `v` is
    /// `flow[(u, v)] - flow[(v, u)]`.
    pub fn solve(&mut self, capacities: &Matrix<Flow>, source: usize, sink: usize) -> Result<(Flow, Matrix<Flow>)> {
        self.solve_with_limit(capacities, source, sink, usize::MAX)
    }

    /// Like [`EdmondsKarp::solve`] but performs at most `max_augmentations`
    /// augmentations and returns the (feasible, possibly not maximum) flow
    /// reached by then. [`EdmondsKarp::status`] is [`Status::AugmentationLimit`]
    /// if an augmenting path was still left.
    pub fn solve_with_limit(&mut self, capacities: &Matrix<Flow>, source: usize, sink: usize, max_augmentations: usize) -> Result<(Flow, Matrix<Flow>)> {
        let num_nodes = validate(capacities, source, sink)?;
        self.residual = capacities.clone();
        self.num_augmentations = 0;
        self.status = Status::NotSolved;

        let mut flow = Flow::zero();
        let mut flows = Matrix::zeros(num_nodes, num_nodes);
        loop {
            let path = match shortest_path(&self.residual, num_nodes, source, sink) {
                Some(path) => path,
                None => break,
            };

            // source == sink
            if path.len() < 2 {
                break;
            }

            if self.num_augmentations >= max_augmentations {
                self.status = Status::AugmentationLimit;
                break;
            }

            // calculate delta
            let mut delta = self.residual[(path[0], path[1])];
            for e in path.windows(2).skip(1) {
                let capacity = self.residual[(e[0], e[1])];
                if capacity < delta {
                    delta = capacity;
                }
            }
            if !(delta > Flow::zero()) {
                break;
            }

            // update flow
            flow += delta;
            for e in path.windows(2) {
                let (u, v) = (e[0], e[1]);
                self.residual[(u, v)] -= delta;
                self.residual[(v, u)] += delta;
                flows[(u, v)] += delta;
            }
            self.num_augmentations += 1;
            log::trace!("augmentation {}: path {:?}", self.num_augmentations, path);
        }

        if self.status == Status::NotSolved {
            self.status = Status::Optimal;
        }

        log::debug!("flow from {} to {}: {:?} after {} augmentations", source, sink, self.status, self.num_augmentations);
        Ok((flow, flows))
    }

    /// Source side of a minimum cut after the last solve: the nodes reachable
    /// from `source` in the residual network, in ascending order.
    ///
    /// Returns an empty vector unless the last solve reached
    /// [`Status::Optimal`], or if `source` is not a node of that network.
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        if self.status != Status::Optimal || source >= self.residual.rows() {
            return Vec::new();
        }

        let visited = reachable(&self.residual, source);
        (0..visited.len()).filter(|&u| visited[u]).collect()
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    #[inline]
    pub fn residual(&self) -> &Matrix<Flow> {
        &self.residual
    }
}

/// Maximum `source`-`sink` flow on `capacities`. See [`EdmondsKarp::solve`].
pub fn max_flow<Flow>(capacities: &Matrix<Flow>, source: usize, sink: usize) -> Result<(Flow, Matrix<Flow>)>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    EdmondsKarp::default().solve(capacities, source, sink)
}

/// Maximum flow with an upper bound on the number of augmentations. See
/// [`EdmondsKarp::solve_with_limit`].
pub fn max_flow_with_limit<Flow>(capacities: &Matrix<Flow>, source: usize, sink: usize, max_augmentations: usize) -> Result<(Flow, Matrix<Flow>)>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    EdmondsKarp::default().solve_with_limit(capacities, source, sink, max_augmentations)
}
