pub mod error;
pub mod matrix;
pub mod maximum_flow;
pub mod queue;

pub use error::{ArgumentError, Error, Result};
pub use matrix::Matrix;
pub use maximum_flow::bfs::bfs_shortest_path;
pub use maximum_flow::bipartite::max_flow_bipartite;
pub use maximum_flow::edmonds_karp::{max_flow, max_flow_with_limit, EdmondsKarp};
pub use maximum_flow::status::Status;
