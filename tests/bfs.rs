use augmenting_flow::{bfs_shortest_path, ArgumentError, Error, Matrix};
use rstest::rstest;

#[test]
fn trivial_edge() {
    let matrix = Matrix::<f64>::from_diagonal(&[0.0, 0.0], 1.0);
    assert_eq!(bfs_shortest_path(&matrix, 0, 1).unwrap(), Some(vec![0, 1]));
}

#[test]
fn path_through_loop() {
    let mut matrix = Matrix::<f64>::zeros(4, 4);
    matrix.set(0, 1, 1.0).unwrap();
    matrix.set(1, 2, 1.0).unwrap();
    matrix.set(2, 1, 1.0).unwrap();
    matrix.set(2, 3, 1.0).unwrap();
    assert_eq!(bfs_shortest_path(&matrix, 0, 3).unwrap(), Some(vec![0, 1, 2, 3]));
}

#[test]
fn no_edges_no_path() {
    let matrix = Matrix::<f64>::zeros(3, 3);
    assert_eq!(bfs_shortest_path(&matrix, 0, 2).unwrap(), None);
}

#[rstest]
// the long way round is ignored
#[case(vec![vec![0, 1, 0, 1], vec![0, 0, 1, 0], vec![0, 0, 0, 1], vec![0, 0, 0, 0]], vec![0, 3])]
// two shortest paths, the lower index wins
#[case(vec![vec![0, 1, 1, 0], vec![0, 0, 0, 1], vec![0, 0, 0, 1], vec![0, 0, 0, 0]], vec![0, 1, 3])]
#[case(vec![vec![0, 0, 1, 1], vec![0, 0, 0, 1], vec![0, 0, 0, 1], vec![0, 0, 0, 0]], vec![0, 3])]
// negative entries are not edges
#[case(vec![vec![0, -1, 2, 0], vec![0, 0, 0, 5], vec![0, 0, 0, 1], vec![0, 0, 0, 0]], vec![0, 2, 3])]
fn fewest_edges_in_index_order(#[case] rows: Vec<Vec<i32>>, #[case] expected: Vec<usize>) {
    let matrix = Matrix::from_rows(rows).unwrap();
    assert_eq!(bfs_shortest_path(&matrix, 0, 3).unwrap(), Some(expected));
}

#[test]
fn edges_are_directed() {
    let matrix = Matrix::from_rows(vec![vec![0, 0], vec![1, 0]]).unwrap();
    assert_eq!(bfs_shortest_path(&matrix, 0, 1).unwrap(), None);
    assert_eq!(bfs_shortest_path(&matrix, 1, 0).unwrap(), Some(vec![1, 0]));
}

#[test]
fn nan_is_not_an_edge() {
    let matrix = Matrix::from_rows(vec![vec![0.0, f64::NAN], vec![0.0, 0.0]]).unwrap();
    assert_eq!(bfs_shortest_path(&matrix, 0, 1).unwrap(), None);
}

#[rstest]
#[case(0)]
#[case(2)]
fn source_equals_sink(#[case] node: usize) {
    let matrix = Matrix::new(3, 3, 1);
    assert_eq!(bfs_shortest_path(&matrix, node, node).unwrap(), Some(vec![node]));
}

#[rstest]
#[case(3, 0, 3)]
#[case(0, 7, 7)]
fn node_out_of_range(#[case] source: usize, #[case] sink: usize, #[case] bad: usize) {
    let matrix = Matrix::new(3, 3, 1);
    assert_eq!(bfs_shortest_path(&matrix, source, sink), Err(Error::InvalidArgument(ArgumentError::NodeOutOfRange { node: bad, num_nodes: 3 })));
}

#[test]
fn non_square_matrix() {
    let matrix = Matrix::new(2, 3, 1);
    assert_eq!(bfs_shortest_path(&matrix, 0, 1), Err(Error::InvalidArgument(ArgumentError::NotSquare { rows: 2, cols: 3 })));
}
