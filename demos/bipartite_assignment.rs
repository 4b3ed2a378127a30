use augmenting_flow::{max_flow_bipartite, EdmondsKarp, Matrix};

fn main() {
    env_logger::init();

    // three workers with hours available, two projects with hours needed
    let workers = [2, 1, 4];
    let projects = [3, 3];
    let skills = Matrix::from_rows(vec![vec![2, 1], vec![1, 0], vec![0, 2]]).unwrap();

    let (hours, assignment) = max_flow_bipartite(&workers, &skills, &projects).unwrap();
    println!("assigned hours:{}", hours);
    print!("{}", assignment);

    let network = Matrix::from_rows(vec![
        vec![0, 16, 13, 0, 0, 0],
        vec![0, 0, 10, 12, 0, 0],
        vec![0, 4, 0, 0, 14, 0],
        vec![0, 0, 9, 0, 0, 20],
        vec![0, 0, 0, 7, 0, 4],
        vec![0, 0, 0, 0, 0, 0],
    ])
    .unwrap();

    let mut solver = EdmondsKarp::default();
    let (flow, _) = solver.solve(&network, 0, 5).unwrap();
    println!("maximum flow:{}", flow);
    println!("minimum cut:{:?}", solver.minimum_cut(0));
}
