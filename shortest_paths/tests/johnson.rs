mod common;

use common::{finite, random_graph, random_graph_scaled, random_non_negative_graph, Lcg};
use shortest_paths::{
    bellman_ford, dijkstra, johnson, potentials, Distance, Graph, GraphError, JohnsonConfig,
    NegativeCyclePolicy, MAX_EDGE_WEIGHT,
};

fn assert_rows_match_bellman_ford(graph: &mut Graph, branches: &[usize], context: &str) {
    let run = johnson(graph, branches, &JohnsonConfig::default()).expect("johnson");
    for (row, &branch) in branches.iter().enumerate() {
        let direct = bellman_ford(graph, branch);
        assert!(direct.converged, "{context}: no negative cycle expected");
        assert_eq!(
            run.matrix.row(row).distances,
            direct.paths.distances,
            "{context}, branch {branch}"
        );
    }
}

#[test]
fn johnson_matches_direct_bellman_ford() {
    let mut rng = Lcg::new(11);
    for round in 0..40 {
        let vertices = 1 + rng.below(12) as usize;
        let edges = rng.below(40) as usize;
        let mut graph = random_graph(&mut rng, vertices, edges);
        let branches: Vec<usize> = (0..vertices).filter(|v| v % 3 == round % 3).collect();
        assert_rows_match_bellman_ford(&mut graph, &branches, &format!("round {round}"));
    }
}

#[test]
fn weights_at_the_bound_keep_exact_distances() {
    let m = MAX_EDGE_WEIGHT;
    let mut cancelling = Graph::from_edges(3, [(0, 1, m), (2, 1, -m), (1, 0, m)]).expect("valid");
    assert_rows_match_bellman_ford(&mut cancelling, &[0, 1, 2], "cancelling pair");
    let run = johnson(&mut cancelling, &[2], &JohnsonConfig::default()).expect("johnson");
    assert_eq!(run.matrix.row(0).distances, finite(&[0, -m, 0]));

    let mut converging = Graph::from_edges(3, [(0, 1, m), (2, 1, -m)]).expect("valid");
    assert_rows_match_bellman_ford(&mut converging, &[0, 1, 2], "converging pair");
    let run = johnson(&mut converging, &[0], &JohnsonConfig::default()).expect("johnson");
    assert_eq!(run.matrix.row(0).distance(1), Distance::Finite(m));

    let mut rng = Lcg::new(62);
    for round in 0..20 {
        let vertices = 2 + rng.below(10) as usize;
        let edges = rng.below(30) as usize;
        let mut graph = random_graph_scaled(&mut rng, vertices, edges, 1 << 29);
        let branches: Vec<usize> = (0..vertices).collect();
        assert_rows_match_bellman_ford(&mut graph, &branches, &format!("scaled round {round}"));
    }
}

#[test]
fn weights_past_the_bound_are_rejected() {
    let mut graph = Graph::new(3);
    assert_eq!(
        graph.try_add_edge(0, 1, 1 << 62),
        Err(GraphError::WeightOutOfRange { from: 0, to: 1, weight: 1 << 62 })
    );
    assert!(graph.try_add_edge(2, 1, -(MAX_EDGE_WEIGHT + 1)).is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn dijkstra_and_bellman_ford_agree_on_non_negative_weights() {
    let mut rng = Lcg::new(5);
    for _ in 0..40 {
        let vertices = 1 + rng.below(15) as usize;
        let edges = rng.below(60) as usize;
        let graph = random_non_negative_graph(&mut rng, vertices, edges, 20);
        let source = rng.below(vertices as u64) as usize;
        assert_eq!(
            dijkstra(&graph, source).distances,
            bellman_ford(&graph, source).paths.distances
        );
    }
}

#[test]
fn reduced_costs_are_non_negative() {
    let mut rng = Lcg::new(99);
    for _ in 0..30 {
        let vertices = 1 + rng.below(10) as usize;
        let edges = rng.below(30) as usize;
        let mut graph = random_graph(&mut rng, vertices, edges);
        let h = potentials(&mut graph, NegativeCyclePolicy::Reject).expect("no negative cycle");
        for edge in graph.edges() {
            assert!(h.reduced_cost(edge) >= 0, "edge {edge:?} reduced to {}", h.reduced_cost(edge));
        }
    }
}

#[test]
fn pipeline_is_idempotent() {
    let mut rng = Lcg::new(3);
    let mut graph = random_graph(&mut rng, 9, 25);
    let branches = [0, 4, 8];
    let first = johnson(&mut graph, &branches, &JohnsonConfig::default()).expect("first run");
    let second = johnson(&mut graph, &branches, &JohnsonConfig::default()).expect("second run");
    assert_eq!(first, second);
    assert_eq!(graph.vertex_count(), 9);
    assert_eq!(graph.edge_count(), 25);
}

#[test]
fn chain_beats_direct_edge() {
    let mut graph =
        Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 5)]).expect("valid");
    let run = johnson(&mut graph, &[0], &JohnsonConfig::default()).expect("johnson");
    assert_eq!(run.matrix.row(0).distances, finite(&[0, 1, 2, 3]));
    assert_eq!(run.matrix.row(0).path_to(3), Some(vec![0, 1, 2, 3]));
}

#[test]
fn paths_from_reweighted_trees_carry_true_costs() {
    let mut rng = Lcg::new(21);
    let mut graph = random_graph(&mut rng, 8, 24);
    let run = johnson(&mut graph, &[0, 5], &JohnsonConfig::default()).expect("johnson");
    for row in run.matrix.rows() {
        for target in 0..graph.vertex_count() {
            let Some(path) = row.path_to(target) else {
                assert_eq!(row.distance(target), Distance::Unreachable);
                continue;
            };
            let cost: i64 = path
                .windows(2)
                .map(|hop| {
                    graph
                        .out_edges(hop[0])
                        .iter()
                        .filter(|e| e.to == hop[1])
                        .map(|e| e.weight)
                        .min()
                        .expect("path uses an existing edge")
                })
                .sum();
            assert_eq!(row.distance(target), Distance::Finite(cost));
        }
    }
}

#[test]
fn lenient_policy_terminates_on_negative_cycle() {
    let mut graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, -2), (2, 1, 1)]).expect("valid");
    let run = johnson(&mut graph, &[0], &JohnsonConfig::default()).expect("lenient run completes");
    assert_eq!(run.matrix.branch_count(), 1);
    assert_eq!(graph.vertex_count(), 3);
}
