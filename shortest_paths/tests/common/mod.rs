#![allow(dead_code)]

use shortest_paths::{Distance, Graph, Weight};

pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.0 >> 33
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    pub fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + self.below((hi - lo) as u64) as i64
    }
}

/// Random graph with negative edges but no negative cycle: every weight is
/// `c + p[v] - p[u]` with `c >= 0`, so any cycle sums to a non-negative value.
pub fn random_graph(rng: &mut Lcg, vertices: usize, edges: usize) -> Graph {
    random_graph_scaled(rng, vertices, edges, 10)
}

/// [`random_graph`] with `p` in `-scale..scale` and `c` in `0..scale`, so
/// every weight is below `3 * scale` in magnitude.
pub fn random_graph_scaled(rng: &mut Lcg, vertices: usize, edges: usize, scale: i64) -> Graph {
    let p: Vec<Weight> = (0..vertices).map(|_| rng.range(-scale, scale)).collect();
    let mut graph = Graph::new(vertices);
    for _ in 0..edges {
        let u = rng.below(vertices as u64) as usize;
        let v = rng.below(vertices as u64) as usize;
        let c = rng.range(0, scale);
        graph.add_edge(u, v, c + p[v] - p[u]);
    }
    graph
}

/// Random graph with weights in `0..max`.
pub fn random_non_negative_graph(rng: &mut Lcg, vertices: usize, edges: usize, max: i64) -> Graph {
    let mut graph = Graph::new(vertices);
    for _ in 0..edges {
        let u = rng.below(vertices as u64) as usize;
        let v = rng.below(vertices as u64) as usize;
        graph.add_edge(u, v, rng.range(0, max));
    }
    graph
}

pub fn finite(values: &[Weight]) -> Vec<Distance> {
    values.iter().copied().map(Distance::Finite).collect()
}
