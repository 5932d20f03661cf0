//! Johnson reweighting: shortest paths from a set of branch vertices on a
//! graph that may carry negative edge weights.
//!
//! Variables:
//!   V     = real vertex count
//!   q0    = auxiliary source, index V
//!   h[v]  = potential, dist(q0 -> v) on the augmented graph
//!   w'(e) = reduced cost of e = (u, v, w)
//!
//! Equations:
//!   Augment:   add q0 and (q0, v, 0) for every v in 0..V
//!   Potential: h = bellman_ford(q0);  detach q0
//!   Reweight:  w'(u, v) = w + h[u] - h[v] >= 0   (no negative cycle)
//!   Dijkstra:  d'[b] = dijkstra_by(b, w')        for each branch b
//!   Restore:   d[b][v] = d'[b][v] + h[v] - h[b]  if d'[b][v] is finite
//!
//! Edge weights are bounded by MAX_EDGE_WEIGHT, so w' and every reduced
//! distance fit in a Weight and the saturating arithmetic below never
//! clips. Edge weights are never mutated: w' is computed on read, so
//! running the pipeline twice on the same graph gives the same result.

use thiserror::Error;
use tracing::{debug, warn};

use super::adj_list::{Edge, Graph};
use super::bellman_ford::{bellman_ford_checked, NegativeCycle, NegativeCyclePolicy};
use super::dijkstra::dijkstra_by;
use super::distance::{Distance, Weight};
use super::invariant::{violations, NonNegative};
use super::paths::ShortestPaths;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct JohnsonConfig {
    pub negative_cycles: NegativeCyclePolicy,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JohnsonError {
    #[error("branch vertex {branch} is outside 0..{vertices}")]
    BranchOutOfRange { branch: usize, vertices: usize },
    #[error(transparent)]
    NegativeCycle(#[from] NegativeCycle),
}

/// Per-vertex potential h[v].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Potentials(Vec<Weight>);

impl Potentials {
    pub fn as_slice(&self) -> &[Weight] {
        &self.0
    }

    /// w + h[u] - h[v]
    pub fn reduced_cost(&self, edge: &Edge) -> Weight {
        edge.weight
            .saturating_add(self.0[edge.from])
            .saturating_sub(self.0[edge.to])
    }

    /// Map a reduced-cost distance from `source` back to true weight.
    pub fn restore(&self, source: usize, target: usize, reduced: Distance) -> Distance {
        match reduced {
            Distance::Finite(d) => Distance::Finite(
                d.saturating_add(self.0[target])
                    .saturating_sub(self.0[source]),
            ),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

/// Rows of true-weight shortest paths, one per branch, in branch order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertices: usize,
    rows: Vec<ShortestPaths>,
}

impl DistanceMatrix {
    pub fn new(vertices: usize, rows: Vec<ShortestPaths>) -> Self {
        Self { vertices, rows }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn branch_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, branch_row: usize) -> &ShortestPaths {
        &self.rows[branch_row]
    }

    pub fn rows(&self) -> &[ShortestPaths] {
        &self.rows
    }

    /// Distances from every branch to `v`, in branch order.
    pub fn column(&self, v: usize) -> impl Iterator<Item = Distance> + '_ {
        self.rows.iter().map(move |row| row.distances[v])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JohnsonRun {
    pub potentials: Potentials,
    pub matrix: DistanceMatrix,
}

/// Attach the auxiliary source, run Bellman-Ford from it and detach it.
pub fn potentials(
    graph: &mut Graph,
    policy: NegativeCyclePolicy,
) -> Result<Potentials, NegativeCycle> {
    let real = graph.real_vertex_count();
    let run = {
        let augmented = graph.attach_auxiliary_source();
        bellman_ford_checked(&augmented, augmented.source(), policy)?
    };
    // Every real vertex has a zero edge from q0, so each is finite.
    let h = run.paths.distances[..real]
        .iter()
        .map(|d| d.finite().unwrap_or(0))
        .collect();
    debug!(vertices = real, rounds = run.rounds, "potentials computed");
    Ok(Potentials(h))
}

pub fn johnson(
    graph: &mut Graph,
    branches: &[usize],
    config: &JohnsonConfig,
) -> Result<JohnsonRun, JohnsonError> {
    let vertices = graph.real_vertex_count();
    if let Some(&branch) = branches.iter().find(|&&b| b >= vertices) {
        return Err(JohnsonError::BranchOutOfRange { branch, vertices });
    }

    let potentials = potentials(graph, config.negative_cycles)?;

    let negative = violations(&NonNegative, graph.edges().map(|e| potentials.reduced_cost(e)));
    if negative > 0 {
        warn!(edges = negative, "reweighting left negative reduced costs; distances may be wrong");
    }

    let graph = &*graph;
    let rows = branches
        .iter()
        .map(|&branch| {
            let mut row = dijkstra_by(graph, branch, |e| potentials.reduced_cost(e));
            for (v, d) in row.distances.iter_mut().enumerate() {
                *d = potentials.restore(branch, v, *d);
            }
            row
        })
        .collect();
    debug!(vertices, branches = branches.len(), "johnson complete");

    Ok(JohnsonRun {
        potentials,
        matrix: DistanceMatrix::new(vertices, rows),
    })
}
