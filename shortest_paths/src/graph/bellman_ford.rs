//! Bellman-Ford single-source shortest paths, FIFO (queue) variant.
//!
//! Variables:
//!   V       = working vertex count
//!   dist[v] = shortest known distance from source to v
//!   Q       = FIFO of Vertex(v) tokens plus one RoundMarker
//!   N       = number of round markers consumed
//!
//! Equations:
//!   Initialise: dist[source] = 0, dist[v] = Unreachable for v != source
//!               Q = [Vertex(source), RoundMarker]
//!
//!   get Vertex(v):  for each (v, u, w):
//!                     if dist[v] + w < dist[u] { dist[u] = dist[v] + w; put Vertex(u) }
//!   get RoundMarker: N += 1
//!                    Q empty  => converged
//!                    N > V    => stop (only a negative cycle keeps relaxing this long)
//!                    else       put RoundMarker
//!
//!   A vertex is queued at most once at a time, so |Q| <= V + 1.
//!
//!   Complexity: O(V * E)

use thiserror::Error;
use tracing::{debug, warn};

use super::adj_list::Graph;
use super::distance::Distance;
use super::paths::ShortestPaths;
use crate::data_structures::queue::Queue;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Token {
    Vertex(usize),
    RoundMarker,
}

/// What to do when relaxation is still improving after V rounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NegativeCyclePolicy {
    /// Stop relaxing and keep the bounded, possibly wrong, distances.
    #[default]
    Truncate,
    /// Report [`NegativeCycle`].
    Reject,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("negative cycle reachable from vertex {vertex}: still relaxing after {rounds} rounds")]
pub struct NegativeCycle {
    /// Source of the run that hit the round bound.
    pub vertex: usize,
    pub rounds: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BellmanFordRun {
    pub paths: ShortestPaths,
    /// Round markers consumed.
    pub rounds: usize,
    /// False when the run stopped on the round bound with work pending.
    pub converged: bool,
}

/// Relax from `source` until convergence or the round bound, whichever
/// comes first.
pub fn bellman_ford(graph: &Graph, source: usize) -> BellmanFordRun {
    let v = graph.vertex_count();
    let mut paths = ShortestPaths::unreached(v, source);
    let mut queued = vec![false; v];
    let mut queue = Queue::new(v + 1);

    queue.put(Token::Vertex(source));
    queued[source] = true;
    queue.put(Token::RoundMarker);

    let mut rounds = 0;
    let mut converged = true;

    while let Some(token) = queue.get() {
        match token {
            Token::RoundMarker => {
                rounds += 1;
                if queue.is_empty() {
                    break;
                }
                if rounds > v {
                    converged = false;
                    break;
                }
                queue.put(Token::RoundMarker);
            }
            Token::Vertex(u) => {
                queued[u] = false;
                let Distance::Finite(base) = paths.distances[u] else {
                    continue;
                };
                for edge in graph.out_edges(u) {
                    let candidate = Distance::Finite(base).extend(edge.weight);
                    if candidate < paths.distances[edge.to] {
                        paths.distances[edge.to] = candidate;
                        paths.predecessors[edge.to] = Some(u);
                        if !queued[edge.to] {
                            queued[edge.to] = true;
                            queue.put(Token::Vertex(edge.to));
                        }
                    }
                }
            }
        }
    }

    if converged {
        debug!(source, rounds, "bellman-ford converged");
    } else {
        warn!(
            source,
            rounds,
            "bellman-ford hit the round bound; a negative cycle is reachable"
        );
    }

    BellmanFordRun { paths, rounds, converged }
}

/// [`bellman_ford`] with the early-termination outcome mapped through
/// `policy`.
pub fn bellman_ford_checked(
    graph: &Graph,
    source: usize,
    policy: NegativeCyclePolicy,
) -> Result<BellmanFordRun, NegativeCycle> {
    let run = bellman_ford(graph, source);
    if !run.converged && policy == NegativeCyclePolicy::Reject {
        return Err(NegativeCycle { vertex: source, rounds: run.rounds });
    }
    Ok(run)
}
