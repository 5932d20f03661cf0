//! Dijkstra single-source shortest paths over an indexed min-heap.
//!
//! Variables:
//!   V       = vertex count
//!   cost(e) = weight used for edge e (raw weight, or a reduced cost)
//!   H       = heap keyed by vertex, priority = dist[v]
//!
//! Equations:
//!   Initialise: H = { (v, Unreachable) | v != source } + { (source, 0) }
//!
//!   loop (u, d) = extract_min(H):
//!     d == Unreachable => u and every remaining key are unreachable; keep draining
//!     for each e = (u, v, w):
//!       if dist[u] + cost(e) < dist[v] { dist[v] = dist[u] + cost(e); decrease(H, v) }
//!
//!   Precondition: cost(e) >= 0 for every edge.
//!   Complexity: O((V + E) log V)

use super::adj_list::{Edge, Graph};
use super::distance::{Distance, Weight};
use super::paths::ShortestPaths;
use crate::data_structures::heap::IndexedMinHeap;

pub fn dijkstra(graph: &Graph, source: usize) -> ShortestPaths {
    dijkstra_by(graph, source, |edge| edge.weight)
}

/// Dijkstra reading each edge's weight through `cost`.
pub fn dijkstra_by<F>(graph: &Graph, source: usize, cost: F) -> ShortestPaths
where
    F: Fn(&Edge) -> Weight,
{
    let v = graph.vertex_count();
    let mut paths = ShortestPaths::unreached(v, source);
    let mut heap = IndexedMinHeap::with_capacity(v);

    for vertex in 0..v {
        heap.insert(vertex, paths.distances[vertex]);
    }

    while let Some((u, _)) = heap.extract_min() {
        let Distance::Finite(base) = paths.distances[u] else {
            continue;
        };
        for edge in graph.out_edges(u) {
            let candidate = Distance::Finite(base).extend(cost(edge));
            if candidate < paths.distances[edge.to] {
                paths.distances[edge.to] = candidate;
                paths.predecessors[edge.to] = Some(u);
                heap.decrease(edge.to, candidate);
            }
        }
    }

    paths
}
