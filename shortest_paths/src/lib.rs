//! # Shortest Paths Crate
//!
//! Johnson reweighting for graphs with negative edge weights, and selection
//! of the vertex that is cheapest to reach from a set of branch vertices.
//!
//! ## Modules
//!
//! - `data_structures` – Indexed binary min-heap, FIFO ring buffer
//! - `graph` – Adjacency lists, FIFO Bellman-Ford, Dijkstra, Johnson
//! - `optimization` – Meeting-point selection over the distance matrix
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use shortest_paths::{find_meeting_point, Graph, JohnsonConfig, Selection};
//!
//! let mut graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 5)]).unwrap();
//! let selection = find_meeting_point(&mut graph, &[0], &JohnsonConfig::default()).unwrap();
//! assert!(matches!(selection, Selection::Found(ref p) if p.vertex == 0 && p.total == 0));
//! ```

pub mod data_structures;
pub mod graph;
pub mod optimization;

pub use graph::adj_list::{Edge, Graph, GraphError};
pub use graph::bellman_ford::{
    bellman_ford, bellman_ford_checked, BellmanFordRun, NegativeCycle, NegativeCyclePolicy,
};
pub use graph::dijkstra::{dijkstra, dijkstra_by};
pub use graph::distance::{Distance, Weight, MAX_EDGE_WEIGHT};
pub use graph::johnson::{
    johnson, potentials, DistanceMatrix, JohnsonConfig, JohnsonError, JohnsonRun, Potentials,
};
pub use graph::paths::ShortestPaths;
pub use optimization::meeting_point::{find_meeting_point, select, MeetingPoint, Selection};
