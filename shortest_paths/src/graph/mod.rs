pub mod adj_list;
pub mod bellman_ford;
pub mod dijkstra;
pub mod distance;
pub mod invariant;
pub mod johnson;
pub mod paths;
